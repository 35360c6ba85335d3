//! Calling-code type-ahead.
//!
//! A fixed lookup table narrowing calling-code suggestions while the user
//! types. Purely an input convenience; the signatory schema is the gate.

/// One entry of the calling-code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallingCode {
    pub code: &'static str,
    pub country: &'static str,
}

/// Maximum number of suggestions shown at once.
pub const MAX_SUGGESTIONS: usize = 2;

pub const CALLING_CODES: &[CallingCode] = &[
    CallingCode { code: "+1", country: "United States" },
    CallingCode { code: "+33", country: "France" },
    CallingCode { code: "+44", country: "United Kingdom" },
    CallingCode { code: "+49", country: "Germany" },
    CallingCode { code: "+212", country: "Morocco" },
    CallingCode { code: "+221", country: "Senegal" },
    CallingCode { code: "+223", country: "Mali" },
    CallingCode { code: "+225", country: "Cote d'Ivoire" },
    CallingCode { code: "+226", country: "Burkina Faso" },
    CallingCode { code: "+228", country: "Togo" },
    CallingCode { code: "+229", country: "Benin" },
    CallingCode { code: "+233", country: "Ghana" },
    CallingCode { code: "+234", country: "Nigeria" },
    CallingCode { code: "+237", country: "Cameroon" },
    CallingCode { code: "+243", country: "DR Congo" },
];

/// Suggest calling codes for a partial input, capped at [`MAX_SUGGESTIONS`].
///
/// Matches on the code itself (with or without the leading `+`) or on a
/// case-insensitive country-name prefix. An empty query suggests nothing.
pub fn suggest_calling_codes(query: &str) -> Vec<&'static CallingCode> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let digits = query.strip_prefix('+').unwrap_or(query);
    let by_code = digits.chars().all(|c| c.is_ascii_digit());

    CALLING_CODES
        .iter()
        .filter(|entry| {
            if by_code {
                entry.code[1..].starts_with(digits)
            } else {
                entry.country.to_lowercase().starts_with(&query.to_lowercase())
            }
        })
        .take(MAX_SUGGESTIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_prefix_narrows_suggestions() {
        let suggestions = suggest_calling_codes("+225");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].code, "+225");
    }

    #[test]
    fn at_most_two_suggestions_are_returned() {
        assert_eq!(suggest_calling_codes("+2").len(), MAX_SUGGESTIONS);
        assert_eq!(suggest_calling_codes("2").len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn country_name_prefix_is_case_insensitive() {
        let suggestions = suggest_calling_codes("sene");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].code, "+221");
    }

    #[test]
    fn empty_query_suggests_nothing() {
        assert!(suggest_calling_codes("").is_empty());
        assert!(suggest_calling_codes("   ").is_empty());
    }
}
