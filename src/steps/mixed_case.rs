use crate::chain::ValidatorStep;

/// Accepts a candidate holding at least one lowercase and one uppercase letter.
///
/// Case is judged per character with Unicode case properties, so `"Éa"` passes
/// while digits and punctuation count as neither. Title-case letters such as
/// `ǅ` are neither lowercase nor uppercase, so `"ǅ"` alone is rejected even
/// though it differs from both its uppercased and lowercased forms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HasMixedCase;

impl ValidatorStep for HasMixedCase {
    fn name(&self) -> &str {
        "has_mixed_case"
    }

    fn accepts(&self, candidate: &str) -> bool {
        candidate.chars().any(char::is_lowercase) && candidate.chars().any(char::is_uppercase)
    }

    fn requirement(&self) -> String {
        "both lowercase and uppercase letters".to_string()
    }
}
