use crate::chain::ValidatorStep;

/// Accepts any non-empty candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotEmpty;

impl ValidatorStep for NotEmpty {
    fn name(&self) -> &str {
        "not_empty"
    }

    fn accepts(&self, candidate: &str) -> bool {
        !candidate.is_empty()
    }

    fn requirement(&self) -> String {
        "a non-empty password".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_string() {
        assert!(!NotEmpty.accepts(""));
    }

    #[test]
    fn accepts_whitespace() {
        assert!(NotEmpty.accepts(" "));
    }
}
