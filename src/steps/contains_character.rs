use crate::chain::ValidatorStep;
use unicode_segmentation::UnicodeSegmentation;

/// Accepts a candidate that contains a given user-perceived character.
///
/// Matching is per grapheme cluster: `'e'` is not found in `"e\u{301}"`
/// because that pair renders as a single `é`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainsCharacter {
    grapheme: String,
}

impl ContainsCharacter {
    pub fn new(character: char) -> Self {
        Self {
            grapheme: character.to_string(),
        }
    }

    /// Build from a string holding exactly one grapheme cluster.
    ///
    /// Returns `None` for the empty string or for more than one cluster.
    pub fn from_grapheme(grapheme: &str) -> Option<Self> {
        if !is_single_grapheme(grapheme) {
            return None;
        }
        Some(Self {
            grapheme: grapheme.to_string(),
        })
    }
}

/// Whether `s` is exactly one grapheme cluster.
fn is_single_grapheme(s: &str) -> bool {
    let mut graphemes = s.graphemes(true);
    graphemes.next().is_some() && graphemes.next().is_none()
}

impl ValidatorStep for ContainsCharacter {
    fn name(&self) -> &str {
        "contains_character"
    }

    fn accepts(&self, candidate: &str) -> bool {
        candidate.graphemes(true).any(|g| g == self.grapheme)
    }

    fn requirement(&self) -> String {
        format!("the character '{}'", self.grapheme)
    }
}
