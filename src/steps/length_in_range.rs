use crate::chain::ValidatorStep;
use unicode_segmentation::UnicodeSegmentation;

/// Default inclusive lower bound for [`LengthRange`].
pub const DEFAULT_MIN_SIZE: usize = 6;

/// Default exclusive upper bound for [`LengthRange`].
pub const DEFAULT_MAX_SIZE: usize = 12;

/// Bounds for [`LengthInRange`].
///
/// The range is half-open: `min_size` is inclusive and `max_size` is
/// exclusive, so the defaults accept lengths 6 through 11. A `max_size` of 12
/// does not admit a 12-character password.
///
/// `min_size <= max_size` is a precondition. With `min_size > max_size` the
/// step rejects every candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRange {
    pub min_size: usize,
    pub max_size: usize,
}

impl Default for LengthRange {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl LengthRange {
    pub fn contains(&self, len: usize) -> bool {
        len >= self.min_size && len < self.max_size
    }
}

/// Accepts a candidate whose length lies in `[min_size, max_size)`.
///
/// Length counts user-perceived characters (extended grapheme clusters), so
/// `"e\u{301}"` and a flag emoji each count as one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthInRange {
    range: LengthRange,
}

impl LengthInRange {
    pub fn new(range: LengthRange) -> Self {
        Self { range }
    }

    /// Custom lower bound, default upper bound.
    pub fn with_min(min_size: usize) -> Self {
        Self::new(LengthRange {
            min_size,
            ..Default::default()
        })
    }
}

impl ValidatorStep for LengthInRange {
    fn name(&self) -> &str {
        "length_in_range"
    }

    fn accepts(&self, candidate: &str) -> bool {
        self.range.contains(candidate.graphemes(true).count())
    }

    fn requirement(&self) -> String {
        format!(
            "length in [{}, {})",
            self.range.min_size, self.range.max_size
        )
    }
}
