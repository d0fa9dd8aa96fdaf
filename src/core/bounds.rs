use crate::error::ConfigError;

// 默认最短词长
pub const MIN_WORD_LEN: usize = 2;
// 默认最长词长
pub const MAX_WORD_LEN: usize = 28;

/// Range of candidate word lengths, in chars, tried at each search step.
///
/// Dictionary words outside the range are never matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordBounds {
    min: usize,
    max: usize,
}

impl Default for WordBounds {
    fn default() -> Self {
        WordBounds {
            min: MIN_WORD_LEN,
            max: MAX_WORD_LEN,
        }
    }
}

impl WordBounds {
    pub fn new(min: usize, max: usize) -> Result<Self, ConfigError> {
        if min == 0 || min > max {
            return Err(ConfigError::InvalidBounds { min, max });
        }
        Ok(WordBounds { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn contains(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}
