use std::fmt;

use log::warn;

use crate::error::{Error, Result};

/// Default cap on input length, in characters.
pub const DEFAULT_MAX_LEN: usize = 100;

/// Which of the two inputs a limit violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSide {
    /// The sequence being transformed (`a`).
    Source,
    /// The sequence being produced (`b`).
    Target,
}

impl fmt::Display for InputSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSide::Source => f.write_str("source"),
            InputSide::Target => f.write_str("target"),
        }
    }
}

/// Input policy applied by [`compute_checked`](super::compute_checked)
/// before the engine runs.
///
/// The matrix grows with the product of both lengths, so callers that
/// accept untrusted input should keep a length cap in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLimits {
    /// Maximum length of either input in characters. `None` disables the check.
    pub max_len: Option<usize>,
    /// Whether two empty inputs are accepted.
    pub allow_both_empty: bool,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_len: Some(DEFAULT_MAX_LEN),
            allow_both_empty: true,
        }
    }
}

impl InputLimits {
    /// Limits with a custom length cap.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            max_len: Some(max_len),
            ..Self::default()
        }
    }

    /// No length cap.
    pub fn unbounded() -> Self {
        Self {
            max_len: None,
            ..Self::default()
        }
    }

    /// Same limits, but two empty inputs are refused.
    pub fn rejecting_empty_pair(self) -> Self {
        Self {
            allow_both_empty: false,
            ..self
        }
    }

    /// Checks both inputs against these limits.
    ///
    /// The empty-pair rule is checked first, then the source length, then
    /// the target length.
    pub fn check(&self, a: &[char], b: &[char]) -> Result<()> {
        if !self.allow_both_empty && a.is_empty() && b.is_empty() {
            warn!("rejecting edit distance request: both inputs are empty");
            return Err(Error::EmptyInputs);
        }

        if let Some(max) = self.max_len {
            for (input, len) in [(InputSide::Source, a.len()), (InputSide::Target, b.len())] {
                if len > max {
                    warn!(
                        "rejecting edit distance request: {} input has {} characters (max {})",
                        input, len, max
                    );
                    return Err(Error::InputTooLong { input, len, max });
                }
            }
        }

        Ok(())
    }
}
