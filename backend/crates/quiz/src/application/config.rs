//! Application Configuration
//!
//! Configuration for the quiz application layer.

/// Quiz application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    /// Wrong answers a user may give before start is refused
    pub max_attempts: u32,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl QuizConfig {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

    /// Config with a custom attempt limit. Zero is rejected.
    pub fn with_max_attempts(max_attempts: u32) -> Option<Self> {
        (max_attempts >= 1).then_some(Self { max_attempts })
    }
}
