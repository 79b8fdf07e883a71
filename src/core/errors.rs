use std::fmt;

#[derive(Debug, PartialEq)]
pub enum FeedError {
    /// Referenced post/story/suggestion does not exist. Policy: the
    /// dispatcher ignores it silently, no user-visible effect.
    NotFound(String),
    /// Rejected input (empty caption, missing image, empty profile
    /// fields). Policy: no mutation, caller keeps its form state.
    Validation(String),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            FeedError::Validation(msg) => write!(f, "Invalid: {}", msg),
        }
    }
}

impl std::error::Error for FeedError {}
