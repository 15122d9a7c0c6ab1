use thiserror::Error;

use crate::Category;

pub type Result<T> = std::result::Result<T, RouterError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    /// The category enum and the sequence table are out of sync.
    #[error("no tool sequence registered for category '{0}'")]
    MissingSequence(Category),
}
