use thiserror::Error;

use crate::{root_finder::ConvergenceError, InvalidRating};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("duplicate subject: {0}")]
    DuplicateSubject(String),
    #[error("unknown subject: {0}")]
    UnknownSubject(String),
    #[error("subject rated on a different scale: {0}")]
    MismatchedScale(String),
    #[error("{participants} participants, but {ranks} ranks")]
    MismatchedInput { participants: usize, ranks: usize },
    #[error(transparent)]
    InvalidRating(#[from] InvalidRating),
    #[error(transparent)]
    Convergence(#[from] ConvergenceError),
}
