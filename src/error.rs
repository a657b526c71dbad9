use crate::model::FlowId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("Flow name must not be empty")]
    InvalidName,
    #[error("{0}")]
    InvalidStep(String),
    #[error("No flow with id '{0}'")]
    NotFound(FlowId),
    #[error("Step index {0} is out of range (flow has {1} steps)")]
    IndexOutOfRange(usize, usize),
    #[error("{0}")]
    Import(String),
}

pub type Result<T> = std::result::Result<T, FlowError>;
