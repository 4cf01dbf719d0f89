use crate::core::employee::decide::DecideError;
use crate::core::employee::validation::FieldErrors;
use crate::core::ports::GatewayError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Domain(#[from] DecideError),

    #[error("employee form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),

    #[error("unexpected: {0}")]
    Unexpected(String),
}
