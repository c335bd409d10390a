use thiserror::Error;

pub type RcResult<T> = Result<T, RcError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RcError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
