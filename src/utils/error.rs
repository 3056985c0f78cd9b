use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("factorial input must be a valid integer: \"{value}\"")]
    InvalidIntegerFormat { value: String },

    #[error("the number list cannot be empty")]
    EmptyInput,

    #[error("invalid value in list: \"{segment}\"")]
    InvalidNumberFormat { segment: String },

    #[error("factorial is not defined for negative numbers")]
    NegativeInput,

    #[error("number too large for factorial computation (maximum is 20)")]
    InputTooLarge,

    #[error("cannot sum an empty array")]
    EmptyArray,

    #[error("compute module failed to initialize: {reason}")]
    ModuleUnavailable { reason: String },
}

pub type Result<T> = std::result::Result<T, CalcError>;
