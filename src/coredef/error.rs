use std::{collections::TryReserveError, error::Error, fmt::Display};

use super::types::Verification;

#[derive(Clone, Debug, PartialEq)]
pub enum StatusCode {
    Ok,

    MemoryError,
    InvalidPosition,
    VerificationFailed(Verification),
    IOError,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Status {
    pub code: StatusCode,
    pub err: String,
}

impl Default for Status {
    fn default() -> Self {
        Status {
            code: StatusCode::Ok,
            err: String::new(),
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl Error for Status {}

impl Status {
    pub fn new(code: StatusCode, msg: &str) -> Self {
        let err = format!("{:?}: [{}]", code, msg);
        Status { code, err }
    }
}

/// Global result type for the project
pub type Result<T> = std::result::Result<T, Status>;

pub fn err<T>(code: StatusCode, msg: &str) -> Result<T> {
    Err(Status::new(code, msg))
}

impl From<std::io::Error> for Status {
    fn from(err: std::io::Error) -> Self {
        Self::new(StatusCode::IOError, &err.to_string())
    }
}

impl From<TryReserveError> for Status {
    fn from(err: TryReserveError) -> Self {
        Self::new(StatusCode::MemoryError, &err.to_string())
    }
}
