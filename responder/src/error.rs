use std::error::Error;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug)]
pub enum ResponderError {
    Serialize(serde_json::Error),
    InvalidHeaderName(String),
    InvalidHeaderValue(String),
}

impl Error for ResponderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ResponderError::Serialize(cause) => Some(cause),
            _ => None,
        }
    }
}

impl Display for ResponderError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            ResponderError::Serialize(cause) => {
                write!(f, "serializing response body: {}", cause)
            }
            ResponderError::InvalidHeaderName(name) => {
                write!(f, "`{}` is not a valid header name!", name)
            }
            ResponderError::InvalidHeaderValue(value) => {
                write!(f, "`{}` is not a valid header value!", value)
            }
        }
    }
}
