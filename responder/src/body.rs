use std::error::Error;

use serde_json::Value;

/// The body of an outgoing response, named by how it gets rendered: empty,
/// already-textual, the message of a failure, or a value to JSON-encode.
#[derive(Debug)]
pub enum ResponseBody<T = Value> {
    Empty,
    Text(String),
    Failure(Box<dyn Error + Send + Sync>),
    Json(T),
}

impl<T> ResponseBody<T> {
    pub fn failure<E>(cause: E) -> ResponseBody<T>
    where
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        ResponseBody::Failure(cause.into())
    }
}

impl<T> From<String> for ResponseBody<T> {
    fn from(text: String) -> ResponseBody<T> {
        ResponseBody::Text(text)
    }
}

impl<T> From<&str> for ResponseBody<T> {
    fn from(text: &str) -> ResponseBody<T> {
        ResponseBody::Text(text.to_string())
    }
}

impl<T> From<()> for ResponseBody<T> {
    fn from(_: ()) -> ResponseBody<T> {
        ResponseBody::Empty
    }
}
