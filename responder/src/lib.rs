//! Response formatting for Lambda functions behind an API Gateway proxy
//! integration. A [`Responder`] captures a merged header set once and turns
//! each outgoing body into an `ApiGatewayProxyResponse`.

mod body;
mod error;
mod headers;

pub use body::ResponseBody;
pub use error::ResponderError;
pub use headers::{build_headers, default_headers};

use aws_lambda_events::apigw::ApiGatewayProxyResponse;
use aws_lambda_events::encodings::Body;
use http::HeaderMap;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct Responder {
    headers: HeaderMap,
}

impl Responder {
    /// Captures the default header set with `overrides` merged on top. For
    /// each overridden key, the first value replaces the default sequence
    /// and any remaining values for that key are appended after it.
    pub fn new(overrides: HeaderMap) -> Responder {
        let mut headers = headers::default_headers();
        for key in overrides.keys() {
            let mut values = overrides.get_all(key).iter();
            if let Some(first) = values.next() {
                headers.insert(key.clone(), first.clone());
            }
            for value in values {
                headers.append(key.clone(), value.clone());
            }
        }
        Responder { headers }
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Renders `body` to text and packages it with `status_code` and the
    /// captured header set. The status code is passed through as given.
    pub fn respond<T>(
        &self,
        status_code: i64,
        body: ResponseBody<T>,
    ) -> Result<ApiGatewayProxyResponse, ResponderError>
    where
        T: Serialize,
    {
        let text = match body {
            ResponseBody::Empty => String::new(),
            ResponseBody::Text(text) => text,
            ResponseBody::Failure(cause) => cause.to_string(),
            ResponseBody::Json(value) => {
                serde_json::to_string(&value).map_err(ResponderError::Serialize)?
            }
        };

        Ok(ApiGatewayProxyResponse {
            status_code,
            multi_value_headers: self.headers.clone(),
            body: Some(Body::Text(text)),
            ..ApiGatewayProxyResponse::default()
        })
    }

    pub fn ok<T>(&self, body: ResponseBody<T>) -> Result<ApiGatewayProxyResponse, ResponderError>
    where
        T: Serialize,
    {
        self.respond(200, body)
    }

    pub fn created<T>(
        &self,
        body: ResponseBody<T>,
    ) -> Result<ApiGatewayProxyResponse, ResponderError>
    where
        T: Serialize,
    {
        self.respond(201, body)
    }

    pub fn bad_request<T>(
        &self,
        body: ResponseBody<T>,
    ) -> Result<ApiGatewayProxyResponse, ResponderError>
    where
        T: Serialize,
    {
        self.respond(400, body)
    }

    pub fn server_error<T>(
        &self,
        body: ResponseBody<T>,
    ) -> Result<ApiGatewayProxyResponse, ResponderError>
    where
        T: Serialize,
    {
        self.respond(500, body)
    }
}

impl Default for Responder {
    fn default() -> Responder {
        Responder::new(HeaderMap::new())
    }
}
