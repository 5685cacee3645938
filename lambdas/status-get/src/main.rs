use std::env;

use aws_lambda_events::apigw::ApiGatewayProxyRequest;
use http::header::{HeaderValue, CACHE_CONTROL};
use http::HeaderMap;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use responder::{Responder, ResponseBody};
use serde::Serialize;

#[derive(Serialize)]
struct Status {
    status: &'static str,
    region: String,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // required to enable CloudWatch error logging by the runtime
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();

    let mut overrides = HeaderMap::new();
    overrides.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    let responder_ref = &Responder::new(overrides);

    run(service_fn(
        move |event: LambdaEvent<ApiGatewayProxyRequest>| async move {
            tracing::info!("Handling request {}", event.context.request_id);

            let status = Status {
                status: "ok",
                region: env::var("AWS_REGION").unwrap_or_default(),
            };

            responder_ref
                .ok(ResponseBody::Json(status))
                .map_err(Error::from)
        },
    ))
    .await?;
    Ok(())
}
