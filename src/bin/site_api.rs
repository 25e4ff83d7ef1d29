//! AWS Lambda entry point for the site API
//!
//! Adapts Lambda HTTP events to `api::route`. Configuration comes from the
//! environment (see `SiteConfig::from_env`).

use std::sync::Arc;

use chrono::Utc;
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use log::info;
use mortgage_calculator::api::{self, ApiRequest, SiteState};
use mortgage_calculator::SiteConfig;

fn to_api_request(event: &Request) -> ApiRequest {
    ApiRequest {
        method: event.method().as_str().to_string(),
        path: event.uri().path().to_string(),
        query: api::parse_query(event.uri().query().unwrap_or("")),
        body: event.body().as_ref().to_vec(),
    }
}

async fn handle(state: &SiteState, event: Request) -> Result<Response<Body>, Error> {
    let response = api::route(state, &to_api_request(&event), Utc::now());

    let resp = Response::builder()
        .status(response.status_code)
        .header("content-type", "application/json")
        .body(Body::from(response.body.to_string()))?;
    Ok(resp)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let config = SiteConfig::from_env()?;
    info!("Starting site API (currency={}, product_file={:?})", config.currency, config.product_file);
    let state = Arc::new(SiteState::from_config(config));

    run(service_fn(move |event: Request| {
        let state = Arc::clone(&state);
        async move { handle(&state, event).await }
    }))
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_with_query_string() {
        let event = lambda_http::http::Request::builder()
            .method("GET")
            .uri("https://example.com/api/mortgage?propertyPrice=1250000&interestRate=8.5&tenure=20")
            .body(Body::Empty)
            .unwrap();

        let request = to_api_request(&event);
        assert_eq!(request.method, "GET");
        assert_eq!(request.path, "/api/mortgage");
        assert_eq!(request.query.get("propertyPrice").map(String::as_str), Some("1250000"));
        assert_eq!(request.query.get("interestRate").map(String::as_str), Some("8.5"));
        assert_eq!(request.query.get("tenure").map(String::as_str), Some("20"));
        assert!(request.body.is_empty());
    }

    #[test]
    fn test_post_body_passed_through() {
        let body = r#"{"name":"Asha Rao"}"#;
        let event = lambda_http::http::Request::builder()
            .method("POST")
            .uri("https://example.com/api/contact")
            .body(Body::from(body))
            .unwrap();

        let request = to_api_request(&event);
        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/api/contact");
        assert!(request.query.is_empty());
        assert_eq!(request.body, body.as_bytes());
    }
}
