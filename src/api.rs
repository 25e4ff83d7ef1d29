//! HTTP routing for the site backend, independent of the Lambda transport
//!
//! Routes:
//! - `POST /api/contact` - lead submission
//! - `GET /api/mortgage` - calculator evaluation from query parameters
//! - `GET /api/product` - showcased product view

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde_json::{json, Value};

use crate::calculator::{CalculatorInputs, InputField};
use crate::config::SiteConfig;
use crate::lead::{submit_lead, LeadSink, LogLeadSink};
use crate::product::{ProductSource, ProductView};

/// Long-lived collaborators shared by every request
pub struct SiteState {
    pub config: SiteConfig,
    pub leads: Box<dyn LeadSink>,
    pub products: Box<dyn ProductSource>,
}

impl SiteState {
    /// Log-backed lead sink and the product source named in `config`
    pub fn from_config(config: SiteConfig) -> Self {
        let products = config.product_source();
        Self {
            config,
            leads: Box::new(LogLeadSink),
            products,
        }
    }
}

/// Transport-neutral request
#[derive(Debug, Clone, Default)]
pub struct ApiRequest {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub body: Vec<u8>,
}

/// Status code and JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status_code: u16,
    pub body: Value,
}

impl ApiResponse {
    fn ok(body: Value) -> Self {
        Self { status_code: 200, body }
    }

    fn error(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            body: json!({ "status": "error", "message": message.into() }),
        }
    }
}

/// Query keys of the mortgage route, in form order
const MORTGAGE_PARAMS: [(&str, InputField); 5] = [
    ("propertyPrice", InputField::PropertyPrice),
    ("downPayment", InputField::DownPayment),
    ("interestRate", InputField::InterestRate),
    ("tenure", InputField::TenureYears),
    ("monthlyIncome", InputField::MonthlyIncome),
];

pub fn route(state: &SiteState, request: &ApiRequest, now: DateTime<Utc>) -> ApiResponse {
    debug!("{} {}", request.method, request.path);
    let path = request.path.trim_end_matches('/');

    match (request.method.to_ascii_uppercase().as_str(), path) {
        ("POST", "/api/contact") => contact(state, request, now),
        ("GET", "/api/mortgage") => mortgage(state, request),
        ("GET", "/api/product") => product(state),
        _ => ApiResponse::error(404, "Not found"),
    }
}

fn contact(state: &SiteState, request: &ApiRequest, now: DateTime<Utc>) -> ApiResponse {
    let outcome = submit_lead(&request.body, state.leads.as_ref(), now);
    match serde_json::to_value(&outcome.reply) {
        Ok(body) => ApiResponse {
            status_code: outcome.status_code,
            body,
        },
        Err(_) => ApiResponse::error(500, "Internal server error"),
    }
}

fn mortgage(state: &SiteState, request: &ApiRequest) -> ApiResponse {
    let mut inputs = CalculatorInputs::default();
    for (key, field) in MORTGAGE_PARAMS {
        let Some(text) = request.query.get(key) else {
            continue;
        };
        if !inputs.apply_text(field, text) {
            return ApiResponse::error(400, format!("Invalid number for '{}'", key));
        }
    }

    match inputs.evaluate(&state.config.currency) {
        Ok(view) => match serde_json::to_value(&view) {
            Ok(body) => ApiResponse::ok(body),
            Err(_) => ApiResponse::error(500, "Internal server error"),
        },
        Err(e) => {
            warn!("Rejected calculator inputs: {}", e);
            ApiResponse::error(400, e.to_string())
        }
    }
}

fn product(state: &SiteState) -> ApiResponse {
    let view = ProductView::load(state.products.as_ref());
    match serde_json::to_value(&view) {
        Ok(body) => ApiResponse::ok(body),
        Err(_) => ApiResponse::error(500, "Internal server error"),
    }
}

/// Parse a raw query string such as `a=1&b=2`, keeping the first value of each key
///
/// No percent-decoding beyond `+` as space; calculator values are plain numbers.
pub fn parse_query(query: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        params
            .entry(key.replace('+', " "))
            .or_insert_with(|| value.replace('+', " "));
    }
    params
}
