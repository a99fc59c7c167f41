//! Wire types for the backend's JSON API
//!
//! Every response is an envelope with a `success` flag and, on failure, an
//! `error` message. The backend sends failure envelopes with HTTP 500, so
//! the body is decoded regardless of the status code.

use serde::{Deserialize, Serialize};

use ppf_core::prelude::*;
use ppf_core::{PackageRecord, SearchPair};

/// Shown when a failure envelope carries no message
pub const UNKNOWN_ERROR: &str = "Unbekannter Fehler";

/// Common `success`/`error` envelope behaviour
pub trait Envelope: Sized {
    fn success(&self) -> bool;

    fn error_message(&self) -> Option<&str>;

    /// Turn a `success: false` envelope into [`Error::Application`]
    fn into_checked(self) -> Result<Self> {
        if self.success() {
            Ok(self)
        } else {
            let message = self
                .error_message()
                .filter(|m| !m.is_empty())
                .unwrap_or(UNKNOWN_ERROR)
                .to_string();
            Err(Error::application(message))
        }
    }
}

macro_rules! impl_envelope {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Envelope for $ty {
                fn success(&self) -> bool {
                    self.success
                }

                fn error_message(&self) -> Option<&str> {
                    self.error.as_deref()
                }
            }
        )*
    };
}

/// `GET /api/products`
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsResponse {
    pub success: bool,
    #[serde(default)]
    pub products: Vec<String>,
    #[serde(default)]
    pub last_update: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `GET /api/colors/{product}`
#[derive(Debug, Clone, Deserialize)]
pub struct ColorsResponse {
    pub success: bool,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `POST /api/search` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub search_criteria: Vec<SearchPair>,
    pub veredelung_required: Vec<String>,
}

/// Echo of the criteria the backend actually searched for
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub search_criteria: Vec<SearchPair>,
}

/// `POST /api/search` response
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(default)]
    pub packages: Vec<PackageRecord>,
    #[serde(default)]
    pub search_params: Option<SearchParams>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `GET /api/refresh`
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub last_update: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl_envelope!(
    ProductsResponse,
    ColorsResponse,
    SearchResponse,
    RefreshResponse
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_envelope_becomes_application_error() {
        let resp: ColorsResponse =
            serde_json::from_str(r#"{"success": false, "error": "Sheet nicht erreichbar"}"#)
                .unwrap();

        let err = resp.into_checked().unwrap_err();
        assert!(matches!(err, Error::Application { .. }));
        assert_eq!(err.to_string(), "Sheet nicht erreichbar");
    }

    #[test]
    fn test_failure_without_message_uses_fallback() {
        let resp: RefreshResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(resp.into_checked().unwrap_err().to_string(), UNKNOWN_ERROR);
    }

    #[test]
    fn test_products_response_missing_optional_fields() {
        let resp: ProductsResponse =
            serde_json::from_str(r#"{"success": true, "products": ["Cap", "Shirt"]}"#).unwrap();
        let resp = resp.into_checked().unwrap();
        assert_eq!(resp.products, vec!["Cap", "Shirt"]);
        assert!(resp.last_update.is_none());
    }

    #[test]
    fn test_null_last_update_is_accepted() {
        let resp: ProductsResponse =
            serde_json::from_str(r#"{"success": true, "products": [], "last_update": null}"#)
                .unwrap();
        assert!(resp.last_update.is_none());
    }

    #[test]
    fn test_search_request_body_shape() {
        let req = SearchRequest {
            search_criteria: vec![SearchPair::new("Shirt", "Blau")],
            veredelung_required: vec!["Stick".to_string()],
        };

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({
                "search_criteria": [{"product": "Shirt", "color": "Blau"}],
                "veredelung_required": ["Stick"]
            })
        );
    }
}
