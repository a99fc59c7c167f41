//! reqwest-backed implementation of the backend services

use std::time::Duration;

use chrono::NaiveDateTime;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

use ppf_core::prelude::*;
use ppf_core::{parse_last_update, FinishingOption, SearchPair};

use crate::protocol::{
    ColorsResponse, Envelope, ProductsResponse, RefreshResponse, SearchRequest, SearchResponse,
};
use crate::services::{CatalogService, ProductCatalog, SearchOutcome, SearchService};

/// HTTP client for one backend instance
#[derive(Debug, Clone)]
pub struct HttpFinderClient {
    http: Client,
    base_url: Url,
}

impl HttpFinderClient {
    /// Create a client for `base_url` (e.g. `http://localhost:5001`).
    ///
    /// `timeout` of `None` waits forever, like the browser's fetch.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|_| Error::invalid_url(base_url))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::invalid_url(base_url.as_str()));
        }

        let mut builder = Client::builder().user_agent(concat!("ppf/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL plus percent-encoded path segments
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| Error::invalid_url(self.base_url.as_str()))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    async fn get<T: DeserializeOwned + Envelope>(&self, url: Url) -> Result<T> {
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::network(e.to_string()))?;
        decode(response).await
    }
}

/// Decode an envelope from any status code; non-JSON bodies are transport failures
async fn decode<T: DeserializeOwned + Envelope>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::network(e.to_string()))?;

    match serde_json::from_str::<T>(&body) {
        Ok(envelope) => envelope.into_checked(),
        Err(e) if status.is_success() => {
            warn!("Undecodable response body ({}): {}", status, e);
            Err(Error::network(format!("Ungültige Antwort vom Server: {}", e)))
        }
        Err(_) => Err(Error::network(format!("HTTP {}", status))),
    }
}

fn last_update(raw: Option<&str>) -> Option<NaiveDateTime> {
    let raw = raw?;
    let parsed = parse_last_update(raw);
    if parsed.is_none() {
        warn!("Ignoring unparseable last_update: {:?}", raw);
    }
    parsed
}

impl CatalogService for HttpFinderClient {
    async fn products(&self) -> Result<ProductCatalog> {
        let url = self.endpoint(&["api", "products"])?;
        let resp: ProductsResponse = self.get(url).await?;
        info!("Loaded {} products", resp.products.len());

        Ok(ProductCatalog {
            last_update: last_update(resp.last_update.as_deref()),
            products: resp.products,
        })
    }

    async fn colors(&self, product: &str) -> Result<Vec<String>> {
        let url = self.endpoint(&["api", "colors", product])?;
        let resp: ColorsResponse = self.get(url).await?;
        debug!("Loaded {} colors for {:?}", resp.colors.len(), product);
        Ok(resp.colors)
    }

    async fn refresh(&self) -> Result<Option<NaiveDateTime>> {
        let url = self.endpoint(&["api", "refresh"])?;
        let resp: RefreshResponse = self.get(url).await?;
        if let Some(message) = resp.message.as_deref() {
            info!("Refresh: {}", message);
        }
        Ok(last_update(resp.last_update.as_deref()))
    }
}

impl SearchService for HttpFinderClient {
    async fn search(
        &self,
        criteria: &[SearchPair],
        finishing: &[FinishingOption],
    ) -> Result<SearchOutcome> {
        let url = self.endpoint(&["api", "search"])?;
        let body = SearchRequest {
            search_criteria: criteria.to_vec(),
            veredelung_required: finishing.iter().map(|f| f.as_str().to_string()).collect(),
        };

        debug!("POST {} ({} criteria)", url, body.search_criteria.len());
        let response = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::network(e.to_string()))?;
        let resp: SearchResponse = decode(response).await?;
        info!("Search returned {} packages", resp.packages.len());

        Ok(SearchOutcome {
            packages: resp.packages,
            criteria: resp
                .search_params
                .map(|p| p.search_criteria)
                .unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> HttpFinderClient {
        HttpFinderClient::new(&server.uri(), Some(Duration::from_secs(5))).unwrap()
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(matches!(
            HttpFinderClient::new("not a url", None),
            Err(Error::InvalidUrl { .. })
        ));
        assert!(matches!(
            HttpFinderClient::new("ftp://example.com", None),
            Err(Error::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_endpoint_encodes_product_segment() {
        let client = HttpFinderClient::new("http://localhost:5001/finder/", None).unwrap();
        let url = client
            .endpoint(&["api", "colors", "T-Shirt Premium/Bio"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5001/finder/api/colors/T-Shirt%20Premium%2FBio"
        );
    }

    #[tokio::test]
    async fn test_products_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/products"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "products": ["Cap", "Shirt"],
                "last_update": "2024-05-01T12:34:56.123456"
            })))
            .mount(&server)
            .await;

        let catalog = client_for(&server).await.products().await.unwrap();
        assert_eq!(catalog.products, vec!["Cap", "Shirt"]);
        assert!(catalog.last_update.is_some());
    }

    #[tokio::test]
    async fn test_application_failure_with_500_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/products"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "success": false,
                "error": "Keine Google API Credentials gefunden!"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).await.products().await.unwrap_err();
        assert!(matches!(err, Error::Application { .. }));
        assert_eq!(err.to_string(), "Keine Google API Credentials gefunden!");
    }

    #[tokio::test]
    async fn test_non_json_error_is_network_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/refresh"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let err = client_for(&server).await.refresh().await.unwrap_err();
        assert!(matches!(err, Error::Network { .. }));
        assert!(err.to_string().contains("502"));
    }

    #[tokio::test]
    async fn test_colors_uses_encoded_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/colors/Polo%20Shirt"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "colors": ["Egal", "Blau", "Rot"]
            })))
            .mount(&server)
            .await;

        let colors = client_for(&server)
            .await
            .colors("Polo Shirt")
            .await
            .unwrap();
        assert_eq!(colors, vec!["Egal", "Blau", "Rot"]);
    }

    #[tokio::test]
    async fn test_search_posts_criteria_and_finishing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/search"))
            .and(body_json(json!({
                "search_criteria": [{"product": "Shirt", "color": "Blau"}],
                "veredelung_required": ["Siebdruck", "Stick"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "packages": [{
                    "nummer": "1017",
                    "element": "Probepaket 1017",
                    "status": "Im Lager",
                    "produkte": [{"produkt": "Shirt", "groesse": "L", "farbe": "Blau"}],
                    "veredelungen": ["Siebdruck", "Stick"]
                }],
                "search_params": {"search_criteria": [{"product": "Shirt", "color": "Blau"}]}
            })))
            .mount(&server)
            .await;

        let outcome = client_for(&server)
            .await
            .search(
                &[SearchPair::new("Shirt", "Blau")],
                &[FinishingOption::ScreenPrint, FinishingOption::Embroidery],
            )
            .await
            .unwrap();

        assert_eq!(outcome.packages.len(), 1);
        assert_eq!(outcome.packages[0].number.as_deref(), Some("1017"));
        assert_eq!(outcome.criteria, vec![SearchPair::new("Shirt", "Blau")]);
    }

    #[tokio::test]
    async fn test_refresh_returns_last_update() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/refresh"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Daten erfolgreich aktualisiert",
                "last_update": "2024-06-02T09:15:00"
            })))
            .mount(&server)
            .await;

        let ts = client_for(&server).await.refresh().await.unwrap();
        assert_eq!(
            ppf_core::format_last_update(ts.as_ref()),
            "02.06.2024, 09:15:00"
        );
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_failure() {
        // Port 9 (discard) is not expected to have an HTTP listener
        let client = HttpFinderClient::new("http://127.0.0.1:9", Some(Duration::from_secs(2)))
            .unwrap();
        let err = client.products().await.unwrap_err();
        assert!(matches!(err, Error::Network { .. }));
    }
}
