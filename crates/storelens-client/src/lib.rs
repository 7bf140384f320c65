//! HTTP client for the public product catalog.
//!
//! One outbound GET per call, no retries, no caching. Responses are parsed
//! as-is; the caller owns loading/error presentation.

pub mod error;

pub use error::{Error, Result};

use storelens_types::Product;

/// The catalog this tool was built against.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// GET `{base}/products` - the full catalog as a JSON array.
    pub async fn fetch_all(&self) -> Result<Vec<Product>> {
        let body = self.get_text(&format!("{}/products", self.base_url)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// GET `{base}/products/{id}` - one product by its (opaque) identifier.
    ///
    /// The upstream answers unknown ids with a 2xx and an empty or `null`
    /// body; that maps to `Ok(None)` so callers can render a not-found
    /// state instead of a transport error.
    pub async fn fetch_one(&self, id: &str) -> Result<Option<Product>> {
        let body = self.get_text(&format!("{}/products/{}", self.base_url, id)).await?;
        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(trimmed)?))
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status { status: status.as_u16() });
        }
        Ok(response.text().await?)
    }
}
