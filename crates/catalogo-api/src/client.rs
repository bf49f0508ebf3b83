// Async HTTP client for the product catalog API.
//
// One shared `reqwest::Client` bound to a base URL that callers may swap
// between requests. The typed endpoint helpers at the bottom are thin
// wrappers over the generic JSON verbs.

use std::sync::{PoisonError, RwLock};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::{CreateProductBody, ProductDto, ProductsPage, UpdateProductBody};
use crate::transport::TransportConfig;

// ── Error response shape ─────────────────────────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default, alias = "msg", alias = "error")]
    message: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the product catalog REST API.
///
/// Every request resolves its path against the base URL current at call
/// time, so [`set_base_url`](Self::set_base_url) takes effect on the next
/// request without rebuilding the client.
pub struct ProductsClient {
    http: reqwest::Client,
    base_url: RwLock<Url>,
}

impl ProductsClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client from a base URL and transport config.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url: RwLock::new(base_url),
        }
    }

    /// The base URL requests are currently resolved against.
    pub fn base_url(&self) -> Url {
        self.base_url
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the base URL used by subsequent requests.
    pub fn set_base_url(&self, url: Url) {
        *self
            .base_url
            .write()
            .unwrap_or_else(PoisonError::into_inner) = url;
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Append `segments` to the base URL, one path segment each.
    ///
    /// Every segment is percent-encoded as a whole (`/` becomes `%2F`), so
    /// identifiers coming from a barcode scan cannot escape the collection
    /// path. `.` and `..` are rejected outright.
    fn url(&self, segments: &[&str]) -> Result<Url, Error> {
        if let Some(bad) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
            return Err(Error::InvalidPathSegment((*bad).to_owned()));
        }

        let mut url = self.base_url();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, Error> {
        let url = self.url(segments)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        handle_response(resp).await
    }

    pub async fn get_with_params<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(segments)?;
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        handle_response(resp).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(segments)?;
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        handle_response(resp).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(segments)?;
        debug!("PUT {url}");

        let resp = self.http.put(url).json(body).send().await?;
        handle_response(resp).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, Error> {
        let url = self.url(segments)?;
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        handle_response(resp).await
    }

    // ── Products ─────────────────────────────────────────────────────

    /// `GET {base}?page=&itemsPerPage=&active=`
    pub async fn list_products(
        &self,
        page: u32,
        items_per_page: u32,
        active: bool,
    ) -> Result<ProductsPage, Error> {
        self.get_with_params(
            &[],
            &[
                ("page", page.to_string()),
                ("itemsPerPage", items_per_page.to_string()),
                ("active", active.to_string()),
            ],
        )
        .await
    }

    /// `GET {base}/{id}`
    pub async fn get_product(&self, id: &str) -> Result<ProductDto, Error> {
        self.get(&[id]).await
    }

    /// `POST {base}`
    pub async fn create_product(&self, body: &CreateProductBody) -> Result<ProductDto, Error> {
        self.post(&[], body).await
    }

    /// `PUT {base}/{id}`
    pub async fn update_product(
        &self,
        id: &str,
        body: &UpdateProductBody,
    ) -> Result<ProductDto, Error> {
        self.put(&[id], body).await
    }

    /// `DELETE {base}/{id}`, returning the deleted product.
    pub async fn delete_product(&self, id: &str) -> Result<ProductDto, Error> {
        self.delete(&[id]).await
    }
}

// ── Response handling ────────────────────────────────────────────────

async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
    let status = resp.status();
    if !status.is_success() {
        return Err(parse_error(status, resp).await);
    }

    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| Error::Deserialization {
        message: format!("{e} (body preview: {:?})", preview(&body)),
        body,
    })
}

async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
    let raw = resp.text().await.unwrap_or_default();

    let message = serde_json::from_str::<ErrorResponse>(&raw)
        .ok()
        .and_then(|e| e.message)
        .unwrap_or_else(|| {
            if raw.is_empty() {
                status.to_string()
            } else {
                preview(&raw)
            }
        });

    Error::Http {
        status: status.as_u16(),
        message,
    }
}

fn preview(body: &str) -> String {
    body.chars().take(200).collect()
}
