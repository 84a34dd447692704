use crate::domain::{
    catalog::ProductCatalog,
    error::CatalogError,
    models::{ProductDetail, ProductId, Suggestion},
};
use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Catalog backed by the JSON-over-HTTP products API.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    base: Url,
}

impl HttpCatalog {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CatalogError> {
        let base = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| CatalogError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(CatalogError::InvalidUrl(base_url.to_string()));
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::ClientInit(e.to_string()))?;
        Ok(Self { client, base })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, CatalogError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| CatalogError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
        context: &str,
    ) -> Result<T, CatalogError> {
        tracing::debug!(%url, ?query, "catalog request");
        let response = self.client.get(url.clone()).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                code: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| CatalogError::Decode {
            context: context.to_string(),
            source,
        })
    }
}

#[async_trait]
impl ProductCatalog for HttpCatalog {
    async fn search(&self, term: &str) -> Result<Vec<Suggestion>, CatalogError> {
        let url = self.endpoint(&["products"])?;
        self.get_json(url, &[("search", term)], "product search")
            .await
    }

    async fn product(&self, id: &ProductId) -> Result<ProductDetail, CatalogError> {
        let url = self.endpoint(&["products", &id.0])?;
        self.get_json(url, &[], "product detail").await
    }

    fn base_url(&self) -> String {
        self.base.as_str().trim_end_matches('/').to_string()
    }
}

#[cfg(test)]
#[path = "http_catalog_tests.rs"]
mod tests;
