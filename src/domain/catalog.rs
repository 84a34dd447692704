use crate::domain::error::CatalogError;
use crate::domain::models::{ProductDetail, ProductId, Suggestion};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    // Autocomplete hits for a (trimmed, non-empty) term
    async fn search(&self, term: &str) -> Result<Vec<Suggestion>, CatalogError>;

    // Full record for the detail panel
    async fn product(&self, id: &ProductId) -> Result<ProductDetail, CatalogError>;

    fn base_url(&self) -> String;
}
