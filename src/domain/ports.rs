use crate::domain::model::PlaceRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

/// One outbound text search.
#[derive(Debug, Clone, Copy)]
pub struct TextSearch<'a> {
    pub text_query: &'a str,
    pub api_key: &'a str,
    pub field_mask: &'a str,
}

#[async_trait]
pub trait PlacesClient: Send + Sync {
    /// Issues exactly one provider request and returns its places in provider order.
    async fn search_text(&self, request: TextSearch<'_>) -> Result<Vec<PlaceRecord>>;
}
