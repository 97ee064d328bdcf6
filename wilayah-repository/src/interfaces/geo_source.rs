//! Relational source trait definition.

use async_trait::async_trait;

use crate::errors::SourceError;
use wilayah_shared::GeoRow;

/// A paginated view over the village ⋈ district ⋈ city ⋈ province join.
///
/// Implementations must enumerate rows in the same order for repeated queries
/// of the same shape, otherwise offset pagination can skip or repeat rows.
#[async_trait]
pub trait GeoSource: Send + Sync {
    /// Fetch up to `limit` rows starting at `offset`.
    ///
    /// An empty vector means the offset is past the end of the join.
    async fn fetch_page(&self, limit: usize, offset: usize) -> Result<Vec<GeoRow>, SourceError>;
}
