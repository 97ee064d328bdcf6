//! Extractor module for the wilayah pipeline.
//!
//! Reads the relational join in fixed-size pages using offset pagination.

use std::collections::VecDeque;
use std::sync::Arc;

use futures::stream::{self, Stream};
use tracing::{debug, info};

use crate::errors::PipelineError;
use wilayah_repository::GeoSource;
use wilayah_shared::GeoRow;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Walks a `GeoSource` page by page, starting at offset 0.
///
/// The sequence is finite and not restartable: the first empty page ends it,
/// and every later call reports the end without querying the source again.
/// Any source error is returned as-is and the page is not retried.
pub struct PaginatedExtractor {
    source: Arc<dyn GeoSource>,
    page_size: usize,
    offset: usize,
    pages_read: usize,
    rows_read: usize,
    exhausted: bool,
}

impl PaginatedExtractor {
    /// Create an extractor with the default page size.
    pub fn new(source: Arc<dyn GeoSource>) -> Self {
        Self {
            source,
            page_size: DEFAULT_PAGE_SIZE,
            offset: 0,
            pages_read: 0,
            rows_read: 0,
            exhausted: false,
        }
    }

    /// Create an extractor with a custom page size.
    pub fn with_page_size(
        source: Arc<dyn GeoSource>,
        page_size: usize,
    ) -> Result<Self, PipelineError> {
        if page_size == 0 {
            return Err(PipelineError::config("page size must be greater than zero"));
        }
        Ok(Self {
            page_size,
            ..Self::new(source)
        })
    }

    /// Fetch the next page.
    ///
    /// Returns `Ok(None)` once a page comes back empty.
    pub async fn next_page(&mut self) -> Result<Option<Vec<GeoRow>>, PipelineError> {
        if self.exhausted {
            return Ok(None);
        }

        let rows = self.source.fetch_page(self.page_size, self.offset).await?;
        if rows.is_empty() {
            info!(
                pages = self.pages_read,
                rows = self.rows_read,
                "Extraction finished"
            );
            self.exhausted = true;
            return Ok(None);
        }

        debug!(offset = self.offset, rows = rows.len(), "Extracted page");
        self.pages_read += 1;
        self.rows_read += rows.len();
        self.offset += self.page_size;

        Ok(Some(rows))
    }

    /// Turn the extractor into a lazy stream of rows.
    ///
    /// Pages are fetched on demand. The stream ends after the first empty page
    /// and yields the first error it encounters.
    pub fn into_rows(self) -> impl Stream<Item = Result<GeoRow, PipelineError>> {
        stream::try_unfold(
            (self, VecDeque::<GeoRow>::new()),
            |(mut extractor, mut buffered)| async move {
                loop {
                    if let Some(row) = buffered.pop_front() {
                        return Ok::<_, PipelineError>(Some((row, (extractor, buffered))));
                    }
                    match extractor.next_page().await? {
                        Some(page) => buffered.extend(page),
                        None => return Ok::<_, PipelineError>(None),
                    }
                }
            },
        )
    }

    /// Number of non-empty pages read so far.
    pub fn pages_read(&self) -> usize {
        self.pages_read
    }

    /// Number of rows read so far.
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    /// Whether the end of the join has been reached.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}
