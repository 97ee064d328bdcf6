//! Test doubles shared by the pipeline tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use wilayah_repository::{GeoSource, SearchEngineClient, SearchError, SourceError};
use wilayah_shared::{CollectionSchema, GeoRow, SearchParams, WilayahDocument};

/// Row `i` of a synthetic hierarchy: ten villages per district, ten districts per city.
pub fn geo_row(i: usize) -> GeoRow {
    let district = i / 10;
    let city = district / 10;
    GeoRow {
        village_id: format!("V{:06}", i),
        village_name: format!("Desa {}", i),
        district_id: format!("D{:04}", district),
        district_name: format!("Kecamatan {}", district),
        city_id: format!("C{:03}", city),
        city_name: format!("Kota {}", city),
        province_id: "32".to_string(),
        province_name: "Jawa Barat".to_string(),
    }
}

/// In-memory search engine keyed by collection name and document id.
#[derive(Default)]
pub struct MockSearchEngine {
    pub collections: Mutex<HashMap<String, CollectionSchema>>,
    pub documents: Mutex<HashMap<String, WilayahDocument>>,
    pub upsert_calls: AtomicUsize,
    /// Ids whose upsert fails.
    pub failing_ids: HashSet<String>,
    /// Error returned by `retrieve_collection` instead of looking the collection up.
    pub retrieve_error: Option<SearchError>,
    /// Error returned by `create_collection`.
    pub create_error: Option<SearchError>,
}

impl MockSearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(ids: impl IntoIterator<Item = String>) -> Self {
        Self {
            failing_ids: ids.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn document_ids(&self) -> HashSet<String> {
        self.documents.lock().unwrap().keys().cloned().collect()
    }

    pub fn upsert_calls(&self) -> usize {
        self.upsert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SearchEngineClient for MockSearchEngine {
    async fn retrieve_collection(&self, name: &str) -> Result<CollectionSchema, SearchError> {
        if let Some(err) = &self.retrieve_error {
            return Err(err.clone());
        }
        self.collections
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| SearchError::collection_not_found(name))
    }

    async fn create_collection(&self, schema: &CollectionSchema) -> Result<(), SearchError> {
        if let Some(err) = &self.create_error {
            return Err(err.clone());
        }
        let mut collections = self.collections.lock().unwrap();
        if collections.contains_key(&schema.name) {
            return Err(SearchError::collection_exists(schema.name.as_str()));
        }
        collections.insert(schema.name.clone(), schema.clone());
        Ok(())
    }

    async fn retrieve_document(
        &self,
        _collection: &str,
        id: &str,
    ) -> Result<Option<WilayahDocument>, SearchError> {
        Ok(self.documents.lock().unwrap().get(id).cloned())
    }

    async fn upsert_document(
        &self,
        _collection: &str,
        document: &WilayahDocument,
    ) -> Result<(), SearchError> {
        self.upsert_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_ids.contains(&document.id) {
            return Err(SearchError::index(format!("rejected {}", document.id)));
        }
        self.documents
            .lock()
            .unwrap()
            .insert(document.id.clone(), document.clone());
        Ok(())
    }

    async fn search(
        &self,
        _collection: &str,
        _params: &SearchParams,
    ) -> Result<Value, SearchError> {
        Ok(json!({ "found": 0, "hits": [] }))
    }

    async fn health_check(&self) -> Result<bool, SearchError> {
        Ok(true)
    }
}

/// A `GeoSource` over a fixed vector of rows, recording every page request.
pub struct VecGeoSource {
    pub rows: Vec<GeoRow>,
    pub requests: Mutex<Vec<(usize, usize)>>,
    /// Offset at which `fetch_page` fails.
    pub fail_at_offset: Option<usize>,
}

impl VecGeoSource {
    pub fn new(count: usize) -> Self {
        Self {
            rows: (0..count).map(geo_row).collect(),
            requests: Mutex::new(Vec::new()),
            fail_at_offset: None,
        }
    }

    pub fn requests(&self) -> Vec<(usize, usize)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GeoSource for VecGeoSource {
    async fn fetch_page(&self, limit: usize, offset: usize) -> Result<Vec<GeoRow>, SourceError> {
        self.requests.lock().unwrap().push((limit, offset));
        if self.fail_at_offset == Some(offset) {
            return Err(SourceError::query("disk I/O error"));
        }
        Ok(self.rows.iter().skip(offset).take(limit).cloned().collect())
    }
}
