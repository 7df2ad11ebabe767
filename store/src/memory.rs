// In-Memory Content Store
// Keeps whole blobs in a concurrent map, addressed by content hash.
// Stands in for a remote pinning service in tests and local runs.

use dashmap::DashMap;
use log::debug;

use crate::{Blob, ContentStore, StoreError, StoreResult};

/// Derive the content address of a blob
///
/// The locator is the blake3 hash of the content bytes, hex-encoded.
pub fn content_locator(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// In-memory, content-addressed blob store
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: DashMap<String, Blob>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            blobs: DashMap::new(),
        }
    }

    /// Number of distinct blobs stored
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    /// Whether the store holds no blobs
    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

impl ContentStore for MemoryStore {
    fn put(&self, data: &[u8], content_type: &str) -> StoreResult<String> {
        let locator = content_locator(data);
        debug!(
            "stored {} bytes ({}) at {}",
            data.len(),
            content_type,
            locator
        );

        // The address covers the content only; re-storing the same bytes
        // refreshes the content type
        self.blobs.insert(
            locator.clone(),
            Blob {
                content_type: content_type.to_string(),
                data: data.to_vec(),
            },
        );
        Ok(locator)
    }

    fn get(&self, locator: &str) -> StoreResult<Blob> {
        self.blobs
            .get(locator)
            .map(|entry| entry.value().clone())
            .ok_or(StoreError::NotFound)
    }

    fn contains(&self, locator: &str) -> bool {
        self.blobs.contains_key(locator)
    }
}
