// Content-Addressed Metadata Store
// Blob storage for token images and metadata documents. The registry
// never talks to this crate; it records the locators produced here and
// nothing else.
//
// Module Structure:
// - error: store error type
// - memory: in-memory content-addressed backend
// - metadata: token metadata documents and upload helpers

mod error;
mod memory;
mod metadata;

pub use error::*;
pub use memory::*;
pub use metadata::*;

/// A stored blob together with its content type
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Blob {
    /// MIME content type supplied at upload
    pub content_type: String,
    /// Raw content bytes
    pub data: Vec<u8>,
}

/// Abstract blob store interface
///
/// Implementations derive the locator from the content, so storing the
/// same bytes twice yields the same locator.
pub trait ContentStore: Send + Sync {
    /// Store `data` and return its locator
    fn put(&self, data: &[u8], content_type: &str) -> StoreResult<String>;

    /// Fetch the blob at `locator`
    fn get(&self, locator: &str) -> StoreResult<Blob>;

    /// Whether a blob exists at `locator`
    fn contains(&self, locator: &str) -> bool;
}
