// Token Metadata Documents
// The JSON document a caller composes and uploads before minting. The
// registry only ever sees the locator returned here.

use serde::{Deserialize, Serialize};

use crate::{ContentStore, StoreResult};

/// Content type recorded for metadata documents
pub const METADATA_CONTENT_TYPE: &str = "application/json";

/// Attribute value types for token metadata
///
/// Serialized untagged, so documents carry plain JSON values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// String value
    String(String),

    /// Numeric value (i64)
    Number(i64),

    /// Boolean value
    Boolean(bool),
}

/// A single display attribute
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenAttribute {
    /// Attribute name shown by galleries
    pub trait_type: String,

    /// Attribute value
    pub value: AttributeValue,
}

impl TokenAttribute {
    /// Create a new attribute
    pub fn new(trait_type: String, value: AttributeValue) -> Self {
        Self { trait_type, value }
    }
}

/// Off-ledger token metadata document
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Token name
    pub name: String,

    /// Token description
    pub description: String,

    /// Locator or URL of the token image
    pub image: String,

    /// Display attributes, possibly empty
    #[serde(default)]
    pub attributes: Vec<TokenAttribute>,
}

impl TokenMetadata {
    /// Create a metadata document with no attributes
    pub fn new(name: String, description: String, image: String) -> Self {
        Self {
            name,
            description,
            image,
            attributes: Vec::new(),
        }
    }

    /// Set the display attributes
    pub fn with_attributes(mut self, attributes: Vec<TokenAttribute>) -> Self {
        self.attributes = attributes;
        self
    }
}

/// Encode a metadata document and store it
///
/// # Parameters
/// - `store`: Blob store backend
/// - `metadata`: Document to upload
///
/// # Returns
/// - `Ok(String)`: Locator to hand to the registry at mint time
/// - `Err(StoreError)`: Encoding or backend failure
pub fn put_token_metadata<S: ContentStore + ?Sized>(
    store: &S,
    metadata: &TokenMetadata,
) -> StoreResult<String> {
    let data = serde_json::to_vec(metadata)?;
    store.put(&data, METADATA_CONTENT_TYPE)
}

/// Fetch and decode a metadata document
pub fn get_token_metadata<S: ContentStore + ?Sized>(
    store: &S,
    locator: &str,
) -> StoreResult<TokenMetadata> {
    let blob = store.get(locator)?;
    Ok(serde_json::from_slice(&blob.data)?)
}

/// Upload an image, compose its metadata document and upload that too
///
/// # Parameters
/// - `store`: Blob store backend
/// - `name`: Token name
/// - `description`: Token description
/// - `image_data`: Raw image bytes
/// - `image_content_type`: MIME type of the image
/// - `attributes`: Display attributes, possibly empty
///
/// # Returns
/// - `Ok(String)`: Locator of the metadata document
/// - `Err(StoreError)`: Encoding or backend failure
pub fn publish_token_metadata<S: ContentStore + ?Sized>(
    store: &S,
    name: String,
    description: String,
    image_data: &[u8],
    image_content_type: &str,
    attributes: Vec<TokenAttribute>,
) -> StoreResult<String> {
    let image = store.put(image_data, image_content_type)?;
    let metadata = TokenMetadata::new(name, description, image).with_attributes(attributes);
    put_token_metadata(store, &metadata)
}
