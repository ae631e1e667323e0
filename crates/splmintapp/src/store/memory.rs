use super::{metadata_file_name, to_pretty_json, MetadataStore};
use crate::error::Result;
use crate::model::TokenMetadata;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

/// In-memory metadata store for testing.
///
/// Records are kept in their serialized form, keyed by file name, so tests see
/// exactly what would have been written to disk.
#[derive(Debug, Default)]
pub struct MemMetadataStore {
    files: RefCell<BTreeMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemMetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// File names currently stored.
    pub fn file_names(&self) -> Vec<String> {
        self.files.borrow().keys().cloned().collect()
    }

    /// Raw serialized content for a file name.
    pub fn raw(&self, file_name: &str) -> Option<String> {
        self.files.borrow().get(file_name).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.files.borrow().is_empty()
    }
}

impl MetadataStore for MemMetadataStore {
    fn save(&self, metadata: &TokenMetadata) -> Result<PathBuf> {
        if *self.simulate_write_error.borrow() {
            return Err(io::Error::new(io::ErrorKind::Other, "Simulated write error").into());
        }
        let name = metadata_file_name(&metadata.symbol);
        let content = to_pretty_json(metadata)?;
        self.files.borrow_mut().insert(name, content);
        Ok(self.location(&metadata.symbol))
    }

    fn load(&self, symbol: &str) -> Result<Option<TokenMetadata>> {
        match self.files.borrow().get(&metadata_file_name(symbol)) {
            Some(content) => Ok(Some(serde_json::from_str(content)?)),
            None => Ok(None),
        }
    }

    fn location(&self, symbol: &str) -> PathBuf {
        PathBuf::from(format!("memory://{}", metadata_file_name(symbol)))
    }
}
