use super::{metadata_file_name, to_pretty_json, MetadataStore};
use crate::error::Result;
use crate::model::TokenMetadata;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FsMetadataStore {
    root: PathBuf,
}

impl FsMetadataStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

impl MetadataStore for FsMetadataStore {
    fn save(&self, metadata: &TokenMetadata) -> Result<PathBuf> {
        self.ensure_dir()?;
        let path = self.location(&metadata.symbol);
        let content = to_pretty_json(metadata)?;
        fs::write(&path, content)?;
        tracing::info!(path = %path.display(), mint = %metadata.address, "metadata written");
        Ok(path)
    }

    fn load(&self, symbol: &str) -> Result<Option<TokenMetadata>> {
        let path = self.location(symbol);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn location(&self, symbol: &str) -> PathBuf {
        self.root.join(metadata_file_name(symbol))
    }
}
