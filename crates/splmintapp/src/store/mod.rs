//! # Metadata Store
//!
//! Persists [`TokenMetadata`] records, one file per token symbol.
//!
//! ## Naming
//!
//! The symbol is the case-insensitive key: `ABC`, `abc` and `Abc` all map to
//! `abc-token.json`. Saving a symbol that already has a file overwrites it
//! silently; records are never merged or appended.
//!
//! ## Durability
//!
//! Writes are whole-file and single-writer. There is no temp-file-then-rename;
//! the file system's default write semantics are all that is promised.
//!
//! ## Storage Layout
//!
//! ```text
//! <output_dir>/
//! ├── abc-token.json
//! └── xyz-token.json
//! ```
//!
//! ## Implementations
//!
//! - [`fs::FsMetadataStore`]: Writes JSON files under a root directory.
//! - [`memory::MemMetadataStore`]: Keeps serialized records in memory, for tests.

use crate::error::Result;
use crate::model::TokenMetadata;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// File name for a symbol's metadata record.
pub fn metadata_file_name(symbol: &str) -> String {
    format!("{}-token.json", symbol.trim().to_lowercase())
}

/// Four-space indented JSON, the format of the token-list files.
pub fn to_pretty_json(metadata: &TokenMetadata) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    serde::Serialize::serialize(metadata, &mut serializer)?;
    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Abstract interface for metadata persistence.
pub trait MetadataStore {
    /// Write the record for `metadata.symbol`, replacing any previous one.
    /// Returns the location written.
    fn save(&self, metadata: &TokenMetadata) -> Result<PathBuf>;

    /// Read the record for a symbol, `Ok(None)` if there is none.
    fn load(&self, symbol: &str) -> Result<Option<TokenMetadata>>;

    /// Where the record for a symbol lives (or would live).
    fn location(&self, symbol: &str) -> PathBuf;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_is_lowercased_symbol() {
        assert_eq!(metadata_file_name("ABC"), "abc-token.json");
        assert_eq!(metadata_file_name("MiXeD"), "mixed-token.json");
    }

    #[test]
    fn pretty_json_uses_four_space_indent() {
        let metadata = TokenMetadata {
            chain_id: 101,
            address: "Mint1".to_string(),
            symbol: "ABC".to_string(),
            name: "AlphaCoin".to_string(),
            decimals: 9,
            logo_uri: "https://yourdomain.com/logo.png".to_string(),
            tags: vec!["utility-token".to_string()],
        };
        let json = to_pretty_json(&metadata).unwrap();
        assert!(json.starts_with("{\n    \"chainId\": 101,\n    \"address\": \"Mint1\""));
        assert!(json.contains("\"tags\": [\n        \"utility-token\"\n    ]"));
    }
}
