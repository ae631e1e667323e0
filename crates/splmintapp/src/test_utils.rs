use crate::config::MintConfig;
use crate::store::fs::FsMetadataStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway output directory with a store and config pointing into it.
pub struct TestEnv {
    // Held so the directory outlives the test
    pub _temp_dir: TempDir,
    pub store: FsMetadataStore,
    pub config: MintConfig,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let config = MintConfig {
            output_dir: root.join("tokens"),
            wallet_dir: root.join("wallets"),
            ..Default::default()
        };
        let store = FsMetadataStore::new(config.output_dir.clone());
        Self {
            _temp_dir: temp_dir,
            store,
            config,
            root,
        }
    }
}
