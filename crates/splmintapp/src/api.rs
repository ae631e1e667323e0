//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every splmint operation, whatever UI sits on top.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Owns session state** ([`AppState`]): the generated wallet, the last logo
//!   preview and the running transcript
//! - **Fills inputs from state** (an empty wallet field uses the session wallet,
//!   a missing logo URI uses the previewed URL)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or formatting
//! - **Persistence of state**: `AppState` lives as long as the `MintApi` value
//!
//! ## Generic Over Runner and Store
//!
//! `MintApi<R: CommandRunner, S: MetadataStore>`:
//! - Production: `MintApi<ProcessRunner, FsMetadataStore>`
//! - Testing: `MintApi<ScriptedRunner, MemMetadataStore>`

use crate::commands::{self, CmdMessage, CmdResult};
use crate::config::MintConfig;
use crate::error::Result;
use crate::model::{AppState, LogoSource, TokenRequest};
use crate::runner::CommandRunner;
use crate::store::MetadataStore;
use std::path::Path;

pub struct MintApi<R: CommandRunner, S: MetadataStore> {
    runner: R,
    store: S,
    config: MintConfig,
    state: AppState,
}

impl<R: CommandRunner, S: MetadataStore> MintApi<R, S> {
    pub fn new(runner: R, store: S, config: MintConfig) -> Self {
        Self {
            runner,
            store,
            config,
            state: AppState::default(),
        }
    }

    pub fn config(&self) -> &MintConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Append the outcome to the transcript and pass it through.
    fn record(&mut self, result: Result<CmdResult>) -> Result<CmdResult> {
        match &result {
            Ok(ok) => self.state.transcript.extend(ok.messages.iter().cloned()),
            Err(e) => self.state.transcript.push(CmdMessage::error(e.to_string())),
        }
        result
    }

    pub fn generate_wallet(&mut self) -> Result<CmdResult> {
        let result =
            commands::wallet::run(&self.runner, &self.config, &mut rand::thread_rng());
        if let Ok(ok) = &result {
            self.state.wallet = ok.wallet.clone();
        }
        self.record(result)
    }

    /// Adopt an existing key pair file as the session wallet.
    pub fn open_wallet(&mut self, key_file: &Path) -> Result<CmdResult> {
        let result = commands::wallet::open(&self.runner, &self.config, key_file);
        if let Ok(ok) = &result {
            self.state.wallet = ok.wallet.clone();
        }
        self.record(result)
    }

    /// Balance text for `pubkey`, or the session wallet when `pubkey` is `None`.
    ///
    /// Yields the `"Error"` literal when there is no wallet to ask about.
    pub fn balance(&mut self, pubkey: Option<&str>) -> CmdResult {
        let pubkey = pubkey
            .or_else(|| self.state.wallet_address())
            .unwrap_or_default()
            .to_string();
        let result = commands::balance::run(&self.runner, &self.config, &pubkey);
        self.state
            .transcript
            .extend(result.messages.iter().cloned());
        result
    }

    pub fn get_balance(&self, pubkey: &str) -> String {
        commands::balance::get_balance(&self.runner, &self.config, pubkey)
    }

    pub fn query_balance(
        &self,
        pubkey: &str,
    ) -> std::result::Result<commands::balance::Balance, commands::balance::BalanceError> {
        commands::balance::query_balance(&self.runner, &self.config, pubkey)
    }

    pub fn create_token(&mut self, mut request: TokenRequest) -> Result<CmdResult> {
        if request.wallet_pubkey.trim().is_empty() {
            if let Some(address) = self.state.wallet_address() {
                request.wallet_pubkey = address.to_string();
            }
        }
        let fallback = self.state.logo_url().map(str::to_string);
        let result = commands::create::run(
            &self.runner,
            &self.store,
            &self.config,
            &request,
            fallback.as_deref(),
        );
        self.record(result)
    }

    /// Load a logo preview. A failed load keeps the previous preview.
    pub fn preview_logo(&mut self, source: &LogoSource, out: Option<&Path>) -> Result<CmdResult> {
        let result = commands::logo::run(source, out);
        if let Ok(ok) = &result {
            if let Some(logo) = &ok.logo {
                self.state.logo = Some(logo.clone());
            }
        }
        self.record(result)
    }

    /// Run the setup script, defaulting to the configured one.
    pub fn run_setup(&mut self, script: Option<&Path>) -> Result<CmdResult> {
        let script = script
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.config.setup_script.clone());
        let result = commands::setup::run(&self.runner, &script);
        self.record(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::MintError;
    use crate::model::LogoPreview;
    use crate::runner::scripted::{Reply, ScriptedRunner};
    use crate::store::memory::MemMetadataStore;
    use crate::test_utils::TestEnv;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    const ADDRESS: &str = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM";
    const MINT: &str = "4k3Dyjzvzp8eMZWUXbBCjEvwSkkk59S5iCNLY3QrkX6R";

    fn full_runner() -> ScriptedRunner {
        ScriptedRunner::new()
            .on("solana-keygen", ["new"], Reply::success("Wrote new keypair\n"))
            .on("solana-keygen", ["pubkey"], Reply::success(format!("{}\n", ADDRESS)))
            .on("solana", ["balance"], Reply::success("2 SOL\n"))
            .on("spl-token", ["create-token"], Reply::success(format!("{}\n", MINT)))
            .on("spl-token", Vec::<String>::new(), Reply::success("ok\n"))
    }

    fn api(runner: ScriptedRunner) -> MintApi<ScriptedRunner, MemMetadataStore> {
        MintApi::new(runner, MemMetadataStore::new(), MintConfig::default())
    }

    #[test]
    fn generate_wallet_sets_session_wallet() {
        let mut api = api(full_runner());
        let result = api.generate_wallet().unwrap();

        assert_eq!(result.wallet.unwrap().public_key, ADDRESS);
        assert_eq!(api.state().wallet_address(), Some(ADDRESS));
        assert_eq!(api.state().transcript.len(), 3);
    }

    #[test]
    fn failed_wallet_generation_is_recorded_as_error() {
        let mut api = api(ScriptedRunner::new());
        assert!(api.generate_wallet().is_err());
        assert!(api.state().wallet.is_none());

        let last = api.state().transcript.last().unwrap();
        assert_eq!(last.level, MessageLevel::Error);
        assert!(last.content.contains("solana-keygen"));
    }

    #[test]
    fn balance_defaults_to_session_wallet() {
        let mut api = api(full_runner());
        api.generate_wallet().unwrap();

        let result = api.balance(None);
        assert_eq!(result.balance.as_deref(), Some("2 SOL"));
        let calls = api.runner().calls_to("solana");
        assert_eq!(calls[0].args, vec!["balance", ADDRESS]);
    }

    #[test]
    fn create_token_fills_wallet_from_session() {
        let mut api = api(full_runner());
        api.generate_wallet().unwrap();

        let request = TokenRequest::new("AlphaCoin", "ABC", "1000", "9", "");
        let result = api.create_token(request).unwrap();

        assert_eq!(result.metadata.unwrap().address, MINT);
        assert!(api.store().raw("abc-token.json").is_some());
    }

    #[test]
    fn create_token_without_any_wallet_is_missing_field() {
        let mut api = api(full_runner());
        let request = TokenRequest::new("AlphaCoin", "ABC", "1000", "9", "");
        let err = api.create_token(request).unwrap_err();

        assert!(matches!(err, MintError::MissingField(_)));
        assert_eq!(api.runner().call_count(), 0);
    }

    #[test]
    fn create_token_uses_previewed_logo_url() {
        let mut api = api(full_runner());
        api.state.logo = Some(LogoPreview {
            source: LogoSource::Url("https://cdn.example.com/abc.png".to_string()),
            image: RgbaImage::new(100, 100),
        });

        let request = TokenRequest::new("AlphaCoin", "ABC", "1000", "9", ADDRESS);
        let result = api.create_token(request).unwrap();
        assert_eq!(result.metadata.unwrap().logo_uri, "https://cdn.example.com/abc.png");
    }

    #[test]
    fn failed_logo_load_keeps_previous_preview() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.png");
        let mut bytes = Cursor::new(Vec::new());
        RgbaImage::from_pixel(8, 8, Rgba([0, 0, 255, 255]))
            .write_to(&mut bytes, ImageFormat::Png)
            .unwrap();
        std::fs::write(&good, bytes.into_inner()).unwrap();

        let mut api = api(ScriptedRunner::new());
        api.preview_logo(&LogoSource::File(good.clone()), None).unwrap();
        assert!(api
            .preview_logo(&LogoSource::File(dir.path().join("missing.png")), None)
            .is_err());

        let logo = api.state().logo.as_ref().unwrap();
        assert_eq!(logo.source, LogoSource::File(good));
        assert_eq!(logo.dimensions(), (100, 100));
    }

    #[test]
    fn create_token_writes_metadata_file() {
        let env = TestEnv::new();
        let mut api = MintApi::new(full_runner(), env.store, env.config);

        let request = TokenRequest::new("AlphaCoin", "ABC", "1000", "9", ADDRESS);
        let result = api.create_token(request).unwrap();

        let path = env.root.join("tokens").join("abc-token.json");
        assert_eq!(result.metadata_path.as_deref(), Some(path.as_path()));
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["address"], MINT);
        assert_eq!(written["logoURI"], "https://yourdomain.com/logo.png");
    }

    #[test]
    fn run_setup_uses_configured_script() {
        let runner =
            ScriptedRunner::new().on("bash", ["setup-install.sh"], Reply::success("done\n"));
        let mut api = api(runner);
        api.run_setup(None).unwrap();

        assert_eq!(api.runner().calls()[0].args, vec!["setup-install.sh"]);
    }
}
