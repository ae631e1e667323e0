use super::render::{print_messages, render_entries};
use super::setup::{Cli, Commands};
use clap::Parser;
use splmintapp::api::MintApi;
use splmintapp::config::{global_config_path, MintConfig};
use splmintapp::error::Result;
use splmintapp::model::{LogoSource, TokenRequest};
use splmintapp::runner::process::ProcessRunner;
use splmintapp::store::fs::FsMetadataStore;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

type Api = MintApi<ProcessRunner, FsMetadataStore>;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    tracing::debug!(?config, "configuration loaded");

    if let Commands::Config = cli.command {
        return handle_config(&config);
    }

    let store = FsMetadataStore::new(config.output_dir.clone());
    let mut api = MintApi::new(ProcessRunner, store, config);

    match cli.command {
        Commands::Wallet => handle_wallet(&mut api),
        Commands::Balance { pubkey } => handle_balance(&mut api, &pubkey),
        Commands::Create {
            name,
            symbol,
            supply,
            decimals,
            wallet,
            keypair,
            logo_uri,
            logo,
        } => {
            if let Some(key_file) = keypair {
                let result = api.open_wallet(&key_file)?;
                print_messages(&result.messages);
            }
            if let Some(source) = logo {
                let result = api.preview_logo(&LogoSource::parse(&source), None)?;
                print_messages(&result.messages);
            }
            let mut request =
                TokenRequest::new(name, symbol, supply, decimals, wallet.unwrap_or_default());
            request.logo_uri = logo_uri;
            handle_create(&mut api, request)
        }
        Commands::Logo { source, out } => handle_logo(&mut api, &source, out.as_deref()),
        Commands::Setup { script } => handle_setup(&mut api, script.as_deref()),
        Commands::Config => Ok(()),
    }
}

/// Diagnostics go to stderr: `RUST_LOG` when set, else `warn` (`debug` with `--verbose`).
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_config(cli: &Cli) -> Result<MintConfig> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut config = MintConfig::load(&cwd)?;
    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(dir) = &cli.wallet_dir {
        config.wallet_dir = dir.clone();
    }
    Ok(config.resolve_dirs(&cwd))
}

fn handle_config(config: &MintConfig) -> Result<()> {
    print!("{}", render_entries(&config.entries()));
    if let Some(path) = global_config_path() {
        println!("\nGlobal config file: {}", path.display());
    }
    Ok(())
}

fn handle_wallet(api: &mut Api) -> Result<()> {
    let result = api.generate_wallet()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_balance(api: &mut Api, pubkey: &str) -> Result<()> {
    let result = api.balance(Some(pubkey));
    print_messages(&result.messages);
    Ok(())
}

fn handle_create(api: &mut Api, request: TokenRequest) -> Result<()> {
    tracing::info!(symbol = %request.symbol, "creating token");
    let result = api.create_token(request)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_logo(api: &mut Api, source: &str, out: Option<&Path>) -> Result<()> {
    let result = api.preview_logo(&LogoSource::parse(source), out)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_setup(api: &mut Api, script: Option<&Path>) -> Result<()> {
    let result = api.run_setup(script)?;
    print_messages(&result.messages);
    Ok(())
}
