use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "splmint",
    bin_name = "splmint",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Create a Solana wallet and mint an SPL token", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Directory for token metadata files
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub output_dir: Option<PathBuf>,

    /// Directory for generated key pair files
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub wallet_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a new wallet key pair
    #[command(display_order = 1)]
    Wallet,

    /// Show the SOL balance of a wallet
    #[command(display_order = 2)]
    Balance {
        /// Wallet public key
        pubkey: String,
    },

    /// Create and mint a token, then write its metadata file
    #[command(display_order = 3)]
    Create {
        /// Token name
        #[arg(long, default_value = "")]
        name: String,

        /// Token symbol, also the metadata file name
        #[arg(long, default_value = "")]
        symbol: String,

        /// Initial supply to mint
        #[arg(long, default_value = "")]
        supply: String,

        /// Decimal places
        #[arg(long, default_value = "9")]
        decimals: String,

        /// Wallet public key paying for the token
        #[arg(long, value_name = "PUBKEY")]
        wallet: Option<String>,

        /// Key pair file to take the wallet address from
        #[arg(long, value_name = "FILE", conflicts_with = "wallet")]
        keypair: Option<PathBuf>,

        /// Logo URL recorded in the metadata
        #[arg(long, value_name = "URL")]
        logo_uri: Option<String>,

        /// Preview this logo first; a URL also becomes the metadata logo
        #[arg(long, value_name = "PATH|URL")]
        logo: Option<String>,
    },

    /// Load a logo from a file or URL and resize it to 100x100
    #[command(display_order = 4)]
    Logo {
        /// Local image path or http(s) URL
        source: String,

        /// Write the resized preview as PNG
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Run the tooling install script
    #[command(display_order = 5)]
    Setup {
        /// Script to run instead of the configured one
        #[arg(long, value_name = "PATH")]
        script: Option<PathBuf>,
    },

    /// Print the resolved configuration
    #[command(display_order = 6)]
    Config,
}
