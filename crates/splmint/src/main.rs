//! # Splmint CLI
//!
//! The `splmint` binary is a thin terminal client over the `splmintapp` library.
//! This file only invokes `cli::run()` and turns an error into exit status 1.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/splmint/src/cli/)                        │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Config, logging and API wiring, dispatch (commands.rs)   │
//! │  - Colored message output (render.rs)                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/splmintapp/src/api.rs)                   │
//! │  - MintApi<ProcessRunner, FsMetadataStore>                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! A process only lives for one command, so session state such as the
//! generated wallet is not carried between invocations: `create` takes the
//! wallet address (or key pair file) explicitly.
//!
//! ## Testing Approach
//!
//! Library behavior is covered in `splmintapp`. The end-to-end tests in
//! `tests/` run the real binary against small shell scripts standing in for
//! `solana`, `solana-keygen` and `spl-token`, wired in through `SPLMINT_*`
//! environment variables.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
