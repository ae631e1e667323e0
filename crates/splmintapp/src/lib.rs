//! # Splmint Architecture
//!
//! Splmint creates a wallet and mints a fungible SPL token by driving the Solana
//! command-line tools (`solana`, `solana-keygen`, `spl-token`), then writes a small
//! token-list metadata file. There is no cryptography or transaction code here:
//! everything on-chain happens inside those external tools. What this crate owns is
//! the **workflow**: validating input, checking the wallet balance, running a fixed
//! sequence of commands in order and persisting the result.
//!
//! This is a library that happens to have a CLI client, not the other way round.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI Layer (the `splmint` binary, or any other client)       │
//! │  - Parses arguments, renders messages, owns exit codes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - MintApi facade, owns the session's AppState              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - balance, wallet, create, logo, setup                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────┐ ┌────────────────────────────┐
//! │  Runner (runner/)            │ │  Store (store/)            │
//! │  - CommandRunner trait       │ │  - MetadataStore trait     │
//! │  - ProcessRunner, Scripted   │ │  - Fs and Mem backends     │
//! └──────────────────────────────┘ └────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never exits the
//! process and never assumes a terminal. External processes are only reached
//! through [`runner::CommandRunner`], so the whole workflow can be exercised with
//! [`runner::scripted::ScriptedRunner`] and no Solana tooling installed.
//!
//! ## Irreversibility
//!
//! The four token-creation steps commit on-chain state as they go, and the last
//! one permanently disables the mint authority. Nothing here rolls them back: a
//! failure stops the sequence and reports the raw command output.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade every client talks to
//! - [`commands`]: Business logic per operation
//! - [`runner`]: External command abstraction and implementations
//! - [`store`]: Metadata persistence
//! - [`model`]: Domain types
//! - [`config`]: Layered configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod runner;
pub mod store;

#[cfg(test)]
pub(crate) mod test_utils;
