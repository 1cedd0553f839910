//! # Proposal Editor Library
//!
//! The host boundary between the proposal editor view and the pricing
//! engine in `proposal-core`.
//!
//! ## Module Organization
//! ```text
//! proposal_editor/
//! ├── lib.rs          ◄─── You are here (tracing setup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── proposal.rs ◄─── Per-proposal snapshot state
//! │   └── config.rs   ◄─── Editor configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── package.rs  ◄─── Package CRUD, features, template
//! │   ├── item.rs     ◄─── Line items and areas
//! │   ├── addon.rs    ◄─── Global add-ons
//! │   ├── selection.rs◄─── Selections and totals
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Session Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  1. init_tracing()              RUST_LOG or "info,proposal=debug"       │
//! │                                                                         │
//! │  2. EditorConfig::from_env()    PROPOSAL_* overrides                    │
//! │                                                                         │
//! │  3. ProposalState::from_config  new proposal (optionally seeded)        │
//! │     ProposalState::restore      stored proposal (four values)           │
//! │                                                                         │
//! │  4. commands::*                 every call returns the new snapshot     │
//! │                                 and its totals                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing_subscriber::EnvFilter;

pub use error::{ApiError, ErrorCode};
pub use state::{EditorConfig, ProposalState, SnapshotResponse};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages from every crate
/// - `RUST_LOG=proposal=trace` - Show trace for proposal crates only
/// - Default: INFO, with DEBUG for proposal crates
///
/// Calling this more than once is harmless; only the first call installs
/// a subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,proposal=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
