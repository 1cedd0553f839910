//! # State Module
//!
//! Session and configuration state for the proposal editor.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────────────┬──────────────────┐                │
//! │          ▼                          ▼                                   │
//! │  ┌──────────────────────┐  ┌──────────────────┐                         │
//! │  │   ProposalState      │  │   EditorConfig   │                         │
//! │  │                      │  │                  │                         │
//! │  │  Arc<Mutex<          │  │  currency        │                         │
//! │  │    PricingSnapshot   │  │  default category│                         │
//! │  │  >>                  │  │  tier seeding    │                         │
//! │  └──────────────────────┘  └──────────────────┘                         │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • ProposalState: Protected by Arc<Mutex<T>>, one per open proposal    │
//! │  • EditorConfig: Read-only after initialization                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod proposal;

pub use config::EditorConfig;
pub use proposal::{ProposalState, SnapshotResponse};
