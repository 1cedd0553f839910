//! # Commands Module
//!
//! All commands exposed to the proposal editor view.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── package.rs    ◄─── Package CRUD, features, tier template
//! ├── item.rs       ◄─── Line items and areas inside a package
//! ├── addon.rs      ◄─── Global add-ons
//! ├── selection.rs  ◄─── Tier / add-on package selection, totals
//! └── config.rs     ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Editor View                                                            │
//! │  ───────────                                                            │
//! │  const next = await invoke('select_tier', { packageId });              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  fn select_tier(                                                        │
//! │      state: &ProposalState,   ◄── One per open proposal                │
//! │      package_id: &str,        ◄── From invoke params                   │
//! │  ) -> SnapshotResponse                                                  │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Editor receives: { packages, addOns, selectedTierPackageId,           │
//! │                     selectedAddOnPackageIds, totals }                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutating command returns the whole new snapshot; the view replaces
//! its copy wholesale. Commands that create something gate on a non-empty
//! name and fail with `VALIDATION_ERROR`. Everything else accepts any input:
//! unknown ids leave the snapshot unchanged, and free-text numbers are
//! coerced through [`proposal_core::input`].

pub mod addon;
pub mod config;
pub mod item;
pub mod package;
pub mod selection;
