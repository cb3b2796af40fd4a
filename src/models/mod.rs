//! Data models for the SGI save mover.
//!
//! - [`Title`]: the closed set of supported game variants, selecting both
//!   staging-root candidates and the canonical save directory
//! - [`UserConfig`] / [`SgiSettings`]: policy switches loaded from
//!   `SGI Settings.yaml` (move-vs-copy, debug toasts, retry delays)
//!
//! Settings are loaded once at startup and threaded immutably into the
//! sweep engine; nothing here is shared mutable state.

pub mod config;
pub mod title;

pub use config::{SgiSettings, UserConfig};
pub use title::Title;
