//! Services module - the discovery-and-relocation core.
//!
//! Everything here is framework-agnostic: no toast host, no event
//! source, only explicit collaborator traits. The pipeline is
//!
//! 1. [`discovery::discover`] finds primary `.ess` candidates under one
//!    mod root (Data-first, root fallback with save-named subfolders)
//! 2. [`discovery::expand_with_cosaves`] appends the `.skse` companions
//!    that exist on disk
//! 3. [`mover::place`] relocates one file at a time into the canonical
//!    Saves directory (create-ancestors, overwrite, optional cut)
//! 4. [`SweepEngine`] drives the pipeline per mod folder, per staging
//!    root, and for the install-event fast path with its single retry
//!
//! # Failure model
//!
//! Every filesystem primitive either returns a typed error the caller
//! records and skips past ([`mover::RelocateError`]) or defaults to an
//! empty result (unlistable directories). No operation in this module
//! aborts a sibling's processing; nothing here panics in normal use.

pub mod discovery;
pub mod mover;
pub mod sweep;

pub use mover::RelocateError;
pub use sweep::SweepEngine;
