//! # Babel Layout
//!
//! Deterministic seven-floor shelf layout for the library frontend.
//!
//! The engine in `babel-core` addresses every possible line of text; this
//! crate arranges a finite catalogue of real books onto the first rooms of
//! that world. Each floor groups related catalogue subjects, each room holds
//! 640 volumes in the same wall/shelf geometry the engine uses, and every
//! step of the pipeline is a pure function of the input records, so the
//! generated artifacts are reproducible byte for byte.
//!
//! The pipeline runs in five stages:
//!
//! 1. [`meta::read_meta_jsonl`] loads the raw book records.
//! 2. [`classify`] assigns each book a floor and a subcategory.
//! 3. [`plan`] sizes each floor in whole rooms and picks its official
//!    subcategories.
//! 4. [`slots`] lays books out volume by volume, filling slack capacity
//!    with repeats from related floors.
//! 5. [`artifacts`] serializes the result into versioned JSON files.
//!
//! [`Layout::build`] chains the middle stages; binaries add the IO at both
//! ends.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod artifacts;
pub mod classify;
pub mod error;
pub mod layout;
pub mod meta;
pub mod plan;
pub mod shuffle;
pub mod slots;
pub mod tags;

pub use classify::FloorId;
pub use error::LayoutError;
pub use layout::{Layout, LayoutOptions};
pub use meta::{read_meta_jsonl, BookMeta};
