//! Core data types shared by extraction, analysis and grouping.
//!
//! ## Module Structure
//!
//! - `entry`: `TranslationEntry`, the (key, value) pair produced per call site
//! - `diagnostic`: `MalformedCall` and the tagged `Diagnostic` enum

pub mod diagnostic;
pub mod entry;

pub use diagnostic::{Diagnostic, MalformedCall};
pub use entry::{TranslationEntry, key_prefix};
