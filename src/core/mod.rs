//! Core engine: from source text to analyzed corpus.
//!
//! ## Pipeline
//!
//! 1. `file_scanner`: find source files under the scan root
//! 2. `extract`: match translation calls in each file's text
//! 3. `corpus`: merge per-file results in a stable order
//! 4. `analyze`: conflicts, exact redundancy and pattern redundancy
//! 5. `prefix`: first-write-wins grouping for preview and export
//! 6. `sheet`: CSV output per prefix group
//!
//! `context` ties steps 1-3 to the configuration.

pub mod analyze;
pub mod context;
pub mod corpus;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod normalize;
pub mod prefix;
pub mod sheet;

pub use analyze::{AnalysisReport, analyze};
pub use context::ScanContext;
pub use corpus::{Corpus, CorpusBuilder};
pub use data::{Diagnostic, TranslationEntry};
pub use prefix::{PrefixGroups, group_by_prefix};
