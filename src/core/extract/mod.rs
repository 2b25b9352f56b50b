//! Extraction - turning one file's text into translation entries.
//!
//! Source files are never parsed; a regex grammar recognizes the
//! `t('key', 'value')` calling convention directly in the text.
//!
//! ## Module Structure
//!
//! - `grammar`: builds the call-site regex from configured function names
//! - `extractor`: `Extractor`, `ExtractionResult` and the default-grammar shortcut

pub mod extractor;
pub mod grammar;

pub use extractor::{
    DEFAULT_FUNCTION_NAMES, ExtractionResult, Extractor, ExtractorConfig, ExtractorError,
    extract_from_text,
};
