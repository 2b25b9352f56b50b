//! Rosetta - translation call extractor and checker
//!
//! Rosetta scans front-end source files for inline translation calls such as
//! `t('nav.home', 'Home')`, reports keys used with conflicting values and
//! values duplicated under different keys, and exports the collected source
//! texts as per-prefix CSV sheets ready for translation.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction, analysis and prefix grouping
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Turn analysis results into issues

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
