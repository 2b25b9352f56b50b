use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        corpus::{Corpus, CorpusBuilder},
        extract::{ExtractionResult, Extractor},
        file_scanner::scan_files,
    },
};

/// Everything a command needs before reading any source file.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--extensions vue`)
/// 2. `.rosettarc.json` config file
/// 3. Built-in defaults
pub struct ScanContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Directory or single file given on the command line.
    pub root: PathBuf,

    /// Source files to read, in lexicographic order.
    pub files: Vec<String>,

    /// Paths the directory walk could not access.
    pub skipped_count: usize,

    extractor: Extractor,
}

impl ScanContext {
    /// Create a new `ScanContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The scan root does not exist
    /// - Config file is invalid
    /// - The configured function names do not form a valid call grammar
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let root = common_args.path.clone();
        if !root.exists() {
            bail!("Path does not exist: {}", root.display());
        }

        let config_dir = if root.is_file() {
            root.parent().unwrap_or(Path::new(".")).to_path_buf()
        } else {
            root.clone()
        };

        let config_result = load_config(&config_dir)?;
        if !config_result.from_file {
            tracing::debug!("no config file found, using default configuration");
        }

        let mut config = config_result.config;

        if let Some(ref extensions) = common_args.extensions {
            config.extensions = extensions.clone();
            config.validate()?;
        }

        let extractor = Extractor::new(&config.extractor_config())?;

        let scan_result = scan_files(&root, &config.extensions, &config.ignores);

        if scan_result.skipped_count > 0 {
            tracing::warn!(
                "{} path(s) skipped due to access errors",
                scan_result.skipped_count
            );
        }

        Ok(Self {
            config,
            root,
            files: scan_result.files,
            skipped_count: scan_result.skipped_count,
            extractor,
        })
    }

    /// Read and extract every scanned file into one [`Corpus`].
    ///
    /// Files are read and extracted in parallel, then merged in scan order so
    /// the corpus is the same on every run. A file that cannot be read is
    /// recorded as a diagnostic and the scan goes on.
    pub fn collect_corpus(&self) -> Corpus {
        let results: Vec<(&String, std::io::Result<ExtractionResult>)> = self
            .files
            .par_iter()
            .map(|file_path| {
                let result = std::fs::read_to_string(file_path)
                    .map(|content| self.extractor.extract(&content));
                (file_path, result)
            })
            .collect();

        let mut builder = CorpusBuilder::new();
        for (file_path, result) in results {
            match result {
                Ok(extraction) => {
                    tracing::debug!(
                        file = %file_path,
                        entries = extraction.entries.len(),
                        "extracted"
                    );
                    builder.add_file(file_path, extraction);
                }
                Err(e) => {
                    tracing::warn!("{} - failed to read file: {}", file_path, e);
                    builder.add_read_failure(file_path, e);
                }
            }
        }

        builder.build()
    }
}
