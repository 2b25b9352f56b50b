//! CSV translation sheets, one per key prefix.
//!
//! # Columns
//!
//! - `key`: Full translation key
//! - `en`: Source text taken from the code
//! - one empty column per target language code

use std::{
    collections::HashSet,
    fs::{self, File},
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::core::prefix::{PrefixGroup, PrefixGroups};

/// Column holding the source text.
pub const SOURCE_LANGUAGE: &str = "en";

/// Errors that can occur while writing sheets.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// A sheet written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenSheet {
    pub prefix: String,
    pub path: PathBuf,
    pub rows: usize,
}

/// File name for a prefix group, with path separators replaced.
pub fn sheet_file_name(prefix: &str) -> String {
    format!("{}_translations.csv", sheet_stem(prefix))
}

fn sheet_stem(prefix: &str) -> String {
    prefix
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect()
}

/// Pick a file name for `prefix` that no earlier sheet of this run uses.
///
/// Distinct prefixes can sanitize to the same name (`a/b` and `a_b`); the
/// later one gets a numeric suffix, `a_b_2_translations.csv`.
fn claim_sheet_name(prefix: &str, taken: &mut HashSet<String>) -> String {
    let name = sheet_file_name(prefix);
    if taken.insert(name.clone()) {
        return name;
    }

    let stem = sheet_stem(prefix);
    let mut n = 2;
    loop {
        let candidate = format!("{}_{}_translations.csv", stem, n);
        if taken.insert(candidate.clone()) {
            tracing::warn!(
                "sheet name {} is already used, writing prefix \"{}\" to {}",
                name,
                prefix,
                candidate
            );
            return candidate;
        }
        n += 1;
    }
}

/// One prefix group rendered as CSV.
pub struct TranslationSheet<'a> {
    group: &'a PrefixGroup,
    languages: &'a [String],
}

impl<'a> TranslationSheet<'a> {
    #[must_use]
    pub fn new(group: &'a PrefixGroup, languages: &'a [String]) -> Self {
        Self { group, languages }
    }

    pub fn header(&self) -> Vec<&str> {
        let mut header = vec!["key", SOURCE_LANGUAGE];
        header.extend(self.languages.iter().map(String::as_str));
        header
    }

    /// Write the header and one row per key, in key order.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if writing or CSV encoding fails.
    pub fn write_to<W: io::Write>(&self, writer: W) -> Result<(), ExportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(self.header())?;

        for (key, value) in self.group {
            let mut record = vec![key.as_str(), value.as_str()];
            record.extend(std::iter::repeat_n("", self.languages.len()));
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Render the sheet as a string.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if CSV encoding fails.
    pub fn to_csv_string(&self) -> Result<String, ExportError> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

/// Write one sheet per prefix group into `output_dir`, creating it if needed.
///
/// Sheets left over from an earlier run are overwritten. Within one run
/// every prefix gets its own file.
pub fn write_sheets(
    groups: &PrefixGroups,
    languages: &[String],
    output_dir: &Path,
) -> Result<Vec<WrittenSheet>, ExportError> {
    fs::create_dir_all(output_dir)?;

    let mut taken = HashSet::with_capacity(groups.len());
    let mut written = Vec::with_capacity(groups.len());
    for (prefix, group) in groups {
        let path = output_dir.join(claim_sheet_name(prefix, &mut taken));
        tracing::debug!(
            prefix = %prefix,
            rows = group.len(),
            "writing {}",
            path.display()
        );

        let file = File::create(&path)?;
        TranslationSheet::new(group, languages).write_to(io::BufWriter::new(file))?;

        written.push(WrittenSheet {
            prefix: prefix.clone(),
            path,
            rows: group.len(),
        });
    }

    Ok(written)
}
