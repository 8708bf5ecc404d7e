//! Per-family conversion: reference document in, binary artifact out.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::extract::{extract_codes, ExtractError};
use crate::family::Family;
use crate::pack::write_bin;

/// Hard conversion failure. A missing reference document is not represented
/// here: it is reported as a warning and the family is skipped.
#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// Outcome of one successfully converted family.
#[derive(Debug, Clone, Serialize)]
pub struct FamilyReport {
    pub family: Family,
    /// Number of codes extracted (no expected-count check is applied).
    pub codes: usize,
    /// Where the artifact was written.
    pub artifact: PathBuf,
    /// Bytes written, always `codes * 8`.
    pub bytes: usize,
}

/// Convert every family in `families`, in the given order.
///
/// A family whose reference document is absent is skipped with a warning and
/// the run continues; a document that fails extraction aborts the whole run.
/// The output directory is created (with parents) before the first write.
/// Returns one report per family actually converted.
pub fn convert_families(
    families: &[Family],
    ref_dir: &Path,
    out_dir: &Path,
) -> Result<Vec<FamilyReport>, ConvertError> {
    fs::create_dir_all(out_dir)?;

    let mut reports = Vec::with_capacity(families.len());
    for &family in families {
        let source = ref_dir.join(family.source_file_name());
        if !source.exists() {
            warn!("{} not found, skipping", source.display());
            continue;
        }

        let text = fs::read_to_string(&source)?;
        let codes = extract_codes(&text, &source)?;
        debug!("{family}: extracted {} codes from {}", codes.len(), source.display());

        let artifact = out_dir.join(family.artifact_file_name());
        let bytes = write_bin(&artifact, &codes)?;

        reports.push(FamilyReport {
            family,
            codes: codes.len(),
            artifact,
            bytes,
        });
    }
    Ok(reports)
}

/// Convert all eight reference families.
pub fn convert_all(ref_dir: &Path, out_dir: &Path) -> Result<Vec<FamilyReport>, ConvertError> {
    convert_families(&Family::ALL, ref_dir, out_dir)
}
