//! End-to-end conversion pipeline.
//!
//! Wires the pure stages together: read and parse the theme document,
//! consult the store listing, resolve the profile id, build the write
//! operations, and hand them to the executor in order. Given identical
//! external state, two runs produce byte-identical operations.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::dconf::{WriteOperation, build_operations};
use crate::error::{ConvertError, Result};
use crate::profile::{ProfileRecord, resolve};
use crate::store::{Executor, ProfileStore};
use crate::theme::{ColorExport, parse_theme};

/// What a pipeline run did, for reporting.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub theme_name: String,
    pub profile_id: String,
    pub created: bool,
    pub operations: Vec<WriteOperation>,
}

/// Display name a theme file maps to: the file name minus its extension.
#[must_use]
pub fn theme_name(path: &Path) -> String {
    path.file_stem()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

/// Read and parse a theme document into its derived name and colors.
pub fn load_theme(path: &Path) -> Result<(String, ColorExport)> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ConvertError::ThemeNotFound {
                path: path.display().to_string(),
            }
        } else {
            ConvertError::Io(e)
        }
    })?;

    let entries = crate::plist::parse_document(&content)?;
    debug!(entries = entries.len(), "parsed theme document");

    let export = parse_theme(&entries)?;
    Ok((theme_name(path), export))
}

/// Run the full pipeline for one theme against the given collaborators.
///
/// All parsing happens before the store is read, and all seven operations
/// are built before the first one is applied, so every fatal parse or
/// build error aborts with zero writes issued. A failing write aborts the
/// remaining ones; earlier writes stay applied.
pub fn run(
    theme_path: &Path,
    store: &dyn ProfileStore,
    executor: &dyn Executor,
) -> Result<RunReport> {
    let (name, export) = load_theme(theme_path)?;

    let listing: Vec<ProfileRecord> = store.list_profiles()?;
    let resolution = resolve(&name, listing);

    let operations = build_operations(&resolution.id, &export, &resolution.profiles, &name)?;

    for op in &operations {
        executor.apply(op)?;
    }

    Ok(RunReport {
        theme_name: name,
        profile_id: resolution.id,
        created: resolution.created,
        operations,
    })
}
