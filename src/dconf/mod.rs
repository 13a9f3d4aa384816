//! dconf write operation building.
//!
//! GNOME Terminal keeps its profiles under a fixed dconf namespace. This
//! module knows that namespace's key layout and turns a resolved profile
//! id plus a `ColorExport` into the ordered operation list that fully
//! describes the profile. Nothing here touches the store; applying the
//! operations is the executor's job.

use serde::Serialize;

use crate::error::{ConvertError, Result};
use crate::profile::ProfileRecord;
use crate::theme::{ColorExport, PALETTE_SIZE};

/// Root of the GNOME Terminal profile namespace in dconf.
pub const PROFILES_ROOT: &str = "/org/gnome/terminal/legacy/profiles:";

/// Path of a key belonging to one profile.
#[must_use]
pub fn profile_key(id: &str, key: &str) -> String {
    format!("{PROFILES_ROOT}/:{id}/{key}")
}

/// Path of the profile membership list.
#[must_use]
pub fn list_key() -> String {
    format!("{PROFILES_ROOT}/list")
}

/// One key/value write against the store. Immutable once built; the
/// executor applies operations exactly as given, in the order given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteOperation {
    pub path: String,
    pub value: String,
}

impl WriteOperation {
    fn new(path: String, value: impl Into<String>) -> Self {
        Self {
            path,
            value: value.into(),
        }
    }

    /// Render as the equivalent `dconf` command line.
    ///
    /// This string is what dry-run mode prints and what error messages
    /// name; it matches the dconf CLI byte for byte so it can be pasted
    /// into a shell as-is.
    #[must_use]
    pub fn render(&self) -> String {
        format!("dconf write {} \"{}\"", self.path, self.value)
    }
}

/// Build the full, ordered operation list for a profile.
///
/// Order is fixed: foreground, background, bold, palette, visible-name,
/// use-theme-colors, then the membership list. The store applies each key
/// idempotently so the order only matters for reproducible output.
///
/// # Errors
///
/// `IncompletePalette` if any of the 16 slots is unset; no operations are
/// emitted in that case.
pub fn build_operations(
    id: &str,
    export: &ColorExport,
    profiles: &[ProfileRecord],
    theme_name: &str,
) -> Result<Vec<WriteOperation>> {
    let palette = palette_literal(export)?;

    let member_ids = profiles.iter().map(|p| format!("'{}'", p.id));

    Ok(vec![
        WriteOperation::new(profile_key(id, "foreground_color"), export.foreground.as_str()),
        WriteOperation::new(profile_key(id, "background_color"), export.background.as_str()),
        WriteOperation::new(profile_key(id, "bold_color"), export.bold.as_str()),
        WriteOperation::new(profile_key(id, "palette"), palette),
        WriteOperation::new(profile_key(id, "visible-name"), format!("'{theme_name}'")),
        WriteOperation::new(profile_key(id, "use-theme-colors"), "false"),
        WriteOperation::new(list_key(), array_literal(member_ids)),
    ])
}

/// Format the 16-slot palette as a dconf array literal, verifying that
/// every slot resolved.
fn palette_literal(export: &ColorExport) -> Result<String> {
    let missing: Vec<usize> = (0..PALETTE_SIZE)
        .filter(|&i| export.palette[i].is_none())
        .collect();
    if !missing.is_empty() {
        return Err(ConvertError::IncompletePalette { missing });
    }

    Ok(array_literal(
        export.palette.iter().flatten().map(|c| c.as_str().to_string()),
    ))
}

fn array_literal(values: impl Iterator<Item = String>) -> String {
    format!("[{}]", values.collect::<Vec<_>>().join(", "))
}
