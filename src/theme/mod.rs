//! Theme parsing: from a plist document to a set of converted colors.
//!
//! An iTerm2 theme carries many keys (cursor colors, selection colors,
//! alpha components, ...). Only the keys GNOME Terminal profiles need are
//! consumed: the 16 `Ansi <n> Color` palette slots plus `Foreground Color`,
//! `Background Color` and `Bold Color`. Everything else is ignored so that
//! newer iTerm2 exports keep working.

mod color;

pub use color::{ColorComponents, HexColor, channel_hex};

use serde::Serialize;
use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::plist::PlistValue;

/// Number of ANSI palette slots in a terminal profile.
pub const PALETTE_SIZE: usize = 16;

/// The colors extracted from a theme, converted to dconf literals.
///
/// Palette slots absent from the source document stay `None`; whether that
/// is acceptable is decided at command-build time, not here.
#[derive(Debug, Clone, Serialize)]
pub struct ColorExport {
    pub foreground: HexColor,
    pub background: HexColor,
    pub bold: HexColor,
    pub palette: [Option<HexColor>; PALETTE_SIZE],
}

/// Parse the ordered plist entries of a theme into a `ColorExport`.
///
/// Duplicate `Ansi <n> Color` keys are resolved last-write-wins, matching
/// how iTerm2 itself reads such documents.
///
/// # Errors
///
/// `MalformedColorEntry` if a recognized color lacks an RGB component,
/// `MissingColorKey` if the document has no foreground, background or
/// bold color.
pub fn parse_theme(entries: &[(String, PlistValue)]) -> Result<ColorExport> {
    let mut foreground = None;
    let mut background = None;
    let mut bold = None;
    let mut palette: [Option<HexColor>; PALETTE_SIZE] = Default::default();

    for (key, value) in entries {
        if let Some(slot) = ansi_slot(key) {
            if slot < PALETTE_SIZE {
                palette[slot] = Some(color_entry(key, value)?);
            } else {
                debug!(key, slot, "ignoring out-of-range ANSI slot");
            }
        } else {
            match key.as_str() {
                "Foreground Color" => foreground = Some(color_entry(key, value)?),
                "Background Color" => background = Some(color_entry(key, value)?),
                "Bold Color" => bold = Some(color_entry(key, value)?),
                _ => {}
            }
        }
    }

    let require = |color: Option<HexColor>, key: &str| {
        color.ok_or_else(|| ConvertError::MissingColorKey {
            key: key.to_string(),
        })
    };

    Ok(ColorExport {
        foreground: require(foreground, "Foreground Color")?,
        background: require(background, "Background Color")?,
        bold: require(bold, "Bold Color")?,
        palette,
    })
}

/// Extract the slot number from an `Ansi <n> Color` key.
fn ansi_slot(key: &str) -> Option<usize> {
    key.strip_prefix("Ansi ")?
        .strip_suffix(" Color")?
        .parse()
        .ok()
}

/// Convert one recognized color entry's nested dict into a hex literal.
///
/// Components are looked up by name, not position; iTerm2 writes them
/// alphabetically but that ordering is not relied on.
fn color_entry(key: &str, value: &PlistValue) -> Result<HexColor> {
    let component = |name: &str| -> Result<f64> {
        let text = value.get(name).and_then(PlistValue::as_scalar).ok_or_else(|| {
            ConvertError::MalformedColorEntry {
                key: key.to_string(),
                component: name.to_string(),
            }
        })?;
        // iTerm2 always writes parseable reals; anything else reads as 0.0.
        Ok(text.trim().parse().unwrap_or(0.0))
    };

    Ok(HexColor::from_components(ColorComponents {
        red: component("Red Component")?,
        green: component("Green Component")?,
        blue: component("Blue Component")?,
    }))
}
