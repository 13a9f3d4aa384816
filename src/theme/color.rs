//! Color component conversion to dconf hex literals.

use serde::Serialize;

/// RGB components as they appear in an iTerm2 theme: real numbers with a
/// nominal range of 0.0 to 1.0. Out-of-range values are not clamped or
/// rejected; they flow through conversion unchanged (garbage in, garbage out).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorComponents {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

/// A color formatted as a dconf string literal, e.g. `'#FF0000'`.
///
/// The value is stored fully quoted so it can be used verbatim as a
/// `dconf write` argument and inside array literals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    /// Convert an RGB component triple into a quoted hex literal.
    ///
    /// Each channel is scaled by 255 and truncated toward zero, matching
    /// iTerm2's own export behavior. `0.5` becomes `7F`, not `80`.
    #[must_use]
    pub fn from_components(c: ColorComponents) -> Self {
        Self(format!(
            "'#{}{}{}'",
            channel_hex(c.red),
            channel_hex(c.green),
            channel_hex(c.blue)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Format one channel as two uppercase hex digits.
///
/// Truncates (does not round) the scaled value. Inputs outside [0, 1]
/// produce wider or nonsensical output by design; callers are expected
/// to feed nominal iTerm2 component values.
#[must_use]
pub fn channel_hex(v: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let scaled = (v * 255.0) as i64;
    format!("{scaled:02X}")
}
