//! Theme document fixtures.
//!
//! Builds `.itermcolors`-shaped plist text so pipeline tests can run
//! against real files without shipping binary fixtures.

use std::fs;
use std::path::{Path, PathBuf};

/// XML for one color dict entry, components in iTerm2's alphabetical order.
pub fn color_entry(key: &str, r: f64, g: f64, b: f64) -> String {
    format!(
        "\t<key>{key}</key>\n\t<dict>\n\
         \t\t<key>Blue Component</key>\n\t\t<real>{b}</real>\n\
         \t\t<key>Green Component</key>\n\t\t<real>{g}</real>\n\
         \t\t<key>Red Component</key>\n\t\t<real>{r}</real>\n\
         \t</dict>\n"
    )
}

/// Wrap dict entries in the plist envelope iTerm2 writes.
pub fn plist_document(entries: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \
         \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n\
         <plist version=\"1.0\">\n<dict>\n{entries}</dict>\n</plist>\n"
    )
}

/// A complete theme: all 16 ANSI slots solid red, white foreground and
/// bold, black background. Values chosen so expected hex literals are
/// obvious in assertions.
pub fn full_theme() -> String {
    let mut entries = String::new();
    for slot in 0..16 {
        entries.push_str(&color_entry(&format!("Ansi {slot} Color"), 1.0, 0.0, 0.0));
    }
    entries.push_str(&color_entry("Foreground Color", 1.0, 1.0, 1.0));
    entries.push_str(&color_entry("Background Color", 0.0, 0.0, 0.0));
    entries.push_str(&color_entry("Bold Color", 1.0, 1.0, 1.0));
    plist_document(&entries)
}

/// A theme whose `Ansi 7 Color` lacks its Blue Component.
pub fn theme_with_malformed_entry() -> String {
    let mut entries = String::new();
    for slot in 0..7 {
        entries.push_str(&color_entry(&format!("Ansi {slot} Color"), 1.0, 0.0, 0.0));
    }
    entries.push_str(
        "\t<key>Ansi 7 Color</key>\n\t<dict>\n\
         \t\t<key>Green Component</key>\n\t\t<real>0.5</real>\n\
         \t\t<key>Red Component</key>\n\t\t<real>0.5</real>\n\
         \t</dict>\n",
    );
    for slot in 8..16 {
        entries.push_str(&color_entry(&format!("Ansi {slot} Color"), 1.0, 0.0, 0.0));
    }
    entries.push_str(&color_entry("Foreground Color", 1.0, 1.0, 1.0));
    entries.push_str(&color_entry("Background Color", 0.0, 0.0, 0.0));
    entries.push_str(&color_entry("Bold Color", 1.0, 1.0, 1.0));
    plist_document(&entries)
}

/// A complete theme that also carries keys this tool does not consume.
pub fn theme_with_extra_keys() -> String {
    let mut entries = String::new();
    entries.push_str(&color_entry("Cursor Color", 0.2, 0.2, 0.2));
    for slot in 0..16 {
        entries.push_str(&color_entry(&format!("Ansi {slot} Color"), 1.0, 0.0, 0.0));
    }
    entries.push_str(&color_entry("Foreground Color", 1.0, 1.0, 1.0));
    entries.push_str(&color_entry("Background Color", 0.0, 0.0, 0.0));
    entries.push_str(&color_entry("Bold Color", 1.0, 1.0, 1.0));
    entries.push_str("\t<key>Color Space</key>\n\t<string>sRGB</string>\n");
    entries.push_str("\t<key>Smart Cursor Color</key>\n\t<false/>\n");
    plist_document(&entries)
}

/// Write theme content to `<dir>/<name>.itermcolors` and return the path.
pub fn write_theme(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(format!("{name}.itermcolors"));
    fs::write(&path, content).expect("failed to write theme fixture");
    path
}
