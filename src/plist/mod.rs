//! Property-list (plist XML) document model.
//!
//! iTerm2 themes are Apple property lists: a top-level `<dict>` whose
//! children alternate between `<key>` elements and value elements. This
//! module parses that structure into an ordered list of `(key, value)`
//! pairs, preserving document order. Only the subset of plist that
//! `.itermcolors` files use is modeled; unknown element kinds are skipped.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::{ConvertError, Result};

/// A plist value: either scalar text or a nested dictionary.
///
/// Scalars keep their raw text; numeric interpretation is left to the
/// consumer so that lenient parsing rules stay in one place.
#[derive(Debug, Clone, PartialEq)]
pub enum PlistValue {
    Scalar(String),
    Dict(Vec<(String, PlistValue)>),
}

impl PlistValue {
    /// Borrow the scalar text, if this value is a scalar.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::Dict(_) => None,
        }
    }

    /// Borrow the dictionary entries, if this value is a dict.
    pub fn as_dict(&self) -> Option<&[(String, PlistValue)]> {
        match self {
            Self::Dict(entries) => Some(entries),
            Self::Scalar(_) => None,
        }
    }

    /// Look up an entry in a dict by key name, ignoring entry order.
    pub fn get(&self, key: &str) -> Option<&PlistValue> {
        self.as_dict()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

/// What text content is currently being collected.
enum Capture {
    None,
    Key,
    Scalar,
}

/// A dictionary under construction: its entries plus the key awaiting a value.
struct DictFrame {
    entries: Vec<(String, PlistValue)>,
    pending_key: Option<String>,
}

/// Parse a plist XML document into the top-level dict's ordered entries.
///
/// # Errors
///
/// Returns `InvalidDocument` if the XML is malformed, the document has no
/// top-level `<dict>`, or a value appears without a preceding `<key>`.
pub fn parse_document(content: &str) -> Result<Vec<(String, PlistValue)>> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut stack: Vec<DictFrame> = Vec::new();
    let mut root: Option<Vec<(String, PlistValue)>> = None;
    let mut capture = Capture::None;
    let mut text = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"dict" => {
                    stack.push(DictFrame {
                        entries: Vec::new(),
                        pending_key: None,
                    });
                }
                b"key" => {
                    capture = Capture::Key;
                    text.clear();
                }
                b"real" | b"integer" | b"string" | b"data" | b"date" => {
                    capture = Capture::Scalar;
                    text.clear();
                }
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"true" => insert_value(&mut stack, PlistValue::Scalar("true".to_string()))?,
                b"false" => insert_value(&mut stack, PlistValue::Scalar("false".to_string()))?,
                b"string" | b"real" | b"integer" => {
                    insert_value(&mut stack, PlistValue::Scalar(String::new()))?;
                }
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if !matches!(capture, Capture::None) {
                    let piece = e
                        .unescape()
                        .map_err(|err| ConvertError::InvalidDocument(err.to_string()))?;
                    text.push_str(&piece);
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"key" => {
                    let frame = stack.last_mut().ok_or_else(|| {
                        ConvertError::InvalidDocument("<key> outside of <dict>".to_string())
                    })?;
                    frame.pending_key = Some(std::mem::take(&mut text));
                    capture = Capture::None;
                }
                b"real" | b"integer" | b"string" | b"data" | b"date" => {
                    insert_value(&mut stack, PlistValue::Scalar(std::mem::take(&mut text)))?;
                    capture = Capture::None;
                }
                b"dict" => {
                    let frame = stack.pop().ok_or_else(|| {
                        ConvertError::InvalidDocument("unbalanced </dict>".to_string())
                    })?;
                    if stack.is_empty() {
                        // First top-level dict wins; plist allows only one anyway.
                        if root.is_none() {
                            root = Some(frame.entries);
                        }
                    } else {
                        insert_value(&mut stack, PlistValue::Dict(frame.entries))?;
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(ConvertError::InvalidDocument(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    root.ok_or_else(|| ConvertError::InvalidDocument("no top-level <dict> found".to_string()))
}

/// Attach a completed value to the innermost dict under its pending key.
fn insert_value(stack: &mut [DictFrame], value: PlistValue) -> Result<()> {
    let frame = stack
        .last_mut()
        .ok_or_else(|| ConvertError::InvalidDocument("value outside of <dict>".to_string()))?;
    let key = frame.pending_key.take().ok_or_else(|| {
        ConvertError::InvalidDocument("value without a preceding <key>".to_string())
    })?;
    frame.entries.push((key, value));
    Ok(())
}
