//! Resource-document parsing.

use anyhow::{Context, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// One entry of a resource document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    /// Entry key with whitespace replaced by `_`; doubles as the runtime
    /// lookup key on the generated getter.
    pub name: String,
    /// Entry text, used as the doc snippet on the generated getter.
    pub value: String,
}

/// Parses the `data` elements of a resource document, in document order.
///
/// Only direct children of the root named `data` and carrying a `name`
/// attribute are consulted; headers, schema blocks and unknown attributes
/// are ignored. The value is the concatenated text and CDATA content of the
/// element, with surrounding whitespace trimmed and entities unescaped.
pub fn parse_resource_document(xml: &str) -> Result<Vec<ResourceEntry>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    // (name, value, depth at which the data element started)
    let mut current: Option<(String, String, usize)> = None;
    let mut depth = 0usize;

    loop {
        match reader.read_event().context("malformed resource document")? {
            Event::Start(start) => {
                depth += 1;
                if current.is_none()
                    && depth == 2
                    && start.name().as_ref() == b"data"
                    && let Some(name) = data_name(&start)?
                {
                    current = Some((name, String::new(), depth));
                }
            }
            Event::Empty(start) => {
                if current.is_none()
                    && depth == 1
                    && start.name().as_ref() == b"data"
                    && let Some(name) = data_name(&start)?
                {
                    entries.push(ResourceEntry {
                        name,
                        value: String::new(),
                    });
                }
            }
            Event::Text(text) => {
                if let Some((_, value, _)) = current.as_mut() {
                    value.push_str(&text.unescape().context("malformed text content")?);
                }
            }
            Event::CData(cdata) => {
                if let Some((_, value, _)) = current.as_mut() {
                    value.push_str(std::str::from_utf8(&cdata).context("resource document is not UTF-8")?);
                }
            }
            Event::End(_) => {
                if let Some((name, value, start_depth)) = current.take() {
                    if depth == start_depth {
                        entries.push(ResourceEntry { name, value });
                    } else {
                        current = Some((name, value, start_depth));
                    }
                }
                depth -= 1;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(entries)
}

fn data_name(start: &BytesStart<'_>) -> Result<Option<String>> {
    let attr = start
        .try_get_attribute("name")
        .context("malformed attribute on data element")?;
    match attr {
        Some(attr) => {
            let raw = attr.unescape_value().context("malformed name attribute")?;
            Ok(Some(normalize_name(&raw)))
        }
        None => Ok(None),
    }
}

/// Whitespace in entry names becomes `_` so the name can serve as an
/// identifier.
fn normalize_name(raw: &str) -> String {
    raw.chars().map(|c| if c.is_whitespace() { '_' } else { c }).collect()
}
