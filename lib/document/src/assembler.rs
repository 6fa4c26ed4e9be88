//! Result document assembly.
//!
//! Streams the original target document through unchanged and inserts one
//! `<category>` child into each matched container element, in document order.
//! Mapping is strictly positional: the i-th container receives the i-th
//! label, and containers past the end of the label list are left as they are.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use tracing::debug;

use crate::error::{Error, Result};
use crate::parser::{matched_container_name, TARGET_CONTAINERS};

/// Name of the child element added to each categorized container.
pub const CATEGORY_ELEMENT: &str = "category";

/// Rewrite a target document with category annotations.
///
/// Declarations, comments, attributes and whitespace all pass through
/// untouched. Self-closing containers are expanded when a label exists for
/// them. A document with no recognized container is returned as-is.
pub fn annotate_target<S: AsRef<str>>(xml: &str, labels: &[S]) -> Result<String> {
    let container = match matched_container_name(xml, &TARGET_CONTAINERS)? {
        Some(name) => name,
        None => return Ok(xml.to_string()),
    };

    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Vec::new());

    let mut depth = 0usize;
    let mut capture_depth: Option<usize> = None;
    let mut matched_index = 0usize;

    loop {
        match reader.read_event().map_err(malformed)? {
            Event::Eof => break,
            Event::Start(start) => {
                depth += 1;
                if capture_depth.is_none() && start.local_name().as_ref() == container.as_bytes() {
                    capture_depth = Some(depth);
                }
                writer.write_event(Event::Start(start)).map_err(write_error)?;
            }
            Event::End(end) => {
                if capture_depth == Some(depth) {
                    if matched_index < labels.len() {
                        write_category(&mut writer, labels[matched_index].as_ref())?;
                    }
                    matched_index += 1;
                    capture_depth = None;
                }
                writer.write_event(Event::End(end)).map_err(write_error)?;
                depth = depth.saturating_sub(1);
            }
            Event::Empty(start) => {
                let is_container =
                    capture_depth.is_none() && start.local_name().as_ref() == container.as_bytes();
                if is_container && matched_index < labels.len() {
                    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                    writer.write_event(Event::Start(start)).map_err(write_error)?;
                    write_category(&mut writer, labels[matched_index].as_ref())?;
                    writer
                        .write_event(Event::End(BytesEnd::new(name)))
                        .map_err(write_error)?;
                } else {
                    writer.write_event(Event::Empty(start)).map_err(write_error)?;
                }
                if is_container {
                    matched_index += 1;
                }
            }
            other => writer.write_event(other).map_err(write_error)?,
        }
    }

    debug!(
        container,
        annotated = matched_index.min(labels.len()),
        "assembled result document"
    );
    String::from_utf8(writer.into_inner()).map_err(write_error)
}

fn write_category(writer: &mut Writer<Vec<u8>>, label: &str) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new(CATEGORY_ELEMENT)))
        .map_err(write_error)?;
    writer
        .write_event(Event::Text(BytesText::new(label)))
        .map_err(write_error)?;
    writer
        .write_event(Event::End(BytesEnd::new(CATEGORY_ELEMENT)))
        .map_err(write_error)?;
    Ok(())
}

fn malformed(err: impl std::fmt::Display) -> Error {
    Error::Malformed(err.to_string())
}

fn write_error(err: impl std::fmt::Display) -> Error {
    Error::Write(err.to_string())
}
