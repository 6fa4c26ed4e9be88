//! XML corpus parsing with ordered alias probing.
//!
//! Real-world corpora name their elements inconsistently, so every lookup is
//! an ordered list of candidate names evaluated until one yields a non-empty
//! result. Container names are matched exactly; child field and attribute
//! names are matched case-insensitively.
//!
//! Malformed input is never fatal here: it produces an empty record list and
//! a logged diagnostic, and the caller decides what an empty corpus means.

use categorix_core::{ReferenceRecord, TargetRecord};
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Reference container element names, tried in order.
pub const REFERENCE_CONTAINERS: [&str; 3] = ["sikayet", "complaint", "item"];

/// Problem-text child aliases for reference containers.
pub const PROBLEM_FIELDS: [&str; 5] = ["problem", "text", "description", "sorun", "aciklama"];

/// Category child aliases for reference containers.
pub const CATEGORY_FIELDS: [&str; 4] = ["category", "kategori", "type", "tip"];

/// Category attribute aliases, probed when no category child matched.
pub const CATEGORY_ATTRIBUTES: [&str; 2] = ["category", "kategori"];

/// Target container element names, tried in order.
pub const TARGET_CONTAINERS: [&str; 3] = ["problem", "item", "row"];

/// Problem-text child aliases for target containers.
pub const TARGET_FIELDS: [&str; 5] = ["a", "column_a", "problem", "text", "description"];

/// A container element reduced to what record extraction probes.
#[derive(Debug, Default, Clone)]
struct RawElement {
    /// Text directly under the element, outside any child.
    text: String,
    /// Attribute names (lowercased) and values.
    attributes: Vec<(String, String)>,
    /// Child element names (lowercased) and their direct text.
    children: Vec<(String, String)>,
}

impl RawElement {
    /// First alias with a non-empty (trimmed) child text.
    fn child_text(&self, aliases: &[&str]) -> Option<&str> {
        aliases.iter().find_map(|alias| {
            self.children
                .iter()
                .map(|(name, text)| (name, text.trim()))
                .find(|(name, text)| name == alias && !text.is_empty())
                .map(|(_, text)| text)
        })
    }

    /// First alias with a non-empty (trimmed) attribute value.
    fn attribute(&self, aliases: &[&str]) -> Option<&str> {
        aliases.iter().find_map(|alias| {
            self.attributes
                .iter()
                .map(|(name, value)| (name, value.trim()))
                .find(|(name, value)| name == alias && !value.is_empty())
                .map(|(_, value)| value)
        })
    }

    /// Direct text of the element itself, trimmed, if non-empty.
    fn direct_text(&self) -> Option<&str> {
        let text = self.text.trim();
        (!text.is_empty()).then_some(text)
    }
}

/// Extract labeled records from a reference document.
///
/// A record is kept only when both the problem text and the category are
/// non-empty after trimming.
pub fn parse_reference(xml: &str) -> Vec<ReferenceRecord> {
    let (container, elements) = match probe_containers(xml, &REFERENCE_CONTAINERS) {
        Ok(probed) => probed,
        Err(err) => {
            warn!(%err, "reference document could not be parsed");
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    for element in &elements {
        let problem = element
            .child_text(&PROBLEM_FIELDS)
            .or_else(|| element.direct_text());
        let category = element
            .child_text(&CATEGORY_FIELDS)
            .or_else(|| element.attribute(&CATEGORY_ATTRIBUTES));

        if let (Some(problem), Some(category)) = (problem, category) {
            records.push(ReferenceRecord::new(problem, category));
        }
    }

    debug!(
        container = container.unwrap_or("-"),
        count = records.len(),
        "parsed reference records"
    );
    records
}

/// Extract unlabeled records from a target document.
///
/// Each kept record remembers its position in the matched element sequence
/// so results can be written back in source order.
pub fn parse_target(xml: &str) -> Vec<TargetRecord> {
    let (container, elements) = match probe_containers(xml, &TARGET_CONTAINERS) {
        Ok(probed) => probed,
        Err(err) => {
            warn!(%err, "target document could not be parsed");
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    for element in &elements {
        let problem = element
            .direct_text()
            .or_else(|| element.child_text(&TARGET_FIELDS));

        if let Some(problem) = problem {
            let original_index = records.len();
            records.push(TargetRecord::new(problem, original_index));
        }
    }

    debug!(
        container = container.unwrap_or("-"),
        count = records.len(),
        "parsed target records"
    );
    records
}

/// The container name a document actually uses, if any.
///
/// Shared with the assembler so that annotation targets exactly the elements
/// the parser extracted records from.
pub(crate) fn matched_container_name<'n>(xml: &str, names: &'n [&'n str]) -> Result<Option<&'n str>> {
    let collected = collect_elements(xml, names)?;
    Ok(names
        .iter()
        .copied()
        .find(|name| collected.iter().any(|(n, _)| n == name)))
}

/// Probe candidate container names in order; the first name with at least one
/// element in the document wins, and only its elements are returned.
fn probe_containers<'n>(
    xml: &str,
    names: &'n [&'n str],
) -> Result<(Option<&'n str>, Vec<RawElement>)> {
    let collected = collect_elements(xml, names)?;
    let chosen = names
        .iter()
        .copied()
        .find(|name| collected.iter().any(|(n, _)| n == name));

    match chosen {
        Some(name) => {
            let elements = collected
                .into_iter()
                .filter(|(n, _)| n == name)
                .map(|(_, element)| element)
                .collect();
            Ok((Some(name), elements))
        }
        None => Ok((None, Vec::new())),
    }
}

/// One pass over the document collecting every element whose name is in
/// `names`, in document order, with its attributes, direct text and children.
///
/// An element nested inside another collected element is recorded as a child
/// of the outer one, never as a separate match.
fn collect_elements(xml: &str, names: &[&str]) -> Result<Vec<(String, RawElement)>> {
    let mut reader = Reader::from_str(xml);
    let mut elements: Vec<(String, RawElement)> = Vec::new();

    let mut depth = 0usize;
    let mut capture_name: Option<String> = None;
    let mut capture_depth = 0usize;
    let mut element = RawElement::default();
    let mut child_name: Option<String> = None;
    let mut child_text = String::new();

    loop {
        match reader.read_event().map_err(malformed)? {
            Event::Eof => break,
            Event::Start(start) => {
                depth += 1;
                let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
                if capture_name.is_none() {
                    if names.contains(&name.as_str()) {
                        capture_depth = depth;
                        element = RawElement::default();
                        for attr in start.attributes().flatten() {
                            let key = String::from_utf8_lossy(attr.key.local_name().as_ref())
                                .to_lowercase();
                            let value = attr.unescape_value().map_err(malformed)?.into_owned();
                            element.attributes.push((key, value));
                        }
                        capture_name = Some(name);
                    }
                } else if child_name.is_none() && depth == capture_depth + 1 {
                    child_name = Some(name.to_lowercase());
                    child_text.clear();
                }
            }
            Event::End(_) => {
                if capture_name.is_some() {
                    if child_name.is_some() && depth == capture_depth + 1 {
                        let name = child_name.take().unwrap_or_default();
                        element.children.push((name, std::mem::take(&mut child_text)));
                    } else if depth == capture_depth {
                        let name = capture_name.take().unwrap_or_default();
                        elements.push((name, std::mem::take(&mut element)));
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Empty(start) => {
                let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
                if capture_name.is_none() {
                    if names.contains(&name.as_str()) {
                        let mut empty = RawElement::default();
                        for attr in start.attributes().flatten() {
                            let key = String::from_utf8_lossy(attr.key.local_name().as_ref())
                                .to_lowercase();
                            let value = attr.unescape_value().map_err(malformed)?.into_owned();
                            empty.attributes.push((key, value));
                        }
                        elements.push((name, empty));
                    }
                } else if child_name.is_none() && depth == capture_depth {
                    element.children.push((name.to_lowercase(), String::new()));
                }
            }
            Event::Text(text) => {
                if capture_name.is_some() {
                    let text = text.unescape().map_err(malformed)?;
                    route_text(
                        &text,
                        depth,
                        capture_depth,
                        child_name.is_some(),
                        &mut element,
                        &mut child_text,
                    );
                }
            }
            Event::CData(cdata) => {
                if capture_name.is_some() {
                    let text = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                    route_text(
                        &text,
                        depth,
                        capture_depth,
                        child_name.is_some(),
                        &mut element,
                        &mut child_text,
                    );
                }
            }
            _ => {}
        }
    }

    Ok(elements)
}

/// Append text to whichever capture level it belongs to: the container's own
/// text, the open child's text, or nowhere (deeper nesting).
fn route_text(
    text: &str,
    depth: usize,
    capture_depth: usize,
    in_child: bool,
    element: &mut RawElement,
    child_text: &mut String,
) {
    if in_child {
        if depth == capture_depth + 1 {
            child_text.push_str(text);
        }
    } else if depth == capture_depth {
        element.text.push_str(text);
    }
}

fn malformed(err: impl std::fmt::Display) -> Error {
    Error::Malformed(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reference_primary_container() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
            <sikayetler>
                <sikayet>
                    <problem>sunucu çöktü</problem>
                    <kategori>Altyapı</kategori>
                </sikayet>
                <sikayet>
                    <problem>kullanıcı şifre unuttu</problem>
                    <kategori>Destek</kategori>
                </sikayet>
            </sikayetler>"#;

        let records = parse_reference(xml);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].problem, "sunucu çöktü");
        assert_eq!(records[0].category, "Altyapı");
        assert_eq!(records[1].category, "Destek");
    }

    #[test]
    fn test_parse_reference_fallback_container_names() {
        let xml = r#"<data>
            <complaint>
                <text>fatura yanlış</text>
                <category>Finans</category>
            </complaint>
        </data>"#;
        let records = parse_reference(xml);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, "Finans");

        let xml = r#"<data>
            <item>
                <description>yazıcı bozuk</description>
                <type>Donanım</type>
            </item>
        </data>"#;
        let records = parse_reference(xml);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].problem, "yazıcı bozuk");
        assert_eq!(records[0].category, "Donanım");
    }

    #[test]
    fn test_primary_container_wins_over_fallbacks() {
        let xml = r#"<data>
            <sikayet><problem>bir</problem><kategori>A</kategori></sikayet>
            <complaint><text>iki</text><category>B</category></complaint>
        </data>"#;
        let records = parse_reference(xml);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].problem, "bir");
    }

    #[test]
    fn test_category_from_attribute_fallback() {
        let xml = r#"<data>
            <sikayet kategori="Altyapı">
                <problem>sunucu çöktü</problem>
            </sikayet>
        </data>"#;
        let records = parse_reference(xml);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, "Altyapı");
    }

    #[test]
    fn test_reference_direct_text_fallback_for_problem() {
        let xml = r#"<data>
            <sikayet category="Ağ">bağlantı kopuyor</sikayet>
        </data>"#;
        let records = parse_reference(xml);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].problem, "bağlantı kopuyor");
        assert_eq!(records[0].category, "Ağ");
    }

    #[test]
    fn test_reference_record_requires_both_fields() {
        let xml = r#"<data>
            <sikayet><problem>   </problem><kategori>Altyapı</kategori></sikayet>
            <sikayet><problem>metin var</problem><kategori></kategori></sikayet>
            <sikayet><problem>geçerli</problem><kategori>Tamam</kategori></sikayet>
        </data>"#;
        let records = parse_reference(xml);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].problem, "geçerli");
    }

    #[test]
    fn test_field_names_match_case_insensitively() {
        let xml = r#"<data>
            <sikayet><Problem>büyük harf</Problem><KATEGORI>Karışık</KATEGORI></sikayet>
        </data>"#;
        let records = parse_reference(xml);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, "Karışık");
    }

    #[test]
    fn test_parse_target_direct_text() {
        let xml = r#"<problems>
            <problem>sunucu çöktü tekrar</problem>
            <problem>  yeni kullanıcı talebi  </problem>
        </problems>"#;
        let records = parse_target(xml);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].problem, "sunucu çöktü tekrar");
        assert_eq!(records[0].original_index, 0);
        assert_eq!(records[1].problem, "yeni kullanıcı talebi");
        assert_eq!(records[1].original_index, 1);
    }

    #[test]
    fn test_parse_target_child_field_probing() {
        let xml = r#"<rows>
            <row><a>ilk sorun</a></row>
            <row><column_a>ikinci sorun</column_a></row>
        </rows>"#;
        let records = parse_target(xml);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].problem, "ilk sorun");
        assert_eq!(records[1].problem, "ikinci sorun");
    }

    #[test]
    fn test_parse_target_skips_empty_elements() {
        let xml = r#"<problems>
            <problem>geçerli</problem>
            <problem>   </problem>
            <problem/>
            <problem>sonuncu</problem>
        </problems>"#;
        let records = parse_target(xml);
        assert_eq!(records.len(), 2);
        // Index reflects the kept sequence, matching result ordering.
        assert_eq!(records[1].problem, "sonuncu");
        assert_eq!(records[1].original_index, 1);
    }

    #[test]
    fn test_malformed_document_yields_empty_lists() {
        let xml = "<sikayetler><sikayet><problem>açık kaldı</x></sikayet></sikayetler>";
        assert!(parse_reference(xml).is_empty());
        assert!(parse_target("not xml at all <<<").is_empty());
    }

    #[test]
    fn test_no_recognized_container_yields_empty_list() {
        let xml = "<root><unrelated>metin</unrelated></root>";
        assert!(parse_reference(xml).is_empty());
        assert!(parse_target(xml).is_empty());
    }

    #[test]
    fn test_escaped_entities_are_decoded() {
        let xml = r#"<problems><problem>a &amp; b</problem></problems>"#;
        let records = parse_target(xml);
        assert_eq!(records[0].problem, "a & b");
    }
}
