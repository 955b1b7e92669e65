//! Streaming reader for compiler-generated documentation XML.
//!
//! ```xml
//! <doc>
//!   <assembly><name>Acme.Widgets</name></assembly>
//!   <members>
//!     <member name="T:Acme.Widgets.Button">
//!       <summary>A clickable button.</summary>
//!       <remarks>Renders as <c>&lt;button&gt;</c>.</remarks>
//!     </member>
//!   </members>
//! </doc>
//! ```
//!
//! Only the first `<members>` under the root is read. Element text is the
//! concatenation of every descendant text node, so inline markup such as
//! `<see cref="..."/>` contributes nothing while `<c>x</c>` contributes `x`.

use indexmap::IndexMap;
use indexmap::map::Entry;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;

use super::types::DocumentationEntry;
use crate::error::{DocError, DocResult};

const ROOT_DEPTH: usize = 1;
const SECTION_DEPTH: usize = 2;
const MEMBER_DEPTH: usize = 3;
const FIELD_DEPTH: usize = 4;

pub(crate) struct ParsedDocument {
    pub assembly_name: Option<String>,
    pub entries: IndexMap<String, DocumentationEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    AssemblyName,
    Summary,
    Remarks,
}

struct Capture {
    field: Field,
    depth: usize,
    text: String,
}

struct PendingMember {
    name: Option<String>,
    entry: DocumentationEntry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Other,
    Members,
    Assembly,
}

#[derive(Default)]
struct Collector {
    saw_root: bool,
    saw_members: bool,
    section: Option<Section>,
    assembly_name: Option<String>,
    member: Option<PendingMember>,
    capture: Option<Capture>,
    entries: IndexMap<String, DocumentationEntry>,
    skipped: usize,
}

impl Collector {
    fn open(&mut self, element: &BytesStart<'_>, depth: usize) -> Result<(), String> {
        let local = element.local_name();
        let name = local.as_ref();

        match depth {
            ROOT_DEPTH => {
                if self.saw_root {
                    return Err("more than one root element".to_string());
                }
                self.saw_root = true;
            }
            SECTION_DEPTH => {
                self.section = Some(if name == b"members" && !self.saw_members {
                    self.saw_members = true;
                    Section::Members
                } else if name == b"assembly" && self.assembly_name.is_none() {
                    Section::Assembly
                } else {
                    Section::Other
                });
            }
            MEMBER_DEPTH => match self.section {
                Some(Section::Members) if name == b"member" => {
                    self.member = Some(PendingMember {
                        name: name_attribute(element)?,
                        entry: DocumentationEntry::default(),
                    });
                }
                Some(Section::Assembly) if name == b"name" && self.assembly_name.is_none() => {
                    self.start_capture(Field::AssemblyName, depth);
                }
                _ => {}
            },
            FIELD_DEPTH => {
                let field = self.member.as_ref().and_then(|member| match name {
                    b"summary" if member.entry.summary.is_none() => Some(Field::Summary),
                    b"remarks" if member.entry.remarks.is_none() => Some(Field::Remarks),
                    _ => None,
                });
                if let Some(field) = field {
                    self.start_capture(field, depth);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn start_capture(&mut self, field: Field, depth: usize) {
        if self.capture.is_none() {
            self.capture = Some(Capture {
                field,
                depth,
                text: String::new(),
            });
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(capture) = self.capture.as_mut() {
            capture.text.push_str(text);
        }
    }

    fn close(&mut self, depth: usize) {
        if let Some(capture) = self.capture.take_if(|c| c.depth == depth) {
            let value = capture.text.trim().to_string();
            match capture.field {
                Field::AssemblyName => self.assembly_name = Some(value),
                Field::Summary => {
                    if let Some(member) = self.member.as_mut() {
                        member.entry.summary = Some(value);
                    }
                }
                Field::Remarks => {
                    if let Some(member) = self.member.as_mut() {
                        member.entry.remarks = Some(value);
                    }
                }
            }
        }

        match depth {
            MEMBER_DEPTH => {
                if let Some(member) = self.member.take() {
                    self.finish_member(member);
                }
            }
            SECTION_DEPTH => self.section = None,
            _ => {}
        }
    }

    // First element with a given name wins.
    fn finish_member(&mut self, member: PendingMember) {
        let Some(name) = member.name else {
            self.skipped += 1;
            return;
        };
        match self.entries.entry(name) {
            Entry::Vacant(slot) => {
                slot.insert(member.entry);
            }
            Entry::Occupied(slot) => {
                tracing::debug!(target: "xmldoc", "duplicate member {:?} ignored", slot.key());
            }
        }
    }
}

fn name_attribute(element: &BytesStart<'_>) -> Result<Option<String>, String> {
    for attr in element.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        if attr.key.as_ref() == b"name" {
            let value = attr.unescape_value().map_err(|e| e.to_string())?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

/// Parse `xml`, attributing errors to `path`.
pub(crate) fn parse_document(xml: &str, path: &Path) -> DocResult<ParsedDocument> {
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
    let mut reader = Reader::from_str(xml);
    let mut collector = Collector::default();
    let mut depth = 0usize;

    loop {
        let position = reader.buffer_position();
        let event = reader
            .read_event()
            .map_err(|e| DocError::xml(path, format!("{e} at byte {position}")))?;

        match event {
            Event::Start(element) => {
                depth += 1;
                collector
                    .open(&element, depth)
                    .map_err(|reason| DocError::xml(path, reason))?;
            }
            Event::Empty(element) => {
                collector
                    .open(&element, depth + 1)
                    .map_err(|reason| DocError::xml(path, reason))?;
                collector.close(depth + 1);
            }
            Event::End(_) => {
                if depth == 0 {
                    return Err(DocError::xml(path, "closing tag without an open element"));
                }
                collector.close(depth);
                depth -= 1;
            }
            Event::Text(text) => {
                if depth > 0 {
                    let text = text
                        .unescape()
                        .map_err(|e| DocError::xml(path, e.to_string()))?;
                    collector.text(&text);
                } else if !text.iter().all(u8::is_ascii_whitespace) {
                    return Err(DocError::xml(path, "text outside the root element"));
                }
            }
            Event::CData(data) => {
                let data = data.into_inner();
                collector.text(&String::from_utf8_lossy(&data));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(DocError::xml(path, "unexpected end of document"));
    }
    if !collector.saw_root {
        return Err(DocError::xml(path, "no root element"));
    }
    if !collector.saw_members {
        return Err(DocError::MissingMembers {
            path: path.to_path_buf(),
        });
    }
    if collector.skipped > 0 {
        tracing::debug!(
            target: "xmldoc",
            "{} member elements without a name attribute in {}",
            collector.skipped,
            path.display()
        );
    }

    Ok(ParsedDocument {
        assembly_name: collector.assembly_name,
        entries: collector.entries,
    })
}
