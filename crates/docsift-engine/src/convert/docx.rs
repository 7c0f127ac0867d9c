//! Word (OOXML) to markup conversion.
//!
//! Streams `word/document.xml` and maps the body onto blocks: `w:p` to
//! paragraphs (or headings when the paragraph style or outline level says
//! so), `w:tbl`/`w:tr`/`w:tc` to tables, rows and cells. Only run text
//! (`w:t`, `w:tab`, `w:br`) is visible; deleted text and field codes are not.

use std::io::{Cursor, Read, Seek};

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use zip::ZipArchive;

use super::{ConvertError, DocumentConverter};
use crate::markup::{BlockKind, MarkupTree, TreeBuilder};

const DOCUMENT_PART: &str = "word/document.xml";

#[derive(Debug, Clone, Copy, Default)]
pub struct DocxConverter;

impl DocumentConverter for DocxConverter {
    fn convert(&self, bytes: Vec<u8>) -> Result<MarkupTree, ConvertError> {
        if bytes.is_empty() {
            return Err(ConvertError::Empty);
        }
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;
        let xml = read_part(&mut archive, DOCUMENT_PART)?;
        walk_document_xml(&xml)
    }
}

fn read_part<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &'static str,
) -> Result<String, ConvertError> {
    let mut part = match archive.by_name(name) {
        Ok(part) => part,
        Err(zip::result::ZipError::FileNotFound) => return Err(ConvertError::MissingPart(name)),
        Err(e) => return Err(e.into()),
    };
    let mut xml = String::new();
    part.read_to_string(&mut xml)?;
    Ok(xml)
}

/// Walks `document.xml` and builds the block tree.
pub(crate) fn walk_document_xml(xml: &str) -> Result<MarkupTree, ConvertError> {
    let mut reader = Reader::from_str(xml);
    let mut walker = BodyWalker::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => walker.start(&e),
            Event::Empty(e) => walker.empty(&e),
            Event::End(e) => walker.end(e.name().as_ref()),
            Event::Text(t) => {
                if walker.in_text {
                    let text = t.unescape()?;
                    walker.builder.push_text(&text);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(walker.builder.finish())
}

#[derive(Default)]
struct BodyWalker {
    builder: TreeBuilder,
    in_body: bool,
    in_run: bool,
    in_text: bool,
}

impl BodyWalker {
    fn start(&mut self, e: &BytesStart<'_>) {
        match e.name().as_ref() {
            b"w:body" => self.in_body = true,
            _ if !self.in_body => {}
            b"w:p" => {
                self.builder.open(BlockKind::Paragraph);
            }
            b"w:tbl" => {
                self.builder.open(BlockKind::Table);
            }
            b"w:tr" => {
                self.builder.open(BlockKind::TableRow);
            }
            b"w:tc" => {
                self.builder.open(BlockKind::TableCell);
            }
            b"w:r" => self.in_run = true,
            b"w:t" => self.in_text = true,
            _ => self.property(e),
        }
    }

    fn empty(&mut self, e: &BytesStart<'_>) {
        if !self.in_body {
            return;
        }
        match e.name().as_ref() {
            b"w:tab" if self.in_run => self.builder.push_text("\t"),
            b"w:br" | b"w:cr" if self.in_run => self.builder.push_text("\n"),
            _ => self.property(e),
        }
    }

    fn end(&mut self, name: &[u8]) {
        match name {
            b"w:body" => self.in_body = false,
            b"w:p" | b"w:tbl" | b"w:tr" | b"w:tc" if self.in_body => {
                self.builder.close();
            }
            b"w:r" => self.in_run = false,
            b"w:t" => self.in_text = false,
            _ => {}
        }
    }

    /// Paragraph properties that promote the open paragraph to a heading.
    fn property(&mut self, e: &BytesStart<'_>) {
        if self.builder.current_kind() != Some(BlockKind::Paragraph) {
            return;
        }
        let level = match e.name().as_ref() {
            b"w:pStyle" => attr(e, b"w:val").and_then(|v| heading_level_for_style(&v)),
            b"w:outlineLvl" => attr(e, b"w:val")
                .and_then(|v| v.parse::<u8>().ok())
                .filter(|lvl| *lvl < 6)
                .map(|lvl| lvl + 1),
            _ => None,
        };
        if let Some(level) = level {
            self.builder.set_kind(BlockKind::Heading { level });
        }
    }
}

fn attr(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == key)
        .map(|a| String::from_utf8_lossy(&a.value).into_owned())
}

/// Heading level for a paragraph style id, covering English and Turkish Word templates.
fn heading_level_for_style(style_id: &str) -> Option<u8> {
    let id = style_id.to_lowercase();
    match id.as_str() {
        "title" | "konubal" | "konubaslik" => return Some(1),
        "subtitle" | "altkonubal" => return Some(2),
        _ => {}
    }
    let rest = ["heading", "başlık", "baslik", "balk"]
        .iter()
        .find_map(|prefix| id.strip_prefix(prefix))?;
    let level: u8 = rest.trim_start_matches([' ', '_', '-']).parse().ok()?;
    (1..=6).contains(&level).then_some(level)
}
