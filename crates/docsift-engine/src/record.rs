//! # Section Records
//!
//! The persisted form of a section: what the calling layer stores per
//! section as an opaque JSON string, and the flat placeholder mapping the
//! template export is handed.
//!
//! Stored records may predate the current shape or have been edited by
//! hand. Reading one never fails; anything unreadable is kept verbatim as
//! text so no user content is lost.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::result::{ParseResult, Payload, Row};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionRecord {
    Table { rows: Vec<Row> },
    Text { content: String },
}

impl From<&ParseResult> for SectionRecord {
    fn from(result: &ParseResult) -> Self {
        match &result.payload {
            Payload::Text { content, .. } => SectionRecord::Text {
                content: content.clone(),
            },
            Payload::Table { table_rows } => SectionRecord::Table {
                rows: table_rows.clone(),
            },
        }
    }
}

impl SectionRecord {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Reads a stored record, wrapping unreadable input as text content.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|_| SectionRecord::Text {
            content: raw.to_string(),
        })
    }

    pub fn is_empty(&self) -> bool {
        match self {
            SectionRecord::Text { content } => content.trim().is_empty(),
            SectionRecord::Table { rows } => rows.is_empty(),
        }
    }

    /// Placeholder name to value, as the template export consumes it.
    ///
    /// Text maps `{key}` to the content. Tables map `{key}.{row}.{field}` to
    /// each cell, rows numbered from 1 in stored order.
    pub fn export_fields(&self, section_key: &str) -> BTreeMap<String, String> {
        match self {
            SectionRecord::Text { content } => {
                BTreeMap::from([(section_key.to_string(), content.clone())])
            }
            SectionRecord::Table { rows } => rows
                .iter()
                .enumerate()
                .flat_map(|(i, row)| {
                    row.data.iter().map(move |(field, value)| {
                        (format!("{section_key}.{}.{field}", i + 1), value.clone())
                    })
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Mode;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn row(id: &str, pairs: &[(&str, &str)]) -> Row {
        Row {
            id: id.into(),
            data: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn text_record_shape() {
        let record = SectionRecord::Text {
            content: "Kapsam".into(),
        };
        assert_eq!(record.to_json().unwrap(), r#"{"content":"Kapsam"}"#);
    }

    #[test]
    fn table_record_reads_back() {
        let record = SectionRecord::Table {
            rows: vec![row("glossary-1", &[("term", "BA"), ("definition", "")])],
        };
        let json = record.to_json().unwrap();
        assert!(json.starts_with(r#"{"rows":"#));
        assert_eq!(SectionRecord::from_json(&json), record);
    }

    #[rstest]
    #[case("not json at all")]
    #[case("{\"content\": ")]
    #[case("[1, 2, 3]")]
    #[case("{\"rows\": \"wrong\"}")]
    fn unreadable_input_is_kept_as_text(#[case] raw: &str) {
        assert_eq!(
            SectionRecord::from_json(raw),
            SectionRecord::Text {
                content: raw.into()
            }
        );
    }

    #[test]
    fn built_from_parse_result() {
        let result = ParseResult {
            found: true,
            mode: Some(Mode::Strict),
            payload: Payload::text("Metin".into()),
            matched_labels: vec![],
            errors: vec![],
            warnings: vec![],
        };
        assert_eq!(
            SectionRecord::from(&result),
            SectionRecord::Text {
                content: "Metin".into()
            }
        );
    }

    #[test]
    fn table_export_numbers_rows_from_one() {
        let record = SectionRecord::Table {
            rows: vec![
                row("h-1", &[("version", "1.0"), ("author", "Ali")]),
                row("h-2", &[("version", "1.1"), ("author", "")]),
            ],
        };
        let fields = record.export_fields("document_history");
        assert_eq!(fields.len(), 4);
        assert_eq!(fields["document_history.1.version"], "1.0");
        assert_eq!(fields["document_history.2.author"], "");
    }

    #[test]
    fn text_export_uses_section_key() {
        let record = SectionRecord::from_json("düz metin");
        let fields = record.export_fields("risks");
        assert_eq!(fields["risks"], "düz metin");
    }
}
