//! # Parse Results
//!
//! The engine's output contract. Everything a parse learns, including why it
//! failed, is carried in a [`ParseResult`]; the public parse entry points
//! never return `Err` and never panic on document content.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

/// Which extraction tier produced the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Header located, content read from what follows it.
    Strict,
    /// No usable header; content chosen by scoring every block.
    Scan,
}

/// One extracted table row.
///
/// `data` holds every field key the section declares. A field with no value
/// in this row is an empty string, never a missing key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub id: String,
    pub data: BTreeMap<String, String>,
}

impl Row {
    pub fn get(&self, field: &str) -> &str {
        self.data.get(field).map(String::as_str).unwrap_or("")
    }
}

/// Section-kind specific half of a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    #[serde(rename_all = "camelCase")]
    Text {
        content: String,
        content_length: usize,
    },
    #[serde(rename_all = "camelCase")]
    Table { table_rows: Vec<Row> },
}

impl Payload {
    pub fn text(content: String) -> Self {
        let content_length = content.chars().count();
        Payload::Text {
            content,
            content_length,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Payload::Text { content, .. } => content.is_empty(),
            Payload::Table { table_rows } => table_rows.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub found: bool,
    /// `None` when nothing was found.
    pub mode: Option<Mode>,
    #[serde(flatten)]
    pub payload: Payload,
    pub matched_labels: Vec<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ParseResult {
    pub fn content(&self) -> Option<&str> {
        match &self.payload {
            Payload::Text { content, .. } => Some(content),
            Payload::Table { .. } => None,
        }
    }

    pub fn rows(&self) -> &[Row] {
        match &self.payload {
            Payload::Table { table_rows } => table_rows,
            Payload::Text { .. } => &[],
        }
    }
}

/// Everything that can go wrong, or merely be worth knowing, during one parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseIssue {
    /// The bytes could not be turned into a markup tree.
    ConversionFailure(String),
    /// Neither strict nor scan mode produced content.
    NotFound { section: String },
    /// A header was located but nothing usable followed it.
    EmptyAfterHeader { section: String, header: String },
    /// Several candidates cleared the threshold; the best one was used.
    AmbiguousCandidates { count: usize },
    /// Content came from scan mode rather than from under a header.
    FallbackUsed,
}

impl ParseIssue {
    /// Errors end up in `errors`, everything else in `warnings`.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            ParseIssue::ConversionFailure(_) | ParseIssue::NotFound { .. }
        )
    }
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseIssue::ConversionFailure(reason) => {
                write!(f, "document could not be converted: {reason}")
            }
            ParseIssue::NotFound { section } => write!(f, "{section} section not found"),
            ParseIssue::EmptyAfterHeader { section, header } => write!(
                f,
                "{section} header \"{header}\" found but no content followed it"
            ),
            ParseIssue::AmbiguousCandidates { count } => write!(
                f,
                "{count} candidates matched; the highest scoring one was used"
            ),
            ParseIssue::FallbackUsed => write!(
                f,
                "no content anchored on a section header; content selected by document scan"
            ),
        }
    }
}
