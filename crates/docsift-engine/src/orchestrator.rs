//! # Section Parser
//!
//! One generic parser drives every section; a [`SectionSpec`] supplies the
//! vocabulary and thresholds that make it a "risks" or "glossary" parser.
//!
//! ## States
//!
//! ```text
//! Idle -> Parsing -> StrictFound | ScanFound | NotFound | Failed
//! ```
//!
//! - **Failed**: the converter rejected the bytes
//! - **StrictFound**: a header was located and content followed it
//! - **ScanFound**: no header, or nothing after it, but scan mode found content
//! - **NotFound**: neither mode produced anything; a valid answer, not a fault
//!
//! Every call is independent. The parser borrows its spec and keeps no state
//! between calls, so one parser may serve many threads.

use crate::{
    collect::{MAX_IGNORED_HEADING_CHARS, collect_after, flow_origin},
    convert::{ConvertError, DocumentConverter},
    locate::{HeaderMatch, find_header},
    markup::{BlockId, MarkupTree},
    normalize::normalize,
    observer::{NullObserver, ParseObserver},
    result::{Mode, ParseIssue, ParseResult, Payload, Row},
    scan::{scan_tables, scan_text, select_text},
    section::{SectionKind, SectionSpec},
    table::{TableVerdict, build_column_map, classify_table, extract_rows},
};

static NULL_OBSERVER: NullObserver = NullObserver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    Idle,
    Parsing,
    StrictFound,
    ScanFound,
    NotFound,
    Failed,
}

impl ParseState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, ParseState::Idle | ParseState::Parsing)
    }
}

pub struct SectionParser<'a> {
    spec: &'a SectionSpec,
    observer: &'a dyn ParseObserver,
}

impl<'a> SectionParser<'a> {
    pub fn new(spec: &'a SectionSpec) -> Self {
        Self {
            spec,
            observer: &NULL_OBSERVER,
        }
    }

    pub fn with_observer(mut self, observer: &'a dyn ParseObserver) -> Self {
        self.observer = observer;
        self
    }

    pub fn spec(&self) -> &SectionSpec {
        self.spec
    }

    /// Converts `bytes` and extracts this section. Never fails; see [`ParseResult`].
    ///
    /// The converter receives its own copy of the buffer.
    pub fn parse(&self, bytes: &[u8], converter: &dyn DocumentConverter) -> ParseResult {
        let run = Run::start(self);
        match converter.convert(bytes.to_vec()) {
            Ok(tree) => run.extract(&tree),
            Err(err) => run.fail(&err),
        }
    }

    /// Extracts this section from an already converted tree.
    pub fn parse_tree(&self, tree: &MarkupTree) -> ParseResult {
        Run::start(self).extract(tree)
    }
}

enum Outcome {
    Found {
        mode: Mode,
        payload: Payload,
        matched_labels: Vec<String>,
    },
    Missing,
}

/// State of one parse call.
struct Run<'p, 'a> {
    parser: &'p SectionParser<'a>,
    state: ParseState,
    issues: Vec<ParseIssue>,
}

impl<'p, 'a> Run<'p, 'a> {
    fn start(parser: &'p SectionParser<'a>) -> Self {
        let mut run = Self {
            parser,
            state: ParseState::Idle,
            issues: Vec::new(),
        };
        run.transition(ParseState::Parsing);
        run
    }

    fn spec(&self) -> &'a SectionSpec {
        self.parser.spec
    }

    fn observer(&self) -> &'a dyn ParseObserver {
        self.parser.observer
    }

    fn transition(&mut self, to: ParseState) {
        self.observer().state_changed(self.spec().key, self.state, to);
        self.state = to;
    }

    fn fail(mut self, err: &ConvertError) -> ParseResult {
        self.issues.push(ParseIssue::ConversionFailure(err.to_string()));
        self.transition(ParseState::Failed);
        self.finish(Outcome::Missing)
    }

    fn extract(mut self, tree: &MarkupTree) -> ParseResult {
        let outcome = match self.strict(tree) {
            Some(outcome) => outcome,
            None => self.scan(tree),
        };
        let terminal = match &outcome {
            Outcome::Found {
                mode: Mode::Strict, ..
            } => ParseState::StrictFound,
            Outcome::Found {
                mode: Mode::Scan, ..
            } => ParseState::ScanFound,
            Outcome::Missing => {
                self.issues.push(ParseIssue::NotFound {
                    section: self.spec().title.to_string(),
                });
                ParseState::NotFound
            }
        };
        self.transition(terminal);
        self.finish(outcome)
    }

    /// Header-anchored extraction. `None` means fall through to scan.
    fn strict(&mut self, tree: &MarkupTree) -> Option<Outcome> {
        let spec = self.spec();
        let header = find_header(tree, &spec.dictionary)?;
        let header_text = tree[header.block].text.clone();
        self.observer().header_located(spec.key, &header, &header_text);

        let outcome = match spec.kind {
            SectionKind::Text => self.strict_text(tree, &header),
            SectionKind::Table => self.strict_table(tree, &header),
        };
        if outcome.is_none() {
            self.issues.push(ParseIssue::EmptyAfterHeader {
                section: spec.title.to_string(),
                header: header_text,
            });
        }
        outcome
    }

    fn strict_text(&self, tree: &MarkupTree, header: &HeaderMatch) -> Option<Outcome> {
        let content = collect_after(tree, header.block, &self.spec().thresholds);
        if content.is_empty() {
            return None;
        }
        Some(Outcome::Found {
            mode: Mode::Strict,
            payload: Payload::text(content),
            matched_labels: vec![header.synonym.clone()],
        })
    }

    /// The table holding the header, if any, else the first accepted table
    /// within `max_elements` blocks of the header, before the next heading.
    fn strict_table(&self, tree: &MarkupTree, header: &HeaderMatch) -> Option<Outcome> {
        let spec = self.spec();
        let origin = flow_origin(tree, header.block);
        if origin != header.block
            && let Some(outcome) = self.accept_table_at(tree, origin, header)
        {
            return Some(outcome);
        }

        let mut cursor = tree.next_in_flow(origin);
        for _ in 0..spec.thresholds.max_elements {
            let id = cursor?;
            let block = &tree[id];
            if block.kind.is_heading() && block.text_len() > MAX_IGNORED_HEADING_CHARS {
                return None;
            }
            if let Some(outcome) = self.accept_table_at(tree, id, header) {
                return Some(outcome);
            }
            cursor = tree.next_in_flow(id);
        }
        None
    }

    fn accept_table_at(
        &self,
        tree: &MarkupTree,
        id: BlockId,
        header: &HeaderMatch,
    ) -> Option<Outcome> {
        let spec = self.spec();
        let veto = spec.veto_for(Mode::Strict);
        for table in tables_at(tree, id) {
            let verdict = classify_table(
                tree,
                table,
                &spec.dictionary,
                spec.thresholds.min_table_matches,
                veto,
            );
            self.observer()
                .table_classified(spec.key, table, Mode::Strict, &verdict);
            let TableVerdict::Accepted(matched) = verdict else {
                continue;
            };
            let rows = self.rows_of(tree, table, matched.header_row);
            if rows.is_empty() {
                continue;
            }
            let mut matched_labels = vec![header.synonym.clone()];
            matched_labels.extend(matched.matched_labels);
            return Some(Outcome::Found {
                mode: Mode::Strict,
                payload: Payload::Table { table_rows: rows },
                matched_labels,
            });
        }
        None
    }

    fn scan(&mut self, tree: &MarkupTree) -> Outcome {
        let outcome = match self.spec().kind {
            SectionKind::Text => self.scan_text(tree),
            SectionKind::Table => self.scan_table(tree),
        };
        if matches!(outcome, Outcome::Found { .. }) {
            self.issues.push(ParseIssue::FallbackUsed);
        }
        outcome
    }

    fn scan_text(&mut self, tree: &MarkupTree) -> Outcome {
        let spec = self.spec();
        let candidates = scan_text(tree, spec, self.observer());
        if candidates.is_empty() {
            return Outcome::Missing;
        }
        if spec.thresholds.top_n == 1 && candidates.len() > 1 {
            self.issues.push(ParseIssue::AmbiguousCandidates {
                count: candidates.len(),
            });
        }

        let content = select_text(&candidates, spec.thresholds.top_n);
        let normalized = normalize(&content);
        let matched_labels = spec
            .dictionary
            .keywords()
            .iter()
            .filter(|k| normalized.contains(k.phrase.as_str()))
            .map(|k| k.phrase.clone())
            .collect();

        Outcome::Found {
            mode: Mode::Scan,
            payload: Payload::text(content),
            matched_labels,
        }
    }

    fn scan_table(&mut self, tree: &MarkupTree) -> Outcome {
        let candidates = scan_tables(tree, self.spec(), self.observer());
        if candidates.len() > 1 {
            self.issues.push(ParseIssue::AmbiguousCandidates {
                count: candidates.len(),
            });
        }
        candidates
            .into_iter()
            .find_map(|candidate| {
                let rows = self.rows_of(tree, candidate.table, candidate.matched.header_row);
                (!rows.is_empty()).then(|| Outcome::Found {
                    mode: Mode::Scan,
                    payload: Payload::Table { table_rows: rows },
                    matched_labels: candidate.matched.matched_labels,
                })
            })
            .unwrap_or(Outcome::Missing)
    }

    fn rows_of(&self, tree: &MarkupTree, table: BlockId, header_row: BlockId) -> Vec<Row> {
        let spec = self.spec();
        let columns = build_column_map(tree, header_row, &spec.dictionary);
        extract_rows(tree, table, &columns, &spec.dictionary, spec.key)
    }

    fn finish(self, outcome: Outcome) -> ParseResult {
        let (found, mode, payload, matched_labels) = match outcome {
            Outcome::Found {
                mode,
                payload,
                matched_labels,
            } => (true, Some(mode), payload, matched_labels),
            Outcome::Missing => (false, None, empty_payload(self.spec().kind), Vec::new()),
        };
        let (errors, warnings): (Vec<_>, Vec<_>) =
            self.issues.into_iter().partition(ParseIssue::is_error);

        ParseResult {
            found,
            mode,
            payload,
            matched_labels,
            errors: errors.iter().map(ToString::to_string).collect(),
            warnings: warnings.iter().map(ToString::to_string).collect(),
        }
    }
}

fn empty_payload(kind: SectionKind) -> Payload {
    match kind {
        SectionKind::Text => Payload::text(String::new()),
        SectionKind::Table => Payload::Table {
            table_rows: Vec::new(),
        },
    }
}

/// The block itself when it is a table, otherwise the tables nested in it.
fn tables_at(tree: &MarkupTree, id: BlockId) -> Vec<BlockId> {
    if tree[id].kind.is_table() {
        return vec![id];
    }
    tree.descendants(id)
        .filter(|&d| tree[d].kind.is_table())
        .collect()
}
