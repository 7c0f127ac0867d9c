//! # Section Specifications
//!
//! A `SectionSpec` is everything that distinguishes one section parser from
//! another: its vocabulary ([`LabelDictionary`]), whether it yields free text
//! or table rows, its tuned thresholds and an optional anti-pattern veto.
//! The extraction algorithm itself is shared; see [`crate::orchestrator`].
//!
//! The thresholds are empirical. They were tuned against real analysis
//! documents, not derived, which is why each one is overridable from
//! configuration rather than hard-wired.

use crate::{dictionary::LabelDictionary, normalize::normalize, result::Mode};

/// Steps the content collector may take past a header.
pub const DEFAULT_MAX_ELEMENTS: usize = 20;

/// Whether a section yields a block of text or table rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Text,
    Table,
}

impl SectionKind {
    pub fn label(self) -> &'static str {
        match self {
            SectionKind::Text => "text",
            SectionKind::Table => "table",
        }
    }
}

/// Per-section tuning knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// Blocks the collector may walk past a header before giving up.
    pub max_elements: usize,
    /// Paragraphs collected after a header in strict mode.
    pub max_paragraphs: usize,
    /// Shortest block (in characters) scan mode will score.
    pub min_scan_length: usize,
    /// Lowest score a scan candidate needs to be kept.
    pub score_threshold: u32,
    /// How many ranked scan candidates are concatenated into the result.
    pub top_n: usize,
    /// Header cells that must match the vocabulary for a table to be accepted.
    pub min_table_matches: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            max_elements: DEFAULT_MAX_ELEMENTS,
            max_paragraphs: 3,
            min_scan_length: 50,
            score_threshold: 40,
            top_n: 1,
            min_table_matches: 3,
        }
    }
}

/// Optional replacements for [`Thresholds`] fields, e.g. from a config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThresholdOverrides {
    pub max_elements: Option<usize>,
    pub max_paragraphs: Option<usize>,
    pub min_scan_length: Option<usize>,
    pub score_threshold: Option<u32>,
    pub top_n: Option<usize>,
    pub min_table_matches: Option<usize>,
}

impl Thresholds {
    pub fn apply(&mut self, overrides: &ThresholdOverrides) {
        if let Some(v) = overrides.max_elements {
            self.max_elements = v;
        }
        if let Some(v) = overrides.max_paragraphs {
            self.max_paragraphs = v;
        }
        if let Some(v) = overrides.min_scan_length {
            self.min_scan_length = v;
        }
        if let Some(v) = overrides.score_threshold {
            self.score_threshold = v;
        }
        if let Some(v) = overrides.top_n {
            self.top_n = v.max(1);
        }
        if let Some(v) = overrides.min_table_matches {
            self.min_table_matches = v.max(1);
        }
    }
}

/// Which extraction mode runs the anti-pattern veto.
///
/// Some sections only veto during scan, some only in strict mode. The
/// per-section choice is kept as tuned rather than unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VetoScope {
    Strict,
    Scan,
    Both,
}

impl VetoScope {
    pub fn covers(self, mode: Mode) -> bool {
        matches!(
            (self, mode),
            (VetoScope::Both, _) | (VetoScope::Strict, Mode::Strict) | (VetoScope::Scan, Mode::Scan)
        )
    }
}

/// Phrases from a sibling section's vocabulary that reject a candidate
/// unless one of this section's own strong phrases is also present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AntiPattern {
    pub foreign: Vec<String>,
    pub scope: VetoScope,
}

impl AntiPattern {
    pub fn new(scope: VetoScope, phrases: &[&str]) -> Self {
        Self {
            foreign: phrases
                .iter()
                .map(|p| normalize(p))
                .filter(|p| !p.is_empty())
                .collect(),
            scope,
        }
    }

    /// The first foreign phrase found in any of the normalized texts, unless
    /// an own strong phrase is present too.
    pub fn hit<'a, I>(&self, texts: I, own_strong: &[String]) -> Option<&str>
    where
        I: IntoIterator<Item = &'a str> + Clone,
    {
        let has_own = texts
            .clone()
            .into_iter()
            .any(|t| own_strong.iter().any(|s| t.contains(s.as_str())));
        if has_own {
            return None;
        }
        texts.into_iter().find_map(|t| {
            self.foreign
                .iter()
                .find(|f| t.contains(f.as_str()))
                .map(String::as_str)
        })
    }
}

#[derive(Debug, Clone)]
pub struct SectionSpec {
    /// Stable snake_case key used for persistence and configuration.
    pub key: &'static str,
    /// Display title, used in messages.
    pub title: &'static str,
    pub kind: SectionKind,
    pub dictionary: LabelDictionary,
    pub thresholds: Thresholds,
    pub anti_pattern: Option<AntiPattern>,
}

impl SectionSpec {
    pub fn text(key: &'static str, title: &'static str, dictionary: LabelDictionary) -> Self {
        Self {
            key,
            title,
            kind: SectionKind::Text,
            dictionary,
            thresholds: Thresholds::default(),
            anti_pattern: None,
        }
    }

    pub fn table(key: &'static str, title: &'static str, dictionary: LabelDictionary) -> Self {
        Self {
            kind: SectionKind::Table,
            ..Self::text(key, title, dictionary)
        }
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_anti_pattern(mut self, anti_pattern: AntiPattern) -> Self {
        self.anti_pattern = Some(anti_pattern);
        self
    }

    /// The anti-pattern, if this section runs it in `mode`.
    pub fn veto_for(&self, mode: Mode) -> Option<&AntiPattern> {
        self.anti_pattern
            .as_ref()
            .filter(|a| a.scope.covers(mode))
    }
}
