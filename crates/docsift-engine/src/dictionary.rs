//! # Label Dictionaries
//!
//! One `LabelDictionary` per section: the synonyms its header may appear
//! under, the column labels of its table (canonical field key to synonyms),
//! the weighted keyword vocabulary used by scan mode and a blacklist of
//! phrases that disqualify a scan candidate outright.
//!
//! Dictionaries are built once when the catalog is constructed and never
//! mutated, so concurrent parses share them without synchronization.
//!
//! ## Key Invariants
//!
//! - Every stored phrase is already normalized (see [`crate::normalize`])
//! - Field keys are unique and keep their declaration order

use crate::normalize::{contains_either, normalize};

/// Shortest normalized header text allowed to match by being contained in a synonym.
pub const MIN_REVERSE_HEADER_LEN: usize = 4;

/// Shortest normalized cell text allowed to match by being contained in a label.
pub const MIN_REVERSE_CELL_LEN: usize = 3;

/// How specific a scan keyword is. Weights are multiplied by occurrence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordTier {
    /// The section's own canonical term ("amaç ve kapsam").
    Canonical,
    /// A compound phrase that rarely appears outside the section.
    Strong,
    /// A single generic word.
    Generic,
}

impl KeywordTier {
    pub fn weight(self) -> u32 {
        match self {
            KeywordTier::Canonical => 25,
            KeywordTier::Strong => 12,
            KeywordTier::Generic => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    pub phrase: String,
    pub tier: KeywordTier,
}

/// A phrase whose presence disqualifies a scan candidate.
///
/// The weight ranks hits against each other when a candidate trips several,
/// so the observer reports the most telling one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlacklistPhrase {
    pub phrase: String,
    pub weight: u32,
}

/// Synonyms for one table column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLabels {
    pub key: String,
    pub synonyms: Vec<String>,
}

/// A column classification rule: the first rule whose phrase matches a header cell wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRule<'a> {
    pub field: &'a str,
    pub phrase: &'a str,
}

impl ColumnRule<'_> {
    /// A multi-word phrase must appear in the cell. A single word also
    /// matches a cell it contains ("Onay" for "onaylayan").
    pub fn matches(&self, normalized_cell: &str) -> bool {
        if self.phrase.contains(' ') {
            normalized_cell.contains(self.phrase)
        } else {
            contains_either(normalized_cell, self.phrase, MIN_REVERSE_CELL_LEN)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LabelDictionary {
    headers: Vec<String>,
    header_vetoes: Vec<String>,
    fields: Vec<FieldLabels>,
    keywords: Vec<Keyword>,
    strong: Vec<String>,
    blacklist: Vec<BlacklistPhrase>,
}

impl LabelDictionary {
    pub fn builder() -> LabelDictionaryBuilder {
        LabelDictionaryBuilder::default()
    }

    pub fn header_synonyms(&self) -> &[String] {
        &self.headers
    }

    pub fn fields(&self) -> &[FieldLabels] {
        &self.fields
    }

    pub fn field_keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.key.as_str())
    }

    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    /// The section's strongest indicators, used for the co-occurrence bonus
    /// and to override an anti-pattern veto.
    pub fn strong_phrases(&self) -> &[String] {
        &self.strong
    }

    pub fn blacklist(&self) -> &[BlacklistPhrase] {
        &self.blacklist
    }

    /// Returns the header synonym matching already-normalized text, if any.
    ///
    /// Text holding a header veto ("non functional") never matches.
    pub fn match_header(&self, normalized: &str) -> Option<&str> {
        if self
            .header_vetoes
            .iter()
            .any(|veto| normalized.contains(veto.as_str()))
        {
            return None;
        }
        self.headers
            .iter()
            .find(|syn| contains_either(normalized, syn, MIN_REVERSE_HEADER_LEN))
            .map(String::as_str)
    }

    /// Returns the first column label (across all fields) matching a normalized cell.
    pub fn match_field_label(&self, normalized_cell: &str) -> Option<&str> {
        self.fields
            .iter()
            .flat_map(|f| f.synonyms.iter())
            .find(|syn| contains_either(normalized_cell, syn, MIN_REVERSE_CELL_LEN))
            .map(String::as_str)
    }

    /// Returns the heaviest blacklist phrase contained in normalized text.
    pub fn blacklist_hit(&self, normalized: &str) -> Option<&BlacklistPhrase> {
        self.blacklist
            .iter()
            .filter(|b| normalized.contains(b.phrase.as_str()))
            .max_by_key(|b| b.weight)
    }

    /// Column rules ordered from most to least specific.
    ///
    /// Multi-word phrases come before single words so that "onay seviyesi"
    /// is tried before the bare "onay" of a different field. Ties keep
    /// declaration order.
    pub fn column_rules(&self) -> Vec<ColumnRule<'_>> {
        let mut rules: Vec<ColumnRule<'_>> = self
            .fields
            .iter()
            .flat_map(|f| {
                f.synonyms.iter().map(move |syn| ColumnRule {
                    field: f.key.as_str(),
                    phrase: syn.as_str(),
                })
            })
            .collect();
        rules.sort_by_key(|r| std::cmp::Reverse(r.phrase.split(' ').count()));
        rules
    }
}

#[derive(Debug, Default)]
pub struct LabelDictionaryBuilder {
    dict: LabelDictionary,
}

impl LabelDictionaryBuilder {
    pub fn headers(mut self, phrases: &[&str]) -> Self {
        push_normalized(&mut self.dict.headers, phrases);
        self
    }

    /// Phrases that rule a header out even when it contains a synonym.
    pub fn header_vetoes(mut self, phrases: &[&str]) -> Self {
        push_normalized(&mut self.dict.header_vetoes, phrases);
        self
    }

    pub fn field(mut self, key: &str, synonyms: &[&str]) -> Self {
        let mut normalized = Vec::with_capacity(synonyms.len());
        push_normalized(&mut normalized, synonyms);
        match self.dict.fields.iter_mut().find(|f| f.key == key) {
            Some(existing) => existing.synonyms.extend(normalized),
            None => self.dict.fields.push(FieldLabels {
                key: key.to_string(),
                synonyms: normalized,
            }),
        }
        self
    }

    pub fn canonical(self, phrases: &[&str]) -> Self {
        self.keywords(KeywordTier::Canonical, phrases)
    }

    /// Strong keywords also count as the section's strongest indicators.
    pub fn strong(mut self, phrases: &[&str]) -> Self {
        push_normalized(&mut self.dict.strong, phrases);
        self.keywords(KeywordTier::Strong, phrases)
    }

    pub fn generic(self, phrases: &[&str]) -> Self {
        self.keywords(KeywordTier::Generic, phrases)
    }

    pub fn blacklist(mut self, phrases: &[(&str, u32)]) -> Self {
        for (phrase, weight) in phrases {
            let phrase = normalize(phrase);
            if !phrase.is_empty() {
                self.dict.blacklist.push(BlacklistPhrase {
                    phrase,
                    weight: *weight,
                });
            }
        }
        self
    }

    pub fn build(self) -> LabelDictionary {
        self.dict
    }

    fn keywords(mut self, tier: KeywordTier, phrases: &[&str]) -> Self {
        for phrase in phrases {
            let phrase = normalize(phrase);
            if !phrase.is_empty() && !self.dict.keywords.iter().any(|k| k.phrase == phrase) {
                self.dict.keywords.push(Keyword { phrase, tier });
            }
        }
        self
    }
}

fn push_normalized(into: &mut Vec<String>, phrases: &[&str]) {
    for phrase in phrases {
        let phrase = normalize(phrase);
        if !phrase.is_empty() && !into.contains(&phrase) {
            into.push(phrase);
        }
    }
}
