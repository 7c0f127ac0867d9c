//! # Section Catalog
//!
//! The built-in sections of a business-analysis document. Each entry is a
//! [`SectionSpec`]: vocabulary, kind, thresholds and optional veto. The
//! vocabularies are bilingual because the templates these documents come
//! from exist in Turkish and English.
//!
//! ## Modules
//!
//! - **`text_sections`**: narrative sections parsed into one block of text
//! - **`table_sections`**: sections whose content is a table of rows
//!
//! A catalog is prepared once (built-ins, then configuration overrides) and
//! only read afterwards, so [`Catalog::parse_all`] can share it across threads.

mod table_sections;
mod text_sections;

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::{
    convert::DocumentConverter,
    observer::ParseObserver,
    orchestrator::SectionParser,
    result::ParseResult,
    section::{DEFAULT_MAX_ELEMENTS, SectionSpec, ThresholdOverrides, Thresholds},
};

/// Narrative sections whose body is usually one or two paragraphs.
pub const NARRATIVE: Thresholds = Thresholds {
    max_elements: DEFAULT_MAX_ELEMENTS,
    max_paragraphs: 3,
    min_scan_length: 80,
    score_threshold: 40,
    top_n: 1,
    min_table_matches: 3,
};

/// Sections written as a run of items (requirements, risks). Several scan
/// candidates are concatenated because each item is its own paragraph.
pub const ENUMERATED: Thresholds = Thresholds {
    max_elements: DEFAULT_MAX_ELEMENTS,
    max_paragraphs: 5,
    min_scan_length: 50,
    score_threshold: 35,
    top_n: 3,
    min_table_matches: 3,
};

/// Sections made of short statements (assumptions, constraints).
pub const SHORT_FORM: Thresholds = Thresholds {
    max_elements: DEFAULT_MAX_ELEMENTS,
    max_paragraphs: 5,
    min_scan_length: 30,
    score_threshold: 30,
    top_n: 3,
    min_table_matches: 3,
};

/// Tables of four to seven columns with vocabulary of their own.
pub const SPARSE_TABLE: Thresholds = Thresholds {
    min_table_matches: 3,
    ..NARRATIVE
};

/// Tables sharing column names with a sibling table in the same document.
pub const SIBLING_TABLE: Thresholds = Thresholds {
    min_table_matches: 4,
    ..NARRATIVE
};

/// Two-column tables (term and definition).
pub const TWO_COLUMN_TABLE: Thresholds = Thresholds {
    min_table_matches: 2,
    ..NARRATIVE
};

/// Phrases that mark front matter rather than section content.
pub(crate) const FRONT_MATTER: &[(&str, u32)] = &[
    ("İçindekiler", 10),
    ("Table of Contents", 10),
    ("Tablolar Listesi", 6),
    ("Şekiller Listesi", 6),
    ("List of Figures", 6),
    ("Gizlilik Derecesi", 4),
    ("Hizmete Özel", 4),
];

#[derive(Debug, Clone)]
pub struct Catalog {
    specs: Vec<SectionSpec>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Every built-in section, text sections first, in template order.
    pub fn builtin() -> Self {
        let mut specs = text_sections::all();
        specs.extend(table_sections::all());
        Self { specs }
    }

    pub fn from_specs(specs: Vec<SectionSpec>) -> Self {
        Self { specs }
    }

    pub fn get(&self, key: &str) -> Option<&SectionSpec> {
        self.specs.iter().find(|s| s.key == key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut SectionSpec> {
        self.specs.iter_mut().find(|s| s.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.specs.iter().map(|s| s.key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Applies threshold overrides to one section. Returns false for an unknown key.
    pub fn apply_overrides(&mut self, key: &str, overrides: &ThresholdOverrides) -> bool {
        match self.get_mut(key) {
            Some(spec) => {
                spec.thresholds.apply(overrides);
                true
            }
            None => false,
        }
    }

    /// Drops a section from the catalog. Returns false for an unknown key.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.specs.len();
        self.specs.retain(|s| s.key != key);
        self.specs.len() != before
    }

    /// Parses every section of the catalog from the same document.
    pub fn parse_all(
        &self,
        bytes: &[u8],
        converter: &dyn DocumentConverter,
        observer: &dyn ParseObserver,
    ) -> BTreeMap<String, ParseResult> {
        self.parse_specs(self.specs.iter().collect(), bytes, converter, observer)
    }

    /// Parses the named sections. Unknown keys are skipped.
    pub fn parse_selected(
        &self,
        keys: &[&str],
        bytes: &[u8],
        converter: &dyn DocumentConverter,
        observer: &dyn ParseObserver,
    ) -> BTreeMap<String, ParseResult> {
        let specs = self
            .specs
            .iter()
            .filter(|s| keys.contains(&s.key))
            .collect();
        self.parse_specs(specs, bytes, converter, observer)
    }

    /// One independent parse per section, in parallel. Each parse converts its
    /// own copy of the bytes into its own tree.
    fn parse_specs(
        &self,
        specs: Vec<&SectionSpec>,
        bytes: &[u8],
        converter: &dyn DocumentConverter,
        observer: &dyn ParseObserver,
    ) -> BTreeMap<String, ParseResult> {
        specs
            .into_par_iter()
            .map(|spec| {
                let result = SectionParser::new(spec)
                    .with_observer(observer)
                    .parse(bytes, converter);
                (spec.key.to_string(), result)
            })
            .collect()
    }
}
