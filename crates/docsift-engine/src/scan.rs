//! # Scan Mode
//!
//! The fallback when no header leads to content: every eligible block in the
//! document is scored against the section's vocabulary and the best ones are
//! promoted. Text sections score paragraphs by keyword weight; table sections
//! rank every table that passes the structural test.
//!
//! ## Key Invariants
//!
//! - Ranking is deterministic: score descending, then document order
//! - Blocks inside tables are never text candidates
//! - A blacklisted or vetoed block is rejected regardless of its score

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    dictionary::LabelDictionary,
    markup::{BlockId, BlockKind, MarkupTree},
    normalize::{normalize, occurrences},
    observer::ParseObserver,
    result::Mode,
    section::SectionSpec,
    table::{TableMatch, TableVerdict, classify_table},
};

/// Characters of text per point of length bonus.
pub const LENGTH_BONUS_DIVISOR: usize = 20;

/// Cap on the length bonus, so a long but off-topic block cannot win on size.
pub const MAX_LENGTH_BONUS: u32 = 15;

/// Added when two or more distinct strong phrases appear in one block.
pub const COMBINATION_BONUS: u32 = 20;

/// Subtracted per outline number or dotted leader, the marks of a table of contents.
pub const NUMBERING_PENALTY: u32 = 15;

/// Table score per matched header label.
pub const TABLE_MATCH_WEIGHT: u32 = 10;

/// Cap on the per-data-row bonus a table earns.
pub const MAX_TABLE_ROW_BONUS: usize = 10;

/// "1.2 ", "3.4.1. " at the start of a line.
static OUTLINE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*\d+(?:\.\d+)+\.?\s").expect("Invalid outline number regex")
});

/// "Giriş ........ 4" and its ellipsis variant.
static DOTTED_LEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)(?:\.{4,}|…{2,})\s*\d+\s*$").expect("Invalid dotted leader regex")
});

/// A scored text block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub block: BlockId,
    pub score: u32,
    pub text: String,
}

/// A table that passed the structural test during scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCandidate {
    pub table: BlockId,
    pub score: u32,
    pub matched: TableMatch,
}

/// Why a block was not kept as a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    InsideTable,
    TooShort { chars: usize, min: usize },
    NoLetters,
    Blacklisted { phrase: String },
    Vetoed { phrase: String },
    BelowThreshold { score: u32, threshold: u32 },
    Table(TableVerdict),
}

/// Components of a text block's score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub keywords: u32,
    pub length_bonus: u32,
    pub combination_bonus: u32,
    pub numbering_penalty: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        (self.keywords + self.length_bonus + self.combination_bonus)
            .saturating_sub(self.numbering_penalty)
    }
}

/// Scores one block's text. `normalized` must be `normalize(raw)`.
pub fn score_text(raw: &str, normalized: &str, dictionary: &LabelDictionary) -> ScoreBreakdown {
    let keywords = dictionary
        .keywords()
        .iter()
        .map(|k| occurrences(normalized, &k.phrase) as u32 * k.tier.weight())
        .sum();

    let length_bonus = ((raw.chars().count() / LENGTH_BONUS_DIVISOR) as u32).min(MAX_LENGTH_BONUS);

    let strong_present = dictionary
        .strong_phrases()
        .iter()
        .filter(|s| normalized.contains(s.as_str()))
        .count();
    let combination_bonus = if strong_present >= 2 {
        COMBINATION_BONUS
    } else {
        0
    };

    let markers = OUTLINE_NUMBER.find_iter(raw).count() + DOTTED_LEADER.find_iter(raw).count();
    let numbering_penalty = markers as u32 * NUMBERING_PENALTY;

    ScoreBreakdown {
        keywords,
        length_bonus,
        combination_bonus,
        numbering_penalty,
    }
}

/// Paragraphs, and containers holding nothing but inline runs.
fn is_scan_eligible(tree: &MarkupTree, id: BlockId) -> bool {
    match tree[id].kind {
        BlockKind::Paragraph => true,
        BlockKind::Div => tree
            .children(id)
            .iter()
            .all(|&c| !tree[c].kind.is_block_level()),
        _ => false,
    }
}

/// Ranks every eligible text block of the document for `spec`.
pub fn scan_text(
    tree: &MarkupTree,
    spec: &SectionSpec,
    observer: &dyn ParseObserver,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for (id, _) in tree.iter().filter(|(id, _)| is_scan_eligible(tree, *id)) {
        match evaluate_text(tree, id, spec) {
            Ok(candidate) => {
                observer.candidate_scored(spec.key, &candidate);
                candidates.push(candidate);
            }
            Err(rejection) => observer.candidate_rejected(spec.key, id, &rejection),
        }
    }
    rank(&mut candidates, |c| (c.score, c.block));
    candidates
}

fn evaluate_text(tree: &MarkupTree, id: BlockId, spec: &SectionSpec) -> Result<Candidate, Rejection> {
    let raw = tree[id].text.trim();
    let thresholds = &spec.thresholds;

    if tree.is_inside_table(id) {
        return Err(Rejection::InsideTable);
    }
    let chars = raw.chars().count();
    if chars < thresholds.min_scan_length {
        return Err(Rejection::TooShort {
            chars,
            min: thresholds.min_scan_length,
        });
    }
    if !raw.chars().any(char::is_alphabetic) {
        return Err(Rejection::NoLetters);
    }

    let normalized = normalize(raw);
    if let Some(hit) = spec.dictionary.blacklist_hit(&normalized) {
        return Err(Rejection::Blacklisted {
            phrase: hit.phrase.clone(),
        });
    }
    if let Some(anti) = spec.veto_for(Mode::Scan)
        && let Some(phrase) = anti.hit([normalized.as_str()], spec.dictionary.strong_phrases())
    {
        return Err(Rejection::Vetoed {
            phrase: phrase.to_string(),
        });
    }

    let score = score_text(raw, &normalized, &spec.dictionary).total();
    if score < thresholds.score_threshold {
        return Err(Rejection::BelowThreshold {
            score,
            threshold: thresholds.score_threshold,
        });
    }

    Ok(Candidate {
        block: id,
        score,
        text: raw.to_string(),
    })
}

/// The top `top_n` candidates' text in rank order, joined by a blank line.
pub fn select_text(candidates: &[Candidate], top_n: usize) -> String {
    candidates
        .iter()
        .take(top_n.max(1))
        .map(|c| c.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Ranks every table of the document that passes the structural test for `spec`.
pub fn scan_tables(
    tree: &MarkupTree,
    spec: &SectionSpec,
    observer: &dyn ParseObserver,
) -> Vec<TableCandidate> {
    let veto = spec.veto_for(Mode::Scan);
    let mut candidates = Vec::new();
    for table in tree.tables() {
        let verdict = classify_table(
            tree,
            table,
            &spec.dictionary,
            spec.thresholds.min_table_matches,
            veto,
        );
        observer.table_classified(spec.key, table, Mode::Scan, &verdict);
        match verdict {
            TableVerdict::Accepted(matched) => {
                let data_rows = tree.rows(table).len().saturating_sub(1);
                let score = matched.match_count() as u32 * TABLE_MATCH_WEIGHT
                    + data_rows.min(MAX_TABLE_ROW_BONUS) as u32;
                candidates.push(TableCandidate {
                    table,
                    score,
                    matched,
                });
            }
            other => observer.candidate_rejected(spec.key, table, &Rejection::Table(other)),
        }
    }
    rank(&mut candidates, |c| (c.score, c.table));
    candidates
}

/// Score descending, then document order. Stable, so equal keys keep scan order.
fn rank<T>(items: &mut [T], key: impl Fn(&T) -> (u32, BlockId)) {
    items.sort_by(|a, b| {
        let (sa, ia) = key(a);
        let (sb, ib) = key(b);
        sb.cmp(&sa).then(ia.cmp(&ib))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        markup::{
            TreeBuilder,
            test_support::{heading, para, table},
        },
        observer::NullObserver,
        section::{AntiPattern, Thresholds, VetoScope},
    };
    use pretty_assertions::assert_eq;

    fn risk_spec() -> SectionSpec {
        let dictionary = LabelDictionary::builder()
            .headers(&["Riskler"])
            .canonical(&["riskler"])
            .strong(&["risk seviyesi", "etki analizi"])
            .generic(&["risk", "etki"])
            .blacklist(&[("icindekiler", 10)])
            .build();
        SectionSpec::text("risks", "Risks", dictionary).with_thresholds(Thresholds {
            min_scan_length: 40,
            score_threshold: 30,
            ..Thresholds::default()
        })
    }

    const RISKY: &str = "Projenin en büyük riskleri için risk seviyesi yüksek olarak \
                         belirlenmiş, etki analizi yapılmıştır.";

    #[test]
    fn strong_cooccurrence_earns_bonus() {
        let spec = risk_spec();
        let breakdown = score_text(RISKY, &normalize(RISKY), &spec.dictionary);
        assert_eq!(breakdown.combination_bonus, COMBINATION_BONUS);
        assert_eq!(breakdown.numbering_penalty, 0);
        assert!(breakdown.total() >= spec.thresholds.score_threshold);
    }

    #[test]
    fn table_of_contents_lines_are_penalized() {
        let toc = "1.1 Risk seviyesi ........ 4\n1.2 Etki analizi ........ 5";
        let spec = risk_spec();
        let breakdown = score_text(toc, &normalize(toc), &spec.dictionary);
        assert_eq!(breakdown.numbering_penalty, 4 * NUMBERING_PENALTY);
    }

    #[test]
    fn ranks_by_score_then_document_order() {
        let mut b = TreeBuilder::new();
        heading(&mut b, 1, "Giriş");
        let weak = para(
            &mut b,
            "Bu bölümde riskler ve etkiler genel olarak ele alınmaktadır, risk yönetimi önemlidir.",
        );
        let strong = para(&mut b, RISKY);
        let twin = para(&mut b, RISKY);
        let tree = b.finish();

        let ranked = scan_text(&tree, &risk_spec(), &NullObserver);
        let order: Vec<_> = ranked.iter().map(|c| c.block).collect();
        assert_eq!(order, [strong, twin, weak]);
        assert_eq!(scan_text(&tree, &risk_spec(), &NullObserver), ranked);
    }

    #[test]
    fn table_cells_short_text_and_blacklist_are_rejected() {
        let mut b = TreeBuilder::new();
        table(&mut b, &[&[RISKY]]);
        para(&mut b, "Risk seviyesi, etki analizi.");
        para(&mut b, &format!("İçindekiler {RISKY}"));
        let tree = b.finish();
        assert!(scan_text(&tree, &risk_spec(), &NullObserver).is_empty());
    }

    #[test]
    fn scan_veto_rejects_foreign_paragraph() {
        let spec = risk_spec().with_anti_pattern(AntiPattern::new(VetoScope::Scan, &["kabul kriteri"]));
        let text = "Kabul kriteri olarak risk ve etki değerlendirmesi yapılacak, riskler izlenecek.";
        let mut b = TreeBuilder::new();
        para(&mut b, text);
        let tree = b.finish();
        assert!(scan_text(&tree, &spec, &NullObserver).is_empty());
        assert!(!scan_text(&tree, &risk_spec(), &NullObserver).is_empty());
    }

    #[test]
    fn select_joins_top_n_in_rank_order() {
        let c = |n: usize, text: &str| Candidate {
            block: BlockId(n),
            score: 100 - n as u32,
            text: text.into(),
        };
        let candidates = [c(0, "a"), c(1, "b"), c(2, "c")];
        assert_eq!(select_text(&candidates, 2), "a\n\nb");
        assert_eq!(select_text(&candidates, 0), "a");
    }

    #[test]
    fn tables_rank_by_matches_then_rows() {
        let spec = SectionSpec::table(
            "glossary",
            "Glossary",
            LabelDictionary::builder()
                .field("term", &["Terim"])
                .field("definition", &["Tanım"])
                .field("abbreviation", &["Kısaltma"])
                .build(),
        )
        .with_thresholds(Thresholds {
            min_table_matches: 2,
            ..Thresholds::default()
        });
        let mut b = TreeBuilder::new();
        let small = table(&mut b, &[&["Terim", "Tanım"], &["BA", "İş analizi"]]);
        table(&mut b, &[&["Ad", "Soyad"], &["Ali", "Veli"]]);
        let full = table(
            &mut b,
            &[&["Terim", "Tanım", "Kısaltma"], &["Ba", "İş analizi", "BA"]],
        );
        let tree = b.finish();

        let ranked = scan_tables(&tree, &spec, &NullObserver);
        let order: Vec<_> = ranked.iter().map(|c| c.table).collect();
        assert_eq!(order, [full, small]);
        assert_eq!(ranked[0].score, 3 * TABLE_MATCH_WEIGHT + 1);
    }
}
