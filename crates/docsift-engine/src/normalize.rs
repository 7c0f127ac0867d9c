//! # Text Normalization
//!
//! Every comparison in the engine happens on normalized text. `normalize`
//! lowercases, folds Turkish (and a handful of common Latin) diacritics to
//! their base letters, turns anything that is not a letter, digit or
//! whitespace into a space and collapses whitespace runs.
//!
//! A second pass rejoins words the document converter split apart, e.g. a
//! heading whose letters were formatted individually and came out as
//! `"ama ç ve kapsam"`.
//!
//! ## Key Invariants
//!
//! - Total: every `&str`, including `""`, normalizes without failing
//! - Idempotent: `normalize(&normalize(x)) == normalize(x)`
//! - Output alphabet is lowercase letters, digits and single ASCII spaces

/// Known over-split artifacts, applied on whole-token boundaries until fixpoint.
const SPLIT_WORD_REPAIRS: &[(&str, &str)] = &[
    ("ama c", "amac"),
    ("a mac", "amac"),
    ("kap sam", "kapsam"),
    ("kaps am", "kapsam"),
    ("gerek sinim", "gereksinim"),
    ("gereksi nim", "gereksinim"),
    ("o nay", "onay"),
    ("ona y", "onay"),
    ("pay das", "paydas"),
    ("var sayim", "varsayim"),
    ("sure c", "surec"),
    ("ri sk", "risk"),
];

/// Normalizes text for dictionary matching.
pub fn normalize(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        fold_char(c, &mut folded);
    }

    let collapsed = folded.split_whitespace().collect::<Vec<_>>().join(" ");
    repair_split_words(collapsed)
}

/// Returns true when either phrase contains the other.
///
/// The reverse direction (needle containing the haystack) only counts when
/// the haystack is at least `min_reverse_len` bytes, so a stray one-letter
/// cell does not match every synonym that happens to contain that letter.
pub fn contains_either(haystack: &str, needle: &str, min_reverse_len: usize) -> bool {
    if haystack.is_empty() || needle.is_empty() {
        return false;
    }
    haystack.contains(needle) || (haystack.len() >= min_reverse_len && needle.contains(haystack))
}

/// Counts non-overlapping occurrences of `needle` in `haystack`.
pub fn occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

fn fold_char(c: char, out: &mut String) {
    // Lowercase first: 'İ' becomes 'i' plus a combining dot, which is dropped.
    for lower in c.to_lowercase() {
        let base = match lower {
            'ç' => 'c',
            'ğ' => 'g',
            'ı' | 'î' | 'í' | 'ì' | 'ï' => 'i',
            'ö' | 'ô' | 'ó' | 'ò' => 'o',
            'ş' => 's',
            'ü' | 'û' | 'ú' | 'ù' => 'u',
            'â' | 'á' | 'à' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            '\u{0300}'..='\u{036f}' => continue,
            other if other.is_alphanumeric() => other,
            _ => ' ',
        };
        out.push(base);
    }
}

fn repair_split_words(collapsed: String) -> String {
    if collapsed.is_empty() {
        return collapsed;
    }

    let mut padded = format!(" {collapsed} ");
    loop {
        let mut changed = false;
        for (split, joined) in SPLIT_WORD_REPAIRS {
            let from = format!(" {split} ");
            if padded.contains(&from) {
                padded = padded.replace(&from, &format!(" {joined} "));
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    padded.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("   ", "")]
    #[case("Amaç ve Kapsam", "amac ve kapsam")]
    #[case("AMAÇ VE KAPSAM", "amac ve kapsam")]
    #[case("İŞ BİRİMİ", "is birimi")]
    #[case("Sıra No.", "sira no")]
    #[case("1.2 Purpose & Scope:", "1 2 purpose scope")]
    #[case("Doküman   Onay\tTarihi", "dokuman onay tarihi")]
    #[case("Güvenlik/Yetkilendirme", "guvenlik yetkilendirme")]
    fn normalizes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[rstest]
    #[case("AMA Ç VE KAPSAM", "amac ve kapsam")]
    #[case("Kap sam Dışı", "kapsam disi")]
    #[case("O nay Akışı", "onay akisi")]
    #[case("ama cevap", "ama cevap")]
    fn repairs_split_words(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[test]
    fn decomposed_diacritics_fold_like_precomposed() {
        // "ç" as c + combining cedilla
        assert_eq!(normalize("Amac\u{0327}"), "amac");
    }

    #[rstest]
    #[case("")]
    #[case("Amaç ve Kapsam")]
    #[case("AMA Ç ama c ama c")]
    #[case("— 3.2.1 ....... 14")]
    #[case("İ̇ıIiÇçĞğ ßẞ Ωω 12½")]
    #[case("ÀÈÌÒÙ Ëlçin")]
    #[case("ri sk ri sk o nay")]
    fn normalize_is_idempotent(#[case] input: &str) {
        let once = normalize(input);
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn contains_either_guards_reverse_direction() {
        assert!(contains_either("amac ve kapsam", "amac", 4));
        assert!(contains_either("amac", "amac ve kapsam", 4));
        assert!(!contains_either("a", "amac ve kapsam", 4));
        assert!(!contains_either("", "amac", 4));
    }

    #[test]
    fn counts_occurrences() {
        assert_eq!(occurrences("risk risk riskli", "risk"), 3);
        assert_eq!(occurrences("risk", ""), 0);
    }
}
