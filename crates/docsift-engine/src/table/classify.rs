use crate::{
    dictionary::LabelDictionary,
    markup::{BlockId, MarkupTree},
    normalize::normalize,
    section::AntiPattern,
};

/// Normalized first-cell texts that mark a row-number column.
const ROW_MARKERS: &[&str] = &[
    "no", "nr", "sira", "sira no", "s no", "row", "row no", "satir", "satir no",
];

/// Leading columns to skip when the first header cell is a row-number marker.
pub fn detect_offset(first_cell: &str) -> usize {
    let normalized = normalize(first_cell);
    let is_marker = normalized.is_empty()
        || normalized.chars().all(|c| c.is_ascii_digit() || c == ' ')
        || ROW_MARKERS.contains(&normalized.as_str());
    usize::from(is_marker)
}

/// What a header row matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMatch {
    pub header_row: BlockId,
    pub offset: usize,
    /// Dictionary labels the header cells matched, in column order.
    pub matched_labels: Vec<String>,
}

impl TableMatch {
    pub fn match_count(&self) -> usize {
        self.matched_labels.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableVerdict {
    Accepted(TableMatch),
    NoHeaderRow,
    TooFewMatches { found: usize, required: usize },
    Vetoed { phrase: String },
}

impl TableVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, TableVerdict::Accepted(_))
    }
}

/// Decides whether `table` is the table a section's dictionary describes.
///
/// The first row is read as the header. After skipping a row-number column,
/// each header cell that matches any field label counts once; the table is
/// accepted when the count reaches `min_matches`. When `veto` is given, a
/// foreign phrase anywhere in the table rejects it unless one of the
/// section's own strong phrases is present too.
pub fn classify_table(
    tree: &MarkupTree,
    table: BlockId,
    dictionary: &LabelDictionary,
    min_matches: usize,
    veto: Option<&AntiPattern>,
) -> TableVerdict {
    let rows = tree.rows(table);
    let Some(&header_row) = rows.first() else {
        return TableVerdict::NoHeaderRow;
    };
    let header = tree.cell_texts(header_row);
    let Some(first) = header.first() else {
        return TableVerdict::NoHeaderRow;
    };
    let offset = detect_offset(first);

    if let Some(anti) = veto {
        let cells: Vec<String> = rows
            .iter()
            .flat_map(|&r| tree.cell_texts(r))
            .map(normalize)
            .collect();
        if let Some(phrase) = anti.hit(
            cells.iter().map(String::as_str),
            dictionary.strong_phrases(),
        ) {
            return TableVerdict::Vetoed {
                phrase: phrase.to_string(),
            };
        }
    }

    let matched_labels: Vec<String> = header
        .iter()
        .skip(offset)
        .filter_map(|cell| dictionary.match_field_label(&normalize(cell)).map(str::to_string))
        .collect();

    if matched_labels.len() < min_matches {
        return TableVerdict::TooFewMatches {
            found: matched_labels.len(),
            required: min_matches,
        };
    }

    TableVerdict::Accepted(TableMatch {
        header_row,
        offset,
        matched_labels,
    })
}

/// Convenience predicate over [`classify_table`].
pub fn is_matching_table(
    tree: &MarkupTree,
    table: BlockId,
    dictionary: &LabelDictionary,
    min_matches: usize,
    veto: Option<&AntiPattern>,
) -> bool {
    classify_table(tree, table, dictionary, min_matches, veto).is_accepted()
}
