use std::collections::BTreeMap;

use crate::{
    dictionary::LabelDictionary,
    markup::{BlockId, MarkupTree},
    normalize::normalize,
    result::Row,
};

use super::classify::detect_offset;

/// Field key to physical column index, built once per table parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    columns: BTreeMap<String, usize>,
    /// Leading row-number columns skipped in the header (0 or 1).
    pub offset: usize,
}

impl ColumnMap {
    pub fn get(&self, field: &str) -> Option<usize> {
        self.columns.get(field).copied()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Classifies each header cell into at most one field.
///
/// Rules run from most to least specific and the first match wins. Rules of
/// a field already claimed by an earlier column are passed over, so a bare
/// "Sonuç" after "Beklenen Sonuç" still reaches its own field.
pub fn build_column_map(
    tree: &MarkupTree,
    header_row: BlockId,
    dictionary: &LabelDictionary,
) -> ColumnMap {
    let header = tree.cell_texts(header_row);
    let offset = header.first().map_or(0, |first| detect_offset(first));
    let rules = dictionary.column_rules();

    let mut columns = BTreeMap::new();
    for (index, cell) in header.iter().enumerate().skip(offset) {
        let normalized = normalize(cell);
        if normalized.is_empty() {
            continue;
        }
        let Some(rule) = rules
            .iter()
            .filter(|r| !columns.contains_key(r.field))
            .find(|r| r.matches(&normalized))
        else {
            continue;
        };
        columns.insert(rule.field.to_string(), index);
    }

    ColumnMap { columns, offset }
}

/// Extracts data rows below the header.
///
/// Rows whose cells are all blank are skipped without consuming an id, as
/// are repeated header rows (Word repeats them on every page). Every emitted
/// row carries every field key the dictionary declares.
pub fn extract_rows(
    tree: &MarkupTree,
    table: BlockId,
    columns: &ColumnMap,
    dictionary: &LabelDictionary,
    id_prefix: &str,
) -> Vec<Row> {
    let rows = tree.rows(table);
    let Some((&header_row, data_rows)) = rows.split_first() else {
        return Vec::new();
    };
    let header_key = row_key(&tree.cell_texts(header_row));

    let mut out = Vec::new();
    for &row in data_rows {
        let cells = tree.cell_texts(row);
        if cells.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        if row_key(&cells) == header_key {
            continue;
        }

        let data = dictionary
            .field_keys()
            .map(|field| {
                let value = columns
                    .get(field)
                    .and_then(|index| cells.get(index))
                    .map(|c| c.trim().to_string())
                    .unwrap_or_default();
                (field.to_string(), value)
            })
            .collect();

        out.push(Row {
            id: format!("{id_prefix}-{}", out.len() + 1),
            data,
        });
    }
    out
}

fn row_key(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| normalize(c)).collect()
}
