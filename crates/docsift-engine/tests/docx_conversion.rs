use std::io::{Cursor, Write};

use docsift_engine::{
    AutoConverter, BlockKind, Catalog, ConvertError, ConverterKind, DocumentConverter,
    DocxConverter, Mode, SectionParser,
};
use pretty_assertions::assert_eq;
use zip::{ZipWriter, write::SimpleFileOptions};

const NS: &str = r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main""#;

fn paragraph(style: Option<&str>, text: &str) -> String {
    let props = style
        .map(|s| format!(r#"<w:pPr><w:pStyle w:val="{s}"/></w:pPr>"#))
        .unwrap_or_default();
    format!(r#"<w:p>{props}<w:r><w:t xml:space="preserve">{text}</w:t></w:r></w:p>"#)
}

fn table(rows: &[&[&str]]) -> String {
    let rows: String = rows
        .iter()
        .map(|cells| {
            let cells: String = cells
                .iter()
                .map(|c| format!("<w:tc><w:tcPr/>{}</w:tc>", paragraph(None, c)))
                .collect();
            format!("<w:tr>{cells}</w:tr>")
        })
        .collect();
    format!("<w:tbl><w:tblPr/>{rows}</w:tbl>")
}

fn docx(parts: &[(&str, String)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in parts {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

fn document(body: &str) -> Vec<u8> {
    docx(&[
        (
            "[Content_Types].xml",
            r#"<?xml version="1.0"?><Types/>"#.to_string(),
        ),
        (
            "word/document.xml",
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document {NS}><w:body>{body}<w:sectPr/></w:body></w:document>"#
            ),
        ),
    ])
}

#[test]
fn word_document_is_detected_and_converted() {
    let bytes = document(&[
        paragraph(Some("Heading1"), "Amaç ve Kapsam"),
        paragraph(None, "Bu doküman müşteri kazanım sürecinin kapsamını tanımlar."),
    ]
    .concat());

    assert_eq!(ConverterKind::detect(&bytes), ConverterKind::Docx);
    let tree = AutoConverter.convert(bytes).unwrap();
    let roots = tree.roots();
    assert_eq!(tree[roots[0]].kind, BlockKind::Heading { level: 1 });
    assert_eq!(
        tree[roots[1]].text,
        "Bu doküman müşteri kazanım sürecinin kapsamını tanımlar."
    );
}

#[test]
fn table_section_from_word_document() {
    let body = [
        paragraph(Some("Balk1"), "Doküman Tarihçesi"),
        table(&[
            &["Sıra", "Versiyon", "Tarih", "Hazırlayan", "Açıklama"],
            &["1", "0.9", "05.01.2024", "Ayşe Yılmaz", "Taslak"],
            &["2", "1.0", "10.01.2024", "Ali Demir", "Onaylı sürüm"],
        ]),
    ]
    .concat();
    let bytes = document(&body);
    let catalog = Catalog::builtin();
    let spec = catalog.get("document_history").unwrap();

    let result = SectionParser::new(spec).parse(&bytes, &AutoConverter);
    assert_eq!(result.mode, Some(Mode::Strict));
    assert_eq!(result.rows().len(), 2);
    let row = &result.rows()[0];
    assert_eq!(row.get("version"), "0.9");
    assert_eq!(row.get("date"), "05.01.2024");
    assert_eq!(row.get("author"), "Ayşe Yılmaz");
    assert_eq!(row.get("description"), "Taslak");
}

#[test]
fn archive_without_document_part_is_rejected() {
    let bytes = docx(&[("word/styles.xml", "<w:styles/>".to_string())]);
    let err = DocxConverter.convert(bytes).unwrap_err();
    assert!(matches!(err, ConvertError::MissingPart("word/document.xml")));
}

#[test]
fn missing_part_surfaces_as_conversion_error() {
    let bytes = docx(&[("word/styles.xml", "<w:styles/>".to_string())]);
    let catalog = Catalog::builtin();
    let result = SectionParser::new(catalog.get("risks").unwrap()).parse(&bytes, &AutoConverter);
    assert!(!result.found);
    assert_eq!(
        result.errors,
        ["document could not be converted: Document part missing: word/document.xml"]
    );
}
