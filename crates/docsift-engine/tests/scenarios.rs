use docsift_engine::{
    AutoConverter, Catalog, DocumentConverter, HtmlConverter, Mode, NullObserver, ParseResult,
    SectionParser,
    table::{TableVerdict, classify_table},
};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> Vec<u8> {
    std::fs::read(format!(
        "{}/tests/fixtures/{name}.html",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn parse(section: &str, fixture_name: &str) -> ParseResult {
    let catalog = Catalog::builtin();
    let spec = catalog.get(section).unwrap();
    SectionParser::new(spec).parse(&fixture(fixture_name), &HtmlConverter)
}

fn parse_html(section: &str, html: &str) -> ParseResult {
    let catalog = Catalog::builtin();
    let spec = catalog.get(section).unwrap();
    SectionParser::new(spec).parse(html.as_bytes(), &HtmlConverter)
}

#[test]
fn header_followed_by_paragraph_is_strict() {
    let result = parse("purpose_scope", "purpose_strict");

    assert!(result.found);
    assert_eq!(result.mode, Some(Mode::Strict));
    assert_eq!(
        result.content(),
        Some(
            "This document describes the goals of the customer onboarding programme \
             and the limits of the work the team will deliver."
        )
    );
    assert_eq!(result.content().map(|c| c.chars().count()), Some(120));
    assert!(result.warnings.is_empty());
    assert!(result.errors.is_empty());
}

#[test]
fn keyword_rich_paragraph_without_header_is_found_by_scan() {
    let result = parse("purpose_scope", "purpose_scan");

    assert!(result.found);
    assert_eq!(result.mode, Some(Mode::Scan));
    assert!(result.content().unwrap().starts_with("The purpose of this project"));
    assert_eq!(
        result.warnings,
        ["no content anchored on a section header; content selected by document scan"]
    );
    assert!(result.matched_labels.contains(&"purpose of this".to_string()));
    assert!(result.matched_labels.contains(&"scope of".to_string()));
}

#[test]
fn vetoed_table_is_never_returned() {
    let bytes = fixture("approval_tables");
    let catalog = Catalog::builtin();
    let spec = catalog.get("approval_workflow").unwrap();

    let result = SectionParser::new(spec).parse(&bytes, &HtmlConverter);
    assert!(result.found);
    assert_eq!(result.mode, Some(Mode::Scan));
    let approvers: Vec<_> = result.rows().iter().map(|r| r.get("approver")).collect();
    assert_eq!(approvers, ["Birim Müdürü", "Genel Müdür"]);

    let tree = HtmlConverter.convert(bytes).unwrap();
    let tables: Vec<_> = tree.tables().collect();
    let verdict = classify_table(
        &tree,
        tables[0],
        &spec.dictionary,
        spec.thresholds.min_table_matches,
        spec.veto_for(Mode::Scan),
    );
    assert_eq!(
        verdict,
        TableVerdict::Vetoed {
            phrase: "imza".into()
        }
    );
}

#[test]
fn header_found_in_a_table_cell_never_collects_the_table() {
    let result = parse_html(
        "out_of_scope",
        "<h1>Giriş</h1><p>…</p>\
         <table><tr><th>Kapsam</th><th>Açıklama</th></tr>\
         <tr><td>Modül A</td><td>Dahil değildir</td></tr></table>",
    );

    assert!(!result.found);
    assert_eq!(result.mode, None);
    assert_eq!(result.content(), Some(""));
    assert_eq!(
        result.warnings,
        ["Out of Scope header \"Kapsam\" found but no content followed it"]
    );
    assert_eq!(result.errors, ["Out of Scope section not found"]);
}

#[test]
fn unheaded_history_table_is_found_through_its_own_header_cell() {
    let result = parse_html(
        "document_history",
        "<h1>Giriş</h1><p>Bu doküman başvuru sürecini anlatır.</p>\
         <table><tr><th>Versiyon</th><th>Tarih</th><th>Hazırlayan</th><th>Açıklama</th></tr>\
         <tr><td>1.0</td><td>01.02.2024</td><td>Ayşe Yılmaz</td><td>İlk sürüm</td></tr></table>",
    );

    assert!(result.found);
    assert_eq!(result.mode, Some(Mode::Strict));
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    assert_eq!(result.rows().len(), 1);
    assert_eq!(result.rows()[0].get("version"), "1.0");
    assert_eq!(result.rows()[0].get("author"), "Ayşe Yılmaz");
    assert_eq!(result.matched_labels[0], "versiyon gecmisi");
}

#[test]
fn bare_column_label_after_its_compound_sibling_is_mapped() {
    let result = parse_html(
        "test_scenarios",
        "<h1>Test Senaryoları</h1>\
         <table><tr><th>Senaryo No</th><th>Senaryo</th><th>Adımlar</th>\
         <th>Beklenen Sonuç</th><th>Sonuç</th></tr>\
         <tr><td>T1</td><td>Giriş yapma</td><td>Kullanıcı adı ve şifre girilir</td>\
         <td>Ana ekran açılır</td><td>Başarılı</td></tr></table>",
    );

    assert_eq!(result.mode, Some(Mode::Strict));
    let row = &result.rows()[0];
    assert_eq!(row.get("scenario_id"), "T1");
    assert_eq!(row.get("name"), "Giriş yapma");
    assert_eq!(row.get("steps"), "Kullanıcı adı ve şifre girilir");
    assert_eq!(row.get("expected"), "Ana ekran açılır");
    assert_eq!(row.get("result"), "Başarılı");
}

#[test]
fn non_functional_heading_does_not_anchor_functional_requirements() {
    let result = parse_html(
        "functional_requirements",
        "<h1>Non-Functional Requirements</h1>\
         <p>Pages must load within two seconds under normal load.</p>",
    );

    assert!(!result.found);
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
}

#[test]
fn empty_document_is_not_found_everywhere() {
    let catalog = Catalog::builtin();
    let results = catalog.parse_all(&fixture("empty"), &HtmlConverter, &NullObserver);

    assert_eq!(results.len(), catalog.len());
    for spec in catalog.iter() {
        let result = &results[spec.key];
        assert!(!result.found, "{}", spec.key);
        assert_eq!(result.mode, None);
        assert_eq!(result.errors, [format!("{} section not found", spec.title)]);
        assert!(result.warnings.is_empty());
    }
}

#[test]
fn full_document_sections() {
    let catalog = Catalog::builtin();
    let results = catalog.parse_all(&fixture("analysis_document"), &AutoConverter, &NullObserver);

    let purpose = &results["purpose_scope"];
    assert_eq!(purpose.mode, Some(Mode::Strict));
    assert!(purpose.content().unwrap().starts_with("Bu dokümanın amacı"));

    let current = &results["current_state"];
    assert_eq!(current.mode, Some(Mode::Strict));
    assert!(current.content().unwrap().contains("manuel olarak"));

    let functional = &results["functional_requirements"];
    assert_eq!(
        functional.content(),
        Some(
            "Sistem, kimlik bilgilerini doğrulama servisi üzerinden kontrol etmelidir.\n\n\
             Kullanıcı, başvuru durumunu ana ekrandan görüntüleyebilmelidir."
        )
    );

    let history = &results["document_history"];
    assert_eq!(history.mode, Some(Mode::Strict));
    let versions: Vec<_> = history.rows().iter().map(|r| r.get("version")).collect();
    assert_eq!(versions, ["1.0", "1.1"]);
    assert_eq!(history.rows()[1].id, "document_history-2");
    assert_eq!(history.rows()[1].get("author"), "Ali Demir");

    let glossary = &results["glossary"];
    assert_eq!(glossary.rows().len(), 2);
    assert_eq!(glossary.rows()[1].get("term"), "KYC");
    assert_eq!(glossary.rows()[1].get("definition"), "Müşterini Tanı");

    let risks = &results["risks"];
    assert!(!risks.found);
    assert_eq!(risks.errors, ["Risks section not found"]);
}

#[test]
fn unreadable_bytes_fail_every_section_alike() {
    let catalog = Catalog::builtin();
    let results = catalog.parse_all(b"PK\x03\x04 truncated", &AutoConverter, &NullObserver);
    for result in results.values() {
        assert!(!result.found);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].starts_with("document could not be converted"));
    }
}
