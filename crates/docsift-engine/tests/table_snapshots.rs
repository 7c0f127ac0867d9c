use docsift_engine::{Catalog, HtmlConverter, SectionParser};

fn fixture(name: &str) -> Vec<u8> {
    std::fs::read(format!(
        "{}/tests/fixtures/{name}.html",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

#[test]
fn approval_workflow_rows() {
    let catalog = Catalog::builtin();
    let spec = catalog.get("approval_workflow").unwrap();
    let result = SectionParser::new(spec).parse(&fixture("approval_tables"), &HtmlConverter);

    insta::assert_debug_snapshot!(result.rows(), @r#"
    [
        Row {
            id: "approval_workflow-1",
            data: {
                "action": "Onayla",
                "approval_level": "1",
                "approver": "Birim Müdürü",
                "duration": "",
                "step": "1",
            },
        },
        Row {
            id: "approval_workflow-2",
            data: {
                "action": "Onayla",
                "approval_level": "2",
                "approver": "Genel Müdür",
                "duration": "",
                "step": "2",
            },
        },
    ]
    "#);
}

#[test]
fn glossary_rows_from_full_document() {
    let catalog = Catalog::builtin();
    let spec = catalog.get("glossary").unwrap();
    let result =
        SectionParser::new(spec).parse(&fixture("analysis_document"), &HtmlConverter);

    let pairs: Vec<(&str, &str)> = result
        .rows()
        .iter()
        .map(|r| (r.get("term"), r.get("definition")))
        .collect();
    insta::assert_debug_snapshot!(pairs, @r#"
    [
        (
            "BA",
            "İş Analizi",
        ),
        (
            "KYC",
            "Müşterini Tanı",
        ),
    ]
    "#);
}
