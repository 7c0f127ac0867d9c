use super::{SIBLING_TABLE, SPARSE_TABLE, TWO_COLUMN_TABLE};
use crate::{
    dictionary::LabelDictionary,
    section::{AntiPattern, SectionSpec, VetoScope},
};

pub(super) fn all() -> Vec<SectionSpec> {
    vec![
        document_history(),
        stakeholders(),
        document_approval(),
        approval_workflow(),
        glossary(),
        test_scenarios(),
        authorization_matrix(),
        open_issues(),
    ]
}

fn document_history() -> SectionSpec {
    let dictionary = LabelDictionary::builder()
        .headers(&[
            "Doküman Tarihçesi",
            "Doküman Geçmişi",
            "Versiyon Geçmişi",
            "Revizyon Geçmişi",
            "Document History",
            "Revision History",
            "Version History",
        ])
        .field("version", &["Versiyon", "Sürüm", "Revizyon", "Version", "Revision"])
        .field("date", &["Tarih", "Date"])
        .field("author", &["Hazırlayan", "Yazar", "Değiştiren", "Author", "Prepared By"])
        .field("description", &["Açıklama", "Değişiklik", "Description", "Change"])
        .strong(&["versiyon", "revizyon", "hazırlayan", "version"])
        .build();
    SectionSpec::table("document_history", "Document History", dictionary)
        .with_thresholds(SPARSE_TABLE)
}

fn stakeholders() -> SectionSpec {
    let dictionary = LabelDictionary::builder()
        .headers(&[
            "Paydaşlar",
            "Proje Paydaşları",
            "Proje Ekibi",
            "Stakeholders",
            "Project Team",
        ])
        .field("name", &["Ad Soyad", "Adı Soyadı", "İsim", "Name"])
        .field("role", &["Proje Rolü", "Rol", "Role"])
        .field("department", &["Birim", "Departman", "Bölüm", "Department"])
        .field("contact", &["E-posta", "İletişim", "Telefon", "Email", "Contact"])
        .strong(&["paydaş", "proje rolü", "stakeholder"])
        .build();
    SectionSpec::table("stakeholders", "Stakeholders", dictionary).with_thresholds(SPARSE_TABLE)
}

/// Sign-off table. Shares "name" and "date" columns with the approval
/// workflow, hence the higher match bar and a veto in both modes.
fn document_approval() -> SectionSpec {
    let dictionary = LabelDictionary::builder()
        .headers(&[
            "Doküman Onayı",
            "Doküman Onay",
            "Onaylar",
            "Document Approval",
            "Sign-off",
            "Approvals",
        ])
        .field("name", &["Ad Soyad", "Adı Soyadı", "Onaylayan Kişi", "Name"])
        .field("title", &["Unvan", "Görev", "Title"])
        .field("date", &["Onay Tarihi", "Tarih", "Date"])
        .field("signature", &["İmza", "Signature"])
        .strong(&["imza", "onay tarihi", "signature"])
        .build();
    SectionSpec::table("document_approval", "Document Approval", dictionary)
        .with_thresholds(SIBLING_TABLE)
        .with_anti_pattern(AntiPattern::new(
            VetoScope::Both,
            &["onay seviyesi", "aksiyon", "approval level", "action"],
        ))
}

/// Step-by-step approval chain. The veto runs in scan mode only: under
/// its own header the workflow table is trusted as is.
fn approval_workflow() -> SectionSpec {
    let dictionary = LabelDictionary::builder()
        .headers(&[
            "Onay Akışı",
            "Onay Süreci",
            "Approval Workflow",
            "Approval Flow",
        ])
        .field("step", &["Adım", "Aşama", "Step", "Stage"])
        .field("approver", &["Onaylayan", "Onay Veren", "Approver"])
        .field("approval_level", &["Onay Seviyesi", "Approval Level"])
        .field("action", &["Aksiyon", "İşlem", "Action"])
        .field("duration", &["Süre", "Duration"])
        .strong(&["onay seviyesi", "onaylayan", "approval level"])
        .build();
    SectionSpec::table("approval_workflow", "Approval Workflow", dictionary)
        .with_thresholds(SIBLING_TABLE)
        .with_anti_pattern(AntiPattern::new(VetoScope::Scan, &["imza", "signature"]))
}

fn glossary() -> SectionSpec {
    let dictionary = LabelDictionary::builder()
        .headers(&[
            "Terimler ve Kısaltmalar",
            "Kısaltmalar",
            "Tanımlar",
            "Sözlük",
            "Glossary",
            "Definitions",
            "Abbreviations",
        ])
        .field("term", &["Terim", "Kısaltma", "Term", "Abbreviation"])
        .field(
            "definition",
            &["Tanım", "Açıklama", "Anlamı", "Definition", "Description", "Meaning"],
        )
        .strong(&["terim", "kısaltma", "term"])
        .build();
    SectionSpec::table("glossary", "Glossary", dictionary)
        .with_thresholds(TWO_COLUMN_TABLE)
        .with_anti_pattern(AntiPattern::new(
            VetoScope::Scan,
            &["versiyon", "hazırlayan", "sorumlu"],
        ))
}

fn test_scenarios() -> SectionSpec {
    let dictionary = LabelDictionary::builder()
        .headers(&[
            "Test Senaryoları",
            "Test Senaryosu",
            "Test Scenarios",
            "Test Cases",
        ])
        .field("scenario_id", &["Senaryo No", "Test No", "Senaryo ID", "Scenario ID", "Test ID"])
        .field("name", &["Senaryo Adı", "Senaryo", "Test Adı", "Scenario", "Test Case"])
        .field("steps", &["Test Adımları", "Adımlar", "Steps"])
        .field("expected", &["Beklenen Sonuç", "Beklenen", "Expected Result", "Expected"])
        .field("result", &["Gerçekleşen", "Sonuç", "Result", "Status"])
        .strong(&["beklenen sonuç", "senaryo", "expected result"])
        .build();
    SectionSpec::table("test_scenarios", "Test Scenarios", dictionary)
        .with_thresholds(SPARSE_TABLE)
}

fn authorization_matrix() -> SectionSpec {
    let dictionary = LabelDictionary::builder()
        .headers(&[
            "Yetki Matrisi",
            "Yetkilendirme Matrisi",
            "Rol ve Yetkiler",
            "Authorization Matrix",
            "Role Matrix",
        ])
        .field("role", &["Kullanıcı Rolü", "Rol", "Role"])
        .field("screen", &["Ekran", "Menü", "Modül", "Screen", "Module"])
        .field("view", &["Görüntüleme", "Okuma", "View", "Read"])
        .field("create", &["Ekleme", "Oluşturma", "Create"])
        .field("update", &["Güncelleme", "Düzenleme", "Update", "Edit"])
        .field("delete", &["Silme", "Delete"])
        .field("approve", &["Onaylama", "Approve"])
        .strong(&["görüntüleme", "güncelleme", "yetki"])
        .build();
    SectionSpec::table("authorization_matrix", "Authorization Matrix", dictionary)
        .with_thresholds(SPARSE_TABLE)
}

/// Open items. The veto runs under the header only; a scan candidate must
/// already carry the issue columns to pass.
fn open_issues() -> SectionSpec {
    let dictionary = LabelDictionary::builder()
        .headers(&[
            "Açık Konular",
            "Açık Noktalar",
            "Bekleyen Konular",
            "Open Issues",
            "Open Points",
        ])
        .field("issue", &["Açık Konu", "Konu", "Issue", "Topic"])
        .field("owner", &["Sorumlu", "Owner", "Responsible"])
        .field("due_date", &["Hedef Tarih", "Termin", "Due Date", "Target Date"])
        .field("status", &["Durum", "Status"])
        .field("notes", &["Açıklama", "Not", "Notes"])
        .strong(&["açık konu", "sorumlu", "termin"])
        .build();
    SectionSpec::table("open_issues", "Open Issues", dictionary)
        .with_thresholds(SPARSE_TABLE)
        .with_anti_pattern(AntiPattern::new(
            VetoScope::Strict,
            &["versiyon", "hazırlayan"],
        ))
}
