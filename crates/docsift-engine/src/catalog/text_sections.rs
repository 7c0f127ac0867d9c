use super::{ENUMERATED, FRONT_MATTER, NARRATIVE, SHORT_FORM};
use crate::{
    dictionary::LabelDictionary,
    section::{AntiPattern, SectionSpec, VetoScope},
};

pub(super) fn all() -> Vec<SectionSpec> {
    vec![
        purpose_scope(),
        current_state(),
        requested_state(),
        out_of_scope(),
        assumptions(),
        constraints(),
        functional_requirements(),
        non_functional_requirements(),
        risks(),
        data_migration(),
        reporting(),
        integrations(),
        security(),
        acceptance_criteria(),
    ]
}

fn purpose_scope() -> SectionSpec {
    let dictionary = LabelDictionary::builder()
        .headers(&[
            "Amaç ve Kapsam",
            "Dokümanın Amacı",
            "Projenin Amacı",
            "Purpose and Scope",
            "Purpose of the Document",
        ])
        .canonical(&["amaç ve kapsam", "purpose and scope"])
        .strong(&["projenin amacı", "kapsamında", "purpose of this", "scope of"])
        .generic(&["amaç", "kapsam", "hedef", "purpose", "scope", "objective"])
        .blacklist(FRONT_MATTER)
        .build();
    SectionSpec::text("purpose_scope", "Purpose and Scope", dictionary)
        .with_thresholds(NARRATIVE)
        .with_anti_pattern(AntiPattern::new(
            VetoScope::Scan,
            &["kapsam dışı", "out of scope"],
        ))
}

/// As-is and to-be sections describe the same process and share most of
/// their words. Each vetoes the other's phrasing in scan mode only.
fn current_state() -> SectionSpec {
    let dictionary = LabelDictionary::builder()
        .headers(&[
            "Mevcut Durum",
            "Mevcut Sistem",
            "Mevcut İşleyiş",
            "Current State",
            "Current Situation",
            "As-Is Analysis",
        ])
        .canonical(&["mevcut durum", "current state"])
        .strong(&[
            "mevcut durumda",
            "mevcut sistemde",
            "manuel olarak",
            "currently",
            "today the",
        ])
        .generic(&["mevcut", "şu anda", "halihazırda", "existing", "manual"])
        .blacklist(FRONT_MATTER)
        .build();
    SectionSpec::text("current_state", "Current State", dictionary)
        .with_thresholds(NARRATIVE)
        .with_anti_pattern(AntiPattern::new(
            VetoScope::Scan,
            &["istenen durum", "talep edilen durum", "requested state"],
        ))
}

fn requested_state() -> SectionSpec {
    let dictionary = LabelDictionary::builder()
        .headers(&[
            "İstenen Durum",
            "Talep Edilen Durum",
            "Hedef Durum",
            "Requested State",
            "Target State",
            "To-Be Process",
        ])
        .canonical(&["istenen durum", "talep edilen durum", "requested state"])
        .strong(&[
            "yapılması istenmektedir",
            "talep edilmektedir",
            "geliştirilmesi",
            "should be able to",
            "is requested",
        ])
        .generic(&["istenen", "talep", "yeni", "hedef", "new", "target"])
        .blacklist(FRONT_MATTER)
        .build();
    SectionSpec::text("requested_state", "Requested State", dictionary)
        .with_thresholds(NARRATIVE)
        .with_anti_pattern(AntiPattern::new(
            VetoScope::Scan,
            &["mevcut durumda", "current state"],
        ))
}

fn out_of_scope() -> SectionSpec {
    let dictionary = LabelDictionary::builder()
        .headers(&["Kapsam Dışı", "Kapsam Dışı Konular", "Out of Scope"])
        .canonical(&["kapsam dışı", "out of scope"])
        .strong(&[
            "kapsam dışındadır",
            "kapsamında değildir",
            "yapılmayacaktır",
            "not included",
        ])
        .generic(&["dahil değildir", "hariç", "excluded", "exclude"])
        .blacklist(FRONT_MATTER)
        .build();
    SectionSpec::text("out_of_scope", "Out of Scope", dictionary).with_thresholds(SHORT_FORM)
}

fn assumptions() -> SectionSpec {
    let dictionary = LabelDictionary::builder()
        .headers(&["Varsayımlar", "Kabuller", "Ön Kabuller", "Assumptions"])
        .canonical(&["varsayımlar", "assumptions"])
        .strong(&[
            "varsayılmaktadır",
            "kabul edilmektedir",
            "it is assumed",
            "assumed that",
        ])
        .generic(&["varsayım", "kabul", "öngörülmektedir", "assume"])
        .blacklist(FRONT_MATTER)
        .build();
    SectionSpec::text("assumptions", "Assumptions", dictionary)
        .with_thresholds(SHORT_FORM)
        .with_anti_pattern(AntiPattern::new(
            VetoScope::Scan,
            &["kabul kriterleri", "acceptance criteria"],
        ))
}

fn constraints() -> SectionSpec {
    let dictionary = LabelDictionary::builder()
        .headers(&["Kısıtlar", "Kısıtlamalar", "Sınırlamalar", "Constraints"])
        .canonical(&["kısıtlar", "constraints"])
        .strong(&[
            "kısıtı bulunmaktadır",
            "ile sınırlıdır",
            "is limited to",
            "must not exceed",
        ])
        .generic(&["kısıt", "sınır", "bütçe", "limit", "constraint"])
        .blacklist(FRONT_MATTER)
        .build();
    SectionSpec::text("constraints", "Constraints", dictionary).with_thresholds(SHORT_FORM)
}

/// Vetoes non-functional phrasing during scan. A header match is trusted
/// unless the heading itself reads "non-functional".
fn functional_requirements() -> SectionSpec {
    let dictionary = LabelDictionary::builder()
        .headers(&[
            "Fonksiyonel Gereksinimler",
            "İşlevsel Gereksinimler",
            "İş Gereksinimleri",
            "Functional Requirements",
        ])
        .header_vetoes(&["non functional", "fonksiyonel olmayan", "işlevsel olmayan"])
        .canonical(&["fonksiyonel gereksinim", "functional requirement"])
        .strong(&[
            "sağlamalıdır",
            "yapabilmelidir",
            "görüntüleyebilmelidir",
            "the system shall",
            "the user can",
        ])
        .generic(&["gereksinim", "ekran", "kullanıcı", "requirement", "screen"])
        .blacklist(FRONT_MATTER)
        .build();
    SectionSpec::text(
        "functional_requirements",
        "Functional Requirements",
        dictionary,
    )
    .with_thresholds(ENUMERATED)
    .with_anti_pattern(AntiPattern::new(
        VetoScope::Scan,
        &["fonksiyonel olmayan", "non functional", "yanıt süresi"],
    ))
}

fn non_functional_requirements() -> SectionSpec {
    let dictionary = LabelDictionary::builder()
        .headers(&[
            "Fonksiyonel Olmayan Gereksinimler",
            "İşlevsel Olmayan Gereksinimler",
            "Non-Functional Requirements",
            "Nonfunctional Requirements",
        ])
        .canonical(&["fonksiyonel olmayan gereksinim", "non functional requirement"])
        .strong(&[
            "yanıt süresi",
            "eş zamanlı kullanıcı",
            "erişilebilirlik",
            "response time",
            "concurrent users",
        ])
        .generic(&[
            "performans",
            "ölçeklenebilirlik",
            "kullanılabilirlik",
            "performance",
            "availability",
        ])
        .blacklist(FRONT_MATTER)
        .build();
    SectionSpec::text(
        "non_functional_requirements",
        "Non-Functional Requirements",
        dictionary,
    )
    .with_thresholds(ENUMERATED)
}

fn risks() -> SectionSpec {
    let dictionary = LabelDictionary::builder()
        .headers(&["Riskler", "Risk Analizi", "Proje Riskleri", "Risks", "Project Risks"])
        .canonical(&["riskler", "risks"])
        .strong(&[
            "risk seviyesi",
            "etki analizi",
            "gecikme riski",
            "risk level",
            "mitigation",
        ])
        .generic(&["risk", "etki", "olasılık", "impact", "likelihood"])
        .blacklist(FRONT_MATTER)
        .build();
    SectionSpec::text("risks", "Risks", dictionary).with_thresholds(ENUMERATED)
}

fn data_migration() -> SectionSpec {
    let dictionary = LabelDictionary::builder()
        .headers(&["Veri Aktarımı", "Veri Taşıma", "Veri Göçü", "Data Migration"])
        .canonical(&["veri aktarımı", "veri taşıma", "data migration"])
        .strong(&[
            "mevcut veriler",
            "aktarılacaktır",
            "taşınacaktır",
            "will be migrated",
            "legacy data",
        ])
        .generic(&["veri", "aktarım", "dönüşüm", "migration", "data"])
        .blacklist(FRONT_MATTER)
        .build();
    SectionSpec::text("data_migration", "Data Migration", dictionary).with_thresholds(NARRATIVE)
}

fn reporting() -> SectionSpec {
    let dictionary = LabelDictionary::builder()
        .headers(&["Raporlama", "Rapor İhtiyaçları", "Raporlar", "Reporting", "Reports"])
        .canonical(&["raporlama", "reporting"])
        .strong(&[
            "rapor ekranı",
            "excel formatında",
            "raporlanacaktır",
            "dashboard",
            "report screen",
        ])
        .generic(&["rapor", "filtre", "grafik", "report", "export"])
        .blacklist(FRONT_MATTER)
        .build();
    SectionSpec::text("reporting", "Reporting", dictionary).with_thresholds(NARRATIVE)
}

fn integrations() -> SectionSpec {
    let dictionary = LabelDictionary::builder()
        .headers(&["Entegrasyonlar", "Entegrasyon", "Arayüzler", "Integrations"])
        .canonical(&["entegrasyonlar", "integrations"])
        .strong(&[
            "web servis",
            "servis çağrısı",
            "entegre edilecektir",
            "rest api",
            "integrated with",
        ])
        .generic(&["entegrasyon", "servis", "arayüz", "integration", "service"])
        .blacklist(FRONT_MATTER)
        .build();
    SectionSpec::text("integrations", "Integrations", dictionary).with_thresholds(NARRATIVE)
}

fn security() -> SectionSpec {
    let dictionary = LabelDictionary::builder()
        .headers(&[
            "Güvenlik Gereksinimleri",
            "Güvenlik",
            "Security Requirements",
            "Security",
        ])
        .canonical(&["güvenlik gereksinimleri", "security requirements"])
        .strong(&[
            "yetkilendirme",
            "kimlik doğrulama",
            "şifrelenmelidir",
            "authentication",
            "encrypted",
        ])
        .generic(&["güvenlik", "yetki", "şifre", "loglama", "security"])
        .blacklist(FRONT_MATTER)
        .build();
    SectionSpec::text("security", "Security", dictionary).with_thresholds(NARRATIVE)
}

fn acceptance_criteria() -> SectionSpec {
    let dictionary = LabelDictionary::builder()
        .headers(&["Kabul Kriterleri", "Kabul Koşulları", "Acceptance Criteria"])
        .canonical(&["kabul kriterleri", "acceptance criteria"])
        .strong(&[
            "kabul edilecektir",
            "başarılı sayılır",
            "onaylanması durumunda",
            "will be accepted",
            "is considered successful",
        ])
        .generic(&["kabul", "kriter", "test", "acceptance", "criteria"])
        .blacklist(FRONT_MATTER)
        .build();
    SectionSpec::text("acceptance_criteria", "Acceptance Criteria", dictionary)
        .with_thresholds(SHORT_FORM)
        .with_anti_pattern(AntiPattern::new(
            VetoScope::Scan,
            &["varsayılmaktadır", "it is assumed"],
        ))
}
