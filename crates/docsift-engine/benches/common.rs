// Included by each bench target with `mod common;`.
#[allow(dead_code)]
pub fn generate_analysis_document(sections: usize) -> String {
    let mut html = String::from("<html><body>");
    for section in 0..sections {
        html.push_str(&format!("<h2>{}. Bölüm {section}</h2>", section + 1));
        html.push_str(
            "<p>Bu bölümde sürecin mevcut durumu ve ilgili birimlerin sorumlulukları \
             ayrıntılı olarak açıklanmaktadır.</p>",
        );
        html.push_str(
            "<p>Projenin amacı müşteri kazanım sürecini hızlandırmaktır; \
             kapsamında başvuru ve onay adımları yer alır.</p>",
        );
        html.push_str(
            "<table><tr><th>Adım</th><th>Onaylayan</th><th>Onay Seviyesi</th><th>Aksiyon</th></tr>\
             <tr><td>1</td><td>Birim Müdürü</td><td>1</td><td>Onayla</td></tr></table>",
        );
    }
    html.push_str("</body></html>");
    html
}
