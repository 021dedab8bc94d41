//! Minimal PDF documents assembled byte-by-byte for the extraction tests.
//!
//! The fixtures use the standard (non-embedded) Type1 Helvetica font and
//! literal-string `Tj` operators, one content stream per page, so the text
//! drawn on each page round-trips through extraction exactly.

/// Builds a valid single- or multi-page PDF drawing `page_texts[i]` on page `i`.
pub fn pdf_with_pages(page_texts: &[&str]) -> Vec<u8> {
    // Object layout: 1 = catalog, 2 = page tree, 3 = font,
    // then a page object and a content stream per page.
    let mut objects: Vec<String> = Vec::new();
    let kids: Vec<String> = (0..page_texts.len())
        .map(|i| format!("{} 0 R", 4 + i * 2))
        .collect();

    objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());
    objects.push(format!(
        "<< /Type /Pages /Kids [{}] /Count {} >>",
        kids.join(" "),
        page_texts.len()
    ));
    objects.push("<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string());

    for (i, text) in page_texts.iter().enumerate() {
        let contents_ref = 5 + i * 2;
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {contents_ref} 0 R >>"
        ));
        let stream = format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", escape_literal(text));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{stream}\nendstream",
            stream.len()
        ));
    }

    let mut out = String::from("%PDF-1.4\n");
    let mut offsets = Vec::new();
    for (index, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.push_str(&format!("{} 0 obj\n{body}\nendobj\n", index + 1));
    }

    let xref_offset = out.len();
    out.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
    out.push_str("0000000000 65535 f \n");
    for offset in &offsets {
        out.push_str(&format!("{offset:010} 00000 n \n"));
    }
    out.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
        objects.len() + 1
    ));

    out.into_bytes()
}

fn escape_literal(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
}
