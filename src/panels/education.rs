// Education Panel
// Degrees and certifications

use super::PanelBody;
use crate::content::Portfolio;

/// Build the Education panel body
pub fn build(portfolio: &Portfolio) -> PanelBody {
    let mut body = PanelBody::new();
    body.heading("Education");
    body.blank();

    for entry in &portfolio.education {
        body.subheading(&entry.institution);
        body.paragraph(format!("{} | {}", entry.program, entry.period));
        body.bullets(entry.notes.clone());
        body.blank();
    }

    if !portfolio.certifications.is_empty() {
        body.subheading("Certifications");
        body.bullets(portfolio.certifications.clone());
    }

    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees_and_certifications() {
        let body = build(&Portfolio::default());

        assert!(body.contains_text("University of North Texas"));
        assert!(body.contains_text("Masters in Data Science | Jan 2023 - Dec 2024"));
        assert!(body.contains_text("CGPA: 3.8"));
        assert!(body.contains_text("Professional Certification on Data Science by IBM"));
    }
}
