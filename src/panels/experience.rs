// Experience Panel
// Professional experience entries, newest first as declared in the content

use super::PanelBody;
use crate::content::Portfolio;

/// Build the Experience panel body
pub fn build(portfolio: &Portfolio) -> PanelBody {
    let mut body = PanelBody::new();
    body.heading("Professional Experience");
    body.blank();

    for entry in &portfolio.experience {
        body.subheading(format!("{} - {}", entry.role, entry.company));
        body.paragraph(format!("{} | {}", entry.period, entry.location));
        body.bullets(entry.highlights.clone());
        body.blank();
    }

    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_roles_present() {
        let body = build(&Portfolio::default());

        assert!(body.contains_text("Python Developer (Intern) - Ezynest LLC"));
        assert!(body.contains_text("Machine Learning Engineer - Tiger Analytics"));
        assert!(body.contains_text("Assistant System Engineer - Tata Consultancy Services"));
        assert!(body.contains_text("Aug 2024 - Present | Dallas, TX"));
    }
}
