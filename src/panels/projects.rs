// Projects Panel
// Featured project cards with technologies, highlights, and repository links

use super::PanelBody;
use crate::content::Portfolio;

/// Build the Projects panel body
pub fn build(portfolio: &Portfolio) -> PanelBody {
    let mut body = PanelBody::new();
    body.heading("Featured Projects");
    body.blank();

    for project in &portfolio.projects {
        body.subheading(&project.title);
        if !project.technologies.is_empty() {
            body.paragraph(format!("Technologies: {}", project.technologies.join(", ")));
        }
        body.bullets(project.highlights.clone());

        // Link keys are checked against the link table when content loads
        if let Some(url) = portfolio.project_url(&project.link) {
            body.link("📂 View Project", url);
        }
        body.blank();
    }

    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_five_project_links() {
        let body = build(&Portfolio::default());
        let links = body.links();

        assert_eq!(links.len(), 5);
        let urls: Vec<&str> = links.iter().map(|(_, url)| *url).collect();
        assert_eq!(
            urls,
            vec![
                "https://github.com/shashank10081999/pneumonia-detection",
                "https://github.com/shashank10081999/sensor-fault-detection",
                "https://github.com/shashank10081999/number-plate-recognition",
                "https://github.com/shashank10081999/language-identification",
                "https://github.com/shashank10081999/Face-matching-and-Face-Recognition",
            ]
        );
    }

    #[test]
    fn test_project_cards_present() {
        let body = build(&Portfolio::default());

        assert!(body.contains_text("Pneumonia Detection and Explainability"));
        assert!(body.contains_text("Technologies: Python, Vision Transformers, k-NN, LLM, PyTorch"));
        assert!(body.contains_text("Face Authenticator"));
    }
}
