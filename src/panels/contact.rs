// Contact Panel
// Contact details and social profile links

use super::PanelBody;
use crate::content::Portfolio;

/// Build the Contact panel body
pub fn build(portfolio: &Portfolio) -> PanelBody {
    let contact = &portfolio.contact;

    let mut left = PanelBody::new();
    left.paragraph(format!("📍 {}", contact.location));
    left.paragraph(format!("📧 {}", contact.email));
    left.paragraph(format!("📱 {}", contact.phone));

    let mut right = PanelBody::new();
    right.subheading("Connect with me:");
    right.link("💼 LinkedIn Profile", &portfolio.social.linkedin);
    right.link("💻 GitHub Profile", &portfolio.social.github);

    let mut body = PanelBody::new();
    body.heading("Contact Information");
    body.blank();
    body.columns(vec![left, right]);
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_details_present() {
        let portfolio = Portfolio::default();
        let body = build(&portfolio);

        assert!(body.contains_text("Dallas, Texas"));
        assert!(body.contains_text("shanmukhasaishashankgarimella@gmail.com"));
        assert!(body.contains_text("+1 945-267-5622"));
    }

    #[test]
    fn test_social_links_present() {
        let portfolio = Portfolio::default();
        let body = build(&portfolio);
        let links = body.links();

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].1, portfolio.social.linkedin);
        assert_eq!(links[1].1, portfolio.social.github);
    }
}
