// Panel Registry
// Fixed mapping from panel identifier to its render procedure

use super::{about, contact, education, experience, projects, skills};
use super::{PanelBody, PanelId};
use crate::content::Portfolio;

/// A panel render procedure: a pure function from static content to a body
pub type PanelRenderer = fn(&Portfolio) -> PanelBody;

/// Look up the render procedure for a panel
/// Total over the closed PanelId enumeration; the match is exhaustive, so
/// adding a panel without a renderer fails to compile
pub fn lookup(panel: PanelId) -> PanelRenderer {
    match panel {
        PanelId::About => about::build,
        PanelId::Experience => experience::build,
        PanelId::Skills => skills::build,
        PanelId::Projects => projects::build,
        PanelId::Education => education::build,
        PanelId::Contact => contact::build,
    }
}

/// Dispatch one render pass for the current selection
/// One lookup, one invocation; the pass emits only the selected panel's content
pub fn render_current(selection: PanelId, portfolio: &Portfolio) -> PanelBody {
    lookup(selection)(portfolio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_totality() {
        let portfolio = Portfolio::default();
        for panel in PanelId::ALL {
            let body = render_current(panel, &portfolio);
            assert!(!body.is_empty(), "panel {:?} produced an empty body", panel);
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let portfolio = Portfolio::default();
        for panel in PanelId::ALL {
            let first = render_current(panel, &portfolio);
            let second = render_current(panel, &portfolio);
            assert_eq!(first, second, "panel {:?} rendered differently twice", panel);
        }
    }

    #[test]
    fn test_switching_panels_leaks_no_content() {
        let portfolio = Portfolio::default();

        let experience = render_current(PanelId::Experience, &portfolio);
        assert!(experience.contains_text("Tiger Analytics"));

        // Re-render a different panel: previous content must not carry over
        let contact = render_current(PanelId::Contact, &portfolio);
        assert!(!contact.contains_text("Tiger Analytics"));
        assert!(contact.contains_text("Contact Information"));

        let skills = render_current(PanelId::Skills, &portfolio);
        assert!(!skills.contains_text("Contact Information"));
    }
}
