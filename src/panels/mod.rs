// Panels module
// Panel identifiers, the render registry, and the per-panel content builders

pub mod about;
pub mod body;
pub mod contact;
pub mod education;
pub mod experience;
pub mod projects;
pub mod registry;
pub mod skills;

pub use body::{ContentBlock, ImageBlock, PanelBody};
pub use registry::{lookup, render_current, PanelRenderer};

/// Identifier for one of the six content panels
/// A closed enumeration: the navigation list offers exactly these values,
/// so panel lookup can never fail at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    About,
    Experience,
    Skills,
    Projects,
    Education,
    Contact,
}

impl PanelId {
    /// All panels in sidebar display order
    pub const ALL: [PanelId; 6] = [
        PanelId::About,
        PanelId::Experience,
        PanelId::Skills,
        PanelId::Projects,
        PanelId::Education,
        PanelId::Contact,
    ];

    /// Title shown in the sidebar and the content box border
    pub fn title(self) -> &'static str {
        match self {
            PanelId::About => "About Me",
            PanelId::Experience => "Experience",
            PanelId::Skills => "Skills",
            PanelId::Projects => "Projects",
            PanelId::Education => "Education",
            PanelId::Contact => "Contact",
        }
    }

    /// Position in sidebar display order
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    /// Panel at a sidebar position, if in range
    pub fn from_index(index: usize) -> Option<PanelId> {
        Self::ALL.get(index).copied()
    }

    /// Next panel in display order, saturating at the end
    pub fn next(self) -> PanelId {
        PanelId::from_index(self.index() + 1).unwrap_or(self)
    }

    /// Previous panel in display order, saturating at the start
    pub fn previous(self) -> PanelId {
        match self.index() {
            0 => self,
            i => PanelId::from_index(i - 1).unwrap_or(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, panel) in PanelId::ALL.iter().enumerate() {
            assert_eq!(panel.index(), i);
            assert_eq!(PanelId::from_index(i), Some(*panel));
        }
        assert_eq!(PanelId::from_index(6), None);
    }

    #[test]
    fn test_navigation_saturates() {
        assert_eq!(PanelId::About.previous(), PanelId::About);
        assert_eq!(PanelId::Contact.next(), PanelId::Contact);
        assert_eq!(PanelId::About.next(), PanelId::Experience);
        assert_eq!(PanelId::Contact.previous(), PanelId::Education);
    }
}
