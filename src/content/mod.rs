// Content module
// Static portfolio data: model types, built-in defaults, and YAML loading

pub mod defaults;
pub mod model;

pub use model::{
    ContactInfo, ContentError, EducationEntry, ExperienceEntry, Portfolio, Profile,
    ProjectEntry, ProjectLink, SkillEntry, SocialLinks,
};
