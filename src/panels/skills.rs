// Skills Panel
// Skill gauges on the left, areas of expertise on the right

use super::PanelBody;
use crate::content::Portfolio;

/// Build the Skills panel body
pub fn build(portfolio: &Portfolio) -> PanelBody {
    let mut left = PanelBody::new();
    left.subheading("Programming & Tools");
    for skill in &portfolio.skills {
        left.progress(&skill.name, skill.level);
    }

    let mut right = PanelBody::new();
    right.subheading("Areas of Expertise");
    right.bullets(portfolio.expertise.clone());

    let mut body = PanelBody::new();
    body.heading("Technical Skills");
    body.blank();
    body.columns(vec![left, right]);
    body
}
