// Sidebar Component
// Navigation list - the single-choice selector over the six panels

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use super::Styles;
use crate::panels::PanelId;

/// Render the navigation sidebar with the current selection highlighted
pub fn render_sidebar(f: &mut Frame, selected: PanelId, area: Rect) {
    let items: Vec<ListItem> = PanelId::ALL
        .iter()
        .enumerate()
        .map(|(idx, panel)| {
            let style = if *panel == selected {
                Styles::sidebar_selected()
            } else {
                Styles::sidebar_normal()
            };

            ListItem::new(Line::from(Span::styled(
                format!("{} {}", idx + 1, panel.title()),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_focused())
            .title(Span::styled("Navigation", Styles::title_focused())),
    );

    let mut list_state = ListState::default();
    list_state.select(Some(selected.index()));
    f.render_stateful_widget(list, area, &mut list_state);
}
