// Panel View
// Maps a panel body to styled terminal lines and renders it with scrolling

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Styles;
use crate::core::app_config::compiled;
use crate::panels::{ContentBlock, ImageBlock, PanelBody};
use crate::utilities::{human_size, wrap_text};
use crate::utilities::text::wrap_indented;

/// Horizontal gap between columns in cells
const COLUMN_GAP: usize = 2;

/// Render the current panel body inside a bordered content box
pub fn render_panel(f: &mut Frame, body: &PanelBody, title: &str, area: Rect, scroll: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border_unfocused())
        .title(Span::styled(title, Styles::title_focused()));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = body_lines(body, inner.width as usize);

    // Clamp the scroll so the last line stays reachable but visible
    let max_scroll = lines.len().saturating_sub(inner.height as usize);
    let scroll = scroll.min(max_scroll);

    let paragraph = Paragraph::new(lines).scroll((scroll as u16, 0));
    f.render_widget(paragraph, inner);
}

/// Lay out every block of a body as pre-wrapped lines of the given width
pub fn body_lines(body: &PanelBody, width: usize) -> Vec<Line<'static>> {
    let width = width.max(10);
    let mut lines = Vec::new();

    for block in body.blocks() {
        lines.extend(block_lines(block, width));
    }

    lines
}

fn block_lines(block: &ContentBlock, width: usize) -> Vec<Line<'static>> {
    match block {
        ContentBlock::Heading(text) => wrap_text(text, width)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, Styles::heading())))
            .collect(),

        ContentBlock::Subheading(text) => wrap_text(text, width)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, Styles::subheading())))
            .collect(),

        ContentBlock::Paragraph(text) => wrap_text(text, width)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, Styles::paragraph())))
            .collect(),

        ContentBlock::Bullets(items) => items
            .iter()
            .flat_map(|item| wrap_indented(item, width, "• "))
            .map(|line| Line::from(Span::styled(line, Styles::paragraph())))
            .collect(),

        ContentBlock::Progress { label, level } => vec![progress_line(label, *level)],

        ContentBlock::Link { label, url } => vec![Line::from(vec![
            Span::styled(format!("{}: ", label), Styles::link_label()),
            Span::styled(url.clone(), Styles::link_url()),
        ])],

        ContentBlock::Image(image) => image_lines(image),

        ContentBlock::Columns(columns) => merge_columns(columns, width),

        ContentBlock::Blank => vec![Line::default()],
    }
}

/// A skill gauge as one line: label, unicode bar, percentage
fn progress_line(label: &str, level: u8) -> Line<'static> {
    let bar_width = compiled::GAUGE_WIDTH as usize;
    let filled = (level as usize * bar_width) / 100;
    let empty = bar_width - filled;

    Line::from(vec![
        Span::styled(format!("{:<19} ", label), Styles::paragraph()),
        Span::styled("█".repeat(filled), Styles::gauge_filled()),
        Span::styled("░".repeat(empty), Styles::gauge_empty()),
        Span::styled(format!(" {:>3}%", level), Styles::meta()),
    ])
}

/// The photo cannot be drawn inline in a terminal, so loaded bytes become a
/// placeholder and a load failure becomes a visible error line
fn image_lines(image: &ImageBlock) -> Vec<Line<'static>> {
    match image {
        ImageBlock::Loaded { source, bytes } => vec![
            Line::from(Span::styled(
                format!("[photo] {}", source),
                Styles::image_placeholder(),
            )),
            Line::from(Span::styled(
                format!("        {} on disk", human_size(*bytes)),
                Styles::meta(),
            )),
        ],
        ImageBlock::Missing { reason, .. } => vec![Line::from(Span::styled(
            format!("⚠ photo unavailable: {}", reason),
            Styles::render_error(),
        ))],
    }
}

/// Lay out column bodies side by side and merge them row by row
fn merge_columns(columns: &[PanelBody], width: usize) -> Vec<Line<'static>> {
    let count = columns.len().max(1);
    let column_width = width.saturating_sub(COLUMN_GAP * (count - 1)) / count;

    let rendered: Vec<Vec<Line>> = columns
        .iter()
        .map(|column| body_lines(column, column_width))
        .collect();

    let height = rendered.iter().map(|lines| lines.len()).max().unwrap_or(0);
    let mut merged = Vec::with_capacity(height);

    for row in 0..height {
        let mut spans: Vec<Span> = Vec::new();

        for (idx, column) in rendered.iter().enumerate() {
            let row_width = match column.get(row) {
                Some(line) => {
                    spans.extend(line.spans.iter().cloned());
                    line.width()
                }
                None => 0,
            };

            if idx < count - 1 {
                let pad = column_width.saturating_sub(row_width) + COLUMN_GAP;
                spans.push(Span::raw(" ".repeat(pad)));
            }
        }

        merged.push(Line::from(spans));
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_progress_line_shows_level() {
        let text = line_text(&progress_line("Python", 90));
        assert!(text.contains("Python"));
        assert!(text.contains("90%"));
    }

    #[test]
    fn test_bullets_get_hanging_indent() {
        let mut body = PanelBody::new();
        body.bullets(vec!["a fairly long bullet item that needs wrapping".to_string()]);

        let lines = body_lines(&body, 20);
        assert!(line_text(&lines[0]).starts_with("• "));
        assert!(line_text(&lines[1]).starts_with("  "));
    }

    #[test]
    fn test_columns_merge_side_by_side() {
        let mut left = PanelBody::new();
        left.paragraph("left");
        let mut right = PanelBody::new();
        right.paragraph("right");

        let mut body = PanelBody::new();
        body.columns(vec![left, right]);

        let lines = body_lines(&body, 40);
        assert_eq!(lines.len(), 1);
        let text = line_text(&lines[0]);
        assert!(text.contains("left"));
        assert!(text.contains("right"));
        let left_pos = text.find("left").unwrap();
        let right_pos = text.find("right").unwrap();
        assert!(right_pos > left_pos);
    }

    #[test]
    fn test_missing_image_renders_error_line() {
        let mut body = PanelBody::new();
        body.image(ImageBlock::Missing {
            source: "x.jpeg".to_string(),
            reason: "photo 'x.jpeg' not found".to_string(),
        });

        let lines = body_lines(&body, 60);
        assert!(line_text(&lines[0]).contains("photo unavailable"));
    }
}
