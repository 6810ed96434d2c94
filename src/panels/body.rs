// Panel Body
// The structured content a render procedure emits; the UI layer maps each
// block to terminal widgets

/// Outcome of loading the profile photo for an image block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageBlock {
    /// Photo bytes were read; the terminal shows a placeholder with the size
    Loaded { source: String, bytes: usize },

    /// Photo was missing or unreadable; shown as a visible, non-fatal error
    Missing { source: String, reason: String },
}

/// One block of emitted panel content
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Heading(String),
    Subheading(String),
    Paragraph(String),
    Bullets(Vec<String>),
    Progress { label: String, level: u8 },
    Link { label: String, url: String },
    Image(ImageBlock),
    Columns(Vec<PanelBody>),
    Blank,
}

/// Ordered sequence of content blocks produced by one render pass
/// Each pass builds a fresh body; nothing accumulates across passes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelBody {
    blocks: Vec<ContentBlock>,
}

impl PanelBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    // === Emit operations ===

    pub fn heading(&mut self, text: impl Into<String>) {
        self.blocks.push(ContentBlock::Heading(text.into()));
    }

    pub fn subheading(&mut self, text: impl Into<String>) {
        self.blocks.push(ContentBlock::Subheading(text.into()));
    }

    pub fn paragraph(&mut self, text: impl Into<String>) {
        self.blocks.push(ContentBlock::Paragraph(text.into()));
    }

    pub fn bullets(&mut self, items: Vec<String>) {
        self.blocks.push(ContentBlock::Bullets(items));
    }

    pub fn progress(&mut self, label: impl Into<String>, level: u8) {
        self.blocks.push(ContentBlock::Progress {
            label: label.into(),
            level: level.min(100),
        });
    }

    pub fn link(&mut self, label: impl Into<String>, url: impl Into<String>) {
        self.blocks.push(ContentBlock::Link {
            label: label.into(),
            url: url.into(),
        });
    }

    pub fn image(&mut self, image: ImageBlock) {
        self.blocks.push(ContentBlock::Image(image));
    }

    pub fn columns(&mut self, columns: Vec<PanelBody>) {
        self.blocks.push(ContentBlock::Columns(columns));
    }

    pub fn blank(&mut self) {
        self.blocks.push(ContentBlock::Blank);
    }

    // === Content queries (used by tests and the UI layer) ===

    /// All links in the body, in emission order, including nested columns
    pub fn links(&self) -> Vec<(&str, &str)> {
        let mut found = Vec::new();
        collect_links(&self.blocks, &mut found);
        found
    }

    /// All progress entries in the body, in emission order
    pub fn progress_entries(&self) -> Vec<(&str, u8)> {
        let mut found = Vec::new();
        collect_progress(&self.blocks, &mut found);
        found
    }

    /// Whether any text in the body contains the given needle
    pub fn contains_text(&self, needle: &str) -> bool {
        blocks_contain(&self.blocks, needle)
    }
}

fn collect_links<'a>(blocks: &'a [ContentBlock], found: &mut Vec<(&'a str, &'a str)>) {
    for block in blocks {
        match block {
            ContentBlock::Link { label, url } => found.push((label.as_str(), url.as_str())),
            ContentBlock::Columns(columns) => {
                for column in columns {
                    collect_links(&column.blocks, found);
                }
            }
            _ => {}
        }
    }
}

fn collect_progress<'a>(blocks: &'a [ContentBlock], found: &mut Vec<(&'a str, u8)>) {
    for block in blocks {
        match block {
            ContentBlock::Progress { label, level } => found.push((label.as_str(), *level)),
            ContentBlock::Columns(columns) => {
                for column in columns {
                    collect_progress(&column.blocks, found);
                }
            }
            _ => {}
        }
    }
}

fn blocks_contain(blocks: &[ContentBlock], needle: &str) -> bool {
    blocks.iter().any(|block| match block {
        ContentBlock::Heading(text)
        | ContentBlock::Subheading(text)
        | ContentBlock::Paragraph(text) => text.contains(needle),
        ContentBlock::Bullets(items) => items.iter().any(|item| item.contains(needle)),
        ContentBlock::Progress { label, .. } => label.contains(needle),
        ContentBlock::Link { label, url } => label.contains(needle) || url.contains(needle),
        ContentBlock::Image(image) => match image {
            ImageBlock::Loaded { source, .. } => source.contains(needle),
            ImageBlock::Missing { source, reason } => {
                source.contains(needle) || reason.contains(needle)
            }
        },
        ContentBlock::Columns(columns) => {
            columns.iter().any(|column| blocks_contain(&column.blocks, needle))
        }
        ContentBlock::Blank => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_clamps_level() {
        let mut body = PanelBody::new();
        body.progress("Rust", 120);
        assert_eq!(body.progress_entries(), vec![("Rust", 100)]);
    }

    #[test]
    fn test_queries_see_into_columns() {
        let mut left = PanelBody::new();
        left.link("GitHub", "https://github.example/me");
        let mut right = PanelBody::new();
        right.progress("Python", 90);

        let mut body = PanelBody::new();
        body.heading("Split");
        body.columns(vec![left, right]);

        assert_eq!(body.links(), vec![("GitHub", "https://github.example/me")]);
        assert_eq!(body.progress_entries(), vec![("Python", 90)]);
        assert!(body.contains_text("github.example"));
        assert!(!body.contains_text("gitlab"));
    }
}
