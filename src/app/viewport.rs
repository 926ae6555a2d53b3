//! Scrollable text viewport for the preview pane.

/// Tabs are expanded so every line's display width is predictable.
const TAB_STOP: &str = "    ";

/// Vertically scrollable block of pre-styled text lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    lines: Vec<String>,
    offset: usize,
    width: usize,
    height: usize,
}

impl Viewport {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Replaces the content, keeping the offset when it is still in range.
    pub fn set_content(&mut self, content: &str) {
        self.lines = content
            .split('\n')
            .map(|line| line.trim_end_matches('\r').replace('\t', TAB_STOP))
            .collect();
        self.offset = self.offset.min(self.max_offset());
    }

    /// Fills the viewport with empty lines.
    pub fn blank(&mut self) {
        self.lines = vec![String::new(); self.height];
        self.offset = 0;
    }

    /// Removes all content.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.offset = 0;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(String::is_empty)
    }

    pub fn line_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn line_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn goto_top(&mut self) {
        self.offset = 0;
    }

    /// Lines currently in view.
    #[must_use]
    pub fn visible_lines(&self) -> &[String] {
        let start = self.offset.min(self.lines.len());
        let end = (start + self.height).min(self.lines.len());
        &self.lines[start..end]
    }

    fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.height)
    }
}
