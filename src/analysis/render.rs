/// One line of analysis output, ready to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    pub content: String,
    /// Drives the warning icon and styling, never the content
    pub is_warning: bool,
}

impl DisplayLine {
    pub fn new(content: &str) -> Self {
        let lower = content.to_lowercase();
        Self {
            content: content.to_string(),
            is_warning: lower.contains("warning") || lower.contains("alert"),
        }
    }
}

/// Split normalized text into display lines, keeping order and empty lines
pub fn render(text: &str) -> Vec<DisplayLine> {
    text.split('\n').map(DisplayLine::new).collect()
}
