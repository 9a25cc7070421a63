use serde::{Deserialize, Serialize};

/// Document styling for the exported report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportStyles {
    /// Body font. Must cover Japanese — the report text is Japanese.
    pub body_font: String,

    /// Heading font.
    pub heading_font: String,

    /// Body text size in points.
    pub body_size: usize,

    /// Heading 1 size in points.
    pub heading1_size: usize,

    /// Heading 2 size in points.
    pub heading2_size: usize,

    /// Heading 3 size in points.
    pub heading3_size: usize,
}

impl Default for ReportStyles {
    fn default() -> Self {
        Self {
            body_font: "Yu Gothic".to_string(),
            heading_font: "Yu Gothic".to_string(),
            body_size: 11,
            heading1_size: 18,
            heading2_size: 14,
            heading3_size: 12,
        }
    }
}
