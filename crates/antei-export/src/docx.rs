//! Markdown-subset to DOCX conversion for the rendered report.

use std::io::Cursor;

use docx_rs::{BreakType, Docx, Paragraph, Run, RunFonts, Style, StyleType};
use tracing::info;

use crate::error::ExportError;
use crate::styles::ReportStyles;

/// One logical line of the rendered report.
enum Block<'a> {
    Heading(u8, &'a str),
    Bullet(&'a str),
    PageBreak,
    Blank,
    Text(&'a str),
}

fn classify_line(line: &str) -> Block<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Block::Blank
    } else if let Some(text) = trimmed.strip_prefix("### ") {
        Block::Heading(3, text)
    } else if let Some(text) = trimmed.strip_prefix("## ") {
        Block::Heading(2, text)
    } else if let Some(text) = trimmed.strip_prefix("# ") {
        Block::Heading(1, text)
    } else if let Some(text) = trimmed.strip_prefix("- ") {
        Block::Bullet(text)
    } else if trimmed == "---" {
        Block::PageBreak
    } else {
        Block::Text(trimmed)
    }
}

/// Convert rendered template output to DOCX bytes.
///
/// Recognized subset: `#`/`##`/`###` headings, `- ` bullets, `**bold**`
/// inline segments, and `---` as a page break. Everything else is a body
/// paragraph.
pub fn generate_docx(rendered: &str, styles: &ReportStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size))
        .add_style(heading_style("Heading3", "heading 3", styles.heading3_size));

    for line in rendered.lines() {
        let paragraph = match classify_line(line) {
            Block::Blank => Paragraph::new(),
            Block::Heading(level, text) => Paragraph::new()
                .style(&format!("Heading{level}"))
                .add_run(
                    Run::new()
                        .add_text(text)
                        .fonts(report_fonts(&styles.heading_font)),
                ),
            Block::Bullet(text) => {
                let mut para = Paragraph::new().add_run(
                    Run::new()
                        .add_text("\u{2022} ")
                        .fonts(report_fonts(&styles.body_font)),
                );
                for run in inline_runs(text, styles) {
                    para = para.add_run(run);
                }
                para
            }
            Block::PageBreak => {
                Paragraph::new().add_run(Run::new().add_break(BreakType::Page))
            }
            Block::Text(text) => {
                let mut para = Paragraph::new();
                for run in inline_runs(text, styles) {
                    para = para.add_run(run);
                }
                para
            }
        };
        docx = docx.add_paragraph(paragraph);
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    let bytes = buf.into_inner();
    info!(bytes = bytes.len(), "docx packed");
    Ok(bytes)
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    // OOXML sizes are half-points.
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2)
}

/// Fonts with an east-asian binding so Japanese text renders with the
/// configured face instead of the DOCX default.
fn report_fonts(font: &str) -> RunFonts {
    RunFonts::new().ascii(font).east_asia(font)
}

/// Split `**bold**` segments into separate runs.
fn inline_runs(text: &str, styles: &ReportStyles) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut bold = false;
    for segment in text.split("**") {
        if !segment.is_empty() {
            let mut run = Run::new()
                .add_text(segment)
                .fonts(report_fonts(&styles.body_font));
            if bold {
                run = run.bold();
            }
            runs.push(run);
        }
        bold = !bold;
    }
    runs
}
