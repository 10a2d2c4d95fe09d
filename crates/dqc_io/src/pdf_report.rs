//! Paginated PDF report.
//!
//! The report is a flat list of text lines laid out top to bottom on US-letter
//! pages in Helvetica. Lines longer than [`WRAP_WIDTH`] characters are wrapped
//! and a new page starts whenever the cursor reaches the bottom margin.

use crate::{IoError, Result, summary_lines};
use dqc_core::{CheckFamily, ValidationResult};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of the PDF report.
pub const PDF_FILE: &str = "validation_report.pdf";

/// Maximum characters per rendered line.
pub const WRAP_WIDTH: usize = 100;

const PAGE_WIDTH: i64 = 612;
const PAGE_HEIGHT: i64 = 792;
const MARGIN_LEFT: i64 = 30;
const MARGIN_TOP: i64 = 30;
const MARGIN_BOTTOM: i64 = 50;
const LINE_HEIGHT: i64 = 14;
const BODY_SIZE: i64 = 9;
const TITLE_SIZE: i64 = 14;
const RULE: &str = "----------------------------------------";

/// One line of report text with its font size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub text: String,
    pub size: i64,
}

impl ReportLine {
    fn body(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: BODY_SIZE,
        }
    }

    fn title(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: TITLE_SIZE,
        }
    }
}

/// Builds the report content: title, per-column counts, totals, then the
/// ordered findings grouped by check family.
pub fn report_lines(result: &ValidationResult, title: &str) -> Vec<ReportLine> {
    let mut lines = vec![
        ReportLine::title(title),
        ReportLine::body(format!("Rows validated: {}", result.rows_validated())),
    ];
    if !result.missing_columns().is_empty() {
        lines.push(ReportLine::body(format!(
            "Columns not found in data: {}",
            result.missing_columns().join(", ")
        )));
    }
    lines.push(ReportLine::body(""));
    lines.extend(summary_lines(result).into_iter().map(ReportLine::body));

    let sections = [
        (CheckFamily::Datatype, "Datatype Validation Errors"),
        (CheckFamily::DuplicateKey, "Duplicate Keys"),
        (CheckFamily::SpecialCharacter, "Rows with Special Characters"),
    ];
    for (family, heading) in sections {
        lines.push(ReportLine::body(""));
        lines.push(ReportLine::body(heading));
        lines.push(ReportLine::body(RULE));

        let mut any = false;
        for record in result
            .records()
            .iter()
            .filter(|r| r.error_kind().family() == family)
        {
            any = true;
            let text = format!(
                "Row {} | Column: {} | {} | {}",
                record.row_index(),
                record.column_name(),
                record.error_kind(),
                record.detail()
            );
            lines.extend(wrap_text(&text, WRAP_WIDTH).into_iter().map(ReportLine::body));
        }
        if !any {
            lines.push(ReportLine::body("None"));
        }
    }

    lines
}

/// Wraps on whitespace, breaking words longer than `width`.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let current_len = current.chars().count();
        if current_len > 0 && current_len + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Splits lines into pages by available vertical space.
pub fn paginate(lines: Vec<ReportLine>) -> Vec<Vec<ReportLine>> {
    let mut pages = Vec::new();
    let mut page = Vec::new();
    let mut y = PAGE_HEIGHT - MARGIN_TOP;

    for line in lines {
        if y < MARGIN_BOTTOM {
            pages.push(std::mem::take(&mut page));
            y = PAGE_HEIGHT - MARGIN_TOP;
        }
        page.push(line);
        y -= LINE_HEIGHT;
    }
    if !page.is_empty() || pages.is_empty() {
        pages.push(page);
    }
    pages
}

/// Writes `validation_report.pdf` into `dir`, creating it if needed.
pub fn write_pdf_report(result: &ValidationResult, title: &str, dir: &Path) -> Result<PathBuf> {
    crate::ensure_dir(dir)?;
    let path = dir.join(PDF_FILE);

    let pages = paginate(report_lines(result, title));
    let page_count = pages.len();
    let mut doc = render(pages).map_err(|e| IoError::pdf(&path, e))?;
    doc.save(&path).map_err(|e| IoError::pdf(&path, e))?;

    info!(path = %path.display(), pages = page_count, "Wrote PDF report");
    Ok(path)
}

fn render(pages: Vec<Vec<ReportLine>>) -> std::result::Result<Document, lopdf::Error> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let content = page_content(&page);
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    Ok(doc)
}

fn page_content(lines: &[ReportLine]) -> Content {
    let mut operations = Vec::with_capacity(lines.len() * 5);
    let mut y = PAGE_HEIGHT - MARGIN_TOP;

    for line in lines {
        if !line.text.is_empty() {
            operations.extend([
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), line.size.into()]),
                Operation::new("Td", vec![MARGIN_LEFT.into(), y.into()]),
                Operation::new("Tj", vec![Object::string_literal(printable(&line.text))]),
                Operation::new("ET", vec![]),
            ]);
        }
        y -= LINE_HEIGHT;
    }

    Content { operations }
}

/// Helvetica with WinAnsi covers printable ASCII; anything else is shown as '?'.
fn printable(text: &str) -> String {
    text.chars()
        .map(|c| if c == ' ' || c.is_ascii_graphic() { c } else { '?' })
        .collect()
}
