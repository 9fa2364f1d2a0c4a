//! DOCX reader.
//!
//! A `.docx` file is a ZIP archive whose body lives in `word/document.xml`.
//! The reader keeps only what the extractor needs: top-level paragraphs and
//! top-level tables as rows of cell texts. Paragraphs nested in text boxes
//! are folded into the paragraph that holds them.

use crate::errors::{AppError, AppResult};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

const DOCUMENT_XML: &str = "word/document.xml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(String),
    Table(Vec<Vec<String>>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentBody {
    pub blocks: Vec<Block>,
}

impl DocumentBody {
    /// Flatten the body to text: one line per paragraph or table row,
    /// cells joined with ` | `.
    pub fn plain_text(&self) -> String {
        let mut lines = Vec::new();
        for block in &self.blocks {
            match block {
                Block::Paragraph(p) => lines.push(p.clone()),
                Block::Table(rows) => {
                    for row in rows {
                        lines.push(row.join(" | "));
                    }
                }
            }
        }
        lines.join("\n")
    }

    pub fn tables(&self) -> impl Iterator<Item = &Vec<Vec<String>>> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(rows) => Some(rows),
            Block::Paragraph(_) => None,
        })
    }
}

pub struct DocxReader;

impl DocxReader {
    pub fn open(path: &Path) -> AppResult<DocumentBody> {
        let file = File::open(path)?;
        let mut archive = zip::ZipArchive::new(BufReader::new(file))?;
        let xml = Self::read_document_xml(&mut archive)?;
        Self::parse_document_xml(&xml)
    }

    fn read_document_xml<R: Read + Seek>(archive: &mut zip::ZipArchive<R>) -> AppResult<String> {
        let mut entry = archive
            .by_name(DOCUMENT_XML)
            .map_err(|e| AppError::Docx(format!("cannot find {DOCUMENT_XML}: {e}")))?;

        let mut xml = String::new();
        entry.read_to_string(&mut xml)?;
        Ok(xml)
    }

    /// Walk `word/document.xml` and collect paragraphs and tables.
    pub fn parse_document_xml(xml: &str) -> AppResult<DocumentBody> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(false);

        let mut body = DocumentBody::default();

        let mut table_depth = 0usize;
        let mut rows: Vec<Vec<String>> = Vec::new();
        let mut row: Vec<String> = Vec::new();
        let mut cell = String::new();
        // Open paragraphs, innermost last. Text boxes nest a `w:p` inside a run.
        let mut paragraphs: Vec<String> = Vec::new();
        let mut in_text = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"w:tbl" => {
                        table_depth += 1;
                        if table_depth == 1 {
                            rows.clear();
                        }
                    }
                    b"w:tr" if table_depth == 1 => row.clear(),
                    b"w:tc" if table_depth == 1 => cell.clear(),
                    b"w:p" => paragraphs.push(String::new()),
                    b"w:t" => in_text = true,
                    _ => {}
                },
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"w:tbl" => {
                        if table_depth == 1 {
                            body.blocks.push(Block::Table(std::mem::take(&mut rows)));
                        }
                        table_depth = table_depth.saturating_sub(1);
                    }
                    b"w:tr" if table_depth == 1 => rows.push(std::mem::take(&mut row)),
                    b"w:tc" if table_depth == 1 => row.push(cell.trim().to_string()),
                    b"w:p" => {
                        let Some(paragraph) = paragraphs.pop() else {
                            continue;
                        };
                        let text = paragraph.trim();
                        if text.is_empty() {
                            continue;
                        }

                        if let Some(outer) = paragraphs.last_mut() {
                            push_line(outer, text);
                            outer.push('\n');
                        } else if table_depth == 0 {
                            body.blocks.push(Block::Paragraph(text.to_string()));
                        } else {
                            push_line(&mut cell, text);
                        }
                    }
                    b"w:t" => in_text = false,
                    _ => {}
                },
                Ok(Event::Empty(e)) => {
                    let Some(paragraph) = paragraphs.last_mut() else {
                        continue;
                    };
                    match e.name().as_ref() {
                        b"w:tab" => paragraph.push('\t'),
                        b"w:br" | b"w:cr" => paragraph.push('\n'),
                        _ => {}
                    }
                }
                Ok(Event::Text(e)) if in_text => {
                    let text = e.unescape().map_err(|e| AppError::Xml(e.to_string()))?;
                    if let Some(paragraph) = paragraphs.last_mut() {
                        paragraph.push_str(&text);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(AppError::Xml(format!(
                        "error at position {}: {}",
                        reader.buffer_position(),
                        e
                    )));
                }
                _ => {}
            }
        }

        Ok(body)
    }
}

/// Append `text` on its own line.
fn push_line(buf: &mut String, text: &str) {
    let kept = buf.trim_end().len();
    buf.truncate(kept);
    if !buf.is_empty() {
        buf.push('\n');
    }
    buf.push_str(text);
}
