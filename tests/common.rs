#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub fn rsl() -> Command {
    cargo_bin_cmd!("rstatuslog")
}

/// Create a temporary file path inside the system temp dir and remove any existing file
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rstatuslog.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a configuration file with the given YAML body and return its path
pub fn write_config(name: &str, yaml: &str) -> String {
    let path = temp_path(name, "conf");
    fs::write(&path, yaml).expect("write config");
    path
}

/// Path of a configuration file that does not exist (built-in defaults)
pub fn default_config(name: &str) -> String {
    temp_path(&format!("{name}_missing"), "conf")
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn para(text: &str) -> String {
    format!(
        r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
        escape(text)
    )
}

/// One `<w:tbl>`; each cell may hold several paragraphs separated by `\n`.
pub fn table(rows: &[&[&str]]) -> String {
    let mut xml = String::from("<w:tbl>");
    for row in rows {
        xml.push_str("<w:tr>");
        for cell in row.iter() {
            xml.push_str("<w:tc>");
            for line in cell.split('\n') {
                xml.push_str(&para(line));
            }
            xml.push_str("</w:tc>");
        }
        xml.push_str("</w:tr>");
    }
    xml.push_str("</w:tbl>");
    xml
}

pub fn document_xml(blocks: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
        blocks.concat()
    )
}

/// Write a minimal .docx archive holding `word/document.xml`
pub fn write_docx(name: &str, blocks: &[String]) -> String {
    let path = temp_path(name, "docx");
    let file = fs::File::create(&path).expect("create docx");
    let mut zip = ZipWriter::new(file);
    zip.start_file("word/document.xml", SimpleFileOptions::default())
        .expect("start entry");
    zip.write_all(document_xml(blocks).as_bytes())
        .expect("write entry");
    zip.finish().expect("finish docx");
    path
}

pub const OPENED: &str =
    "Jane Doe set the status of Ticket 4711 to Opened (effective 03/03/25 08:00 AM)";
pub const ACKNOWLEDGED: &str = "Bob Smith changed the status of Ticket 4711 from Opened to Acknowledged (Assigned to field team) (effective 03/03/25 09:30 AM)";
pub const IN_PROGRESS: &str = "Bob Smith changed the status of Ticket 4711 from Acknowledged to In Progress (effective 03/03/25 03:00 PM)";

/// Ticket 4711, priority Medium; updates listed out of order with a
/// header row and a plain comment.
pub fn sample_ticket_blocks(priority: &str, last_update: &str) -> Vec<String> {
    let acknowledged_cell = format!("Called the customer back\n{ACKNOWLEDGED}");
    vec![
        para("Service Ticket"),
        table(&[
            &["Details"],
            &["Ticket Number", "4711", "Priority", priority],
            &["Title", "Printer offline"],
        ]),
        para("Updates"),
        table(&[
            &["Date", "Update"],
            &["03/04/25 08:15 AM", last_update],
            &["03/03/25 08:05 AM", OPENED],
            &["03/03/25 09:40 AM", acknowledged_cell.as_str()],
        ]),
    ]
}

pub fn sample_ticket(name: &str) -> String {
    write_docx(name, &sample_ticket_blocks("Medium", IN_PROGRESS))
}
