//! Palette export payloads: JSON, CSV, XLSX and PDF.
//!
//! Exporters produce bytes (or strings); writing them to disk under the
//! fixed filenames is left to the caller.  Rows carry the same `{hex, name}`
//! shape the palette tool displays.

use std::io::{Cursor, Write};

use log::debug;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use rgb::RGB8;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::color::hex_to_rgb;

pub const JSON_FILENAME: &str = "palette.json";
pub const CSV_FILENAME: &str = "palette.csv";
pub const XLSX_FILENAME: &str = "palette.xlsx";
pub const PDF_FILENAME: &str = "palette.pdf";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One exported palette row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub hex: String,
    pub name: String,
}

impl PaletteEntry {
    pub fn new(hex: impl Into<String>, name: impl Into<String>) -> PaletteEntry {
        PaletteEntry { hex: hex.into(), name: name.into() }
    }
}

/// Pretty-printed JSON array of the palette rows.
pub fn palette_json(entries: &[PaletteEntry]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(entries)?)
}

fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// CSV with a `hex,name` header row.
pub fn palette_csv(entries: &[PaletteEntry]) -> String {
    let mut out = String::from("hex,name\n");
    for e in entries {
        out.push_str(&csv_field(&e.hex));
        out.push(',');
        out.push_str(&csv_field(&e.name));
        out.push('\n');
    }
    out
}

// Static parts of the OOXML package.  Only the worksheet varies.
const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Palette" sheetId="1" r:id="rId1"/></sheets></workbook>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

fn write_row(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    row: usize,
    cells: &[&str],
) -> Result<(), ExportError> {
    let mut r = BytesStart::new("row");
    r.push_attribute(("r", row.to_string().as_str()));
    writer.write_event(Event::Start(r))?;
    for (col, text) in cells.iter().enumerate() {
        let cell_ref = format!("{}{}", (b'A' + col as u8) as char, row);
        let mut c = BytesStart::new("c");
        c.push_attribute(("r", cell_ref.as_str()));
        c.push_attribute(("t", "inlineStr"));
        writer.write_event(Event::Start(c))?;
        writer.write_event(Event::Start(BytesStart::new("is")))?;
        writer.write_event(Event::Start(BytesStart::new("t")))?;
        writer.write_event(Event::Text(BytesText::new(text)))?;
        writer.write_event(Event::End(BytesEnd::new("t")))?;
        writer.write_event(Event::End(BytesEnd::new("is")))?;
        writer.write_event(Event::End(BytesEnd::new("c")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("row")))?;
    Ok(())
}

fn sheet_xml(entries: &[PaletteEntry]) -> Result<Vec<u8>, ExportError> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    let mut worksheet = BytesStart::new("worksheet");
    worksheet
        .push_attribute(("xmlns", "http://schemas.openxmlformats.org/spreadsheetml/2006/main"));
    writer.write_event(Event::Start(worksheet))?;
    writer.write_event(Event::Start(BytesStart::new("sheetData")))?;
    write_row(&mut writer, 1, &["hex", "name"])?;
    for (i, e) in entries.iter().enumerate() {
        write_row(&mut writer, i + 2, &[&e.hex, &e.name])?;
    }
    writer.write_event(Event::End(BytesEnd::new("sheetData")))?;
    writer.write_event(Event::End(BytesEnd::new("worksheet")))?;
    Ok(writer.into_inner().into_inner())
}

/// A single-sheet XLSX workbook of the palette rows (inline strings).
pub fn palette_xlsx(entries: &[PaletteEntry]) -> Result<Vec<u8>, ExportError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let opts = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    zip.start_file("[Content_Types].xml", opts)?;
    zip.write_all(CONTENT_TYPES.as_bytes())?;
    zip.start_file("_rels/.rels", opts)?;
    zip.write_all(ROOT_RELS.as_bytes())?;
    zip.start_file("xl/workbook.xml", opts)?;
    zip.write_all(WORKBOOK.as_bytes())?;
    zip.start_file("xl/_rels/workbook.xml.rels", opts)?;
    zip.write_all(WORKBOOK_RELS.as_bytes())?;
    zip.start_file("xl/worksheets/sheet1.xml", opts)?;
    zip.write_all(&sheet_xml(entries)?)?;
    let bytes = zip.finish()?.into_inner();
    debug!("xlsx export: {} rows, {} bytes", entries.len(), bytes.len());
    Ok(bytes)
}

fn pdf_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('(', "\\(").replace(')', "\\)")
}

/// A single-page A4 PDF: one filled swatch rectangle and the hex label per
/// row, top to bottom.
pub fn palette_pdf(entries: &[PaletteEntry]) -> Vec<u8> {
    const PAGE_HEIGHT: f64 = 842.;

    let mut content = String::new();
    for (i, e) in entries.iter().enumerate() {
        let c = hex_to_rgb(&e.hex).unwrap_or(RGB8 { r: 0, g: 0, b: 0 });
        let top = PAGE_HEIGHT - 40. - i as f64 * 30.;
        content.push_str(&format!(
            "{:.4} {:.4} {:.4} rg\n20 {} 40 20 re\nf\n",
            c.r as f64 / 255.,
            c.g as f64 / 255.,
            c.b as f64 / 255.,
            top - 20.,
        ));
        content.push_str(&format!(
            "0 0 0 rg\nBT\n/F1 12 Tf\n70 {} Td\n({}) Tj\nET\n",
            top - 14.,
            pdf_escape(&e.hex),
        ));
    }

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 595 842] \
         /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
            .to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        format!("<< /Length {} >>\nstream\n{}endstream", content.len(), content),
    ];

    let mut pdf = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, body));
    }
    let xref_at = pdf.len();
    pdf.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
    for offset in offsets {
        pdf.push_str(&format!("{offset:010} 00000 n \n"));
    }
    pdf.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_at,
    ));
    pdf.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<PaletteEntry> {
        vec![
            PaletteEntry::new("#3b82f6", "#3b82f6"),
            PaletteEntry::new("#c47d09", "#3b82f6"),
        ]
    }

    #[test]
    fn json_payload() {
        let json = palette_json(&entries()).unwrap();
        let parsed: Vec<PaletteEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entries());
    }

    #[test]
    fn csv_payload() {
        assert_eq!(
            palette_csv(&entries()),
            "hex,name\n#3b82f6,#3b82f6\n#c47d09,#3b82f6\n"
        );
        // fields containing separators get quoted
        let quoted = palette_csv(&[PaletteEntry::new("#000000", "a,b\"c")]);
        assert_eq!(quoted, "hex,name\n#000000,\"a,b\"\"c\"\n");
    }

    #[test]
    fn xlsx_payload_is_a_zip() {
        let bytes = palette_xlsx(&entries()).unwrap();
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }

    #[test]
    fn sheet_xml_contains_rows() {
        let xml = String::from_utf8(sheet_xml(&entries()).unwrap()).unwrap();
        assert!(xml.contains("<row r=\"1\">"));
        assert!(xml.contains("<c r=\"A2\" t=\"inlineStr\"><is><t>#3b82f6</t></is></c>"));
        assert!(xml.contains("<c r=\"B3\" t=\"inlineStr\">"));
    }

    #[test]
    fn pdf_payload_magic_and_labels() {
        let bytes = palette_pdf(&entries());
        assert!(bytes.starts_with(b"%PDF-1.4"));
        assert!(bytes.ends_with(b"%%EOF\n"));
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("(#3b82f6) Tj"));
        assert!(text.contains("/BaseFont /Helvetica"));
    }

    #[test]
    fn pdf_escapes_text_operands() {
        assert_eq!(pdf_escape("a(b)c\\"), "a\\(b\\)c\\\\");
    }
}
