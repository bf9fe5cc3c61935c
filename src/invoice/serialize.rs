//! Element tree to UBL-TR XML text.

use std::io::Cursor;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use rust_decimal::Decimal;

use crate::core::{SerializeOptions, UblError};

use super::assembler::InvoiceDocument;
use super::tree::Element;

fn xml_io(e: impl std::fmt::Display) -> UblError {
    UblError::Xml(format!("XML write error: {e}"))
}

/// Serialize a finished invoice with the default options: UTF-8
/// declaration, two-space indentation.
pub fn to_xml(document: &InvoiceDocument) -> Result<String, UblError> {
    to_xml_with(document, &SerializeOptions::default())
}

pub fn to_xml_with(document: &InvoiceDocument, options: &SerializeOptions) -> Result<String, UblError> {
    element_to_xml(document.root(), options)
}

/// Serialize any element subtree. Output depends only on the tree and the
/// options, so the same input always yields the same bytes.
pub fn element_to_xml(root: &Element, options: &SerializeOptions) -> Result<String, UblError> {
    let cursor = Cursor::new(Vec::new());
    let mut writer = if options.indent > 0 {
        Writer::new_with_indent(cursor, b' ', options.indent)
    } else {
        Writer::new(cursor)
    };
    if options.declaration {
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_io)?;
    }
    write_element(&mut writer, root)?;

    let buf = writer.into_inner().into_inner();
    let xml = String::from_utf8(buf).map_err(|e| UblError::Xml(format!("XML UTF-8 error: {e}")))?;
    tracing::debug!(root = root.name(), bytes = xml.len(), "serialized document");
    Ok(xml)
}

/// Whether `c` may appear in an XML 1.0 document.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

/// Escaping cannot represent these characters, so they fail the write.
fn check_chars(element: &Element, place: &str, value: &str) -> Result<(), UblError> {
    match value.chars().find(|c| !is_xml_char(*c)) {
        Some(c) => Err(UblError::Xml(format!(
            "{place} of {} contains U+{:04X}, which XML 1.0 does not allow",
            element.name(),
            u32::from(c)
        ))),
        None => Ok(()),
    }
}

fn write_element(writer: &mut Writer<Cursor<Vec<u8>>>, element: &Element) -> Result<(), UblError> {
    let mut start = BytesStart::new(element.name());
    for (k, v) in element.attributes() {
        check_chars(element, &format!("attribute {k}"), v)?;
        start.push_attribute((k.as_str(), v.as_str()));
    }

    if element.text().is_none() && element.children().is_empty() {
        return writer.write_event(Event::Empty(start)).map_err(xml_io);
    }

    writer.write_event(Event::Start(start)).map_err(xml_io)?;
    if let Some(text) = element.text() {
        check_chars(element, "text", text)?;
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_io)?;
    }
    for child in element.children() {
        write_element(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name())))
        .map_err(xml_io)
}

/// Format an amount: at least two decimal places, trailing zeros beyond
/// that stripped.
pub fn format_amount(d: Decimal) -> String {
    let s = d.normalize().to_string();
    match s.find('.') {
        Some(dot) => {
            let decimals = s.len() - dot - 1;
            if decimals < 2 {
                format!("{s}{}", "0".repeat(2 - decimals))
            } else {
                s
            }
        }
        None => format!("{s}.00"),
    }
}

/// Format a quantity, measure, percent or rate: trailing zeros stripped.
pub fn format_numeric(d: Decimal) -> String {
    d.normalize().to_string()
}
