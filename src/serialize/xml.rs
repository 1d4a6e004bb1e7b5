//! XML renderings of a value tree: three interchangeable dialects sharing
//! one recursive walk.
//!
//! - [`XmlFormat::JsonX`]: IBM JSONx, `<json:number name="...">` elements
//!   with the JSONx namespace declared on the root.
//! - [`XmlFormat::Jxml`]: compact `<j son="TYPE[:name]">` elements.
//! - [`XmlFormat::JxmlEx`]: like `Jxml`, plus an attribute on named elements
//!   carrying the scalar's text, so leaves are readable from attributes
//!   alone.

use crate::{cursor::Cursor, options::ParseOptions, parser::parse_root, value::Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XmlFormat {
    JsonX,
    Jxml,
    JxmlEx,
}

/// First line of every XML output, including the fail-soft one.
pub const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

const JSONX_ROOT_ATTRIB: &str = " xsi:schemaLocation=\"http://www.datapower.com/schemas/json jsonx.xsd\" xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" xmlns:json=\"http://www.ibm.com/xmlns/prod/2009/jsonx\"";

/// Convert a JSON document to XML, gated by the validator: if `input` does
/// not parse as a complete object or array, the result is the header line
/// only rather than an error.
///
/// ```
/// use jsonish::XmlFormat;
///
/// let xml = jsonish::xml_from_str(r#"{"a": 1}"#, XmlFormat::Jxml);
/// assert!(xml.contains(r#"<j son="n:a">1</j>"#));
///
/// let xml = jsonish::xml_from_str(r#"{"a": 1"#, XmlFormat::Jxml);
/// assert_eq!(xml, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
/// ```
pub fn xml_from_str(input: &str, format: XmlFormat) -> String {
    xml_from_str_with(input, format, &ParseOptions::default())
}

/// [`xml_from_str`] with explicit [`ParseOptions`].
pub fn xml_from_str_with(input: &str, format: XmlFormat, options: &ParseOptions) -> String {
    match parse_root(&mut Cursor::new(input.as_bytes()), options) {
        Ok(value) => value_to_xml(&value, format),
        Err(_) => format!("{XML_HEADER}\n"),
    }
}

pub(crate) fn value_to_xml(value: &Value, format: XmlFormat) -> String {
    let mut output = String::from(XML_HEADER);
    output.push('\n');
    let root_attrib = match format {
        XmlFormat::JsonX => JSONX_ROOT_ATTRIB,
        XmlFormat::Jxml | XmlFormat::JxmlEx => "",
    };
    write_tag(&mut output, format, 0, None, value, root_attrib);
    output
}

/// One element per value, tab-indented, one per line. `name` is set for
/// object members only; `attrib` is extra attribute text for the root.
fn write_tag(
    output: &mut String,
    format: XmlFormat,
    depth: usize,
    name: Option<&str>,
    value: &Value,
    attrib: &str,
) {
    let tab = "\t".repeat(depth);
    match value {
        Value::Null => {
            output.push_str(&tab);
            output.push_str(&open_tag(format, value, name, " /", ""));
            output.push('\n');
        }
        Value::Object(map) => {
            output.push_str(&tab);
            output.push_str(&open_tag(format, value, name, attrib, ""));
            output.push('\n');
            for (key, member) in map {
                write_tag(output, format, depth + 1, Some(key), member, "");
            }
            output.push_str(&tab);
            output.push_str(&close_tag(format, value));
            output.push('\n');
        }
        Value::Array(values) => {
            output.push_str(&tab);
            output.push_str(&open_tag(format, value, name, attrib, ""));
            output.push('\n');
            for element in values {
                write_tag(output, format, depth + 1, None, element, "");
            }
            output.push_str(&tab);
            output.push_str(&close_tag(format, value));
            output.push('\n');
        }
        Value::String(string) => {
            write_leaf(output, format, &tab, name, value, &escape_text(string));
        }
        Value::Number(number) => {
            write_leaf(output, format, &tab, name, value, &number.to_string());
        }
        Value::Bool(boolean) => {
            write_leaf(output, format, &tab, name, value, &boolean.to_string());
        }
    }
}

fn write_leaf(
    output: &mut String,
    format: XmlFormat,
    tab: &str,
    name: Option<&str>,
    value: &Value,
    text: &str,
) {
    let attrib_text = if format == XmlFormat::JxmlEx { text } else { "" };
    output.push_str(tab);
    output.push_str(&open_tag(format, value, name, "", attrib_text));
    output.push_str(text);
    output.push_str(&close_tag(format, value));
    output.push('\n');
}

fn open_tag(
    format: XmlFormat,
    value: &Value,
    name: Option<&str>,
    attrib: &str,
    text: &str,
) -> String {
    let tag_name = match (format, name) {
        (XmlFormat::Jxml | XmlFormat::JxmlEx, None) => {
            format!("j son=\"{}\"", type_char(value))
        }
        (XmlFormat::Jxml, Some(name)) => {
            format!("j son=\"{}:{}\"", type_char(value), escape_quotes(name))
        }
        (XmlFormat::JxmlEx, Some(name)) => format!(
            "j son=\"{}:{}\" {}=\"{}\"",
            type_char(value),
            escape_quotes(name),
            escape_attrib_name(name),
            escape_quotes(text),
        ),
        (XmlFormat::JsonX, None) => format!("json:{}", type_name(value)),
        (XmlFormat::JsonX, Some(name)) => {
            format!("json:{} name=\"{}\"", type_name(value), escape_quotes(name))
        }
    };
    format!("<{tag_name}{attrib}>")
}

fn close_tag(format: XmlFormat, value: &Value) -> String {
    match format {
        XmlFormat::Jxml | XmlFormat::JxmlEx => "</j>".to_owned(),
        XmlFormat::JsonX => format!("</json:{}>", type_name(value)),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn type_char(value: &Value) -> char {
    match value {
        Value::Null => '0',
        Value::Bool(_) => 'b',
        Value::Number(_) => 'n',
        Value::String(_) => 's',
        Value::Array(_) => 'a',
        Value::Object(_) => 'o',
    }
}

/// Escape a string for use inside a quoted attribute value.
fn escape_quotes(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\'' => output.push_str("\\'"),
            c => output.push(c),
        }
    }
    output
}

/// Reduce a member name to valid attribute-name characters.
fn escape_attrib_name(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Escape element text content.
fn escape_text(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            c => output.push(c),
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_jsonx() {
        let value = Value::from_str(r#"{"a": 1, "b": [true, null]}"#).unwrap();
        let expected = format!(
            "{XML_HEADER}\n<json:object{JSONX_ROOT_ATTRIB}>\n\
             \t<json:number name=\"a\">1</json:number>\n\
             \t<json:array name=\"b\">\n\
             \t\t<json:boolean>true</json:boolean>\n\
             \t\t<json:null />\n\
             \t</json:array>\n\
             </json:object>\n"
        );
        assert_eq!(value.to_xml(XmlFormat::JsonX), expected);
    }

    #[test]
    fn test_jxml() {
        let value = Value::from_str(r#"[true, null, "hi"]"#).unwrap();
        let expected = format!(
            "{XML_HEADER}\n<j son=\"a\">\n\
             \t<j son=\"b\">true</j>\n\
             \t<j son=\"0\" />\n\
             \t<j son=\"s\">hi</j>\n\
             </j>\n"
        );
        assert_eq!(value.to_xml(XmlFormat::Jxml), expected);
    }

    #[test]
    fn test_jxmlex_leaf_attributes() {
        let value = Value::from_str(r#"{"k v": "x<y"}"#).unwrap();
        let xml = value.to_xml(XmlFormat::JxmlEx);
        assert!(xml.starts_with(XML_HEADER));
        assert!(xml.contains("<j son=\"s:k v\" k_v=\"x&lt;y\">x&lt;y</j>"));
    }

    #[test]
    fn test_fail_soft_conversion() {
        let header_only = format!("{XML_HEADER}\n");
        assert_eq!(xml_from_str("not json", XmlFormat::JsonX), header_only);
        assert_eq!(xml_from_str(r#"{"a": }"#, XmlFormat::Jxml), header_only);

        // Leading insignificant bytes are trimmed before the gate.
        let xml = xml_from_str("\x01 \n {\"a\": 1}", XmlFormat::Jxml);
        assert!(xml.contains("<j son=\"n:a\">1</j>"));
    }

    #[test]
    fn test_permissive_conversion() {
        let options = ParseOptions::permissive();
        let xml = xml_from_str_with("{'a': 1,}", XmlFormat::JsonX, &options);
        assert!(xml.contains("<json:number name=\"a\">1</json:number>"));
        assert_eq!(
            xml_from_str("{'a': 1,}", XmlFormat::JsonX),
            format!("{XML_HEADER}\n")
        );
    }
}
