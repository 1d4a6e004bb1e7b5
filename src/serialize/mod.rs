use std::fmt::{self, Write};

use crate::Value;

pub mod xml;

/// Recursively render a [`Value`] as canonical JSON text: objects in key
/// insertion order with `": "` and `", "` separators, numbers through
/// [`f64`]'s `Display`, strings escaped by [`write_string`].
pub fn write_value<W: Write>(value: &Value, w: &mut W) -> fmt::Result {
    match value {
        Value::Object(map) => {
            write!(w, "{{")?;
            for (i, (key, value)) in map.iter().enumerate() {
                if i != 0 {
                    write!(w, ", ")?;
                }
                write_string(w, key)?;
                write!(w, ": ")?;
                write_value(value, w)?;
            }
            write!(w, "}}")
        }
        Value::Array(values) => {
            write!(w, "[")?;
            for (i, value) in values.iter().enumerate() {
                if i != 0 {
                    write!(w, ", ")?;
                }
                write_value(value, w)?;
            }
            write!(w, "]")
        }
        Value::String(string) => write_string(w, string),
        Value::Number(number) => write!(w, "{number}"),
        Value::Bool(boolean) => write!(w, "{boolean}"),
        Value::Null => write!(w, "null"),
    }
}

/// Write a double-quoted string, escaping `"`, `\`, `/`, the named control
/// characters, and any other character below 0x20 as `\u00XX`.
pub(crate) fn write_string<W: Write>(w: &mut W, string: &str) -> fmt::Result {
    write!(w, "\"")?;
    for c in string.chars() {
        match c {
            '"' => write!(w, "\\\"")?,
            '\\' => write!(w, "\\\\")?,
            '/' => write!(w, "\\/")?,
            '\u{8}' => write!(w, "\\b")?,
            '\u{c}' => write!(w, "\\f")?,
            '\n' => write!(w, "\\n")?,
            '\r' => write!(w, "\\r")?,
            '\t' => write!(w, "\\t")?,
            c if (c as u32) < 0x20 => write!(w, "\\u{:04x}", c as u32)?,
            c => w.write_char(c)?,
        }
    }
    write!(w, "\"")
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::Value;

    #[test]
    fn test_to_string() {
        let string = r#"{"foo": 1, "bar": false, "data": ["abcd", 42, 54.7], "nothing": null}"#;
        assert_eq!(Value::from_str(string).unwrap().to_string(), string);

        assert_eq!(Value::from_str("{}").unwrap().to_string(), "{}");
        assert_eq!(Value::from_str("[]").unwrap().to_string(), "[]");
    }

    #[test]
    fn test_string_escapes() {
        let value = Value::Array(vec![Value::String("a\rb\nc\td \"q\" \\ / \u{1}".to_owned())]);
        assert_eq!(
            value.to_string(),
            r#"["a\rb\nc\td \"q\" \\ \/ \u0001"]"#
        );
    }

    #[test]
    fn test_reparse_serializer_output() {
        let value = Value::from_str(
            r#"{
                "person": {"name": "GWB", "age": 60},
                "escapes": ["a\rb\nc\td", "\u0002", "slash\/dot"],
                "numbers": [6, -6, 54.7, 2.5e3]
            }"#,
        )
        .unwrap();
        let same_value = Value::from_str(&value.to_string()).unwrap();
        assert_eq!(value, same_value);
    }
}
