//! Spaced JSON rendering.
//!
//! Both output lines render JSON on a single line with a space after each
//! item separator and key separator, e.g. `["a", "b"]` and `{"id": 1}`.

use serde::Serialize;
use serde_json::ser::Formatter;
use std::io;

/// Single-line formatter that writes `", "` between items and `": "`
/// between keys and values.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Serialize `value` as single-line JSON using [`SpacedFormatter`].
pub fn to_spaced_string<T>(value: &T) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(serde::ser::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_array() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(to_spaced_string(&empty).unwrap(), "[]");
    }

    #[test]
    fn array_items_are_spaced() {
        let value = vec!["--flag", "value"];
        assert_eq!(to_spaced_string(&value).unwrap(), r#"["--flag", "value"]"#);
    }

    #[test]
    fn object_members_are_spaced() {
        let value = json!({"userId": 1, "id": 1, "completed": false});
        assert_eq!(
            to_spaced_string(&value).unwrap(),
            r#"{"userId": 1, "id": 1, "completed": false}"#
        );
    }

    #[test]
    fn nested_values() {
        let value = json!({"tags": ["a", "b"], "meta": {}, "list": []});
        assert_eq!(
            to_spaced_string(&value).unwrap(),
            r#"{"tags": ["a", "b"], "meta": {}, "list": []}"#
        );
    }

    #[test]
    fn strings_are_escaped() {
        let value = vec!["say \"hi\"", "tab\there", "back\\slash"];
        assert_eq!(
            to_spaced_string(&value).unwrap(),
            r#"["say \"hi\"", "tab\there", "back\\slash"]"#
        );
    }

    #[test]
    fn scalars_render_plainly() {
        assert_eq!(to_spaced_string(&json!(null)).unwrap(), "null");
        assert_eq!(to_spaced_string(&json!(1.5)).unwrap(), "1.5");
        assert_eq!(to_spaced_string("x").unwrap(), r#""x""#);
    }
}
