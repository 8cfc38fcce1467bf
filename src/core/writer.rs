use crate::utils::error::{EtlError, Result};
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use std::io;

const INDENT: &[u8] = b"    ";

/// Pretty output that also writes `&`, `<`, `>`, U+2028 and U+2029 as
/// `\uXXXX` escapes, matching the escaping of earlier `*-targets.json` files.
struct HtmlSafeFormatter<'a>(PrettyFormatter<'a>);

impl Formatter for HtmlSafeFormatter<'_> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            let escaped = match ch {
                '&' => "\\u0026",
                '<' => "\\u003c",
                '>' => "\\u003e",
                '\u{2028}' => "\\u2028",
                '\u{2029}' => "\\u2029",
                _ => continue,
            };
            writer.write_all(&fragment.as_bytes()[start..index])?;
            writer.write_all(escaped.as_bytes())?;
            start = index + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}

/// Serializes `rows` as a JSON array indented with four spaces.
pub fn to_indented_json<T: Serialize>(rows: &[T]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = HtmlSafeFormatter(PrettyFormatter::with_indent(INDENT));
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);

    rows.serialize(&mut serializer)
        .map_err(|source| EtlError::SerializationError { source })?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ChaosTarget;

    #[test]
    fn test_four_space_indent_and_field_order() {
        let rows = vec![ChaosTarget {
            domain: "acme.com".to_string(),
            name: "Acme Corp".to_string(),
            platform_url: "https://acme.example".to_string(),
            zip: "https://chaos-data.projectdiscovery.io/acme_corp.zip".to_string(),
        }];

        let json = String::from_utf8(to_indented_json(&rows).unwrap()).unwrap();
        let expected = r#"[
    {
        "domain": "acme.com",
        "name": "Acme Corp",
        "platform_url": "https://acme.example",
        "ZIP": "https://chaos-data.projectdiscovery.io/acme_corp.zip"
    }
]"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_html_characters_are_escaped() {
        let rows = vec![ChaosTarget {
            domain: "att.com".to_string(),
            name: "AT&T <Labs>\u{2028}".to_string(),
            platform_url: "https://hackerone.com/att?a=1&b=2".to_string(),
            zip: "https://chaos-data.projectdiscovery.io/at&t_<labs>.zip".to_string(),
        }];

        let json = String::from_utf8(to_indented_json(&rows).unwrap()).unwrap();
        assert!(json.contains(r#""name": "AT\u0026T \u003cLabs\u003e\u2028","#));
        assert!(json.contains(r#""platform_url": "https://hackerone.com/att?a=1\u0026b=2","#));
        assert!(!json.contains('&'));

        let decoded: Vec<ChaosTarget> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, rows);
    }

    #[test]
    fn test_quotes_and_control_characters_still_escaped() {
        let rows = vec!["say \"hi\"\n".to_string()];
        let json = String::from_utf8(to_indented_json(&rows).unwrap()).unwrap();
        assert_eq!(json, "[\n    \"say \\\"hi\\\"\\n\"\n]");
    }

    #[test]
    fn test_empty_sequence_is_an_empty_array() {
        let rows: Vec<ChaosTarget> = Vec::new();
        assert_eq!(to_indented_json(&rows).unwrap(), b"[]");
    }
}
