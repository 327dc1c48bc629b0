//! Embedded canonical templates and decoding of template and document bytes.
use crate::error::TemplateError;
use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// The sort orders shipped with the crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredefinedOrder {
    /// The element order recommended by the Maven project since June 2008.
    #[default]
    #[serde(rename = "recommended_2008_06")]
    Recommended2008_06,
    /// The element order of the POM 4.0.0 XML schema.
    #[serde(rename = "default_1_0_0")]
    Default1_0_0,
}

impl PredefinedOrder {
    pub const ALL: [PredefinedOrder; 2] = [
        PredefinedOrder::Recommended2008_06,
        PredefinedOrder::Default1_0_0,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PredefinedOrder::Recommended2008_06 => "recommended_2008_06",
            PredefinedOrder::Default1_0_0 => "default_1_0_0",
        }
    }

    /// The template document, as UTF-8 XML text.
    pub fn template(self) -> &'static str {
        match self {
            PredefinedOrder::Recommended2008_06 => {
                include_str!("templates/recommended_2008_06.xml")
            }
            PredefinedOrder::Default1_0_0 => include_str!("templates/default_1_0_0.xml"),
        }
    }
}

impl FromStr for PredefinedOrder {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_end_matches(".xml");
        PredefinedOrder::ALL
            .into_iter()
            .find(|order| order.name() == wanted)
            .ok_or_else(|| TemplateError::UnknownOrder(s.to_string()))
    }
}

impl fmt::Display for PredefinedOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decodes raw template or document bytes using the encoding named by `encoding_label`
/// (any WHATWG label, e.g. `UTF-8`, `latin1`, `windows-1252`).
///
/// A byte order mark takes precedence over the label. Malformed input is an
/// error rather than being replaced with U+FFFD.
pub fn decode_text<'b>(
    bytes: &'b [u8],
    encoding_label: &str,
) -> Result<Cow<'b, str>, TemplateError> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None => {
            let encoding = Encoding::for_label(encoding_label.trim().as_bytes())
                .ok_or_else(|| TemplateError::UnknownEncoding(encoding_label.to_string()))?;
            (encoding, bytes)
        }
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or(TemplateError::Decode {
            encoding: encoding.name(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::OrderTable;

    #[test]
    fn test_predefined_orders_build_tables() {
        for order in PredefinedOrder::ALL {
            let table = OrderTable::from_template_str(order.template()).unwrap();
            assert_eq!(table.priority("/project"), Some(1000), "{}", order);
            assert!(table.contains("/project/dependencies/dependency"));
            assert!(table.contains("/project/build/plugins/plugin"));
        }
    }

    #[test]
    fn test_recommended_order_puts_model_version_first() {
        let table =
            OrderTable::from_template_str(PredefinedOrder::Recommended2008_06.template()).unwrap();
        assert_eq!(table.priority("/project/modelVersion"), Some(1100));
        assert!(
            table.priority("/project/dependencies").unwrap()
                < table.priority("/project/build").unwrap()
        );
    }

    #[test]
    fn test_parse_predefined_order_names() {
        assert_eq!(
            "recommended_2008_06".parse::<PredefinedOrder>().unwrap(),
            PredefinedOrder::Recommended2008_06
        );
        assert_eq!(
            "default_1_0_0.xml".parse::<PredefinedOrder>().unwrap(),
            PredefinedOrder::Default1_0_0
        );
        assert!(matches!(
            "custom_1".parse::<PredefinedOrder>(),
            Err(TemplateError::UnknownOrder(name)) if name == "custom_1"
        ));
    }

    #[test]
    fn test_decode_latin1_template() {
        let bytes = b"<project><n\xe4me/></project>";
        let text = decode_text(bytes, "ISO-8859-1").unwrap();
        assert_eq!(text, "<project><n\u{e4}me/></project>");
    }

    #[test]
    fn test_decode_strips_utf8_bom() {
        let bytes = b"\xef\xbb\xbf<project/>";
        assert_eq!(decode_text(bytes, "latin1").unwrap(), "<project/>");
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(
            decode_text(b"<project/>", "no-such-encoding"),
            Err(TemplateError::UnknownEncoding(_))
        ));
        assert!(matches!(
            decode_text(b"<project>\xff</project>", "UTF-8"),
            Err(TemplateError::Decode { encoding: "UTF-8" })
        ));
    }
}
