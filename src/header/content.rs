use crate::error::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Content-Transfer-Encoding of the message body
///
/// Selects both the value of the `Content-Transfer-Encoding` header and the
/// algorithm which renders the body (see [`encode_body`](crate::encode_body)).
///
/// **NOTE**: Enable feature "serde" to be able serialize/deserialize it using [serde](https://serde.rs/).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ContentTransferEncoding {
    #[cfg_attr(feature = "serde", serde(rename = "7bit"))]
    SevenBit,
    // 8BITMIME
    #[cfg_attr(feature = "serde", serde(rename = "8bit"))]
    EightBit,
    #[cfg_attr(feature = "serde", serde(rename = "base64"))]
    Base64,
    #[cfg_attr(feature = "serde", serde(rename = "quoted-printable"))]
    QuotedPrintable,
}

impl ContentTransferEncoding {
    pub const HEADER_NAME: &'static str = "Content-Transfer-Encoding";

    /// Wire token of the encoding
    pub fn as_str(&self) -> &'static str {
        use self::ContentTransferEncoding::*;
        match *self {
            SevenBit => "7bit",
            EightBit => "8bit",
            Base64 => "base64",
            QuotedPrintable => "quoted-printable",
        }
    }
}

impl Default for ContentTransferEncoding {
    fn default() -> Self {
        ContentTransferEncoding::QuotedPrintable
    }
}

impl Display for ContentTransferEncoding {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentTransferEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use self::ContentTransferEncoding::*;
        match s {
            "7bit" => Ok(SevenBit),
            "8bit" => Ok(EightBit),
            "base64" => Ok(Base64),
            "quoted-printable" => Ok(QuotedPrintable),
            _ => Err(Error::UnknownEncoding(s.into())),
        }
    }
}

/// Content-Type selected by the body setters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// `text/plain; charset=utf-8; format=flowed`
    FlowedText,
    /// `text/html; charset=utf-8`
    Html,
}

impl ContentType {
    pub const HEADER_NAME: &'static str = "Content-Type";
}

impl Display for ContentType {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match *self {
            ContentType::FlowedText => write!(f, "{}; format=flowed", mime::TEXT_PLAIN_UTF_8),
            ContentType::Html => write!(f, "{}", mime::TEXT_HTML_UTF_8),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{ContentTransferEncoding, ContentType};
    use crate::error::Error;

    #[test]
    fn encoding_tokens() {
        use self::ContentTransferEncoding::*;

        for encoding in &[SevenBit, EightBit, Base64, QuotedPrintable] {
            assert_eq!(encoding.to_string().parse(), Ok(*encoding));
        }

        assert_eq!(format!("{}", QuotedPrintable), "quoted-printable");
        assert_eq!(ContentTransferEncoding::default(), QuotedPrintable);
    }

    #[test]
    fn encoding_unknown_token() {
        assert_eq!(
            "binary".parse::<ContentTransferEncoding>(),
            Err(Error::UnknownEncoding("binary".into()))
        );
    }

    #[test]
    fn content_types() {
        assert_eq!(
            ContentType::FlowedText.to_string(),
            "text/plain; charset=utf-8; format=flowed"
        );
        assert_eq!(ContentType::Html.to_string(), "text/html; charset=utf-8");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn encoding_serde() {
        use serde_json::{from_str, to_string};

        assert_eq!(
            to_string(&ContentTransferEncoding::QuotedPrintable).unwrap(),
            "\"quoted-printable\""
        );
        assert_eq!(
            from_str::<ContentTransferEncoding>("\"7bit\"").unwrap(),
            ContentTransferEncoding::SevenBit
        );
    }
}
