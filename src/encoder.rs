use crate::header::ContentTransferEncoding;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::trace;

/// Base64 line length without the trailing CRLF
const BASE64_LINE_LENGTH: usize = 78 - 2;

/// Encode text as a RFC 2047 "B" encoded-word
///
/// The whole UTF-8 text goes into a single word, without folding.
pub fn encode_word(text: &str) -> String {
    format!("=?UTF-8?B?{}?=", STANDARD.encode(text))
}

/// Encode the message body using transfer encoding
pub fn encode_body(body: &str, encoding: &ContentTransferEncoding) -> String {
    use self::ContentTransferEncoding::*;
    trace!(encoding = encoding.as_str(), len = body.len(), "encoding body");
    match encoding {
        Base64 => encode_base64_lines(body),
        QuotedPrintable => encode_quoted_printable(body),
        SevenBit | EightBit => body.into(),
    }
}

/// Encode the message body using transfer encoding token
///
/// Unknown tokens leave the body unchanged.
pub fn encode_body_as(body: &str, encoding: &str) -> String {
    match encoding.parse::<ContentTransferEncoding>() {
        Ok(encoding) => encode_body(body, &encoding),
        Err(_) => body.into(),
    }
}

fn encode_base64_lines(body: &str) -> String {
    let encoded = STANDARD.encode(body);
    let mut out = String::with_capacity(encoded.len() + encoded.len() / BASE64_LINE_LENGTH * 2 + 2);

    // base64 output is pure ASCII, so any byte offset is a char boundary
    let mut rest = encoded.as_str();
    while !rest.is_empty() {
        let (line, tail) = rest.split_at(rest.len().min(BASE64_LINE_LENGTH));
        out.push_str(line);
        out.push_str("\r\n");
        rest = tail;
    }

    out
}

fn encode_quoted_printable(body: &str) -> String {
    quoted_printable::encode_to_str(normalize_line_breaks(body))
}

/// Convert lone `CR` and lone `LF` into `CRLF`
fn normalize_line_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("\r\n");
            }
            '\n' => out.push_str("\r\n"),
            c => out.push(c),
        }
    }

    out
}

/// Word wrap text at `width` characters using `line_break`
///
/// Lines are broken only at spaces, the space at the break point is replaced
/// by `line_break`. Words longer than `width` are left intact. Existing `LF`
/// or `CRLF` line endings are kept as is.
pub fn wrap_text(text: &str, width: usize, line_break: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / width.max(1) * line_break.len());
    let mut rest = text;

    while let Some(pos) = rest.find('\n') {
        let (line, tail) = rest.split_at(pos + 1);
        let (content, ending) = match line.strip_suffix("\r\n") {
            Some(content) => (content, "\r\n"),
            None => (&line[..pos], "\n"),
        };
        wrap_line(content, width, line_break, &mut out);
        out.push_str(ending);
        rest = tail;
    }
    wrap_line(rest, width, line_break, &mut out);

    out
}

fn wrap_line(line: &str, width: usize, line_break: &str, out: &mut String) {
    let offsets: Vec<usize> = line.char_indices().map(|(i, _)| i).collect();
    let byte_at = |n: usize| offsets.get(n).cloned().unwrap_or(line.len());

    // char positions of the current output line start and its last space
    let mut start = 0;
    let mut space: Option<usize> = None;

    for (n, c) in line.chars().enumerate() {
        if c == ' ' {
            if n - start >= width {
                out.push_str(&line[byte_at(start)..byte_at(n)]);
                out.push_str(line_break);
                start = n + 1;
                space = None;
            } else {
                space = Some(n);
            }
        } else if n - start >= width {
            if let Some(s) = space.take() {
                out.push_str(&line[byte_at(start)..byte_at(s)]);
                out.push_str(line_break);
                start = s + 1;
            }
        }
    }

    out.push_str(&line[byte_at(start)..]);
}

#[cfg(test)]
mod test {
    use super::{encode_body, encode_body_as, encode_word, wrap_text};
    use crate::header::ContentTransferEncoding::*;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    fn decode_word(word: &str) -> String {
        let payload = word
            .strip_prefix("=?UTF-8?B?")
            .and_then(|s| s.strip_suffix("?="))
            .unwrap();
        String::from_utf8(STANDARD.decode(payload).unwrap()).unwrap()
    }

    #[test]
    fn encode_word_empty() {
        assert_eq!(encode_word(""), "=?UTF-8?B??=");
    }

    #[test]
    fn encode_word_ascii() {
        assert_eq!(encode_word("Jane Doe"), "=?UTF-8?B?SmFuZSBEb2U=?=");
        assert_eq!(encode_word("(no subject)"), "=?UTF-8?B?KG5vIHN1YmplY3Qp?=");
    }

    #[test]
    fn encode_word_round_trip() {
        for text in &["Jane Doe", "Каи", "яңа ел белән!", "a?=b", "x\r\ny"] {
            assert_eq!(decode_word(&encode_word(text)), *text);
        }
    }

    #[test]
    fn identity_encodings() {
        let body = "Hello, мир!\nsecond = line";

        assert_eq!(encode_body(body, &SevenBit), body);
        assert_eq!(encode_body(body, &EightBit), body);
        assert_eq!(encode_body_as(body, "binary"), body);
        assert_eq!(encode_body_as(body, ""), body);
    }

    #[test]
    fn encode_body_as_known_token() {
        assert_eq!(encode_body_as("a=b", "quoted-printable"), "a=3Db");
        assert_eq!(encode_body_as("hi", "base64"), "aGk=\r\n");
    }

    #[test]
    fn base64_short() {
        assert_eq!(
            encode_body("Привет, мир!", &Base64),
            "0J/RgNC40LLQtdGCLCDQvNC40YAh\r\n"
        );
        assert_eq!(encode_body("", &Base64), "");
    }

    #[test]
    fn base64_long() {
        let body = "Ну прямо супер-длинный текст письма в уникоде, который уж точно ну никак не поместиться в 78 байт, как ни крути, я гарантирую это.";

        assert_eq!(
            encode_body(body, &Base64),
            concat!(
                "0J3RgyDQv9GA0Y/QvNC+INGB0YPQv9C10YAt0LTQu9C40L3QvdGL0Lkg0YLQtdC60YHRgiDQv9C4\r\n",
                "0YHRjNC80LAg0LIg0YPQvdC40LrQvtC00LUsINC60L7RgtC+0YDRi9C5INGD0LYg0YLQvtGH0L3Q\r\n",
                "viDQvdGDINC90LjQutCw0Log0L3QtSDQv9C+0LzQtdGB0YLQuNGC0YzRgdGPINCyIDc4INCx0LDQ\r\n",
                "udGCLCDQutCw0Log0L3QuCDQutGA0YPRgtC4LCDRjyDQs9Cw0YDQsNC90YLQuNGA0YPRjiDRjdGC\r\n",
                "0L4u\r\n"
            )
        );
    }

    #[test]
    fn base64_round_trip() {
        let long = "x".repeat(500);

        for body in &["", "hi", "Текст письма в уникоде подлиннее", long.as_str()] {
            let encoded = encode_body(body, &Base64);

            assert!(encoded.split("\r\n").all(|line| line.len() <= 76));

            let joined: String = encoded.split("\r\n").collect();
            assert_eq!(STANDARD.decode(joined).unwrap(), body.as_bytes());
        }
    }

    #[test]
    fn quoted_printable_ascii_is_identity() {
        assert_eq!(encode_body("hi", &QuotedPrintable), "hi");
        assert_eq!(
            encode_body("Hello, world!", &QuotedPrintable),
            "Hello, world!"
        );
    }

    #[test]
    fn quoted_printable_escapes() {
        assert_eq!(encode_body("a=b", &QuotedPrintable), "a=3Db");
        assert_eq!(
            encode_body("Привет, мир!", &QuotedPrintable),
            "=D0=9F=D1=80=D0=B8=D0=B2=D0=B5=D1=82, =D0=BC=D0=B8=D1=80!"
        );
    }

    #[test]
    fn quoted_printable_normalizes_line_breaks() {
        assert_eq!(
            encode_body("line one\nline two\rline three\r\nend", &QuotedPrintable),
            "line one\r\nline two\r\nline three\r\nend"
        );
    }

    #[test]
    fn quoted_printable_soft_breaks() {
        let body = "abcdefghij".repeat(20);
        let encoded = encode_body(&body, &QuotedPrintable);

        assert!(encoded.contains("=\r\n"));
        assert!(encoded.split("\r\n").all(|line| line.len() <= 76));
        assert_eq!(encoded.replace("=\r\n", ""), body);
    }

    #[test]
    fn wrap_short_text_unchanged() {
        assert_eq!(wrap_text("hi", 75, "\r\n"), "hi");
        assert_eq!(wrap_text("", 75, "\r\n"), "");
    }

    #[test]
    fn wrap_at_last_space() {
        assert_eq!(
            wrap_text("The quick brown fox sat over the lazy dog", 15, "\n"),
            "The quick brown\nfox sat over\nthe lazy dog"
        );
    }

    #[test]
    fn wrap_long_run_of_words() {
        let text = "word ".repeat(30);
        let wrapped = wrap_text(text.trim_end(), 75, "\r\n");

        assert!(wrapped.contains("\r\n"));
        assert!(wrapped.split("\r\n").all(|line| line.chars().count() <= 75));
        assert_eq!(wrapped.replace("\r\n", " "), text.trim_end());
    }

    #[test]
    fn wrap_keeps_long_word() {
        let long = "x".repeat(80);
        let text = format!("short {} tail", long);

        assert_eq!(
            wrap_text(&text, 10, "\r\n"),
            format!("short\r\n{}\r\ntail", long)
        );
    }

    #[test]
    fn wrap_keeps_existing_line_endings() {
        assert_eq!(
            wrap_text("one two three\r\nfour five\nsix", 8, "\r\n"),
            "one two\r\nthree\r\nfour\r\nfive\nsix"
        );
    }

    #[test]
    fn wrap_counts_characters() {
        let text = "привет мир привет";

        assert_eq!(wrap_text(text, 10, "\r\n"), "привет мир\r\nпривет");
    }
}
