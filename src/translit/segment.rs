use serde::Serialize;

/// How a span's text is treated downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    /// `{...}` contents, copied to the output verbatim.
    Literal,
    /// Ordinary text, handed to the word resolver.
    Transliterable,
}

/// One slice of the input. Concatenating all span texts in order (after
/// transforming the transliterable ones) produces the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub kind: SpanKind,
    pub text: String,
}

impl Span {
    fn literal(text: &str) -> Self {
        Self {
            kind: SpanKind::Literal,
            text: text.to_string(),
        }
    }

    fn transliterable(text: &str) -> Self {
        Self {
            kind: SpanKind::Transliterable,
            text: text.to_string(),
        }
    }
}

/// Split raw input into alternating literal and transliterable spans.
///
/// `{...}` becomes a literal span with the braces stripped; the first `}`
/// always closes (no nesting). A `{` with no closing brace is not an error:
/// it and everything after it are ordinary transliterable text. All
/// delimiters are ASCII, so span boundaries never split a code point.
pub fn segment(input: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut i = 0;

    while i < input.len() {
        if input.as_bytes()[i] == b'{' {
            if let Some(off) = input[i + 1..].find('}') {
                spans.push(Span::literal(&input[i + 1..i + 1 + off]));
                i = i + 1 + off + 1;
                continue;
            }
            // Unterminated brace: the rest, brace included, is plain text.
            spans.push(Span::transliterable(&input[i..]));
            break;
        }

        let end = input[i..]
            .find('{')
            .map(|off| i + off)
            .unwrap_or(input.len());
        spans.push(Span::transliterable(&input[i..end]));
        i = end;
    }

    spans
}
