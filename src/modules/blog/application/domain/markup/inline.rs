use serde::Serialize;
use utoipa::ToSchema;

/// A run of inline rich text. Spans never nest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Span {
    Text { text: String },
    Bold { text: String },
    Italic { text: String },
    Code { text: String },
    Link { text: String, url: String },
}

impl Span {
    pub fn text(text: impl Into<String>) -> Self {
        Span::Text { text: text.into() }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Span::Bold { text: text.into() }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Span::Italic { text: text.into() }
    }

    pub fn code(text: impl Into<String>) -> Self {
        Span::Code { text: text.into() }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Span::Link {
            text: text.into(),
            url: url.into(),
        }
    }
}

/// A located inline match: byte range in the scanned text plus the span it produces.
struct Found {
    start: usize,
    end: usize,
    span: Span,
}

type Matcher = fn(&str) -> Option<Found>;

// Tie-break order when two matchers start at the same offset.
const MATCHERS: [Matcher; 4] = [find_bold, find_italic, find_code, find_link];

/// Split text into spans: repeatedly take the earliest inline match in the
/// remaining text, emitting literal text before it.
pub fn parse_inline(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut remaining = text;

    while !remaining.is_empty() {
        let mut best: Option<Found> = None;
        for matcher in MATCHERS {
            if let Some(found) = matcher(remaining) {
                if best.as_ref().map_or(true, |b| found.start < b.start) {
                    best = Some(found);
                }
            }
        }

        let Some(found) = best else {
            spans.push(Span::text(remaining));
            break;
        };

        if found.start > 0 {
            spans.push(Span::text(&remaining[..found.start]));
        }
        spans.push(found.span);
        remaining = &remaining[found.end..];
    }

    spans
}

// All delimiters are ASCII, so byte offsets found here are always char boundaries.

fn find_double(bytes: &[u8], byte: u8, from: usize) -> Option<usize> {
    let tail = bytes.get(from..)?;
    tail.windows(2)
        .position(|w| w[0] == byte && w[1] == byte)
        .map(|i| i + from)
}

fn find_byte(bytes: &[u8], byte: u8, from: usize) -> Option<usize> {
    bytes
        .get(from..)?
        .iter()
        .position(|b| *b == byte)
        .map(|i| i + from)
}

/// `**x**`, shortest non-empty body.
fn find_bold(text: &str) -> Option<Found> {
    let bytes = text.as_bytes();
    let mut search = 0;
    while let Some(open) = find_double(bytes, b'*', search) {
        if let Some(close) = find_double(bytes, b'*', open + 3) {
            return Some(Found {
                start: open,
                end: close + 2,
                span: Span::bold(&text[open + 2..close]),
            });
        }
        search = open + 1;
    }
    None
}

/// `*x*` not touching another `*`, or `_x_`; leftmost of the two forms.
fn find_italic(text: &str) -> Option<Found> {
    let bytes = text.as_bytes();

    for (pos, &b) in bytes.iter().enumerate() {
        match b {
            b'*' => {
                if pos > 0 && bytes[pos - 1] == b'*' {
                    continue;
                }
                let Some(close) = find_byte(bytes, b'*', pos + 1) else {
                    continue;
                };
                if close == pos + 1 || bytes.get(close + 1) == Some(&b'*') {
                    continue;
                }
                return Some(Found {
                    start: pos,
                    end: close + 1,
                    span: Span::italic(&text[pos + 1..close]),
                });
            }
            b'_' => {
                let Some(close) = find_byte(bytes, b'_', pos + 1) else {
                    continue;
                };
                if close == pos + 1 {
                    continue;
                }
                return Some(Found {
                    start: pos,
                    end: close + 1,
                    span: Span::italic(&text[pos + 1..close]),
                });
            }
            _ => {}
        }
    }
    None
}

/// `` `x` `` with a non-empty body.
fn find_code(text: &str) -> Option<Found> {
    let bytes = text.as_bytes();
    let mut search = 0;
    while let Some(open) = find_byte(bytes, b'`', search) {
        match find_byte(bytes, b'`', open + 1) {
            Some(close) if close > open + 1 => {
                return Some(Found {
                    start: open,
                    end: close + 1,
                    span: Span::code(&text[open + 1..close]),
                });
            }
            Some(_) => search = open + 1,
            None => return None,
        }
    }
    None
}

/// `[text](url)`, both parts non-empty.
fn find_link(text: &str) -> Option<Found> {
    let bytes = text.as_bytes();
    let mut search = 0;
    while let Some(open) = find_byte(bytes, b'[', search) {
        search = open + 1;

        let Some(close_label) = find_byte(bytes, b']', open + 1) else {
            return None;
        };
        if close_label == open + 1 || bytes.get(close_label + 1) != Some(&b'(') {
            continue;
        }
        let Some(close_url) = find_byte(bytes, b')', close_label + 2) else {
            continue;
        };
        if close_url == close_label + 2 {
            continue;
        }

        return Some(Found {
            start: open,
            end: close_url + 1,
            span: Span::link(
                &text[open + 1..close_label],
                &text[close_label + 2..close_url],
            ),
        });
    }
    None
}
