use serde::Serialize;
use utoipa::ToSchema;

use super::inline::{parse_inline, Span};

pub(super) const FENCE: &str = "```";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading { level: u8, spans: Vec<Span> },
    Paragraph { spans: Vec<Span> },
    UnorderedList { items: Vec<Vec<Span>> },
    OrderedList { items: Vec<Vec<Span>> },
    Blockquote { spans: Vec<Span> },
    Rule,
    Code { language: String, code: String },
}

/// A fenced region including both fences. The first line minus the fence is
/// the language label; the lines strictly between first and last are the code.
pub(super) fn code_block(region: &str) -> Block {
    let lines: Vec<&str> = region.split('\n').collect();

    let first = lines[0].strip_prefix(FENCE).unwrap_or(lines[0]);
    let first = if lines.len() == 1 {
        first.strip_suffix(FENCE).unwrap_or(first)
    } else {
        first
    };

    let code = if lines.len() > 2 {
        lines[1..lines.len() - 1].join("\n")
    } else {
        String::new()
    };

    Block::Code {
        language: first.trim().to_string(),
        code,
    }
}

const HEADINGS: [(&str, u8); 4] = [("# ", 1), ("## ", 2), ("### ", 3), ("#### ", 4)];

fn strip_bullet(line: &str) -> Option<&str> {
    line.strip_prefix("- ").or_else(|| line.strip_prefix("* "))
}

fn strip_ordinal(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix(". ")
}

fn is_rule(line: &str) -> bool {
    line.len() >= 3 && line.bytes().all(|b| matches!(b, b'-' | b'*' | b'_'))
}

#[derive(Default)]
struct ProseBuilder {
    blocks: Vec<Block>,
    paragraph: Vec<String>,
    list: Vec<Vec<Span>>,
}

impl ProseBuilder {
    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = self.paragraph.join(" ");
        let text = text.trim();
        if !text.is_empty() {
            self.blocks.push(Block::Paragraph {
                spans: parse_inline(text),
            });
        }
        self.paragraph.clear();
    }

    fn flush_list(&mut self) {
        if !self.list.is_empty() {
            let items = std::mem::take(&mut self.list);
            self.blocks.push(Block::UnorderedList { items });
        }
    }

    fn flush(&mut self) {
        self.flush_list();
        self.flush_paragraph();
    }

    fn push_block(&mut self, block: Block) {
        self.flush();
        self.blocks.push(block);
    }
}

/// Classify prose lines into blocks, appending to `out`.
pub(super) fn render_prose(text: &str, out: &mut Vec<Block>) {
    let mut builder = ProseBuilder::default();
    let mut lines = text.split('\n').map(str::trim).peekable();

    while let Some(line) = lines.next() {
        if line.is_empty() {
            builder.flush();
            continue;
        }

        if let Some((prefix, level)) = HEADINGS.iter().find(|(p, _)| line.starts_with(p)) {
            builder.push_block(Block::Heading {
                level: *level,
                spans: parse_inline(&line[prefix.len()..]),
            });
            continue;
        }

        if let Some(item) = strip_bullet(line) {
            if builder.list.is_empty() {
                builder.flush_paragraph();
            }
            builder.list.push(parse_inline(item));
            continue;
        }

        if let Some(item) = strip_ordinal(line) {
            let mut items = vec![parse_inline(item)];
            while let Some(next) = lines.peek().copied().and_then(strip_ordinal) {
                items.push(parse_inline(next));
                lines.next();
            }
            builder.push_block(Block::OrderedList { items });
            continue;
        }

        if let Some(quote) = line.strip_prefix("> ") {
            builder.push_block(Block::Blockquote {
                spans: parse_inline(quote),
            });
            continue;
        }

        if is_rule(line) {
            builder.push_block(Block::Rule);
            continue;
        }

        builder.flush_list();
        builder.paragraph.push(line.to_string());
    }

    builder.flush();
    out.append(&mut builder.blocks);
}
