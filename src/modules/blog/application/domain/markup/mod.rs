//! Lightweight markup used for blog post bodies, rendered to structured
//! blocks instead of HTML so clients choose their own presentation.

mod block;
mod inline;

pub use block::Block;
pub use inline::{parse_inline, Span};

use block::{code_block, render_prose, FENCE};

/// Render markup to blocks. Fenced code regions are cut out first and kept
/// verbatim; everything between them is prose. A fence with no closing fence
/// is left in the prose.
pub fn render(markup: &str) -> Vec<Block> {
    let normalized = markup.replace("\r\n", "\n");
    let mut blocks = Vec::new();
    let mut rest = normalized.as_str();

    while let Some(open) = rest.find(FENCE) {
        // An unclosed fence stays prose rather than becoming an empty code block.
        let Some(close) = rest[open + FENCE.len()..].find(FENCE) else {
            break;
        };
        let end = open + FENCE.len() + close + FENCE.len();

        render_prose(&rest[..open], &mut blocks);
        blocks.push(code_block(&rest[open..end]));
        rest = &rest[end..];
    }

    render_prose(rest, &mut blocks);
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_then_formatted_paragraph() {
        assert_eq!(
            render("## Title\n\nSome **bold** and *italic* text."),
            vec![
                Block::Heading {
                    level: 2,
                    spans: vec![Span::text("Title")]
                },
                Block::Paragraph {
                    spans: vec![
                        Span::text("Some "),
                        Span::bold("bold"),
                        Span::text(" and "),
                        Span::italic("italic"),
                        Span::text(" text."),
                    ]
                },
            ]
        );
    }

    #[test]
    fn crlf_is_normalized() {
        assert_eq!(render("a\r\nb"), render("a\nb"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let input = "# Post\n\nIntro with `code` and [a link](/x).\n\n- one\n- two\n\n```js\nconst a = 1;\n```\n> quote\n---";
        assert_eq!(render(input), render(input));
    }

    #[test]
    fn code_is_kept_verbatim_between_prose() {
        let blocks = render("Before\n```python\ndef f(**kw):\n    # not a heading\n    return _x_\n```\nAfter");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph {
                    spans: vec![Span::text("Before")]
                },
                Block::Code {
                    language: "python".to_string(),
                    code: "def f(**kw):\n    # not a heading\n    return _x_".to_string(),
                },
                Block::Paragraph {
                    spans: vec![Span::text("After")]
                },
            ]
        );
    }

    #[test]
    fn code_without_language() {
        assert_eq!(
            render("```\nplain\n```"),
            vec![Block::Code {
                language: String::new(),
                code: "plain".to_string(),
            }]
        );
    }

    #[test]
    fn unterminated_fence_is_prose() {
        assert_eq!(
            render("```rust\nlet x = 1;"),
            vec![Block::Paragraph {
                spans: vec![Span::text("```rust let x = 1;")]
            }]
        );
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert!(render("").is_empty());
        assert!(render("\n\n   \n").is_empty());
    }
}
