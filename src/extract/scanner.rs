//! Marker scanner for model responses using logos
//!
//! The scanner only recognizes the three markers that matter for locating SVG
//! documents in free text: code fences and the opening/closing root tags.
//! Everything else is skipped.

use logos::Logos;

/// Byte range in the response text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[^`<]+")]
pub enum Marker {
    #[token("```")]
    Fence,

    #[token("<svg", ignore(ascii_case))]
    SvgOpen,

    #[token("</svg>", ignore(ascii_case))]
    SvgClose,

    // Stray backticks and angle brackets that don't start a marker
    #[token("`", logos::skip)]
    #[token("<", logos::skip)]
    Stray,
}

/// Lex input into markers with spans
pub fn scan(input: &str) -> impl Iterator<Item = (Marker, Span)> + '_ {
    Marker::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}

/// A fenced code block found in the response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedBlock<'a> {
    /// Language tag written right after the opening fence (may be empty)
    pub tag: &'a str,
    /// Block body with surrounding whitespace trimmed
    pub body: &'a str,
    /// Span of the trimmed body
    pub span: Span,
}

impl FencedBlock<'_> {
    /// Untagged blocks and `svg` blocks may hold logo markup
    pub fn is_svg_tagged(&self) -> bool {
        self.tag.is_empty() || self.tag.eq_ignore_ascii_case("svg")
    }

    /// Whether the body mentions both root tag markers
    pub fn mentions_svg(&self) -> bool {
        self.body.contains("<svg") && self.body.contains("</svg>")
    }
}

/// Collect fenced blocks, pairing fences in source order.
///
/// An unmatched trailing fence is ignored.
pub fn fenced_blocks(input: &str) -> Vec<FencedBlock<'_>> {
    let fences: Vec<Span> = scan(input)
        .filter(|(marker, _)| *marker == Marker::Fence)
        .map(|(_, span)| span)
        .collect();

    fences
        .chunks_exact(2)
        .map(|pair| {
            let inner_start = pair[0].end;
            let inner = &input[inner_start..pair[1].start];

            let tag_len = inner
                .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '+')))
                .unwrap_or(inner.len());
            let tag = &inner[..tag_len];

            let rest = &inner[tag_len..];
            let body = rest.trim();
            let start = inner_start + tag_len + (rest.len() - rest.trim_start().len());

            FencedBlock {
                tag,
                body,
                span: start..start + body.len(),
            }
        })
        .collect()
}

/// Find `<svg ...> ... </svg>` spans directly in the text.
///
/// Matching is case-insensitive and non-greedy: a span runs from an opening
/// marker, past the end of its start tag, to the first closing marker after
/// it. Spans never overlap; nested documents are not balanced.
pub fn direct_spans(input: &str) -> Vec<Span> {
    let markers: Vec<(Marker, Span)> = scan(input).collect();
    let mut spans = Vec::new();
    let mut cursor = 0;

    for (marker, span) in &markers {
        if *marker != Marker::SvgOpen || span.start < cursor {
            continue;
        }

        let Some(gt) = input[span.end..].find('>') else {
            continue;
        };
        let tag_end = span.end + gt + 1;

        let close = markers
            .iter()
            .find(|(m, s)| *m == Marker::SvgClose && s.start >= tag_end);
        if let Some((_, close)) = close {
            spans.push(span.start..close.end);
            cursor = close.end;
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers(input: &str) -> Vec<Marker> {
        scan(input).map(|(m, _)| m).collect()
    }

    #[test]
    fn test_markers_only() {
        assert_eq!(
            markers("Here:\n```svg\n<svg width=\"1\"></svg>\n```"),
            vec![Marker::Fence, Marker::SvgOpen, Marker::SvgClose, Marker::Fence]
        );
    }

    #[test]
    fn test_markers_ignore_case() {
        assert_eq!(markers("<SVG></Svg>"), vec![Marker::SvgOpen, Marker::SvgClose]);
    }

    #[test]
    fn test_stray_characters_skipped() {
        assert_eq!(markers("a < b `code` <p> ``"), Vec::<Marker>::new());
    }

    #[test]
    fn test_marker_spans() {
        let spans: Vec<Span> = scan("ab<svg>").map(|(_, s)| s).collect();
        assert_eq!(spans, vec![2..6]);
    }

    #[test]
    fn test_fenced_block_tags() {
        let input = "```svg\n<svg/>\n```\n```\nplain\n```\n```xml\n<x/>\n```";
        let blocks = fenced_blocks(input);
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].tag, "svg");
        assert_eq!(blocks[0].body, "<svg/>");
        assert_eq!(blocks[1].tag, "");
        assert_eq!(blocks[1].body, "plain");
        assert_eq!(blocks[2].tag, "xml");
        assert!(!blocks[2].is_svg_tagged());
    }

    #[test]
    fn test_fenced_block_span_points_at_body() {
        let input = "text ```SVG  \n  <svg></svg>  \n```";
        let blocks = fenced_blocks(input);
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].is_svg_tagged());
        assert_eq!(&input[blocks[0].span.clone()], "<svg></svg>");
    }

    #[test]
    fn test_tag_stops_at_markup() {
        let blocks = fenced_blocks("```svg<svg></svg>```");
        assert_eq!(blocks[0].tag, "svg");
        assert_eq!(blocks[0].body, "<svg></svg>");
    }

    #[test]
    fn test_unmatched_fence_ignored() {
        let blocks = fenced_blocks("```\n<svg></svg>\n```\n```\ndangling");
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_direct_spans_non_greedy() {
        let input = "a <svg id=\"1\"><g/></svg> b <svg id=\"2\"></svg> c";
        let spans = direct_spans(input);
        assert_eq!(spans.len(), 2);
        assert_eq!(&input[spans[0].clone()], "<svg id=\"1\"><g/></svg>");
        assert_eq!(&input[spans[1].clone()], "<svg id=\"2\"></svg>");
    }

    #[test]
    fn test_direct_spans_nested_stop_at_first_close() {
        let input = "<svg><svg></svg></svg>";
        let spans = direct_spans(input);
        assert_eq!(spans, vec![0..16]);
    }

    #[test]
    fn test_direct_spans_unclosed() {
        assert!(direct_spans("<svg width=\"10\"><rect/>").is_empty());
    }
}
