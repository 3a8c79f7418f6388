use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;
use crate::span::{Span, SpanKind};

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("valid image regex"));

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("valid link regex"));

/// A `[label](url)` or `![label](url)` occurrence inside a text span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Embed<'a> {
    start: usize,
    end: usize,
    label: &'a str,
    url: &'a str,
}

/// Parse the inline markup of one block's text into spans.
///
/// Images are carved out first, then links, then code, italic and bold
/// delimiters. Later passes only look at plain text, so markers inside an
/// extracted code span stay literal.
pub fn split_inline(text: &str) -> Result<Vec<Span>, Error> {
    let spans = vec![Span::Text(text.to_string())];
    let spans = split_images(spans);
    let spans = split_links(spans);
    let spans = split_delimiter(spans, "`", SpanKind::Code)?;
    let spans = split_delimiter(spans, "_", SpanKind::Italic)?;
    split_delimiter(spans, "**", SpanKind::Bold)
}

/// Replace every `![alt](url)` in plain-text spans with an image span.
pub fn split_images(spans: Vec<Span>) -> Vec<Span> {
    carve(spans, find_images, |alt, url| Span::Image {
        alt: alt.to_string(),
        url: url.to_string(),
    })
}

/// Replace every `[text](url)` in plain-text spans with a link span.
/// Occurrences preceded by `!` are image syntax and left alone.
pub fn split_links(spans: Vec<Span>) -> Vec<Span> {
    carve(spans, find_links, |text, url| Span::Link {
        text: text.to_string(),
        url: url.to_string(),
    })
}

/// Split plain-text spans on `delimiter`, turning every second segment
/// into a span of `kind`. Empty segments are dropped.
pub fn split_delimiter(
    spans: Vec<Span>,
    delimiter: &'static str,
    kind: SpanKind,
) -> Result<Vec<Span>, Error> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let text = match span {
            Span::Text(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };
        if text.matches(delimiter).count() % 2 != 0 {
            return Err(Error::MalformedMarkup { delimiter, text });
        }
        for (idx, part) in text.split(delimiter).enumerate() {
            if part.is_empty() {
                continue;
            }
            let part_kind = if idx % 2 == 1 { kind } else { SpanKind::Text };
            out.push(Span::new(part_kind, part, None)?);
        }
    }
    Ok(out)
}

/// `(alt, url)` pairs of every image in `text`, leftmost first.
pub fn extract_images(text: &str) -> Vec<(&str, &str)> {
    find_images(text).into_iter().map(|e| (e.label, e.url)).collect()
}

/// `(text, url)` pairs of every link in `text`, leftmost first.
pub fn extract_links(text: &str) -> Vec<(&str, &str)> {
    find_links(text).into_iter().map(|e| (e.label, e.url)).collect()
}

fn carve(
    spans: Vec<Span>,
    find: fn(&str) -> Vec<Embed<'_>>,
    make: fn(&str, &str) -> Span,
) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let text = match span {
            Span::Text(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };
        let embeds = find(&text);
        if embeds.is_empty() {
            out.push(Span::Text(text));
            continue;
        }
        let mut rest = 0;
        for embed in embeds {
            if embed.start > rest {
                out.push(Span::Text(text[rest..embed.start].to_string()));
            }
            out.push(make(embed.label, embed.url));
            rest = embed.end;
        }
        if rest < text.len() {
            out.push(Span::Text(text[rest..].to_string()));
        }
    }
    out
}

fn find_images(text: &str) -> Vec<Embed<'_>> {
    IMAGE_RE.captures_iter(text).map(|caps| embed(&caps)).collect()
}

fn find_links(text: &str) -> Vec<Embed<'_>> {
    let mut embeds = Vec::new();
    let mut pos = 0;
    while let Some(caps) = LINK_RE.captures_at(text, pos) {
        let found = embed(&caps);
        if text[..found.start].ends_with('!') {
            // Retry just past the `[` so a later link can still match.
            pos = found.start + 1;
            continue;
        }
        pos = found.end;
        embeds.push(found);
    }
    embeds
}

fn embed<'a>(caps: &regex::Captures<'a>) -> Embed<'a> {
    let whole = caps.get(0).map_or(0..0, |m| m.range());
    Embed {
        start: whole.start,
        end: whole.end,
        label: caps.get(1).map_or("", |m| m.as_str()),
        url: caps.get(2).map_or("", |m| m.as_str()),
    }
}
