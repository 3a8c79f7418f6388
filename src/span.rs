use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Inline text spans with formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
    Image { alt: String, url: String },
}

/// The kind of a [`Span`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Text,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl Span {
    /// Build a span from a kind tag and an optional url.
    ///
    /// The url must be given for links and images and must be absent for
    /// every other kind.
    pub fn new(
        kind: SpanKind,
        text: impl Into<String>,
        url: Option<String>,
    ) -> Result<Span, Error> {
        let text = text.into();
        match (kind, url) {
            (SpanKind::Link, Some(url)) => Ok(Span::Link { text, url }),
            (SpanKind::Image, Some(url)) => Ok(Span::Image { alt: text, url }),
            (SpanKind::Link | SpanKind::Image, None) => {
                Err(Error::InvalidSpan("links and images require a url"))
            }
            (_, Some(_)) => Err(Error::InvalidSpan("only links and images carry a url")),
            (SpanKind::Text, None) => Ok(Span::Text(text)),
            (SpanKind::Bold, None) => Ok(Span::Bold(text)),
            (SpanKind::Italic, None) => Ok(Span::Italic(text)),
            (SpanKind::Code, None) => Ok(Span::Code(text)),
        }
    }

    pub fn kind(&self) -> SpanKind {
        match self {
            Span::Text(_) => SpanKind::Text,
            Span::Bold(_) => SpanKind::Bold,
            Span::Italic(_) => SpanKind::Italic,
            Span::Code(_) => SpanKind::Code,
            Span::Link { .. } => SpanKind::Link,
            Span::Image { .. } => SpanKind::Image,
        }
    }

    /// Visible text of the span; the alt text for images.
    pub fn text(&self) -> &str {
        match self {
            Span::Text(text) | Span::Bold(text) | Span::Italic(text) | Span::Code(text) => text,
            Span::Link { text, .. } => text,
            Span::Image { alt, .. } => alt,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Span::Link { url, .. } | Span::Image { url, .. } => Some(url),
            _ => None,
        }
    }
}

impl FromStr for SpanKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "text" => Ok(SpanKind::Text),
            "bold" => Ok(SpanKind::Bold),
            "italic" => Ok(SpanKind::Italic),
            "code" => Ok(SpanKind::Code),
            "link" => Ok(SpanKind::Link),
            "image" => Ok(SpanKind::Image),
            _ => Err(Error::UnsupportedKind(name.to_string())),
        }
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpanKind::Text => "text",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
        };
        f.write_str(name)
    }
}
