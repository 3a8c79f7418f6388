use std::sync::LazyLock;

use regex::Regex;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6} ").expect("valid heading regex"));

static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A```[^\s`]*\n(.*\n)?```\z").expect("valid code regex"));

static UNORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-+*] ").expect("valid unordered item regex"));

static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[1-9][0-9]*\. ").expect("valid ordered item regex"));

/// Structural kind of a block, derived from its text alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Strip YAML frontmatter from the beginning of markdown content
pub fn strip_frontmatter(markdown: &str) -> &str {
    if !markdown.starts_with("---") {
        return markdown;
    }
    // Find the closing ---
    if let Some(end) = markdown[3..].find("\n---") {
        let after_frontmatter = &markdown[3 + end + 4..];
        after_frontmatter.trim_start_matches('\n')
    } else {
        markdown
    }
}

/// Split a document into trimmed, non-empty blocks separated by blank lines.
pub fn segment_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a block. The first matching rule wins; anything else is a paragraph.
pub fn classify_block(block: &str) -> BlockType {
    if HEADING_RE.is_match(block) {
        return BlockType::Heading;
    }
    if CODE_RE.is_match(block) {
        return BlockType::Code;
    }
    if block.lines().all(|line| line.starts_with('>')) {
        return BlockType::Quote;
    }
    if block.lines().all(|line| UNORDERED_ITEM_RE.is_match(line)) {
        return BlockType::UnorderedList;
    }
    if block.lines().all(|line| ORDERED_ITEM_RE.is_match(line)) {
        return BlockType::OrderedList;
    }
    BlockType::Paragraph
}
