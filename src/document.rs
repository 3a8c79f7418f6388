use log::debug;

use crate::block::{BlockType, classify_block, segment_blocks, strip_frontmatter};
use crate::convert::spans_to_html_nodes;
use crate::error::Error;
use crate::html::{HtmlNode, LeafNode, ParentNode};
use crate::inline::split_inline;

/// Build the HTML tree for a whole document: one child of a `div` per block.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, Error> {
    let blocks = segment_blocks(strip_frontmatter(markdown));
    debug!("segmented document into {} blocks", blocks.len());

    let children = blocks
        .into_iter()
        .map(block_to_html_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParentNode::new("div", children).into())
}

/// Convert a document to an HTML fragment. A document without blocks is empty.
pub fn markdown_to_html(markdown: &str) -> Result<String, Error> {
    match markdown_to_html_node(markdown)? {
        HtmlNode::Parent(div) if div.children.is_empty() => Ok(String::new()),
        node => node.render(),
    }
}

/// Text of the first level-1 heading, if any.
pub fn extract_title(markdown: &str) -> Option<String> {
    segment_blocks(strip_frontmatter(markdown))
        .into_iter()
        .filter(|block| classify_block(block) == BlockType::Heading)
        .find_map(|block| block.strip_prefix("# "))
        .map(|title| title.trim().to_string())
}

fn block_to_html_node(block: &str) -> Result<HtmlNode, Error> {
    let block_type = classify_block(block);
    debug!("{block_type:?} block: {:?}", block.lines().next().unwrap_or_default());

    let node = match block_type {
        BlockType::Heading => heading_to_html_node(block)?,
        BlockType::Code => code_to_html_node(block),
        BlockType::Quote => {
            let lines: Vec<&str> = block
                .lines()
                .map(|line| line.strip_prefix('>').unwrap_or(line).trim_start())
                .collect();
            ParentNode::new("blockquote", text_to_children(&lines.join(" "))?)
        }
        BlockType::UnorderedList => {
            let items = block
                .lines()
                .map(|line| list_item(unordered_item_text(line)))
                .collect::<Result<Vec<_>, _>>()?;
            ParentNode::new("ul", items)
        }
        BlockType::OrderedList => {
            let items = block
                .lines()
                .map(|line| list_item(ordered_item_text(line)))
                .collect::<Result<Vec<_>, _>>()?;
            ParentNode::new("ol", items)
        }
        BlockType::Paragraph => {
            let lines: Vec<&str> = block.lines().map(str::trim).collect();
            ParentNode::new("p", text_to_children(&lines.join(" "))?)
        }
    };
    Ok(node.into())
}

fn heading_to_html_node(block: &str) -> Result<ParentNode, Error> {
    let level = block.chars().take_while(|&c| c == '#').count();
    let text = block[level..].strip_prefix(' ').unwrap_or(&block[level..]);
    let tag = format!("h{level}");
    Ok(ParentNode::new(&tag, text_to_children(text)?))
}

fn code_to_html_node(block: &str) -> ParentNode {
    // Drop the opening fence line (with its language tag) and the closing fence.
    let body = block.split_once('\n').map_or("", |(_, rest)| rest);
    let body = body.strip_suffix("```").unwrap_or(body);
    let code = LeafNode::new(Some("code"), body);
    ParentNode::new("pre", vec![code.into()])
}

fn list_item(text: &str) -> Result<HtmlNode, Error> {
    Ok(ParentNode::new("li", text_to_children(text)?).into())
}

fn unordered_item_text(line: &str) -> &str {
    let line = line.trim_start();
    line.get(2..).unwrap_or_default()
}

fn ordered_item_text(line: &str) -> &str {
    let line = line.trim_start();
    line.split_once(". ").map_or(line, |(_, rest)| rest)
}

fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, Error> {
    let children = spans_to_html_nodes(&split_inline(text)?);
    if children.is_empty() {
        return Ok(vec![LeafNode::text("").into()]);
    }
    Ok(children)
}
