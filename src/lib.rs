mod block;
mod config;
mod convert;
mod document;
mod error;
mod html;
mod inline;
mod site;
mod span;
mod template;

pub use block::{BlockType, classify_block, segment_blocks, strip_frontmatter};
pub use config::{Config, SiteConfig, TemplateConfig};
pub use convert::{span_to_html_node, spans_to_html_nodes};
pub use document::{extract_title, markdown_to_html, markdown_to_html_node};
pub use error::{ConfigError, Error, SiteError};
pub use html::{Attributes, HtmlNode, LeafNode, ParentNode};
pub use inline::{
    extract_images, extract_links, split_delimiter, split_images, split_inline, split_links,
};
pub use site::{collect_markdown_files, generate_page, generate_site, render_page};
pub use span::{Span, SpanKind};
pub use template::Template;
