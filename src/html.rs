use crate::error::Error;

/// HTML attributes in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, keeping the original position if the key already exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Serialize as ` key="value"` pairs. Values are substituted verbatim.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        for (key, value) in &self.0 {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (key, value) in iter {
            attributes.insert(key, value);
        }
        attributes
    }
}

/// A terminal element, or raw text when `tag` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: Option<String>,
    pub children: Vec<HtmlNode>,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl LeafNode {
    pub fn new(tag: Option<&str>, value: impl Into<String>) -> Self {
        LeafNode {
            tag: tag.map(str::to_string),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Untagged leaf rendered as its raw value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(None, value)
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }
}

impl ParentNode {
    pub fn new(tag: &str, children: Vec<HtmlNode>) -> Self {
        ParentNode {
            tag: Some(tag.to_string()),
            children,
            attributes: Attributes::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

impl HtmlNode {
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf(leaf) => &leaf.attributes,
            HtmlNode::Parent(parent) => &parent.attributes,
        }
    }

    /// Render the tree to HTML text.
    ///
    /// Fails on a leaf without a value, or a parent without a tag or
    /// without children. Nothing is returned for a partially valid tree.
    pub fn render(&self) -> Result<String, Error> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<(), Error> {
        match self {
            HtmlNode::Leaf(leaf) => {
                let value = leaf
                    .value
                    .as_deref()
                    .ok_or(Error::StructuralRender("leaf node must have a value"))?;
                match leaf.tag.as_deref() {
                    None => out.push_str(value),
                    Some(tag) => {
                        open_tag(tag, &leaf.attributes, out);
                        out.push_str(value);
                        close_tag(tag, out);
                    }
                }
            }
            HtmlNode::Parent(parent) => {
                let tag = parent
                    .tag
                    .as_deref()
                    .filter(|tag| !tag.is_empty())
                    .ok_or(Error::StructuralRender("parent node must have a tag"))?;
                if parent.children.is_empty() {
                    return Err(Error::StructuralRender("parent node must have children"));
                }
                // Parent attributes are stored but never rendered.
                out.push('<');
                out.push_str(tag);
                out.push('>');
                for child in &parent.children {
                    child.write_html(out)?;
                }
                close_tag(tag, out);
            }
        }
        Ok(())
    }
}

fn open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    attributes.write_html(out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
