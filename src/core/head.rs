//! Document head metadata derived from `meta`

use serde::Serialize;

use crate::core::render::{RenderedNode, el};
use crate::core::spec::PageMeta;

/// Everything a page writes into `<head>`. Optional entries stay `None`
/// and produce no tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Option<String>,
    pub author: Option<String>,
    pub canonical: Option<String>,
    pub og_image: Option<String>,
}

impl HeadMetadata {
    pub fn from_meta(meta: &PageMeta) -> Self {
        let keywords = meta
            .keywords
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            title: meta.title.clone(),
            description: meta.description.clone(),
            keywords: (!keywords.is_empty()).then_some(keywords),
            author: meta.author.clone(),
            canonical: meta.canonical.clone(),
            og_image: meta.og_image.clone(),
        }
    }

    /// Head tags for a standalone HTML document
    pub fn to_nodes(&self) -> Vec<RenderedNode> {
        let meta_name = |name: &'static str, content: &str| -> RenderedNode {
            el("meta").attr("name", name).attr("content", content).into()
        };
        let meta_property = |property: &'static str, content: &str| -> RenderedNode {
            el("meta").attr("property", property).attr("content", content).into()
        };

        let mut nodes = vec![
            el("title").text(self.title.clone()).into(),
            meta_name("description", &self.description),
        ];
        if let Some(keywords) = &self.keywords {
            nodes.push(meta_name("keywords", keywords));
        }
        if let Some(author) = &self.author {
            nodes.push(meta_name("author", author));
        }
        if let Some(canonical) = &self.canonical {
            nodes.push(el("link").attr("rel", "canonical").attr("href", canonical.clone()).into());
        }
        nodes.push(meta_property("og:title", &self.title));
        nodes.push(meta_property("og:description", &self.description));
        if let Some(image) = &self.og_image {
            nodes.push(meta_property("og:image", image));
        }
        nodes
    }
}
