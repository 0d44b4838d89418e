//! schema.org JSON-LD artifacts

use serde_json::{Value, json};

use crate::core::render::{RenderedNode, el};
use crate::core::spec::FaqItem;

/// `FAQPage` document built from the same items the accordion shows
pub fn faq_page(items: &[FaqItem]) -> Value {
    let questions = items
        .iter()
        .map(|item| {
            json!({
                "@type": "Question",
                "name": item.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": item.answer,
                },
            })
        })
        .collect::<Vec<_>>();

    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}

/// Serialize for embedding inside a `<script>` element
pub fn to_script_text(value: &Value) -> String {
    // serde_json output never contains raw `<`, except inside strings
    value.to_string().replace("</", "<\\/")
}

/// `<script type="application/ld+json">` node
pub fn json_ld_script(value: &Value) -> RenderedNode {
    el("script")
        .attr("type", "application/ld+json")
        .role("structured-data")
        .child(RenderedNode::Raw(to_script_text(value)))
        .into()
}
