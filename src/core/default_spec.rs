//! Built-in page shown when no spec is supplied

use crate::core::loader::{LoadError, parse_and_validate};
use crate::core::spec::PageSpec;

/// Showcase document exercising every rendered section kind
pub const DEFAULT_SPEC_JSON: &str = r##"{
  "meta": {
    "title": "Pagewright | Landing pages from a JSON spec",
    "description": "Describe a landing page as JSON and get an accessible, responsive page back.",
    "keywords": ["landing page", "json", "page builder"],
    "author": "Pagewright"
  },
  "sections": [
    {
      "type": "header",
      "brand": { "label": "Pagewright" },
      "nav": [
        { "label": "Features", "href": "#features" },
        { "label": "Pricing", "href": "#pricing" },
        { "label": "FAQ", "href": "#faq" }
      ],
      "cta": { "text": "Try it", "href": "#get-started" },
      "sticky": true,
      "transparentUntilScroll": true
    },
    {
      "type": "hero",
      "id": "top",
      "headline": "Ship a landing page in one JSON file",
      "subheadline": "Write the content, pick the layouts and let Pagewright handle markup, accessibility and motion.",
      "cta": {
        "primary": { "text": "Get started", "href": "#get-started" },
        "secondary": { "text": "See pricing", "href": "#pricing" }
      },
      "motion": { "entrance": "fade", "respectReducedMotion": true },
      "theme": { "primary": "#4f46e5", "accent": "#f59e0b" }
    },
    {
      "type": "features",
      "id": "features",
      "headline": "Everything a launch page needs",
      "subheadline": "Eight section types that share one schema.",
      "layout": "grid",
      "items": [
        { "icon": "check", "title": "Validated input", "description": "Every field is checked and errors point at the exact path." },
        { "icon": "accessibility", "title": "Accessible by default", "description": "Labels, landmarks and keyboard support come built in." },
        { "icon": "motion", "title": "Motion that respects users", "description": "Animations switch off when reduced motion is requested." }
      ]
    },
    {
      "type": "pricing",
      "id": "pricing",
      "headline": "Simple pricing",
      "billing": "both",
      "plans": [
        {
          "name": "Hobby",
          "description": "For side projects",
          "monthlyPrice": 0,
          "yearlyPrice": 0,
          "features": ["1 page", "Community support"],
          "cta": { "text": "Start free", "href": "#get-started" }
        },
        {
          "name": "Team",
          "description": "For product teams",
          "monthlyPrice": 29,
          "yearlyPrice": 290,
          "features": ["Unlimited pages", "Remote specs", "Priority support"],
          "highlight": true,
          "cta": { "text": "Start trial", "href": "#get-started" }
        }
      ]
    },
    {
      "type": "testimonials",
      "headline": "Teams ship faster",
      "layout": "carousel",
      "autoplay": { "interval": 6000, "pauseOnFocus": true },
      "items": [
        { "quote": "We replaced three templates with one spec file.", "author": "Dana Ortiz", "role": "Product lead", "rating": 5 },
        { "quote": "Reviews are easier because the whole page is one diff.", "author": "Sam Lee", "role": "Engineer", "company": "Northwind" }
      ]
    },
    {
      "type": "faq",
      "id": "faq",
      "headline": "Questions",
      "structuredData": true,
      "items": [
        { "question": "How do I load my own spec?", "answer": "Pass URL-encoded JSON in the spec query parameter, or an https URL in the url parameter." },
        { "question": "What happens with unknown sections?", "answer": "Unknown section types are rejected by validation. Known types without a renderer are skipped." }
      ]
    },
    {
      "type": "cta-band",
      "id": "get-started",
      "heading": "Write your first spec",
      "subcopy": "Start from this page and change one section at a time.",
      "cta": { "text": "Open the preview", "href": "/preview", "variant": "primary" }
    },
    {
      "type": "footer",
      "copyright": "© 2026 Pagewright",
      "linkGroups": [
        { "title": "Product", "links": [{ "label": "Preview", "href": "/preview" }, { "label": "Pricing", "href": "#pricing" }] }
      ],
      "social": [{ "platform": "github", "href": "https://github.com" }],
      "newsletter": { "headline": "Release notes, monthly" }
    }
  ]
}"##;

/// Parse and validate the built-in document like any other input
pub fn default_spec() -> Result<PageSpec, LoadError> {
    parse_and_validate(DEFAULT_SPEC_JSON)
}
