//! Typed page-spec document
//!
//! These are the values produced by [`validate`](super::validate). They also
//! derive serde so a validated document can be shipped to the client as-is.

use serde::{Deserialize, Serialize};

/// Closed string enumeration accepted by the schema.
pub trait SchemaEnum: Sized + Copy {
    /// Every accepted tag, in declaration order.
    const TAGS: &'static [&'static str];

    fn from_tag(tag: &str) -> Option<Self>;

    fn as_str(&self) -> &'static str;
}

macro_rules! schema_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $tag:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $tag)] $variant,)+
        }

        impl SchemaEnum for $name {
            const TAGS: &'static [&'static str] = &[$($tag),+];

            fn from_tag(tag: &str) -> Option<Self> {
                match tag {
                    $($tag => Some(Self::$variant),)+
                    _ => None,
                }
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $tag,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

schema_enum! {
    /// Discriminator of a section entry
    pub enum SectionKind {
        Hero => "hero",
        Features => "features",
        Pricing => "pricing",
        Testimonials => "testimonials",
        Faq => "faq",
        Footer => "footer",
        Header => "header",
        CtaBand => "cta-band",
        Gallery => "gallery",
    }
}

schema_enum! {
    pub enum MediaType {
        Image => "image",
        Video => "video",
        Lottie => "lottie",
    }
}

schema_enum! {
    /// Entrance animation style
    #[derive(Default)]
    pub enum Entrance {
        #[default]
        Fade => "fade",
        Slide => "slide",
        Scale => "scale",
        Bounce => "bounce",
        None => "none",
    }
}

schema_enum! {
    #[derive(Default)]
    pub enum FeaturesLayout {
        #[default]
        Grid => "grid",
        List => "list",
        Carousel => "carousel",
    }
}

schema_enum! {
    /// Which price columns a pricing section offers
    #[derive(Default)]
    pub enum BillingMode {
        Monthly => "monthly",
        Yearly => "yearly",
        #[default]
        Both => "both",
    }
}

schema_enum! {
    #[derive(Default)]
    pub enum TestimonialsLayout {
        #[default]
        Grid => "grid",
        Carousel => "carousel",
        List => "list",
    }
}

schema_enum! {
    #[derive(Default)]
    pub enum FaqLayout {
        #[default]
        Accordion => "accordion",
        Grid => "grid",
    }
}

schema_enum! {
    pub enum SocialPlatform {
        Twitter => "twitter",
        Github => "github",
        Linkedin => "linkedin",
        Facebook => "facebook",
        Instagram => "instagram",
        Youtube => "youtube",
    }
}

impl SocialPlatform {
    pub fn display_name(&self) -> &'static str {
        match self {
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::Github => "GitHub",
            SocialPlatform::Linkedin => "LinkedIn",
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::Youtube => "YouTube",
        }
    }
}

schema_enum! {
    #[derive(Default)]
    pub enum CtaVariant {
        #[default]
        Primary => "primary",
        Secondary => "secondary",
        Outline => "outline",
    }
}

/// Validated page document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSpec {
    pub meta: PageMeta,
    pub sections: Vec<SectionSpec>,
}

/// Page-level metadata written into the document head
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
}

/// One entry of `sections`, tagged by its `type` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SectionSpec {
    Hero(HeroSection),
    Features(FeaturesSection),
    Pricing(PricingSection),
    Testimonials(TestimonialsSection),
    Faq(FaqSection),
    Footer(FooterSection),
    Header(HeaderSection),
    CtaBand(CtaBandSection),
    Gallery(GallerySection),
}

impl SectionSpec {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionSpec::Hero(_) => SectionKind::Hero,
            SectionSpec::Features(_) => SectionKind::Features,
            SectionSpec::Pricing(_) => SectionKind::Pricing,
            SectionSpec::Testimonials(_) => SectionKind::Testimonials,
            SectionSpec::Faq(_) => SectionKind::Faq,
            SectionSpec::Footer(_) => SectionKind::Footer,
            SectionSpec::Header(_) => SectionKind::Header,
            SectionSpec::CtaBand(_) => SectionKind::CtaBand,
            SectionSpec::Gallery(_) => SectionKind::Gallery,
        }
    }

    /// Author-supplied anchor id, if any
    pub fn id(&self) -> Option<&str> {
        match self {
            SectionSpec::Hero(s) => s.id.as_deref(),
            SectionSpec::Features(s) => s.id.as_deref(),
            SectionSpec::Pricing(s) => s.id.as_deref(),
            SectionSpec::Testimonials(s) => s.id.as_deref(),
            SectionSpec::Faq(s) => s.id.as_deref(),
            SectionSpec::Footer(s) => s.id.as_deref(),
            SectionSpec::Header(s) => s.id.as_deref(),
            SectionSpec::CtaBand(s) => s.id.as_deref(),
            SectionSpec::Gallery(s) => s.id.as_deref(),
        }
    }

    /// Theme overrides carried by this section (only heroes carry them today)
    pub fn theme_overrides(&self) -> Option<&ThemeOverrides> {
        match self {
            SectionSpec::Hero(s) => s.theme.as_ref(),
            _ => None,
        }
    }
}

/// Link-style call to action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub text: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// Scroll speed factor, within `[0, 2]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallax_speed: Option<f64>,
    #[serde(default)]
    pub autoplay: bool,
    #[serde(default, rename = "loop")]
    pub loop_playback: bool,
    #[serde(default = "default_true")]
    pub muted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

/// Color token overrides, each a CSS color string
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Motion {
    #[serde(default)]
    pub entrance: Entrance,
    #[serde(default = "default_true")]
    pub respect_reduced_motion: bool,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            entrance: Entrance::Fade,
            respect_reduced_motion: true,
        }
    }
}

// ============================================================================
// Hero
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub headline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    pub cta: HeroActions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    #[serde(default)]
    pub aria_labels: HeroAriaLabels,
    #[serde(default)]
    pub motion: Motion,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeOverrides>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroActions {
    pub primary: Action,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Action>,
}

/// Per-element accessible label overrides
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroAriaLabels {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_cta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_cta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
}

// ============================================================================
// Features
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub headline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    #[serde(default)]
    pub layout: FeaturesLayout,
    pub items: Vec<FeatureItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
}

// ============================================================================
// Pricing
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub headline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    #[serde(default)]
    pub billing: BillingMode,
    pub plans: Vec<PricingPlan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub monthly_price: f64,
    pub yearly_price: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub highlight: bool,
    pub cta: Action,
}

// ============================================================================
// Testimonials
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialsSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub headline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    #[serde(default)]
    pub layout: TestimonialsLayout,
    pub items: Vec<Testimonial>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<Autoplay>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Star rating, within `[1, 5]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Autoplay {
    /// Milliseconds between slides
    pub interval: u32,
    #[serde(default = "default_true")]
    pub pause_on_focus: bool,
}

// ============================================================================
// FAQ
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub headline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    #[serde(default)]
    pub layout: FaqLayout,
    pub items: Vec<FaqItem>,
    #[serde(default)]
    pub allow_multiple_open: bool,
    #[serde(default)]
    pub structured_data: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

// ============================================================================
// Footer
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
    pub copyright: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub link_groups: Vec<LinkGroup>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub social: Vec<SocialLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub newsletter: Option<Newsletter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Logo {
    pub src: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkGroup {
    pub title: String,
    pub links: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Newsletter {
    pub headline: String,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_submit_label")]
    pub submit_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

// ============================================================================
// Extended sections: header, CTA band, gallery
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<Brand>,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<Action>,
    #[serde(default)]
    pub sticky: bool,
    #[serde(default)]
    pub transparent_until_scroll: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default = "default_brand_href")]
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaBandSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub heading: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcopy: Option<String>,
    pub cta: StyledAction,
}

/// Call to action with a visual variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyledAction {
    #[serde(flatten)]
    pub action: Action,
    #[serde(default)]
    pub variant: CtaVariant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GallerySection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    pub images: Vec<GalleryImage>,
    #[serde(default = "default_gallery_columns")]
    pub columns: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

// ============================================================================
// Defaults shared between serde and the validator
// ============================================================================

pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_NEWSLETTER_PLACEHOLDER: &str = "you@example.com";
pub const DEFAULT_NEWSLETTER_SUBMIT: &str = "Subscribe";
pub const DEFAULT_BRAND_HREF: &str = "/";
pub const DEFAULT_GALLERY_COLUMNS: u8 = 3;

fn default_true() -> bool {
    true
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_placeholder() -> String {
    DEFAULT_NEWSLETTER_PLACEHOLDER.to_string()
}

fn default_submit_label() -> String {
    DEFAULT_NEWSLETTER_SUBMIT.to_string()
}

fn default_brand_href() -> String {
    DEFAULT_BRAND_HREF.to_string()
}

fn default_gallery_columns() -> u8 {
    DEFAULT_GALLERY_COLUMNS
}
