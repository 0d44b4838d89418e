//! Page-spec validator
//!
//! Walks an untrusted `serde_json::Value` depth-first and builds the typed
//! [`PageSpec`]. Validation is fail-fast: the first violation is returned with
//! the path of the offending field. Unknown object keys are ignored.

use serde_json::{Map, Value};

use super::error::{FieldPath, ValidationError};
use super::types::*;

/// Inclusive bounds for `media.parallaxSpeed`
pub const PARALLAX_SPEED_RANGE: (f64, f64) = (0.0, 2.0);

/// Inclusive bounds for `testimonials.items[].rating`
pub const RATING_RANGE: (i64, i64) = (1, 5);

/// Inclusive bounds for `gallery.columns`
pub const GALLERY_COLUMNS_RANGE: (i64, i64) = (1, 6);

/// Validate a parsed JSON value as a page spec.
///
/// Pure: the same input always yields an equal result.
pub fn validate(raw: &Value) -> Result<PageSpec, ValidationError> {
    let root = Fields::from_value(raw, FieldPath::root())?;

    let meta = validate_meta(&root.required_object("meta")?)?;

    let sections = root
        .required_array("sections")?
        .into_iter()
        .map(|(path, value)| validate_section(&Fields::from_value(value, path)?))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PageSpec { meta, sections })
}

/// Validate a single section entry located at `path`.
pub fn validate_section_value(
    raw: &Value,
    path: FieldPath,
) -> Result<SectionSpec, ValidationError> {
    validate_section(&Fields::from_value(raw, path)?)
}

fn validate_meta(fields: &Fields<'_>) -> Result<PageMeta, ValidationError> {
    Ok(PageMeta {
        title: fields.required_str("title")?,
        description: fields.required_str("description")?,
        keywords: fields.optional_string_list("keywords")?.unwrap_or_default(),
        author: fields.optional_str("author")?,
        canonical: fields.optional_str("canonical")?,
        og_image: fields.optional_str("ogImage")?,
    })
}

fn validate_section(fields: &Fields<'_>) -> Result<SectionSpec, ValidationError> {
    let tag = fields.required_str("type")?;
    let Some(kind) = SectionKind::from_tag(&tag) else {
        return Err(ValidationError::unknown_section(
            fields.path_of("type"),
            &tag,
            SectionKind::TAGS,
        ));
    };
    let id = fields.optional_str("id")?;

    let section = match kind {
        SectionKind::Hero => SectionSpec::Hero(validate_hero(fields, id)?),
        SectionKind::Features => SectionSpec::Features(validate_features(fields, id)?),
        SectionKind::Pricing => SectionSpec::Pricing(validate_pricing(fields, id)?),
        SectionKind::Testimonials => {
            SectionSpec::Testimonials(validate_testimonials(fields, id)?)
        }
        SectionKind::Faq => SectionSpec::Faq(validate_faq(fields, id)?),
        SectionKind::Footer => SectionSpec::Footer(validate_footer(fields, id)?),
        SectionKind::Header => SectionSpec::Header(validate_header(fields, id)?),
        SectionKind::CtaBand => SectionSpec::CtaBand(validate_cta_band(fields, id)?),
        SectionKind::Gallery => SectionSpec::Gallery(validate_gallery(fields, id)?),
    };
    Ok(section)
}

// ============================================================================
// Shared shapes
// ============================================================================

fn validate_action(fields: &Fields<'_>) -> Result<Action, ValidationError> {
    Ok(Action {
        text: fields.required_str("text")?,
        href: fields.required_str("href")?,
        aria_label: fields.optional_str("ariaLabel")?,
    })
}

fn validate_media(fields: &Fields<'_>) -> Result<Media, ValidationError> {
    let media_type = fields.required_enum::<MediaType>("type")?;
    let src = fields.required_str("src")?;
    let alt = fields.optional_str("alt")?;

    let parallax_speed = fields.optional_number("parallaxSpeed")?;
    if let Some(speed) = parallax_speed {
        let (min, max) = PARALLAX_SPEED_RANGE;
        if !(min..=max).contains(&speed) {
            return Err(ValidationError::out_of_range(
                fields.path_of("parallaxSpeed"),
                format!("must be between {min} and {max}, got {speed}"),
            ));
        }
    }

    Ok(Media {
        media_type,
        src,
        alt,
        parallax_speed,
        autoplay: fields.optional_bool("autoplay")?.unwrap_or(false),
        loop_playback: fields.optional_bool("loop")?.unwrap_or(false),
        muted: fields.optional_bool("muted")?.unwrap_or(true),
        poster: fields.optional_str("poster")?,
    })
}

fn validate_theme(fields: &Fields<'_>) -> Result<ThemeOverrides, ValidationError> {
    Ok(ThemeOverrides {
        primary: fields.optional_str("primary")?,
        secondary: fields.optional_str("secondary")?,
        accent: fields.optional_str("accent")?,
        background: fields.optional_str("background")?,
        foreground: fields.optional_str("foreground")?,
        muted: fields.optional_str("muted")?,
    })
}

fn validate_motion(fields: &Fields<'_>) -> Result<Motion, ValidationError> {
    Ok(Motion {
        entrance: fields.optional_enum("entrance")?.unwrap_or_default(),
        respect_reduced_motion: fields.optional_bool("respectReducedMotion")?.unwrap_or(true),
    })
}

fn validate_nav_link(fields: &Fields<'_>) -> Result<NavLink, ValidationError> {
    Ok(NavLink {
        label: fields.required_str("label")?,
        href: fields.required_str("href")?,
    })
}

fn validate_price(fields: &Fields<'_>, key: &str) -> Result<f64, ValidationError> {
    let price = fields.required_number(key)?;
    if price < 0.0 {
        return Err(ValidationError::out_of_range(
            fields.path_of(key),
            format!("must not be negative, got {price}"),
        ));
    }
    Ok(price)
}

// ============================================================================
// Sections
// ============================================================================

fn validate_hero(fields: &Fields<'_>, id: Option<String>) -> Result<HeroSection, ValidationError> {
    let headline = fields.required_str("headline")?;
    let subheadline = fields.optional_str("subheadline")?;

    let cta_fields = fields.required_object("cta")?;
    let cta = HeroActions {
        primary: validate_action(&cta_fields.required_object("primary")?)?,
        secondary: cta_fields
            .optional_object("secondary")?
            .map(|f| validate_action(&f))
            .transpose()?,
    };

    let media = fields
        .optional_object("media")?
        .map(|f| validate_media(&f))
        .transpose()?;

    let aria_labels = match fields.optional_object("ariaLabels")? {
        Some(labels) => HeroAriaLabels {
            section: labels.optional_str("section")?,
            headline: labels.optional_str("headline")?,
            primary_cta: labels.optional_str("primaryCta")?,
            secondary_cta: labels.optional_str("secondaryCta")?,
            media: labels.optional_str("media")?,
        },
        None => HeroAriaLabels::default(),
    };

    let motion = fields
        .optional_object("motion")?
        .map(|f| validate_motion(&f))
        .transpose()?
        .unwrap_or_default();

    let theme = fields
        .optional_object("theme")?
        .map(|f| validate_theme(&f))
        .transpose()?;

    Ok(HeroSection {
        id,
        headline,
        subheadline,
        cta,
        media,
        aria_labels,
        motion,
        theme,
    })
}

fn validate_features(
    fields: &Fields<'_>,
    id: Option<String>,
) -> Result<FeaturesSection, ValidationError> {
    let headline = fields.required_str("headline")?;
    let subheadline = fields.optional_str("subheadline")?;
    let layout = fields.optional_enum("layout")?.unwrap_or_default();

    let items = fields
        .required_array("items")?
        .into_iter()
        .map(|(path, value)| -> Result<FeatureItem, ValidationError> {
            let item = Fields::from_value(value, path)?;
            Ok(FeatureItem {
                icon: item.optional_str("icon")?,
                title: item.required_str("title")?,
                description: item.required_str("description")?,
                media: item
                    .optional_object("media")?
                    .map(|f| validate_media(&f))
                    .transpose()?,
            })
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    Ok(FeaturesSection {
        id,
        headline,
        subheadline,
        layout,
        items,
    })
}

fn validate_pricing(
    fields: &Fields<'_>,
    id: Option<String>,
) -> Result<PricingSection, ValidationError> {
    let headline = fields.required_str("headline")?;
    let subheadline = fields.optional_str("subheadline")?;
    let billing = fields.optional_enum("billing")?.unwrap_or_default();

    let plans = fields
        .required_array("plans")?
        .into_iter()
        .map(|(path, value)| -> Result<PricingPlan, ValidationError> {
            let plan = Fields::from_value(value, path)?;
            Ok(PricingPlan {
                name: plan.required_str("name")?,
                description: plan.optional_str("description")?,
                monthly_price: validate_price(&plan, "monthlyPrice")?,
                yearly_price: validate_price(&plan, "yearlyPrice")?,
                currency: plan
                    .optional_str("currency")?
                    .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
                features: plan.required_string_list("features")?,
                highlight: plan.optional_bool("highlight")?.unwrap_or(false),
                cta: validate_action(&plan.required_object("cta")?)?,
            })
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    Ok(PricingSection {
        id,
        headline,
        subheadline,
        billing,
        plans,
    })
}

fn validate_testimonials(
    fields: &Fields<'_>,
    id: Option<String>,
) -> Result<TestimonialsSection, ValidationError> {
    let headline = fields.required_str("headline")?;
    let subheadline = fields.optional_str("subheadline")?;
    let layout = fields.optional_enum("layout")?.unwrap_or_default();

    let items = fields
        .required_array("items")?
        .into_iter()
        .map(|(path, value)| -> Result<Testimonial, ValidationError> {
            let item = Fields::from_value(value, path)?;
            let rating = match item.optional_integer("rating")? {
                Some(rating) => {
                    let (min, max) = RATING_RANGE;
                    if !(min..=max).contains(&rating) {
                        return Err(ValidationError::out_of_range(
                            item.path_of("rating"),
                            format!("must be between {min} and {max}, got {rating}"),
                        ));
                    }
                    u8::try_from(rating).ok()
                }
                None => None,
            };
            Ok(Testimonial {
                quote: item.required_str("quote")?,
                author: item.required_str("author")?,
                role: item.optional_str("role")?,
                company: item.optional_str("company")?,
                avatar: item.optional_str("avatar")?,
                rating,
            })
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    let autoplay = match fields.optional_object("autoplay")? {
        Some(autoplay) => {
            let interval = autoplay.required_integer("interval")?;
            let interval = u32::try_from(interval)
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| {
                    ValidationError::out_of_range(
                        autoplay.path_of("interval"),
                        format!("must be a positive number of milliseconds, got {interval}"),
                    )
                })?;
            Some(Autoplay {
                interval,
                pause_on_focus: autoplay.optional_bool("pauseOnFocus")?.unwrap_or(true),
            })
        }
        None => None,
    };

    Ok(TestimonialsSection {
        id,
        headline,
        subheadline,
        layout,
        items,
        autoplay,
    })
}

fn validate_faq(fields: &Fields<'_>, id: Option<String>) -> Result<FaqSection, ValidationError> {
    let headline = fields.required_str("headline")?;
    let subheadline = fields.optional_str("subheadline")?;
    let layout = fields.optional_enum("layout")?.unwrap_or_default();

    let items = fields
        .required_array("items")?
        .into_iter()
        .map(|(path, value)| -> Result<FaqItem, ValidationError> {
            let item = Fields::from_value(value, path)?;
            Ok(FaqItem {
                question: item.required_str("question")?,
                answer: item.required_str("answer")?,
                category: item.optional_str("category")?,
            })
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    Ok(FaqSection {
        id,
        headline,
        subheadline,
        layout,
        items,
        allow_multiple_open: fields.optional_bool("allowMultipleOpen")?.unwrap_or(false),
        structured_data: fields.optional_bool("structuredData")?.unwrap_or(false),
    })
}

fn validate_footer(
    fields: &Fields<'_>,
    id: Option<String>,
) -> Result<FooterSection, ValidationError> {
    let logo = match fields.optional_object("logo")? {
        Some(logo) => Some(Logo {
            src: logo.required_str("src")?,
            alt: logo.required_str("alt")?,
            href: logo.optional_str("href")?,
        }),
        None => None,
    };
    let copyright = fields.required_str("copyright")?;

    let link_groups = fields
        .optional_array("linkGroups")?
        .unwrap_or_default()
        .into_iter()
        .map(|(path, value)| -> Result<LinkGroup, ValidationError> {
            let group = Fields::from_value(value, path)?;
            Ok(LinkGroup {
                title: group.required_str("title")?,
                links: group
                    .required_array("links")?
                    .into_iter()
                    .map(|(path, value)| validate_nav_link(&Fields::from_value(value, path)?))
                    .collect::<Result<Vec<_>, _>>()?,
            })
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    let social = fields
        .optional_array("social")?
        .unwrap_or_default()
        .into_iter()
        .map(|(path, value)| -> Result<SocialLink, ValidationError> {
            let link = Fields::from_value(value, path)?;
            Ok(SocialLink {
                platform: link.required_enum("platform")?,
                href: link.required_str("href")?,
                label: link.optional_str("label")?,
            })
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    let newsletter = match fields.optional_object("newsletter")? {
        Some(newsletter) => Some(Newsletter {
            headline: newsletter.required_str("headline")?,
            placeholder: newsletter
                .optional_str("placeholder")?
                .unwrap_or_else(|| DEFAULT_NEWSLETTER_PLACEHOLDER.to_string()),
            submit_label: newsletter
                .optional_str("submitLabel")?
                .unwrap_or_else(|| DEFAULT_NEWSLETTER_SUBMIT.to_string()),
            endpoint: newsletter.optional_str("endpoint")?,
        }),
        None => None,
    };

    Ok(FooterSection {
        id,
        logo,
        copyright,
        link_groups,
        social,
        newsletter,
    })
}

fn validate_header(
    fields: &Fields<'_>,
    id: Option<String>,
) -> Result<HeaderSection, ValidationError> {
    let brand = match fields.optional_object("brand")? {
        Some(brand) => Some(Brand {
            label: brand.required_str("label")?,
            logo: brand.optional_str("logo")?,
            href: brand
                .optional_str("href")?
                .unwrap_or_else(|| DEFAULT_BRAND_HREF.to_string()),
        }),
        None => None,
    };

    let nav = fields
        .optional_array("nav")?
        .unwrap_or_default()
        .into_iter()
        .map(|(path, value)| validate_nav_link(&Fields::from_value(value, path)?))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HeaderSection {
        id,
        brand,
        nav,
        cta: fields
            .optional_object("cta")?
            .map(|f| validate_action(&f))
            .transpose()?,
        sticky: fields.optional_bool("sticky")?.unwrap_or(false),
        transparent_until_scroll: fields
            .optional_bool("transparentUntilScroll")?
            .unwrap_or(false),
    })
}

fn validate_cta_band(
    fields: &Fields<'_>,
    id: Option<String>,
) -> Result<CtaBandSection, ValidationError> {
    let heading = fields.required_str("heading")?;
    let subcopy = fields.optional_str("subcopy")?;
    let cta_fields = fields.required_object("cta")?;
    let cta = StyledAction {
        action: validate_action(&cta_fields)?,
        variant: cta_fields.optional_enum("variant")?.unwrap_or_default(),
    };
    Ok(CtaBandSection {
        id,
        heading,
        subcopy,
        cta,
    })
}

fn validate_gallery(
    fields: &Fields<'_>,
    id: Option<String>,
) -> Result<GallerySection, ValidationError> {
    let headline = fields.optional_str("headline")?;
    let images = fields
        .required_array("images")?
        .into_iter()
        .map(|(path, value)| -> Result<GalleryImage, ValidationError> {
            let image = Fields::from_value(value, path)?;
            Ok(GalleryImage {
                src: image.required_str("src")?,
                alt: image.required_str("alt")?,
                caption: image.optional_str("caption")?,
            })
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    let columns = match fields.optional_integer("columns")? {
        Some(columns) => {
            let (min, max) = GALLERY_COLUMNS_RANGE;
            if !(min..=max).contains(&columns) {
                return Err(ValidationError::out_of_range(
                    fields.path_of("columns"),
                    format!("must be between {min} and {max}, got {columns}"),
                ));
            }
            u8::try_from(columns).unwrap_or(DEFAULT_GALLERY_COLUMNS)
        }
        None => DEFAULT_GALLERY_COLUMNS,
    };

    Ok(GallerySection {
        id,
        headline,
        images,
        columns,
    })
}

// ============================================================================
// Field access helpers
// ============================================================================

/// A JSON object together with its location in the document
struct Fields<'a> {
    map: &'a Map<String, Value>,
    path: FieldPath,
}

impl<'a> Fields<'a> {
    fn from_value(value: &'a Value, path: FieldPath) -> Result<Self, ValidationError> {
        match value {
            Value::Object(map) => Ok(Self { map, path }),
            other => Err(ValidationError::wrong_type(path, "object", other)),
        }
    }

    fn path_of(&self, key: &str) -> FieldPath {
        self.path.key(key)
    }

    fn required(&self, key: &str) -> Result<&'a Value, ValidationError> {
        self.map
            .get(key)
            .ok_or_else(|| ValidationError::missing(self.path_of(key)))
    }

    fn required_str(&self, key: &str) -> Result<String, ValidationError> {
        let value = self.required(key)?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ValidationError::wrong_type(self.path_of(key), "string", value))
    }

    fn optional_str(&self, key: &str) -> Result<Option<String>, ValidationError> {
        match self.map.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(ValidationError::wrong_type(self.path_of(key), "string", other)),
        }
    }

    fn optional_bool(&self, key: &str) -> Result<Option<bool>, ValidationError> {
        match self.map.get(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(ValidationError::wrong_type(self.path_of(key), "boolean", other)),
        }
    }

    fn required_number(&self, key: &str) -> Result<f64, ValidationError> {
        let value = self.required(key)?;
        value
            .as_f64()
            .ok_or_else(|| ValidationError::wrong_type(self.path_of(key), "number", value))
    }

    fn optional_number(&self, key: &str) -> Result<Option<f64>, ValidationError> {
        match self.map.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_f64()
                .map(Some)
                .ok_or_else(|| ValidationError::wrong_type(self.path_of(key), "number", value)),
        }
    }

    fn required_integer(&self, key: &str) -> Result<i64, ValidationError> {
        let value = self.required(key)?;
        as_integer(value)
            .ok_or_else(|| ValidationError::wrong_type(self.path_of(key), "integer", value))
    }

    fn optional_integer(&self, key: &str) -> Result<Option<i64>, ValidationError> {
        match self.map.get(key) {
            None => Ok(None),
            Some(value) => as_integer(value)
                .map(Some)
                .ok_or_else(|| ValidationError::wrong_type(self.path_of(key), "integer", value)),
        }
    }

    fn required_object(&self, key: &str) -> Result<Fields<'a>, ValidationError> {
        Fields::from_value(self.required(key)?, self.path_of(key))
    }

    fn optional_object(&self, key: &str) -> Result<Option<Fields<'a>>, ValidationError> {
        self.map
            .get(key)
            .map(|value| Fields::from_value(value, self.path_of(key)))
            .transpose()
    }

    fn required_array(&self, key: &str) -> Result<Vec<(FieldPath, &'a Value)>, ValidationError> {
        let value = self.required(key)?;
        self.indexed(key, value)
    }

    fn optional_array(
        &self,
        key: &str,
    ) -> Result<Option<Vec<(FieldPath, &'a Value)>>, ValidationError> {
        self.map
            .get(key)
            .map(|value| self.indexed(key, value))
            .transpose()
    }

    fn indexed(
        &self,
        key: &str,
        value: &'a Value,
    ) -> Result<Vec<(FieldPath, &'a Value)>, ValidationError> {
        let path = self.path_of(key);
        match value {
            Value::Array(items) => Ok(items
                .iter()
                .enumerate()
                .map(|(i, item)| (path.index(i), item))
                .collect()),
            other => Err(ValidationError::wrong_type(path, "array", other)),
        }
    }

    fn required_string_list(&self, key: &str) -> Result<Vec<String>, ValidationError> {
        strings(self.required_array(key)?)
    }

    fn optional_string_list(&self, key: &str) -> Result<Option<Vec<String>>, ValidationError> {
        self.optional_array(key)?.map(strings).transpose()
    }

    fn required_enum<T: SchemaEnum>(&self, key: &str) -> Result<T, ValidationError> {
        let tag = self.required_str(key)?;
        T::from_tag(&tag)
            .ok_or_else(|| ValidationError::invalid_enum(self.path_of(key), &tag, T::TAGS))
    }

    fn optional_enum<T: SchemaEnum>(&self, key: &str) -> Result<Option<T>, ValidationError> {
        match self.optional_str(key)? {
            None => Ok(None),
            Some(tag) => T::from_tag(&tag)
                .map(Some)
                .ok_or_else(|| ValidationError::invalid_enum(self.path_of(key), &tag, T::TAGS)),
        }
    }
}

fn strings(items: Vec<(FieldPath, &Value)>) -> Result<Vec<String>, ValidationError> {
    items
        .into_iter()
        .map(|(path, value)| {
            value
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| ValidationError::wrong_type(path, "string", value))
        })
        .collect()
}

/// Integral JSON number, accepting `5.0` as well as `5`
fn as_integer(value: &Value) -> Option<i64> {
    if let Some(i) = value.as_i64() {
        return Some(i);
    }
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => {
            Some(f as i64)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::spec::ValidationErrorKind;
    use serde_json::json;

    fn page(sections: Value) -> Value {
        json!({
            "meta": { "title": "T", "description": "D" },
            "sections": sections,
        })
    }

    fn hero_with_media(media: Value) -> Value {
        page(json!([{
            "type": "hero",
            "headline": "H",
            "cta": { "primary": { "text": "Go", "href": "/x" } },
            "media": media,
        }]))
    }

    #[test]
    fn test_minimal_document() {
        let spec = validate(&page(json!([]))).unwrap();
        assert_eq!(spec.meta.title, "T");
        assert_eq!(spec.meta.description, "D");
        assert!(spec.sections.is_empty());
        assert!(spec.meta.canonical.is_none());
    }

    #[test]
    fn test_missing_description() {
        let err = validate(&json!({ "meta": { "title": "T" }, "sections": [] })).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::MissingField);
        assert_eq!(err.path.to_string(), "meta.description");
    }

    #[test]
    fn test_meta_checked_before_sections() {
        let err = validate(&json!({
            "meta": { "description": "D" },
            "sections": [{ "type": "carousel" }],
        }))
        .unwrap_err();
        assert_eq!(err.path.to_string(), "meta.title");
    }

    #[test]
    fn test_root_must_be_object() {
        let err = validate(&json!([1, 2])).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::WrongType);
        assert!(err.path.is_root());
        assert_eq!(err.message, "expected object, found array");
    }

    #[test]
    fn test_sections_must_be_array() {
        let err = validate(&json!({
            "meta": { "title": "T", "description": "D" },
            "sections": { "type": "hero" },
        }))
        .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::WrongType);
        assert_eq!(err.path.to_string(), "sections");
    }

    #[test]
    fn test_unknown_section_type() {
        let err = validate(&page(json!([{ "type": "carousel" }]))).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::UnknownSectionType);
        assert_eq!(err.path.to_string(), "sections[0].type");
        assert!(err.message.contains("carousel"));
    }

    #[test]
    fn test_missing_discriminator() {
        let err = validate(&page(json!([{ "headline": "H" }]))).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::MissingField);
        assert_eq!(err.path.to_string(), "sections[0].type");
    }

    #[test]
    fn test_deep_path_reported() {
        let err = validate(&page(json!([
            { "type": "faq", "headline": "F", "items": [] },
            { "type": "faq", "headline": "F", "items": [] },
            { "type": "hero", "headline": "H", "cta": { "primary": { "text": "Go" } } },
        ])))
        .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::MissingField);
        assert_eq!(err.path.to_string(), "sections[2].cta.primary.href");
    }

    #[test]
    fn test_first_violation_wins() {
        let err = validate(&page(json!([
            { "type": "features", "headline": 3, "items": [] },
            { "type": "nope" },
        ])))
        .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::WrongType);
        assert_eq!(err.path.to_string(), "sections[0].headline");
    }

    #[test]
    fn test_shape_must_match_discriminator() {
        // A pricing payload tagged as a hero is missing the hero's required fields
        let err = validate(&page(json!([{
            "type": "hero",
            "headline": "Plans",
            "plans": [],
        }])))
        .unwrap_err();
        assert_eq!(err.path.to_string(), "sections[0].cta");
    }

    #[test]
    fn test_parallax_bounds_inclusive() {
        for speed in [0.0, 1.0, 2.0] {
            let spec = validate(&hero_with_media(json!({
                "type": "image", "src": "/a.png", "parallaxSpeed": speed,
            })))
            .unwrap();
            let SectionSpec::Hero(hero) = &spec.sections[0] else {
                panic!("expected hero");
            };
            assert_eq!(hero.media.as_ref().unwrap().parallax_speed, Some(speed));
        }
    }

    #[test]
    fn test_parallax_out_of_range_rejected() {
        for speed in [-0.1, 2.01, 10.0] {
            let err = validate(&hero_with_media(json!({
                "type": "image", "src": "/a.png", "parallaxSpeed": speed,
            })))
            .unwrap_err();
            assert_eq!(err.kind, ValidationErrorKind::OutOfRange);
            assert_eq!(err.path.to_string(), "sections[0].media.parallaxSpeed");
        }
    }

    #[test]
    fn test_media_type_enum() {
        let err = validate(&hero_with_media(json!({ "type": "gif", "src": "/a.gif" }))).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidEnumValue);
        assert_eq!(err.path.to_string(), "sections[0].media.type");
    }

    #[test]
    fn test_media_defaults() {
        let spec = validate(&hero_with_media(json!({ "type": "video", "src": "/a.mp4" }))).unwrap();
        let SectionSpec::Hero(hero) = &spec.sections[0] else {
            panic!("expected hero");
        };
        let media = hero.media.as_ref().unwrap();
        assert!(!media.autoplay);
        assert!(!media.loop_playback);
        assert!(media.muted);
    }

    #[test]
    fn test_motion_entrance_enum_and_default() {
        let base = |motion: Value| {
            page(json!([{
                "type": "hero",
                "headline": "H",
                "cta": { "primary": { "text": "Go", "href": "/x" } },
                "motion": motion,
            }]))
        };

        let err = validate(&base(json!({ "entrance": "spin" }))).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidEnumValue);
        assert_eq!(err.path.to_string(), "sections[0].motion.entrance");

        let spec = validate(&base(json!({}))).unwrap();
        let SectionSpec::Hero(hero) = &spec.sections[0] else {
            panic!("expected hero");
        };
        assert_eq!(hero.motion.entrance, Entrance::Fade);
        assert!(hero.motion.respect_reduced_motion);
    }

    #[test]
    fn test_layout_default_and_rejection() {
        let spec = validate(&page(json!([{ "type": "features", "headline": "F", "items": [] }])))
            .unwrap();
        let SectionSpec::Features(features) = &spec.sections[0] else {
            panic!("expected features");
        };
        assert_eq!(features.layout, FeaturesLayout::Grid);
        assert!(features.items.is_empty());

        let err = validate(&page(json!([{
            "type": "features", "headline": "F", "layout": "masonry", "items": [],
        }])))
        .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidEnumValue);
    }

    #[test]
    fn test_rating_bounds() {
        let section = |rating: Value| {
            page(json!([{
                "type": "testimonials",
                "headline": "Loved",
                "items": [{ "quote": "Q", "author": "A", "rating": rating }],
            }]))
        };

        assert!(validate(&section(json!(1))).is_ok());
        assert!(validate(&section(json!(5))).is_ok());

        let err = validate(&section(json!(6))).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::OutOfRange);
        assert_eq!(err.path.to_string(), "sections[0].items[0].rating");

        let err = validate(&section(json!(0))).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::OutOfRange);

        let err = validate(&section(json!(4.5))).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::WrongType);
    }

    #[test]
    fn test_autoplay_interval_must_be_positive() {
        let err = validate(&page(json!([{
            "type": "testimonials",
            "headline": "Loved",
            "items": [],
            "autoplay": { "interval": 0 },
        }])))
        .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::OutOfRange);
        assert_eq!(err.path.to_string(), "sections[0].autoplay.interval");
    }

    #[test]
    fn test_pricing_defaults_and_multiple_highlights() {
        let spec = validate(&page(json!([{
            "type": "pricing",
            "headline": "Plans",
            "plans": [
                { "name": "A", "monthlyPrice": 10, "yearlyPrice": 100, "features": [],
                  "highlight": true, "cta": { "text": "Buy", "href": "/a" } },
                { "name": "B", "monthlyPrice": 20, "yearlyPrice": 200, "features": ["x"],
                  "highlight": true, "cta": { "text": "Buy", "href": "/b" } },
            ],
        }])))
        .unwrap();
        let SectionSpec::Pricing(pricing) = &spec.sections[0] else {
            panic!("expected pricing");
        };
        assert_eq!(pricing.billing, BillingMode::Both);
        assert!(pricing.plans.iter().all(|p| p.highlight));
        assert!(pricing.plans.iter().all(|p| p.currency == "USD"));
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = validate(&page(json!([{
            "type": "pricing",
            "headline": "Plans",
            "plans": [{ "name": "A", "monthlyPrice": -1, "yearlyPrice": 0, "features": [],
                        "cta": { "text": "Buy", "href": "/a" } }],
        }])))
        .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::OutOfRange);
        assert_eq!(err.path.to_string(), "sections[0].plans[0].monthlyPrice");
    }

    #[test]
    fn test_plan_feature_must_be_string() {
        let err = validate(&page(json!([{
            "type": "pricing",
            "headline": "Plans",
            "plans": [{ "name": "A", "monthlyPrice": 1, "yearlyPrice": 10, "features": ["ok", 7],
                        "cta": { "text": "Buy", "href": "/a" } }],
        }])))
        .unwrap_err();
        assert_eq!(err.path.to_string(), "sections[0].plans[0].features[1]");
    }

    #[test]
    fn test_footer_requires_copyright_and_known_platforms() {
        let err = validate(&page(json!([{ "type": "footer" }]))).unwrap_err();
        assert_eq!(err.path.to_string(), "sections[0].copyright");

        let err = validate(&page(json!([{
            "type": "footer",
            "copyright": "(c) Acme",
            "social": [{ "platform": "myspace", "href": "https://myspace.com/acme" }],
        }])))
        .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidEnumValue);
        assert_eq!(err.path.to_string(), "sections[0].social[0].platform");
    }

    #[test]
    fn test_newsletter_defaults() {
        let spec = validate(&page(json!([{
            "type": "footer",
            "copyright": "(c) Acme",
            "newsletter": { "headline": "Stay in touch" },
        }])))
        .unwrap();
        let SectionSpec::Footer(footer) = &spec.sections[0] else {
            panic!("expected footer");
        };
        let newsletter = footer.newsletter.as_ref().unwrap();
        assert_eq!(newsletter.placeholder, DEFAULT_NEWSLETTER_PLACEHOLDER);
        assert_eq!(newsletter.submit_label, DEFAULT_NEWSLETTER_SUBMIT);
        assert!(newsletter.endpoint.is_none());
    }

    #[test]
    fn test_extended_sections() {
        let spec = validate(&page(json!([
            { "type": "header", "brand": { "label": "Acme" }, "nav": [{ "label": "Docs", "href": "/docs" }] },
            { "type": "cta-band", "heading": "Ready?", "cta": { "text": "Start", "href": "/go", "variant": "outline" } },
            { "type": "gallery", "images": [{ "src": "/1.png", "alt": "One" }] },
        ])))
        .unwrap();
        let kinds: Vec<_> = spec.sections.iter().map(SectionSpec::kind).collect();
        assert_eq!(
            kinds,
            vec![SectionKind::Header, SectionKind::CtaBand, SectionKind::Gallery]
        );
        let SectionSpec::Header(header) = &spec.sections[0] else {
            panic!("expected header");
        };
        assert_eq!(header.brand.as_ref().unwrap().href, "/");
        let SectionSpec::CtaBand(band) = &spec.sections[1] else {
            panic!("expected cta band");
        };
        assert_eq!(band.cta.variant, CtaVariant::Outline);
        let SectionSpec::Gallery(gallery) = &spec.sections[2] else {
            panic!("expected gallery");
        };
        assert_eq!(gallery.columns, DEFAULT_GALLERY_COLUMNS);
    }

    #[test]
    fn test_gallery_columns_bounds() {
        let err = validate(&page(json!([
            { "type": "gallery", "images": [], "columns": 9 },
        ])))
        .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::OutOfRange);
        assert_eq!(err.path.to_string(), "sections[0].columns");
    }

    #[test]
    fn test_null_is_wrong_type() {
        let err = validate(&page(json!([{
            "type": "hero",
            "headline": "H",
            "subheadline": null,
            "cta": { "primary": { "text": "Go", "href": "/x" } },
        }])))
        .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::WrongType);
        assert_eq!(err.path.to_string(), "sections[0].subheadline");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let spec = validate(&json!({
            "meta": { "title": "T", "description": "D", "robots": "noindex" },
            "sections": [],
            "version": 2,
        }))
        .unwrap();
        assert_eq!(spec.meta.title, "T");
    }

    #[test]
    fn test_validation_is_deterministic() {
        let raw = page(json!([
            { "type": "hero", "headline": "H", "cta": { "primary": { "text": "Go", "href": "/x" } } },
            { "type": "faq", "headline": "Q", "items": [{ "question": "q", "answer": "a" }] },
        ]));
        assert_eq!(validate(&raw).unwrap(), validate(&raw).unwrap());
    }

    #[test]
    fn test_typed_document_round_trips_through_serde() {
        let raw = page(json!([
            { "type": "cta-band", "heading": "Ready?", "cta": { "text": "Start", "href": "/go" } },
        ]));
        let spec = validate(&raw).unwrap();
        let serialized = serde_json::to_value(&spec).unwrap();
        assert_eq!(serialized["sections"][0]["type"], "cta-band");
        assert_eq!(validate(&serialized).unwrap(), spec);
    }
}
