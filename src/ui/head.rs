//! Head metadata through `leptos_meta`

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::head::HeadMetadata;

/// Title, description and the optional tags that are present
#[component]
pub fn PageHead(head: HeadMetadata) -> impl IntoView {
    let HeadMetadata {
        title,
        description,
        keywords,
        author,
        canonical,
        og_image,
    } = head;

    view! {
        <Title text=title.clone() />
        <Meta name="description" content=description.clone() />
        <Meta property="og:title" content=title />
        <Meta property="og:description" content=description />
        {keywords.map(|keywords| view! { <Meta name="keywords" content=keywords /> })}
        {author.map(|author| view! { <Meta name="author" content=author /> })}
        {canonical.map(|href| view! { <Link rel="canonical" href=href /> })}
        {og_image.map(|image| view! { <Meta property="og:image" content=image /> })}
    }
}
