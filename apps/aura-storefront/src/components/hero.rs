use leptos::prelude::*;

use crate::data::content::HeroContent;

/// Full-height opening banner with the two call-to-action anchors.
#[component]
pub fn Hero() -> impl IntoView {
    let content = HeroContent::default();
    let background = format!("background-image: url('{}')", content.background_image);

    view! {
        <section id="top" class="hero">
            <div class="hero-background" style=background></div>
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <h1>
                    {content.headline}
                    <br/>
                    <em>{content.headline_accent}</em>
                </h1>
                <p>{content.subheadline}</p>
                <div class="hero-ctas">
                    <a class="btn-primary" href=content.primary_cta.href>
                        {content.primary_cta.label}
                    </a>
                    <a class="btn-outline" href=content.secondary_cta.href>
                        {content.secondary_cta.label}
                    </a>
                </div>
            </div>
        </section>
    }
}
