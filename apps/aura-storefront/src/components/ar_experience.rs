use leptos::prelude::*;

use crate::data::content::ArContent;

/// AR marketing section with the feature list and QR call to action.
#[component]
pub fn ArExperience() -> impl IntoView {
    let content = ArContent::default();

    view! {
        <section id="ar-experience" class="ar-section">
            <div class="ar-inner">
                <div class="ar-visual">
                    <img src=content.image alt="Customer previewing furniture in AR"/>
                    <p class="ar-visual-caption">"View in your room"</p>
                </div>

                <div class="ar-copy">
                    <span class="eyebrow">{content.badge}</span>
                    <h2>
                        {content.headline}
                        <br/>
                        <em>{content.headline_accent}</em>
                    </h2>
                    <p>{content.description}</p>
                    <ul class="ar-features">
                        {content
                            .features
                            .into_iter()
                            .map(|feature| view! { <li>{feature}</li> })
                            .collect_view()}
                    </ul>
                    <button class="btn-gold">{content.cta_label}</button>
                </div>
            </div>
        </section>
    }
}
