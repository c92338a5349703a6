use leptos::prelude::*;

use crate::data::content::PhilosophyContent;

#[component]
pub fn Philosophy() -> impl IntoView {
    let content = PhilosophyContent::default();

    view! {
        <section id="philosophy" class="philosophy">
            <div class="section-header">
                <span class="eyebrow">{content.eyebrow}</span>
                <h2>
                    "Where " <em>{content.headline_accent}</em>
                    <br/>
                    {content.headline}
                </h2>
                <p>{content.intro}</p>
            </div>

            <div class="principle-grid">
                {content
                    .principles
                    .into_iter()
                    .map(|principle| {
                        view! {
                            <div class="principle">
                                <h3>{principle.title}</h3>
                                <p>{principle.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <blockquote class="philosophy-quote">{content.quote}</blockquote>
        </section>
    }
}
