use leptos::prelude::*;

use crate::data::content::TestimonialsContent;

#[component]
pub fn Testimonials() -> impl IntoView {
    let content = TestimonialsContent::default();

    view! {
        <section class="testimonials">
            <div class="section-header">
                <span class="eyebrow">{content.eyebrow}</span>
                <h2>"What Our " <em>"Clients Say"</em></h2>
            </div>

            <div class="testimonial-grid">
                {content
                    .testimonials
                    .into_iter()
                    .map(|testimonial| {
                        view! {
                            <figure class="testimonial">
                                <blockquote>{testimonial.quote}</blockquote>
                                <figcaption>
                                    <span class="testimonial-name">{testimonial.name}</span>
                                    <span class="testimonial-role">{testimonial.role}</span>
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
