use leptos::prelude::*;

use crate::data::content::{FooterContent, Link};

#[component]
pub fn Footer() -> impl IntoView {
    let content = FooterContent::default();

    view! {
        <footer id="footer" class="site-footer">
            <div class="footer-newsletter">
                <span class="eyebrow">"Stay Connected"</span>
                <h3>
                    {content.newsletter_headline} " " <em>{content.newsletter_accent}</em>
                </h3>
                <p>{content.newsletter_blurb}</p>
                <form class="newsletter-form" on:submit=move |ev| ev.prevent_default()>
                    <input type="email" placeholder="Enter your email" required/>
                    <button type="submit">"Subscribe"</button>
                </form>
            </div>

            <div class="footer-columns">
                <div class="footer-brand">
                    <h4>{content.brand}</h4>
                    <p>{content.blurb}</p>
                </div>
                <FooterColumn title="Shop" links=content.shop_links/>
                <FooterColumn title="Company" links=content.company_links/>
                <div class="footer-column">
                    <h5>"Contact"</h5>
                    <ul>
                        {content
                            .contact_lines
                            .into_iter()
                            .map(|line| view! { <li>{line}</li> })
                            .collect_view()}
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{content.copyright}</p>
                <div class="footer-legal">
                    {content
                        .legal_links
                        .into_iter()
                        .map(|link| view! { <a href=link.href>{link.label}</a> })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}

#[component]
fn FooterColumn(title: &'static str, links: Vec<Link>) -> impl IntoView {
    view! {
        <div class="footer-column">
            <h5>{title}</h5>
            <ul>
                {links
                    .into_iter()
                    .map(|link| view! { <li><a href=link.href>{link.label}</a></li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
