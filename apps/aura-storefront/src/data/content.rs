//! Typed site copy.
//!
//! Each section component renders one of these structs; the `Default`
//! impls carry the live copy so components stay free of string literals
//! beyond labels.

use serde::{Deserialize, Serialize};

/// A navigation or footer link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// Top navigation content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavContent {
    pub brand: String,
    pub links: Vec<Link>,
    pub consultation_label: String,
}

impl Default for NavContent {
    fn default() -> Self {
        Self {
            brand: "Aura".to_string(),
            links: vec![
                Link::new("Collections", "#featured-collection"),
                Link::new("AR Experience", "#ar-experience"),
                Link::new("About", "#philosophy"),
                Link::new("Showrooms", "#footer"),
                Link::new("Contact", "#footer"),
            ],
            consultation_label: "Book Consultation".to_string(),
        }
    }
}

/// Hero banner content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroContent {
    pub headline: String,
    pub headline_accent: String,
    pub subheadline: String,
    pub primary_cta: Link,
    pub secondary_cta: Link,
    pub background_image: String,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            headline: "Redefine Your Space".to_string(),
            headline_accent: "with Modern Luxury".to_string(),
            subheadline: "Experience furniture in your home through AR before you buy. \
                          Transform your living spaces with elegance, technology, and comfort."
                .to_string(),
            primary_cta: Link::new("Explore Collection", "#featured-collection"),
            secondary_cta: Link::new("Try in AR", "#ar-experience"),
            background_image:
                "https://images.unsplash.com/photo-1621431869071-934c835377af?auto=format&fit=crop&q=80&w=1032"
                    .to_string(),
        }
    }
}

/// AR marketing section content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArContent {
    pub badge: String,
    pub headline: String,
    pub headline_accent: String,
    pub description: String,
    pub features: Vec<String>,
    pub cta_label: String,
    pub image: String,
}

impl Default for ArContent {
    fn default() -> Self {
        Self {
            badge: "AR Technology".to_string(),
            headline: "See How Our Furniture".to_string(),
            headline_accent: "Fits Your World".to_string(),
            description: "Experience our furniture in your actual space before making a \
                          decision. Our augmented reality technology lets you visualize \
                          every piece perfectly scaled and positioned in your home."
                .to_string(),
            features: vec![
                "Real-time 3D visualization".to_string(),
                "Accurate size and scale".to_string(),
                "Works on any mobile device".to_string(),
                "Save and share your designs".to_string(),
            ],
            cta_label: "Scan QR to Try AR".to_string(),
            image:
                "https://images.unsplash.com/photo-1614917752476-02e4b89b4bc7?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080"
                    .to_string(),
        }
    }
}

/// A design principle card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principle {
    pub title: String,
    pub description: String,
}

impl Principle {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Design philosophy section content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhilosophyContent {
    pub eyebrow: String,
    pub headline_accent: String,
    pub headline: String,
    pub intro: String,
    pub principles: Vec<Principle>,
    pub quote: String,
}

impl Default for PhilosophyContent {
    fn default() -> Self {
        Self {
            eyebrow: "Our Philosophy".to_string(),
            headline_accent: "Craftsmanship".to_string(),
            headline: "Meets Technology".to_string(),
            intro: "Every piece at Aura Interiors blends artful design with smart \
                    innovation. We believe your home should be a reflection of your \
                    unique story, enhanced by technology that makes design accessible \
                    and experiential."
                .to_string(),
            principles: vec![
                Principle::new(
                    "Innovation",
                    "Pioneering AR technology to revolutionize furniture shopping",
                ),
                Principle::new(
                    "Craftsmanship",
                    "Handpicked materials and meticulous attention to detail",
                ),
                Principle::new("Excellence", "Award-winning designs recognized worldwide"),
            ],
            quote: "Design is not just what it looks like and feels like. \
                    Design is how it works in your life."
                .to_string(),
        }
    }
}

/// A customer testimonial.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub quote: String,
}

impl Testimonial {
    pub fn new(name: &str, role: &str, quote: &str) -> Self {
        Self {
            name: name.to_string(),
            role: role.to_string(),
            quote: quote.to_string(),
        }
    }
}

/// Testimonials section content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialsContent {
    pub eyebrow: String,
    pub testimonials: Vec<Testimonial>,
}

impl Default for TestimonialsContent {
    fn default() -> Self {
        Self {
            eyebrow: "Testimonials".to_string(),
            testimonials: vec![
                Testimonial::new(
                    "Elena Martinez",
                    "Interior Designer",
                    "Aura Interiors transformed my approach to client presentations. \
                     The AR feature lets clients see exactly how pieces will look in \
                     their space. Absolutely revolutionary.",
                ),
                Testimonial::new(
                    "James Chen",
                    "Homeowner",
                    "The quality is unmatched. Each piece is a work of art that \
                     elevates our entire living space. The AR visualization gave us \
                     complete confidence before purchasing.",
                ),
                Testimonial::new(
                    "Sophia Laurent",
                    "Architect",
                    "The perfect marriage of timeless design and cutting-edge \
                     technology. Aura Interiors understands that luxury is in the \
                     details and the experience.",
                ),
            ],
        }
    }
}

/// Footer content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterContent {
    pub brand: String,
    pub blurb: String,
    pub newsletter_headline: String,
    pub newsletter_accent: String,
    pub newsletter_blurb: String,
    pub shop_links: Vec<Link>,
    pub company_links: Vec<Link>,
    pub contact_lines: Vec<String>,
    pub copyright: String,
    pub legal_links: Vec<Link>,
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            brand: "Aura Interiors".to_string(),
            blurb: "Redefining luxury furniture with augmented reality technology \
                    and timeless design."
                .to_string(),
            newsletter_headline: "Subscribe to Our".to_string(),
            newsletter_accent: "Design Newsletter".to_string(),
            newsletter_blurb: "Get exclusive access to new collections, design \
                               inspiration, and AR features."
                .to_string(),
            shop_links: vec![
                Link::new("Living Room", "#featured-collection"),
                Link::new("Bedroom", "#featured-collection"),
                Link::new("Dining", "#featured-collection"),
                Link::new("Office", "#featured-collection"),
                Link::new("Outdoor", "#featured-collection"),
                Link::new("New Arrivals", "#featured-collection"),
            ],
            company_links: vec![
                Link::new("About Us", "#philosophy"),
                Link::new("AR Technology", "#ar-experience"),
                Link::new("Showrooms", "#footer"),
                Link::new("Design Services", "#footer"),
                Link::new("Careers", "#footer"),
                Link::new("Press", "#footer"),
            ],
            contact_lines: vec![
                "123 Design Avenue, New York, NY 10001".to_string(),
                "+1 (555) 123-4567".to_string(),
                "hello@aurainteriors.com".to_string(),
            ],
            copyright: "© 2025 Aura Interiors. All rights reserved.".to_string(),
            legal_links: vec![
                Link::new("Privacy Policy", "#footer"),
                Link::new("Terms of Service", "#footer"),
                Link::new("Cookies", "#footer"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_are_in_page_anchors() {
        for link in NavContent::default().links {
            assert!(link.href.starts_with('#'), "nav link {} is not an anchor", link.label);
        }
    }

    #[test]
    fn test_hero_ctas_target_page_sections() {
        let hero = HeroContent::default();
        assert_eq!(hero.primary_cta.href, "#featured-collection");
        assert_eq!(hero.secondary_cta.href, "#ar-experience");
    }

    #[test]
    fn test_ar_section_lists_four_features() {
        assert_eq!(ArContent::default().features.len(), 4);
    }

    #[test]
    fn test_philosophy_has_three_principles() {
        let content = PhilosophyContent::default();
        assert_eq!(content.principles.len(), 3);
        assert!(!content.intro.is_empty());
    }

    #[test]
    fn test_three_testimonials_with_attribution() {
        for t in TestimonialsContent::default().testimonials {
            assert!(!t.name.is_empty());
            assert!(!t.role.is_empty());
            assert!(!t.quote.is_empty());
        }
    }

    #[test]
    fn test_footer_link_columns_are_populated() {
        let footer = FooterContent::default();
        assert_eq!(footer.shop_links.len(), 6);
        assert_eq!(footer.company_links.len(), 6);
        assert_eq!(footer.contact_lines.len(), 3);
        assert!(footer.copyright.contains("Aura Interiors"));
    }
}
