//! Presentation components.
//!
//! Components own no business state. They read the stores from context
//! and call their operations in response to user gestures.

mod ar_experience;
mod cart_drawer;
mod featured_collection;
mod footer;
mod hero;
mod navigation;
mod philosophy;
mod product_modal;
mod testimonials;
mod toaster;

pub use ar_experience::ArExperience;
pub use cart_drawer::CartDrawer;
pub use featured_collection::FeaturedCollection;
pub use footer::Footer;
pub use hero::Hero;
pub use navigation::Navigation;
pub use philosophy::Philosophy;
pub use product_modal::ProductModal;
pub use testimonials::Testimonials;
pub use toaster::Toaster;
