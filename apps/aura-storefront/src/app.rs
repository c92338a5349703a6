//! Application shell.

use leptos::prelude::*;
use leptos_meta::*;

use aura_state::{provide_cart, provide_selection, provide_toasts};

use crate::components::{
    ArExperience, CartDrawer, FeaturedCollection, Footer, Hero, Navigation, Philosophy,
    ProductModal, Testimonials, Toaster,
};
use crate::data::collection::featured_catalog;

const FONTS_URL: &str = "https://fonts.googleapis.com/css2?family=Playfair+Display:ital,wght@0,400;0,500;0,600;0,700;1,400;1,500;1,600&family=Inter:wght@300;400;500;600;700&display=swap";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_cart();
    provide_selection();
    provide_toasts();

    // A collection that fails validation is a content bug; fail before
    // anything renders rather than at interaction time.
    let catalog = featured_catalog().expect("featured collection failed validation");

    view! {
        <Title text="Aura Interiors | Luxury Furniture with AR"/>
        <Meta
            name="description"
            content="Redefining luxury furniture with augmented reality technology and timeless design."
        />
        <Link rel="preconnect" href="https://fonts.googleapis.com"/>
        <Link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous"/>
        <Link rel="stylesheet" href=FONTS_URL/>

        <Navigation/>
        <main>
            <Hero/>
            <ArExperience/>
            <FeaturedCollection catalog=catalog/>
            <Philosophy/>
            <Testimonials/>
        </main>
        <Footer/>

        <CartDrawer/>
        <ProductModal/>
        <Toaster/>
    }
}
