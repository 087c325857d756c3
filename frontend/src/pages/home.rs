use yew::prelude::*;

use crate::sections::{
    about::AboutSection,
    contact::ContactSection,
    gallery::GallerySection,
    hero::HeroSection,
    services::ServicesSection,
    testimonials::TestimonialsSection,
    trainers::TrainersSection,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="min-h-screen bg-background text-foreground">
            <HeroSection />
            <AboutSection />
            <ServicesSection />
            <TrainersSection />
            <GallerySection />
            <TestimonialsSection />
            <ContactSection />
        </main>
    }
}
