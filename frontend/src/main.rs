use yew::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod links;
mod animation;
mod theme;
mod contact {
    pub mod form;
    pub mod sink;
}
mod components {
    pub mod reveal;
    pub mod count_up;
    pub mod nav;
    pub mod footer;
}
mod sections {
    pub mod hero;
    pub mod about;
    pub mod services;
    pub mod trainers;
    pub mod gallery;
    pub mod testimonials;
    pub mod contact;
}
mod pages {
    pub mod home;
}

use components::{footer::Footer, nav::Nav};
use pages::home::Home;
use theme::ThemeProvider;

#[function_component]
fn App() -> Html {
    html! {
        <ThemeProvider>
            <Nav />
            <Home />
            <Footer />
            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }
                .hero-grid {
                    background-image:
                        linear-gradient(to right, rgba(128, 128, 128, 0.08) 1px, transparent 1px),
                        linear-gradient(to bottom, rgba(128, 128, 128, 0.08) 1px, transparent 1px);
                    background-size: 40px 40px;
                    pointer-events: none;
                }
                @keyframes floating {
                    from { transform: translateY(0); }
                    to { transform: translateY(-20px); }
                }
                .marquee {
                    width: max-content;
                    animation: marquee 60s linear infinite;
                }
                @keyframes marquee {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                "#}
            </style>
        </ThemeProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting Vision Fitness");
    yew::Renderer::<App>::new().render();
}
