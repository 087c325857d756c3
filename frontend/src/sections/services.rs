use yew::prelude::*;

use crate::animation::{EnterTransition, ScrollTrigger};
use crate::components::reveal::Reveal;
use crate::content::{ServiceOffering, SERVICES};
use crate::links::Anchor;

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: ServiceOffering,
    index: usize,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let service = &props.service;
    let transition = EnterTransition::pop(60.0, 0.9)
        .stagger(props.index, 100)
        .on_scroll(ScrollTrigger::CARD);

    html! {
        <Reveal {transition} class="group rounded-xl border bg-card p-6 hover:shadow-lg transition-shadow">
            <div class="w-12 h-12 bg-primary/10 rounded-lg flex items-center justify-center mb-4 text-2xl group-hover:bg-primary/20 transition-colors">
                { service.icon }
            </div>
            <h3 class="text-xl font-semibold mb-4">{ service.title }</h3>
            <p class="text-muted-foreground mb-4">{ service.description }</p>
            <ul class="space-y-2">
                { for service.features.iter().map(|feature| html! {
                    <li class="flex items-center space-x-2 text-sm">
                        <div class="w-1.5 h-1.5 bg-primary rounded-full" />
                        <span class="text-muted-foreground">{ *feature }</span>
                    </li>
                }) }
            </ul>
        </Reveal>
    }
}

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    html! {
        <section id={Anchor::Services.id()} class="py-10">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal transition={EnterTransition::rise(50.0)} class="text-center space-y-4 mb-16">
                    <h2 class="text-3xl sm:text-4xl font-bold tracking-tight">
                        {"Our "}<span class="text-primary">{"Services"}</span>
                    </h2>
                    <p class="text-lg text-muted-foreground max-w-3xl mx-auto">
                        {"Discover our comprehensive range of fitness services designed to help you achieve your goals and maintain a healthy lifestyle."}
                    </p>
                </Reveal>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <ServiceCard key={service.title} service={service.clone()} {index} />
                    }) }
                </div>
            </div>
        </section>
    }
}
