use web_sys::MouseEvent;
use yew::prelude::*;

use crate::animation::{EnterTransition, ScrollTrigger};
use crate::components::reveal::Reveal;
use crate::content::{ABOUT_FEATURES, ABOUT_PILLARS, ABOUT_STATS};
use crate::links::{scroll_to_section, Anchor};

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let title = EnterTransition::rise(50.0);
    let content = EnterTransition::slide(-50.0).duration(1000);
    let stat_card = |index: usize| {
        EnterTransition::pop(30.0, 0.9)
            .duration(600)
            .stagger(index, 100)
            .on_scroll(ScrollTrigger::CARD)
    };
    let feature = |index: usize| {
        EnterTransition::slide(50.0)
            .stagger(index, 200)
            .on_scroll(ScrollTrigger::CARD)
    };

    html! {
        <section id={Anchor::About.id()} class="py-10 bg-muted/30">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <Reveal transition={content} class="space-y-8">
                        <div class="space-y-4">
                            <Reveal transition={title}>
                                <h2 class="text-3xl sm:text-4xl font-bold tracking-tight">
                                    {"About "}<span class="text-primary">{"Vision Fitness"}</span>
                                </h2>
                            </Reveal>
                            <p class="text-lg text-muted-foreground">
                                {"We are more than just a gym. We are a community dedicated to helping individuals achieve their fitness goals and transform their lives through comprehensive training programs, expert guidance, and state-of-the-art facilities."}
                            </p>
                        </div>

                        <div class="space-y-6">
                            { for ABOUT_FEATURES.iter().enumerate().map(|(index, item)| html! {
                                <Reveal transition={feature(index)} class="flex items-start space-x-4">
                                    <span class="text-primary text-xl mt-1 flex-shrink-0">{ item.icon }</span>
                                    <div>
                                        <h3 class="font-semibold text-lg">{ item.title }</h3>
                                        <p class="text-muted-foreground">{ item.description }</p>
                                    </div>
                                </Reveal>
                            }) }
                        </div>

                        <button
                            class="rounded-md bg-primary text-primary-foreground text-lg px-8 py-4 font-semibold hover:bg-primary/90 transition-colors"
                            onclick={Callback::from(|_: MouseEvent| scroll_to_section(Anchor::Services.id()))}
                        >
                            {"Learn More About Us"}
                        </button>
                    </Reveal>

                    <div class="space-y-8">
                        <div class="grid grid-cols-2 gap-6">
                            { for ABOUT_STATS.iter().enumerate().map(|(index, stat)| html! {
                                <Reveal transition={stat_card(index)} class="rounded-xl border bg-card text-center p-6">
                                    <div class="text-3xl font-bold text-primary mb-2">{ format!("{}{}", stat.value, stat.suffix) }</div>
                                    <div class="text-sm text-muted-foreground">{ stat.label }</div>
                                </Reveal>
                            }) }
                        </div>

                        <div class="space-y-6">
                            { for ABOUT_PILLARS.iter().map(|pillar| html! {
                                <div class="flex items-start space-x-4">
                                    <div class="p-3 bg-primary/10 rounded-lg text-xl">{ pillar.icon }</div>
                                    <div>
                                        <h3 class="font-semibold text-lg">{ pillar.title }</h3>
                                        <p class="text-muted-foreground">{ pillar.description }</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
