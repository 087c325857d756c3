use yew::prelude::*;

use crate::animation::{EnterTransition, ScrollTrigger};
use crate::components::reveal::Reveal;
use crate::content::HEAD_TRAINER;
use crate::links::Anchor;

#[function_component(TrainersSection)]
pub fn trainers_section() -> Html {
    let trainer = &HEAD_TRAINER;
    let card = EnterTransition::pop(60.0, 0.9).on_scroll(ScrollTrigger::CARD);

    html! {
        <section id={Anchor::Trainers.id()} class="py-10 bg-gradient-to-br from-background via-background to-muted/20">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal transition={EnterTransition::rise(50.0)} class="text-center space-y-4 mb-16">
                    <h2 class="text-3xl sm:text-4xl font-bold tracking-tight">
                        {"Meet Our "}<span class="text-primary">{"Expert Trainer"}</span>
                    </h2>
                    <p class="text-lg text-muted-foreground max-w-3xl mx-auto">
                        { format!("Meet {}, the passionate owner and head trainer at Vision Fitness. His expertise and dedication have helped hundreds of clients achieve their fitness goals.", trainer.name) }
                    </p>
                </Reveal>

                <Reveal transition={card} class="max-w-4xl mx-auto mb-16">
                    <div class="group rounded-xl bg-card overflow-hidden shadow hover:shadow-lg transition-shadow">
                        <div class="grid lg:grid-cols-2 gap-8">
                            <div class="relative h-80 lg:h-full overflow-hidden">
                                <img src={trainer.image} alt={trainer.name} class="w-full h-full object-cover" />
                                <div class="absolute inset-0 bg-gradient-to-t from-black/20 via-transparent to-transparent" />
                            </div>

                            <div class="p-6 lg:p-8 flex flex-col justify-center">
                                <div class="mb-6">
                                    <h3 class="text-3xl font-bold mb-2">{ trainer.name }</h3>
                                    <p class="text-xl text-primary font-semibold mb-2">{ trainer.role }</p>
                                    <p class="text-muted-foreground">{ format!("{} of experience", trainer.experience) }</p>
                                </div>

                                <p class="text-muted-foreground mb-6 leading-relaxed">{ trainer.bio }</p>

                                <div class="mb-6">
                                    <h4 class="font-semibold mb-3">{"🏅 Specialties"}</h4>
                                    <div class="flex flex-wrap gap-2">
                                        { for trainer.specialties.iter().map(|specialty| html! {
                                            <span class="rounded-full bg-primary/10 text-primary text-xs font-semibold px-3 py-1">{ *specialty }</span>
                                        }) }
                                    </div>
                                </div>

                                <div>
                                    <h4 class="font-semibold mb-3">{"★ Achievements"}</h4>
                                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-2">
                                        { for trainer.achievements.iter().map(|achievement| html! {
                                            <div class="flex items-center text-sm text-muted-foreground">
                                                <div class="w-2 h-2 bg-primary rounded-full mr-2" />
                                                { *achievement }
                                            </div>
                                        }) }
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
