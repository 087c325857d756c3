use web_sys::MouseEvent;
use yew::prelude::*;

use crate::animation::{Ease, EnterTransition, Pose, Timeline};
use crate::components::count_up::CountUp;
use crate::components::reveal::Reveal;
use crate::content::HERO_STATS;
use crate::links::{scroll_to_section, Anchor};

/// Start delays for the hero entrance, each step overlapping the last.
struct HeroTimeline {
    title: u32,
    subtitle: u32,
    buttons: u32,
    stats: u32,
    image: u32,
    /// When the last step finishes.
    settled: u32,
}

impl HeroTimeline {
    fn layout() -> Self {
        let mut tl = Timeline::new();
        Self {
            title: tl.then(1000, 0),
            subtitle: tl.then(800, 500),
            buttons: tl.then(600, 300),
            stats: tl.then(600, 200),
            image: tl.then(1000, 800),
            settled: tl.total_ms(),
        }
    }
}

/// Gentle bob for the hero image, eased in and out at both ends.
fn floating_style() -> String {
    format!("animation: floating 3s {} infinite alternate;", Ease::Power2InOut.css())
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let tl = HeroTimeline::layout();

    let title = EnterTransition::rise(100.0).duration(1000).ease(Ease::Power3Out).delay(tl.title).on_mount();
    let subtitle = EnterTransition::rise(50.0).duration(800).delay(tl.subtitle).on_mount();
    let buttons = EnterTransition::rise(30.0).duration(600).delay(tl.buttons).on_mount();
    let stats = EnterTransition::rise(20.0).duration(600).delay(tl.stats).on_mount();
    let image = EnterTransition::pop(0.0, 0.8)
        .starting_at(Pose { x: 100.0, y: 0.0, scale: 0.8, opacity: 0.0 })
        .duration(1000)
        .ease(Ease::Power3Out)
        .delay(tl.image)
        .on_mount();

    let scroll_hint = EnterTransition::rise(20.0).duration(600).delay(tl.settled).on_mount();

    let start_journey = Callback::from(|_: MouseEvent| scroll_to_section(Anchor::Contact.id()));

    html! {
        <section id={Anchor::Home.id()} class="relative min-h-screen flex items-center justify-center pt-16 bg-gradient-to-br from-background via-background to-muted/20">
            <div class="absolute inset-0 hero-grid" />

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="space-y-8 text-center lg:text-left">
                        <div class="space-y-4">
                            <div class="inline-flex items-center space-x-2 bg-primary/10 text-primary px-4 py-2 rounded-full text-sm font-medium">
                                <span>{"★"}</span>
                                <span>{"Premium Fitness Experience"}</span>
                            </div>

                            <Reveal transition={title}>
                                <h1 class="text-4xl sm:text-5xl lg:text-6xl font-bold tracking-tight">
                                    {"Transform Your "}<span class="text-primary">{"Body"}</span>
                                    <br />
                                    {"Transform Your "}<span class="text-primary">{"Life"}</span>
                                </h1>
                            </Reveal>

                            <Reveal transition={subtitle}>
                                <p class="text-xl text-muted-foreground max-w-2xl mx-auto lg:mx-0">
                                    {"Join Vision Fitness and discover the power of transformation. Our state-of-the-art facilities and expert trainers are here to help you achieve your fitness goals."}
                                </p>
                            </Reveal>
                        </div>

                        <Reveal transition={buttons} class="flex flex-col sm:flex-row gap-4 justify-center lg:justify-start">
                            <button
                                class="inline-flex items-center justify-center rounded-md bg-primary text-primary-foreground text-lg px-8 py-4 font-semibold hover:bg-primary/90 transition-colors"
                                onclick={start_journey}
                            >
                                {"Start Your Journey →"}
                            </button>
                        </Reveal>

                        <Reveal transition={stats} class="grid grid-cols-3 gap-8 pt-8 border-t">
                            { for HERO_STATS.iter().enumerate().map(|(index, stat)| html! {
                                <div class="text-center">
                                    <div class="text-3xl font-bold text-primary mb-2">
                                        <CountUp
                                            target={stat.value}
                                            suffix={stat.suffix}
                                            delay_ms={1000 + index as u32 * 200}
                                        />
                                    </div>
                                    <div class="text-sm text-muted-foreground">{ stat.label }</div>
                                </div>
                            }) }
                        </Reveal>
                    </div>

                    <Reveal transition={image} class="relative w-full max-w-lg mx-auto lg:mx-0">
                        <div class="floating" style={floating_style()}>
                            <div class="relative w-full h-96 lg:h-[500px] rounded-2xl overflow-hidden shadow-2xl">
                                <img src="/images/hero.jpg" alt="Vision Fitness Gym" class="w-full h-full object-cover" />
                                <div class="absolute inset-0 bg-gradient-to-t from-black/20 via-transparent to-transparent" />
                            </div>
                            <div class="absolute -bottom-4 -right-4 w-24 h-24 bg-primary rounded-full flex items-center justify-center shadow-lg">
                                <div class="text-center text-white">
                                    <div class="text-2xl font-bold">{"24/7"}</div>
                                    <div class="text-xs">{"Access"}</div>
                                </div>
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>

            <div class="absolute bottom-8 inset-x-0 flex justify-center">
                <Reveal transition={scroll_hint}>
                    <div class="animate-bounce">
                        <div class="w-6 h-10 border-2 border-muted-foreground rounded-full flex justify-center">
                            <div class="w-1 h-3 bg-muted-foreground rounded-full mt-2 animate-pulse" />
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_steps_overlap_like_a_timeline() {
        let tl = HeroTimeline::layout();
        assert_eq!(
            (tl.title, tl.subtitle, tl.buttons, tl.stats, tl.image),
            (0, 500, 1000, 1400, 1200)
        );
        assert_eq!(tl.settled, 2200);
    }

    #[test]
    fn floating_loop_eases_both_ways() {
        assert_eq!(
            floating_style(),
            "animation: floating 3s cubic-bezier(0.455, 0.03, 0.515, 0.955) infinite alternate;"
        );
    }
}
