use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{Testimonial, SATISFACTION_STATS, TESTIMONIALS};
use crate::links::{scroll_to_section, Anchor, open_external, MAPS_URL};

/// Avatar fallback: first letter of every word in the name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Which of the five stars are filled. A star is filled while its index is below the rating.
pub fn star_states(rating: f32) -> [bool; 5] {
    let mut stars = [false; 5];
    for (i, star) in stars.iter_mut().enumerate() {
        *star = (i as f32) < rating;
    }
    stars
}

#[derive(Properties, PartialEq)]
struct TestimonialCardProps {
    testimonial: Testimonial,
}

#[function_component(TestimonialCard)]
fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let t = &props.testimonial;
    let image_failed = use_state(|| false);
    let onerror = {
        let image_failed = image_failed.clone();
        Callback::from(move |_: Event| image_failed.set(true))
    };

    html! {
        <div class="flex-shrink-0 w-64 sm:w-72 md:w-80 lg:w-96 p-3 sm:p-4">
            <div class="h-full group rounded-xl border bg-card p-6 hover:shadow-lg transition-all duration-300 hover:-translate-y-1">
                <div class="flex items-start justify-between mb-4">
                    <div class="flex items-center space-x-3">
                        <div class="w-12 h-12 rounded-full overflow-hidden bg-muted flex items-center justify-center text-sm font-semibold">
                            if *image_failed {
                                { initials(t.name) }
                            } else {
                                <img src={t.image} alt={t.name} class="w-full h-full object-cover" {onerror} />
                            }
                        </div>
                        <div>
                            <h3 class="font-semibold text-lg">{ t.name }</h3>
                            <p class="text-sm text-muted-foreground">{ t.role }</p>
                        </div>
                    </div>
                    <span class="text-2xl text-primary/30 group-hover:text-primary transition-colors">{"❝"}</span>
                </div>
                <div class="flex items-center space-x-2 mb-3">
                    <div class="flex space-x-1">
                        { for star_states(t.rating).into_iter().map(|filled| html! {
                            <span class={if filled { "text-yellow-400" } else { "text-gray-300" }}>{"★"}</span>
                        }) }
                    </div>
                    <span class="rounded-full bg-secondary text-secondary-foreground text-xs px-2 py-0.5">{ t.category }</span>
                </div>
                <blockquote class="text-muted-foreground italic text-sm leading-relaxed">
                    { format!("\"{}\"", t.text) }
                </blockquote>
            </div>
        </div>
    }
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    let is_paused = use_state(|| false);

    let pause = {
        let is_paused = is_paused.clone();
        Callback::from(move |_: MouseEvent| is_paused.set(true))
    };
    let resume = {
        let is_paused = is_paused.clone();
        Callback::from(move |_: MouseEvent| is_paused.set(false))
    };

    let play_state = if *is_paused { "animation-play-state: paused;" } else { "animation-play-state: running;" };

    html! {
        <section class="py-24 bg-muted/30">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center space-y-4 mb-16">
                    <h2 class="text-3xl sm:text-4xl font-bold tracking-tight">
                        {"What Our "}<span class="text-primary">{"Members Say"}</span>
                    </h2>
                    <p class="text-lg text-muted-foreground max-w-3xl mx-auto">
                        {"Hear from our community of members who have transformed their lives and achieved their fitness goals with Vision Fitness."}
                    </p>
                </div>

                <div class="relative overflow-hidden mx-auto max-w-7xl">
                    // rendered twice so the loop has no visible seam
                    <div class="flex marquee py-4" style={play_state} onmouseenter={pause} onmouseleave={resume}>
                        { for TESTIMONIALS.iter().chain(TESTIMONIALS.iter()).enumerate().map(|(index, t)| html! {
                            <TestimonialCard key={format!("{}-{}", t.id, index)} testimonial={t.clone()} />
                        }) }
                    </div>
                </div>

                <div class="mt-16 grid grid-cols-2 md:grid-cols-4 gap-8">
                    { for SATISFACTION_STATS.iter().map(|(value, label)| html! {
                        <div class="text-center">
                            <div class="text-3xl font-bold text-primary mb-2">{ *value }</div>
                            <div class="text-sm text-muted-foreground">{ *label }</div>
                        </div>
                    }) }
                </div>

                <div class="mt-16 text-center">
                    <div class="bg-gradient-to-r from-primary/10 to-primary/5 rounded-2xl p-8">
                        <h3 class="text-2xl font-bold mb-4">{"Join Our Success Stories"}</h3>
                        <p class="text-muted-foreground mb-6 max-w-2xl mx-auto">
                            {"Start your fitness journey today and become part of our community of successful members who have transformed their lives."}
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center">
                            <button
                                class="bg-primary text-primary-foreground px-8 py-4 rounded-lg font-semibold hover:bg-primary/90 transition-colors"
                                onclick={Callback::from(|_: MouseEvent| scroll_to_section(Anchor::Contact.id()))}
                            >
                                {"Start Your Journey"}
                            </button>
                            <button
                                class="border border-primary text-primary px-8 py-4 rounded-lg font-semibold hover:bg-primary hover:text-primary-foreground transition-colors"
                                onclick={Callback::from(|_: MouseEvent| open_external(MAPS_URL))}
                            >
                                {"Read More Reviews"}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_the_first_letter_of_each_word() {
        assert_eq!(initials("Dua Fatima Rajput"), "DFR");
        assert_eq!(initials("Bari"), "B");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn whole_ratings_fill_that_many_stars() {
        assert_eq!(star_states(5.0), [true; 5]);
        assert_eq!(star_states(3.0), [true, true, true, false, false]);
    }

    #[test]
    fn half_ratings_round_the_last_star_up() {
        assert_eq!(star_states(4.5), [true; 5]);
        assert_eq!(star_states(0.5), [true, false, false, false, false]);
    }
}
