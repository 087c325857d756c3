use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::links::{scroll_to_section, Anchor};
use crate::theme::{Theme, ThemeContext};

#[derive(Properties, PartialEq)]
struct NavLinkProps {
    anchor: Anchor,
    on_navigate: Callback<Anchor>,
    #[prop_or_default]
    class: Classes,
}

#[function_component(NavLink)]
fn nav_link(props: &NavLinkProps) -> Html {
    let onclick = {
        let anchor = props.anchor;
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(anchor);
        })
    };

    html! {
        <a href={props.anchor.href()} class={props.class.clone()} {onclick}>
            { props.anchor.label() }
        </a>
    }
}

/// Hover text for the toggle, naming the current theme and the one a click picks.
fn toggle_title(theme: Theme) -> String {
    format!("Theme: {} (switch to {})", theme.as_str(), theme.next().as_str())
}

#[function_component(ThemeToggle)]
fn theme_toggle() -> Html {
    let ctx = use_context::<ThemeContext>();
    let Some(ctx) = ctx else {
        return html! {};
    };
    let next = ctx.theme.next();
    let onclick = {
        let set_theme = ctx.set_theme.clone();
        Callback::from(move |_: MouseEvent| set_theme.emit(next))
    };

    html! {
        <button
            class="h-10 w-10 rounded-full hover:bg-muted transition-colors"
            title={toggle_title(ctx.theme)}
            {onclick}
        >
            { ctx.theme.icon() }
        </button>
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let scroll_y = window
                        .as_ref()
                        .and_then(|w| w.scroll_y().ok())
                        .unwrap_or(0.0);
                    is_scrolled.set(scroll_y > config::NAV_SCROLL_THRESHOLD as f64);
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                if window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()).is_err() {
                    warn!("Could not listen for scroll, nav stays transparent");
                }
            }

            move || {
                if let Some(window) = &window {
                    if window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()).is_err() {
                        warn!("Could not remove nav scroll listener");
                    }
                }
            }
        }, ());
    }

    let navigate = {
        let menu_open = menu_open.clone();
        Callback::from(move |anchor: Anchor| {
            menu_open.set(false);
            scroll_to_section(anchor.id());
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let header_class = classes!(
        "fixed", "top-0", "inset-x-0", "z-50", "transition-colors", "duration-300",
        if *is_scrolled { "bg-background/90 backdrop-blur shadow-sm" } else { "bg-transparent" }
    );

    html! {
        <header class={header_class}>
            <nav class="container mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                <a
                    href="#home"
                    class="text-xl font-bold tracking-tight"
                    onclick={
                        let navigate = navigate.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            navigate.emit(Anchor::Home);
                        })
                    }
                >
                    {"Vision "}<span class="text-primary">{"Fitness"}</span>
                </a>

                <div class="hidden md:flex items-center space-x-6">
                    { for Anchor::ALL.iter().map(|anchor| html! {
                        <NavLink
                            anchor={*anchor}
                            on_navigate={navigate.clone()}
                            class="text-sm font-medium text-muted-foreground hover:text-primary transition-colors"
                        />
                    }) }
                    <ThemeToggle />
                </div>

                <div class="flex md:hidden items-center space-x-2">
                    <ThemeToggle />
                    <button class="burger-menu p-2" onclick={toggle_menu}>
                        <span class="block w-6 h-0.5 bg-foreground mb-1.5"></span>
                        <span class="block w-6 h-0.5 bg-foreground mb-1.5"></span>
                        <span class="block w-6 h-0.5 bg-foreground"></span>
                    </button>
                </div>
            </nav>

            if *menu_open {
                <div class="md:hidden bg-background border-t shadow-lg">
                    <div class="container mx-auto px-4 py-4 flex flex-col space-y-3">
                        { for Anchor::ALL.iter().map(|anchor| html! {
                            <NavLink
                                anchor={*anchor}
                                on_navigate={navigate.clone()}
                                class="py-2 font-medium hover:text-primary transition-colors"
                            />
                        }) }
                    </div>
                </div>
            }
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_title_names_the_next_theme() {
        assert_eq!(toggle_title(Theme::Light), "Theme: light (switch to dark)");
        assert_eq!(toggle_title(Theme::Dark), "Theme: dark (switch to system)");
        assert_eq!(toggle_title(Theme::System), "Theme: system (switch to light)");
    }
}
