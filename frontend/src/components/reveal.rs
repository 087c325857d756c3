use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, Window};
use yew::prelude::*;

use crate::animation::{EnterTransition, Playback, ScrollTrigger, Trigger, Zone};

// Gives the browser one frame to paint the hidden pose before transitioning
const FRAME_MS: u32 = 20;

const LISTENED_EVENTS: [&str; 2] = ["scroll", "resize"];

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub transition: EnterTransition,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children in a div that plays `transition` on entry.
///
/// The div renders at rest. Only once the driver is attached does it get
/// hidden, so if anything is missing the content simply stays visible.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |transition| {
                let cleanup = attach(&node, *transition);
                move || {
                    if let Some(cleanup) = cleanup {
                        cleanup();
                    }
                }
            },
            props.transition,
        );
    }

    html! {
        <div ref={node} class={props.class.clone()}>
            { for props.children.iter() }
        </div>
    }
}

fn set_style(element: &HtmlElement, style: &str) {
    if element.set_attribute("style", style).is_err() {
        warn!("Could not set transition style");
    }
}

fn remove_listeners(window: &Window, listener: &Closure<dyn FnMut()>) {
    for event in LISTENED_EVENTS {
        if window
            .remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
            .is_err()
        {
            warn!("Could not remove {} listener", event);
        }
    }
}

fn viewport_height(window: &Window) -> Option<f64> {
    window.inner_height().ok()?.as_f64().filter(|h| *h > 0.0)
}

fn attach(node: &NodeRef, transition: EnterTransition) -> Option<Box<dyn FnOnce()>> {
    let element = node.cast::<HtmlElement>()?;
    let window = window()?;
    match transition.trigger {
        Trigger::Mount => {
            set_style(&element, &transition.hidden_style());
            let timeout = Timeout::new(FRAME_MS, move || {
                set_style(&element, &transition.shown_style());
            });
            Some(Box::new(move || drop(timeout)))
        }
        Trigger::Scroll(trigger) => attach_scroll(window, element, transition, trigger),
    }
}

fn attach_scroll(
    window: Window,
    element: HtmlElement,
    transition: EnterTransition,
    trigger: ScrollTrigger,
) -> Option<Box<dyn FnOnce()>> {
    viewport_height(&window)?;

    let state = Rc::new(Cell::new((Zone::Before, Playback::Hidden)));
    let update: Rc<dyn Fn()> = {
        let window = window.clone();
        let element = element.clone();
        Rc::new(move || {
            let Some(height) = viewport_height(&window) else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            let zone = Zone::locate(rect.top(), rect.bottom(), height, &trigger);
            let (last_zone, last) = state.get();
            let next = last.advance(last_zone, zone, &trigger.actions);
            state.set((zone, next));
            if next != last {
                let style = match next {
                    Playback::Shown => transition.shown_style(),
                    Playback::Hidden => transition.reversed_style(),
                };
                set_style(&element, &style);
            }
        })
    };

    let listener = {
        let update = update.clone();
        Closure::wrap(Box::new(move || update()) as Box<dyn FnMut()>)
    };
    for event in LISTENED_EVENTS {
        if window
            .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
            .is_err()
        {
            warn!("Could not listen for {}, leaving content at rest", event);
            remove_listeners(&window, &listener);
            return None;
        }
    }

    set_style(&element, &transition.hidden_style());
    let kickoff = Timeout::new(FRAME_MS, move || update());

    Some(Box::new(move || {
        drop(kickoff);
        remove_listeners(&window, &listener);
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleanup_covers_every_registered_event() {
        assert_eq!(LISTENED_EVENTS, ["scroll", "resize"]);
    }
}
