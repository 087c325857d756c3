use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::animation::count_up;

const TICK_MS: u32 = 40;

#[derive(Properties, PartialEq)]
pub struct CountUpProps {
    pub target: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or(2_000)]
    pub duration_ms: u32,
    #[prop_or_default]
    pub delay_ms: u32,
}

/// A number that counts from zero up to `target` after mount.
#[function_component(CountUp)]
pub fn count_up_number(props: &CountUpProps) -> Html {
    let value = use_state_eq(|| 0u32);

    {
        let value = value.clone();
        let (target, delay_ms, duration_ms) = (props.target, props.delay_ms, props.duration_ms);
        use_effect_with_deps(
            move |_| {
                let started = Utc::now().timestamp_millis();
                let ticker: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                let interval = {
                    let ticker = ticker.clone();
                    Interval::new(TICK_MS, move || {
                        let elapsed = (Utc::now().timestamp_millis() - started).max(0) as u32;
                        let current = count_up(target, elapsed, delay_ms, duration_ms);
                        value.set(current);
                        if current >= target {
                            // Dropped after this tick returns, never from inside it
                            let ticker = ticker.clone();
                            wasm_bindgen_futures::spawn_local(async move {
                                ticker.borrow_mut().take();
                            });
                        }
                    })
                };
                *ticker.borrow_mut() = Some(interval);
                move || {
                    ticker.borrow_mut().take();
                }
            },
            (props.target, props.delay_ms, props.duration_ms),
        );
    }

    html! {
        <>{ *value }{ props.suffix.clone() }</>
    }
}
