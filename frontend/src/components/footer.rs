use chrono::{Datelike, Utc};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::links::{open_external, scroll_to_section, whatsapp_link, Anchor, MAPS_URL, WHATSAPP_GREETING, WHATSAPP_NUMBER};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="border-t bg-muted/30">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-12 grid gap-8 md:grid-cols-3">
                <div class="space-y-3">
                    <h3 class="text-xl font-bold">{"Vision "}<span class="text-primary">{"Fitness"}</span></h3>
                    <p class="text-sm text-muted-foreground">
                        {"Premium fitness in the heart of PIA Housing Scheme, Lahore. Open 24/7."}
                    </p>
                </div>
                <div class="space-y-3">
                    <h4 class="font-semibold">{"Quick Links"}</h4>
                    <ul class="space-y-2 text-sm">
                        { for Anchor::ALL.iter().map(|anchor| {
                            let id = anchor.id();
                            html! {
                                <li>
                                    <a
                                        href={anchor.href()}
                                        class="text-muted-foreground hover:text-primary transition-colors"
                                        onclick={Callback::from(move |e: MouseEvent| {
                                            e.prevent_default();
                                            scroll_to_section(id);
                                        })}
                                    >
                                        { anchor.label() }
                                    </a>
                                </li>
                            }
                        }) }
                    </ul>
                </div>
                <div class="space-y-3 text-sm text-muted-foreground">
                    <h4 class="font-semibold text-foreground">{"Contact"}</h4>
                    <p>{"0332-5010579"}</p>
                    <p>{"info@visionfitness.com"}</p>
                    <div class="flex space-x-4 pt-2">
                        <button
                            class="hover:text-primary transition-colors"
                            onclick={Callback::from(|_: MouseEvent| open_external(MAPS_URL))}
                        >
                            {"📍 Directions"}
                        </button>
                        <button
                            class="hover:text-primary transition-colors"
                            onclick={Callback::from(|_: MouseEvent| {
                                open_external(&whatsapp_link(WHATSAPP_NUMBER, WHATSAPP_GREETING))
                            })}
                        >
                            {"💬 WhatsApp"}
                        </button>
                    </div>
                </div>
            </div>
            <div class="border-t py-6 text-center text-xs text-muted-foreground">
                { format!("© {} Vision Fitness. All rights reserved.", year) }
            </div>
        </footer>
    }
}
