use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::info;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::animation::{EnterTransition, ScrollTrigger};
use crate::components::reveal::Reveal;
use crate::config;
use crate::contact::form::{ContactFlow, FormField, Rejection, SubmissionStatus};
use crate::contact::sink::{self, ContactSink, SubmitError};
use crate::content::{ADDRESS_LINES, CONTACT_CHANNELS, DIRECTIONS, MEMBERSHIP_PLANS};
use crate::links::{open_external, whatsapp_link, Anchor, MAPS_URL, MAP_EMBED_URL, WHATSAPP_GREETING, WHATSAPP_NUMBER};

pub enum ContactMsg {
    Edit(FormField, String),
    Submit,
    Delivered(Result<(), SubmitError>),
    ConfirmationElapsed,
    DismissFailure,
}

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    #[prop_or(config::CONFIRMATION_WINDOW_MS)]
    pub confirmation_ms: u32,
}

pub struct ContactSection {
    flow: ContactFlow,
    sink: Rc<dyn ContactSink>,
}

impl Component for ContactSection {
    type Message = ContactMsg;
    type Properties = ContactSectionProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            flow: ContactFlow::new(),
            sink: Rc::from(sink::default_sink()),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::Edit(field, value) => self.flow.edit(field, value),
            ContactMsg::Submit => match self.flow.submit() {
                Ok(form) => {
                    let sink = self.sink.clone();
                    ctx.link().send_future(async move {
                        ContactMsg::Delivered(sink::deliver(sink.as_ref(), form).await)
                    });
                    true
                }
                Err(Rejection::MissingFields(fields)) => {
                    // The browser's required check normally catches this first
                    let names: Vec<&str> = fields.iter().map(|f| f.label()).collect();
                    gloo_console::warn!(format!("Submit ignored, missing: {}", names.join(", ")));
                    false
                }
                Err(Rejection::Busy) => false,
            },
            ContactMsg::Delivered(result) => {
                let delivered = result.is_ok();
                let changed = self.flow.resolve(result);
                if changed && delivered {
                    let window_ms = ctx.props().confirmation_ms;
                    ctx.link().send_future(async move {
                        TimeoutFuture::new(window_ms).await;
                        ContactMsg::ConfirmationElapsed
                    });
                }
                changed
            }
            ContactMsg::ConfirmationElapsed => {
                let reset = self.flow.confirmation_elapsed();
                if reset {
                    info!("Contact form reset");
                }
                reset
            }
            ContactMsg::DismissFailure => self.flow.dismiss_failure(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let header = EnterTransition::rise(50.0);
        let form_panel = EnterTransition::slide(-50.0).duration(1000);
        let map_panel = EnterTransition::rise(30.0);

        html! {
            <section id={Anchor::Contact.id()} class="py-24 bg-gradient-to-br from-background via-background to-muted/20">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                    <Reveal transition={header} class="text-center space-y-4 mb-16">
                        <h2 class="text-3xl sm:text-4xl font-bold tracking-tight">
                            {"Get in "}<span class="text-primary">{"Touch"}</span>
                        </h2>
                        <p class="text-lg text-muted-foreground max-w-3xl mx-auto">
                            {"Ready to start your fitness journey? Contact us today to learn more about our membership options and schedule your first session."}
                        </p>
                    </Reveal>

                    <div class="grid lg:grid-cols-2 gap-12 xl:gap-16">
                        <Reveal transition={form_panel} class="space-y-8">
                            <div class="rounded-xl shadow-xl bg-gradient-to-br from-background to-muted/30 p-6">
                                <h3 class="text-2xl font-semibold mb-2">{"💬 Send us a Message"}</h3>
                                <p class="text-muted-foreground mb-6">
                                    {"Fill out the form below and we'll get back to you within 24 hours."}
                                </p>
                                { self.view_form_body(ctx) }
                            </div>
                        </Reveal>

                        <div class="space-y-6 lg:space-y-8">
                            { self.view_channels() }
                            { self.view_plans() }
                        </div>
                    </div>

                    <Reveal transition={map_panel} class="mt-16">
                        { self.view_map() }
                    </Reveal>
                </div>
            </section>
        }
    }
}

impl ContactSection {
    fn view_form_body(&self, ctx: &Context<Self>) -> Html {
        match self.flow.status() {
            SubmissionStatus::Submitted => html! {
                <div class="text-center py-12">
                    <div class="w-20 h-20 bg-green-100 rounded-full flex items-center justify-center mx-auto mb-6 text-4xl text-green-600">
                        {"✓"}
                    </div>
                    <h3 class="text-2xl font-semibold mb-2 text-green-600">{"Message Sent!"}</h3>
                    <p class="text-muted-foreground">
                        {"Thank you for contacting us. We'll get back to you soon!"}
                    </p>
                </div>
            },
            status => {
                let onsubmit = ctx.link().callback(|e: SubmitEvent| {
                    e.prevent_default();
                    ContactMsg::Submit
                });
                let submitting = *status == SubmissionStatus::Submitting;

                html! {
                    <form {onsubmit} class="space-y-6">
                        if let SubmissionStatus::Failed { reason } = status {
                            <div class="rounded-lg border border-red-300 bg-red-50 text-red-700 p-4 space-y-3">
                                <p class="font-semibold">{"Your message could not be sent."}</p>
                                <p class="text-sm">{ reason.clone() }</p>
                                <div class="flex gap-3">
                                    <button type="submit" class="rounded-md bg-red-600 text-white px-4 py-2 text-sm font-semibold">
                                        {"Try Again"}
                                    </button>
                                    <button
                                        type="button"
                                        class="rounded-md border border-red-300 px-4 py-2 text-sm"
                                        onclick={ctx.link().callback(|_: MouseEvent| ContactMsg::DismissFailure)}
                                    >
                                        {"Edit Message"}
                                    </button>
                                </div>
                            </div>
                        }
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                            { self.view_input(ctx, FormField::Name, "text", "John Doe", "👤") }
                            { self.view_input(ctx, FormField::Email, "email", "john@example.com", "✉") }
                        </div>
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                            { self.view_input(ctx, FormField::Phone, "tel", "(555) 123-4567", "📞") }
                            { self.view_input(ctx, FormField::Subject, "text", "Membership inquiry", "📅") }
                        </div>
                        <div class="space-y-2">
                            <label for="message" class="flex items-center space-x-2 font-medium">
                                <span>{"💬"}</span><span>{ FormField::Message.label() }</span>
                            </label>
                            <textarea
                                id="message"
                                name="message"
                                rows="5"
                                required=true
                                placeholder="Tell us about your fitness goals..."
                                class="w-full rounded-md border bg-background px-3 py-2 resize-none"
                                value={self.flow.form().message.clone()}
                                disabled={submitting}
                                oninput={ctx.link().callback(|e: InputEvent| {
                                    let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                                    ContactMsg::Edit(FormField::Message, input.value())
                                })}
                            />
                        </div>
                        <button
                            type="submit"
                            class="w-full h-12 rounded-md bg-primary text-primary-foreground text-lg font-semibold disabled:opacity-60"
                            disabled={submitting}
                        >
                            if submitting {
                                <span class="flex items-center justify-center space-x-2">
                                    <span class="w-5 h-5 border-2 border-current border-t-transparent rounded-full animate-spin" />
                                    <span>{"Sending..."}</span>
                                </span>
                            } else {
                                <span>{"Send Message ➤"}</span>
                            }
                        </button>
                    </form>
                }
            }
        }
    }

    fn view_input(&self, ctx: &Context<Self>, field: FormField, kind: &'static str, placeholder: &'static str, icon: &'static str) -> Html {
        let name = field.label().to_lowercase().replace(' ', "-");
        let submitting = *self.flow.status() == SubmissionStatus::Submitting;
        html! {
            <div class="space-y-2">
                <label for={name.clone()} class="flex items-center space-x-2 font-medium">
                    <span>{ icon }</span><span>{ field.label() }</span>
                </label>
                <input
                    id={name.clone()}
                    name={name}
                    type={kind}
                    placeholder={placeholder}
                    required={field.is_required()}
                    class="w-full h-12 rounded-md border bg-background px-3"
                    value={self.flow.form().get(field).to_string()}
                    disabled={submitting}
                    oninput={ctx.link().callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        ContactMsg::Edit(field, input.value())
                    })}
                />
            </div>
        }
    }

    fn view_channels(&self) -> Html {
        html! {
            <div class="space-y-3 lg:space-y-4">
                { for CONTACT_CHANNELS.iter().enumerate().map(|(index, channel)| {
                    let transition = EnterTransition::pop(30.0, 0.9)
                        .duration(600)
                        .stagger(index, 100)
                        .on_scroll(ScrollTrigger::CARD);
                    let onclick = channel.link.map(|url| Callback::from(move |_: MouseEvent| open_external(url)));
                    let clickable = onclick.is_some();
                    html! {
                        <Reveal {transition}>
                            <div
                                class={classes!(
                                    "rounded-xl", "border", "bg-card", "p-4", "lg:p-6", "hover:shadow-lg", "transition-all", "duration-300", "hover:-translate-y-1",
                                    clickable.then(|| "cursor-pointer")
                                )}
                                {onclick}
                            >
                                <div class="flex items-start space-x-3 lg:space-x-4">
                                    <div class={classes!("p-2", "lg:p-3", "rounded-lg", "text-xl", channel.accent)}>{ channel.icon }</div>
                                    <div>
                                        <h3 class="font-semibold text-base lg:text-lg mb-1">{ channel.title }</h3>
                                        <p class="text-primary font-medium mb-1 text-sm lg:text-base">{ channel.details }</p>
                                        <p class="text-xs lg:text-sm text-muted-foreground">{ channel.description }</p>
                                    </div>
                                </div>
                            </div>
                        </Reveal>
                    }
                }) }
                <button
                    class="w-full rounded-xl bg-green-600 text-white font-semibold py-4 hover:bg-green-700 transition-colors"
                    onclick={Callback::from(|_: MouseEvent| {
                        open_external(&whatsapp_link(WHATSAPP_NUMBER, WHATSAPP_GREETING))
                    })}
                >
                    {"💬 Chat with us on WhatsApp"}
                </button>
            </div>
        }
    }

    fn view_plans(&self) -> Html {
        html! {
            <div class="rounded-xl border bg-card shadow-lg p-6">
                <h3 class="text-xl font-semibold mb-4">{"★ Membership Plans"}</h3>
                <div class="space-y-3">
                    { for MEMBERSHIP_PLANS.iter().enumerate().map(|(index, plan)| {
                        let transition = EnterTransition::pop(40.0, 0.95)
                            .duration(700)
                            .stagger(index, 150)
                            .on_scroll(ScrollTrigger::CARD);
                        html! {
                            <Reveal {transition} class="flex items-center justify-between p-4 border rounded-lg hover:bg-muted/50 transition-colors">
                                <div class="flex items-center space-x-3">
                                    if plan.popular {
                                        <span class="rounded-full bg-primary text-primary-foreground text-xs font-semibold px-2 py-1">{"Most Popular"}</span>
                                    }
                                    <div>
                                        <h4 class="font-semibold">{ plan.name }</h4>
                                        <div class="flex items-baseline space-x-1">
                                            <span class="text-2xl font-bold text-primary">{ plan.price }</span>
                                            <span class="text-muted-foreground">{ plan.period }</span>
                                        </div>
                                    </div>
                                </div>
                                <ul class="text-right text-sm text-muted-foreground space-y-1">
                                    { for plan.features.iter().take(2).map(|feature| html! { <li>{ *feature }</li> }) }
                                </ul>
                            </Reveal>
                        }
                    }) }
                </div>
                <button class="w-full mt-4 rounded-md border py-2 font-medium hover:bg-muted transition-colors">
                    {"View All Plans"}
                </button>
            </div>
        }
    }

    fn view_map(&self) -> Html {
        let open_maps = Callback::from(|_: MouseEvent| open_external(MAPS_URL));
        html! {
            <div class="rounded-xl border bg-card shadow-xl p-6 space-y-4">
                <h3 class="text-xl font-semibold">{"📍 Find Us"}</h3>
                <div class="aspect-video rounded-lg overflow-hidden border shadow-lg">
                    <iframe
                        src={MAP_EMBED_URL}
                        title="Vision Fitness Location"
                        loading="lazy"
                        referrerpolicy="no-referrer-when-downgrade"
                        allowfullscreen=true
                        style="border: 0;"
                        class="w-full h-full"
                    />
                </div>
                <div class="grid md:grid-cols-2 gap-6">
                    <div class="space-y-3">
                        <h4 class="font-semibold text-lg">{"Our Location"}</h4>
                        <div class="space-y-2 text-muted-foreground">
                            { for ADDRESS_LINES.iter().map(|line| html! { <p>{ *line }</p> }) }
                        </div>
                    </div>
                    <div class="space-y-3">
                        <h4 class="font-semibold text-lg">{"Getting Here"}</h4>
                        <div class="space-y-2 text-muted-foreground">
                            { for DIRECTIONS.iter().map(|line| html! { <p>{ format!("• {}", line) }</p> }) }
                        </div>
                    </div>
                </div>
                <div class="flex flex-col sm:flex-row gap-4 pt-4">
                    <button class="flex-1 rounded-md bg-primary text-primary-foreground py-3 font-semibold" onclick={open_maps.clone()}>
                        {"📍 Open in Google Maps"}
                    </button>
                    <button class="flex-1 rounded-md border py-3 font-semibold" onclick={open_maps}>
                        {"📍 Get Directions"}
                    </button>
                </div>
            </div>
        }
    }
}
