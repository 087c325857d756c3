use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{GalleryItem, GALLERY_FILTERS, GALLERY_ITEMS};
use crate::links::Anchor;

const ALL_TAG: &str = "all";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryFilter<'a> {
    All,
    Tag(&'a str),
}

impl<'a> GalleryFilter<'a> {
    pub fn from_tag(tag: &'a str) -> Self {
        if tag == ALL_TAG {
            GalleryFilter::All
        } else {
            GalleryFilter::Tag(tag)
        }
    }

    pub fn tag(&self) -> &'a str {
        match self {
            GalleryFilter::All => ALL_TAG,
            GalleryFilter::Tag(tag) => *tag,
        }
    }

    pub fn matches(&self, item: &GalleryItem) -> bool {
        match self {
            GalleryFilter::All => true,
            GalleryFilter::Tag(tag) => item.category == *tag,
        }
    }
}

/// Items the filter lets through, in their original order.
pub fn filter_items<'i>(items: &'i [GalleryItem], filter: &GalleryFilter) -> Vec<&'i GalleryItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Properties, PartialEq)]
struct GalleryCardProps {
    item: GalleryItem,
}

#[function_component(GalleryCard)]
fn gallery_card(props: &GalleryCardProps) -> Html {
    let item = &props.item;
    html! {
        <div class="group rounded-xl border bg-card overflow-hidden hover:shadow-lg transition-all duration-300 hover:-translate-y-1">
            <div class="relative aspect-[4/3] overflow-hidden">
                <img
                    src={item.image}
                    alt={item.title}
                    loading="lazy"
                    class="w-full h-full object-cover transition-all duration-500 saturate-50 group-hover:saturate-100"
                />
                <div class="absolute top-4 right-4 opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                    <div class="w-8 h-8 bg-white/80 backdrop-blur-sm rounded-full flex items-center justify-center group-hover:bg-red-500 transition-colors duration-300">
                        {"♥"}
                    </div>
                </div>
                <div class="absolute top-4 left-4">
                    <span class="rounded-full bg-secondary text-secondary-foreground text-xs font-semibold px-3 py-1">
                        { capitalize(item.category) }
                    </span>
                </div>
            </div>
            <div class="p-4">
                <h3 class="font-semibold text-lg mb-2 group-hover:text-primary transition-colors">{ item.title }</h3>
                <p class="text-sm text-muted-foreground">{ item.description }</p>
            </div>
        </div>
    }
}

#[function_component(GallerySection)]
pub fn gallery_section() -> Html {
    // Re-selecting the current filter is a no-op, not a re-render
    let active = use_state_eq(|| GalleryFilter::All);

    let visible = filter_items(GALLERY_ITEMS, &active);

    html! {
        <section id={Anchor::Gallery.id()} class="py-5">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center space-y-4 mb-16">
                    <h2 class="text-3xl sm:text-4xl font-bold tracking-tight">
                        {"Our "}<span class="text-primary">{"Gallery"}</span>
                    </h2>
                    <p class="text-lg text-muted-foreground max-w-3xl mx-auto">
                        {"Take a virtual tour of our state-of-the-art facilities and see what makes Vision Fitness the premier choice for your fitness journey."}
                    </p>
                </div>

                <div class="flex flex-wrap justify-center gap-4 mb-12">
                    { for GALLERY_FILTERS.iter().map(|option| {
                        let filter = GalleryFilter::from_tag(option.tag);
                        let selected = *active == filter;
                        let onclick = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| {
                                if *active != filter {
                                    info!("Gallery filter set to {}", filter.tag());
                                }
                                active.set(filter);
                            })
                        };
                        html! {
                            <button
                                key={option.tag}
                                class={classes!(
                                    "rounded-full", "px-5", "py-2", "text-sm", "font-medium", "border", "transition-colors",
                                    if selected { "bg-primary text-primary-foreground border-primary" } else { "bg-transparent hover:bg-muted" }
                                )}
                                {onclick}
                            >
                                { option.label }
                            </button>
                        }
                    }) }
                </div>

                if visible.is_empty() {
                    <p class="text-center text-muted-foreground py-16">
                        {"Nothing to show in this category yet."}
                    </p>
                } else {
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                        { for visible.into_iter().map(|item| html! {
                            <GalleryCard key={item.id} item={item.clone()} />
                        }) }
                    </div>
                }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[&GalleryItem]) -> Vec<u32> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn all_returns_every_item_in_order() {
        let result = filter_items(GALLERY_ITEMS, &GalleryFilter::All);
        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn gym_yields_the_two_gym_items_in_order() {
        let result = filter_items(GALLERY_ITEMS, &GalleryFilter::Tag("gym"));
        assert_eq!(ids(&result), vec![1, 6]);
        assert!(result.iter().all(|item| item.category == "gym"));
    }

    #[test]
    fn facilities_filter_finds_both_facility_items() {
        let result = filter_items(GALLERY_ITEMS, &GalleryFilter::from_tag("facilities"));
        assert_eq!(ids(&result), vec![4, 7]);
    }

    #[test]
    fn training_item_only_shows_under_all() {
        assert!(GALLERY_FILTERS.iter().all(|option| option.tag != "training"));
        assert!(ids(&filter_items(GALLERY_ITEMS, &GalleryFilter::All)).contains(&2));
    }

    #[test]
    fn every_tag_yields_exactly_its_subsequence() {
        for option in GALLERY_FILTERS {
            let filter = GalleryFilter::from_tag(option.tag);
            let expected: Vec<u32> = GALLERY_ITEMS
                .iter()
                .filter(|item| option.tag == "all" || item.category == option.tag)
                .map(|item| item.id)
                .collect();
            assert_eq!(ids(&filter_items(GALLERY_ITEMS, &filter)), expected);
        }
    }

    #[test]
    fn unmatched_tag_yields_nothing() {
        assert!(filter_items(GALLERY_ITEMS, &GalleryFilter::Tag("sauna")).is_empty());
        assert!(filter_items(&[], &GalleryFilter::All).is_empty());
    }

    #[test]
    fn filtering_twice_gives_the_same_result() {
        let filter = GalleryFilter::from_tag("classes");
        let first = filter_items(GALLERY_ITEMS, &filter);
        let second = filter_items(GALLERY_ITEMS, &filter);
        assert_eq!(first, second);
        assert_eq!(ids(&first), vec![3, 5]);
    }

    #[test]
    fn all_tag_maps_to_the_all_filter() {
        assert_eq!(GalleryFilter::from_tag("all"), GalleryFilter::All);
        assert_eq!(GalleryFilter::from_tag("gym").tag(), "gym");
        assert_eq!(GalleryFilter::All.tag(), "all");
    }

    #[test]
    fn badges_are_capitalized() {
        assert_eq!(capitalize("facilities"), "Facilities");
        assert_eq!(capitalize(""), "");
    }
}
