use log::warn;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

pub const MAPS_URL: &str = "https://maps.app.goo.gl/F8oFxq1rKoNi9HwJ9";

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m14!1m8!1m3!1d871328.4286844431!2d73.1327263!3d31.4519431!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x391901122e11b0d5%3A0xa8e52f05b1887e8c!2sVision%20Fitness!5e0!3m2!1sen!2s!4v1756565621476!5m2!1sen!2s";

pub const WHATSAPP_NUMBER: &str = "+92 332 5010579";
pub const WHATSAPP_GREETING: &str = "Hi Vision Fitness! I'd like to know more about your memberships.";

/// In-page anchors the header and footer can jump to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Home,
    About,
    Services,
    Trainers,
    Gallery,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 6] = [
        Anchor::Home,
        Anchor::About,
        Anchor::Services,
        Anchor::Trainers,
        Anchor::Gallery,
        Anchor::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::About => "about",
            Anchor::Services => "services",
            Anchor::Trainers => "trainers",
            Anchor::Gallery => "gallery",
            Anchor::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Anchor::Home => "Home",
            Anchor::About => "About",
            Anchor::Services => "Services",
            Anchor::Trainers => "Trainers",
            Anchor::Gallery => "Gallery",
            Anchor::Contact => "Contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }
}

/// Builds a wa.me deep link. Everything but digits is stripped from the number.
pub fn whatsapp_link(number: &str, text: &str) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    if text.is_empty() {
        format!("https://wa.me/{}", digits)
    } else {
        format!("https://wa.me/{}?text={}", digits, urlencoding::encode(text))
    }
}

/// Opens `url` in a new browsing context. Nothing comes back.
pub fn open_external(url: &str) {
    let Some(window) = window() else {
        return;
    };
    if window.open_with_url_and_target(url, "_blank").is_err() {
        warn!("Could not open {}", url);
    }
}

/// Smooth-scrolls the section with the given element id into view.
pub fn scroll_to_section(id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        warn!("No section with id '{}'", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_have_distinct_ids() {
        let ids: Vec<&str> = Anchor::ALL.iter().map(|a| a.id()).collect();
        assert_eq!(ids, vec!["home", "about", "services", "trainers", "gallery", "contact"]);
        assert_eq!(Anchor::Gallery.href(), "#gallery");
    }

    #[test]
    fn whatsapp_link_keeps_only_digits() {
        assert_eq!(whatsapp_link("+92 332-501 0579", ""), "https://wa.me/923325010579");
    }

    #[test]
    fn whatsapp_link_encodes_prefilled_text() {
        assert_eq!(
            whatsapp_link(WHATSAPP_NUMBER, "Hi there & hello?"),
            "https://wa.me/923325010579?text=Hi%20there%20%26%20hello%3F"
        );
    }
}
