use std::rc::Rc;

use log::{info, warn};
use web_sys::window;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    System,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "system" => Some(Theme::System),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// Order the header toggle cycles through.
    pub fn next(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
            Theme::System => Theme::Light,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "☀",
            Theme::Dark => "🌙",
            Theme::System => "💻",
        }
    }

    /// Whether dark styling applies, given the OS preference.
    pub fn is_dark(&self, system_prefers_dark: bool) -> bool {
        match self {
            Theme::Light => false,
            Theme::Dark => true,
            Theme::System => system_prefers_dark,
        }
    }
}

/// Persistence for the theme preference, a single string value.
#[cfg_attr(test, mockall::automock)]
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

pub struct LocalStorageThemeStore {
    key: &'static str,
}

impl LocalStorageThemeStore {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage() -> Option<web_sys::Storage> {
        window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

impl ThemeStore for LocalStorageThemeStore {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(self.key).ok().flatten()
    }

    fn save(&self, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(self.key, value).is_err() {
                    warn!("Failed to persist theme preference");
                }
            }
            None => warn!("localStorage unavailable, theme preference not saved"),
        }
    }
}

/// Reads the stored preference, falling back to `default` when missing or unknown.
pub fn load_theme(store: &dyn ThemeStore, default: Theme) -> Theme {
    match store.load() {
        Some(value) => Theme::parse(&value).unwrap_or_else(|| {
            warn!("Ignoring unknown stored theme '{}'", value);
            default
        }),
        None => default,
    }
}

/// Switches theme and persists the choice. Returns false if nothing changed.
pub fn change_theme(store: &dyn ThemeStore, current: Theme, next: Theme) -> bool {
    if current == next {
        return false;
    }
    store.save(next.as_str());
    true
}

fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn apply_to_document(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let result = if theme.is_dark(system_prefers_dark()) {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };
    if result.is_err() {
        warn!("Could not update document theme class");
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub set_theme: Callback<Theme>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or(config::DEFAULT_THEME)]
    pub default_theme: Theme,
    #[prop_or(config::THEME_STORAGE_KEY)]
    pub storage_key: &'static str,
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let store: Rc<dyn ThemeStore> = {
        let key = props.storage_key;
        use_memo(move |_| LocalStorageThemeStore::new(key), ())
    };

    let theme = {
        let store = store.clone();
        let default_theme = props.default_theme;
        use_state(move || load_theme(store.as_ref(), default_theme))
    };

    {
        use_effect_with_deps(
            move |theme| {
                apply_to_document(*theme);
                || ()
            },
            *theme,
        );
    }

    let set_theme = {
        let theme = theme.clone();
        Callback::from(move |next: Theme| {
            if change_theme(store.as_ref(), *theme, next) {
                info!("Theme changed to {}", next.as_str());
                theme.set(next);
            }
        })
    };

    let context = ThemeContext {
        theme: *theme,
        set_theme,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn parses_only_the_three_known_values() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("system"), Some(Theme::System));
        assert_eq!(Theme::parse("Dark"), None);
        assert_eq!(Theme::parse(""), None);
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for theme in [Theme::Light, Theme::Dark, Theme::System] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
    }

    #[test]
    fn toggle_cycles_through_every_theme() {
        let start = Theme::Light;
        assert_eq!(start.next(), Theme::Dark);
        assert_eq!(start.next().next(), Theme::System);
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn system_follows_os_preference() {
        assert!(Theme::System.is_dark(true));
        assert!(!Theme::System.is_dark(false));
        assert!(Theme::Dark.is_dark(false));
        assert!(!Theme::Light.is_dark(true));
    }

    #[test]
    fn loads_stored_theme() {
        let mut store = MockThemeStore::new();
        store.expect_load().times(1).returning(|| Some("dark".to_string()));
        assert_eq!(load_theme(&store, Theme::System), Theme::Dark);
    }

    #[test]
    fn missing_or_unknown_values_fall_back_to_default() {
        let mut empty = MockThemeStore::new();
        empty.expect_load().returning(|| None);
        assert_eq!(load_theme(&empty, Theme::System), Theme::System);

        let mut garbage = MockThemeStore::new();
        garbage.expect_load().returning(|| Some("sepia".to_string()));
        assert_eq!(load_theme(&garbage, Theme::Light), Theme::Light);
    }

    #[test]
    fn changing_theme_persists_the_new_value() {
        let mut store = MockThemeStore::new();
        store.expect_save().with(eq("dark")).times(1).return_const(());
        assert!(change_theme(&store, Theme::Light, Theme::Dark));
    }

    #[test]
    fn reselecting_the_current_theme_writes_nothing() {
        let mut store = MockThemeStore::new();
        store.expect_save().never();
        assert!(!change_theme(&store, Theme::Dark, Theme::Dark));
    }
}
