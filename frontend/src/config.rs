use crate::theme::Theme;

pub const THEME_STORAGE_KEY: &str = "vision-fitness-theme";
pub const DEFAULT_THEME: Theme = Theme::System;

// Stand-in for network latency when no endpoint is configured
pub const SUBMIT_DELAY_MS: u32 = 2_000;
// How long "Message Sent!" stays up before the form is cleared
pub const CONFIRMATION_WINDOW_MS: u32 = 3_000;

// Nav switches to its solid background past this many pixels
pub const NAV_SCROLL_THRESHOLD: i32 = 80;

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Where contact form submissions go. `None` keeps the simulated sink.
///
/// Set `VISION_FITNESS_CONTACT_ENDPOINT` at build time, either a full URL or
/// a path relative to the backend URL.
pub fn contact_endpoint() -> Option<String> {
    resolve_endpoint(option_env!("VISION_FITNESS_CONTACT_ENDPOINT"))
}

pub fn resolve_endpoint(raw: Option<&str>) -> Option<String> {
    let endpoint = raw?.trim();
    if endpoint.is_empty() {
        return None;
    }
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        Some(endpoint.to_string())
    } else {
        Some(format!("{}{}", get_backend_url(), endpoint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_timings() {
        assert_eq!(SUBMIT_DELAY_MS, 2_000);
        assert_eq!(CONFIRMATION_WINDOW_MS, 3_000);
    }

    #[test]
    fn missing_or_blank_endpoint_means_none() {
        assert_eq!(resolve_endpoint(None), None);
        assert_eq!(resolve_endpoint(Some("")), None);
        assert_eq!(resolve_endpoint(Some("   ")), None);
    }

    #[test]
    fn full_urls_are_used_as_given() {
        assert_eq!(
            resolve_endpoint(Some(" https://forms.example.com/contact ")),
            Some("https://forms.example.com/contact".to_string())
        );
        assert_eq!(
            resolve_endpoint(Some("http://localhost:8080/contact")),
            Some("http://localhost:8080/contact".to_string())
        );
    }

    #[test]
    fn paths_are_joined_to_the_backend_url() {
        assert_eq!(
            resolve_endpoint(Some("/api/contact")),
            Some(format!("{}/api/contact", get_backend_url()))
        );
    }
}
