//! Address handling and page state for the simulated browser.

/// Page shown when the window opens without an address.
pub const DEFAULT_URL: &str = "https://es.wikipedia.org/wiki/React";

/// Hosts known to refuse being framed. Matched as substrings of the whole address.
pub const BLOCKED_HOSTS: [&str; 7] = [
    "github.com",
    "linkedin.com",
    "twitter.com",
    "x.com",
    "facebook.com",
    "instagram.com",
    "google.com",
];

/// Simulated load time for frameable pages, in milliseconds.
pub const LOAD_DELAY_MS: u64 = 1_500;
/// Time the frame stays blank during a refresh, in milliseconds.
pub const REFRESH_DELAY_MS: u64 = 100;

pub const IFRAME_SANDBOX: &str = "allow-same-origin allow-scripts allow-popups allow-forms";

/// Turns address-bar input into a loadable URL.
///
/// Anything not starting with `http` or `mailto` gets an `https://` prefix.
pub fn normalize_address(input: &str) -> String {
    let input = input.trim();
    if input.starts_with("http") || input.starts_with("mailto") {
        input.to_string()
    } else {
        format!("https://{input}")
    }
}

pub fn is_blocked(url: &str) -> bool {
    BLOCKED_HOSTS.iter().any(|host| url.contains(host))
}

/// Host part of `url`, without credentials or port.
pub fn hostname(url: &str) -> &str {
    let rest = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    let authority = rest
        .split(|c| matches!(c, '/' | '?' | '#'))
        .next()
        .unwrap_or(rest);
    let host = authority
        .rsplit_once('@')
        .map(|(_, host)| host)
        .unwrap_or(authority);
    match host.rsplit_once(':') {
        Some((name, port)) if !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()) => name,
        _ => host,
    }
}

/// What the browser window shows.
///
/// `url` is the loaded page; `address` is the editable address-bar text, which only replaces
/// `url` on submit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageState {
    pub url: String,
    pub address: String,
    pub loading: bool,
    pub blocked: bool,
}

impl PageState {
    pub fn new(url: impl Into<String>) -> Self {
        let mut page = Self::default();
        page.load(url.into());
        page
    }

    /// Points the frame at `url`. Returns whether a simulated load has started.
    pub fn load(&mut self, url: String) -> bool {
        self.blocked = is_blocked(&url);
        self.loading = !self.blocked;
        self.address = url.clone();
        self.url = url;
        self.loading
    }

    /// Loads whatever is typed in the address bar.
    pub fn submit_address(&mut self) -> bool {
        let target = normalize_address(&self.address);
        self.load(target)
    }

    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    /// The frame reported an error; show the blocked panel instead.
    pub fn frame_failed(&mut self) {
        self.blocked = true;
        self.loading = false;
    }

    /// Blanks the frame and returns the URL to reload once the refresh delay has passed.
    pub fn begin_refresh(&mut self) -> String {
        self.loading = true;
        self.blocked = false;
        std::mem::take(&mut self.url)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bare_hosts_get_https() {
        assert_eq!(normalize_address("vitejs.dev"), "https://vitejs.dev");
        assert_eq!(normalize_address(" http://example.org "), "http://example.org");
        assert_eq!(normalize_address("mailto:hola@azul.dev"), "mailto:hola@azul.dev");
    }

    #[test]
    fn denylist_matches_substrings() {
        assert!(is_blocked("https://github.com/azul"));
        assert!(is_blocked("https://www.linkedin.com/in/azul"));
        assert!(!is_blocked(DEFAULT_URL));
        // Substring matching also catches lookalike hosts.
        assert!(is_blocked("https://box.com"));
    }

    #[test]
    fn hostname_strips_scheme_path_and_port() {
        assert_eq!(hostname("https://github.com/azul/repo?tab=1"), "github.com");
        assert_eq!(hostname("http://user:pw@localhost:8080/"), "localhost");
        assert_eq!(hostname("www.google.com"), "www.google.com");
    }

    #[test]
    fn blocked_pages_skip_the_loading_overlay() {
        let page = PageState::new("https://twitter.com/azul");
        assert!(page.blocked);
        assert!(!page.loading);

        let mut page = PageState::new(DEFAULT_URL);
        assert!(page.loading);
        page.finish_loading();
        assert!(!page.loading && !page.blocked);
    }

    #[test]
    fn submit_loads_the_typed_address() {
        let mut page = PageState::new(DEFAULT_URL);
        page.address = "threejs.org".to_string();
        assert!(page.submit_address());
        assert_eq!(page.url, "https://threejs.org");
        assert_eq!(page.address, "https://threejs.org");
    }

    #[test]
    fn refresh_blanks_then_returns_the_same_page() {
        let mut page = PageState::new("https://css-tricks.com/");
        page.frame_failed();
        let reload = page.begin_refresh();
        assert_eq!(reload, "https://css-tricks.com/");
        assert_eq!(page.url, "");
        assert!(page.loading && !page.blocked);
        assert_eq!(page.address, "https://css-tricks.com/");
    }
}
