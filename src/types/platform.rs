use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Icon used for every user-added platform.
pub const CUSTOM_ICON: &str = "globe";

/// A named, navigable URL shown in the sidebar.
///
/// `id` is the sole identity key: two entries with the same name and url
/// but different ids are different entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformEntry {
    #[serde(default = "new_platform_id")]
    pub id: String,
    pub name: String,
    pub url: String,
    pub icon: String,
    #[serde(default)]
    pub is_custom: bool,
}

impl PartialEq for PlatformEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PlatformEntry {}

impl PlatformEntry {
    /// Creates a built-in entry with a freshly generated id.
    pub fn built_in(name: &str, url: &str, icon: &str) -> Self {
        Self {
            id: new_platform_id(),
            name: name.to_string(),
            url: url.to_string(),
            icon: icon.to_string(),
            is_custom: false,
        }
    }

    /// Creates a user-added entry. The url is normalized with [`normalize_url`].
    pub fn custom(name: &str, url: &str) -> Self {
        Self {
            id: new_platform_id(),
            name: name.to_string(),
            url: normalize_url(url),
            icon: CUSTOM_ICON.to_string(),
            is_custom: true,
        }
    }

    pub fn is_built_in(&self) -> bool {
        !self.is_custom
    }
}

/// Generates a new opaque platform id.
pub fn new_platform_id() -> String {
    Uuid::new_v4().to_string()
}

/// Prefixes `https://` unless the input already starts with `http://` or `https://`.
///
/// No other validation happens here; a malformed address is accepted and
/// simply fails to load later.
pub fn normalize_url(input: &str) -> String {
    if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    }
}

/// Whether two addresses name the same page.
///
/// Scheme and host compare case-insensitively, `http` counts as `https`, and
/// trailing slashes on the path are ignored, so `https://www.netflix.com`
/// matches the `https://www.netflix.com/` an engine reports back.
pub fn same_page(a: &str, b: &str) -> bool {
    page_key(a) == page_key(b)
}

fn page_key(url: &str) -> String {
    let url = url.trim();
    let (scheme, rest) = match url.split_once("://") {
        Some((scheme, rest)) => (scheme.to_ascii_lowercase(), rest),
        None => ("https".to_string(), url),
    };
    let scheme = if scheme == "http" { "https".to_string() } else { scheme };
    let (host, tail) = match rest.find(|c: char| matches!(c, '/' | '?' | '#')) {
        Some(i) => rest.split_at(i),
        None => (rest, ""),
    };
    let (path, query) = match tail.find(|c: char| matches!(c, '?' | '#')) {
        Some(i) => tail.split_at(i),
        None => (tail, ""),
    };
    format!(
        "{}://{}{}{}",
        scheme,
        host.to_ascii_lowercase(),
        path.trim_end_matches('/'),
        query
    )
}

/// The fixed table of built-in streaming services, in display order.
pub const BUILT_IN_PLATFORMS: [(&str, &str, &str); 7] = [
    ("Prime Video", "https://www.primevideo.com", "play.rectangle.fill"),
    ("Netflix", "https://www.netflix.com", "tv.fill"),
    ("JioCinema", "https://www.jiocinema.com", "play.circle.fill"),
    ("Disney+ Hotstar", "https://www.hotstar.com", "star.fill"),
    ("Zee5", "https://www.zee5.com", "play.square.fill"),
    ("SonyLiv", "https://www.sonyliv.com", "rectangle.stack.fill"),
    ("Airtel XStream", "https://www.airtelxstream.in", "antenna.radiowaves.left.and.right"),
];

/// Builds the built-in entries with fresh ids.
pub fn default_platforms() -> Vec<PlatformEntry> {
    BUILT_IN_PLATFORMS
        .iter()
        .map(|(name, url, icon)| PlatformEntry::built_in(name, url, icon))
        .collect()
}
