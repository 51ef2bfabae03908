//! Anchor-click classification for in-app navigation interception.
//!
//! SYSTEM CONTEXT
//! ==============
//! The coordinator only intercepts same-host page links. Everything else
//! (new-tab, script, fragment, other hosts, non-web schemes) is left to the
//! browser so native behaviour is never degraded.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use url::Url;

/// Raw facts about a click on an `<a>` element, read at click time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnchorClick {
    /// Raw `href` attribute (not the resolved property).
    pub href: Option<String>,
    /// Raw `target` attribute.
    pub target: Option<String>,
    /// Ctrl/meta/shift held or a non-primary button was used.
    pub modified: bool,
}

impl AnchorClick {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: Some(href.into()), ..Self::default() }
    }

    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    #[must_use]
    pub fn modified(mut self) -> Self {
        self.modified = true;
        self
    }
}

/// Where a navigable click wants to go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationIntent {
    pub target_url: String,
    pub is_external: bool,
}

impl NavigationIntent {
    /// Capture the intent behind `click`, or `None` if the link is not a
    /// candidate for interception at all (empty, `javascript:`, `#fragment`,
    /// `_blank`, modified click).
    pub fn capture(click: &AnchorClick, current_host: &str) -> Option<Self> {
        if click.modified || opens_new_tab(click.target.as_deref()) {
            return None;
        }
        let href = click.href.as_deref()?.trim();
        if href.is_empty() || href.starts_with('#') || is_script_href(href) {
            return None;
        }
        Some(Self { target_url: href.to_owned(), is_external: is_external(href, current_host) })
    }

    pub fn should_intercept(&self) -> bool {
        !self.is_external
    }
}

fn opens_new_tab(target: Option<&str>) -> bool {
    target.is_some_and(|t| t.trim().eq_ignore_ascii_case("_blank"))
}

fn is_script_href(href: &str) -> bool {
    href.get(..11).is_some_and(|scheme| scheme.eq_ignore_ascii_case("javascript:"))
}

/// True when `href` leaves the current host.
///
/// Relative references are internal. Absolute `http(s)` URLs (including
/// protocol-relative `//host/...`) are external when their host differs from
/// `current_host`. Any other absolute scheme (`mailto:`, `tel:`) is external.
pub fn is_external(href: &str, current_host: &str) -> bool {
    let href = href.trim();
    let parsed = if href.starts_with("//") { Url::parse(&format!("https:{href}")) } else { Url::parse(href) };
    let Ok(url) = parsed else {
        return false;
    };
    match url.scheme() {
        "http" | "https" => url
            .host_str()
            .map_or(true, |host| !host.eq_ignore_ascii_case(strip_port(current_host))),
        _ => true,
    }
}

fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        return host.find(']').map_or(host, |end| &host[..=end]);
    }
    host.split(':').next().unwrap_or(host)
}
