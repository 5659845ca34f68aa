//! Backend address resolution.

/// Environment variable consulted when no backend address is passed explicitly.
pub const BACKEND_URL_ENV: &str = "SITE_CHECKS_BACKEND_URL";

/// Resolve the scoring service base address.
///
/// Order: explicit address, then `SITE_CHECKS_BACKEND_URL`, then the page's
/// own origin, then the empty string. Resolve once at startup.
pub fn resolve_backend_url(explicit: Option<&str>, page_origin: Option<&str>) -> String {
    let from_env = std::env::var(BACKEND_URL_ENV).ok();
    pick_backend_url(explicit, from_env.as_deref(), page_origin)
}

/// Pure resolution over already-read settings. Empty values are skipped.
pub fn pick_backend_url(
    explicit: Option<&str>,
    from_env: Option<&str>,
    page_origin: Option<&str>,
) -> String {
    [explicit, from_env, page_origin]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .unwrap_or_default()
        .to_string()
}
