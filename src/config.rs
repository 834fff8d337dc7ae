//! Deployment configuration
//!
//! All relative asset and document references resolve against a base path
//! that depends on where the bundle is served from: the site root during
//! local development, a fixed sub-path on the deployed host.

/// Sub-path the site is served under when deployed.
const DEPLOY_PREFIX: &str = "/bookhouse/";

/// External collaborator API for single news records.
pub const POSTS_API: &str = "https://jsonplaceholder.typicode.com";

/// Base path for a given hostname.
pub fn base_for_host(hostname: &str) -> &'static str {
    if hostname == "localhost" || hostname == "127.0.0.1" {
        "/"
    } else {
        DEPLOY_PREFIX
    }
}

/// Base path for the current document location.
pub fn base_url() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();
    base_for_host(&hostname).to_string()
}

/// Resolve a catalog-relative asset path against the base.
pub fn asset_url(relative: &str) -> String {
    format!("{}{}", base_url(), relative.trim_start_matches('/'))
}
