//! Frontend configuration

use cristal_core::store::CookieAttributes;

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Query-parameter error flag set when a session expires mid-use
    pub const ERROR_TOKEN_EXPIRED: &'static str = "token_expired";
}

/// Base URL for API calls, derived from the window origin
pub fn api_base_url() -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{origin}/api")
}

/// Cookie policy for persisted credentials: root path, strict same-site,
/// secure whenever the page itself is served over HTTPS (i.e. everywhere
/// except plain-HTTP local development).
pub fn cookie_policy() -> CookieAttributes {
    let https = web_sys::window()
        .and_then(|w| w.location().protocol().ok())
        .map(|protocol| protocol == "https:")
        .unwrap_or(true);
    CookieAttributes::strict(https)
}
