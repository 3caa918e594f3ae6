//! Query string and request URL construction
//!
//! ```text
//! <base_url>/<script>?<action>+<cache_buster>+<escaped query>
//! ```
//!
//! The query part is the `&key=value` list of the form, escaped as a whole
//! (separators included) and with `+` re-escaped to `%2B`.

mod escape;
mod form;

pub use escape::{escape, escape_plus};
pub use form::{FORM_FIELDS, KmlForm, RequestKind};

use crate::config::EndpointConfig;

/// Build the escaped query string for a KML request
///
/// # Examples
/// ```
/// use kmlquery::query::{KmlForm, build_query_string};
/// let form = KmlForm { layer: "a".into(), ..Default::default() };
/// assert!(build_query_string(&form).starts_with("%26layer%3Da%26region%3D"));
/// ```
pub fn build_query_string(form: &KmlForm) -> String {
    let raw: String = form
        .pairs()
        .iter()
        .map(|(key, value)| format!("&{}={}", key, value))
        .collect();

    escape_plus(&escape(&raw))
}

/// Build the full request URL
pub fn build_request_url(endpoint: &EndpointConfig, form: &KmlForm, cache_buster: f64) -> String {
    format!(
        "{}/{}?{}+{}+{}",
        endpoint.base_url.trim_end_matches('/'),
        endpoint.script.trim_start_matches('/'),
        endpoint.action,
        cache_buster,
        build_query_string(form)
    )
}

/// 生成 `[0, max)` 区间的随机数，用于绕过中间缓存
pub fn random_cache_buster(max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    rand::random::<f64>() * max
}
