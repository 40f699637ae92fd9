use gloo_net::http::{Request, RequestBuilder};

/// GET request asking for JSON. The analysis endpoints are public, so no
/// credentials are attached.
pub fn json_get(url: &str) -> RequestBuilder {
    Request::get(url).header("Accept", "application/json")
}
