use crate::utils::constants::AUTH_PREFIX;

/// `{domain}/auth/{endpoint}/{provider}`, the shape of the provider routes.
pub fn build_url(domain: &str, endpoint: &str, provider: &str) -> String {
    format!("{}/{}/{}/{}", trim(domain), AUTH_PREFIX, endpoint, provider)
}

/// `{domain}/auth/{path}`
pub fn auth_endpoint(domain: &str, path: &str) -> String {
    format!("{}/{}/{}", trim(domain), AUTH_PREFIX, path)
}

fn trim(domain: &str) -> &str {
    domain.trim_end_matches('/')
}
