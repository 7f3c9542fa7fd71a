use crate::config::ApiConfig;
use crate::tools::descriptor::{EndpointDescriptor, HttpMethod};
use crate::tools::error::ToolError;
use reqwest::Url;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderName, HeaderValue};

/// Fully assembled outbound call. Inputs always travel in the query string, so there is
/// no body whatever the method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(HeaderName, HeaderValue)>,
}

pub fn build_request(
    config: &ApiConfig,
    descriptor: &EndpointDescriptor,
    params: &[(&'static str, String)],
) -> Result<HttpRequest, ToolError> {
    let url = format!(
        "{}{}{}",
        config.base_url.trim_end_matches('/'),
        descriptor.path,
        query_string(params)
    );

    let parsed = Url::parse(&url)
        .map_err(|err| ToolError::RequestConstruction(format!("invalid URL {url:?}: {err}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ToolError::RequestConstruction(format!(
            "unsupported URL scheme: {}",
            parsed.scheme()
        )));
    }

    let mut headers = vec![(ACCEPT, HeaderValue::from_static("application/json"))];
    if let Some(token) = &config.bearer_token {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
            ToolError::RequestConstruction("bearer token is not a valid header value".to_string())
        })?;
        value.set_sensitive(true);
        headers.push((AUTHORIZATION, value));
    }

    Ok(HttpRequest {
        method: descriptor.method,
        url,
        headers,
    })
}

fn query_string(params: &[(&'static str, String)]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect();
    format!("?{}", pairs.join("&"))
}
