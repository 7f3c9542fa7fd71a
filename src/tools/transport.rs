use crate::tools::error::ToolError;
use crate::tools::request::HttpRequest;
use reqwest::blocking::Client;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Sends exactly one request per call. Any completed exchange, 4xx and 5xx included, is
/// an `Ok`; only a failure to complete the exchange is an `Err`.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ToolError>;
}

/// Blocking reqwest client with its default timeout and redirect policy.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, ToolError> {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ToolError> {
        let mut builder = self.client.request(request.method.into(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|err| ToolError::ResponseBody(err.to_string()))?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::tools::descriptor::{EndpointDescriptor, HttpMethod, ParamSpec, ResponseShape};
    use crate::tools::request::build_request;
    use httpmock::Method::{GET, PUT};
    use httpmock::MockServer;

    const RANDOM: EndpointDescriptor = EndpointDescriptor {
        name: "get_quote_random",
        description: "random",
        method: HttpMethod::Get,
        path: "/quote/random",
        params: &[ParamSpec::string("language", "Language")],
        shape: ResponseShape::TypedQuote,
    };

    const PUT_QSHOW: EndpointDescriptor = EndpointDescriptor {
        name: "put_qshow",
        description: "create",
        method: HttpMethod::Put,
        path: "/qshow",
        params: &[ParamSpec::string("title", "Qshow title").required()],
        shape: ResponseShape::GenericObject,
    };

    #[test]
    fn sends_headers_and_query() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/quote/random")
                .query_param("language", "en")
                .header("accept", "application/json")
                .header("authorization", "Bearer tok");
            then.status(200).body(r#"{"ok":true}"#);
        });

        let config = ApiConfig::new(server.base_url(), Some("tok".to_string()));
        let request =
            build_request(&config, &RANDOM, &[("language", "en".to_string())]).expect("request");
        let response = HttpTransport::new()
            .expect("transport")
            .execute(&request)
            .expect("response");

        mock.assert();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, br#"{"ok":true}"#);
    }

    #[test]
    fn error_status_is_still_a_response() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PUT).path("/qshow").query_param("title", "Mine");
            then.status(500).body("boom");
        });

        let config = ApiConfig::new(server.base_url(), None);
        let request =
            build_request(&config, &PUT_QSHOW, &[("title", "Mine".to_string())]).expect("request");
        let response = HttpTransport::new()
            .expect("transport")
            .execute(&request)
            .expect("response");

        mock.assert_hits(1);
        assert_eq!(response.status, 500);
        assert_eq!(response.body, b"boom");
    }

    #[test]
    fn connection_refused_is_transport_error() {
        let config = ApiConfig::new("http://127.0.0.1:1", None);
        let request = build_request(&config, &RANDOM, &[]).expect("request");
        let err = HttpTransport::new()
            .expect("transport")
            .execute(&request)
            .expect_err("error");
        assert!(matches!(err, ToolError::Transport(_)));
    }
}
