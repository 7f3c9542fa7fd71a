use crate::models::{QodBody, QuoteBody, SuccessResponse};
use crate::tools::descriptor::ResponseShape;
use crate::tools::error::ToolError;
use crate::tools::transport::HttpResponse;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Turns a completed exchange into the success text, or the remote error.
///
/// Bodies under 400 are never an error: the typed shape is tried first, then any JSON, and
/// a body that is not JSON at all is returned verbatim. Bodies that are not UTF-8 come back
/// base64-encoded.
pub fn map_response(response: &HttpResponse, shape: ResponseShape) -> Result<String, ToolError> {
    if response.status >= 400 {
        return Err(ToolError::RemoteApi(raw(&response.body)));
    }
    Ok(render_success(&response.body, shape))
}

fn render_success(body: &[u8], shape: ResponseShape) -> String {
    if shape == ResponseShape::RawFallback {
        return raw(body);
    }

    let generic: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(?shape, %err, "body is not JSON; passing it through");
            return raw(body);
        }
    };

    let typed = match shape {
        ResponseShape::GenericObject => typed::<Map<String, Value>>(&generic),
        ResponseShape::GenericArrayWrapped => typed::<SuccessResponse>(&generic),
        ResponseShape::TypedQuote => typed::<QuoteBody>(&generic),
        ResponseShape::TypedQod => typed::<QodBody>(&generic),
        ResponseShape::RawFallback => None,
    };

    match typed {
        Some(text) => text,
        None => {
            tracing::debug!(?shape, "body does not match the declared shape");
            pretty(&generic).unwrap_or_else(|| raw(body))
        }
    }
}

/// Re-encodes through `T`, but only when doing so keeps every key and value of the
/// generic decode. Otherwise the caller falls back to the generic value.
fn typed<T>(generic: &Value) -> Option<String>
where
    T: DeserializeOwned + Serialize,
{
    let decoded = T::deserialize(generic).ok()?;
    let reencoded = serde_json::to_value(&decoded).ok()?;
    if &reencoded != generic {
        return None;
    }
    pretty(&decoded)
}

fn pretty<T: Serialize + ?Sized>(value: &T) -> Option<String> {
    serde_json::to_string_pretty(value).ok()
}

fn raw(body: &[u8]) -> String {
    match std::str::from_utf8(body) {
        Ok(text) => text.to_string(),
        Err(_) => {
            tracing::debug!(bytes = body.len(), "binary body; encoding as base64");
            STANDARD.encode(body)
        }
    }
}
