use std::collections::HashMap;

/// Response body, parsed when JSON decoding was requested and succeeded.
#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    Text(String),
    Json(serde_json::Value),
}

impl Body {
    /// Decodes `text` according to the `json` option. A body that fails to
    /// parse as JSON stays raw text; that is not an error.
    pub(crate) fn decode(text: String, json: bool) -> Self {
        if json {
            match serde_json::from_str::<serde_json::Value>(&text) {
                Ok(value) => Self::Json(value),
                Err(_) => Self::Text(text),
            }
        } else {
            Self::Text(text)
        }
    }

    /// Collapses the body back to text. A parsed JSON value is re-serialized
    /// compactly.
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Json(value) => value.to_string(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Json(_) => None,
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Text(_) => None,
            Self::Json(value) => Some(value),
        }
    }
}

/// Structured result of one completed HTTP exchange.
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    /// Response headers with lower-cased names as the transport delivers
    /// them; repeated headers are joined with `", "`.
    pub headers: HashMap<String, String>,
    /// Decoded response body.
    pub body: Body,
    /// Numeric status code. Non-success codes are still delivered here, not
    /// as errors.
    pub status: u16,
    /// Canonical status message for the code, empty when unknown.
    pub status_message: String,
}

#[cfg(test)]
mod tests {
    use super::Body;

    #[test]
    fn decode_without_json_flag_keeps_text() {
        let body = Body::decode("{\"version\":\"1.0.0\"}".to_owned(), false);
        assert_eq!(body.as_text(), Some("{\"version\":\"1.0.0\"}"));
    }

    #[test]
    fn decode_with_json_flag_parses_value() {
        let body = Body::decode("{\"version\":\"1.0.0\"}".to_owned(), true);
        let value = body.as_json().expect("body must be parsed");
        assert_eq!(value["version"], "1.0.0");
    }

    #[test]
    fn decode_with_json_flag_falls_back_on_invalid_body() {
        let body = Body::decode("version: 1.0.0".to_owned(), true);
        assert_eq!(body.as_text(), Some("version: 1.0.0"));
    }

    #[test]
    fn into_text_reserializes_parsed_json() {
        let body = Body::decode("{\"a\":1}".to_owned(), true);
        assert_eq!(body.into_text(), "{\"a\":1}");
    }
}
