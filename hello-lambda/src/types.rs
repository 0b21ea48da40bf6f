use serde::{Deserialize, Serialize};

pub const STATUS_OK: u16 = 200;
pub const CONTENT_TYPE_TEXT: &str = "text/plain";
pub const ALLOW_ANY_ORIGIN: &str = "*";
pub const HELLO_BODY: &str = "Hello World!!";

/// The response shape a Function URL understands when the function returns JSON
/// instead of a raw payload. Field order is preserved in the serialized output.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FunctionUrlResponse {
    pub status_code: u16,
    pub headers: ResponseHeaders,
    pub body: String,
}

/// A fixed set of response headers.
/// A struct rather than a map so nothing else can sneak in and the key order stays put.
/// Unknown fields are rejected when a saved response is read back for local checks.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ResponseHeaders {
    #[serde(rename = "Content-Type")]
    pub content_type: String,
    #[serde(rename = "Access-Control-Allow-Origin")]
    pub access_control_allow_origin: String,
}

impl Default for ResponseHeaders {
    fn default() -> Self {
        Self {
            content_type: CONTENT_TYPE_TEXT.to_string(),
            access_control_allow_origin: ALLOW_ANY_ORIGIN.to_string(),
        }
    }
}
