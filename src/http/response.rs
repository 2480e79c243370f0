use bytes::Bytes;

/// Body sent with every 404.
pub const NOT_FOUND_BODY: &str = "File not found";

/// HTTP status codes the server can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyserve::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }

    /// Status text as it appears after the version on the status line,
    /// e.g. `404 Not Found`.
    pub fn status_text(&self) -> String {
        format!("{} {}", self.as_u16(), self.reason_phrase())
    }
}

/// A complete response ready to be written to a client.
///
/// Only `Content-Type` and `Content-Length` are ever sent, so they are
/// fields rather than a header map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: String,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: StatusCode, content_type: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            content_type: content_type.into(),
            body: body.into(),
        }
    }

    /// 200 OK carrying file content.
    pub fn ok(content_type: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self::new(StatusCode::Ok, content_type, body)
    }

    /// The fixed 404 sent for any path that could not be read.
    pub fn not_found() -> Self {
        Self::new(StatusCode::NotFound, "text/plain", Bytes::from_static(NOT_FOUND_BODY.as_bytes()))
    }

    pub fn content_length(&self) -> usize {
        self.body.len()
    }
}
