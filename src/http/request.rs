use std::borrow::Cow;

/// HTTP request methods.
///
/// Only `GET` is served. Every other token on the request line is rejected
/// by the parser before a `Request` is ever built, so this enum has no
/// other variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
}

/// A parsed request line.
///
/// Produced once per connection and never modified afterwards. Headers are
/// read and discarded, so they are not part of this value. The path is kept
/// as the raw bytes sent by the client; it need not be UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method
    pub method: Method,
    /// The request path exactly as sent (e.g. "/index.html")
    pub path: Vec<u8>,
    /// Protocol version token, accepted without validation
    pub version: String,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// # Arguments
    ///
    /// * `s` - Method token (case-sensitive)
    ///
    /// # Returns
    ///
    /// `Some(Method)` if the string is a supported method, `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyserve::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_token("get"), None);
    /// assert_eq!(Method::from_token("POST"), None);
    /// ```
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
        }
    }
}

impl Request {
    pub fn get(path: impl Into<Vec<u8>>, version: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            version: version.into(),
        }
    }

    /// Whether this request asks for the server root.
    pub fn is_root(&self) -> bool {
        self.path == b"/"
    }

    /// The path for display, with invalid UTF-8 replaced.
    pub fn path_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.path)
    }
}
