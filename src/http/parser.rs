use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::http::request::{Method, Request};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read request line: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed request line")]
    MalformedRequestLine,
    #[error("unsupported method {0:?}")]
    UnsupportedMethod(String),
}

/// Parses a request line such as `GET /index.html HTTP/1.1`.
///
/// The line is split on whitespace and must yield exactly three tokens. The
/// method must be `GET` (case-sensitive). The path is kept as raw bytes and
/// the version token is kept as-is.
pub fn parse_request_line(line: &[u8]) -> Result<Request, ParseError> {
    let parts = fields(line);
    let &[method, path, version] = parts.as_slice() else {
        return Err(ParseError::MalformedRequestLine);
    };

    let method = std::str::from_utf8(method)
        .ok()
        .and_then(Method::from_token)
        .ok_or_else(|| ParseError::UnsupportedMethod(String::from_utf8_lossy(method).into_owned()))?;

    Ok(Request {
        method,
        path: path.to_vec(),
        version: String::from_utf8_lossy(version).into_owned(),
    })
}

/// Splits `line` around runs of Unicode whitespace.
///
/// Bytes that are not valid UTF-8 never count as whitespace and stay part
/// of the surrounding field.
pub fn fields(line: &[u8]) -> Vec<&[u8]> {
    let mut fields = Vec::new();
    let mut start = None;
    let mut pos = 0;

    for chunk in line.utf8_chunks() {
        for (i, c) in chunk.valid().char_indices() {
            if c.is_whitespace() {
                if let Some(s) = start.take() {
                    fields.push(&line[s..pos + i]);
                }
            } else if start.is_none() {
                start = Some(pos + i);
            }
        }
        pos += chunk.valid().len();

        if !chunk.invalid().is_empty() {
            start.get_or_insert(pos);
            pos += chunk.invalid().len();
        }
    }

    if let Some(s) = start {
        fields.push(&line[s..]);
    }
    fields
}

/// Reads the first line of the stream and parses it.
///
/// A line cut short by end-of-stream is treated like a read error: the
/// request never arrived in full.
pub async fn read_request_line<R>(reader: &mut R) -> Result<Request, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    reader.read_until(b'\n', &mut buf).await?;

    if buf.last() != Some(&b'\n') {
        return Err(ParseError::Io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "connection closed before end of request line",
        )));
    }

    parse_request_line(&buf)
}

/// Reads and discards header lines up to the first blank line.
///
/// A line holding only Unicode whitespace counts as blank. End-of-stream
/// and read errors end the header block the same way a blank line does.
/// Returns the number of lines discarded.
pub async fn skip_headers<R>(reader: &mut R) -> usize
where
    R: AsyncBufRead + Unpin,
{
    let mut skipped = 0;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(_) if buf.last() != Some(&b'\n') => break,
            Ok(_) if String::from_utf8_lossy(&buf).trim().is_empty() => break,
            Ok(_) => skipped += 1,
            Err(_) => break,
        }
    }

    skipped
}
