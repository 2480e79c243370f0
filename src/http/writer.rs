use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Serializes everything up to and including the blank line after the headers.
pub fn serialize_head(resp: &Response) -> Vec<u8> {
    format!(
        "{} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        HTTP_VERSION,
        resp.status.status_text(),
        resp.content_type,
        resp.content_length()
    )
    .into_bytes()
}

/// Writes a response as two sequential writes: the head, then the raw body.
pub struct ResponseWriter {
    head: Vec<u8>,
    response: Response,
}

impl ResponseWriter {
    pub fn new(response: Response) -> Self {
        Self {
            head: serialize_head(&response),
            response,
        }
    }

    pub fn response(&self) -> &Response {
        &self.response
    }

    pub async fn write_to_stream<W>(&self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        stream.write_all(&self.head).await?;
        stream.write_all(&self.response.body).await?;
        stream.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_for_not_found() {
        let head = serialize_head(&Response::not_found());
        assert_eq!(
            head,
            b"HTTP/1.1 404 Not Found\r\nContent-Type: text/plain\r\nContent-Length: 14\r\n\r\n"
        );
    }
}
