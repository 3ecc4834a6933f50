//! LSP base protocol framing: a `Content-Length` header block, a blank
//! line, then a UTF-8 JSON body.

use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::ChannelError;

const CONTENT_LENGTH: &str = "Content-Length";

pub async fn write_message<W>(
    writer: &mut W,
    message: &Value,
) -> Result<(), ChannelError>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let body = serde_json::to_vec(message)?;
    let header = format!("{CONTENT_LENGTH}: {}\r\n\r\n", body.len());
    writer.write_all(header.as_bytes()).await?;
    writer.write_all(&body).await?;
    writer.flush().await?;
    Ok(())
}

/// Read one message. `Ok(None)` on a clean end of stream between messages.
pub async fn read_message<R>(reader: &mut R) -> Result<Option<Value>, ChannelError>
where
    R: AsyncBufRead + Unpin + ?Sized,
{
    let mut content_length = None;
    let mut saw_header = false;
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            if saw_header {
                return Err(ChannelError::Protocol("stream ended inside a header block".to_string()));
            }
            return Ok(None);
        }

        let header = line.trim_end_matches(['\r', '\n']);
        if header.is_empty() {
            if saw_header {
                break;
            }
            continue;
        }
        saw_header = true;

        let Some((name, value)) = header.split_once(':') else {
            return Err(ChannelError::Protocol(format!("malformed header: {header}")));
        };
        if name.trim().eq_ignore_ascii_case(CONTENT_LENGTH) {
            let length = value
                .trim()
                .parse::<usize>()
                .map_err(|_| ChannelError::Protocol(format!("invalid {CONTENT_LENGTH}: {}", value.trim())))?;
            content_length = Some(length);
        }
    }

    let Some(length) = content_length else {
        return Err(ChannelError::Protocol(format!("missing {CONTENT_LENGTH} header")));
    };
    let mut body = vec![0u8; length];
    reader.read_exact(&mut body).await?;
    Ok(Some(serde_json::from_slice(&body)?))
}

#[cfg(test)]
#[path = "../../tests/src/service/framing_tests.rs"]
mod tests;
