//! Stdio transport for the MCP server.
//!
//! Messages are newline-delimited JSON: one JSON-RPC message per line,
//! no embedded newlines, UTF-8. Blank lines are skipped.
//!
//! # Types
//!
//! - [`MessageKind`]: classifies each incoming frame by its `id` / `method`.
//! - [`classify_message`]: pure classification function.
//! - [`StdioTransport`]: line reader/writer over any async byte stream
//!   (real stdio in the binary, `tokio::io::duplex` in tests).

use crate::mcp::error::{McpError, Result};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::trace;

/// Default upper bound for a single incoming message.
pub const DEFAULT_MAX_MESSAGE_BYTES: usize = 1024 * 1024;

/// Classification of an incoming JSON-RPC message.
#[derive(Debug, PartialEq, Eq)]
pub enum MessageKind {
    /// A request expecting a response (has `id` + `method`).
    Request,
    /// A notification (has `method`, no `id`).
    Notification,
    /// A response (has `id` plus `result` or `error`, no `method`). Clients
    /// do not send these to a tool server unless answering a server request,
    /// which this server never issues.
    Response,
    /// Anything else: no usable `method` and no `result`/`error`, or not an
    /// object at all.
    Invalid,
}

/// Classify a JSON-RPC message by inspecting its `id`, `method`, `result`
/// and `error` fields.
pub fn classify_message(json: &serde_json::Value) -> MessageKind {
    let has_id = json.get("id").is_some_and(|v| !v.is_null());
    let has_method = json.get("method").and_then(|v| v.as_str()).is_some();
    let has_outcome = json.get("result").is_some() || json.get("error").is_some();

    match (has_id, has_method) {
        (true, true) => MessageKind::Request,
        (false, true) => MessageKind::Notification,
        (true, false) if has_outcome => MessageKind::Response,
        _ => MessageKind::Invalid,
    }
}

/// Newline-delimited JSON transport.
pub struct StdioTransport<R, W> {
    reader: BufReader<R>,
    writer: W,
    max_message_bytes: usize,
}

impl StdioTransport<tokio::io::Stdin, tokio::io::Stdout> {
    /// Transport over the process's stdin / stdout.
    pub fn stdio() -> Self {
        Self::new(tokio::io::stdin(), tokio::io::stdout())
    }
}

impl<R, W> StdioTransport<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: BufReader::new(reader),
            writer,
            max_message_bytes: DEFAULT_MAX_MESSAGE_BYTES,
        }
    }

    pub fn with_max_message_bytes(mut self, limit: usize) -> Self {
        self.max_message_bytes = limit;
        self
    }

    /// Read the next non-blank line.
    ///
    /// Returns `Ok(None)` on EOF. A line longer than the limit is discarded
    /// and reported as [`McpError::MessageTooLarge`]; the transport stays
    /// usable afterwards.
    pub async fn recv(&mut self) -> Result<Option<String>> {
        let limit = self.max_message_bytes;
        loop {
            let mut buf = Vec::new();
            let read = (&mut self.reader)
                .take(limit as u64 + 1)
                .read_until(b'\n', &mut buf)
                .await?;
            if read == 0 {
                return Ok(None);
            }

            if buf.last() != Some(&b'\n') && buf.len() > limit {
                self.discard_line().await?;
                return Err(McpError::MessageTooLarge { limit });
            }

            let line = String::from_utf8_lossy(&buf);
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            trace!("Transport received: {}", trimmed);
            return Ok(Some(trimmed.to_string()));
        }
    }

    /// Serialize `message` as one line and flush.
    pub async fn send<T: Serialize>(&mut self, message: &T) -> Result<()> {
        let json = serde_json::to_string(message)?;
        trace!("Transport sending: {}", json);
        self.writer.write_all(json.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Skip the remainder of an oversized line.
    async fn discard_line(&mut self) -> Result<()> {
        loop {
            let buf = self.reader.fill_buf().await?;
            if buf.is_empty() {
                return Ok(());
            }
            if let Some(pos) = buf.iter().position(|b| *b == b'\n') {
                self.reader.consume(pos + 1);
                return Ok(());
            }
            let len = buf.len();
            self.reader.consume(len);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classify_request() {
        let json = json!({"jsonrpc": "2.0", "id": 1, "method": "tools/list"});
        assert_eq!(classify_message(&json), MessageKind::Request);
    }

    #[test]
    fn classify_string_id_request() {
        let json = json!({"jsonrpc": "2.0", "id": "abc", "method": "ping"});
        assert_eq!(classify_message(&json), MessageKind::Request);
    }

    #[test]
    fn classify_notification() {
        let json = json!({"jsonrpc": "2.0", "method": "notifications/initialized"});
        assert_eq!(classify_message(&json), MessageKind::Notification);
        // A null id is not an id.
        let json = json!({"jsonrpc": "2.0", "id": null, "method": "ping"});
        assert_eq!(classify_message(&json), MessageKind::Notification);
    }

    #[test]
    fn classify_response_and_invalid() {
        assert_eq!(
            classify_message(&json!({"id": 1, "result": {}})),
            MessageKind::Response
        );
        assert_eq!(
            classify_message(&json!({"id": 1, "error": {"code": -1, "message": "x"}})),
            MessageKind::Response
        );
        assert_eq!(classify_message(&json!({"data": 1})), MessageKind::Invalid);
        // An id alone, or an id with a non-string method, is not a response.
        assert_eq!(classify_message(&json!({"id": 1})), MessageKind::Invalid);
        assert_eq!(
            classify_message(&json!({"id": 2, "method": 5})),
            MessageKind::Invalid
        );
        assert_eq!(classify_message(&json!([1, 2])), MessageKind::Invalid);
    }

    #[tokio::test]
    async fn recv_skips_blank_lines_and_reports_eof() {
        let input: &[u8] = b"\n  \n{\"id\":1}\r\n{\"id\":2}";
        let mut transport = StdioTransport::new(input, Vec::new());

        assert_eq!(transport.recv().await.unwrap().as_deref(), Some("{\"id\":1}"));
        assert_eq!(transport.recv().await.unwrap().as_deref(), Some("{\"id\":2}"));
        assert_eq!(transport.recv().await.unwrap(), None);
    }

    #[tokio::test]
    async fn recv_rejects_oversized_line_and_recovers() {
        let input: &[u8] = b"{\"padding\":\"xxxxxxxxxxxxxxxxxxxx\"}\n{\"id\":3}\n";
        let mut transport = StdioTransport::new(input, Vec::new()).with_max_message_bytes(16);

        assert!(matches!(
            transport.recv().await,
            Err(McpError::MessageTooLarge { limit: 16 })
        ));
        assert_eq!(transport.recv().await.unwrap().as_deref(), Some("{\"id\":3}"));
    }

    #[tokio::test]
    async fn recv_accepts_line_at_limit() {
        let input: &[u8] = b"{\"id\":3}\n";
        let mut transport = StdioTransport::new(input, Vec::new()).with_max_message_bytes(8);
        assert_eq!(transport.recv().await.unwrap().as_deref(), Some("{\"id\":3}"));
    }

    #[tokio::test]
    async fn send_writes_one_line_per_message() {
        let mut transport = StdioTransport::new(&b""[..], Vec::new());
        transport.send(&json!({"a": 1})).await.unwrap();
        transport.send(&json!({"b": 2})).await.unwrap();
        assert_eq!(
            String::from_utf8(transport.writer).unwrap(),
            "{\"a\":1}\n{\"b\":2}\n"
        );
    }
}
