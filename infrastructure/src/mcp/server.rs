//! MCP server: routes JSON-RPC messages to the tool dispatcher.
//!
//! Message handling is synchronous and side-effect free apart from the
//! dispatcher's decision log, so [`McpServer::handle_message`] is tested
//! directly. [`McpServer::serve`] wraps it in the read/answer loop.
//!
//! ```text
//! transport.recv() ──▶ parse ──▶ classify ──┬─ Request ──────▶ handle_request ──▶ transport.send()
//!                                           ├─ Notification ─▶ (logged, no reply)
//!                                           ├─ Response ─────▶ (ignored)
//!                                           └─ Invalid ──────▶ -32600
//! ```

use crate::mcp::error::{McpError, Result};
use crate::mcp::protocol::{
    CallToolParams, Implementation, InitializeParams, InitializeResult, JsonRpcNotification,
    JsonRpcRequest, JsonRpcResponse, LATEST_PROTOCOL_VERSION, ListToolsResult, RpcError,
    ServerCapabilities, error_codes, methods,
};
use crate::mcp::transport::{MessageKind, StdioTransport, classify_message};
use orchestra_application::DispatchToolUseCase;
use orchestra_domain::ElicitationError;
use serde_json::{Value, json};
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{debug, info, warn};

/// MCP tool server exposing the elicitation tools.
pub struct McpServer {
    dispatcher: DispatchToolUseCase,
    server_info: Implementation,
}

impl McpServer {
    pub fn new(dispatcher: DispatchToolUseCase, server_info: Implementation) -> Self {
        Self {
            dispatcher,
            server_info,
        }
    }

    pub fn server_info(&self) -> &Implementation {
        &self.server_info
    }

    /// Serve over the process's stdin / stdout until EOF.
    pub async fn serve_stdio(&self, max_message_bytes: usize) -> Result<()> {
        let transport = StdioTransport::stdio().with_max_message_bytes(max_message_bytes);
        self.serve(transport).await
    }

    /// Answer messages until the peer closes its end.
    ///
    /// Oversized or malformed messages are answered with an error and the
    /// loop continues. Only I/O failures end it early.
    pub async fn serve<R, W>(&self, mut transport: StdioTransport<R, W>) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(
            "MCP server {} v{} listening on stdio",
            self.server_info.name, self.server_info.version
        );

        loop {
            let line = match transport.recv().await {
                Ok(Some(line)) => line,
                Ok(None) => {
                    info!("Client closed the connection");
                    return Ok(());
                }
                Err(McpError::MessageTooLarge { limit }) => {
                    warn!("Dropped message larger than {} bytes", limit);
                    let response = JsonRpcResponse::failure(
                        Value::Null,
                        RpcError::invalid_request(format!(
                            "message exceeds {} bytes",
                            limit
                        )),
                    );
                    transport.send(&response).await?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            if let Some(response) = self.handle_line(&line) {
                transport.send(&response).await?;
            }
        }
    }

    /// Parse and handle one raw line.
    pub fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        match serde_json::from_str::<Value>(line) {
            Ok(message) => self.handle_message(message),
            Err(e) => {
                warn!("Failed to parse message: {}", e);
                Some(JsonRpcResponse::failure(
                    Value::Null,
                    RpcError::parse_error(e),
                ))
            }
        }
    }

    /// Handle one parsed message. Returns `None` when no reply is due.
    pub fn handle_message(&self, message: Value) -> Option<JsonRpcResponse> {
        match classify_message(&message) {
            MessageKind::Request => {
                let request: JsonRpcRequest = match serde_json::from_value(message) {
                    Ok(r) => r,
                    Err(e) => {
                        return Some(JsonRpcResponse::failure(
                            Value::Null,
                            RpcError::invalid_request(e),
                        ));
                    }
                };
                Some(self.handle_request(request))
            }
            MessageKind::Notification => {
                match serde_json::from_value::<JsonRpcNotification>(message) {
                    Ok(notification) if notification.method == methods::INITIALIZED => {
                        info!("Client initialized");
                    }
                    Ok(notification) => {
                        debug!("Ignoring notification: {}", notification.method);
                    }
                    Err(e) => debug!("Ignoring malformed notification: {}", e),
                }
                None
            }
            MessageKind::Response => {
                debug!("Ignoring unsolicited response");
                None
            }
            MessageKind::Invalid => Some(JsonRpcResponse::failure(
                message.get("id").cloned().unwrap_or(Value::Null),
                RpcError::invalid_request("missing or non-string method"),
            )),
        }
    }

    fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        debug!("Handling request {}: {}", request.id, request.method);
        let id = request.id;
        let outcome = match request.method.as_str() {
            methods::INITIALIZE => self.initialize(request.params),
            methods::PING => Ok(json!({})),
            methods::TOOLS_LIST => self.list_tools(),
            methods::TOOLS_CALL => self.call_tool(request.params),
            other => Err(RpcError::method_not_found(other)),
        };

        match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::failure(id, error),
        }
    }

    fn initialize(&self, params: Option<Value>) -> std::result::Result<Value, RpcError> {
        let params: InitializeParams = match params {
            None | Some(Value::Null) => InitializeParams::default(),
            Some(value) => serde_json::from_value(value).map_err(RpcError::invalid_params)?,
        };

        if let Some(client) = &params.client_info {
            info!("Initialize from {} v{}", client.name, client.version);
        }

        let result = InitializeResult {
            protocol_version: params
                .protocol_version
                .unwrap_or_else(|| LATEST_PROTOCOL_VERSION.to_string()),
            capabilities: ServerCapabilities::default(),
            server_info: self.server_info.clone(),
        };
        serde_json::to_value(result).map_err(RpcError::internal)
    }

    fn list_tools(&self) -> std::result::Result<Value, RpcError> {
        let result = ListToolsResult {
            tools: self.dispatcher.list_tools(),
        };
        serde_json::to_value(result).map_err(RpcError::internal)
    }

    fn call_tool(&self, params: Option<Value>) -> std::result::Result<Value, RpcError> {
        let params: CallToolParams = params
            .ok_or_else(|| RpcError::invalid_params("missing params"))
            .and_then(|p| serde_json::from_value(p).map_err(RpcError::invalid_params))?;

        let call = params.into_tool_call();
        let response = self.dispatcher.dispatch(&call).map_err(tool_error)?;
        serde_json::to_value(response).map_err(RpcError::internal)
    }
}

/// Map a dispatch failure to its JSON-RPC error.
fn tool_error(err: ElicitationError) -> RpcError {
    let code = match err {
        ElicitationError::UnknownTool { .. } => error_codes::METHOD_NOT_FOUND,
        ElicitationError::Serialization { .. } => error_codes::INTERNAL_ERROR,
        _ => error_codes::INVALID_PARAMS,
    };
    RpcError::new(code, err.to_string()).with_data(json!({ "code": err.code() }))
}
