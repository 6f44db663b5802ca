use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::protocol::{Request, RequestId, Response, RpcError, JSONRPC_VERSION};
use super::{LATEST_PROTOCOL_VERSION, PROTOCOL_VERSIONS, SERVER_NAME};
use crate::tools::{is_error, FaviconTools, FROM_PNG, FROM_URL};

#[derive(Debug, Deserialize)]
struct CallToolParams {
    name: String,
    #[serde(default)]
    arguments: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InitializeParams {
    #[serde(default)]
    protocol_version: Option<String>,
}

/// Serves the favicon tools over newline-delimited JSON-RPC.
pub struct McpServer {
    tools: FaviconTools,
}

impl McpServer {
    pub fn new(tools: FaviconTools) -> Self {
        Self { tools }
    }

    /// Reads one message per line until EOF. Requests are handled one at a
    /// time, in order; each response is flushed before the next line is read.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await.context("Failed to read request")? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let Some(response) = self.handle_line(line).await else {
                continue;
            };

            let mut out = serde_json::to_vec(&response)?;
            out.push(b'\n');
            writer
                .write_all(&out)
                .await
                .context("Failed to write response")?;
            writer.flush().await.context("Failed to flush response")?;
        }

        tracing::info!("stdin closed, shutting down");
        Ok(())
    }

    /// Handles one raw message. Returns `None` for notifications.
    pub async fn handle_line(&self, line: &str) -> Option<Response> {
        let value: Value = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(e) => {
                return Some(Response::error(RequestId::Null, RpcError::parse_error(e)));
            }
        };

        let id: RequestId = value
            .get("id")
            .cloned()
            .and_then(|id| serde_json::from_value(id).ok())
            .unwrap_or_default();

        let request: Request = match serde_json::from_value(value) {
            Ok(r) => r,
            Err(e) => return Some(Response::error(id, RpcError::invalid_request(e))),
        };

        if request.jsonrpc != JSONRPC_VERSION {
            return Some(Response::error(
                id,
                RpcError::invalid_request("jsonrpc must be \"2.0\""),
            ));
        }

        self.handle(request).await
    }

    pub async fn handle(&self, request: Request) -> Option<Response> {
        tracing::debug!(method = %request.method, "received request");

        let id = request.id?;

        let result = match request.method.as_str() {
            "initialize" => Ok(initialize(request.params)),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(list_tools()),
            "tools/call" => self.call_tool(request.params).await,
            other => Err(RpcError::method_not_found(other)),
        };

        Some(match result {
            Ok(value) => Response::success(id, value),
            Err(error) => Response::error(id, error),
        })
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, RpcError> {
        let params: CallToolParams = params
            .ok_or_else(|| RpcError::invalid_params("missing params"))
            .and_then(|p| serde_json::from_value(p).map_err(RpcError::invalid_params))?;

        tracing::info!(tool = %params.name, "tool call");

        let text = match params.name.as_str() {
            FROM_PNG => {
                let image_path = string_arg(&params.arguments, "image_path")?;
                let output_path = string_arg(&params.arguments, "output_path")?;
                self.tools
                    .generate_favicon_from_png(image_path, output_path)
                    .await
            }
            FROM_URL => {
                let image_url = string_arg(&params.arguments, "image_url")?;
                let output_path = string_arg(&params.arguments, "output_path")?;
                self.tools
                    .generate_favicon_from_url(image_url, output_path)
                    .await
            }
            other => return Err(RpcError::invalid_params(format!("unknown tool: {other}"))),
        };

        Ok(json!({
            "content": [{ "type": "text", "text": text }],
            "isError": is_error(&text),
        }))
    }
}

fn string_arg<'a>(args: &'a Map<String, Value>, key: &str) -> Result<&'a str, RpcError> {
    args.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| RpcError::invalid_params(format!("missing string argument `{key}`")))
}

fn initialize(params: Option<Value>) -> Value {
    let params: InitializeParams = params
        .and_then(|p| serde_json::from_value(p).ok())
        .unwrap_or_default();

    let version = params
        .protocol_version
        .as_deref()
        .filter(|v| PROTOCOL_VERSIONS.contains(v))
        .unwrap_or(LATEST_PROTOCOL_VERSION);

    json!({
        "protocolVersion": version,
        "capabilities": { "tools": {} },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
        },
    })
}

fn list_tools() -> Value {
    json!({
        "tools": [
            {
                "name": FROM_PNG,
                "description": "Generate a complete favicon set from a PNG image file.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "image_path": {
                            "type": "string",
                            "description": "Path to the PNG image file."
                        },
                        "output_path": {
                            "type": "string",
                            "description": "Directory where favicon files will be generated."
                        }
                    },
                    "required": ["image_path", "output_path"]
                }
            },
            {
                "name": FROM_URL,
                "description": "Download an image from a URL and generate a complete favicon set.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "image_url": {
                            "type": "string",
                            "description": "URL of the image to download."
                        },
                        "output_path": {
                            "type": "string",
                            "description": "Directory where favicon files will be generated."
                        }
                    },
                    "required": ["image_url", "output_path"]
                }
            }
        ]
    })
}
