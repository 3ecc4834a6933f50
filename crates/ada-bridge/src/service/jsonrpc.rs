use std::{
    future::Future,
    sync::{
        Arc,
        atomic::{AtomicI64, Ordering},
    },
};

use serde_json::Value;
use tokio::{
    io::{AsyncRead, AsyncWrite, BufReader},
    sync::Mutex,
    task::JoinHandle,
};
use tower_lsp::{
    jsonrpc::{Id, Request, Response},
    lsp_types::{notification::Notification, request::Request as LspRequest, *},
};
use tracing::{debug, warn};

use super::{
    channel::{AnalysisChannel, first_location},
    framing::{read_message, write_message},
    pending::PendingRequests,
};
use crate::{document::Document, error::ChannelError};

type SharedWriter = Arc<Mutex<Box<dyn AsyncWrite + Send + Unpin>>>;

/// JSON-RPC client for a language server reachable over a byte stream.
///
/// Requests are pipelined: each gets a fresh id and waits on its own slot
/// while a background task reads responses and routes them by id.
pub struct JsonRpcChannel {
    writer: SharedWriter,
    pending: PendingRequests,
    next_id: AtomicI64,
    reader: JoinHandle<()>,
}

impl JsonRpcChannel {
    /// Start the reader task. `reader` carries server output, `writer` server input.
    pub fn spawn<R, W>(
        reader: R,
        writer: W,
    ) -> Self
    where
        R: AsyncRead + Send + Unpin + 'static,
        W: AsyncWrite + Send + Unpin + 'static,
    {
        let writer: SharedWriter = Arc::new(Mutex::new(Box::new(writer)));
        let pending = PendingRequests::default();
        let reader = tokio::spawn(read_loop(BufReader::new(reader), Arc::clone(&writer), pending.clone()));
        Self {
            writer,
            pending,
            next_id: AtomicI64::new(1),
            reader,
        }
    }

    /// Number of requests still waiting for a response.
    pub fn pending_requests(&self) -> usize {
        self.pending.len()
    }

    pub async fn request<R>(
        &self,
        params: R::Params,
    ) -> Result<R::Result, ChannelError>
    where
        R: LspRequest,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = build_message(R::METHOD, params, Some(Id::Number(id)))?;

        let pending = self.pending.register(Id::Number(id));
        self.send(&request).await?;
        let response = pending.wait().await?;

        let (_, result) = response.into_parts();
        let value = result.map_err(ChannelError::Service)?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn notify<N>(
        &self,
        params: N::Params,
    ) -> Result<(), ChannelError>
    where
        N: Notification,
    {
        let notification = build_message(N::METHOD, params, None)?;
        self.send(&notification).await
    }

    #[allow(deprecated)]
    pub async fn initialize(
        &self,
        root: Option<Url>,
    ) -> Result<InitializeResult, ChannelError> {
        let workspace_folders = root.clone().map(|uri| {
            let name = uri
                .path_segments()
                .and_then(|segments| segments.filter(|segment| !segment.is_empty()).next_back())
                .unwrap_or_default()
                .to_string();
            vec![WorkspaceFolder {
                uri,
                name,
            }]
        });
        let params = InitializeParams {
            process_id: Some(std::process::id()),
            root_uri: root,
            workspace_folders,
            capabilities: ClientCapabilities {
                text_document: Some(TextDocumentClientCapabilities {
                    definition: Some(GotoCapability {
                        dynamic_registration: Some(false),
                        link_support: Some(false),
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            },
            ..Default::default()
        };
        self.request::<request::Initialize>(params).await
    }

    pub async fn initialized(&self) -> Result<(), ChannelError> {
        self.notify::<notification::Initialized>(InitializedParams {}).await
    }

    pub async fn did_open(
        &self,
        document: &Document,
        language_id: &str,
    ) -> Result<(), ChannelError> {
        let text_document = TextDocumentItem::new(
            document.uri.clone(),
            language_id.to_string(),
            document.version,
            document.text.clone(),
        );
        self.notify::<notification::DidOpenTextDocument>(DidOpenTextDocumentParams {
            text_document,
        })
        .await
    }

    /// Send `shutdown`, then `exit`.
    pub async fn shutdown(&self) -> Result<(), ChannelError> {
        self.request::<request::Shutdown>(()).await?;
        self.notify::<notification::Exit>(()).await
    }

    async fn send(
        &self,
        message: &Value,
    ) -> Result<(), ChannelError> {
        let mut writer = self.writer.lock().await;
        write_message(&mut **writer, message).await
    }
}

impl AnalysisChannel for JsonRpcChannel {
    fn definition(
        &self,
        uri: &Url,
        position: Position,
    ) -> impl Future<Output = Result<Option<Location>, ChannelError>> + Send {
        let params = GotoDefinitionParams {
            text_document_position_params: TextDocumentPositionParams::new(
                TextDocumentIdentifier::new(uri.clone()),
                position,
            ),
            work_done_progress_params: WorkDoneProgressParams::default(),
            partial_result_params: PartialResultParams::default(),
        };
        async move {
            let response = self.request::<request::GotoDefinition>(params).await?;
            Ok(response.and_then(first_location))
        }
    }
}

impl Drop for JsonRpcChannel {
    fn drop(&mut self) {
        self.reader.abort();
    }
}

fn build_message<P: serde::Serialize>(
    method: &'static str,
    params: P,
    id: Option<Id>,
) -> Result<Value, ChannelError> {
    let params = serde_json::to_value(params)?;
    let mut builder = Request::build(method);
    if !params.is_null() {
        builder = builder.params(params);
    }
    if let Some(id) = id {
        builder = builder.id(id);
    }
    Ok(serde_json::to_value(builder.finish())?)
}

async fn read_loop<R>(
    mut reader: BufReader<R>,
    writer: SharedWriter,
    pending: PendingRequests,
) where
    R: AsyncRead + Unpin,
{
    loop {
        let message = match read_message(&mut reader).await {
            Ok(Some(message)) => message,
            Ok(None) => {
                debug!("analysis service closed its output");
                break;
            },
            Err(error) => {
                warn!("analysis service stream failed: {error}");
                break;
            },
        };

        if message.get("method").is_some() {
            handle_server_message(message, &writer).await;
            continue;
        }

        match serde_json::from_value::<Response>(message) {
            Ok(response) => {
                if !pending.complete(response) {
                    debug!("dropping response nobody is waiting for");
                }
            },
            Err(error) => warn!("malformed response from analysis service: {error}"),
        }
    }
    pending.close();
}

/// Notifications from the service are logged; requests get a `null` result.
async fn handle_server_message(
    message: Value,
    writer: &SharedWriter,
) {
    let request = match serde_json::from_value::<Request>(message) {
        Ok(request) => request,
        Err(error) => {
            warn!("malformed message from analysis service: {error}");
            return;
        },
    };

    let Some(id) = request.id().cloned() else {
        if request.method() == notification::LogMessage::METHOD
            && let Some(text) = request.params().and_then(|params| params.get("message")).and_then(Value::as_str)
        {
            debug!("analysis service: {text}");
        } else {
            debug!("ignoring service notification {}", request.method());
        }
        return;
    };

    debug!("answering service request {} with null", request.method());
    let response = match serde_json::to_value(Response::from_ok(id, Value::Null)) {
        Ok(response) => response,
        Err(error) => {
            warn!("cannot encode reply: {error}");
            return;
        },
    };
    let mut writer = writer.lock().await;
    if let Err(error) = write_message(&mut **writer, &response).await {
        warn!("cannot reply to analysis service: {error}");
    }
}

#[cfg(test)]
#[path = "../../tests/src/service/jsonrpc_tests.rs"]
mod tests;
