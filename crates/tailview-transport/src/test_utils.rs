//! Scripted WebSocket server for transport tests.
//!
//! Compiled for unit tests and for downstream crates that enable the
//! `test-helpers` feature.

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::protocol::Message as WsMessage;

use tailview_core::prelude::*;

/// One step of the server script
#[derive(Debug, Clone)]
pub enum ServerFrame {
    Text(String),
    Binary(Vec<u8>),
    /// Send a Close frame and stop writing
    Close,
    /// Keep the connection open until the client closes it
    Hold,
}

/// Single-connection server bound to an ephemeral localhost port
pub struct MockStreamServer {
    url: String,
    received_rx: mpsc::UnboundedReceiver<String>,
    task: JoinHandle<()>,
}

impl MockStreamServer {
    /// Bind, then play `script` to the first client that connects.
    pub async fn start(script: Vec<ServerFrame>) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let url = format!("ws://{}", listener.local_addr()?);
        let (received_tx, received_rx) = mpsc::unbounded_channel();

        let task = tokio::spawn(async move {
            let Ok((tcp, _addr)) = listener.accept().await else {
                return;
            };
            let Ok(ws) = tokio_tungstenite::accept_async(tcp).await else {
                return;
            };
            let (mut sink, mut stream) = ws.split();

            let reader = tokio::spawn(async move {
                while let Some(Ok(frame)) = stream.next().await {
                    match frame {
                        WsMessage::Text(text) => {
                            let _ = received_tx.send(text.as_str().to_owned());
                        }
                        WsMessage::Close(_) => break,
                        _ => {}
                    }
                }
            });

            for frame in script {
                let sent = match frame {
                    ServerFrame::Text(text) => sink.send(WsMessage::Text(text.into())).await,
                    ServerFrame::Binary(bytes) => sink.send(WsMessage::Binary(bytes.into())).await,
                    ServerFrame::Close => {
                        let _ = sink.send(WsMessage::Close(None)).await;
                        break;
                    }
                    ServerFrame::Hold => break,
                };
                if sent.is_err() {
                    break;
                }
            }

            let _ = reader.await;
        });

        Ok(Self {
            url,
            received_rx,
            task,
        })
    }

    /// `ws://` URL of the server
    pub fn url(&self) -> String {
        self.url.clone()
    }

    /// Next text frame the client sent, or `None` after `timeout`
    pub async fn next_received(&mut self, timeout: Duration) -> Option<String> {
        tokio::time::timeout(timeout, self.received_rx.recv())
            .await
            .ok()
            .flatten()
    }

    /// URL of a localhost port nothing is listening on
    pub async fn unused_url() -> Result<String> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        drop(listener);
        Ok(format!("ws://{}", addr))
    }
}

impl Drop for MockStreamServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
