//! OS signal handling for graceful shutdown
//!
//! SIGINT/SIGTERM (Ctrl+C on Windows) become a `Message::Quit` on the engine
//! channel, so the terminal is restored by the normal quit path.

use std::future::Future;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;
use tailview_core::prelude::*;

/// Spawn a task that sends `Message::Quit` on the first termination signal
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    spawn_quit_on(wait_for_signal(), tx)
}

/// Send `Message::Quit` once `shutdown` resolves with the signal name.
///
/// A failed listener sends nothing; keys still quit the viewer.
pub fn spawn_quit_on<F>(shutdown: F, tx: mpsc::Sender<Message>) -> JoinHandle<()>
where
    F: Future<Output = Result<&'static str>> + Send + 'static,
{
    tokio::spawn(async move {
        match shutdown.await {
            Ok(signal) => {
                info!("Received {}, shutting down", signal);
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Engine gone before {} was delivered", signal);
                }
            }
            Err(e) => error!("Signal handler error: {}", e),
        }
    })
}

/// Wait for a termination signal and name it
async fn wait_for_signal() -> Result<&'static str> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt())
            .map_err(|e| Error::terminal(format!("Failed to create SIGINT handler: {}", e)))?;
        let mut sigterm = signal(SignalKind::terminate())
            .map_err(|e| Error::terminal(format!("Failed to create SIGTERM handler: {}", e)))?;

        let name = tokio::select! {
            _ = sigint.recv() => "SIGINT",
            _ = sigterm.recv() => "SIGTERM",
        };
        Ok(name)
    }

    #[cfg(windows)]
    {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {}", e)))?;
        Ok("Ctrl+C")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_signal_sends_quit() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);
        let (fire, fired) = oneshot::channel::<()>();

        let handle = spawn_quit_on(
            async move {
                let _ = fired.await;
                Ok("SIGTERM")
            },
            tx,
        );

        assert!(rx.try_recv().is_err());

        fire.send(()).unwrap();
        handle.await.unwrap();

        assert_eq!(rx.recv().await, Some(Message::Quit));
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_listener_error_sends_nothing() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);

        let handle = spawn_quit_on(async { Err(Error::terminal("no signal support")) }, tx);
        handle.await.unwrap();

        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_signal_after_engine_exit_is_dropped() {
        let (tx, rx) = mpsc::channel::<Message>(1);
        drop(rx);

        let handle = spawn_quit_on(async { Ok("SIGINT") }, tx);

        assert!(handle.await.is_ok());
    }
}
