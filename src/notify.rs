use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

/// Sink for fire-and-forget notifications written after a response is sent.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn write(&self, email: &str, message: &str) -> anyhow::Result<()>;
}

/// Overwrites a single line in a local file. Best effort only: no retry, no
/// durability guarantee, last writer wins.
pub struct FileNotifier {
    path: String,
}

impl FileNotifier {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl NotificationSink for FileNotifier {
    async fn write(&self, email: &str, message: &str) -> anyhow::Result<()> {
        let line = format!("notification for {email}: {message}");
        tokio::fs::write(&self.path, line).await?;
        debug!(email, path = %self.path, "notification written");
        Ok(())
    }
}

/// Collects notifications in memory for tests.
#[derive(Default)]
pub struct MemorySink {
    pub lines: std::sync::Mutex<Vec<String>>,
}

#[async_trait]
impl NotificationSink for MemorySink {
    async fn write(&self, email: &str, message: &str) -> anyhow::Result<()> {
        self.lines
            .lock()
            .unwrap()
            .push(format!("notification for {email}: {message}"));
        Ok(())
    }
}

/// Schedule a notification to run after the current handler returns its
/// response. Failures are logged and dropped.
pub fn spawn_notification(sink: Arc<dyn NotificationSink>, email: String, message: String) {
    tokio::spawn(async move {
        if let Err(e) = sink.write(&email, &message).await {
            error!(error = %e, email = %email, "background notification failed");
        }
    });
}
