use chrono::Utc;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::sync::mpsc::{channel, Sender};
use tokio::sync::Mutex;
use tokio::time::{interval, Duration};

/// Entries kept in memory for the activity feed.
const TAIL_CAPACITY: usize = 1000;
/// Buffered entries that force a flush before the interval fires.
const FLUSH_THRESHOLD: usize = 100;

#[derive(Debug, Clone)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: chrono::DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
}

/// Shape the logger travels in: cloned into detached tasks and view code,
/// `None` until the app has initialized it.
pub type LoggerHandle = Arc<Mutex<Option<AsyncLogger>>>;

/// Buffered asynchronous logger. Entries flow through an mpsc channel into
/// a background task that appends them to the log file, keeps the recent
/// tail in memory for the UI and broadcasts them to subscribers.
#[derive(Debug, Clone)]
pub struct AsyncLogger {
    sender: Sender<LogEntry>,
    tail: Arc<Mutex<Vec<LogEntry>>>,
    broadcast_tx: broadcast::Sender<LogEntry>,
}

impl AsyncLogger {
    /// Creates the logger and spawns its flush task. Fails when the log
    /// file cannot be opened for appending.
    pub async fn new(log_file_path: &str, flush_interval: Duration) -> std::io::Result<Self> {
        let (sender, mut receiver) = channel::<LogEntry>(1000);
        let tail = Arc::new(Mutex::new(Vec::new()));
        let tail_clone = Arc::clone(&tail);

        let (broadcast_tx, _) = broadcast::channel(1000);
        let broadcast_clone = broadcast_tx.clone();

        let file = Arc::new(Mutex::new(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file_path)?,
        ));

        tokio::spawn(async move {
            let mut buffer = Vec::new();
            let mut interval = interval(flush_interval);

            loop {
                tokio::select! {
                    Some(entry) = receiver.recv() => {
                        let mut tail = tail_clone.lock().await;
                        tail.push(entry.clone());
                        if tail.len() > TAIL_CAPACITY {
                            tail.remove(0);
                        }
                        drop(tail);

                        let _ = broadcast_clone.send(entry.clone());

                        buffer.push(entry);
                        if buffer.len() >= FLUSH_THRESHOLD {
                            flush_entries(&file, &mut buffer).await;
                        }
                    }
                    _ = interval.tick() => {
                        if !buffer.is_empty() {
                            flush_entries(&file, &mut buffer).await;
                        }
                    }
                }
            }
        });

        Ok(AsyncLogger {
            sender,
            tail,
            broadcast_tx,
        })
    }

    /// Queues an entry. Dropped silently when the flush task is saturated.
    pub async fn log(&self, level: LogLevel, message: String) {
        let entry = LogEntry {
            timestamp: Utc::now(),
            level,
            message,
        };
        let _ = self.sender.send(entry).await;
    }

    pub async fn info(&self, message: String) {
        self.log(LogLevel::Info, message).await;
    }

    pub async fn warning(&self, message: String) {
        self.log(LogLevel::Warning, message).await;
    }

    pub async fn error(&self, message: String) {
        self.log(LogLevel::Error, message).await;
    }

    /// The in-memory tail, cloned.
    pub async fn get_logs(&self) -> Vec<LogEntry> {
        self.tail.lock().await.clone()
    }

    pub fn get_logs_arc(&self) -> Arc<Mutex<Vec<LogEntry>>> {
        Arc::clone(&self.tail)
    }

    /// Subscribe to entries as they arrive.
    pub fn subscribe(&self) -> broadcast::Receiver<LogEntry> {
        self.broadcast_tx.subscribe()
    }
}

async fn flush_entries(file: &Arc<Mutex<File>>, buffer: &mut Vec<LogEntry>) {
    let mut file_guard = file.lock().await;
    for entry in buffer.drain(..) {
        let _ = writeln!(
            file_guard,
            "[{}] {:?}: {}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
            entry.level,
            entry.message
        );
    }
    let _ = file_guard.flush();
}

/// Builds a logger wrapped in the handle shape the rest of the app expects.
pub async fn initialize_logger(
    log_file_path: &str,
    flush_interval: Duration,
) -> std::io::Result<LoggerHandle> {
    let logger = AsyncLogger::new(log_file_path, flush_interval).await?;
    Ok(Arc::new(Mutex::new(Some(logger))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_entries_reach_the_tail() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("daoforge.log");
        let logger = AsyncLogger::new(path.to_str().unwrap(), Duration::from_millis(20))
            .await
            .unwrap();

        logger.info("wallet connected".to_string()).await;
        logger.warning("provisioning failed".to_string()).await;

        let mut logs = logger.get_logs().await;
        for _ in 0..50 {
            if logs.len() == 2 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
            logs = logger.get_logs().await;
        }

        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].message, "wallet connected");
        assert_eq!(logs[1].message, "provisioning failed");
    }

    #[tokio::test]
    async fn test_subscribers_see_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("daoforge.log");
        let logger = AsyncLogger::new(path.to_str().unwrap(), Duration::from_millis(20))
            .await
            .unwrap();

        let mut rx = logger.subscribe();
        logger.error("session handshake rejected".to_string()).await;

        let entry = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("broadcast within a second")
            .expect("channel open");
        assert_eq!(entry.message, "session handshake rejected");
    }
}
