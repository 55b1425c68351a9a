#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};
use tasks::core::TaskStore;
use tasks::core::models::{Record, ScanPage};
use tasks::errors::TaskError;

/// In-memory store answering every scan the same way.
pub enum FakeStore {
    Page(ScanPage),
    Unavailable(&'static str),
    Broken(&'static str),
}

impl FakeStore {
    pub fn with_items(items: Vec<Record>) -> Self {
        FakeStore::Page(ScanPage {
            items: Some(items),
            truncated: false,
        })
    }
}

#[async_trait]
impl TaskStore for FakeStore {
    async fn scan(&self) -> Result<ScanPage, TaskError> {
        match self {
            FakeStore::Page(page) => Ok(page.clone()),
            FakeStore::Unavailable(msg) => Err(TaskError::StorageUnavailable((*msg).to_string())),
            FakeStore::Broken(msg) => Err(TaskError::Storage((*msg).to_string())),
        }
    }
}

pub fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("record must be an object, got {other}"),
    }
}

pub fn sample_tasks(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            record(json!({
                "id": format!("task-{i}"),
                "title": format!("Task {i}"),
                "done": i % 2 == 0,
            }))
        })
        .collect()
}

/// Collects everything written by a `fmt` subscriber installed for the
/// current thread.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Routes this thread's logs into the returned buffer until the guard drops.
pub fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
}
