use std::env;

use crate::errors::TaskError;

/// Table scanned when `TASKS_TABLE_NAME` is not set.
pub const DEFAULT_TABLE_NAME: &str = "TasksTable";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub table_name: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, TaskError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TaskError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name = match lookup("TASKS_TABLE_NAME") {
            Some(name) if name.trim().is_empty() => {
                return Err(TaskError::Config(
                    "TASKS_TABLE_NAME: must not be empty".to_string(),
                ));
            }
            Some(name) => name,
            None => DEFAULT_TABLE_NAME.to_string(),
        };

        Ok(Self { table_name })
    }
}
