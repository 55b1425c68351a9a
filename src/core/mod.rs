//! Task domain: configuration, records, the storage seam and data access.

pub mod config;
pub mod models;
pub mod store;
pub mod tasks;

pub use store::TaskStore;
pub use tasks::list_tasks;
