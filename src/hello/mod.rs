//! Deployment smoke-test Lambda

pub mod handler;

pub use handler::function_handler as handler;
