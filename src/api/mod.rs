//! List-tasks Lambda handler and response builders

pub mod handler;
pub mod response;

// Re-export the main handler for convenience
pub use handler::function_handler as handler;
