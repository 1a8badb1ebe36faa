pub mod coordinator_error;
pub mod session_error;
