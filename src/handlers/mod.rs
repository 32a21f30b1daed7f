pub mod create_log;
pub mod get_call_log;
pub mod list_call_logs;

pub use create_log::create_log_handler;
pub use get_call_log::get_call_log_handler;
pub use list_call_logs::list_call_logs_handler;
