pub mod call_log;
