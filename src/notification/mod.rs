pub mod tracing_warning_sink;
pub mod warning_sink;
