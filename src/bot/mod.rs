/// Command definitions and their handlers
pub mod commands;
/// Dispatcher schema and update routing
pub mod handlers;
