/// Sends reply messages back to the chat
pub mod feedback;
/// Consistent log line formats
pub mod logging;
