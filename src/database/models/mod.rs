pub mod channel;
pub mod subject_package;
pub mod course_package;
pub mod course;
pub mod chapter;

pub use channel::*;
pub use subject_package::*;
pub use course_package::*;
pub use course::*;
pub use chapter::*;

/// Builds `?, ?, ?` for a batched `IN (...)` clause.
pub(crate) fn placeholders(count: usize) -> String {
    std::iter::repeat("?").take(count).collect::<Vec<_>>().join(",")
}
