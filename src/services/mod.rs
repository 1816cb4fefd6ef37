/// Full `/c` pipeline: fetch, synchronize, reload, resolve
pub mod course_access;
/// Picks the entry course and chapter for each channel
pub mod eligibility;
/// HTTP health endpoints
pub mod health;
/// Turns resolution records into outbound messages
pub mod reply;
/// Refreshes `youtubeSubject` from `subject`
pub mod sync;
