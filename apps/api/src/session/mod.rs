// Search sessions: the discover screen's view state as an explicit state
// machine, plus the in-memory store and HTTP surface that drive it.

pub mod handlers;
pub mod machine;
pub mod store;
