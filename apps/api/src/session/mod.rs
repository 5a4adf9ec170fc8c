// Sign-in sessions and the per-session workspace they gate.
// All state is in memory and disappears with the process.

pub mod extract;
pub mod handlers;
pub mod registry;
pub mod workspace;

/// Request header carrying the session id returned at sign-in.
pub const SESSION_HEADER: &str = "x-session-id";
