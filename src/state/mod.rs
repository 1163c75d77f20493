/// State management module
///
/// This module handles all editor state, including:
/// - Shared data structures (data.rs)
/// - The editing session: strip, geometry, offsets, description (session.rs)

pub mod data;
pub mod session;

pub use session::{EditorSession, LoadOutcome, LoadTicket, SessionError};
