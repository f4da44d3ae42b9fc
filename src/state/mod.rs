/// State management module
///
/// This module handles all session state:
/// - Shared data structures (data.rs)
/// - Revocable preview handles (preview.rs)
/// - The selected photo and analysis state machine (session.rs)

pub mod data;
pub mod preview;
pub mod session;

pub use session::{AnalysisState, Session};
