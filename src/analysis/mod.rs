/// Skin analysis module
///
/// This module handles:
/// - Building the fixed analysis prompt
/// - Calling the Gemini generateContent API with the photo
/// - Cleaning markdown out of the model's answer
/// - Splitting the answer into display lines with warning flags

pub mod gemini;
pub mod normalize;
pub mod pipeline;
pub mod prompt;
pub mod render;

pub use gemini::GeminiClient;
pub use pipeline::analyze;
