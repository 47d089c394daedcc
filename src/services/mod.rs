pub mod advice;
pub mod gemini; // Google Generative Language API

pub use advice::AdviceModel;
pub use gemini::GeminiClient;
