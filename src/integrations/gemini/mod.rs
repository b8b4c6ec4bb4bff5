pub mod client;

pub use client::{GeminiClient, API_KEY_VAR, MODEL_VAR};
