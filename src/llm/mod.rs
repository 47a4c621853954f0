pub mod provider;
pub mod openai;
pub mod gemini;
pub mod stub;
pub mod router;
pub mod types;
pub mod catalog;
pub mod json;

pub use provider::LLMProvider;
pub use router::create_provider;
pub use stub::StubProvider;
pub use types::{CallConfig, HarmBlockThreshold, HarmCategory, SafetySetting, StructuredRequest};
