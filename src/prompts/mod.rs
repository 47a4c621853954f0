pub mod loader;
pub mod template;

pub use loader::PromptLoader;
pub use template::{PromptTemplate, PromptVariables};
