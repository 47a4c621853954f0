//! AI flows: a typed input contract, a fixed prompt template, one structured
//! completion call, and a schema-checked typed output.

pub mod categorize;
pub mod contract;
pub mod reminder;

use std::sync::Arc;
use std::time::Instant;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::SmartdoError;
use crate::llm::{CallConfig, LLMProvider, StructuredRequest};
use crate::prompts::template::variables_from_value;
use crate::prompts::{PromptLoader, PromptTemplate};

pub use categorize::{CategorizationRequest, CategorizationResponse, CategorizeTaskFlow};
pub use reminder::{ReminderRequest, ReminderResponse, ScheduleReminderFlow};

pub trait Flow {
    type Input: Serialize + Send + Sync;
    type Output: DeserializeOwned;

    const NAME: &'static str;

    fn prompt() -> &'static PromptTemplate;
    fn input_schema() -> &'static Value;
    fn output_schema() -> &'static Value;

    fn call_config() -> CallConfig {
        CallConfig::default()
    }

    /// Semantic checks the input schema cannot express.
    fn validate(_input: &Self::Input) -> Result<(), SmartdoError> {
        Ok(())
    }
}

/// Built-in prompts of every flow, for loading overrides up front.
pub fn builtin_prompts() -> [&'static PromptTemplate; 2] {
    [CategorizeTaskFlow::prompt(), ScheduleReminderFlow::prompt()]
}

/// Executes flows against one provider. Cheap to clone; holds no per-call state.
#[derive(Clone)]
pub struct FlowRunner {
    provider: Arc<dyn LLMProvider>,
    prompts: PromptLoader,
}

impl FlowRunner {
    pub fn new(provider: Arc<dyn LLMProvider>, prompts: PromptLoader) -> Self {
        Self { provider, prompts }
    }

    pub async fn run<F: Flow>(&self, input: &F::Input) -> Result<F::Output, SmartdoError> {
        let input_value = serde_json::to_value(input)?;
        contract::check_input(F::NAME, F::input_schema(), &input_value)?;
        F::validate(input)?;

        let template = self.prompts.resolve(F::prompt());
        let prompt = template.render(&variables_from_value(&input_value)?)?;

        let request = StructuredRequest {
            name: F::NAME.to_string(),
            prompt,
            schema: F::output_schema().clone(),
            config: F::call_config(),
        };

        let started = Instant::now();
        debug!(
            flow = F::NAME,
            provider = self.provider.provider_name(),
            model = self.provider.model_name(),
            "Running flow"
        );

        let value = self
            .provider
            .complete_structured(&request)
            .await?
            .ok_or_else(|| {
                SmartdoError::Upstream(format!("{} returned no structured output", F::NAME))
            })?;

        contract::check_output(F::NAME, F::output_schema(), &value)?;
        let output = serde_json::from_value(value).map_err(|e| {
            SmartdoError::OutputValidation(format!("{} output did not deserialize: {}", F::NAME, e))
        })?;

        info!(flow = F::NAME, elapsed_ms = started.elapsed().as_millis() as u64, "Flow completed");
        Ok(output)
    }
}
