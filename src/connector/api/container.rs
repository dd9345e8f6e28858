use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use tracing::debug;

use crate::application::{
    ChatClient, CompareVehiclesUseCase, EstimatePriceUseCase, ExtractDetailsUseCase,
    GenerationParams,
};
use crate::connector::adapter::{MockChatClient, OpenAiChatClient};

pub struct ContainerConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    /// Upper bound on a single completion call.
    pub request_timeout: Duration,
    /// Serve canned model replies instead of calling the provider.
    pub mock_llm: bool,
}

/// Holds the configured completion clients and hands out use cases.
///
/// Clients are built once at startup; use cases are cheap per-request
/// wrappers around them.
pub struct Container {
    comparison_client: Arc<dyn ChatClient>,
    pricing_client: Arc<dyn ChatClient>,
    extraction_client: Arc<dyn ChatClient>,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        if config.mock_llm {
            debug!("Using mock chat completion clients");
            return Ok(Self::from_clients(
                Arc::new(MockChatClient::comparison()),
                Arc::new(MockChatClient::pricing()),
                Arc::new(MockChatClient::details()),
            ));
        }

        let Some(api_key) = config.api_key.filter(|k| !k.trim().is_empty()) else {
            bail!("OPENAI_API_KEY is not set (pass --mock-llm to run without a provider)");
        };

        debug!(
            "Using chat completions at {} with model {}",
            config.base_url, config.model
        );

        let comparison: Arc<dyn ChatClient> = Arc::new(OpenAiChatClient::new(
            api_key.clone(),
            &config.base_url,
            GenerationParams::comparison().with_model(&config.model),
            config.request_timeout,
        )?);
        let pricing: Arc<dyn ChatClient> = Arc::new(OpenAiChatClient::new(
            api_key,
            &config.base_url,
            GenerationParams::pricing().with_model(&config.model),
            config.request_timeout,
        )?);

        Ok(Self::from_clients(comparison.clone(), pricing, comparison))
    }

    pub fn from_clients(
        comparison_client: Arc<dyn ChatClient>,
        pricing_client: Arc<dyn ChatClient>,
        extraction_client: Arc<dyn ChatClient>,
    ) -> Self {
        Self {
            comparison_client,
            pricing_client,
            extraction_client,
        }
    }

    pub fn compare_use_case(&self) -> CompareVehiclesUseCase {
        CompareVehiclesUseCase::new(self.comparison_client.clone())
    }

    pub fn estimate_use_case(&self) -> EstimatePriceUseCase {
        EstimatePriceUseCase::new(self.pricing_client.clone())
    }

    pub fn extract_use_case(&self) -> ExtractDetailsUseCase {
        ExtractDetailsUseCase::new(self.extraction_client.clone())
    }
}
