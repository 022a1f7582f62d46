use std::sync::Arc;
use np_core::Config;
use np_inference::{create_model, InferenceModel, ModelKind};
use np_linkedin::{LinkedInClient, StateSigner};
use np_news::{GoogleNewsSource, NewsSource};
use reqwest::Client;

pub struct AppState {
    pub config: Arc<Config>,
    pub news: Arc<dyn NewsSource>,
    pub inference_model: Arc<dyn InferenceModel>,
    pub linkedin: LinkedInClient,
    pub state_signer: StateSigner,
}

impl AppState {
    /// Wires the production sources around one shared HTTP client.
    pub fn from_config(config: Config, model: ModelKind) -> Self {
        let client = Client::new();
        Self {
            news: Arc::new(GoogleNewsSource::from_config(client.clone(), &config)),
            inference_model: create_model(model, client.clone(), &config),
            linkedin: LinkedInClient::from_config(client, &config),
            state_signer: StateSigner::from_config(&config),
            config: Arc::new(config),
        }
    }
}
