pub mod models;
pub mod prompt;

pub use models::{create_model, InferenceModel, ModelKind};
