pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, ErrorKind, UpstreamFailure};
pub use types::{Article, GeneratedPost, OAuthToken, PostDraft, PromptArticle};

pub type Result<T> = std::result::Result<T, Error>;

/// Placeholder used when a feed item carries no description.
pub const DESCRIPTION_PLACEHOLDER: &str = "No description available";
