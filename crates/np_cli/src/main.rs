use anyhow::Context;
use clap::Parser;
use np_core::PromptArticle;
use np_web::logging::init_logging;
use np_web::prelude::{serve, AppState, Config, ModelKind};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "News-to-LinkedIn relay", long_about = None)]
pub struct Cli {
    #[arg(long, global = true)]
    verbose: bool,
    #[arg(long, default_value = "openrouter", help = "Model used for drafting. Available models: openrouter (default), dummy")]
    model: ModelKind,
    #[command(flatten)]
    config: Config,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server (default)
    Serve,
    /// Print the top articles for a keyword
    News {
        keyword: String,
    },
    /// Fetch articles for a keyword and draft a post from them
    Draft {
        keyword: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let log = init_logging(cli.verbose);

    let state = AppState::from_config(cli.config, cli.model);
    log.info(&format!("🧠 Drafting with {}", state.inference_model.name()));

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            serve(state).await.context("server stopped")?;
        }
        Commands::News { keyword } => {
            let articles = state.news.search(&keyword).await?;
            for (i, article) in articles.iter().enumerate() {
                println!("{}. {}\n   {}\n   {}", i + 1, article.title, article.pub_date, article.link);
            }
        }
        Commands::Draft { keyword } => {
            info!("📰 Looking up '{}' on {}", keyword, state.news.source());
            let articles: Vec<PromptArticle> = state
                .news
                .search(&keyword)
                .await?
                .into_iter()
                .map(PromptArticle::from)
                .collect();
            let post = state.inference_model.draft_post(&articles).await?;
            println!("{}", post.as_str());
        }
    }

    Ok(())
}
