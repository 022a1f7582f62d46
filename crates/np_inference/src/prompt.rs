use np_core::PromptArticle;

pub const SYSTEM_PROMPT: &str = "You are a professional LinkedIn content creator. \
You write short, opinionated posts that start conversations among professionals.";

pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 300;

/// Numbers the articles from 1, title on one line and description on the
/// next, separated by blank lines.
pub fn article_block(articles: &[PromptArticle]) -> String {
    articles
        .iter()
        .enumerate()
        .map(|(i, article)| format!("{}. {}\n{}", i + 1, article.title, article.description))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn user_prompt(articles: &[PromptArticle]) -> String {
    format!(
        "Write a LinkedIn post about the following news articles:\n\n{}\n\n\
         Requirements:\n\
         - 5 to 7 lines long\n\
         - Take a clear, opinionated stance and explain why it matters\n\
         - Use emojis sparingly (two at most)\n\
         - End with a question that invites discussion\n\
         - Return only the post text",
        article_block(articles)
    )
}
