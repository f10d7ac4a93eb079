use clap::Subcommand;

/// Prompt sent when `ask` is run without `--prompt`.
pub const DEFAULT_PROMPT: &str = "Quel est le sens de la vie ?";

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Send one prompt to the chat-completion API and print the reply
    Ask {
        #[arg(short, long, default_value = DEFAULT_PROMPT)]
        prompt: String,

        /// Model identifier; falls back to OPENAI_MODEL, then gpt-4
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Print the sample token usage report
    Usage,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Ask {
            prompt: DEFAULT_PROMPT.to_string(),
            model: None,
        }
    }
}
