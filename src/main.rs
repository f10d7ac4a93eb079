use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use bot_tools::cli::Commands;
use bot_tools::{Exchange, ExchangePromptUseCase, ExchangerConfig, OpenAiChatClient, UsageReport};

#[derive(Parser)]
#[command(name = "bot-tools")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    // stdout is reserved for the reply
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if dotenv::dotenv().is_ok() {
        debug!("Loaded environment from .env");
    }
    let config = ExchangerConfig::from_env();
    debug!("Using {:?}", config);

    match cli.command.unwrap_or_default() {
        Commands::Ask { prompt, model } => {
            let model = model.unwrap_or_else(|| config.model().to_string());
            let client = Arc::new(OpenAiChatClient::new(&config));
            let use_case = ExchangePromptUseCase::new(client);

            let exchange = use_case.execute(Exchange::new(prompt, model)).await?;
            if let Some(reply) = exchange.reply() {
                println!("{}", reply);
            }
        }

        Commands::Usage => {
            let report = UsageReport::sample();
            println!("Sample token usage (placeholder figures, no metering source):");
            print!("{}", report);
        }
    }

    Ok(())
}

#[cfg(test)]
mod cli_tests {
    use super::*;
    use bot_tools::cli::DEFAULT_PROMPT;

    #[test]
    fn no_arguments_runs_default_ask() {
        let cli = Cli::try_parse_from(["bot-tools"]).unwrap();
        match cli.command.unwrap_or_default() {
            Commands::Ask { prompt, model } => {
                assert_eq!(prompt, DEFAULT_PROMPT);
                assert!(model.is_none());
            }
            other => panic!("expected Ask, got {other:?}"),
        }
    }

    #[test]
    fn ask_accepts_prompt_and_model_overrides() {
        let cli = Cli::try_parse_from([
            "bot-tools",
            "ask",
            "--prompt",
            "What is 2+2?",
            "--model",
            "gpt-4",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Ask { prompt, model }) => {
                assert_eq!(prompt, "What is 2+2?");
                assert_eq!(model.as_deref(), Some("gpt-4"));
            }
            other => panic!("expected Ask, got {other:?}"),
        }
    }

    #[test]
    fn usage_subcommand_parses_with_global_verbose() {
        let cli = Cli::try_parse_from(["bot-tools", "usage", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Usage)));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let res = Cli::try_parse_from(["bot-tools", "--stream"]);
        assert!(res.is_err());
    }
}
