use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Folio: chat with a portfolio's AI assistant from the terminal.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Interactive chat session (default).
    Chat,
    /// Ask a single question and print the reply.
    Ask {
        /// The question; multiple words are joined with spaces.
        #[arg(required = true, trailing_var_arg = true)]
        question: Vec<String>,
    },
    /// Print the system instruction composed from the portfolio content.
    Prompt,
    /// Print the effective configuration as JSON.
    Config,
}

impl Args {
    pub fn command(&self) -> &Command {
        self.command.as_ref().unwrap_or(&Command::Chat)
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_chat() {
        let args = Args::try_parse_from(["folio"]).unwrap();
        assert_eq!(args.command(), &Command::Chat);
        assert!(args.config.is_none());
    }

    #[test]
    fn ask_joins_words() {
        let args = Args::try_parse_from(["folio", "ask", "What's", "your", "experience?"]).unwrap();
        match args.command() {
            Command::Ask { question } => assert_eq!(question.join(" "), "What's your experience?"),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn ask_requires_question() {
        assert!(Args::try_parse_from(["folio", "ask"]).is_err());
    }

    #[test]
    fn config_subcommand() {
        let args = Args::try_parse_from(["folio", "config"]).unwrap();
        assert_eq!(args.command(), &Command::Config);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["folio", "prompt", "--config", "/tmp/f.toml", "--log-level", "debug"])
                .unwrap();
        assert_eq!(args.command(), &Command::Prompt);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/f.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }
}
