//! Command types and definitions.

use std::fmt;

/// Arguments for answering a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerArgs {
    pub id: String,
    pub answer: String,
}

/// Available bot commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    /// List all prompt templates.
    List,

    /// Show the details of a template.
    View(String),

    /// Pose a template's question.
    Ask(String),

    /// Check an answer against a template.
    Answer(AnswerArgs),

    /// Print a template's record as JSON.
    Export(String),

    /// Reload the template file.
    Reload,

    /// Show help information.
    Help,

    /// Show information about the bot.
    Info,
}

impl BotCommand {
    /// Parses a command from a message text.
    ///
    /// Returns `None` if the message is not a valid command.
    #[must_use]
    pub fn parse(text: &str, prefix: &str) -> Option<Self> {
        let text = text.trim();

        let after_prefix = text.strip_prefix(prefix)?.trim_start();

        let (cmd, args) = match after_prefix.split_once(char::is_whitespace) {
            Some((cmd, args)) => (cmd.to_lowercase(), Some(args.trim())),
            None => (after_prefix.to_lowercase(), None),
        };

        let target = || args.filter(|a| !a.is_empty()).map(ToOwned::to_owned);

        match cmd.as_str() {
            "list" | "ls" | "l" => Some(Self::List),
            "view" | "show" => target().map(Self::View),
            "ask" | "q" => target().map(Self::Ask),
            "answer" | "a" => Self::parse_answer(args?),
            "export" | "json" => target().map(Self::Export),
            "reload" | "refresh" => Some(Self::Reload),
            "help" | "h" | "?" => Some(Self::Help),
            "info" | "about" | "version" => Some(Self::Info),
            _ => None,
        }
    }

    /// Parses answer command arguments: `<id> <answer>`
    ///
    /// The answer keeps its inner whitespace; only the gap after the id and
    /// the message edges are trimmed.
    fn parse_answer(args: &str) -> Option<Self> {
        let (id, answer) = args.split_once(char::is_whitespace)?;
        let answer = answer.trim_start();

        if id.is_empty() || answer.is_empty() {
            return None;
        }

        Some(Self::Answer(AnswerArgs {
            id: id.to_owned(),
            answer: answer.to_owned(),
        }))
    }

    /// Returns the command name as it appears in help.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::View(_) => "view",
            Self::Ask(_) => "ask",
            Self::Answer(_) => "answer",
            Self::Export(_) => "export",
            Self::Reload => "reload",
            Self::Help => "help",
            Self::Info => "info",
        }
    }

    /// Returns all available commands with their aliases and descriptions.
    #[must_use]
    pub fn all_commands() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            ("list", "(ls)", "List all prompt templates"),
            ("view <id>", "(show)", "View details of a prompt"),
            ("ask <id>", "(q)", "Ask a prompt's question"),
            ("answer <id> <text>", "(a)", "Check an answer against a prompt"),
            ("export <id>", "(json)", "Show a prompt's JSON record"),
            ("reload", "", "Reload prompts from file"),
            ("info", "", "Show bot information"),
            ("help", "(h, ?)", "Show this help message"),
        ]
    }
}

impl fmt::Display for BotCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::View(id) | Self::Ask(id) | Self::Export(id) => write!(f, "{} {id}", self.name()),
            // Answers may be secrets; keep them out of logs.
            Self::Answer(args) => write!(f, "answer {} <{} chars>", args.id, args.answer.chars().count()),
            _ => write!(f, "{}", self.name()),
        }
    }
}

/// Result of command execution.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Whether the command was successful.
    pub success: bool,

    /// Response message to show the user.
    pub message: String,
}

impl CommandResult {
    /// Creates a successful result.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Creates an error result.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
