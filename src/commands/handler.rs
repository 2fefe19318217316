//! Command handler implementation.

use std::path::PathBuf;

use serde_json::Value;
use tracing::{debug, info, warn};

use super::types::{AnswerArgs, BotCommand, CommandResult};
use crate::config::{PromptTemplate, PromptTemplates};
use crate::prompts::Prompt;

/// Handles bot commands against a set of prompt templates.
pub struct CommandHandler {
    /// Command prefix (e.g., "`/prompt_bot`").
    prefix: String,

    /// Loaded templates.
    templates: PromptTemplates,

    /// Path to the template file (for reloading).
    templates_path: PathBuf,
}

impl CommandHandler {
    /// Creates a new command handler.
    #[must_use]
    pub fn new(prefix: String, templates: PromptTemplates, templates_path: impl Into<PathBuf>) -> Self {
        Self {
            prefix,
            templates,
            templates_path: templates_path.into(),
        }
    }

    /// The currently loaded templates.
    #[must_use]
    pub const fn templates(&self) -> &PromptTemplates {
        &self.templates
    }

    /// Tries to parse and execute a command from a message.
    ///
    /// Returns `None` if the message is not a command.
    pub fn try_handle(&mut self, message_text: &str) -> Option<CommandResult> {
        let command = BotCommand::parse(message_text, &self.prefix)?;

        debug!("Handling command: {}", command);
        let result = self.execute(command);
        info!("Command result: success={}", result.success);

        Some(result)
    }

    /// Executes a parsed command.
    pub fn execute(&mut self, command: BotCommand) -> CommandResult {
        match command {
            BotCommand::List => self.handle_list(),
            BotCommand::View(id) => self.handle_view(&id),
            BotCommand::Ask(id) => self.handle_ask(&id),
            BotCommand::Answer(args) => self.handle_answer(&args),
            BotCommand::Export(id) => self.handle_export(&id),
            BotCommand::Reload => self.handle_reload(),
            BotCommand::Help => self.handle_help(),
            BotCommand::Info => Self::handle_info(),
        }
    }

    fn find(&self, id: &str) -> Result<&PromptTemplate, CommandResult> {
        self.templates.find(id).ok_or_else(|| {
            CommandResult::error(format!(
                "Prompt not found: '{id}'. Use 'list' to see available prompts."
            ))
        })
    }

    fn handle_list(&self) -> CommandResult {
        if self.templates.is_empty() {
            return CommandResult::error("No prompts configured.");
        }

        let mut lines = vec!["Configured prompts:".to_owned()];

        for (i, template) in self.templates.prompts.iter().enumerate() {
            lines.push(format!(
                "  {}. [{}] {} ({})",
                i + 1,
                template.id,
                truncate(template.prompt.question(), 40),
                template.prompt.kind()
            ));
        }

        CommandResult::success(lines.join("\n"))
    }

    fn handle_view(&self, id: &str) -> CommandResult {
        let template = match self.find(id) {
            Ok(t) => t,
            Err(e) => return e,
        };

        let mut lines = vec![
            format!("Prompt [{}]:", template.id),
            format!("Question: \"{}\"", template.prompt.question()),
            format!("Kind: {}", template.prompt.kind()),
        ];

        match &template.prompt {
            Prompt::Base(_) | Prompt::Text(_) => {}
            Prompt::Number(p) => {
                let bounds = p.bounds_hint().unwrap_or_else(|| "none".to_owned());
                lines.push(format!("Bounds: {bounds}"));
            }
            Prompt::MultiChoice(p) => {
                lines.push(format!("Options: {}", p.options().join(", ")));
            }
            Prompt::Email(p) => {
                lines.push(format!("Allowed domains: {}", list_or_any(p.allowed_domains())));
                lines.push(format!("Blocked domains: {}", list_or_none(p.blocked_domains())));
            }
            Prompt::Password(p) => {
                lines.push(format!("Accepted passwords: {}", p.passwords().len()));
            }
        }

        CommandResult::success(lines.join("\n"))
    }

    fn handle_ask(&self, id: &str) -> CommandResult {
        let template = match self.find(id) {
            Ok(t) => t,
            Err(e) => return e,
        };

        let mut lines = vec![template.prompt.question().to_owned()];

        match &template.prompt {
            Prompt::Number(p) => {
                if let Some(hint) = p.bounds_hint() {
                    lines.push(format!("(a whole number {hint})"));
                }
            }
            Prompt::MultiChoice(p) => {
                for (i, option) in p.options().iter().enumerate() {
                    lines.push(format!("  {}. {option}", i + 1));
                }
            }
            _ => {}
        }

        lines.push(format!("Reply with: {} answer {} <answer>", self.prefix, template.id));

        CommandResult::success(lines.join("\n"))
    }

    fn handle_answer(&self, args: &AnswerArgs) -> CommandResult {
        let template = match self.find(&args.id) {
            Ok(t) => t,
            Err(e) => return e,
        };

        let accepted = match &template.prompt {
            Prompt::MultiChoice(p) => Ok(p.is_option(&args.answer)),
            prompt => prompt.validate(&args.answer),
        };

        match accepted {
            Ok(true) => CommandResult::success(format!("✓ Answer accepted for [{}].", template.id)),
            Ok(false) => CommandResult::error(format!(
                "✗ Answer rejected for [{}]: {}",
                template.id,
                rejection_reason(&template.prompt)
            )),
            Err(e) => CommandResult::error(format!("✗ Invalid answer for [{}]: {e}", template.id)),
        }
    }

    fn handle_export(&self, id: &str) -> CommandResult {
        let template = match self.find(id) {
            Ok(t) => t,
            Err(e) => return e,
        };

        match serde_json::to_string_pretty(&Value::Object(template.prompt.to_record())) {
            Ok(json) => CommandResult::success(json),
            Err(e) => CommandResult::error(format!("Failed to export: {e}")),
        }
    }

    fn handle_reload(&mut self) -> CommandResult {
        match PromptTemplates::load_from_file(&self.templates_path) {
            Ok(new_templates) => {
                if let Err(e) = new_templates.validate() {
                    warn!("Rejected reloaded templates: {}", e);
                    return CommandResult::error(format!("Validation failed: {e}"));
                }

                let old_len = self.templates.len();
                self.templates = new_templates;

                CommandResult::success(format!(
                    "✓ Reloaded prompts. {old_len} → {} prompts.",
                    self.templates.len()
                ))
            }
            Err(e) => CommandResult::error(format!("Failed to reload: {e}")),
        }
    }

    fn handle_help(&self) -> CommandResult {
        let mut lines = vec![
            format!("Prompt Bot Commands (prefix: {})", self.prefix),
            String::new(),
        ];

        for (cmd, aliases, desc) in BotCommand::all_commands() {
            let alias_str = if aliases.is_empty() {
                String::new()
            } else {
                format!(" {aliases}")
            };
            lines.push(format!("  {cmd}{alias_str} - {desc}"));
        }

        CommandResult::success(lines.join("\n"))
    }

    fn handle_info() -> CommandResult {
        let version = env!("CARGO_PKG_VERSION");
        CommandResult::success(format!(
            "Prompt Bot v{version}\n\
             Asks questions and validates the answers."
        ))
    }
}

fn rejection_reason(prompt: &Prompt) -> String {
    match prompt {
        Prompt::Number(p) => p.bounds_hint().map_or_else(
            || "number out of range".to_owned(),
            |hint| format!("number must be {hint}"),
        ),
        Prompt::MultiChoice(p) => format!("choose one of: {}", p.options().join(", ")),
        Prompt::Email(_) => "email domain is not accepted".to_owned(),
        Prompt::Password(_) => "incorrect password".to_owned(),
        Prompt::Base(_) | Prompt::Text(_) => "not accepted".to_owned(),
    }
}

fn list_or_any(items: &[String]) -> String {
    if items.is_empty() {
        "any".to_owned()
    } else {
        items.join(", ")
    }
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_owned()
    } else {
        items.join(", ")
    }
}

/// Truncates a string to a maximum length, adding "..." if truncated.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_owned()
    } else {
        format!("{}...", s.chars().take(max_len).collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "/prompt_bot";

    fn handler() -> CommandHandler {
        CommandHandler::new(PREFIX.to_owned(), PromptTemplates::example(), "unused.json")
    }

    fn run(handler: &mut CommandHandler, text: &str) -> CommandResult {
        handler.try_handle(text).unwrap()
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello", 10), "Hello");
        assert_eq!(truncate("Hello, World!", 5), "Hello...");
        assert_eq!(truncate("Hi", 2), "Hi");
    }

    #[test]
    fn test_not_a_command() {
        assert!(handler().try_handle("hello there").is_none());
    }

    #[test]
    fn test_list() {
        let result = run(&mut handler(), "/prompt_bot list");
        assert!(result.success);
        assert!(result.message.contains("[age]"));
        assert!(result.message.contains("(multiple choice)"));
    }

    #[test]
    fn test_view_hides_passwords() {
        let result = run(&mut handler(), "/prompt_bot view password");
        assert!(result.success);
        assert!(result.message.contains("Accepted passwords: 1"));
        assert!(!result.message.contains("open sesame"));
    }

    #[test]
    fn test_view_unknown() {
        let result = run(&mut handler(), "/prompt_bot view nope");
        assert!(!result.success);
        assert!(result.message.contains("not found"));
    }

    #[test]
    fn test_ask_lists_options() {
        let result = run(&mut handler(), "/prompt_bot ask team");
        assert!(result.success);
        assert!(result.message.starts_with("Which team are you on?"));
        assert!(result.message.contains("  2. Blue"));
    }

    #[test]
    fn test_answer_number() {
        let mut handler = handler();
        assert!(run(&mut handler, "/prompt_bot answer age 0").success);
        assert!(!run(&mut handler, "/prompt_bot answer age 130").success);

        let result = run(&mut handler, "/prompt_bot answer age old");
        assert!(!result.success);
        assert!(result.message.contains("Invalid answer"));
    }

    #[test]
    fn test_answer_by_position() {
        assert!(run(&mut handler(), "/prompt_bot answer 2 42").success);
    }

    #[test]
    fn test_answer_multi_choice_checks_options() {
        let mut handler = handler();
        assert!(run(&mut handler, "/prompt_bot answer team Red").success);
        let result = run(&mut handler, "/prompt_bot answer team Purple");
        assert!(!result.success);
        assert!(result.message.contains("choose one of"));
    }

    #[test]
    fn test_answer_email() {
        let mut handler = handler();
        assert!(run(&mut handler, "/prompt_bot answer email ada@work.org").success);
        assert!(!run(&mut handler, "/prompt_bot answer email ada@example.com").success);
        assert!(!run(&mut handler, "/prompt_bot answer email ada").success);
    }

    #[test]
    fn test_answer_password() {
        let mut handler = handler();
        assert!(run(&mut handler, "/prompt_bot answer password open sesame").success);
        assert!(!run(&mut handler, "/prompt_bot answer password Open Sesame").success);
    }

    #[test]
    fn test_answer_text_accepts_anything() {
        assert!(run(&mut handler(), "/prompt_bot answer name Ada").success);
    }

    #[test]
    fn test_export_emits_record() {
        let result = run(&mut handler(), "/prompt_bot export age");
        assert!(result.success);
        let value: Value = serde_json::from_str(&result.message).unwrap();
        assert_eq!(value["type"], 2);
        assert_eq!(value["bounds"]["upper"], 130);
    }

    #[test]
    fn test_reload_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prompts.json");
        let templates = PromptTemplates {
            prompts: vec![PromptTemplate::new("only", Prompt::text("Just one?"))],
        };
        templates.save_to_file(&path).unwrap();

        let mut handler = CommandHandler::new(PREFIX.to_owned(), PromptTemplates::example(), &path);
        let result = run(&mut handler, "/prompt_bot reload");
        assert!(result.success);
        assert_eq!(handler.templates().len(), 1);
    }

    #[test]
    fn test_reload_missing_file_keeps_templates() {
        let dir = tempfile::tempdir().unwrap();
        let mut handler = CommandHandler::new(
            PREFIX.to_owned(),
            PromptTemplates::example(),
            dir.path().join("missing.json"),
        );
        let result = run(&mut handler, "/prompt_bot reload");
        assert!(!result.success);
        assert_eq!(handler.templates().len(), 5);
    }

    #[test]
    fn test_help_lists_commands() {
        let result = run(&mut handler(), "/prompt_bot help");
        assert!(result.message.contains("answer <id> <text>"));
    }
}
