//! Prompt Bot - Main Entry Point
//!
//! Loads prompt templates and answers text commands read from stdin, or asks
//! a single prompt interactively on the terminal.

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::{Input, Password, Select};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use prompt_bot::commands::CommandHandler;
use prompt_bot::config::{BotSettings, PromptTemplate, PromptTemplates};
use prompt_bot::prompts::{NumberPrompt, Prompt};

/// Ask questions and validate the answers.
#[derive(Parser, Debug)]
#[command(name = "prompt_bot")]
#[command(about = "Ask prompt templates and validate answers")]
#[command(version)]
struct Args {
    /// Path to the prompt templates JSON file (defaults to `PROMPTS_PATH` or prompts.json).
    #[arg(short, long)]
    templates: Option<PathBuf>,

    /// Path to the .env file for environment variables.
    #[arg(long, default_value = ".env")]
    env_file: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Generate an example templates file and exit.
    #[arg(long)]
    generate_config: bool,

    /// Serialize and rebuild a sample prompt, print both records and exit.
    #[arg(long)]
    demo: bool,

    /// Ask the prompt with this id (or 1-based position) interactively and exit.
    #[arg(long, value_name = "ID")]
    ask: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load .env before reading settings so it can provide them.
    let env_result = dotenvy::from_filename(&args.env_file);
    let settings = BotSettings::from_env_with_defaults();

    init_logging(args.log_level.as_deref().unwrap_or(&settings.log_level));

    if let Err(e) = env_result {
        debug!("Could not load .env file ({}): {}", args.env_file, e);
    }

    if args.generate_config {
        return generate_example_config();
    }

    if args.demo {
        return run_demo();
    }

    let templates_path = args.templates.unwrap_or(settings.templates_path);

    let templates = PromptTemplates::load_from_file(&templates_path)
        .with_context(|| format!("Failed to load prompt templates from {}", templates_path.display()))?;

    templates
        .validate()
        .context("Prompt template validation failed")?;

    info!("Loaded {} prompt templates", templates.len());

    if let Some(id) = args.ask {
        let template = templates
            .find(&id)
            .with_context(|| format!("Prompt not found: '{id}'"))?;
        return ask_interactive(template);
    }

    let prefix = settings.command_prefix.clone();
    let handler = CommandHandler::new(settings.command_prefix, templates, templates_path);

    info!("Command prefix: {}", prefix);
    run_repl(handler, &prefix)
}

/// Initializes the logging subsystem.
fn init_logging(level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Generates an example templates file.
fn generate_example_config() -> Result<()> {
    let example = PromptTemplates::example();
    example.save_to_file("prompts.example.json")?;

    println!("✓ Example templates written to: prompts.example.json");
    println!("\nTo use this bot:");
    println!("1. Copy prompts.example.json to prompts.json");
    println!("2. Edit the prompts to your liking");
    println!("3. Run: validate_prompts --file prompts.json");
    println!("4. Run: prompt_bot");

    Ok(())
}

/// Serializes a prompt, rebuilds it from the record and prints both records.
fn run_demo() -> Result<()> {
    let prompt = Prompt::from(NumberPrompt::new("What's your favorite number?"));

    let raw = prompt.to_record();
    let rebuilt = Prompt::from_record(&raw).context("Failed to rebuild prompt from record")?;

    println!("Record of raw prompt:");
    println!("{}", serde_json::to_string_pretty(&raw)?);
    println!("Record of rebuilt prompt:");
    println!("{}", serde_json::to_string_pretty(&rebuilt.to_record())?);

    if rebuilt == prompt {
        info!("Round trip preserved the prompt");
    } else {
        anyhow::bail!("Rebuilt prompt differs from the original");
    }

    Ok(())
}

/// Reads commands from stdin and prints the responses.
fn run_repl(mut handler: CommandHandler, prefix: &str) -> Result<()> {
    println!("Type '{prefix} help' for commands. Press Ctrl+D to quit.");

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        match handler.try_handle(&line) {
            Some(result) => println!("{}", result.message),
            None => println!("Unknown command. Try '{prefix} help'."),
        }
    }

    info!("Input closed, shutting down");
    Ok(())
}

/// Asks one prompt on the terminal until the answer validates.
fn ask_interactive(template: &PromptTemplate) -> Result<()> {
    let answer = match &template.prompt {
        Prompt::MultiChoice(p) => {
            let index = Select::new()
                .with_prompt(p.question())
                .items(p.options())
                .default(0)
                .interact()?;
            p.options()
                .get(index)
                .cloned()
                .context("Selected option is out of range")?
        }
        Prompt::Password(p) => loop {
            let input = Password::new().with_prompt(p.question()).interact()?;
            if p.validate(&input) {
                break "✓ Password accepted".to_owned();
            }
            println!("✗ Incorrect password, try again.");
        },
        prompt => Input::<String>::new()
            .with_prompt(prompt.question())
            .validate_with(|input: &String| -> Result<(), String> {
                match prompt.validate(input) {
                    Ok(true) => Ok(()),
                    Ok(false) => Err("Answer not accepted".to_owned()),
                    Err(e) => Err(e.to_string()),
                }
            })
            .interact_text()?,
    };

    info!("Answer accepted for [{}]", template.id);
    println!("{answer}");

    Ok(())
}
