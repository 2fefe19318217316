//! Standalone validator for prompt template files.
//!
//! Checks that every template parses, has a unique id and a question, and
//! that its validation rule can be satisfied.

use std::process::ExitCode;

use clap::Parser;

use prompt_bot::config::PromptTemplates;

/// Prompt template validator.
#[derive(Parser, Debug)]
#[command(name = "validate_prompts")]
#[command(about = "Validates prompt template files for the prompt bot")]
#[command(version)]
struct Args {
    /// Path to the JSON templates file to validate.
    #[arg(short, long, default_value = "prompts.json")]
    file: String,

    /// Generate an example templates file at the specified path.
    #[arg(long)]
    generate_example: Option<String>,

    /// Show detailed information for each template.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(output_path) = args.generate_example {
        return generate_example(&output_path);
    }

    validate_templates(&args.file, args.verbose)
}

fn generate_example(output_path: &str) -> ExitCode {
    let example = PromptTemplates::example();

    match example.save_to_file(output_path) {
        Ok(()) => {
            println!("✓ Example templates written to: {output_path}");
            println!("\nThe file contains {} example prompts, one of each kind.", example.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("✗ Failed to write example file: {e}");
            ExitCode::FAILURE
        }
    }
}

fn validate_templates(path: &str, verbose: bool) -> ExitCode {
    println!("Validating: {path}\n");

    let templates = match PromptTemplates::load_from_file(path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("✗ Failed to load templates: {e}");
            return ExitCode::FAILURE;
        }
    };

    let results = templates.validate_all();
    let mut errors = 0;

    for (i, result) in results.iter().enumerate() {
        if verbose {
            if let Some(template) = templates.prompts.get(i) {
                println!(
                    "[{}] \"{}\" ({})",
                    template.id,
                    truncate(template.prompt.question(), 40),
                    template.prompt.kind()
                );
            }
        }

        match result {
            Ok(()) => {
                if verbose {
                    println!("  ✓ OK");
                }
            }
            Err(e) => {
                errors += 1;
                println!("  ✗ Error: {e}");
            }
        }
    }

    println!();

    let total = templates.len();

    if errors == 0 {
        println!("✓ All {total} prompts are valid!");
        ExitCode::SUCCESS
    } else {
        println!("✗ Validation failed: {errors} error(s) in {total} prompts");
        println!("  Valid: {}/{total}", total.saturating_sub(errors));
        ExitCode::FAILURE
    }
}

/// Truncates a string for display.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_owned()
    } else {
        format!("{}...", s.chars().take(max_len).collect::<String>())
    }
}
