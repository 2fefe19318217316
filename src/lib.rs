//! Prompt Bot Library
//!
//! Questions posed to chat users, with type-specific answer validation.
//!
//! This crate provides the core functionality for:
//! - Defining prompts (text, number, multiple choice, email, password)
//! - Converting prompts to and from JSON records
//! - Loading and validating prompt template files
//! - Handling user commands that ask prompts and check answers

pub mod commands;
pub mod config;
pub mod prompts;
