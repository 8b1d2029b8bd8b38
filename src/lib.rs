//! # prompt-coach
//!
//! An interactive coach for writing better prompts for AI coding assistants.
//!
//! ## Features
//!
//! - Prompt scoring with concrete issues and an improved rewrite
//! - Personalized prompt workflows classified from git commit history
//! - A cheat sheet, a short lesson and a guided mini project
//! - Progress persisted between sessions
//!
//! ## Quick Start
//!
//! ```rust
//! use prompt_coach::coach::PromptQualityAnalyzer;
//!
//! let analysis = PromptQualityAnalyzer::analyze("make function");
//! assert!(analysis.score < 5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod coach;
pub mod data;
pub mod git;
pub mod utils;

pub use crate::cli::Cli;

/// The current version of prompt-coach.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
