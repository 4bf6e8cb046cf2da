//! Configuration module for Sumi-Lens
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a default, so running without a configuration file is the
//! same as loading an empty one.
//!
//! # Example
//!
//! ```no_run
//! use sumi_lens::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("sumi-lens.toml")).unwrap();
//! println!("Probe workers per page: {}", config.analyser.worker_count);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{AnalyserConfig, Config, OutboundConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
