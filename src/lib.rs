//! stencil compiles a directory of scaffolding template definitions into a
//! build artifact for the scaffolding tool, and validates those definitions
//! against a structural schema.

/// Command-line interface module for the stencil application
pub mod cli;

/// Template definition model and YAML parsing
pub mod config;

/// Common constants (file names, default directories)
pub mod constants;

/// Discovery of definition files and template trees
pub mod discovery;

/// Error types and handling for the stencil application
pub mod error;

/// Logger initialisation
pub mod logger;

/// Manifest of template summaries
pub mod manifest;

/// Build pipeline orchestration
/// Combines all components to produce the build directory
pub mod processor;

/// Namespaced resolution of template file references
pub mod resolver;

/// JSON Schema validation of definition files
pub mod validator;

/// Writing of copied trees and JSON artifacts
pub mod writer;
