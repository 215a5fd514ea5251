//! Common constants used throughout stencil.

/// File name of a template definition inside its namespace directory
pub const DEFINITION_FILE: &str = "templates.yaml";

/// Name of the resolved definition and of the aggregate manifest in the output
pub const INDEX_FILE: &str = "index.json";

/// Default directory holding one subdirectory per template
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Default build output directory
pub const DEFAULT_OUTPUT_DIR: &str = "build";

/// Directories never scanned when validating a whole project
pub const IGNORED_DIRS: [&str; 5] = ["node_modules", ".git", "build", "dist", "target"];

/// Marker for the template directory itself in `templateFolder`/`templatePath`
pub const CURRENT_DIR_MARKER: &str = "./";
