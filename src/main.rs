//! stencil's application entry point.
//! Parses the command line and runs either the build or the validation pipeline.

use std::path::Path;

use stencil::{
    cli::{get_args, Args, Command},
    discovery::find_all_definitions,
    error::{default_error_handler, Error, Result},
    logger::init_logger,
    processor::Processor,
    validator::SchemaValidator,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Build { templates_dir, output_dir } => build(&templates_dir, &output_dir),
        Command::Validate { root } => validate(&root),
    }
}

/// Compiles all templates. Per-template failures are reported but do not fail the run.
fn build(templates_dir: &Path, output_dir: &Path) -> Result<()> {
    let report = Processor::new(templates_dir, output_dir).run()?;

    println!(
        "Built {} template(s) into {}.",
        report.manifest.len(),
        output_dir.display()
    );
    if !report.is_success() {
        println!("{} template(s) failed:", report.failures.len());
        for failure in &report.failures {
            println!("  - {}: {}", failure.source.display(), failure.error);
        }
    }
    Ok(())
}

/// Validates every definition below `root`; fails if any of them is invalid.
fn validate(root: &Path) -> Result<()> {
    println!("Searching for template definitions in {}...", root.display());
    let files = find_all_definitions(root)?;
    println!("Found {} definition file(s):", files.len());
    for file in &files {
        println!("  - {}", file.display());
    }

    let validator = SchemaValidator::new()?;
    let report = validator.validate_files(&files);

    for file in &report.files {
        println!();
        match &file.outcome {
            Ok(result) if result.is_valid() => println!("OK   {}", file.path.display()),
            Ok(result) => {
                println!("FAIL {} has validation errors:", file.path.display());
                for diagnostic in &result.diagnostics {
                    println!("  - {}", diagnostic);
                    println!("    Current value: {}", diagnostic.value);
                }
            }
            Err(message) => println!("FAIL {}: {}", file.path.display(), message),
        }
    }

    println!();
    if report.all_valid() {
        println!("All {} definition file(s) are valid.", report.files.len());
        Ok(())
    } else {
        Err(Error::ValidationFailed { files: report.invalid_count() })
    }
}
