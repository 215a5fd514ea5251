use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use stencil::cli::{Args, Command};

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("stencil")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_build_defaults() {
    let parsed = Args::try_parse_from(make_args(&["build"])).unwrap();

    assert_eq!(
        parsed.command,
        Command::Build {
            templates_dir: PathBuf::from("templates"),
            output_dir: PathBuf::from("build"),
        }
    );
    assert!(!parsed.verbose);
}

#[test]
fn test_build_with_dirs() {
    let args = make_args(&["build", "--templates-dir", "./tpl", "-o", "./out", "--verbose"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(
        parsed.command,
        Command::Build { templates_dir: PathBuf::from("./tpl"), output_dir: PathBuf::from("./out") }
    );
    assert!(parsed.verbose);
}

#[test]
fn test_validate_root() {
    let parsed = Args::try_parse_from(make_args(&["-v", "validate", "./project"])).unwrap();

    assert_eq!(parsed.command, Command::Validate { root: PathBuf::from("./project") });
    assert!(parsed.verbose);

    let parsed = Args::try_parse_from(make_args(&["validate"])).unwrap();
    assert_eq!(parsed.command, Command::Validate { root: PathBuf::from(".") });
}

#[test]
fn test_missing_subcommand() {
    assert!(Args::try_parse_from(make_args(&[])).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["validate", "./project", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
