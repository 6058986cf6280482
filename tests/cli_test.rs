use clap::Parser;
use imagegen::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("imagegen")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_default_args() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.root, PathBuf::from("."));
    assert_eq!(parsed.env_file, PathBuf::from(".env"));
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let parsed = Args::try_parse_from(make_args(&[
        "--root",
        "./telemetry-manager",
        "--env-file",
        "images.env",
        "--verbose",
    ]))
    .unwrap();

    assert_eq!(parsed.root, PathBuf::from("./telemetry-manager"));
    assert_eq!(parsed.env_file, PathBuf::from("images.env"));
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let parsed = Args::try_parse_from(make_args(&["-r", "./repo", "-e", ".env.dist", "-v"])).unwrap();

    assert_eq!(parsed.root, PathBuf::from("./repo"));
    assert_eq!(parsed.env_file, PathBuf::from(".env.dist"));
    assert!(parsed.verbose);
}

#[test]
fn test_positional_args_rejected() {
    assert!(Args::try_parse_from(make_args(&["extra"])).is_err());
}
