use super::*;
use pretty_assertions::assert_eq;

#[test]
fn no_arguments() {
    let args: [&str; 0] = [];
    assert_eq!(CliOptions::parse(&args).ok(), Some(CliOptions::default()));
}

#[test]
fn long_and_short_flags() {
    let long = CliOptions::parse(&["--normalize", "--kinds", "--parallel"]);
    let short = CliOptions::parse(&["-n", "-k", "-p"]);
    let expected = CliOptions {
        normalize: true,
        kinds: true,
        parallel: true,
        ..CliOptions::default()
    };
    assert_eq!(long.ok(), Some(expected.clone()));
    assert_eq!(short.ok(), Some(expected));
}

#[test]
fn modes() {
    assert!(matches!(CliOptions::parse(&["-s"]), Ok(CliOptions { sentences: true, .. })));
    assert!(matches!(CliOptions::parse(&["--freq"]), Ok(CliOptions { freq: true, .. })));
    assert!(matches!(CliOptions::parse(&["-h"]), Ok(CliOptions { help: true, .. })));
}

#[test]
fn unknown_argument_is_a_usage_error() {
    let err = CliOptions::parse(&["-n", "--verbose"]);
    assert_eq!(
        err.map_err(|err| err.to_string()),
        Err("unknown argument '--verbose'".to_owned())
    );
}

#[test]
fn usage_lists_every_flag() {
    for flag in ["--normalize", "--kinds", "--sentences", "--freq", "--parallel", "--help"] {
        assert!(USAGE.contains(flag), "{flag} missing from usage");
    }
}
