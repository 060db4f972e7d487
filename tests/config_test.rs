use clap::Parser;
use keeb::config::{GeometryParams, DEFAULT_KEY_WIDTH, DEFAULT_SPACE_WIDTH};

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    geometry: GeometryParams,
}

#[test]
fn test_defaults() {
    let params = GeometryParams::default();
    assert_eq!(params.key_width, DEFAULT_KEY_WIDTH);
    assert_eq!(params.space_width, DEFAULT_SPACE_WIDTH);
}

#[test]
fn test_clap_defaults_match_default_impl() {
    let cli = TestCli::try_parse_from(["test"]).unwrap();
    assert_eq!(cli.geometry, GeometryParams::default());
}

#[test]
fn test_clap_overrides() {
    let cli = TestCli::try_parse_from(["test", "--key-width", "18", "--space-width", "2.5"])
        .unwrap();
    assert_eq!(cli.geometry.key_width, 18.0);
    assert_eq!(cli.geometry.space_width, 2.5);
}
