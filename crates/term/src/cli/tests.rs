use clap::Parser;

use super::*;

#[test]
fn parse_forward_range() {
	assert_eq!(parse_range("3..9"), Ok(Range::new(3, 9)));
}

#[test]
fn parse_reversed_range_keeps_direction() {
	let r = parse_range("9..3").unwrap();
	assert_eq!(r.anchor, 9);
	assert_eq!(r.head, 3);
}

#[test]
fn parse_caret() {
	assert_eq!(parse_range("12"), Ok(Range::point(12)));
}

#[test]
fn parse_rejects_garbage() {
	assert!(parse_range("a..3").is_err());
	assert!(parse_range("3..").is_err());
	assert!(parse_range("-1").is_err());
}

#[test]
fn cli_collects_ranges() {
	let cli = Cli::try_parse_from(["regsel", "-r", "0..5", "--range", "9", "X", "file.txt"]).unwrap();
	assert_eq!(cli.pattern, "X");
	assert_eq!(cli.file, Some(PathBuf::from("file.txt")));
	assert_eq!(cli.ranges, vec![Range::new(0, 5), Range::point(9)]);
	assert!(!cli.type_out);
	assert_eq!(cli.config, None);
}

#[test]
fn cli_flags() {
	let cli = Cli::try_parse_from(["regsel", "--type-out", "-c", "regsel.toml", "--json", "-vv", "a+"]).unwrap();
	assert!(cli.type_out);
	assert!(cli.json);
	assert_eq!(cli.verbose, 2);
	assert_eq!(cli.config, Some(PathBuf::from("regsel.toml")));
	assert_eq!(cli.file, None);
}

#[test]
fn cli_requires_pattern() {
	assert!(Cli::try_parse_from(["regsel"]).is_err());
}

#[test]
fn cli_has_no_history_flag() {
	assert!(Cli::try_parse_from(["regsel", "--history", "last", "a"]).is_err());
}
