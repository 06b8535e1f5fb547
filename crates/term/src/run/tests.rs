use clap::Parser;
use pretty_assertions::assert_eq;
use regsel_select::HistoryMode;

use super::*;

fn cli(args: &[&str]) -> Cli {
	Cli::try_parse_from(std::iter::once("regsel").chain(args.iter().copied())).unwrap()
}

fn spans(report: &Report) -> Vec<(usize, usize, &str)> {
	report
		.selection
		.iter()
		.map(|r| (r.start, r.end, r.text.as_str()))
		.collect()
}

#[test]
fn whole_document_by_default() {
	let report = select("aXbXcXd", &cli(&["X"]), Config::default()).unwrap();
	assert_eq!(report.outcome, "selected 3");
	assert_eq!(spans(&report), vec![(1, 2, "X"), (3, 4, "X"), (5, 6, "X")]);
}

#[test]
fn ranges_limit_the_scan() {
	let report = select("aXbXcXd", &cli(&["-r", "2..5", "X"]), Config::default()).unwrap();
	assert_eq!(spans(&report), vec![(3, 4, "X")]);
}

#[test]
fn caret_scans_its_line() {
	let text = "one two\nthree four\nfive";
	let report = select(text, &cli(&["-r", "10", r"\w+"]), Config::default()).unwrap();
	assert_eq!(spans(&report), vec![(8, 13, "three"), (14, 18, "four")]);
}

#[test]
fn no_match_keeps_original_ranges() {
	let report = select("hello", &cli(&["-r", "5..0", "z"]), Config::default()).unwrap();
	assert_eq!(report.outcome, "no match");
	assert_eq!(spans(&report), vec![(0, 5, "hello")]);
}

#[test]
fn range_past_end_is_rejected() {
	assert!(select("abc", &cli(&["-r", "0..9", "a"]), Config::default()).is_err());
}

#[test]
fn invalid_pattern_fails() {
	let err = select("abc", &cli(&["("]), Config::default()).unwrap_err();
	assert!(format!("{err:#}").contains("invalid pattern"));
}

#[test]
fn type_out_reports_each_prefix() {
	let report = select("ca cat cab", &cli(&["--type-out", "cat|("]), Config::default());
	assert!(report.is_err());

	let report = select("ca cat cab", &cli(&["--type-out", "cat"]), Config::default()).unwrap();
	let counts: Vec<_> = report.previews.iter().map(|p| (p.pattern.as_str(), p.matches)).collect();
	assert_eq!(counts, vec![("c", Some(3)), ("ca", Some(3)), ("cat", Some(1))]);
	assert_eq!(spans(&report), vec![(3, 6, "cat")]);
}

#[test]
fn type_out_records_rejected_prefixes() {
	let report = select("a[b]", &cli(&["--type-out", r"\["]), Config::default()).unwrap();
	assert_eq!(report.previews[0].matches, None);
	assert!(report.previews[0].error.is_some());
	assert_eq!(report.previews[1].matches, Some(1));
	assert_eq!(spans(&report), vec![(1, 2, "[")]);
}

#[test]
fn plain_output_format() {
	let report = select("a\tb a", &cli(&["--type-out", "a"]), Config::default()).unwrap();
	let mut out = Vec::new();
	report.write_plain(&mut out).unwrap();
	assert_eq!(String::from_utf8(out).unwrap(), "# a: 2\n0..1\ta\n4..5\ta\n");
}

#[test]
fn json_output_shape() {
	let report = select("xy", &cli(&["y"]), Config::default()).unwrap();
	let json = serde_json::to_value(&report).unwrap();
	assert_eq!(
		json,
		serde_json::json!({
			"outcome": "selected 1",
			"selection": [{ "start": 1, "end": 2, "text": "y" }],
		})
	);
}

#[test]
fn config_file_is_loaded() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("regsel.toml");
	std::fs::write(&path, "[history]\nmode = \"last\"\n\n[prompt]\ntitle = \"Split:\"\n").unwrap();

	let path = path.to_string_lossy().into_owned();
	let config = load_config(&cli(&["--config", &path, "a"])).unwrap();
	assert_eq!(config.history.mode, HistoryMode::Last);
	assert_eq!(config.prompt.title, "Split:");
}

#[test]
fn missing_config_file_is_reported() {
	let err = load_config(&cli(&["--config", "/nonexistent/regsel.toml", "a"])).unwrap_err();
	assert!(format!("{err:#}").contains("loading config"));
}
