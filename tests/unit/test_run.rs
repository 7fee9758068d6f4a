//! In-process command runs through `cli::run_from`

use roastgen::cli::run_from;
use roastgen::errors::{get_exit_code, EXIT_INVALID_CATEGORY};
use roastgen::phrases::catalog::{ROASTS_ONE_CLEAN, ROASTS_THREE_CLEAN, ROASTS_TWO_CLEAN};
use roastgen::phrases::{Category, PhraseTable};

fn run(args: &[&str]) -> anyhow::Result<String> {
    let mut out = Vec::new();
    let argv = std::iter::once("roastgen")
        .chain(["--no-color"])
        .chain(args.iter().copied());
    run_from(argv, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_default_prints_three_filtered_lines() {
    let text = run(&["--no-profanity"]).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);

    let lists = [ROASTS_ONE_CLEAN, ROASTS_TWO_CLEAN, ROASTS_THREE_CLEAN];
    for (i, line) in lines.iter().enumerate() {
        let prefix = format!("Sample Roast #{}: ", i + 1);
        let body = line.strip_prefix(&prefix).unwrap();
        assert!(lists[i].contains(&body));
    }
}

#[test]
fn test_console_flag_matches_default() {
    let text = run(&["--console", "--seed", "8"]).unwrap();
    assert_eq!(text, run(&["--seed", "8"]).unwrap());
}

#[test]
fn test_seeded_runs_repeat() {
    let first = run(&["sample", "--seed", "77"]).unwrap();
    let second = run(&["sample", "--seed", "77"]).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_pick_prints_one_member() {
    let text = run(&["pick", "3", "--no-profanity"]).unwrap();
    let line = text.trim_end_matches('\n');
    assert!(PhraseTable::builtin().contains(Category::Three, true, line));
}

#[test]
fn test_pick_invalid_maps_to_exit_code() {
    let err = run(&["pick", "4"]).unwrap_err();
    assert_eq!(get_exit_code(&err), EXIT_INVALID_CATEGORY);
}

#[test]
fn test_console_with_subcommand_fails() {
    assert!(run(&["--console", "pick", "1"]).is_err());
}

#[test]
fn test_list_single_slot() {
    let text = run(&["list", "1", "--no-profanity"]).unwrap();
    assert!(text.starts_with("Roast #1\n"));
    for phrase in ROASTS_ONE_CLEAN {
        assert!(text.contains(phrase));
    }
}

#[test]
fn test_sample_json() {
    let text = run(&["--format", "json", "--no-profanity"]).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    let records = parsed.as_array().unwrap();
    assert_eq!(records.len(), 3);
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record["category"], i + 1);
        assert_eq!(record["filtered"], true);
    }
}
