use std::fs;
use std::path::PathBuf;
use std::process::Output;

const BIN: &str = env!("CARGO_BIN_EXE_magick-options");

fn run(args: &[&str]) -> Output {
    std::process::Command::new(BIN)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run magick-options")
}

fn stdout_of(args: &[&str]) -> String {
    let output = run(args);
    assert!(
        output.status.success(),
        "{args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn json_of(args: &[&str]) -> serde_json::Value {
    let mut full = vec!["--format", "json"];
    full.extend_from_slice(args);
    serde_json::from_str(&stdout_of(&full)).expect("stdout should be JSON")
}

/// Minimal options config YAML for testing.
fn write_config(dir: &tempfile::TempDir, defines: &[&str]) -> PathBuf {
    let defines: Vec<String> = defines.iter().map(|d| format!("\"{d}\"")).collect();
    let yaml = format!(
        r#"version: "1.0"
parse:
  max_token_length: 3
defines: [{defines}]
"#,
        defines = defines.join(", ")
    );
    let path = dir.path().join("options.yml");
    fs::write(&path, yaml).expect("failed to write config");
    path
}

#[test]
fn lookup_prints_name_and_value() {
    assert_eq!(stdout_of(&["lookup", "filter", "lanczos"]), "Lanczos = 15\n");
}

#[test]
fn lookup_json_includes_category_and_entry() {
    let json = json_of(&["lookup", "Filter", "LANCZOS"]);
    assert_eq!(json["category"], "Filter");
    assert_eq!(json["name"], "Lanczos");
    assert_eq!(json["value"], 15);
    assert_eq!(json["hidden"], false);
}

#[test]
fn lookup_unknown_mnemonic_fails() {
    let output = run(&["lookup", "filter", "Sinc-ish"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: unrecognized Filter mnemonic"), "stderr: {stderr}");
}

#[test]
fn unknown_category_fails() {
    let output = run(&["list", "flavour"]);
    assert!(!output.status.success());
}

#[test]
fn category_without_table_fails() {
    let output = run(&["list", "font"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no mnemonic table for category Font"), "stderr: {stderr}");
}

#[test]
fn mnemonic_falls_back_to_undefined() {
    assert_eq!(stdout_of(&["mnemonic", "gravity", "999"]), "undefined\n");
    assert_eq!(stdout_of(&["mnemonic", "gravity", "6"]), "NorthWest\n");
}

#[test]
fn list_hides_hidden_rows_unless_all() {
    let visible = stdout_of(&["list", "gravity"]);
    assert!(visible.lines().any(|line| line == "NorthWest"));
    assert!(!visible.lines().any(|line| line == "Undefined"));

    let all = stdout_of(&["list", "gravity", "--all"]);
    assert!(all.lines().any(|line| line == "Undefined"));
}

#[test]
fn list_without_category_names_categories() {
    let names: Vec<String> = serde_json::from_value(json_of(&["list"])).unwrap();
    assert!(names.iter().any(|name| name == "Filter"));
    assert!(names.iter().any(|name| name == "VirtualPixel"));
    assert!(!names.iter().any(|name| name == "Undefined"));
}

#[test]
fn parse_folds_list_with_negation() {
    assert_eq!(stdout_of(&["parse", "channel", "All,!Red"]), "30\n");
    assert_eq!(stdout_of(&["parse", "channel", "Red|Blue"]), "5\n");
}

#[test]
fn parse_single_reads_first_token() {
    assert_eq!(stdout_of(&["parse", "--single", "channel", "Red,Blue"]), "1\n");
}

#[test]
fn parse_normalizes_separators() {
    let json = json_of(&["parse", "dither", "floyd-steinberg"]);
    assert_eq!(json["value"], 2);
    assert_eq!(json["truncated"], false);
    assert!(json.get("flags").is_none());
}

#[test]
fn parse_flags_of_command_options() {
    let stdout = stdout_of(&["parse", "--flags", "command", "--", "-resize,+repage"]);
    assert_eq!(stdout, "SIMPLE_OPERATOR\n");
}

#[test]
fn parse_failure_exits_nonzero() {
    let output = run(&["parse", "channel", "Red,Mauve"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Mauve"), "stderr: {stderr}");
}

#[test]
fn parse_reports_truncation() {
    let json = json_of(&["parse", "--max-token-length", "3", "channel", "Redish,Red"]);
    assert_eq!(json["value"], 1);
    assert_eq!(json["truncated"], true);
}

#[test]
fn parse_fails_when_every_long_token_is_cut() {
    // "Blue" is cut to "Blu" as well, which fails the whole list.
    let output = run(&["parse", "--max-token-length", "3", "channel", "Redish,Blue"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("unrecognized Channel mnemonic: \"Blu\""),
        "stderr: {stderr}"
    );
}

#[test]
fn config_sets_token_limit() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, &[]);
    let config = config.to_str().unwrap();

    // Cut to "Gre", which resolves to nothing.
    let output = run(&["--config", config, "parse", "channel", "Greenish"]);
    assert!(!output.status.success());

    let stdout = stdout_of(&[
        "--config",
        config,
        "parse",
        "--max-token-length",
        "8",
        "channel",
        "Green",
    ]);
    assert_eq!(stdout, "2\n");
}

#[test]
fn channel_shorthand() {
    assert_eq!(stdout_of(&["channel", "rgb"]), "0x7\n");
    assert_eq!(stdout_of(&["channel", "r,Alpha"]), "0x11\n");
    assert!(!run(&["channel", "rgbq"]).status.success());
}

#[test]
fn pixel_channel_by_name_and_number() {
    assert_eq!(stdout_of(&["pixel-channel", "Alpha"]), "4\n");
    let json = json_of(&["pixel-channel", "12"]);
    assert_eq!(json["value"], 12);
    assert!(!run(&["pixel-channel", "64"]).status.success());
}

#[test]
fn command_lookup() {
    assert_eq!(
        stdout_of(&["command", "--", "-resize"]),
        "-resize: 1 argument(s), SIMPLE_OPERATOR\n"
    );
    let json = json_of(&["command", "+repage"]);
    assert_eq!(json["name"], "+repage");
    assert_eq!(json["value"], 0);
}

#[test]
fn command_miss_and_bad_token_fail() {
    let miss = run(&["command", "--", "-no-such-option"]);
    assert!(!miss.status.success());

    let bare = run(&["command", "resize"]);
    assert!(!bare.status.success());
    let stderr = String::from_utf8_lossy(&bare.stderr);
    assert!(stderr.contains("invalid command token"), "stderr: {stderr}");
}

#[test]
fn is_option_checks_each_argument() {
    let stdout = stdout_of(&["is-option", "--", "-resize", "image.png", "-5"]);
    assert_eq!(stdout, "-resize\ttrue\nimage.png\tfalse\n-5\tfalse\n");
}

#[test]
fn verify_builtin_tables() {
    let stdout = stdout_of(&["verify"]);
    assert_eq!(stdout, "Verified 58 table(s) and 583 command option(s).\n");
}

#[test]
fn define_applies_config_then_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, &["jpeg:quality=90", "comment=hello"]);
    let stdout = stdout_of(&[
        "--config",
        config.to_str().unwrap(),
        "define",
        "JPEG:Quality=75",
        "filter:blur=0.8",
        "--delete",
        "comment",
    ]);
    assert_eq!(stdout, "filter:blur=0.8\nJPEG:Quality=75\n");
}

#[test]
fn define_rejects_empty_key() {
    let output = run(&["define", "=90"]);
    assert!(!output.status.success());
}

#[test]
fn missing_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.yml");
    let output = run(&["--config", missing.to_str().unwrap(), "verify"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load config"), "stderr: {stderr}");
}
