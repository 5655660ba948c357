//! Behavioral tests for launcher argument parsing.

use pkgrun::args::{launcher_registry, parse, parse_args, FlagArity, FlagDef, ParsedArguments};

fn argv(args: &[&str]) -> Vec<String> {
    ["/node", "/pkgrun"]
        .iter()
        .chain(args)
        .map(|s| s.to_string())
        .collect()
}

fn parse_argv(args: &[&str]) -> ParsedArguments {
    parse(&argv(args))
}

fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// POSITIONAL COMMAND
// =============================================================================

#[test]
fn parses_basic_command() {
    let parsed = parse_argv(&["foo"]);
    assert_eq!(parsed.command, "foo");
    assert_eq!(parsed.package.to_string(), "foo@latest");
    assert!(!parsed.package_requested);
    assert!(!parsed.cmd_had_version);
    assert!(parsed.cmd_opts.is_empty());
}

#[test]
fn parses_command_with_version() {
    let parsed = parse_argv(&["foo@1.2.3"]);
    assert_eq!(parsed.command, "foo");
    assert_eq!(parsed.package.to_string(), "foo@1.2.3");
    assert!(!parsed.package_requested);
    assert!(parsed.cmd_had_version);
}

#[test]
fn parses_command_opts() {
    let parsed = parse_argv(&["foo", "a", "b"]);
    assert_eq!(parsed.command, "foo");
    assert_eq!(parsed.package.to_string(), "foo@latest");
    assert!(!parsed.package_requested);
    assert!(!parsed.cmd_had_version);
    assert_eq!(parsed.cmd_opts, strings(&["a", "b"]));
}

#[test]
fn parses_scoped_package_command_opts() {
    let parsed = parse_argv(&["@user/foo", "a", "b"]);
    assert_eq!(parsed.command, "foo");
    assert_eq!(parsed.package.to_string(), "@user/foo@latest");
    assert!(!parsed.package_requested);
    assert!(!parsed.cmd_had_version);
    assert_eq!(parsed.cmd_opts, strings(&["a", "b"]));
}

#[test]
fn parses_scoped_package_with_version() {
    let parsed = parse_argv(&["@user/foo@2.0.0", "a"]);
    assert_eq!(parsed.command, "foo");
    assert_eq!(parsed.package.to_string(), "@user/foo@2.0.0");
    assert!(parsed.cmd_had_version);
    assert_eq!(parsed.cmd_opts, strings(&["a"]));
}

#[test]
fn ignores_options_after_command() {
    let parsed = parse_argv(&["foo", "-p", "bar", "a", "b"]);
    assert_eq!(parsed.command, "foo");
    assert_eq!(parsed.package.to_string(), "foo@latest");
    assert!(!parsed.package_requested);
    assert!(!parsed.cmd_had_version);
    assert_eq!(parsed.cmd_opts, strings(&["-p", "bar", "a", "b"]));
}

// =============================================================================
// FLAGS BEFORE THE COMMAND
// =============================================================================

#[test]
fn assumes_unknown_args_before_cmd_have_values_and_ignores_them() {
    let parsed = parse_argv(&[
        "-p",
        "bar",
        "--blahh",
        "arg",
        "--ignore-existing",
        "foo",
        "a",
        "b",
    ]);
    assert_eq!(parsed.command, "foo");
    assert_eq!(parsed.package.to_string(), "bar@latest");
    assert!(parsed.package_requested);
    assert!(!parsed.cmd_had_version);
    assert_eq!(parsed.cmd_opts, strings(&["a", "b"]));
    assert!(parsed.has_option("ignore-existing"));
    assert!(!parsed.has_option("blahh"));
}

#[test]
fn unknown_valueless_flag_swallows_the_next_token() {
    let parsed = parse_argv(&["--dry", "foo", "bar", "a"]);
    assert_eq!(parsed.command, "bar");
    assert_eq!(parsed.cmd_opts, strings(&["a"]));
}

#[test]
fn parses_package_option() {
    let parsed = parse_argv(&["-p", "bar", "foo", "a", "b"]);
    assert_eq!(parsed.command, "foo");
    assert_eq!(parsed.package.to_string(), "bar@latest");
    assert!(parsed.package_requested);
    assert!(!parsed.cmd_had_version);
    assert_eq!(parsed.cmd_opts, strings(&["a", "b"]));
}

#[test]
fn parses_long_package_option() {
    let parsed = parse_argv(&["--package", "bar@^1", "foo"]);
    assert_eq!(parsed.command, "foo");
    assert_eq!(parsed.package.to_string(), "bar@^1");
    assert!(parsed.package_requested);
}

#[test]
fn repeated_package_options_are_all_kept() {
    let parsed = parse_argv(&["-p", "one", "--package", "@s/two@3", "foo"]);
    assert_eq!(parsed.package.to_string(), "one@latest");
    let all: Vec<String> = parsed.packages.iter().map(|p| p.to_string()).collect();
    assert_eq!(all, strings(&["one@latest", "@s/two@3"]));
}

#[test]
fn package_option_prevents_command_parsing() {
    let parsed = parse_argv(&["-p", "pkg", "foo@1.2.3", "a", "b"]);
    assert_eq!(parsed.command, "foo@1.2.3");
    assert_eq!(parsed.package.to_string(), "pkg@latest");
    assert!(parsed.package_requested);
    assert!(!parsed.cmd_had_version);
    assert_eq!(parsed.cmd_opts, strings(&["a", "b"]));
}

// =============================================================================
// CALL-STRING
// =============================================================================

#[test]
fn parses_call_string() {
    let parsed = parse_argv(&["-c", "foo a b"]);
    assert_eq!(parsed.command, "foo");
    assert_eq!(parsed.package.to_string(), "foo@latest");
    assert!(!parsed.package_requested);
    assert!(!parsed.cmd_had_version);
    assert_eq!(parsed.cmd_opts, strings(&["a", "b"]));
}

#[test]
fn call_string_splits_on_any_whitespace() {
    let parsed = parse_argv(&["--call", "  foo\ta   b\n"]);
    assert_eq!(parsed.command, "foo");
    assert_eq!(parsed.cmd_opts, strings(&["a", "b"]));
}

#[test]
fn call_string_command_is_version_parsed() {
    let parsed = parse_argv(&["-c", "foo@1.2.3 a"]);
    assert_eq!(parsed.command, "foo");
    assert_eq!(parsed.package.to_string(), "foo@1.2.3");
    assert!(parsed.cmd_had_version);
}

#[test]
fn uses_package_option_even_with_call_string() {
    let parsed = parse_argv(&["-c", "foo a b", "-p", "bar"]);
    assert_eq!(parsed.command, "foo");
    assert_eq!(parsed.package.to_string(), "bar@latest");
    assert!(parsed.package_requested);
    assert!(!parsed.cmd_had_version);
    assert_eq!(parsed.cmd_opts, strings(&["a", "b"]));
}

#[test]
fn bare_tokens_after_call_string_are_command_opts() {
    let parsed = parse_argv(&["-c", "foo a", "bar", "b"]);
    assert_eq!(parsed.command, "foo");
    assert_eq!(parsed.package.to_string(), "foo@latest");
    assert_eq!(parsed.cmd_opts, strings(&["a", "bar", "b"]));
}

#[test]
fn unknown_flags_after_call_string_are_command_opts() {
    let parsed = parse_argv(&["-c", "foo a", "--blahh", "x"]);
    assert_eq!(parsed.command, "foo");
    assert_eq!(parsed.cmd_opts, strings(&["a", "--blahh", "x"]));
}

#[test]
fn launcher_options_after_call_string_are_command_opts() {
    let parsed = parse_argv(&["-c", "foo a", "--ignore-existing", "b"]);
    assert_eq!(parsed.command, "foo");
    assert_eq!(parsed.cmd_opts, strings(&["a", "--ignore-existing", "b"]));
    assert!(parsed.options.is_empty());
}

#[test]
fn package_option_after_call_string_among_command_opts() {
    let parsed = parse_argv(&["-c", "foo a", "--cache", "b", "-p", "bar", "c"]);
    assert_eq!(parsed.package.to_string(), "bar@latest");
    assert!(parsed.package_requested);
    assert_eq!(parsed.cmd_opts, strings(&["a", "--cache", "b", "c"]));
}

#[test]
fn package_option_before_call_string_keeps_command_literal() {
    let parsed = parse_argv(&["-p", "bar", "-c", "foo@1 a"]);
    assert_eq!(parsed.command, "foo@1");
    assert!(!parsed.cmd_had_version);
    assert_eq!(parsed.package.to_string(), "bar@latest");
    assert_eq!(parsed.cmd_opts, strings(&["a"]));
}

// =============================================================================
// SEPARATOR
// =============================================================================

#[test]
fn separator_stops_option_parsing_but_still_does_command() {
    let parsed = parse_argv(&["--", "-foo", "a", "b"]);
    assert_eq!(parsed.command, "-foo");
    assert_eq!(parsed.package.to_string(), "-foo@latest");
    assert!(!parsed.package_requested);
    assert!(!parsed.cmd_had_version);
    assert_eq!(parsed.cmd_opts, strings(&["a", "b"]));
}

#[test]
fn separator_still_respects_package_option() {
    let parsed = parse_argv(&["-p", "bar", "--", "-foo", "a", "b"]);
    assert_eq!(parsed.command, "-foo");
    assert_eq!(parsed.package.to_string(), "bar@latest");
    assert!(parsed.package_requested);
    assert!(!parsed.cmd_had_version);
    assert_eq!(parsed.cmd_opts, strings(&["a", "b"]));
}

#[test]
fn flags_after_separator_are_literal() {
    let parsed = parse_argv(&["--", "foo", "-p", "bar", "--", "-c", "x"]);
    assert_eq!(parsed.command, "foo");
    assert!(!parsed.package_requested);
    assert_eq!(parsed.cmd_opts, strings(&["-p", "bar", "--", "-c", "x"]));
}

// =============================================================================
// PROPERTIES
// =============================================================================

#[test]
fn platform_tokens_are_ignored() {
    let parsed = parse(&strings(&["foo", "bar", "baz"]));
    assert_eq!(parsed.command, "baz");
}

#[test]
fn reparsing_cmd_opts_is_stable() {
    let inputs: [&[&str]; 4] = [
        &["foo", "-p", "bar", "--", "a"],
        &["-c", "foo --x -y z"],
        &["-p", "pkg", "foo", "--blahh", "arg"],
        &["--", "-foo", "-c", "call"],
    ];

    for input in inputs {
        let first = parse_argv(input);
        let mut again = vec!["cmd".to_string()];
        again.extend(first.cmd_opts.iter().cloned());
        let second = parse_args(&again, &launcher_registry());
        assert_eq!(second.cmd_opts, first.cmd_opts, "input: {:?}", input);
    }
}

#[test]
fn parsing_is_deterministic() {
    let input = argv(&["-p", "bar", "--cache", "/c", "foo", "a"]);
    assert_eq!(parse(&input), parse(&input));
}

#[test]
fn configured_boolean_flag_does_not_swallow_command() {
    let registry = launcher_registry()
        .with_extra(vec![FlagDef::extra("--prefer-offline", FlagArity::NoValue)]);
    let parsed = parse_args(&strings(&["--prefer-offline", "foo", "a"]), &registry);
    assert_eq!(parsed.command, "foo");
    assert_eq!(parsed.cmd_opts, strings(&["a"]));
    assert!(parsed.has_option("prefer-offline"));
}

#[test]
fn plan_serializes_with_camel_case_fields() {
    let parsed = parse_argv(&["-p", "bar", "foo", "a"]);
    let json = serde_json::to_value(&parsed).unwrap();
    assert_eq!(json["command"], "foo");
    assert_eq!(json["package"], "bar@latest");
    assert_eq!(json["packageRequested"], true);
    assert_eq!(json["cmdHadVersion"], false);
    assert_eq!(json["cmdOpts"], serde_json::json!(["a"]));
    assert!(json.get("warnings").is_none());
}
