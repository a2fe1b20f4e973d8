use std::process::{Command, Output};

/// Runs the toolbox binary with `args` and captured, undecorated output.
fn toolbox(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_toolbox"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("TOOLBOX_LOG")
        .output()
        .expect("failed to run toolbox")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn no_arguments_prints_usage() {
    let out = toolbox(&[]);
    assert!(out.status.success());
    let usage = stdout(&out);
    assert!(usage.contains("Usage: toolbox <command>"));
    assert!(usage.contains("decode jwt"));
    assert!(usage.contains("Examples:"));
    assert!(stderr(&out).is_empty());
}

#[test]
fn uuid_prints_a_version_4_uuid() {
    let out = toolbox(&["uuid"]);
    assert!(out.status.success());
    let line = stdout(&out);
    let id = line.trim_end().strip_prefix("UUIDv4: ").expect("UUID label");
    assert_eq!(id.len(), 36);
    assert_eq!(id.chars().nth(14), Some('4'));

    let again = stdout(&toolbox(&["uuid"]));
    assert_ne!(line, again);
}

#[test]
fn hash_sha256() {
    let out = toolbox(&["hash", "--algo", "sha256", "--text", "hello"]);
    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        "SHA256 hash: 2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824\n"
    );
}

#[test]
fn hash_md5_flags_in_any_order() {
    let out = toolbox(&["hash", "--text", "hello", "--algo", "md5"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "MD5 hash: 5d41402abc4b2a76b9719d911017c592\n");
}

#[test]
fn hash_rejects_unknown_algorithm_before_hashing() {
    let out = toolbox(&["hash", "--algo", "blowfish", "--text", "x"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stdout(&out).is_empty());
    let err = stderr(&out);
    assert!(err.contains("error: invalid value 'blowfish' for '--algo'"), "{err}");
    assert!(err.contains("md5, sha1, sha256, sha512"), "{err}");
}

#[test]
fn missing_required_flag_is_named() {
    let out = toolbox(&["hash", "--algo", "md5"]);
    assert_eq!(out.status.code(), Some(2));
    let err = stderr(&out);
    assert!(err.contains("--text"), "{err}");
    assert!(err.contains("toolbox help hash"), "{err}");
}

#[test]
fn base64_round_trip() {
    let out = toolbox(&["encode", "base64", "--text", "secret123"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "Base64: c2VjcmV0MTIz\n");

    let out = toolbox(&["decode", "base64", "--text", "c2VjcmV0MTIz"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "Decoded: secret123\n");
}

#[test]
fn invalid_base64_is_an_operation_failure() {
    let out = toolbox(&["decode", "base64", "--text", "not-valid-base64!"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).starts_with("error: decode error"));
}

#[cfg(feature = "jwt")]
#[test]
fn jwt_decodes_without_verifying_signature() {
    let token = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
                 eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIn0.\
                 corrupted";
    let out = toolbox(&["decode", "jwt", "--token", token]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(
        stdout(&out),
        "Header:\n{\n  \"alg\": \"HS256\",\n  \"typ\": \"JWT\"\n}\n\
         Payload:\n{\n  \"sub\": \"1234567890\",\n  \"name\": \"John Doe\"\n}\n"
    );
}

#[cfg(not(feature = "jwt"))]
#[test]
fn jwt_without_feature_reports_missing_dependency() {
    let out = toolbox(&["decode", "jwt", "--token", "a.b.c"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    let err = stderr(&out);
    assert!(err.contains("not available"), "{err}");
    assert!(err.contains("`jwt` feature"), "{err}");
}

#[test]
fn malformed_jwt_fails() {
    let out = toolbox(&["decode", "jwt", "--token", "not-a-jwt"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).starts_with("error: "));
}

#[test]
fn beautify_json_output_is_pipeable() {
    let out = toolbox(&["beautify", "json", "--input", r#"{"name":"GPT","age":2}"#]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert_eq!(text, "{\n  \"name\": \"GPT\",\n  \"age\": 2\n}\n");
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["age"], 2);
}

#[test]
fn beautify_invalid_json_fails() {
    let out = toolbox(&["beautify", "json", "--input", "{nope"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("JSON error"));
}

#[test]
fn beautify_yaml() {
    let out = toolbox(&["beautify", "yaml", "--input", "{name: GPT, tags: [a, b]}"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert_eq!(text, "name: GPT\ntags:\n- a\n- b\n");
    let value: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
    assert_eq!(value["name"], serde_yaml::Value::from("GPT"));
}

#[test]
fn unknown_command_shows_usage_and_exits_cleanly() {
    let out = toolbox(&["frobnicate"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stderr(&out).contains("frobnicate"));
    assert!(stdout(&out).contains("Usage: toolbox <command>"));
}

#[test]
fn missing_subcommand_lists_choices() {
    let out = toolbox(&["encode"]);
    assert_eq!(out.status.code(), Some(2));
    let err = stderr(&out);
    assert!(err.contains("base64"), "{err}");
    assert!(err.contains("toolbox help encode"), "{err}");
}

#[test]
fn unknown_subcommand_is_rejected() {
    let out = toolbox(&["decode", "rot13", "--text", "x"]);
    assert_eq!(out.status.code(), Some(2));
    let err = stderr(&out);
    assert!(err.contains("rot13"), "{err}");
    assert!(err.contains("jwt"), "{err}");
}

#[test]
fn flag_without_value_is_rejected() {
    let out = toolbox(&["encode", "base64", "--text"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("--text"));
}

#[test]
fn help_for_one_command() {
    let out = toolbox(&["help", "hash"]);
    assert!(out.status.success());
    let help = stdout(&out);
    assert!(help.contains("--algo <md5|sha1|sha256|sha512>"), "{help}");
    assert!(help.contains("(required)"), "{help}");

    let out = toolbox(&["beautify", "--help"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("toolbox beautify yaml"));
}

#[test]
fn help_for_one_subcommand() {
    for args in [&["decode", "jwt", "--help"][..], &["help", "decode", "jwt"]] {
        let out = toolbox(args);
        assert!(out.status.success());
        let help = stdout(&out);
        assert!(help.contains("Usage: toolbox decode jwt --token <token>"), "{help}");
        assert!(!help.contains("base64"), "{help}");
    }
}

#[test]
fn version_flag() {
    let out = toolbox(&["--version"]);
    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        format!("toolbox {}\n", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn dns_rejects_unsupported_record_type() {
    let out = toolbox(&["dns", "--host", "example.com", "--record", "BOGUS"]);
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.contains("DNS error"), "{err}");
    assert!(err.contains("BOGUS"), "{err}");
}

#[test]
fn ping_refuses_option_like_host() {
    let out = toolbox(&["ping", "--host", "-f"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("ping error"));
}

#[test]
fn debug_logging_goes_to_stderr_only() {
    let out = Command::new(env!("CARGO_BIN_EXE_toolbox"))
        .args(["encode", "base64", "--text", "hi"])
        .env("NO_COLOR", "1")
        .env("TOOLBOX_LOG", "debug")
        .output()
        .expect("failed to run toolbox");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "Base64: aGk=\n");
    assert!(stderr(&out).contains("Dispatching"));
}
