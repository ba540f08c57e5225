//! Integration tests for the agent-vault CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.  Every
//! test points `--vault-dir` at its own temp dir; secret values are piped
//! on stdin so no interactive prompt is ever shown.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Helper: get a Command pointing at the agent-vault binary.
fn agent_vault() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("agent-vault").expect("binary should exist")
}

/// Helper: a command bound to the vault inside `tmp`.
fn in_vault(tmp: &TempDir) -> Command {
    let mut cmd = agent_vault();
    cmd.arg("--vault-dir").arg(tmp.path().join("vault"));
    cmd.env_remove("AGENT_VAULT_DIR");
    cmd
}

/// Helper: an initialized vault holding `secrets`.
fn vault_with(secrets: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    in_vault(&tmp).arg("init").assert().success();
    for (name, value) in secrets {
        in_vault(&tmp)
            .args(["set", name])
            .write_stdin(*value)
            .assert()
            .success();
    }
    tmp
}

#[test]
fn help_flag_lists_commands() {
    agent_vault()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Secret-aware file access for coding agents",
        ))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("has"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("rm"))
        .stdout(predicate::str::contains("read"))
        .stdout(predicate::str::contains("write"));
}

#[test]
fn version_flag_shows_version() {
    agent_vault()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("agent-vault"));
}

#[test]
fn no_args_shows_help() {
    agent_vault()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn list_on_missing_vault_fails() {
    let tmp = TempDir::new().unwrap();
    in_vault(&tmp)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("agent-vault init"));
}

#[test]
fn init_twice_reports_already_initialized() {
    let tmp = TempDir::new().unwrap();

    in_vault(&tmp)
        .arg("init")
        .assert()
        .success()
        .stderr(predicate::str::contains("Vault created"));
    tmp.child("vault/vault.key").assert(predicate::path::exists());
    tmp.child("vault/vault.json").assert(predicate::path::exists());

    in_vault(&tmp)
        .arg("init")
        .assert()
        .success()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn vault_dir_env_var_is_honored() {
    let tmp = TempDir::new().unwrap();
    agent_vault()
        .env("AGENT_VAULT_DIR", tmp.path().join("from-env"))
        .arg("init")
        .assert()
        .success();
    tmp.child("from-env/vault.key").assert(predicate::path::exists());
}

#[test]
fn set_get_has_and_list() {
    let tmp = vault_with(&[("openai-key", "sk-proj-abc123def456ghi789")]);

    in_vault(&tmp).args(["has", "openai-key"]).assert().success();
    in_vault(&tmp).args(["has", "ghost"]).assert().code(1);

    in_vault(&tmp)
        .args(["get", "openai-key"])
        .assert()
        .success()
        .stdout(predicate::str::contains("openai-key"))
        .stdout(predicate::str::contains("26 bytes"))
        .stdout(predicate::str::contains("sk-proj").not());

    in_vault(&tmp)
        .args(["get", "openai-key", "--reveal"])
        .assert()
        .success()
        .stdout("sk-proj-abc123def456ghi789\n");

    in_vault(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("openai-key"));
}

#[test]
fn set_rejects_invalid_name() {
    let tmp = vault_with(&[]);
    in_vault(&tmp)
        .args(["set", "OPENAI_KEY"])
        .write_stdin("value")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid secret name"));
}

#[test]
fn get_missing_secret_fails() {
    let tmp = vault_with(&[]);
    in_vault(&tmp)
        .args(["get", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn rm_with_force_removes_secret() {
    let tmp = vault_with(&[("db-pass", "hunter2hunter2")]);

    in_vault(&tmp)
        .args(["rm", "db-pass", "--force"])
        .assert()
        .success();
    in_vault(&tmp).args(["has", "db-pass"]).assert().code(1);
}

#[test]
fn read_redacts_known_and_unvaulted_values() {
    let tmp = vault_with(&[("openai-key", "sk-proj-abc123def456ghi789")]);
    let file = tmp.child("config.yaml");
    file.write_str(
        "api_key: sk-proj-abc123def456ghi789\n\
         other: sk-proj-abcdefghijklmnopqrstuv1234567890\n\
         port: 3000\n",
    )
    .unwrap();

    in_vault(&tmp)
        .arg("read")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("api_key: <agent-vault:openai-key>"))
        .stdout(predicate::str::contains(
            "other: <agent-vault:UNVAULTED:sha256:",
        ))
        .stdout(predicate::str::contains("port: 3000"))
        .stdout(predicate::str::contains("abc123def456").not());
}

#[test]
fn write_restores_placeholders() {
    let tmp = vault_with(&[("my-token", "tok-0123456789abcdef")]);
    let file = tmp.child("settings.yaml");

    in_vault(&tmp)
        .arg("write")
        .arg(file.path())
        .write_stdin("token: <agent-vault:my-token>\nport: 3000\n")
        .assert()
        .success();

    file.assert("token: tok-0123456789abcdef\nport: 3000\n");
}

#[test]
fn write_restores_unvaulted_values_from_existing_file() {
    let tmp = vault_with(&[]);
    let file = tmp.child(".env");
    file.write_str("API_KEY=sk-proj-abcdefghijklmnopqrstuv1234567890\nDEBUG=true\n")
        .unwrap();

    let output = in_vault(&tmp)
        .arg("read")
        .arg(file.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let redacted = String::from_utf8(output).unwrap();
    assert!(redacted.contains("UNVAULTED"));

    in_vault(&tmp)
        .arg("write")
        .arg(file.path())
        .write_stdin(redacted.replace("DEBUG=true", "DEBUG=false"))
        .assert()
        .success();

    file.assert("API_KEY=sk-proj-abcdefghijklmnopqrstuv1234567890\nDEBUG=false\n");
}

#[test]
fn write_with_missing_reference_leaves_file_untouched() {
    let tmp = vault_with(&[]);
    let file = tmp.child("config.yaml");
    file.write_str("key: original\n").unwrap();

    in_vault(&tmp)
        .arg("write")
        .arg(file.path())
        .write_stdin("key: <agent-vault:ghost>\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<agent-vault:ghost>"));

    file.assert("key: original\n");
}

#[test]
fn write_refuses_unmatched_fingerprint_by_default() {
    let tmp = vault_with(&[]);
    let file = tmp.child(".env");
    file.write_str("K=orig\n").unwrap();

    in_vault(&tmp)
        .arg("write")
        .arg(file.path())
        .write_stdin("K=<agent-vault:UNVAULTED:sha256:deadbeef>\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "<agent-vault:UNVAULTED:sha256:deadbeef>",
        ));

    file.assert("K=orig\n");
}

#[test]
fn write_allows_unmatched_fingerprint_when_configured() {
    let tmp = vault_with(&[]);
    tmp.child("vault/config.toml")
        .write_str("block_unresolved_fingerprints = false\n")
        .unwrap();
    let file = tmp.child(".env");
    file.write_str("K=orig\n").unwrap();

    in_vault(&tmp)
        .arg("write")
        .arg(file.path())
        .write_stdin("K=<agent-vault:UNVAULTED:sha256:deadbeef>\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("could not be matched"));

    file.assert("K=<agent-vault:UNVAULTED:sha256:deadbeef>\n");
}

#[test]
fn read_skips_detection_when_disabled() {
    let tmp = vault_with(&[("openai-key", "sk-proj-abc123def456ghi789")]);
    tmp.child("vault/config.toml")
        .write_str("detect_unvaulted = false\n")
        .unwrap();
    let file = tmp.child("config.yaml");
    file.write_str(
        "api_key: sk-proj-abc123def456ghi789\n\
         other: sk-proj-abcdefghijklmnopqrstuv1234567890\n",
    )
    .unwrap();

    in_vault(&tmp)
        .arg("read")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("api_key: <agent-vault:openai-key>"))
        .stdout(predicate::str::contains(
            "other: sk-proj-abcdefghijklmnopqrstuv1234567890",
        ))
        .stdout(predicate::str::contains("UNVAULTED").not());
}

#[cfg(unix)]
#[test]
fn write_keeps_owner_only_mode_of_existing_file() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = vault_with(&[("my-token", "tok-0123456789abcdef")]);
    let file = tmp.child(".env");
    file.write_str("TOKEN=old\n").unwrap();
    std::fs::set_permissions(file.path(), std::fs::Permissions::from_mode(0o600)).unwrap();

    in_vault(&tmp)
        .arg("write")
        .arg(file.path())
        .write_stdin("TOKEN=<agent-vault:my-token>\n")
        .assert()
        .success();

    file.assert("TOKEN=tok-0123456789abcdef\n");
    let mode = std::fs::metadata(file.path()).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o600);
}
