use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Start Start->Middle1->Middle2->End plus a bidirectional End<->Start shortcut
pub const CHAIN: &str = "digraph G {
  Start -> Middle1 [weight=1]
  Middle1 -> Middle2 [weight=1]
  Middle2 -> End [weight=1]
  End -> Start [weight=5, dir=both]
}
";

/// Two root-to-leaf branches
pub const TREE: &str = "digraph G {
  Start -> Middle1
  Middle1 -> End1
  Start -> Middle2
  Middle2 -> End2
}
";

/// Get a Command for pathweave isolated from the user's config directory
pub fn pathweave(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("pathweave");
    cmd.env("PATHWEAVE_CONFIG_DIR", config_dir)
        .env_remove("PATHWEAVE_LOG")
        .env_remove("PATHWEAVE_LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

/// Write `content` to `name` inside `dir`
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}
