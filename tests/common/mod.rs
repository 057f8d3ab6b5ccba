#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An isolated workspace root for one test.
pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    pub bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("ws");
        let bin = tmp.path().join("bin");
        fs::create_dir_all(&root).expect("create workspace root");
        fs::create_dir_all(&bin).expect("create bin dir");
        Self {
            _tmp: tmp,
            root,
            bin,
        }
    }

    /// `advent --root <root>` with logging silenced.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("advent").expect("advent binary");
        cmd.env("RUST_LOG", "off").arg("--root").arg(&self.root);
        cmd
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    pub fn write(&self, rel: &str, contents: &str) {
        let path = self.path(rel);
        fs::create_dir_all(path.parent().expect("parent")).expect("create parent");
        fs::write(path, contents).expect("write file");
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).expect("read file")
    }

    /// Every file under the workspace root, relative, sorted.
    pub fn files(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect(&self.root, &self.root, &mut out);
        out.sort();
        out
    }

    /// Install a fake aoc-cli script and point the workspace config at it.
    #[cfg(unix)]
    pub fn fake_aoc(&self, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin.join("aoc");
        fs::write(&path, format!("#!/bin/sh\n{body}")).expect("write fake aoc");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod fake aoc");
        self.set_config(serde_json::json!({
            "year": 2025,
            "aoc_command": path.to_str().expect("utf8 path"),
        }));
        path
    }

    pub fn set_config(&self, value: serde_json::Value) {
        fs::write(
            self.path(".advent.json"),
            serde_json::to_string_pretty(&value).expect("serialize config"),
        )
        .expect("write config");
    }
}

fn collect(base: &Path, dir: &Path, out: &mut Vec<String>) {
    for entry in fs::read_dir(dir).expect("read dir") {
        let path = entry.expect("dir entry").path();
        if path.is_dir() {
            collect(base, &path, out);
        } else {
            let rel = path.strip_prefix(base).expect("under base");
            out.push(rel.to_string_lossy().replace('\\', "/"));
        }
    }
}

/// Fake aoc-cli that writes "<kind> for day <d>" into the requested file.
pub const FAKE_AOC_OK: &str = r#"if [ "$1" = "--version" ]; then echo "aoc-cli 0.12.0"; exit 0; fi
out=""
kind=""
day=""
while [ $# -gt 0 ]; do
  case "$1" in
    --day) day="$2"; shift ;;
    --input-file) out="$2"; kind="input"; shift ;;
    --puzzle-file) out="$2"; kind="puzzle"; shift ;;
  esac
  shift
done
printf '%s for day %s\n' "$kind" "$day" > "$out"
"#;

/// Fake aoc-cli whose downloads fail like an expired session.
pub const FAKE_AOC_EXPIRED: &str = r#"if [ "$1" = "--version" ]; then echo "aoc-cli 0.12.0"; exit 0; fi
echo "error: session cookie is invalid or expired" >&2
exit 1
"#;
