#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use assert_cmd::Command;
use tempfile::TempDir;

/// Hermetic builder root: provisioned trust anchor, configuration file,
/// empty state directory. Each test gets its own, so tests never share
/// marker files and need no cross-test locking.
pub struct TestContext {
    root: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create test root");
        let path = root.path();

        std::fs::create_dir_all(path.join("etc/buildbox")).unwrap();
        std::fs::create_dir_all(path.join("var/lib/buildbox")).unwrap();
        std::fs::create_dir_all(path.join("root/.ssh")).unwrap();

        // Provisioning the anchor now puts the ceiling 14 days out
        std::fs::write(
            path.join("root/.ssh/authorized_keys"),
            "ssh-ed25519 AAAAC3NzaC1lZDI1 fleet@manager\n",
        )
        .unwrap();

        let pidfile = path.join("var/lib/buildbox/build.pid");
        std::fs::write(
            path.join("etc/buildbox/main.toml"),
            format!("[main]\npidfile = {:?}\n", pidfile),
        )
        .unwrap();

        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn cmd(&self) -> Command {
        let bin_path = env!("CARGO_BIN_EXE_buildbox");
        let mut cmd = Command::new(bin_path);
        cmd.timeout(Duration::from_secs(30));
        cmd.arg("--root").arg(self.root.path());
        cmd
    }

    pub fn marker_path(&self) -> PathBuf {
        self.root.path().join("var/lib/buildbox/expiration")
    }

    /// Write the marker as a whole-second timestamp `secs` from now and
    /// return the value written.
    pub fn write_marker_secs_from_now(&self, secs: i64) -> f64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64;
        let ts = now + secs;
        std::fs::write(self.marker_path(), ts.to_string()).unwrap();
        ts as f64
    }

    pub fn write_marker_raw(&self, content: &str) {
        std::fs::write(self.marker_path(), content).unwrap();
    }

    pub fn read_marker_raw(&self) -> String {
        std::fs::read_to_string(self.marker_path()).unwrap()
    }

    pub fn read_marker(&self) -> f64 {
        self.read_marker_raw().trim().parse().unwrap()
    }

    pub fn write_pid(&self, content: &str) {
        std::fs::write(self.root.path().join("var/lib/buildbox/build.pid"), content).unwrap();
    }

    /// Move the trust anchor's mtime `age` into the past, dragging the
    /// expiration ceiling with it.
    pub fn age_trust_anchor(&self, age: Duration) {
        let anchor = self.root.path().join("root/.ssh/authorized_keys");
        let mtime = SystemTime::now() - age;
        filetime::set_file_mtime(&anchor, filetime::FileTime::from_system_time(mtime)).unwrap();
    }

    pub fn remove_trust_anchor(&self) {
        std::fs::remove_file(self.root.path().join("root/.ssh/authorized_keys")).unwrap();
    }

    pub fn remove_config(&self) {
        std::fs::remove_file(self.root.path().join("etc/buildbox/main.toml")).unwrap();
    }

    pub fn unix_now(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs_f64()
    }
}
