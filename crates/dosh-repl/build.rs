//! Stamps the binary with its git revision and build date for `dosh -V`.

use std::path::Path;
use std::process::Command;

fn git_revision() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty"])
        .output()
        .ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|rev| !rev.is_empty())
}

fn main() {
    println!("cargo::rerun-if-changed=build.rs");
    let head = Path::new("../../.git/HEAD");
    if head.exists() {
        println!("cargo::rerun-if-changed={}", head.display());
    }

    let revision = git_revision().unwrap_or_else(|| "unknown".to_string());
    let built = chrono::Utc::now().date_naive();

    println!("cargo::rustc-env=DOSH_GIT_HASH={revision}");
    println!("cargo::rustc-env=DOSH_BUILD_DATE={built}");
}
