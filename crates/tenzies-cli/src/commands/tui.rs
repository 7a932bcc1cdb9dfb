//! Launch the tenzies-tui standalone binary.

/// Launch the tenzies-tui standalone binary.
pub fn run(seed: Option<u64>) -> Result<(), String> {
    let mut cmd = std::process::Command::new("tenzies-tui");
    if let Some(seed) = seed {
        cmd.arg("--seed").arg(seed.to_string());
    }

    match cmd.status() {
        Ok(s) if s.success() => Ok(()),
        Ok(s) => Err(format!("tenzies-tui exited with {s}")),
        Err(_) => Err(
            "tenzies-tui binary not found. Install with: cargo install --path crates/tenzies-tui"
                .into(),
        ),
    }
}
