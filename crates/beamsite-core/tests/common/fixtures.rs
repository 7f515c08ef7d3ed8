//! Config fixtures for integration tests.

use std::fs;
use std::path::PathBuf;

use beamsite_core::platform::Platform;
use tempfile::TempDir;

pub const WALLET_SHA256: &str =
    "1f54753e3b8f1f749bab183da0d05eff623f68adf47ec1f5b953269213902a48";

/// Minimal valid config: every platform present, two platforms with downloads.
/// `skip` leaves out that platform's section entirely.
pub fn minimal_toml(skip: Option<Platform>) -> String {
    let mut out = String::from(
        r#"
[site]
app_title = "Beam"
contact_email = "support@beam.mw"

[[links]]
key = "GITHUB"
url = "https://github.com/BeamMW/beam"
title = "GitHub"
icon = "github"

[[links]]
key = "DOCS"
url = "https://documentation.beam.mw/en/latest/"

[[links]]
key = "GITHUB_WIKI"
url = "https://GITHUB.com/BeamMW/beam/wiki"

[hints]
preconnect = ["https://builds.beam.mw"]
"#,
    );
    for p in Platform::ALL {
        if Some(p) == skip {
            continue;
        }
        match p {
            Platform::Windows => out.push_str(&format!(
                r#"
[distribution.windows]
version = "7.3"
date = "Apr 12, 2023"

[distribution.windows.links]
wallet = "https://builds.beam.mw/mainnet/win/Beam-Wallet.exe"

[distribution.windows.checksums]
wallet = "{WALLET_SHA256}"
"#
            )),
            Platform::Ios => out.push_str(
                r#"
[distribution.ios.links]
store = "https://apps.apple.com/us/app/beam-privacy-wallet/id1459842353"
"#,
            ),
            other => out.push_str(&format!("\n[distribution.{other}]\n")),
        }
    }
    out
}

/// Writes `contents` to `site.toml` in a fresh temp dir.
pub fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.toml");
    fs::write(&path, contents).unwrap();
    (dir, path)
}
