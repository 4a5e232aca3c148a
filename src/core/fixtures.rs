//! Test/recording helpers for persisting HTTP fixtures.
//! Compiled only when the `test-mode` feature is enabled.
//!
//! Files land in `<dir>/<endpoint>/<name>.<ext>`, the same layout the
//! integration tests read from (`html/…`, `api/…`).

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub(crate) fn get_fixture_dir() -> PathBuf {
    env::var("TABFETCH_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

pub(crate) fn record_fixture(
    endpoint: &str,
    name: &str,
    ext: &str,
    body: &str,
) -> Result<PathBuf, std::io::Error> {
    let dir = get_fixture_dir().join(endpoint);
    fs::create_dir_all(&dir)?;
    let path = dir.join(format!("{name}.{ext}"));

    let mut file = fs::File::create(&path)?;
    file.write_all(body.as_bytes())?;

    tracing::debug!(path = %path.display(), "recorded fixture");
    Ok(path)
}
