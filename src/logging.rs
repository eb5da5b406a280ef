use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::path::Path;

/// Send log output to `path` so it never draws over the terminal UI.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`.
pub fn init(path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    // A logger may already be installed (e.g. by tests); keep it
    let _ = Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init();
    Ok(())
}
