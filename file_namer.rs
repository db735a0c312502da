use std::path::{Path, PathBuf};
use tracing::debug;

/// First path at or after `base` that does not exist yet.
///
/// `result.json` stays as is when free, otherwise `result_1.json`,
/// `result_2.json`, ... are probed in order.
pub fn next_available_path<P: AsRef<Path>>(base: P) -> PathBuf {
    let base = base.as_ref();
    if !base.exists() {
        return base.to_path_buf();
    }

    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = base
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut index: u64 = 1;
    loop {
        let candidate = base.with_file_name(format!("{}_{}{}", stem, index, extension));
        if !candidate.exists() {
            debug!("{} is taken, using {}", base.display(), candidate.display());
            return candidate;
        }
        index += 1;
    }
}
