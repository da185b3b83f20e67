//! Display-name derivation from catalog paths.

/// Longest title the display pipeline carries; longer names are truncated.
pub const MAX_TITLE: usize = 96;

/// Derive a human-readable title from a catalog path.
///
/// Strips the directory prefix and a `.wav`/`.WAV` extension, then replaces
/// underscores with spaces. Names longer than [`MAX_TITLE`] bytes are
/// truncated.
#[must_use]
pub fn display_name(path: &str) -> heapless::String<MAX_TITLE> {
    let file = match path.rfind('/') {
        Some(pos) => path.get(pos.saturating_add(1)..).unwrap_or(path),
        None => path,
    };
    let stem = file
        .strip_suffix(".wav")
        .or_else(|| file.strip_suffix(".WAV"))
        .unwrap_or(file);

    let mut name = heapless::String::new();
    for c in stem.chars() {
        let c = if c == '_' { ' ' } else { c };
        if name.push(c).is_err() {
            break;
        }
    }
    name
}
