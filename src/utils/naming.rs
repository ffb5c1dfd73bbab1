//! Output filename derivation for archive entries.

/// Derives the archive entry name for a resized image.
///
/// `"photo.final.jpg"` becomes `"resized_photo.final.jpg"`: only the
/// substring after the last `.` counts as the extension, and exactly that
/// one trailing occurrence is split off — earlier occurrences of the
/// extension string stay part of the base name. A name without a `.` gets
/// the prefix and no extension.
///
/// Entry names are archive-internal, not filesystem paths, so this works on
/// the raw string rather than `std::path`.
pub fn derive_output_name(source_name: &str) -> String {
    match source_name.rsplit_once('.') {
        Some((base, extension)) if !base.is_empty() => {
            format!("resized_{}.{}", base, extension)
        }
        // No dot, or a leading-dot name like ".hidden": nothing to split.
        _ => format!("resized_{}", source_name),
    }
}
