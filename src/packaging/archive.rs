//! ZIP packaging of successful resize outcomes.

use std::collections::HashSet;
use std::io::{Cursor, Write};

use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::core::ResizeOutcome;
use crate::utils::{ResizerError, ResizerResult};

/// Packs the successful outcomes into a deflate-compressed ZIP archive.
///
/// Entries keep the orchestrator's ordering, each stored under its derived
/// output name. Colliding names are disambiguated with a `_2`, `_3`, …
/// suffix before the extension rather than left to the archive format.
/// Returns `Ok(None)` when no outcome succeeded; nothing is delivered then.
pub fn pack(outcomes: &[ResizeOutcome]) -> ResizerResult<Option<Vec<u8>>> {
    let successes: Vec<&ResizeOutcome> = outcomes.iter().filter(|o| o.success).collect();
    if successes.is_empty() {
        debug!("No successful outcomes; skipping archive generation");
        return Ok(None);
    }

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut used_names: HashSet<String> = HashSet::new();

    for outcome in &successes {
        let name = outcome.output_name.as_deref().ok_or_else(|| {
            ResizerError::packaging(format!(
                "Successful outcome for '{}' has no output name",
                outcome.source_name
            ))
        })?;
        let bytes = outcome.encoded_bytes.as_deref().ok_or_else(|| {
            ResizerError::packaging(format!(
                "Successful outcome for '{}' has no payload",
                outcome.source_name
            ))
        })?;

        let entry_name = unique_entry_name(name, &mut used_names);

        writer
            .start_file(entry_name.as_str(), options)
            .map_err(|e| {
                ResizerError::packaging(format!("Failed to add entry '{}': {}", entry_name, e))
            })?;
        writer.write_all(bytes).map_err(|e| {
            ResizerError::packaging(format!("Failed to write entry '{}': {}", entry_name, e))
        })?;
    }

    let cursor = writer
        .finish()
        .map_err(|e| ResizerError::packaging(format!("Failed to finalize archive: {}", e)))?;

    let archive = cursor.into_inner();
    info!(
        "Packed {} entries into a {} byte archive",
        successes.len(),
        archive.len()
    );

    Ok(Some(archive))
}

/// Returns `name`, or a suffixed variant when an earlier entry in the same
/// archive already took it.
fn unique_entry_name(name: &str, used: &mut HashSet<String>) -> String {
    if used.insert(name.to_string()) {
        return name.to_string();
    }

    let (base, extension) = match name.rsplit_once('.') {
        Some((base, ext)) if !base.is_empty() => (base, Some(ext)),
        _ => (name, None),
    };

    let mut counter = 2;
    loop {
        let candidate = match extension {
            Some(ext) => format!("{}_{}.{}", base, counter, ext),
            None => format!("{}_{}", base, counter),
        };
        if used.insert(candidate.clone()) {
            return candidate;
        }
        counter += 1;
    }
}
