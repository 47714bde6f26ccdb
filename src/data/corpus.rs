//! Raw corpus normalisation: zipped tab-separated corpus files to plain text.

use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use zip::ZipArchive;

/// Column of a corpus line that carries the text.
const TEXT_COLUMN: usize = 1;

/// Substitutions applied, in order, to the joined corpus text.
const FIXES: &[(&str, &str)] = &[
    (" . ", ". "),
    (" , ", ", "),
    ("n't", "not"),
    (" ( ", " ("),
    (" ) ", ") "),
    ("<p>", "\n"),
    (" '", "'"),
];

/// Counters reported after a normalisation run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeSummary {
    pub archives: usize,
    pub written: usize,
    pub skipped_existing: usize,
    pub failed: usize,
}

/// Re-attach punctuation and expand corpus artefacts.
pub fn fix_text(text: &str) -> String {
    FIXES
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// Text fragment of one corpus line, if the line should be kept.
pub fn text_fragment(line: &str) -> Option<&str> {
    let fragment = line
        .trim_end_matches(&['\r', '\n'][..])
        .split('\t')
        .nth(TEXT_COLUMN)?;
    let head: String = fragment.chars().take(2).collect();
    if head.contains('@') {
        None
    } else {
        Some(fragment)
    }
}

/// Join the kept fragments of a corpus file and clean the result.
///
/// Lines that are not valid UTF-8 are dropped.
pub fn extract_text(raw: &[u8]) -> String {
    let fragments: Vec<&str> = raw
        .split(|&b| b == b'\n')
        .filter_map(|line| std::str::from_utf8(line).ok())
        .filter_map(text_fragment)
        .collect();
    fix_text(&fragments.join(" "))
}

/// Normalise every `.zip` archive in `input_dir` into `output_dir`.
///
/// Entries whose output already exists are left alone, so an interrupted run
/// can be resumed.
pub fn normalize_archives(input_dir: &Path, output_dir: &Path) -> Result<NormalizeSummary> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;

    let mut archives: Vec<PathBuf> = std::fs::read_dir(input_dir)
        .with_context(|| format!("listing {}", input_dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("zip"))
        .collect();
    archives.sort();

    let mut summary = NormalizeSummary::default();
    for archive_path in archives {
        info!(archive = %archive_path.display(), "normalising archive");
        normalize_archive(&archive_path, output_dir, &mut summary)
            .with_context(|| format!("reading {}", archive_path.display()))?;
        summary.archives += 1;
    }
    info!(?summary, "corpus normalisation finished");
    Ok(summary)
}

fn normalize_archive(path: &Path, output_dir: &Path, summary: &mut NormalizeSummary) -> Result<()> {
    let mut archive = ZipArchive::new(File::open(path)?)?;
    for i in 0..archive.len() {
        let mut entry = match archive.by_index(i) {
            Ok(entry) => entry,
            Err(err) => {
                warn!(index = i, %err, "skipping unreadable entry");
                summary.failed += 1;
                continue;
            }
        };
        if entry.is_dir() {
            continue;
        }
        let Some(relative) = entry.enclosed_name().map(Path::to_path_buf) else {
            warn!(entry = %entry.name(), "skipping entry with unsafe path");
            summary.failed += 1;
            continue;
        };
        let dest = output_dir.join(&relative);
        if dest.exists() {
            debug!(dest = %dest.display(), "already normalised");
            summary.skipped_existing += 1;
            continue;
        }

        let mut raw = Vec::new();
        if let Err(err) = entry.read_to_end(&mut raw) {
            warn!(entry = %relative.display(), %err, "skipping unreadable entry");
            summary.failed += 1;
            continue;
        }
        if let Err(err) = write_text(&dest, &extract_text(&raw)) {
            warn!(dest = %dest.display(), %err, "skipping unwritable entry");
            summary.failed += 1;
            continue;
        }
        summary.written += 1;
    }
    Ok(())
}

fn write_text(dest: &Path, text: &str) -> std::io::Result<()> {
    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(dest, text)
}
