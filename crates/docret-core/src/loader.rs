// Knowledge-base loader: one category per subdirectory, one document
// per .txt file.
use crate::models::Document;
use anyhow::{bail, Result};
use ignore::WalkBuilder;
use std::path::Path;
use tracing::{debug, warn};

/// Load every `*.txt` document under `root`.
///
/// The layout is exactly one level deep: each subdirectory of `root`
/// is a category and its `*.txt` files are documents. Files placed
/// directly in `root` have no category and are skipped, and deeper
/// nesting is not descended into. The title is the file stem with
/// dashes replaced by spaces. Output is sorted by (category, title)
/// so corpus order, and therefore chunk id assignment downstream,
/// does not depend on filesystem iteration order.
pub fn load_knowledge(root: &Path) -> Result<Vec<Document>> {
    if !root.is_dir() {
        bail!("knowledge root {} is not a directory", root.display());
    }

    let mut documents = Vec::new();
    let walker = WalkBuilder::new(root).max_depth(Some(2)).build();

    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                warn!("error scanning knowledge dir: {}", err);
                continue;
            }
        };

        if !entry.file_type().map_or(false, |ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some("txt") {
            continue;
        }

        let rel = path.strip_prefix(root).unwrap_or(path);
        let category = match rel.components().next() {
            Some(first) if rel.components().count() > 1 => {
                first.as_os_str().to_string_lossy().to_string()
            }
            _ => {
                debug!("skipping uncategorized file {}", path.display());
                continue;
            }
        };

        let title = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.replace('-', " "),
            None => continue,
        };

        match std::fs::read_to_string(path) {
            Ok(content) => documents.push(Document {
                category,
                title,
                content,
            }),
            Err(err) => {
                warn!("failed to read {}: {}", path.display(), err);
            }
        }
    }

    documents.sort_by(|a, b| (&a.category, &a.title).cmp(&(&b.category, &b.title)));
    Ok(documents)
}
