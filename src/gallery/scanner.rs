// SPDX-License-Identifier: MPL-2.0
//! Directory listing, filtering and ordering of image files.

use crate::config::SortOrder;
use crate::error::Result;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Extensions the slideshow can display, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "tiff", "tif", "ico",
];

/// Returns the supported images directly inside `directory`, sorted.
///
/// Subdirectories are not descended into.
pub fn scan_directory(directory: &Path, sort_order: SortOrder) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }

    sort_images(&mut images, sort_order);
    log::debug!(
        "scanned {} images in {}",
        images.len(),
        directory.display()
    );
    Ok(images)
}

#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}

fn sort_images(images: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            images.sort_by_cached_key(|path| timestamp(path, |m| m.modified()));
        }
        SortOrder::CreatedDate => {
            images.sort_by_cached_key(|path| timestamp(path, |m| m.created()));
        }
    }
}

fn timestamp(
    path: &Path,
    read: impl Fn(&std::fs::Metadata) -> std::io::Result<SystemTime>,
) -> (SystemTime, PathBuf) {
    let time = path
        .metadata()
        .and_then(|m| read(&m))
        .unwrap_or(SystemTime::UNIX_EPOCH);
    // Equal timestamps fall back to the name so the order stays stable
    (time, path.to_path_buf())
}
