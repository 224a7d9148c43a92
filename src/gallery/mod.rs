// SPDX-License-Identifier: MPL-2.0
//! The ordered image sequence shown by the grid and the slideshow.
//!
//! A [`Gallery`] is built once per scan and never mutated afterwards. Each
//! build gets a fresh [`Gallery::generation`], which lets timers keyed on the
//! gallery notice that the sequence was replaced.

pub mod scanner;

use crate::config::SortOrder;
use crate::error::{Error, Result};
use iced::widget::image;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// One picture of the gallery.
#[derive(Debug, Clone)]
pub struct ImageRef {
    /// Position in the gallery, also the `photoId` of its address.
    pub id: usize,
    pub path: PathBuf,
    /// File name shown under the thumbnail.
    pub name: String,
    handle: image::Handle,
}

impl ImageRef {
    fn new(id: usize, path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let handle = image::Handle::from_path(&path);
        Self {
            id,
            path,
            name,
            handle,
        }
    }

    /// Shared handle; decoding and caching are left to the renderer.
    #[must_use]
    pub fn handle(&self) -> image::Handle {
        self.handle.clone()
    }
}

#[derive(Debug, Clone)]
pub struct Gallery {
    images: Vec<ImageRef>,
    generation: u64,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Gallery {
    /// Builds a gallery from already ordered paths.
    #[must_use]
    pub fn new(paths: Vec<PathBuf>) -> Self {
        static GENERATION: AtomicU64 = AtomicU64::new(0);

        let images = paths
            .into_iter()
            .enumerate()
            .map(|(id, path)| ImageRef::new(id, path))
            .collect();

        Self {
            images,
            generation: GENERATION.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Scans `directory` for supported images.
    pub fn scan(directory: &Path, sort_order: SortOrder) -> Result<Self> {
        scanner::scan_directory(directory, sort_order).map(Self::new)
    }

    /// Opens a file or a directory.
    ///
    /// For a file the parent directory is scanned and the returned index
    /// points at that file.
    pub fn open(path: &Path, sort_order: SortOrder) -> Result<(Self, Option<usize>)> {
        if path.is_dir() {
            return Ok((Self::scan(path, sort_order)?, None));
        }

        let parent = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        if !path.exists() {
            return Err(Error::Io(format!("{} does not exist", path.display())));
        }

        let gallery = Self::scan(parent, sort_order)?;
        let start = gallery.position_of(path);
        Ok((gallery, start))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.images.get(index)
    }

    #[must_use]
    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRef> {
        self.images.iter()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Index of `path`, comparing by file name when the paths differ in form.
    #[must_use]
    pub fn position_of(&self, path: &Path) -> Option<usize> {
        self.images
            .iter()
            .position(|image| image.path == path)
            .or_else(|| {
                let name = path.file_name()?;
                self.images
                    .iter()
                    .position(|image| image.path.file_name() == Some(name))
            })
    }
}
