// SPDX-License-Identifier: MPL-2.0
//! Image catalog: the ordered, immutable list of images the gallery displays.
//!
//! The catalog is built once from a content source (a TOML manifest or a
//! directory scan), injected into the gallery controller, and never mutated
//! afterwards. Catalog order is the canonical navigation order for the
//! lightbox.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Stable identifier of an image within a catalog.
pub type ImageId = u32;

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub id: ImageId,
    pub src: PathBuf,
}

/// File extensions accepted by the directory scanner.
const IMAGE_EXTENSIONS: [&str; 8] = ["jpg", "jpeg", "png", "gif", "bmp", "webp", "tiff", "tif"];

/// Checks whether a path has a supported image extension (case-insensitive).
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// An ordered, immutable collection of images with id lookup and cyclic
/// neighbor queries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    images: Vec<Image>,
}

impl Catalog {
    /// Creates a catalog from an already-ordered image list.
    ///
    /// Returns an error if two entries share an id; navigation relies on id
    /// identity being unambiguous.
    pub fn new(images: Vec<Image>) -> Result<Self> {
        for (i, image) in images.iter().enumerate() {
            if images[..i].iter().any(|other| other.id == image.id) {
                return Err(Error::Catalog(format!("duplicate image id {}", image.id)));
            }
        }
        Ok(Self { images })
    }

    /// Returns the images in catalog order.
    pub fn images(&self) -> &[Image] {
        &self.images
    }

    /// Returns the total number of images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Returns the position of an id in catalog order, if present.
    pub fn index_of(&self, id: ImageId) -> Option<usize> {
        self.images.iter().position(|image| image.id == id)
    }

    /// Returns the image with the given id, if present.
    pub fn get(&self, id: ImageId) -> Option<&Image> {
        self.images.iter().find(|image| image.id == id)
    }

    /// Returns the image following `id` in catalog order, wrapping around to
    /// the first image after the last. `None` if `id` is not in the catalog.
    pub fn next_after(&self, id: ImageId) -> Option<&Image> {
        let index = self.index_of(id)?;
        self.images.get((index + 1) % self.images.len())
    }

    /// Returns the image preceding `id` in catalog order, wrapping around to
    /// the last image before the first. `None` if `id` is not in the catalog.
    pub fn previous_before(&self, id: ImageId) -> Option<&Image> {
        let index = self.index_of(id)?;
        let len = self.images.len();
        self.images.get((index + len - 1) % len)
    }
}

/// Serde shape of a catalog manifest file.
///
/// ```toml
/// [[image]]
/// id = 1
/// src = "photos/alps.jpg"
/// ```
#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(rename = "image", default)]
    images: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    id: ImageId,
    src: PathBuf,
}

/// Loads a catalog from a TOML manifest.
///
/// Relative `src` entries are resolved against the manifest's parent
/// directory so a manifest can ship next to its images.
pub fn load_manifest(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)?;
    let manifest: Manifest = toml::from_str(&content).map_err(|e| Error::Catalog(e.to_string()))?;

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    let images = manifest
        .images
        .into_iter()
        .map(|entry| Image {
            id: entry.id,
            src: if entry.src.is_absolute() {
                entry.src
            } else {
                base.join(entry.src)
            },
        })
        .collect();

    Catalog::new(images)
}

/// Builds a catalog by scanning a directory for supported image files.
///
/// Files are sorted alphabetically by path and assigned ids 1..N in that
/// order, so repeated scans of an unchanged directory produce an identical
/// catalog.
pub fn scan_directory(directory: &Path) -> Result<Catalog> {
    let mut paths = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_supported_image(&path) {
            paths.push(path);
        }
    }

    paths.sort();

    let images = paths
        .into_iter()
        .zip(1u32..)
        .map(|(src, id)| Image { id, src })
        .collect();

    Catalog::new(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn test_image(id: ImageId) -> Image {
        Image {
            id,
            src: PathBuf::from(format!("/{}.jpg", id)),
        }
    }

    fn test_catalog(count: u32) -> Catalog {
        Catalog::new((1..=count).map(test_image).collect()).expect("valid catalog")
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let result = Catalog::new(vec![test_image(1), test_image(2), test_image(1)]);
        match result {
            Err(Error::Catalog(message)) => assert!(message.contains("duplicate")),
            other => panic!("expected Catalog error, got {:?}", other),
        }
    }

    #[test]
    fn index_of_follows_catalog_order() {
        let catalog = test_catalog(5);
        assert_eq!(catalog.index_of(1), Some(0));
        assert_eq!(catalog.index_of(5), Some(4));
        assert_eq!(catalog.index_of(99), None);
    }

    #[test]
    fn next_after_wraps_around() {
        let catalog = test_catalog(3);
        assert_eq!(catalog.next_after(1).map(|i| i.id), Some(2));
        assert_eq!(catalog.next_after(3).map(|i| i.id), Some(1));
    }

    #[test]
    fn previous_before_wraps_around() {
        let catalog = test_catalog(3);
        assert_eq!(catalog.previous_before(2).map(|i| i.id), Some(1));
        assert_eq!(catalog.previous_before(1).map(|i| i.id), Some(3));
    }

    #[test]
    fn neighbor_queries_on_unknown_id_return_none() {
        let catalog = test_catalog(3);
        assert_eq!(catalog.next_after(42), None);
        assert_eq!(catalog.previous_before(42), None);
    }

    #[test]
    fn full_cycle_of_next_returns_to_start() {
        let catalog = test_catalog(5);
        let mut id = 3;
        for _ in 0..catalog.len() {
            id = catalog.next_after(id).expect("id in catalog").id;
        }
        assert_eq!(id, 3);
    }

    #[test]
    fn full_cycle_of_previous_returns_to_start() {
        let catalog = test_catalog(5);
        let mut id = 2;
        for _ in 0..catalog.len() {
            id = catalog.previous_before(id).expect("id in catalog").id;
        }
        assert_eq!(id, 2);
    }

    #[test]
    fn load_manifest_resolves_relative_sources() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let manifest_path = temp_dir.path().join("catalog.toml");
        fs::write(
            &manifest_path,
            r#"
[[image]]
id = 1
src = "a.jpg"

[[image]]
id = 2
src = "/absolute/b.jpg"
"#,
        )
        .expect("failed to write manifest");

        let catalog = load_manifest(&manifest_path).expect("manifest should load");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.images()[0].src, temp_dir.path().join("a.jpg"));
        assert_eq!(catalog.images()[1].src, PathBuf::from("/absolute/b.jpg"));
    }

    #[test]
    fn load_manifest_rejects_duplicate_ids() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let manifest_path = temp_dir.path().join("catalog.toml");
        fs::write(
            &manifest_path,
            "[[image]]\nid = 1\nsrc = \"a.jpg\"\n[[image]]\nid = 1\nsrc = \"b.jpg\"\n",
        )
        .expect("failed to write manifest");

        assert!(matches!(
            load_manifest(&manifest_path),
            Err(Error::Catalog(_))
        ));
    }

    #[test]
    fn load_manifest_with_no_entries_is_empty() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let manifest_path = temp_dir.path().join("catalog.toml");
        fs::write(&manifest_path, "").expect("failed to write manifest");

        let catalog = load_manifest(&manifest_path).expect("empty manifest should load");
        assert!(catalog.is_empty());
    }

    #[test]
    fn scan_directory_sorts_and_assigns_sequential_ids() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        for name in ["c.png", "a.jpg", "b.GIF", "notes.txt"] {
            fs::write(temp_dir.path().join(name), b"data").expect("failed to write file");
        }

        let catalog = scan_directory(temp_dir.path()).expect("scan should succeed");
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.images()[0].id, 1);
        assert_eq!(catalog.images()[0].src, temp_dir.path().join("a.jpg"));
        assert_eq!(catalog.images()[1].src, temp_dir.path().join("b.GIF"));
        assert_eq!(catalog.images()[2].src, temp_dir.path().join("c.png"));
    }

    #[test]
    fn scan_directory_on_missing_path_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("nope");
        assert!(matches!(scan_directory(&missing), Err(Error::Io(_))));
    }

    #[test]
    fn is_supported_image_checks_extension_case_insensitively() {
        assert!(is_supported_image(Path::new("photo.JPG")));
        assert!(is_supported_image(Path::new("photo.webp")));
        assert!(!is_supported_image(Path::new("clip.mp4")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }
}
