// SPDX-License-Identifier: MPL-2.0
//! Read-only resource namespace that translation bundles are loaded from.
//!
//! Resources are addressed by virtual paths rooted at `:/`, for example
//! `:/i18n/AddressBook_fr-FR.ftl`. A [`ResourceSource`] maps that namespace
//! onto actual storage: the bundles compiled into the binary, or a
//! directory on disk.

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix of every virtual resource path.
pub const RESOURCE_ROOT: &str = ":/";

/// Virtual directory holding translation bundles.
pub const TRANSLATIONS_ROOT: &str = ":/i18n/";

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Asset;

/// Storage behind the `:/` namespace.
pub trait ResourceSource {
    /// Returns the bytes stored at `path`, or `None` if nothing is there.
    fn read(&self, path: &str) -> Option<Cow<'static, [u8]>>;
}

impl<T: ResourceSource + ?Sized> ResourceSource for &T {
    fn read(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        (**self).read(path)
    }
}

impl<T: ResourceSource + ?Sized> ResourceSource for Box<T> {
    fn read(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        (**self).read(path)
    }
}

/// Resources compiled into the binary from `assets/`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedResources;

impl EmbeddedResources {
    /// Lists the virtual paths of every embedded translation bundle.
    #[must_use]
    pub fn translations() -> Vec<String> {
        Asset::iter()
            .filter(|file| file.starts_with("i18n/"))
            .map(|file| format!("{RESOURCE_ROOT}{file}"))
            .collect()
    }
}

impl ResourceSource for EmbeddedResources {
    fn read(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        let relative = relative_path(path, RESOURCE_ROOT)?;
        Asset::get(relative).map(|file| file.data)
    }
}

/// Translation bundles served from a flat directory on disk.
///
/// `:/i18n/x.ftl` reads `<dir>/x.ftl`. Nothing outside `:/i18n/` is
/// reachable.
#[derive(Debug, Clone)]
pub struct DirectoryResources {
    root: PathBuf,
}

impl DirectoryResources {
    #[must_use]
    pub fn translations(dir: impl Into<PathBuf>) -> Self {
        Self { root: dir.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ResourceSource for DirectoryResources {
    fn read(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        let relative = relative_path(path, TRANSLATIONS_ROOT)?;
        fs::read(self.root.join(relative)).ok().map(Cow::Owned)
    }
}

/// Converts a virtual path into a path relative to `mount`.
///
/// Rejects paths outside `mount` and any path that tries to climb out of
/// it.
fn relative_path<'a>(path: &'a str, mount: &str) -> Option<&'a str> {
    let relative = path.strip_prefix(mount)?;
    if relative.is_empty()
        || relative.starts_with('/')
        || relative.split('/').any(|part| part == ".." || part.is_empty())
    {
        return None;
    }
    Some(relative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn relative_path_strips_mount() {
        assert_eq!(
            relative_path(":/i18n/AddressBook_fr-FR.ftl", RESOURCE_ROOT),
            Some("i18n/AddressBook_fr-FR.ftl")
        );
        assert_eq!(
            relative_path(":/i18n/AddressBook_fr-FR.ftl", TRANSLATIONS_ROOT),
            Some("AddressBook_fr-FR.ftl")
        );
    }

    #[test]
    fn relative_path_rejects_escapes_and_foreign_paths() {
        assert_eq!(relative_path("/etc/passwd", RESOURCE_ROOT), None);
        assert_eq!(relative_path(":/../secret", RESOURCE_ROOT), None);
        assert_eq!(relative_path(":/i18n/../../x", RESOURCE_ROOT), None);
        assert_eq!(relative_path(":/i18n//x", RESOURCE_ROOT), None);
        assert_eq!(relative_path(":/", RESOURCE_ROOT), None);
        assert_eq!(relative_path(":/other/x.ftl", TRANSLATIONS_ROOT), None);
    }

    #[test]
    fn embedded_resources_ship_translations() {
        let translations = EmbeddedResources::translations();
        assert!(translations.contains(&":/i18n/AddressBook_en-US.ftl".to_string()));
        assert!(translations.contains(&":/i18n/AddressBook_fr-FR.ftl".to_string()));
        assert!(EmbeddedResources.read(":/i18n/AddressBook_fr-FR.ftl").is_some());
        assert!(EmbeddedResources.read(":/i18n/AddressBook_xx-XX.ftl").is_none());
    }

    #[test]
    fn directory_resources_read_flat_translations() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("AddressBook_de-DE.ftl"), "a = b")
            .expect("failed to write bundle");

        let resources = DirectoryResources::translations(dir.path());

        let data = resources
            .read(":/i18n/AddressBook_de-DE.ftl")
            .expect("bundle should be readable");
        assert_eq!(data.as_ref(), b"a = b");
        assert!(resources.read(":/i18n/AddressBook_fr-FR.ftl").is_none());
        assert!(resources.read(":/AddressBook_de-DE.ftl").is_none());
        assert_eq!(resources.root(), dir.path());
    }
}
