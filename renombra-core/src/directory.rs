use crate::error::RenombraError;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    File,
    Dir,
    Other,
}

/// One level of a directory, either backed by the filesystem or, in dry-run
/// mode, by an in-memory copy of the listing that records planned renames.
#[derive(Debug, Clone)]
pub struct DirectoryView {
    root: PathBuf,
    dry_run: bool,
    entries: BTreeMap<String, EntryKind>,
}

impl DirectoryView {
    pub fn open(root: &Path, dry_run: bool) -> Result<Self> {
        if !root.is_dir() {
            return Err(RenombraError::NotADirectory(root.to_path_buf()));
        }

        let mut entries = BTreeMap::new();
        let listing =
            fs::read_dir(root).map_err(|e| RenombraError::io("read directory", root, e))?;
        for entry in listing {
            let entry = entry.map_err(|e| RenombraError::io("read directory", root, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| RenombraError::io("inspect", entry.path(), e))?;
            let Ok(name) = entry.file_name().into_string() else {
                tracing::warn!(path = %entry.path().display(), "skipping entry with non UTF-8 name");
                continue;
            };

            let kind = if file_type.is_dir() {
                EntryKind::Dir
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };
            entries.insert(name, kind);
        }

        Ok(Self {
            root: root.to_path_buf(),
            dry_run,
            entries,
        })
    }

    /// View of a directory that does not exist yet. Only meaningful in dry
    /// runs, where the directory would have been created.
    pub fn planned(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            dry_run: true,
            entries: BTreeMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Snapshot of the current entries, sorted by name.
    pub fn entries(&self) -> Vec<(String, EntryKind)> {
        self.entries
            .iter()
            .map(|(name, kind)| (name.clone(), *kind))
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        if self.dry_run {
            self.entries.contains_key(name)
        } else {
            fs::symlink_metadata(self.root.join(name)).is_ok()
        }
    }

    /// Rename `from` to `to` within this directory. Refuses to replace an
    /// existing entry.
    pub fn rename(&mut self, from: &str, to: &str) -> Result<()> {
        let target = self.root.join(to);
        if self.contains(to) {
            return Err(RenombraError::io(
                "rename",
                target,
                io::Error::new(io::ErrorKind::AlreadyExists, "destination already exists"),
            ));
        }

        if !self.dry_run {
            let source = self.root.join(from);
            fs::rename(&source, &target).map_err(|e| RenombraError::io("rename", source, e))?;
        }

        if let Some(kind) = self.entries.remove(from) {
            self.entries.insert(to.to_string(), kind);
        }
        Ok(())
    }

    /// Move `name` out of this directory into `dest` under `dest_name`.
    pub fn move_into(&mut self, name: &str, dest: &mut Self, dest_name: &str) -> Result<()> {
        let target = dest.root.join(dest_name);
        if dest.contains(dest_name) {
            return Err(RenombraError::io(
                "move",
                target,
                io::Error::new(io::ErrorKind::AlreadyExists, "destination already exists"),
            ));
        }

        if !self.dry_run {
            let source = self.root.join(name);
            fs::rename(&source, &target).map_err(|e| RenombraError::io("move", source, e))?;
        }

        let kind = self.entries.remove(name).unwrap_or(EntryKind::File);
        dest.entries.insert(dest_name.to_string(), kind);
        Ok(())
    }

    /// Open the sub-directory `name`, creating it if absent.
    ///
    /// Returns the view and whether it had to be created.
    pub fn ensure_subdir(&mut self, name: &str) -> Result<(Self, bool)> {
        let path = self.root.join(name);
        if self.contains(name) {
            let is_dir = if self.dry_run {
                self.entries.get(name) == Some(&EntryKind::Dir)
            } else {
                path.is_dir()
            };
            if !is_dir {
                return Err(RenombraError::io(
                    "create directory",
                    path,
                    io::Error::new(io::ErrorKind::AlreadyExists, "a non-directory entry has this name"),
                ));
            }
            return Ok((Self::open(&path, self.dry_run)?, false));
        }

        if self.dry_run {
            self.entries.insert(name.to_string(), EntryKind::Dir);
            return Ok((Self::planned(&path), true));
        }

        fs::create_dir_all(&path).map_err(|e| RenombraError::io("create directory", &path, e))?;
        self.entries.insert(name.to_string(), EntryKind::Dir);
        Ok((Self::open(&path, false)?, true))
    }
}
