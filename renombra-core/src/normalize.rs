use crate::directory::DirectoryView;
use crate::progress::Progress;
use crate::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Normalization {
    pub from: String,
    pub to: String,
}

/// Underscores become spaces, then surrounding whitespace is trimmed.
pub fn normalize_name(name: &str) -> String {
    name.replace('_', " ").trim().to_string()
}

/// Apply [`normalize_name`] to every entry of `dir`, renaming in place.
///
/// Entries are visited in name order. A rename failure (collision with an
/// existing name, permissions) aborts the pass.
pub fn normalize_directory(
    dir: &mut DirectoryView,
    on_progress: &mut dyn FnMut(&Progress),
) -> Result<Vec<Normalization>> {
    on_progress(&Progress::NormalizeStarted {
        dir: dir.root().to_path_buf(),
    });

    let mut renamed = Vec::new();
    for (name, _) in dir.entries() {
        let new_name = normalize_name(&name);
        if new_name == name {
            on_progress(&Progress::NormalizeUnchanged { name });
            continue;
        }

        dir.rename(&name, &new_name)?;
        let normalization = Normalization {
            from: name,
            to: new_name,
        };
        on_progress(&Progress::Normalized(normalization.clone()));
        renamed.push(normalization);
    }

    Ok(renamed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_name() {
        assert_eq!(
            normalize_name("4_Calidad_exportacion_02-08-24_0200hrs.xlsx"),
            "4 Calidad exportacion 02-08-24 0200hrs.xlsx"
        );
        assert_eq!(normalize_name("_leading_and_trailing_"), "leading and trailing");
        assert_eq!(normalize_name("plain name.pdf"), "plain name.pdf");
    }

    #[test]
    fn test_normalize_directory_renames_only_changed_entries() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("7_Crudo_reposado.pdf"), b"a").unwrap();
        fs::write(root.join("clean name.pdf"), b"b").unwrap();
        fs::create_dir(root.join("sub_dir")).unwrap();

        let mut view = DirectoryView::open(root, false).unwrap();
        let mut events = Vec::new();
        let renamed = normalize_directory(&mut view, &mut |p| events.push(p.clone())).unwrap();

        assert_eq!(renamed.len(), 2);
        assert!(root.join("7 Crudo reposado.pdf").exists());
        assert!(root.join("sub dir").is_dir());
        assert!(root.join("clean name.pdf").exists());
        assert!(!root.join("7_Crudo_reposado.pdf").exists());
        assert!(events.contains(&Progress::NormalizeUnchanged {
            name: "clean name.pdf".to_string()
        }));
    }

    #[test]
    fn test_normalize_directory_collision_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("a b")).unwrap();
        fs::write(root.join("a b").join("keep.txt"), b"x").unwrap();
        fs::write(root.join("a_b"), b"file").unwrap();

        let mut view = DirectoryView::open(root, false).unwrap();
        let result = normalize_directory(&mut view, &mut |_| {});
        assert!(result.is_err());
        assert!(root.join("a b").join("keep.txt").exists());
    }

    #[test]
    fn test_normalize_directory_dry_run_touches_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("1_Suministro_a_la_RO.pdf"), b"a").unwrap();

        let mut view = DirectoryView::open(root, true).unwrap();
        let renamed = normalize_directory(&mut view, &mut |_| {}).unwrap();

        assert_eq!(renamed[0].to, "1 Suministro a la RO.pdf");
        assert!(root.join("1_Suministro_a_la_RO.pdf").exists());
        assert!(view.contains("1 Suministro a la RO.pdf"));
    }

    proptest! {
        #[test]
        fn prop_normalized_names_have_no_underscores(name in "[ _a-zA-Z0-9.\\-]{0,40}") {
            let normalized = normalize_name(&name);
            prop_assert!(!normalized.contains('_'));
            prop_assert_eq!(normalized.trim(), normalized.as_str());
        }
    }
}
