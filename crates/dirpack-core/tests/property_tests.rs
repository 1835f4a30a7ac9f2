//! Property-based tests for entry naming and exclusion filtering.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use dirpack_core::ExclusionFilter;
use dirpack_core::PackConfig;
use dirpack_core::PackError;
use dirpack_core::PackTask;
use dirpack_core::entry_name;
use dirpack_core::test_utils::read_zip_entries;
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;

fn component() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,8}(\\.[a-z]{1,3})?"
}

proptest! {
    /// The entry name is the relative components joined with `/`.
    #[test]
    fn prop_entry_name_joins_components(
        parts in prop::collection::vec(component(), 1..6)
    ) {
        let root = Path::new("/build/output");
        let file = parts.iter().fold(root.to_path_buf(), |path, part| path.join(part));

        let name = entry_name(root, &file).unwrap();
        prop_assert_eq!(&name, &parts.join("/"));
        prop_assert!(!name.starts_with('/'));
    }

    /// A sibling directory sharing the root's name as a prefix is never
    /// treated as being under the root.
    #[test]
    fn prop_partial_prefix_rejected(
        suffix in "[a-z0-9]{1,5}",
        rest in prop::collection::vec(component(), 1..4)
    ) {
        let root = PathBuf::from("/build/out");
        let sibling = PathBuf::from(format!("/build/out{suffix}"));
        let file = rest.iter().fold(sibling, |path, part| path.join(part));

        let err = entry_name(&root, &file).unwrap_err();
        let is_outside = matches!(err, PackError::OutsideSource { .. });
        prop_assert!(is_outside);
    }

    /// Filtering is case-insensitive: changing the case of the path never
    /// changes the verdict.
    #[test]
    fn prop_filter_ignores_case(
        parts in prop::collection::vec(component(), 1..4),
        pattern in "[a-z]{1,3}"
    ) {
        let filter = ExclusionFilter::new(&[pattern]).unwrap();
        let path = PathBuf::from(format!("/r/{}", parts.join("/")));
        let upper = PathBuf::from(path.to_string_lossy().to_uppercase());
        let lower = PathBuf::from(path.to_string_lossy().to_lowercase());

        prop_assert_eq!(filter.is_excluded(&upper), filter.is_excluded(&lower));
        prop_assert_eq!(filter.is_excluded(&path), filter.is_excluded(&lower));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// A file is in the archive iff no pattern matches its full path.
    #[test]
    fn prop_archive_contains_exactly_unexcluded_files(
        files in prop::collection::btree_set(
            ("[a-c]{1,2}", "[a-z]{1,4}", prop::sample::select(vec!["txt", "log", "dll", "pdb"])),
            1..12
        ),
        patterns in prop::collection::vec(
            prop::sample::select(vec![r"\.log$", r"\.PDB$", "/a/", "b[a-z]*\\.dll$", "zz"]),
            1..3
        )
    ) {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        std::fs::create_dir(&src).unwrap();

        let mut names = BTreeSet::new();
        for (dir, stem, ext) in &files {
            let name = format!("{dir}/{stem}.{ext}");
            let path = src.join(&name);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, name.as_bytes()).unwrap();
            names.insert(name);
        }

        let patterns: Vec<String> = patterns.into_iter().map(str::to_string).collect();
        let filter = ExclusionFilter::new(&patterns).unwrap();
        let dest = temp.path().join("out.zip");
        let config = PackConfig::new(&src, &dest).with_exclude_patterns(patterns);
        PackTask::new(config).run().unwrap();

        let archived: BTreeSet<String> = read_zip_entries(&dest).into_keys().collect();
        let expected: BTreeSet<String> = names
            .into_iter()
            .filter(|name| !filter.is_excluded(&src.join(name)))
            .collect();

        prop_assert_eq!(archived, expected);
    }
}
