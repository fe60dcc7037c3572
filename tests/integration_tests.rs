//! Integration tests for makeproject
//!
//! These tests run the generator against temporary directories on the real
//! filesystem and inspect the resulting tree.

#![cfg(unix)]

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

use makeproject::fs::{DiskFs, MemoryFs};
use makeproject::{EngineSettings, EntryStatus, GenerateError, ProjectGenerator, prepare};

/// Helper function to create a temporary directory structure for testing
fn create_test_directory() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Generator for `name` of `kind` inside `base`
fn generator_in(base: &Path, kind: &str, name: &str) -> ProjectGenerator {
    let destination = base.join(name.to_lowercase());
    prepare(kind, name, Some(&destination), EngineSettings::default(), &[])
        .expect("arguments should be valid")
}

/// Classify every entry below `root` (relative path -> kind), without following links
fn snapshot(root: &Path) -> BTreeSet<(String, &'static str)> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| {
            let entry = entry.expect("walk should succeed");
            let kind = if entry.path_is_symlink() {
                "link"
            } else if entry.file_type().is_dir() {
                "dir"
            } else {
                "file"
            };
            let relative = entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .into_owned();
            (relative, kind)
        })
        .collect()
}

fn expected_tree(kind: &str) -> BTreeSet<(String, &'static str)> {
    let mut expected = BTreeSet::new();
    for dir in [
        "data",
        "data/fonts",
        "data/models",
        "data/shaders",
        "data/sounds",
        "data/textures",
        "src",
    ] {
        expected.insert((dir.to_string(), "dir"));
    }
    for file in [
        "CMakeLists.txt".to_string(),
        "src/CMakeLists.txt".to_string(),
        format!("src/{kind}.h"),
        format!("src/{kind}.cpp"),
    ] {
        expected.insert((file, "file"));
    }
    expected.insert(("data/wendy".to_string(), "link"));
    expected
}

#[test]
fn test_generates_exact_tree_for_every_kind() {
    let temp = create_test_directory();

    for kind in ["Demo", "Game", "Test"] {
        let name = format!("{}proj", kind.to_lowercase());
        let generator = generator_in(temp.path(), kind, &name);
        generator.build(&mut DiskFs::new()).unwrap();

        assert_eq!(
            snapshot(&temp.path().join(&name)),
            expected_tree(kind),
            "unexpected tree for {kind}"
        );
    }
}

#[test]
fn test_skyfall_example() {
    let temp = create_test_directory();
    let generator = generator_in(temp.path(), "Game", "skyfall");
    let report = generator.build(&mut DiskFs::new()).unwrap();

    let dest = temp.path().join("skyfall");
    assert_eq!(report.destination, dest);

    let header = fs::read_to_string(dest.join("src/Game.h")).unwrap();
    assert!(header.contains("namespace skyfall\n{"));
    assert!(header.contains("class Game : public EventHook"));

    let source = fs::read_to_string(dest.join("src/Game.cpp")).unwrap();
    assert!(source.contains("int main()"));
    assert!(source.contains("wendy::Ptr<skyfall::Game> game(new skyfall::Game());"));

    let top = fs::read_to_string(dest.join("CMakeLists.txt")).unwrap();
    assert!(top.contains("project(skyfall C CXX)"));

    assert_eq!(
        fs::read_link(dest.join("data/wendy")).unwrap(),
        PathBuf::from("../../wendy/media/wendy")
    );
}

#[test]
fn test_normalized_test_project_in_nested_destination() {
    let temp = create_test_directory();
    let dest = temp.path().join("build/out");
    let generator = prepare("test", "MyTest", Some(&dest), EngineSettings::default(), &[]).unwrap();

    generator.build(&mut DiskFs::new()).unwrap();

    let cmake = fs::read_to_string(dest.join("src/CMakeLists.txt")).unwrap();
    assert!(cmake.contains("set(mytest_SOURCES Test.cpp)"));
    assert!(cmake.contains("MACOSX_BUNDLE_GUI_IDENTIFIER org.elmindreda.tests.mytest"));
    assert!(cmake.contains("MACOSX_BUNDLE_BUNDLE_NAME Mytest"));
    assert!(dest.join("src/Test.h").is_file());
    assert!(!temp.path().join("mytest").exists());
}

#[test]
fn test_rerun_is_idempotent() {
    let temp = create_test_directory();
    let generator = generator_in(temp.path(), "Demo", "widgets");
    let dest = temp.path().join("widgets");

    generator.build(&mut DiskFs::new()).unwrap();
    let before = snapshot(&dest);

    let report = generator.build(&mut DiskFs::new()).unwrap();
    assert_eq!(report.created_count(), 0);
    assert_eq!(report.link.status, EntryStatus::Existing);
    assert_eq!(snapshot(&dest), before);
}

#[test]
fn test_existing_directories_are_kept() {
    let temp = create_test_directory();
    let dest = temp.path().join("widgets");
    fs::create_dir_all(dest.join("data/fonts")).unwrap();
    fs::write(dest.join("data/fonts/keep.ttf"), "font").unwrap();

    let generator = generator_in(temp.path(), "Demo", "widgets");
    let report = generator.build(&mut DiskFs::new()).unwrap();

    let fonts = report
        .directories
        .iter()
        .find(|d| d.path.ends_with("data/fonts"))
        .unwrap();
    assert_eq!(fonts.status, EntryStatus::Existing);
    assert_eq!(report.created_count(), 5);
    assert_eq!(
        fs::read_to_string(dest.join("data/fonts/keep.ttf")).unwrap(),
        "font"
    );
}

#[test]
fn test_blocked_path_names_the_path_and_stops() {
    let temp = create_test_directory();
    let dest = temp.path().join("skyfall");
    fs::create_dir_all(dest.join("data")).unwrap();
    fs::write(dest.join("data/shaders"), "not a directory").unwrap();

    let generator = generator_in(temp.path(), "Game", "skyfall");
    let err = generator.build(&mut DiskFs::new()).unwrap_err();

    match &err {
        GenerateError::BlockedPath(path) => assert_eq!(path, &dest.join("data/shaders")),
        other => panic!("expected a blocked path, got {other}"),
    }
    assert_eq!(err.to_string(), format!("{} blocked", dest.join("data/shaders").display()));

    // Sorted order: fonts, models, shaders (blocked), sounds, textures, src
    assert!(dest.join("data/fonts").is_dir());
    assert!(dest.join("data/models").is_dir());
    assert!(!dest.join("data/sounds").exists());
    assert!(!dest.join("data/textures").exists());
    assert!(!dest.join("src").exists());
    assert!(!dest.join("CMakeLists.txt").exists());
}

#[test]
fn test_link_conflict_is_not_overwritten() {
    let temp = create_test_directory();
    let dest = temp.path().join("skyfall");
    fs::create_dir_all(dest.join("data")).unwrap();
    std::os::unix::fs::symlink("/elsewhere", dest.join("data/wendy")).unwrap();

    let generator = generator_in(temp.path(), "Game", "skyfall");
    let err = generator.build(&mut DiskFs::new()).unwrap_err();

    assert!(matches!(err, GenerateError::LinkConflict { .. }));
    assert_eq!(
        fs::read_link(dest.join("data/wendy")).unwrap(),
        PathBuf::from("/elsewhere")
    );
    assert!(!dest.join("CMakeLists.txt").exists());
}

#[test]
fn test_symlinked_directory_counts_as_directory() {
    let temp = create_test_directory();
    let dest = temp.path().join("skyfall");
    let shared = temp.path().join("shared_textures");
    fs::create_dir_all(&shared).unwrap();
    fs::create_dir_all(dest.join("data")).unwrap();
    std::os::unix::fs::symlink(&shared, dest.join("data/textures")).unwrap();

    let generator = generator_in(temp.path(), "Game", "skyfall");
    let report = generator.build(&mut DiskFs::new()).unwrap();

    let textures = report
        .directories
        .iter()
        .find(|d| d.path.ends_with("data/textures"))
        .unwrap();
    assert_eq!(textures.status, EntryStatus::Existing);
}

#[test]
fn test_dry_run_overlay_reports_without_writing() {
    let temp = create_test_directory();
    let dest = temp.path().join("skyfall");
    fs::create_dir_all(dest.join("src")).unwrap();

    let generator = generator_in(temp.path(), "Game", "skyfall");
    let mut overlay = MemoryFs::overlaying_disk();
    let report = generator.build(&mut overlay).unwrap();

    assert_eq!(report.created_count(), 5);
    assert_eq!(overlay.files().count(), 4);
    assert!(overlay.contents(&dest.join("src/Game.cpp")).is_some());

    assert!(!dest.join("data").exists());
    assert!(!dest.join("src/Game.cpp").exists());
}

#[test]
fn test_dry_run_overlay_sees_blocked_paths() {
    let temp = create_test_directory();
    let dest = temp.path().join("skyfall");
    fs::create_dir_all(&dest).unwrap();
    fs::write(dest.join("src"), "file").unwrap();

    let generator = generator_in(temp.path(), "Game", "skyfall");
    let err = generator.build(&mut MemoryFs::overlaying_disk()).unwrap_err();
    assert!(matches!(err, GenerateError::BlockedPath(p) if p == dest.join("src")));
}

#[test]
fn test_dry_run_predicts_error_for_file_in_place_of_data() {
    let temp = create_test_directory();
    let dest = temp.path().join("skyfall");
    fs::create_dir_all(&dest).unwrap();
    fs::write(dest.join("data"), "not a directory").unwrap();

    let generator = generator_in(temp.path(), "Game", "skyfall");
    let planned = generator.build(&mut MemoryFs::overlaying_disk()).unwrap_err();
    let actual = generator.build(&mut DiskFs::new()).unwrap_err();

    for err in [&planned, &actual] {
        match err {
            GenerateError::Filesystem { action, path, .. } => {
                assert_eq!(*action, "inspect");
                assert_eq!(path, &dest.join("data/fonts"));
            }
            other => panic!("expected an inspection failure, got {other}"),
        }
    }
    assert_eq!(planned.to_string(), actual.to_string());
}

#[test]
fn test_custom_engine_and_extra_dirs() {
    let temp = create_test_directory();
    let dest = temp.path().join("probe");
    let engine = EngineSettings {
        name: "nori".to_string(),
        bundle_prefix: "com.example".to_string(),
        cmake_minimum: "3.10".to_string(),
    };
    let extra = [PathBuf::from("data/maps")];
    let generator = prepare("Test", "probe", Some(&dest), engine, &extra).unwrap();

    generator.build(&mut DiskFs::new()).unwrap();

    assert!(dest.join("data/maps").is_dir());
    assert_eq!(
        fs::read_link(dest.join("data/nori")).unwrap(),
        PathBuf::from("../../nori/media/nori")
    );
    let source = fs::read_to_string(dest.join("src/Test.cpp")).unwrap();
    assert!(source.starts_with("\n#include <nori/Nori.h>\n"));
    assert!(source.contains("nori::Ptr<probe::Test> test(new probe::Test());"));
}
