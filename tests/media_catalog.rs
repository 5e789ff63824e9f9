use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use vidshare::media::catalog::{list_videos, Catalog, DiscoveryError};
use vidshare::media::item::PlayableItem;

const BASE: &str = "http://192.168.1.50:3222";

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"not really a video").unwrap();
}

fn titles(items: &[PlayableItem]) -> HashSet<String> {
    items.iter().map(|i| i.title.clone()).collect()
}

fn decode_last_segment(url: &str) -> String {
    let segment = url.rsplit('/').next().unwrap();
    urlencoding::decode(segment).unwrap().into_owned()
}

#[test]
fn nonexistent_directory_is_empty() {
    let items = list_videos(&PathBuf::from("/nonexistent/path/does/not/exist"), BASE).unwrap();
    assert!(items.is_empty());
}

#[test]
fn empty_directory_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let items = list_videos(dir.path(), BASE).unwrap();
    assert!(items.is_empty());
}

#[test]
fn file_instead_of_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "movie.mp4");
    let err = list_videos(&dir.path().join("movie.mp4"), BASE).unwrap_err();
    assert!(matches!(err, DiscoveryError::NotADirectory(_)));
}

#[test]
fn only_video_files_are_listed() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["a.mp4", "b.MKV", "c.webm", "notes.txt", "cover.jpg", "song.mp3", "Makefile"] {
        touch(dir.path(), name);
    }
    let items = list_videos(dir.path(), BASE).unwrap();
    let expected: HashSet<String> = ["a.mp4", "b.MKV", "c.webm"].iter().map(|s| s.to_string()).collect();
    assert_eq!(titles(&items), expected);
}

#[test]
fn subdirectories_are_not_descended() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "top.mp4");
    fs::create_dir(dir.path().join("season1")).unwrap();
    touch(&dir.path().join("season1"), "episode.mp4");
    fs::create_dir(dir.path().join("folder.mp4")).unwrap();

    let items = list_videos(dir.path(), BASE).unwrap();
    assert_eq!(titles(&items), HashSet::from(["top.mp4".to_string()]));
}

#[test]
fn hidden_files_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), ".partial.mp4");
    touch(dir.path(), "done.mp4");
    let items = list_videos(dir.path(), BASE).unwrap();
    assert_eq!(titles(&items), HashSet::from(["done.mp4".to_string()]));
}

#[test]
fn url_is_base_plus_encoded_title() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "clip.mp4");
    let items = list_videos(dir.path(), BASE).unwrap();
    assert_eq!(
        items,
        vec![PlayableItem {
            title: "clip.mp4".to_string(),
            url: format!("{BASE}/clip.mp4"),
        }]
    );
}

#[test]
fn reserved_characters_are_escaped_and_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let names = ["My Movie #1.mp4", "what?.mkv", "café été.webm", "100%.mp4"];
    for name in names {
        touch(dir.path(), name);
    }
    let items = list_videos(dir.path(), BASE).unwrap();
    assert_eq!(items.len(), names.len());
    for item in &items {
        let tail = item.url.strip_prefix(&format!("{BASE}/")).unwrap();
        assert!(!tail.contains(' '), "space left in {}", item.url);
        assert!(!tail.contains('#'), "# left in {}", item.url);
        assert!(!tail.contains('?'), "? left in {}", item.url);
        assert!(tail.is_ascii(), "non-ASCII left in {}", item.url);
        assert_eq!(decode_last_segment(&item.url), item.title);
    }
}

#[test]
fn repeated_scans_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["b.mp4", "a.mkv", "c d.avi", "skip.txt"] {
        touch(dir.path(), name);
    }
    let first = list_videos(dir.path(), BASE).unwrap();
    let second = list_videos(dir.path(), BASE).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn catalog_reports_directory_removed_after_start() {
    let dir = tempfile::tempdir().unwrap();
    let watched = dir.path().join("videos");
    fs::create_dir(&watched).unwrap();
    touch(&watched, "a.mp4");

    let catalog = Catalog::new(&watched, BASE);
    assert_eq!(catalog.list().unwrap().len(), 1);

    fs::remove_dir_all(&watched).unwrap();
    let err = catalog.list().unwrap_err();
    assert!(matches!(err, DiscoveryError::Vanished(_)));
}

#[test]
fn catalog_for_never_existing_directory_is_empty() {
    let catalog = Catalog::new("/nonexistent/path/does/not/exist", BASE);
    assert!(catalog.list().unwrap().is_empty());
}
