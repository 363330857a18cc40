use std::fs;
use std::path::PathBuf;

#[cfg(unix)]
use std::os::unix::fs::symlink;

use crate::{WalkBuilder, Walker};

fn collect_paths(walker: Walker) -> Vec<PathBuf> {
    walker
        .map(|entry| entry.expect("traversal should succeed").into_path())
        .collect()
}

fn sorted(mut paths: Vec<PathBuf>) -> Vec<PathBuf> {
    paths.sort();
    paths
}

#[test]
fn missing_root_walks_empty() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let walker = WalkBuilder::new(temp.path().join("absent"))
        .build()
        .expect("absent roots build an empty walker");
    assert!(collect_paths(walker).is_empty());
}

#[test]
fn empty_root_walks_empty() {
    let walker = WalkBuilder::new("").build().expect("empty root builds");
    assert!(collect_paths(walker).is_empty());
}

#[test]
fn file_root_emits_single_entry() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let file = temp.path().join("single.txt");
    fs::write(&file, b"data").expect("write file");

    let mut walker = WalkBuilder::new(&file).build().expect("build walker");
    let entry = walker
        .next()
        .expect("file roots yield themselves")
        .expect("entry is ok");
    assert_eq!(entry.path(), file.as_path());
    assert_eq!(entry.depth(), 1);
    assert!(entry.metadata().is_file());
    assert!(walker.next().is_none());
}

#[test]
fn root_is_first_and_normalized() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let root = temp.path().join("tree");
    fs::create_dir(&root).expect("create root");
    fs::write(root.join("leaf.txt"), b"data").expect("write file");

    let walker = WalkBuilder::new(root.join("."))
        .build()
        .expect("build walker");
    let paths = collect_paths(walker);
    assert_eq!(paths[0], root);
    assert!(paths.contains(&root.join("leaf.txt")));
}

#[test]
fn parents_precede_children() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let root = temp.path().join("tree");
    fs::create_dir_all(root.join("sub")).expect("create dirs");
    fs::write(root.join("top.txt"), b"data").expect("write file");
    fs::write(root.join("sub").join("deep.txt"), b"data").expect("write file");

    let walker = WalkBuilder::new(&root).build().expect("build walker");
    let paths = collect_paths(walker);

    let position = |needle: &PathBuf| {
        paths
            .iter()
            .position(|path| path == needle)
            .expect("path should be present")
    };
    assert_eq!(position(&root), 0);
    assert!(position(&root.join("sub")) < position(&root.join("sub").join("deep.txt")));

    let expected = vec![
        root.clone(),
        root.join("sub"),
        root.join("sub").join("deep.txt"),
        root.join("top.txt"),
    ];
    assert_eq!(sorted(paths), sorted(expected));
}

#[test]
fn depth_counts_components_from_the_root() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let root = temp.path().join("tree");
    fs::create_dir_all(root.join("mid").join("low")).expect("create dirs");

    let walker = WalkBuilder::new(&root).build().expect("build walker");
    for entry in walker {
        let entry = entry.expect("entry is ok");
        let expected = entry
            .path()
            .strip_prefix(temp.path())
            .expect("entries stay under the root")
            .components()
            .count();
        assert_eq!(entry.depth(), expected);
    }
}

#[cfg(unix)]
#[test]
fn dangling_link_root_walks_empty() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let link = temp.path().join("dangling");
    symlink(temp.path().join("absent"), &link).expect("create symlink");

    let walker = WalkBuilder::new(&link).build().expect("dangling root builds");
    assert!(collect_paths(walker).is_empty());
}

#[cfg(unix)]
#[test]
fn links_are_listed_not_entered_when_following_is_off() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let root = temp.path().join("tree");
    let real = root.join("real");
    fs::create_dir_all(&real).expect("create dirs");
    fs::write(real.join("file.txt"), b"data").expect("write file");
    symlink(&real, root.join("link")).expect("create symlink");

    let walker = WalkBuilder::new(&root)
        .follow_symlinks(false)
        .build()
        .expect("build walker");
    let mut link_seen = false;
    for entry in walker {
        let entry = entry.expect("entry is ok");
        if entry.path() == root.join("link") {
            link_seen = true;
            assert!(entry.metadata().file_type().is_symlink());
        }
        assert_ne!(entry.path(), root.join("link").join("file.txt").as_path());
    }
    assert!(link_seen);
}

#[cfg(unix)]
#[test]
fn followed_sibling_link_replays_the_target_subtree() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let root = temp.path().join("tree");
    let real = root.join("real");
    fs::create_dir_all(&real).expect("create dirs");
    fs::write(real.join("file.txt"), b"data").expect("write file");
    symlink(&real, root.join("sym")).expect("create symlink");

    let walker = WalkBuilder::new(&root).build().expect("build walker");
    let expected = vec![
        root.clone(),
        real.clone(),
        real.join("file.txt"),
        root.join("sym"),
        root.join("sym").join("file.txt"),
    ];
    assert_eq!(sorted(collect_paths(walker)), sorted(expected));
}

#[cfg(unix)]
#[test]
fn cycle_directory_is_listed_once_without_descent() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let root = temp.path().join("tree");
    fs::create_dir(&root).expect("create root");
    symlink(&root, root.join("loop")).expect("create symlink");

    let walker = WalkBuilder::new(&root).build().expect("build walker");
    let paths = collect_paths(walker);
    assert_eq!(sorted(paths), sorted(vec![root.clone(), root.join("loop")]));
}

#[cfg(unix)]
#[test]
fn root_link_follows_without_enabling_inner_links() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let target = temp.path().join("target");
    let other = temp.path().join("other");
    fs::create_dir_all(&target).expect("create dirs");
    fs::create_dir_all(&other).expect("create dirs");
    fs::write(target.join("file.txt"), b"data").expect("write file");
    fs::write(other.join("hidden.txt"), b"data").expect("write file");
    symlink(&other, target.join("inner")).expect("create symlink");
    let root_link = temp.path().join("entry");
    symlink(&target, &root_link).expect("create symlink");

    let walker = WalkBuilder::new(&root_link)
        .follow_symlinks(false)
        .build()
        .expect("build walker");
    let expected = vec![
        root_link.clone(),
        root_link.join("file.txt"),
        root_link.join("inner"),
    ];
    assert_eq!(sorted(collect_paths(walker)), sorted(expected));
}

#[cfg(unix)]
#[test]
fn root_link_is_not_followed_when_both_knobs_are_off() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let target = temp.path().join("target");
    fs::create_dir_all(&target).expect("create dirs");
    fs::write(target.join("file.txt"), b"data").expect("write file");
    let root_link = temp.path().join("entry");
    symlink(&target, &root_link).expect("create symlink");

    let walker = WalkBuilder::new(&root_link)
        .follow_symlinks(false)
        .follow_root_symlink(false)
        .build()
        .expect("build walker");
    let paths = collect_paths(walker);
    assert_eq!(paths, vec![root_link.clone()]);
}
