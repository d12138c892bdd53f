use super::*;
use std::fs::File;
use tempfile::tempdir;

#[test]
fn test_discover_empty_dir() {
    let dir = tempdir().unwrap();
    assert!(discover_fixtures(dir.path()).is_empty());
}

#[test]
fn test_discover_by_stem_prefix() {
    let dir = tempdir().unwrap();

    File::create(dir.path().join("tokenize.rb")).unwrap();
    File::create(dir.path().join("parse_calls.rb")).unwrap();
    File::create(dir.path().join("helper.rb")).unwrap();
    File::create(dir.path().join("parse.txt")).unwrap();

    let files = discover_fixtures(dir.path());
    let modes: Vec<_> = files.iter().map(|f| f.mode).collect();
    assert_eq!(modes, [Mode::Parse, Mode::Tokenize]);
}

#[test]
fn test_discover_recursive_sorted() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("b");
    fs::create_dir(&sub).unwrap();

    File::create(sub.join("parse.rb")).unwrap();
    File::create(dir.path().join("a_parse.rb")).unwrap();
    File::create(dir.path().join("parse.rb")).unwrap();

    let files = discover_fixtures(dir.path());
    assert_eq!(files.len(), 2);
    assert!(files[0].path.ends_with("b/parse.rb"));
    assert_eq!(files[1].path, dir.path().join("parse.rb"));
}

#[test]
fn test_skip_hidden_and_target() {
    let dir = tempdir().unwrap();

    let hidden = dir.path().join(".hidden");
    let target = dir.path().join("target");
    fs::create_dir(&hidden).unwrap();
    fs::create_dir(&target).unwrap();

    File::create(hidden.join("parse.rb")).unwrap();
    File::create(target.join("parse.rb")).unwrap();
    File::create(dir.path().join("tokenize.rb")).unwrap();

    let files = discover_fixtures(dir.path());
    assert_eq!(files.len(), 1);
    assert!(files[0].path.ends_with("tokenize.rb"));
}

#[test]
fn test_discover_single_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("parse.rb");
    File::create(&path).unwrap();

    assert_eq!(discover_fixtures_in(&path).len(), 1);
    assert!(discover_fixtures_in(&dir.path().join("missing.rb")).is_empty());
}
