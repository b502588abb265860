use std::path::PathBuf;

use tagwise::{
    config::ContentSettings,
    infra::content_store::{ContentStore, ContentStoreError},
};

mod common;

use common::BlogFixture;

fn settings(root: PathBuf, include_drafts: bool) -> ContentSettings {
    ContentSettings {
        directory: root,
        include_drafts,
        extensions: vec!["md".to_string(), "mdx".to_string()],
    }
}

#[tokio::test]
async fn loads_collection_sorted_by_slug() {
    let fixture = BlogFixture::scenario().post("notes.txt", "title: ignored");
    let store = ContentStore::new(&settings(fixture.path().to_path_buf(), false));

    let items = store.load().await.expect("collection");
    let slugs: Vec<&str> = items.iter().map(|item| item.slug.as_str()).collect();

    assert_eq!(slugs, vec!["a", "b", "c", "d", "e"]);
    assert!(items.iter().all(|item| item.source.is_some()));
}

#[tokio::test]
async fn drafts_are_opt_in() {
    let fixture = BlogFixture::scenario();
    let store = ContentStore::new(&settings(fixture.path().to_path_buf(), true));

    let items = store.load().await.expect("collection");

    assert!(
        items
            .iter()
            .any(|item| item.slug == "drafts/f" && item.draft)
    );
}

#[tokio::test]
async fn duplicate_slugs_are_rejected() {
    let fixture = BlogFixture::new()
        .post("first.md", "title: First\nslug: same")
        .post("second.md", "title: Second\nslug: same");
    let store = ContentStore::new(&settings(fixture.path().to_path_buf(), false));

    let error = store.load().await.expect_err("duplicate slug");

    assert!(matches!(error, ContentStoreError::DuplicateSlug { ref slug, .. } if slug == "same"));
}

#[tokio::test]
async fn broken_front_matter_names_the_file() {
    let fixture = BlogFixture::new().post("broken.md", "title: [unterminated");
    let store = ContentStore::new(&settings(fixture.path().to_path_buf(), false));

    let error = store.load().await.expect_err("invalid yaml");

    assert!(error.to_string().contains("broken.md"));
}

#[tokio::test]
async fn missing_root_is_reported() {
    let fixture = BlogFixture::new();
    let store = ContentStore::new(&settings(fixture.path().join("absent"), false));

    let error = store.load().await.expect_err("missing root");

    assert!(matches!(error, ContentStoreError::MissingRoot { .. }));
}

#[cfg(unix)]
#[tokio::test]
async fn walk_errors_fail_the_load() {
    let fixture = BlogFixture::new().post("a.md", "title: A");
    std::os::unix::fs::symlink(fixture.path(), fixture.path().join("loop"))
        .expect("symlink loop");
    let store = ContentStore::new(&settings(fixture.path().to_path_buf(), false));

    let error = store.load().await.expect_err("symlink loop");

    assert!(matches!(error, ContentStoreError::Walk { .. }));
}
