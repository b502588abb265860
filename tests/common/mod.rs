#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// A throwaway collection directory populated with front-matter documents.
pub struct BlogFixture {
    pub dir: TempDir,
}

impl BlogFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn post(self, relative: &str, front_matter: &str) -> Self {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(&path, format!("---\n{front_matter}\n---\n\nBody of {relative}.\n"))
            .expect("write post");
        self
    }

    /// The scenario used throughout: `a` shares category and tags with
    /// `b`, category only with `d`, one tag with `c`, nothing with `e`.
    pub fn scenario() -> Self {
        Self::new()
            .post(
                "a.md",
                "title: A\ncategory: DE\ntags: [sql, spark]\ndate: 2024-01-05",
            )
            .post("b.md", "title: B\ncategory: DE\ntags: [sql]\ndate: 2024-03-01")
            .post("c.mdx", "title: C\ncategory: AI\ntags: [spark]\ndate: 2023-07-19")
            .post("d.md", "title: D\ncategory: DE\ntags: []\nweight: 1")
            .post("e.md", "title: E\ncategory: web\ntags: [css]\ndate: 2022-02-02")
            .post(
                "drafts/f.md",
                "title: F\ncategory: DE\ntags: [sql, spark]\ndraft: true",
            )
    }
}
