//! Shared test helpers for CLI tests.

#![allow(dead_code)]

use clap::Parser;
use contentful_orm_cli::{Cli, Command, SyncArgs};
use std::fs;
use std::path::Path;

pub const CATEGORY_YAML: &str = r#"
entity: Category
name: category
displayField: name
description: Category for blog posts
fields:
  - id: name
    type: Text
    required: true
    validations:
      - size: { min: 2, max: 50 }
  - id: slug
    type: Text
    required: true
    validations:
      - regexp: { pattern: "^[a-z0-9-]+$" }
"#;

pub const POST_JSON: &str = r#"[
  {
    "entity": "BlogPost",
    "name": "blogPost",
    "displayField": "title",
    "fields": [
      {"id": "title", "type": "Text", "required": true, "localized": true},
      {"id": "category", "type": "Reference"},
      {"id": "gallery", "type": "Array", "itemsType": "Media"}
    ]
  },
  {
    "name": "author",
    "displayField": "name",
    "fields": [{"id": "name", "type": "Symbol"}]
  }
]"#;

pub fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

/// Parses `sync` arguments with explicit credentials so the test does not
/// depend on the process environment.
pub fn sync_args(pattern: &str, extra: &[&str]) -> SyncArgs {
    let mut argv = vec![
        "contentful-orm",
        "sync",
        "--path",
        pattern,
        "--space-id",
        "space1",
        "--access-token",
        "token-abc",
        "--environment",
        "master",
    ];
    argv.extend_from_slice(extra);
    let Command::Sync(args) = Cli::try_parse_from(argv).unwrap().command;
    args
}
