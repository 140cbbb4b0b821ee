//! Schema file discovery and loading.

use anyhow::{Context, Result, bail};
use contentful_orm_model::{ContentTypeSchema, MetadataRegistry};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Expands a glob pattern into a sorted list of files.
pub fn discover_files(pattern: &str) -> Result<Vec<PathBuf>> {
    let options = glob::MatchOptions {
        case_sensitive: true,
        require_literal_separator: false,
        require_literal_leading_dot: false,
    };
    let entries = glob::glob_with(pattern, options)
        .with_context(|| format!("Invalid glob pattern '{}'", pattern))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.context("Failed to read matched path")?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Reads every schema declared in one file, in document order.
///
/// A document holds either one schema or a list of schemas. An empty
/// document declares nothing. Keys no setting recognizes are rejected.
pub fn load_schemas(path: &Path) -> Result<Vec<ContentTypeSchema>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let document: Value = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON in {}", path.display()))?,
        Some("yaml" | "yml") => serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse YAML in {}", path.display()))?,
        _ => bail!(
            "Unsupported schema file {}: expected .json, .yaml or .yml",
            path.display()
        ),
    };

    let schemas: Vec<ContentTypeSchema> = match document {
        Value::Null => Vec::new(),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                serde_json::from_value(item)
                    .with_context(|| format!("Invalid schema #{} in {}", i + 1, path.display()))
            })
            .collect::<Result<Vec<_>>>()?,
        other => vec![
            serde_json::from_value(other)
                .with_context(|| format!("Invalid schema in {}", path.display()))?,
        ],
    };

    for schema in &schemas {
        if let Some(key) = schema.unknown_keys().first() {
            bail!(
                "Unknown key '{}' in schema '{}' in {}",
                key,
                schema.entity(),
                path.display()
            );
        }
    }
    Ok(schemas)
}

/// Registers the schemas of every file, files first to last.
pub fn load_registry(files: &[PathBuf]) -> Result<MetadataRegistry> {
    let mut registry = MetadataRegistry::new();

    for file in files {
        debug!("Processing file: {}", file.display());
        let schemas = load_schemas(file)?;
        if schemas.is_empty() {
            info!("No content types found in {}", file.display());
            continue;
        }

        info!("Found {} content types in {}", schemas.len(), file.display());
        for schema in schemas {
            registry.register(schema);
        }
    }

    Ok(registry)
}
