//! Character documents: a YAML (or JSON) mapping of name to record

use crate::character::model::Character;
use crate::error::{ChargenError, Result};
use crate::tables::AgeCategory;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Record fields that must be present for a document to be usable
const REQUIRED_FIELDS: [&[&str]; 2] = [&["Abilities"], &["Background", "Age"]];

/// Serialization format of a character document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    #[default]
    Yaml,
    Json,
}

/// Walk a path of mapping keys; explicit nulls count as absent
fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(value, |current, key| current.get(*key))
        .filter(|found| !found.is_null())
}

fn key_to_name(key: Value) -> Result<String> {
    match key {
        Value::String(name) => Ok(name),
        other => Ok(serde_yaml::to_string(&other)?.trim().to_string()),
    }
}

/// Parse the first character of a document
///
/// The age category is derived here, once, from `Background.Age`.
pub fn load_document(text: &str) -> Result<Character> {
    let document: serde_yaml::Mapping = serde_yaml::from_str(text)?;
    let (key, record) = document.into_iter().next().ok_or(ChargenError::EmptyDocument)?;
    let name = key_to_name(key)?;

    for path in REQUIRED_FIELDS {
        if lookup(&record, path).is_none() {
            return Err(ChargenError::missing(path));
        }
    }

    let mut character: Character = serde_yaml::from_value(record)?;
    character.name = name;
    character.age_category = AgeCategory::from_age(character.background.age);

    debug!(
        name = %character.name,
        age = character.background.age,
        age_category = character.age_category.index(),
        "Loaded character document"
    );
    Ok(character)
}

/// Read and parse a character document from disk
pub fn read_file(path: impl AsRef<Path>) -> Result<Character> {
    let text = fs::read_to_string(path)?;
    load_document(&text)
}

/// Render a character as a single-entry `{name: record}` document
pub fn render(character: &Character, format: DocumentFormat) -> Result<String> {
    let mut document = BTreeMap::new();
    document.insert(character.name.as_str(), character);
    let text = match format {
        DocumentFormat::Yaml => serde_yaml::to_string(&document)?,
        DocumentFormat::Json => serde_json::to_string_pretty(&document)?,
    };
    Ok(text)
}

pub fn to_yaml(character: &Character) -> Result<String> {
    render(character, DocumentFormat::Yaml)
}

pub fn to_json(character: &Character) -> Result<String> {
    render(character, DocumentFormat::Json)
}

/// Write a character document to disk
pub fn write_file(
    path: impl AsRef<Path>,
    character: &Character,
    format: DocumentFormat,
) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, render(character, format)?)?;
    debug!(path = %path.display(), "Wrote character document");
    Ok(())
}
