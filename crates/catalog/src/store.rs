use crate::error::{CatalogError, Result};
use indexmap::IndexMap;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::{fs, path::Path};

/// Ensures a directory exists, creating it if necessary
///
/// # Arguments
/// * `dir_path` - Path to the directory
pub fn ensure_dir(dir_path: &Path) -> Result<()> {
    if !dir_path.exists() {
        fs::create_dir_all(dir_path).map_err(|e| CatalogError::io(dir_path, e))?;
    }

    Ok(())
}

/// Names the kind of a JSON value for error messages
fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Reads a file and parses it as untyped JSON
fn read_value(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| CatalogError::json(path, e))
}

/// Reads a JSON file whose top level must be an object keyed by string
///
/// # Arguments
/// * `path` - Path to the JSON file
///
/// # Returns
/// The entries in file order, or a [`CatalogError::Shape`] if the top level is
/// not an object
pub fn read_map<T>(path: &Path) -> Result<IndexMap<String, T>>
where
    T: DeserializeOwned,
{
    let value = read_value(path)?;
    if !value.is_object() {
        return Err(CatalogError::Shape {
            path: path.to_path_buf(),
            expected: "object",
            found: kind_of(&value),
        });
    }

    serde_json::from_value(value).map_err(|e| CatalogError::json(path, e))
}

/// Reads a JSON file whose top level must be an array
///
/// # Arguments
/// * `path` - Path to the JSON file
///
/// # Returns
/// The elements in file order, or a [`CatalogError::Shape`] if the top level is
/// not an array
pub fn read_list<T>(path: &Path) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let value = read_value(path)?;
    if !value.is_array() {
        return Err(CatalogError::Shape {
            path: path.to_path_buf(),
            expected: "array",
            found: kind_of(&value),
        });
    }

    serde_json::from_value(value).map_err(|e| CatalogError::json(path, e))
}

/// Writes a value as pretty-printed JSON, replacing the file
///
/// Parent directories are created as needed.
pub fn write_json<T>(path: &Path, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir(parent)?;
        }
    }

    let text = serde_json::to_string_pretty(value).map_err(|e| CatalogError::json(path, e))?;
    fs::write(path, text).map_err(|e| CatalogError::io(path, e))
}
