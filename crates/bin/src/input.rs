//! Reading collections and change lists from JSON files or stdin.

use std::{io::Read, path::Path};

use reorder::{ChangeRecord, Item};
use serde::de::DeserializeOwned;

/// Read a JSON document from `path`, or from stdin when the path is `-`.
fn read_json<T: DeserializeOwned>(path: &Path) -> reorder::Result<T> {
    let json = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&json)?)
}

/// Load the collection to operate on.
pub fn read_items(path: &Path) -> reorder::Result<Vec<Item>> {
    let items: Vec<Item> = read_json(path)?;
    tracing::debug!(path = %path.display(), count = items.len(), "Loaded collection");
    Ok(items)
}

/// Load change records produced by an earlier `move`.
pub fn read_changes(path: &Path) -> reorder::Result<Vec<ChangeRecord>> {
    read_json(path)
}
