// Author: Dustin Pilgrim
// License: MIT

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value as Json};

use crate::config::YConf;
use crate::YConfError;

/// Serializes as a flat map of dotted path → value.
impl Serialize for YConf {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (path, value) in self.iter() {
            map.serialize_entry(path, value)?;
        }
        map.end()
    }
}

/// Export a config as a flat JSON object keyed by dotted path.
///
/// Scalars map to bare JSON values, arrays to JSON arrays.
///
/// # Examples
/// ```
/// use yconf::{YConf, export};
///
/// let config = YConf::from_str("a:\n  b: 1\n  c: [TRUE, FALSE]");
/// let json = export::export_flat_json(&config).unwrap();
/// assert!(json.contains("\"a.b\": 1"));
/// ```
pub fn export_flat_json(config: &YConf) -> Result<String, YConfError> {
    serde_json::to_string_pretty(config).map_err(export_error)
}

/// Export a config as nested JSON objects, splitting paths on `.`.
///
/// A path that has both a value and children keeps its value under the
/// `"_value"` key of its object.
pub fn export_nested_json(config: &YConf) -> Result<String, YConfError> {
    serde_json::to_string_pretty(&to_nested(config)?).map_err(export_error)
}

fn to_nested(config: &YConf) -> Result<Json, YConfError> {
    let mut root = Map::new();

    for (path, value) in config.iter() {
        let json = serde_json::to_value(value).map_err(export_error)?;
        let segments: Vec<&str> = path.split('.').collect();
        insert_nested(&mut root, &segments, json);
    }

    Ok(Json::Object(root))
}

/// Place `json` under `segments`, creating objects on the way. A scalar
/// standing where an object is needed moves to that object's `"_value"`.
fn insert_nested(node: &mut Map<String, Json>, segments: &[&str], json: Json) {
    match segments {
        [] => {}
        [leaf] => match node.get_mut(*leaf) {
            Some(Json::Object(children)) => {
                children.insert("_value".into(), json);
            }
            _ => {
                node.insert(leaf.to_string(), json);
            }
        },
        [head, rest @ ..] => {
            let slot = node
                .entry(head.to_string())
                .or_insert_with(|| Json::Object(Map::new()));
            match slot {
                Json::Object(children) => insert_nested(children, rest, json),
                scalar => {
                    let mut children = Map::new();
                    children.insert("_value".into(), scalar.take());
                    insert_nested(&mut children, rest, json);
                    *scalar = Json::Object(children);
                }
            }
        }
    }
}

fn export_error(e: serde_json::Error) -> YConfError {
    YConfError::TypeError {
        message: format!("Failed to export JSON: {}", e),
        line: 0,
        hint: None,
        code: Some(500),
    }
}
