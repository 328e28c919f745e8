//! The generated `package.json`.

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::domain::{error::DomainError, value_objects::AppName};

/// File name of the manifest inside the target project.
pub const MANIFEST_FILE: &str = "package.json";

const VERSION: &str = "1.0.0";
const ENTRY_POINT: &str = "index.js";

const DEPENDENCIES: [(&str, &str); 5] = [
    ("@reduxjs/toolkit", "^1.6.1"),
    ("react-redux", "^7.2.5"),
    ("next", "latest"),
    ("react", "latest"),
    ("react-dom", "latest"),
];

const SCRIPTS: [(&str, &str); 3] = [
    ("dev", "next dev"),
    ("build", "next build"),
    ("start", "next start"),
];

/// String-to-string mapping that serializes in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryMap(Vec<(String, String)>);

impl EntryMap {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EntryMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl Serialize for EntryMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Package manifest of a generated project.
///
/// Field order is the serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub main: String,
    pub dependencies: EntryMap,
    pub scripts: EntryMap,
}

impl Manifest {
    /// Manifest with the fixed Next.js + Redux Toolkit dependency set.
    pub fn for_app(name: &AppName) -> Self {
        Self {
            name: name.to_string(),
            version: VERSION.into(),
            main: ENTRY_POINT.into(),
            dependencies: DEPENDENCIES.into_iter().collect(),
            scripts: SCRIPTS.into_iter().collect(),
        }
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, DomainError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DomainError::ManifestSerialization(e.to_string()))
    }
}
