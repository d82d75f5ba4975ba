use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Value of one logical field. A field name seen more than once collapses
/// into an ordered list; the first occurrence decides the representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    Many(Vec<String>),
}

/// Field map preserving document order. `serde_json`'s default map type
/// sorts keys, so the entries live in a pair list and serialize as a map
/// in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldMap(Vec<(String, FieldValue)>);

impl FieldMap {
    /// Coalesces an ordered `(name, value)` snapshot into logical fields.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut entries: Vec<(String, FieldValue)> = Vec::new();
        for (name, value) in pairs {
            match entries
                .iter()
                .position(|(existing, _)| existing.as_str() == name.as_str())
            {
                Some(index) => {
                    let slot = &mut entries[index].1;
                    match slot {
                        FieldValue::Single(first) => {
                            let first = std::mem::take(first);
                            *slot = FieldValue::Many(vec![first, value]);
                        }
                        FieldValue::Many(values) => values.push(value),
                    }
                }
                None => entries.push((name, FieldValue::Single(value))),
            }
        }
        Self(entries)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, FieldValue)> {
        self.0.iter()
    }
}

impl Serialize for FieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Static identifier/name pair describing which logical form fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormMeta {
    pub id: String,
    pub name: String,
}

/// The outbound notification body. Exists only for the duration of one
/// submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub source: String,
    pub page: String,
    pub submitted_at: String,
    pub form_meta: FormMeta,
    pub data: FieldMap,
}
