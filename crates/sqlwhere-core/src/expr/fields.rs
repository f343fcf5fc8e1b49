use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

///
/// Fields
///
/// Field name → bound operand for one field-keyed expression.
///
/// - Keys are unique; inserting an existing key replaces its operand in place.
/// - Entries keep insertion order. Anything that renders SQL must go through
///   `sorted`, which orders keys explicitly so output never depends on how
///   the map was built.
///

#[derive(Clone, Debug, Deref, IntoIterator, PartialEq)]
pub struct Fields<V>(#[into_iterator(owned, ref)] Vec<(String, V)>);

impl<V> Fields<V> {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert or replace the operand for `field`.
    /// Returns the previous operand when the key already existed.
    pub fn insert(&mut self, field: impl Into<String>, operand: V) -> Option<V> {
        let field = field.into();

        match self.0.iter_mut().find(|(name, _)| *name == field) {
            Some((_, slot)) => Some(std::mem::replace(slot, operand)),
            None => {
                self.0.push((field, operand));
                None
            }
        }
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&V> {
        self.0
            .iter()
            .find_map(|(name, operand)| (name == field).then_some(operand))
    }

    /// Entries ordered by field name (byte-lexicographic).
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, &V)> {
        let mut entries: Vec<_> = self
            .0
            .iter()
            .map(|(name, operand)| (name.as_str(), operand))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

        entries
    }
}

impl<V> Default for Fields<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Fields<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (field, operand) in iter {
            fields.insert(field, operand);
        }

        fields
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for Fields<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (field, operand) in iter {
            self.insert(field, operand);
        }
    }
}

impl<V: Serialize> Serialize for Fields<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.sorted())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Fields<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        BTreeMap::<String, V>::deserialize(deserializer).map(Self::from_iter)
    }
}
