use crate::Storage;

use indexmap::IndexMap;

/// One result row, addressable by column name.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Row {
    columns: IndexMap<String, Storage>,
}

impl Row {
    pub fn new() -> Row {
        Row::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: Storage) {
        self.columns.insert(name.into(), value);
    }

    /// Looks a column up by name. An exact match wins over a
    /// case-insensitive one.
    pub fn get(&self, name: &str) -> Option<&Storage> {
        self.columns.get(name).or_else(|| {
            self.columns
                .iter()
                .find(|(column, _)| column.eq_ignore_ascii_case(name))
                .map(|(_, value)| value)
        })
    }

    /// Removes a column from the row and returns its value.
    pub fn take(&mut self, name: &str) -> Option<Storage> {
        if let Some(value) = self.columns.shift_remove(name) {
            return Some(value);
        }

        let key = self
            .columns
            .keys()
            .find(|column| column.eq_ignore_ascii_case(name))?
            .clone();
        self.columns.shift_remove(&key)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Storage)> {
        self.columns.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl FromIterator<(String, Storage)> for Row {
    fn from_iter<T: IntoIterator<Item = (String, Storage)>>(iter: T) -> Self {
        Row {
            columns: iter.into_iter().collect(),
        }
    }
}
