use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Occurrence count per level, iterated in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelCounts {
    entries: Vec<(String, usize)>,
    positions: HashMap<String, usize>,
}

impl LevelCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `level`
    pub fn increment(&mut self, level: &str) {
        match self.positions.get(level) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.positions.insert(level.to_string(), self.entries.len());
                self.entries.push((level.to_string(), 1));
            }
        }
    }

    pub fn get(&self, level: &str) -> Option<usize> {
        self.positions.get(level).map(|&pos| self.entries[pos].1)
    }

    /// Number of distinct levels
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(level, count)| (level.as_str(), *count))
    }
}

impl Serialize for LevelCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (level, count) in &self.entries {
            map.serialize_entry(level, count)?;
        }
        map.end()
    }
}
