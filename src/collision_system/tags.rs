use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Labels attached to a shape, e.g. "solid" or "player".
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Tags(BTreeSet<String>);

impl Tags {
    pub fn new() -> Tags {
        Tags::default()
    }

    pub fn add(&mut self, tags: &[&str]) {
        for tag in tags {
            self.0.insert((*tag).to_owned());
        }
    }

    pub fn remove(&mut self, tags: &[&str]) {
        for tag in tags {
            self.0.remove(*tag);
        }
    }

    /// true if any of `tags` is present
    pub fn has(&self, tags: &[&str]) -> bool {
        tags.iter().any(|tag| self.0.contains(*tag))
    }

    /// true if every one of `tags` is present
    pub fn has_all(&self, tags: &[&str]) -> bool {
        tags.iter().all(|tag| self.0.contains(*tag))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<'a> From<&[&'a str]> for Tags {
    fn from(tags: &[&'a str]) -> Self {
        let mut ret = Tags::new();
        ret.add(tags);
        ret
    }
}
