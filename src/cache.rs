use log::debug;
use std::collections::HashMap;

/// How a submitted query is turned into a cache key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyPolicy {
    /// The submitted text, byte for byte
    #[default]
    Exact,
    /// Lowercased with whitespace runs collapsed and the ends trimmed
    Folded,
}

impl KeyPolicy {
    pub fn from_normalize(normalize: bool) -> Self {
        if normalize {
            KeyPolicy::Folded
        } else {
            KeyPolicy::Exact
        }
    }

    pub fn key(&self, query: &str) -> String {
        match self {
            KeyPolicy::Exact => query.to_string(),
            KeyPolicy::Folded => query
                .split_whitespace()
                .map(str::to_lowercase)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// Unbounded, session-lifetime map from query key to fetched results.
///
/// An empty result list is a real entry and is distinct from a miss.
/// Nothing is ever evicted.
#[derive(Debug)]
pub struct QueryCache<V> {
    name: &'static str,
    policy: KeyPolicy,
    entries: HashMap<String, V>,
}

impl<V: Clone> QueryCache<V> {
    pub fn new(name: &'static str, policy: KeyPolicy) -> Self {
        Self {
            name,
            policy,
            entries: HashMap::new(),
        }
    }

    pub fn key_for(&self, query: &str) -> String {
        self.policy.key(query)
    }

    pub fn get(&self, query: &str) -> Option<V> {
        let hit = self.entries.get(&self.key_for(query)).cloned();
        debug!(
            "{} cache {} for {:?}",
            self.name,
            if hit.is_some() { "hit" } else { "miss" },
            query
        );
        hit
    }

    pub fn put(&mut self, query: &str, value: V) {
        let key = self.key_for(query);
        self.entries.insert(key, value);
    }

    pub fn contains(&self, query: &str) -> bool {
        self.entries.contains_key(&self.key_for(query))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
