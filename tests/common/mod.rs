#![allow(dead_code)]

use async_trait::async_trait;
use recipe_finder::{MealRecord, RecipeApi, SearchError};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub fn meal(id: &str, name: &str) -> MealRecord {
    MealRecord {
        id: id.to_string(),
        name: name.to_string(),
        thumbnail: Some(format!("https://img.example/{id}.jpg")),
        ..Default::default()
    }
}

/// In-memory recipe API that records calls and can hold responses back
#[derive(Default)]
pub struct FakeApi {
    search: Mutex<HashMap<String, Vec<MealRecord>>>,
    lookup: Mutex<HashMap<String, MealRecord>>,
    failing: Mutex<HashSet<String>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_results(&self, query: &str, meals: Vec<MealRecord>) {
        self.search.lock().unwrap().insert(query.to_string(), meals);
    }

    pub fn with_recipe(&self, record: MealRecord) {
        self.lookup.lock().unwrap().insert(record.id.clone(), record);
    }

    pub fn fail(&self, key: &str) {
        self.failing.lock().unwrap().insert(key.to_string());
    }

    pub fn recover(&self, key: &str) {
        self.failing.lock().unwrap().remove(key);
    }

    /// Make requests for `key` wait until `release` is called.
    pub fn hold(&self, key: &str) {
        self.gates
            .lock()
            .unwrap()
            .insert(key.to_string(), Arc::new(Notify::new()));
    }

    pub fn release(&self, key: &str) {
        if let Some(gate) = self.gates.lock().unwrap().get(key) {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    async fn enter(&self, kind: &str, key: &str) -> Result<(), SearchError> {
        self.calls.lock().unwrap().push(format!("{kind}:{key}"));
        let gate = self.gates.lock().unwrap().get(key).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if self.failing.lock().unwrap().contains(key) {
            return Err(SearchError::fetch("connection reset by peer"));
        }
        Ok(())
    }
}

#[async_trait]
impl RecipeApi for FakeApi {
    fn api_name(&self) -> &str {
        "fake"
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<MealRecord>, SearchError> {
        self.enter("search", name).await?;
        Ok(self
            .search
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .unwrap_or_default())
    }

    async fn lookup_by_id(&self, id: &str) -> Result<Option<MealRecord>, SearchError> {
        self.enter("lookup", id).await?;
        Ok(self.lookup.lock().unwrap().get(id).cloned())
    }
}
