use pkgcrit::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock IndexSource serving canned index text per location
#[derive(Default, Clone)]
pub struct MockIndexSource {
    indexes: HashMap<String, String>,
    pub requested: Arc<Mutex<Vec<String>>>,
}

impl MockIndexSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_index(mut self, location: &str, content: &str) -> Self {
        self.indexes.insert(location.to_string(), content.to_string());
        self
    }

    pub fn requested_locations(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl IndexSource for MockIndexSource {
    async fn read_index(&self, location: &IndexLocation) -> Result<String> {
        let key = location.to_string();
        self.requested.lock().unwrap().push(key.clone());
        self.indexes
            .get(&key)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Package index not found: {}", key))
    }
}
