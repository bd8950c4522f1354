use crate::scoring::models::ScoreRecord;
use crate::storage::consts::DEFAULT_MAX_STORED_SESSIONS;
use crate::storage::interface::{IScoreStorage, ScoreRepo};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Keeps at most `capacity` records; once full, the oldest session is dropped first.
#[derive(Clone)]
pub struct HashMapScoreStorage {
    storage: Arc<RwLock<StoredScores>>,
    capacity: usize,
}

#[derive(Default)]
struct StoredScores {
    records: HashMap<String, ScoreRecord>,
    insertion_order: VecDeque<String>,
}

impl HashMapScoreStorage {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Arc::new(RwLock::new(StoredScores::default())),
            capacity: capacity.max(1),
        }
    }
}

impl Default for HashMapScoreStorage {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_STORED_SESSIONS)
    }
}

impl IScoreStorage for HashMapScoreStorage {}

impl ScoreRepo for HashMapScoreStorage {
    async fn save(&self, record: ScoreRecord) {
        let mut storage = self.storage.write().await;
        let session_id = record.session_id.clone();
        if storage.records.insert(session_id.clone(), record).is_some() {
            return;
        }
        storage.insertion_order.push_back(session_id);
        while storage.insertion_order.len() > self.capacity {
            if let Some(oldest) = storage.insertion_order.pop_front() {
                storage.records.remove(&oldest);
            }
        }
    }

    async fn get(&self, session_id: &str) -> Option<ScoreRecord> {
        self.storage.read().await.records.get(session_id).cloned()
    }

    async fn count(&self) -> usize {
        self.storage.read().await.records.len()
    }
}
