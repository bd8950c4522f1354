use crate::scoring::models::ScoreRecord;

pub trait IScoreStorage: ScoreRepo {}

pub trait ScoreRepo {
    async fn save(&self, record: ScoreRecord);

    async fn get(&self, session_id: &str) -> Option<ScoreRecord>;

    async fn count(&self) -> usize;
}
