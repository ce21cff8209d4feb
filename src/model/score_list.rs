use chrono::Utc;

use crate::model::score::{Score, TempId};

/// Scores shown to the athlete: what the backend already holds plus what they typed in this session.
///
/// The collection is kept sorted ascending by handicap after every mutation, so the first three
/// entries are always the ones that count towards the ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreList {
    scores: Vec<Score>,
    last_temp_id: TempId,
}

impl ScoreList {
    #[must_use]
    pub fn from_persisted(mut scores: Vec<Score>) -> Self {
        for score in &mut scores {
            score.temp_id = None;
        }
        sort_by_handicap(&mut scores);
        Self {
            scores,
            last_temp_id: 0,
        }
    }

    /// Prepends `score` under a fresh temporary id and re-sorts. Returns the id, which is also
    /// the handle for [`ScoreList::remove`].
    pub fn add(&mut self, mut score: Score) -> TempId {
        let now = Utc::now().timestamp_millis();
        // two adds inside the same millisecond still need distinct ids
        let temp_id = now.max(self.last_temp_id + 1);
        self.last_temp_id = temp_id;

        score.id = None;
        score.temp_id = Some(temp_id);
        self.scores.insert(0, score);
        sort_by_handicap(&mut self.scores);
        temp_id
    }

    /// Drops the unsaved score carrying `temp_id`. Imported scores are never touched.
    pub fn remove(&mut self, temp_id: TempId) -> Option<Score> {
        let pos = self
            .scores
            .iter()
            .position(|s| s.removable_id() == Some(temp_id))?;
        Some(self.scores.remove(pos))
    }

    #[must_use]
    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    pub fn unsaved(&self) -> impl Iterator<Item = &Score> {
        self.scores.iter().filter(|s| s.is_unsaved())
    }

    #[must_use]
    pub fn best_handicap(&self) -> Option<i32> {
        best_handicap_of(&self.scores)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Sum of the first three handicaps of an already-sorted collection, or `None` below three scores.
#[must_use]
pub fn best_handicap_of(scores: &[Score]) -> Option<i32> {
    if scores.len() < 3 {
        return None;
    }
    Some(scores.iter().take(3).map(|s| s.handicap).sum())
}

/// Stable, so ties keep their insertion order.
pub fn sort_by_handicap(scores: &mut [Score]) {
    scores.sort_by_key(|s| s.handicap);
}
