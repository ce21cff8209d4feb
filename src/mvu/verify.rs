use std::collections::BTreeMap;

use serde_json::Value;

use crate::controller::api::endpoints::{
    self, Decision, ScoresToVerify, SubmissionDetails, VerifyRequest,
};
use crate::controller::api::{ApiError, LoadData};
use crate::model::score_list::sort_by_handicap;
use crate::model::{Athlete, Score};

mod verify_decode;
mod verify_effects;

pub use verify_decode::decode_action;
pub use verify_effects::run_effect;

/// One athlete's submission on the administrator's desk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub athlete: Athlete,
    /// Scores already checked in an earlier pass.
    pub scores: Vec<Score>,
    pub new_scores: Vec<Score>,
    /// Accept (`true`) or reject, keyed by score id.
    pub decisions: BTreeMap<String, bool>,
    pub saved: bool,
}

impl Review {
    #[must_use]
    pub fn new(athlete: Athlete, scores: Vec<Score>, new_scores: Vec<Score>) -> Self {
        Self {
            athlete,
            scores,
            new_scores,
            decisions: BTreeMap::new(),
            saved: false,
        }
    }

    /// Checked and submitted scores together, best handicap first.
    #[must_use]
    pub fn all_scores(&self) -> Vec<Score> {
        let mut all: Vec<Score> = self
            .scores
            .iter()
            .chain(self.new_scores.iter())
            .cloned()
            .collect();
        sort_by_handicap(&mut all);
        all
    }

    #[must_use]
    pub fn is_pending(&self, score_id: &str) -> bool {
        self.new_scores
            .iter()
            .any(|s| !s.verified && s.id.as_deref() == Some(score_id))
    }

    /// Every submitted score needs an explicit decision before anything is saved.
    #[must_use]
    pub fn ready_to_save(&self) -> bool {
        !self.saved && self.decisions.len() == self.new_scores.len()
    }

    #[must_use]
    pub fn request(&self) -> Option<VerifyRequest> {
        Some(VerifyRequest {
            scores: self
                .decisions
                .iter()
                .map(|(id, accept)| Decision {
                    id: id.clone(),
                    accept: *accept,
                })
                .collect(),
            id: self.athlete.id?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyModel {
    pub queue: Option<Vec<Athlete>>,
    pub next: Option<Athlete>,
    pub remaining: usize,
    pub current: Option<Review>,
    pub queue_load: LoadData,
    pub athlete_load: LoadData,
    pub save: LoadData,
    scroll_to_top: bool,
}

impl Default for VerifyModel {
    fn default() -> Self {
        Self {
            queue: None,
            next: None,
            remaining: 0,
            current: None,
            queue_load: LoadData::new(endpoints::SCORES_TO_VERIFY),
            athlete_load: LoadData::new(endpoints::SUBMISSION_DETAILS),
            save: LoadData::new(endpoints::VERIFY_SCORES),
            scroll_to_top: false,
        }
    }
}

impl VerifyModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_scroll_to_top(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_top)
    }

    fn load_next(&mut self) -> Vec<Effect> {
        let Some(athlete_id) = self.next.as_ref().and_then(|a| a.id) else {
            tracing::warn!("no further submission to load");
            return vec![];
        };
        self.athlete_load.begin();
        vec![Effect::LoadSubmission { athlete_id }]
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    Show,
    Start,
    LoadNext,
    Decide { score_id: String, accept: bool },
    Save,
    QueueLoaded(Result<Value, ApiError>),
    SubmissionLoaded {
        athlete_id: i64,
        result: Result<Value, ApiError>,
    },
    Saved(Result<Value, ApiError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadQueue,
    LoadSubmission { athlete_id: i64 },
    SaveDecisions(VerifyRequest),
}

pub fn update(model: &mut VerifyModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::Show => vec![],
        Msg::Start => {
            if model.queue.is_some() || model.queue_load.loading {
                return vec![];
            }
            model.queue_load.begin();
            vec![Effect::LoadQueue]
        }
        Msg::QueueLoaded(result) => {
            let Some(data) = model.queue_load.finish(result) else {
                return vec![];
            };
            match endpoints::decode::<ScoresToVerify>(data) {
                Ok(loaded) => {
                    model.remaining = loaded.to_verify.len();
                    model.next = loaded.to_verify.first().cloned();
                    model.queue = Some(loaded.to_verify);
                }
                Err(e) => model.queue_load.fail(e),
            }
            vec![]
        }
        Msg::LoadNext => {
            if model.athlete_load.loading {
                return vec![];
            }
            model.load_next()
        }
        Msg::SubmissionLoaded { athlete_id, result } => {
            let Some(data) = model.athlete_load.finish(result) else {
                return vec![];
            };
            let details = match endpoints::decode::<SubmissionDetails>(data) {
                Ok(details) => details,
                Err(e) => {
                    model.athlete_load.fail(e);
                    return vec![];
                }
            };
            let queue = model.queue.as_deref().unwrap_or_default();
            let index = queue.iter().position(|a| a.id == Some(athlete_id));
            let athlete = index
                .and_then(|i| queue.get(i).cloned())
                .or_else(|| model.next.clone())
                .unwrap_or_default();
            model.next = index.and_then(|i| queue.get(i + 1).cloned());
            model.current = Some(Review::new(athlete, details.scores, details.new_scores));
            model.scroll_to_top = true;
            vec![]
        }
        Msg::Decide { score_id, accept } => {
            if let Some(review) = model.current.as_mut() {
                if !review.saved && review.is_pending(&score_id) {
                    review.decisions.insert(score_id, accept);
                }
            }
            vec![]
        }
        Msg::Save => {
            let Some(review) = model.current.as_ref() else {
                return vec![];
            };
            if !review.ready_to_save() || model.save.loading {
                return vec![];
            }
            let Some(req) = review.request() else {
                model.save.fail(ApiError::Parse("submission has no athlete id".into()));
                return vec![];
            };
            model.save.begin();
            vec![Effect::SaveDecisions(req)]
        }
        Msg::Saved(result) => {
            if model.save.finish(result).is_none() {
                model.scroll_to_top = true;
                return vec![];
            }
            if let Some(review) = model.current.as_mut() {
                review.saved = true;
                tracing::info!(athlete = %review.athlete.name, "verification saved");
            }
            model.remaining = model.remaining.saturating_sub(1);
            if model.next.is_some() {
                model.load_next()
            } else {
                vec![]
            }
        }
    }
}
