use serde_json::Value;

use crate::controller::api::endpoints::{
    self, AthleteScores, AvailableEvents, ContactRequest, HandicapResult, SubmitRequest,
};
use crate::controller::api::{ApiError, LoadData};
use crate::model::event::find_event;
use crate::model::score::SubmitScore;
use crate::model::{Athlete, Event, Score, ScoreList, TempId};
use crate::mvu::wizard::{ParamBag, Wizard};

mod submission_decode;
mod submission_effects;

pub use submission_decode::decode_action;
pub use submission_effects::run_effect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStep {
    Intro,
    DetailsCheck,
    AutoScoreReview,
    ManualScoreEntry,
    Outro,
    Contact,
}

impl SubmissionStep {
    pub const ALL: [Self; 6] = [
        Self::Intro,
        Self::DetailsCheck,
        Self::AutoScoreReview,
        Self::ManualScoreEntry,
        Self::Outro,
        Self::Contact,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubmissionParams {
    pub agb_no: Option<String>,
    pub athlete: Option<Athlete>,
    pub scores: Option<ScoreList>,
    pub events: Option<Vec<Event>>,
}

/// A partial bag; every `Some` field replaces the bag's field.
#[derive(Debug, Clone, Default)]
pub struct SubmissionUpdate {
    pub agb_no: Option<String>,
    pub athlete: Option<Athlete>,
    pub scores: Option<ScoreList>,
    pub events: Option<Vec<Event>>,
}

impl ParamBag for SubmissionParams {
    type Update = SubmissionUpdate;

    fn merge(&mut self, update: SubmissionUpdate) {
        if let Some(agb_no) = update.agb_no {
            self.agb_no = Some(agb_no);
        }
        if let Some(athlete) = update.athlete {
            self.athlete = Some(athlete);
        }
        if let Some(scores) = update.scores {
            self.scores = Some(scores);
        }
        if let Some(events) = update.events {
            self.events = Some(events);
        }
    }
}

/// What a step gets to see of the bag. Built fresh for every render.
#[derive(Debug, Clone, Copy)]
pub enum StepProps<'a> {
    Intro,
    DetailsCheck {
        agb_no: &'a str,
        athlete: &'a Athlete,
    },
    AutoScoreReview {
        scores: &'a ScoreList,
    },
    ManualScoreEntry {
        scores: &'a ScoreList,
        events: &'a [Event],
    },
    Outro,
    Contact,
}

impl SubmissionParams {
    /// `None` when the bag lacks a field `step` cannot render without.
    #[must_use]
    pub fn project(&self, step: SubmissionStep) -> Option<StepProps<'_>> {
        match step {
            SubmissionStep::Intro => Some(StepProps::Intro),
            SubmissionStep::DetailsCheck => Some(StepProps::DetailsCheck {
                agb_no: self.agb_no.as_deref()?,
                athlete: self.athlete.as_ref()?,
            }),
            SubmissionStep::AutoScoreReview => Some(StepProps::AutoScoreReview {
                scores: self.scores.as_ref()?,
            }),
            SubmissionStep::ManualScoreEntry => Some(StepProps::ManualScoreEntry {
                scores: self.scores.as_ref()?,
                events: self.events.as_deref()?,
            }),
            SubmissionStep::Outro => Some(StepProps::Outro),
            SubmissionStep::Contact => Some(StepProps::Contact),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntroState {
    pub agb_no: String,
    /// Membership number the backend had no junior archer for.
    pub not_found: Option<String>,
}

/// The add-a-score micro-flow: event, then round, then score, then a computed handicap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualEntry {
    pub event_id: Option<String>,
    pub round: Option<String>,
    pub score: String,
    pub handicap: Option<i32>,
}

impl ManualEntry {
    #[must_use]
    pub fn parsed_score(&self) -> Option<u32> {
        self.score.trim().parse().ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub email: String,
    pub agb_no: String,
    pub message: String,
    pub invalid: Option<String>,
    pub sent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaders {
    pub details: LoadData,
    pub scores: LoadData,
    pub events: LoadData,
    pub handicap: LoadData,
    pub submit: LoadData,
    pub contact: LoadData,
}

impl Default for Loaders {
    fn default() -> Self {
        Self {
            details: LoadData::new(endpoints::ATHLETE_DETAILS),
            scores: LoadData::new(endpoints::ATHLETE_SCORES),
            events: LoadData::new(endpoints::AVAILABLE_EVENTS),
            handicap: LoadData::new(endpoints::HANDICAP),
            submit: LoadData::new(endpoints::SUBMIT),
            contact: LoadData::new(endpoints::CONTACT),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubmissionModel {
    pub wizard: Wizard<SubmissionParams>,
    pub intro: IntroState,
    pub entry: ManualEntry,
    pub contact: ContactForm,
    pub loads: Loaders,
}

impl SubmissionModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active step, without the out-of-range logging the view does.
    #[must_use]
    pub fn step(&self) -> Option<SubmissionStep> {
        SubmissionStep::ALL.get(self.wizard.step_index()).copied()
    }

    #[must_use]
    pub fn scores(&self) -> Option<&ScoreList> {
        self.wizard.params().scores.as_ref()
    }

    #[must_use]
    pub fn selected_event(&self) -> Option<&Event> {
        let events = self.wizard.params().events.as_deref()?;
        find_event(events, self.entry.event_id.as_deref()?)
    }

    #[must_use]
    pub fn can_add_score(&self) -> bool {
        self.entry.handicap.is_some() && self.entry.parsed_score().is_some()
    }

    #[must_use]
    pub fn can_confirm_scores(&self) -> bool {
        self.scores().and_then(ScoreList::best_handicap).is_some()
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    Show,
    Start(String),
    ConfirmDetails,
    ConfirmScores,
    AddMoreScores,
    EventSelected(String),
    RoundSelected(String),
    ScoreChanged(String),
    AddScore,
    RemoveScore(TempId),
    BackToStart,
    OpenContact,
    SendContact(ContactRequest),
    AthleteDetailsLoaded {
        agb_no: String,
        result: Result<Value, ApiError>,
    },
    AthleteScoresLoaded(Result<Value, ApiError>),
    EventsLoaded(Result<Value, ApiError>),
    HandicapComputed {
        round: String,
        score: u32,
        result: Result<Value, ApiError>,
    },
    ScoresSubmitted(Result<Value, ApiError>),
    ContactSent(Result<Value, ApiError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadAthleteDetails { agb_no: String },
    LoadAthleteScores { agb_no: String },
    LoadAvailableEvents { agb_no: String },
    ComputeHandicap { round: String, score: u32 },
    SubmitScores(SubmitRequest),
    SendContact(ContactRequest),
}

fn email_is_plausible(email: &str) -> bool {
    regex::Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email.trim()))
}

#[allow(clippy::too_many_lines)]
pub fn update(model: &mut SubmissionModel, msg: Msg) -> Vec<Effect> {
    let step = model.step();
    match msg {
        Msg::Show => vec![],
        Msg::Start(agb_no) => {
            let agb_no = agb_no.trim().to_string();
            model.intro.agb_no.clone_from(&agb_no);
            if step != Some(SubmissionStep::Intro) || agb_no.is_empty() {
                return vec![];
            }
            model.intro.not_found = None;
            model.loads.details.begin();
            vec![Effect::LoadAthleteDetails { agb_no }]
        }
        Msg::AthleteDetailsLoaded { agb_no, result } => {
            let Some(data) = model.loads.details.finish(result) else {
                if model.loads.details.error.as_ref().is_some_and(ApiError::is_application) {
                    model.intro.not_found = Some(agb_no);
                }
                return vec![];
            };
            match endpoints::decode::<Athlete>(data) {
                Ok(athlete) => model.wizard.advance(
                    SubmissionUpdate {
                        agb_no: Some(agb_no),
                        athlete: Some(athlete),
                        ..SubmissionUpdate::default()
                    },
                    None,
                ),
                Err(e) => model.loads.details.fail(e),
            }
            vec![]
        }
        Msg::ConfirmDetails => {
            if step != Some(SubmissionStep::DetailsCheck) {
                return vec![];
            }
            let Some(agb_no) = model.wizard.params().agb_no.clone() else {
                return vec![];
            };
            model.loads.scores.begin();
            vec![Effect::LoadAthleteScores { agb_no }]
        }
        Msg::AthleteScoresLoaded(result) => {
            let Some(data) = model.loads.scores.finish(result) else {
                return vec![];
            };
            match endpoints::decode::<AthleteScores>(data) {
                Ok(loaded) => model.wizard.advance(
                    SubmissionUpdate {
                        scores: Some(ScoreList::from_persisted(loaded.scores)),
                        ..SubmissionUpdate::default()
                    },
                    None,
                ),
                Err(e) => model.loads.scores.fail(e),
            }
            vec![]
        }
        Msg::ConfirmScores => {
            if !model.can_confirm_scores() {
                return vec![];
            }
            match step {
                // nothing was added, so there is nothing to post
                Some(SubmissionStep::AutoScoreReview) => {
                    model.wizard.advance(
                        SubmissionUpdate::default(),
                        Some(SubmissionStep::Outro.index()),
                    );
                    vec![]
                }
                Some(SubmissionStep::ManualScoreEntry) => {
                    let agb_no = model.wizard.params().agb_no.clone().unwrap_or_default();
                    let scores = model
                        .scores()
                        .map(|list| list.unsaved().map(SubmitScore::from).collect())
                        .unwrap_or_default();
                    model.loads.submit.begin();
                    vec![Effect::SubmitScores(SubmitRequest { agb_no, scores })]
                }
                _ => vec![],
            }
        }
        Msg::ScoresSubmitted(result) => {
            if model.loads.submit.finish(result).is_some() {
                model.wizard.advance(SubmissionUpdate::default(), None);
            }
            vec![]
        }
        Msg::AddMoreScores => {
            if step != Some(SubmissionStep::AutoScoreReview) {
                return vec![];
            }
            let Some(agb_no) = model.wizard.params().agb_no.clone() else {
                return vec![];
            };
            model.loads.events.begin();
            vec![Effect::LoadAvailableEvents { agb_no }]
        }
        Msg::EventsLoaded(result) => {
            let Some(data) = model.loads.events.finish(result) else {
                return vec![];
            };
            match endpoints::decode::<AvailableEvents>(data) {
                Ok(loaded) => {
                    model.entry = ManualEntry::default();
                    model.wizard.advance(
                        SubmissionUpdate {
                            events: Some(loaded.events),
                            ..SubmissionUpdate::default()
                        },
                        None,
                    );
                }
                Err(e) => model.loads.events.fail(e),
            }
            vec![]
        }
        Msg::EventSelected(event_id) => {
            if step != Some(SubmissionStep::ManualScoreEntry) {
                return vec![];
            }
            let known = model
                .wizard
                .params()
                .events
                .as_deref()
                .and_then(|events| find_event(events, &event_id))
                .is_some();
            model.entry = ManualEntry {
                event_id: known.then_some(event_id),
                ..ManualEntry::default()
            };
            vec![]
        }
        Msg::RoundSelected(codename) => {
            if step != Some(SubmissionStep::ManualScoreEntry) {
                return vec![];
            }
            let eligible = model
                .selected_event()
                .is_some_and(|event| event.round(&codename).is_some());
            model.entry.handicap = None;
            if !eligible {
                model.entry.round = None;
                return vec![];
            }
            model.entry.round = Some(codename.clone());
            match model.entry.parsed_score() {
                Some(score) => {
                    model.loads.handicap.begin();
                    vec![Effect::ComputeHandicap {
                        round: codename,
                        score,
                    }]
                }
                None => vec![],
            }
        }
        Msg::ScoreChanged(value) => {
            if step != Some(SubmissionStep::ManualScoreEntry) {
                return vec![];
            }
            model.entry.score = value;
            model.entry.handicap = None;
            match (model.entry.round.clone(), model.entry.parsed_score()) {
                (Some(round), Some(score)) => {
                    model.loads.handicap.begin();
                    vec![Effect::ComputeHandicap { round, score }]
                }
                _ => vec![],
            }
        }
        Msg::HandicapComputed {
            round,
            score,
            result,
        } => {
            let Some(data) = model.loads.handicap.finish(result) else {
                return vec![];
            };
            let current = model.entry.round.as_deref() == Some(round.as_str())
                && model.entry.parsed_score() == Some(score);
            if !current {
                tracing::debug!(%round, score, "dropping handicap for a score no longer entered");
                return vec![];
            }
            match endpoints::decode::<HandicapResult>(data) {
                Ok(hc) => model.entry.handicap = Some(hc.handicap),
                Err(e) => model.loads.handicap.fail(e),
            }
            vec![]
        }
        Msg::AddScore => {
            if step != Some(SubmissionStep::ManualScoreEntry) || !model.can_add_score() {
                return vec![];
            }
            let new_score = model.selected_event().and_then(|event| {
                let round = event.round(model.entry.round.as_deref()?)?;
                Some(Score::local(
                    event,
                    round,
                    model.entry.parsed_score()?,
                    model.entry.handicap?,
                ))
            });
            if let (Some(score), Some(list)) = (new_score, model.wizard.params_mut().scores.as_mut())
            {
                let temp_id = list.add(score);
                tracing::info!(temp_id, "score added");
                model.entry = ManualEntry::default();
            }
            vec![]
        }
        Msg::RemoveScore(temp_id) => {
            if let Some(list) = model.wizard.params_mut().scores.as_mut() {
                if list.remove(temp_id).is_none() {
                    tracing::warn!(temp_id, "no unsaved score to remove");
                }
            }
            vec![]
        }
        Msg::BackToStart => {
            model.intro = IntroState::default();
            model.entry = ManualEntry::default();
            model.contact = ContactForm::default();
            model
                .wizard
                .advance(SubmissionUpdate::default(), Some(SubmissionStep::Intro.index()));
            vec![]
        }
        Msg::OpenContact => {
            model.contact = ContactForm {
                agb_no: model.wizard.params().agb_no.clone().unwrap_or_default(),
                ..ContactForm::default()
            };
            model
                .wizard
                .advance(SubmissionUpdate::default(), Some(SubmissionStep::Contact.index()));
            vec![]
        }
        Msg::SendContact(req) => {
            if step != Some(SubmissionStep::Contact) || model.contact.sent {
                return vec![];
            }
            model.contact.email.clone_from(&req.email);
            model.contact.agb_no.clone_from(&req.agb_no);
            model.contact.message.clone_from(&req.message);
            if !email_is_plausible(&req.email) {
                model.contact.invalid = Some("Please enter a valid email address.".to_string());
                return vec![];
            }
            if req.message.trim().is_empty() {
                model.contact.invalid = Some("Please enter a message.".to_string());
                return vec![];
            }
            model.contact.invalid = None;
            model.loads.contact.begin();
            vec![Effect::SendContact(req)]
        }
        Msg::ContactSent(result) => {
            if model.loads.contact.finish(result).is_some() {
                model.contact.sent = true;
            }
            vec![]
        }
    }
}
