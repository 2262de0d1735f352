use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use bytes::Bytes;
use tokio::sync::watch;

use crate::domain::{
    analysis::{
        entities::{AnalysisOutcome, AnalysisRequest},
        services::analyze,
    },
    common::entities::{app_errors::CoreError, language::Language},
    interaction::{messages::error_message, state::InteractionState},
    meal_plan::{entities::UserProfile, services::generate_meal_plan},
    oracle::{ports::OracleClient, value_objects::ImageUpload},
};

/// Whether a user action was taken up by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Accepted,
    Ignored,
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Submission::Accepted)
    }
}

/// Drives the analysis and meal plan flows over a single state record.
///
/// Every accepted action takes a generation ticket when it enters `Loading`.
/// A completion is applied only while its ticket is still current, so a
/// `reset` issued mid-call makes the late answer a no-op.
///
/// At most one oracle call is outstanding. The visible state may already be
/// `Idle` after a `reset`, but new submissions are ignored until the
/// abandoned call resolves.
pub struct InteractionController<O: OracleClient> {
    oracle: O,
    state: watch::Sender<InteractionState>,
    generation: AtomicU64,
    in_flight: AtomicBool,
}

/// An accepted call. Releasing it, or dropping the call's future, frees the
/// controller for the next submission.
struct Ticket<'a> {
    generation: u64,
    in_flight: &'a AtomicBool,
    held: bool,
}

impl Ticket<'_> {
    fn release(&mut self) {
        if std::mem::take(&mut self.held) {
            self.in_flight.store(false, Ordering::SeqCst);
        }
    }
}

impl Drop for Ticket<'_> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<O: OracleClient> InteractionController<O> {
    pub fn new(oracle: O) -> Self {
        let (state, _) = watch::channel(InteractionState::Idle);
        Self {
            oracle,
            state,
            generation: AtomicU64::new(0),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> InteractionState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<InteractionState> {
        self.state.subscribe()
    }

    pub async fn submit_image(&self, data: impl Into<Bytes>, language: Language) -> Submission {
        let Some((ticket, _)) = self.begin("submit_image", InteractionState::accepts_new_analysis)
        else {
            return Submission::Ignored;
        };

        let next = match ImageUpload::from_bytes(data) {
            Ok(image) => self.analyze_image(image, language).await,
            Err(e) => self.failed(&e, language),
        };
        self.finish(ticket, next);
        Submission::Accepted
    }

    pub async fn submit_text(&self, description: &str, language: Language) -> Submission {
        let description = description.trim();
        if description.is_empty() {
            tracing::debug!("Ignoring blank food description");
            return Submission::Ignored;
        }

        let Some((ticket, _)) = self.begin("submit_text", InteractionState::accepts_new_analysis)
        else {
            return Submission::Ignored;
        };

        let request = AnalysisRequest::TextDescription {
            text: description.to_string(),
        };
        let next = match analyze(&self.oracle, language, &request).await {
            Ok(AnalysisOutcome::Complete(result)) => InteractionState::ShowingResult(result),
            // `analyze` already rejects this for text requests.
            Ok(AnalysisOutcome::NeedsClarification { .. }) => self.failed(
                &CoreError::AnalysisContract(
                    "text analysis asked for clarification".to_string(),
                ),
                language,
            ),
            Err(e) => self.failed(&e, language),
        };
        self.finish(ticket, next);
        Submission::Accepted
    }

    /// Answers the pending clarification question using the retained image.
    pub async fn submit_clarification(&self, text: &str, language: Language) -> Submission {
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!("Ignoring blank clarification");
            return Submission::Ignored;
        }

        if let Some(previous) = self.reject_unprompted_answer(language) {
            tracing::warn!(
                previous_state = previous,
                "Clarification submitted with no pending image"
            );
            return Submission::Accepted;
        }

        let Some((ticket, previous)) =
            self.begin("submit_clarification", InteractionState::accepts_clarification)
        else {
            return Submission::Ignored;
        };

        let InteractionState::AwaitingClarification { pending_image, .. } = previous else {
            self.finish(ticket, self.failed(&CoreError::MissingInput, language));
            return Submission::Accepted;
        };

        let request = AnalysisRequest::ImageWithClarification {
            image: pending_image,
            clarification: text.to_string(),
        };
        let next = match analyze(&self.oracle, language, &request).await {
            Ok(AnalysisOutcome::Complete(result)) => InteractionState::ShowingResult(result),
            Ok(AnalysisOutcome::NeedsClarification { .. }) => self.failed(
                &CoreError::AnalysisContract(
                    "clarified analysis asked for clarification".to_string(),
                ),
                language,
            ),
            Err(e) => self.failed(&e, language),
        };
        self.finish(ticket, next);
        Submission::Accepted
    }

    /// Starts a plan from a clean slate: whatever was shown is discarded.
    pub async fn request_meal_plan(&self, profile: UserProfile, language: Language) -> Submission {
        let Some((ticket, _)) = self.begin("request_meal_plan", InteractionState::accepts_meal_plan)
        else {
            return Submission::Ignored;
        };

        let next = match generate_meal_plan(&self.oracle, language, profile).await {
            Ok(plan) => InteractionState::ShowingPlan(plan),
            Err(e) => self.failed(&e, language),
        };
        self.finish(ticket, next);
        Submission::Accepted
    }

    /// Returns to `Idle` from any state and invalidates any call in flight.
    /// The abandoned call still blocks new submissions until it resolves.
    pub fn reset(&self) {
        self.state.send_if_modified(|state| {
            self.generation.fetch_add(1, Ordering::SeqCst);
            let changed = !matches!(state, InteractionState::Idle);
            *state = InteractionState::Idle;
            changed
        });
        tracing::debug!("Interaction reset");
    }

    async fn analyze_image(&self, image: ImageUpload, language: Language) -> InteractionState {
        let request = AnalysisRequest::ImageOnly {
            image: image.clone(),
        };
        match analyze(&self.oracle, language, &request).await {
            Ok(AnalysisOutcome::NeedsClarification { question }) => {
                InteractionState::AwaitingClarification {
                    question,
                    pending_image: image,
                }
            }
            Ok(AnalysisOutcome::Complete(result)) => InteractionState::ShowingResult(result),
            Err(e) => self.failed(&e, language),
        }
    }

    fn failed(&self, error: &CoreError, language: Language) -> InteractionState {
        InteractionState::Error(error_message(error, language))
    }

    /// Moves straight to `Error` when an answer arrives with no question
    /// pending, without passing through `Loading`. Returns the replaced
    /// state's name.
    fn reject_unprompted_answer(&self, language: Language) -> Option<&'static str> {
        let mut replaced = None;
        self.state.send_if_modified(|state| {
            if self.in_flight.load(Ordering::SeqCst)
                || state.is_loading()
                || state.accepts_clarification()
            {
                return false;
            }
            replaced = Some(state.name());
            *state = self.failed(&CoreError::MissingInput, language);
            true
        });
        replaced
    }

    /// Atomically checks `accepts` and moves to `Loading`, returning the new
    /// ticket and the state that was replaced.
    fn begin<F>(&self, action: &'static str, accepts: F) -> Option<(Ticket<'_>, InteractionState)>
    where
        F: FnOnce(&InteractionState) -> bool,
    {
        let mut started = None;
        let mut busy = false;
        self.state.send_if_modified(|state| {
            busy = self.in_flight.load(Ordering::SeqCst);
            if busy || !accepts(state) {
                return false;
            }
            self.in_flight.store(true, Ordering::SeqCst);
            let ticket = Ticket {
                generation: self.generation.fetch_add(1, Ordering::SeqCst) + 1,
                in_flight: &self.in_flight,
                held: true,
            };
            let previous = std::mem::replace(state, InteractionState::Loading);
            started = Some((ticket, previous));
            true
        });

        if busy {
            tracing::warn!(action, "Ignoring submission while an oracle call is in flight");
        } else if started.is_none() {
            tracing::warn!(
                action,
                state = self.state.borrow().name(),
                "Ignoring submission in current state"
            );
        }
        started
    }

    fn finish(&self, mut ticket: Ticket<'_>, next: InteractionState) -> bool {
        let next_name = next.name();
        let generation = ticket.generation;
        let applied = self.state.send_if_modified(|state| {
            ticket.release();
            if self.generation.load(Ordering::SeqCst) != generation || !state.is_loading() {
                return false;
            }
            *state = next;
            true
        });

        if applied {
            tracing::debug!(state = next_name, "Interaction state updated");
        } else {
            tracing::info!(ticket = generation, "Discarding stale completion");
        }
        applied
    }
}
