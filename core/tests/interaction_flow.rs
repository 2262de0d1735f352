use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use nutrilens_core::domain::{
    analysis::entities::HealthLevel,
    common::entities::{app_errors::CoreError, language::Language},
    interaction::{InteractionController, InteractionState, Submission},
    meal_plan::entities::{FastingType, Gender, Goal, PlanDuration, UserProfile},
    oracle::{
        ports::OracleClient,
        value_objects::{OracleRequest, PromptPart},
    },
};
use serde_json::json;
use tokio::sync::Notify;

const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46];

/// Plays back canned oracle answers in order and records what it was asked.
#[derive(Default)]
struct ScriptedOracle {
    responses: Mutex<VecDeque<Result<String, CoreError>>>,
    requests: Mutex<Vec<OracleRequest>>,
    gate: Option<Arc<Notify>>,
}

impl ScriptedOracle {
    fn replying(responses: Vec<serde_json::Value>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().map(|r| Ok(r.to_string())).collect()),
            ..Default::default()
        }
    }

    fn gated(self, gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..self
        }
    }

    fn requests(&self) -> Vec<OracleRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn prompt_text(&self, index: usize) -> String {
        self.requests()[index]
            .parts
            .iter()
            .filter_map(|part| match part {
                PromptPart::Text(text) => Some(text.clone()),
                PromptPart::InlineImage(_) => None,
            })
            .collect()
    }
}

impl OracleClient for ScriptedOracle {
    async fn submit(&self, request: OracleRequest) -> Result<String, CoreError> {
        self.requests.lock().unwrap().push(request);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CoreError::Transport("script exhausted".to_string())))
    }
}

fn full_analysis() -> serde_json::Value {
    json!({
        "needsClarification": false,
        "totalCalories": 450,
        "healthLevel": "Healthy",
        "ingredients": [
            { "name": "Grilled chicken", "calories": 250, "nutrients": [{ "name": "Protein", "amount": "35g" }] },
            { "name": "Rice", "calories": 200 }
        ],
        "recommendation": "Add some vegetables.",
        "healthyAlternatives": [{ "name": "Brown rice", "description": "More fibre." }]
    })
}

fn profile(goal: Goal) -> UserProfile {
    UserProfile {
        goal,
        gender: Gender::Female,
        age: 34,
        weight: Some("62".to_string()),
        height: Some("168".to_string()),
        restrictions: String::new(),
        dislikes: "mushrooms".to_string(),
        plan_duration: PlanDuration::Week,
        fasting_type: Some(FastingType::SixteenEight),
    }
}

fn fasting_plan() -> serde_json::Value {
    json!({
        "title": "16:8 plan",
        "summary": "A week of eating between 12:00 and 20:00.",
        "plan": [{
            "day": "Day 1",
            "meals": [
                { "type": "Break Fast", "name": "Omelette", "description": "Two eggs and spinach.", "calories": 320 },
                { "type": "Dinner", "name": "Salmon", "description": "With quinoa." }
            ]
        }],
        "fastingProtocol": "Fast from 20:00 to 12:00.",
        "fastingRecommendations": "Drink water during the fast.",
        "supplements": ["Electrolytes"]
    })
}

#[tokio::test]
async fn test_clarification_round_trip_reuses_the_original_image() {
    let controller = InteractionController::new(ScriptedOracle::replying(vec![
        json!({ "needsClarification": true, "clarificationQuestion": "What dish is this?" }),
        full_analysis(),
    ]));

    let submission = controller.submit_image(JPEG, Language::En).await;
    assert_eq!(submission, Submission::Accepted);
    match controller.state() {
        InteractionState::AwaitingClarification {
            question,
            pending_image,
        } => {
            assert_eq!(question, "What dish is this?");
            assert_eq!(pending_image.data.as_ref(), JPEG);
        }
        other => panic!("unexpected state: {other:?}"),
    }

    controller
        .submit_clarification("it's grilled chicken with rice", Language::En)
        .await;

    match controller.state() {
        InteractionState::ShowingResult(result) => {
            assert_eq!(result.total_calories, Some(450));
            assert_eq!(result.health_level, Some(HealthLevel::Healthy));
            assert_eq!(result.ingredients.map(|i| i.len()), Some(2));
        }
        other => panic!("unexpected state: {other:?}"),
    }
    assert!(controller.state().pending_image().is_none());

    let requests = controller.oracle().requests();
    assert_eq!(requests.len(), 2);
    match &requests[1].parts[0] {
        PromptPart::InlineImage(image) => assert_eq!(image.data.as_ref(), JPEG),
        other => panic!("expected the retained image first, got {other:?}"),
    }
    assert!(controller.oracle().prompt_text(1).contains("it's grilled chicken with rice"));
}

#[tokio::test]
async fn test_text_analysis_asking_for_clarification_is_an_error() {
    let controller = InteractionController::new(ScriptedOracle::replying(vec![json!({
        "needsClarification": true,
        "clarificationQuestion": "Which cake?"
    })]));

    controller
        .submit_text("a chocolate cake slice", Language::En)
        .await;

    assert!(matches!(controller.state(), InteractionState::Error(_)));
}

#[tokio::test]
async fn test_clarified_analysis_without_calories_is_an_error() {
    let controller = InteractionController::new(ScriptedOracle::replying(vec![
        json!({ "needsClarification": true, "clarificationQuestion": "What dish is this?" }),
        json!({ "needsClarification": false, "healthLevel": "Moderado", "ingredients": [] }),
    ]));

    controller.submit_image(JPEG, Language::Es).await;
    controller.submit_clarification("lentejas", Language::Es).await;

    assert!(matches!(controller.state(), InteractionState::Error(_)));
    assert!(controller.state().pending_image().is_none());
}

#[tokio::test]
async fn test_awaiting_clarification_only_takes_an_answer() {
    let controller = InteractionController::new(ScriptedOracle::replying(vec![json!({
        "needsClarification": true,
        "clarificationQuestion": "What dish is this?"
    })]));
    controller.submit_image(JPEG, Language::En).await;

    assert_eq!(
        controller.submit_image(JPEG, Language::En).await,
        Submission::Ignored
    );
    assert_eq!(
        controller.submit_text("soup", Language::En).await,
        Submission::Ignored
    );
    assert_eq!(
        controller
            .request_meal_plan(profile(Goal::LoseWeight), Language::En)
            .await,
        Submission::Ignored
    );
    assert!(matches!(
        controller.state(),
        InteractionState::AwaitingClarification { .. }
    ));
    assert_eq!(controller.oracle().requests().len(), 1);
}

#[tokio::test]
async fn test_reset_from_every_state_is_idle() {
    let controller = InteractionController::new(ScriptedOracle::replying(vec![
        json!({ "needsClarification": true, "clarificationQuestion": "What dish is this?" }),
        full_analysis(),
        fasting_plan(),
    ]));

    controller.reset();
    assert_eq!(controller.state(), InteractionState::Idle);

    controller.submit_image(JPEG, Language::En).await;
    controller.reset();
    assert_eq!(controller.state(), InteractionState::Idle);

    controller.submit_text("a bowl of rice", Language::En).await;
    assert!(matches!(controller.state(), InteractionState::ShowingResult(_)));
    controller.reset();
    controller.reset();
    assert_eq!(controller.state(), InteractionState::Idle);

    controller
        .request_meal_plan(profile(Goal::IntermittentFasting), Language::En)
        .await;
    assert!(matches!(controller.state(), InteractionState::ShowingPlan(_)));
    controller.reset();
    assert_eq!(controller.state(), InteractionState::Idle);

    // Script is exhausted, so this lands in Error.
    controller.submit_text("a bowl of rice", Language::En).await;
    assert!(matches!(controller.state(), InteractionState::Error(_)));
    controller.reset();
    assert_eq!(controller.state(), InteractionState::Idle);
}

#[tokio::test]
async fn test_fasting_meal_plan_prompt_and_result() {
    let controller = InteractionController::new(ScriptedOracle::replying(vec![fasting_plan()]));

    let submission = controller
        .request_meal_plan(profile(Goal::IntermittentFasting), Language::En)
        .await;
    assert_eq!(submission, Submission::Accepted);

    let prompt = controller.oracle().prompt_text(0);
    assert!(prompt.contains("16:8"));
    assert!(prompt.contains("Intermittent fasting instructions"));

    match controller.state() {
        InteractionState::ShowingPlan(plan) => {
            assert_eq!(plan.title, "16:8 plan");
            assert_eq!(plan.total_meals(), 2);
            assert!(plan.has_fasting_details());
        }
        other => panic!("unexpected state: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_fasting_meal_plan_prompt_has_no_fasting_block() {
    let controller = InteractionController::new(ScriptedOracle::replying(vec![fasting_plan()]));

    controller
        .request_meal_plan(profile(Goal::LoseWeight), Language::En)
        .await;

    let prompt = controller.oracle().prompt_text(0);
    assert!(!prompt.contains("Intermittent fasting instructions"));
    match controller.state() {
        InteractionState::ShowingPlan(plan) => assert!(!plan.has_fasting_details()),
        other => panic!("unexpected state: {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_profile_never_reaches_the_oracle() {
    let controller = InteractionController::new(ScriptedOracle::default());
    let mut invalid = profile(Goal::GainMuscle);
    invalid.age = 0;

    controller.request_meal_plan(invalid, Language::Es).await;

    assert!(matches!(controller.state(), InteractionState::Error(_)));
    assert!(controller.oracle().requests().is_empty());
}

#[tokio::test]
async fn test_meal_plan_replaces_a_shown_result() {
    let controller = InteractionController::new(ScriptedOracle::replying(vec![
        full_analysis(),
        fasting_plan(),
    ]));

    controller.submit_text("chicken and rice", Language::En).await;
    assert!(matches!(controller.state(), InteractionState::ShowingResult(_)));

    controller
        .request_meal_plan(profile(Goal::IntermittentFasting), Language::En)
        .await;
    assert!(matches!(controller.state(), InteractionState::ShowingPlan(_)));
}

#[tokio::test]
async fn test_submissions_are_ignored_while_loading() {
    let gate = Arc::new(Notify::new());
    let controller = Arc::new(InteractionController::new(
        ScriptedOracle::replying(vec![full_analysis()]).gated(gate.clone()),
    ));
    let mut states = controller.subscribe();

    let task = tokio::spawn({
        let controller = controller.clone();
        async move { controller.submit_text("chicken and rice", Language::En).await }
    });
    states.wait_for(|state| state.is_loading()).await.unwrap();

    assert_eq!(
        controller.submit_image(JPEG, Language::En).await,
        Submission::Ignored
    );
    assert_eq!(
        controller.submit_clarification("rice", Language::En).await,
        Submission::Ignored
    );
    assert_eq!(
        controller
            .request_meal_plan(profile(Goal::LoseWeight), Language::En)
            .await,
        Submission::Ignored
    );

    gate.notify_one();
    assert_eq!(task.await.unwrap(), Submission::Accepted);
    assert!(matches!(controller.state(), InteractionState::ShowingResult(_)));
    assert_eq!(controller.oracle().requests().len(), 1);
}

#[tokio::test]
async fn test_reset_discards_the_in_flight_answer() {
    let gate = Arc::new(Notify::new());
    let controller = Arc::new(InteractionController::new(
        ScriptedOracle::replying(vec![full_analysis()]).gated(gate.clone()),
    ));
    let mut states = controller.subscribe();

    let task = tokio::spawn({
        let controller = controller.clone();
        async move { controller.submit_text("chicken and rice", Language::En).await }
    });
    states.wait_for(|state| state.is_loading()).await.unwrap();

    controller.reset();
    gate.notify_one();
    task.await.unwrap();

    assert_eq!(controller.state(), InteractionState::Idle);
}

#[tokio::test]
async fn test_reset_does_not_admit_a_second_concurrent_call() {
    let gate = Arc::new(Notify::new());
    let controller = Arc::new(InteractionController::new(
        ScriptedOracle::replying(vec![full_analysis(), full_analysis()]).gated(gate.clone()),
    ));
    let mut states = controller.subscribe();

    let task = tokio::spawn({
        let controller = controller.clone();
        async move { controller.submit_text("chicken and rice", Language::En).await }
    });
    states.wait_for(|state| state.is_loading()).await.unwrap();

    controller.reset();
    assert_eq!(controller.state(), InteractionState::Idle);
    assert_eq!(
        controller.submit_text("a salad", Language::En).await,
        Submission::Ignored
    );
    assert_eq!(
        controller
            .request_meal_plan(profile(Goal::GeneralHealth), Language::En)
            .await,
        Submission::Ignored
    );
    assert_eq!(controller.oracle().requests().len(), 1);

    gate.notify_one();
    assert_eq!(task.await.unwrap(), Submission::Accepted);
    assert_eq!(controller.state(), InteractionState::Idle);

    gate.notify_one();
    assert_eq!(
        controller.submit_text("a salad", Language::En).await,
        Submission::Accepted
    );
    assert!(matches!(controller.state(), InteractionState::ShowingResult(_)));
    assert_eq!(controller.oracle().requests().len(), 2);
}
