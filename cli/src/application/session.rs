use std::{future::Future, path::Path, time::Instant};

use anyhow::Context;
use nutrilens_core::domain::{
    common::entities::language::Language,
    interaction::{InteractionController, InteractionState, Submission},
    meal_plan::entities::UserProfile,
    oracle::ports::OracleClient,
    tips::services::TipRotator,
};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines},
    sync::watch,
};

use crate::application::{
    commands::{Command, help_text},
    profile_form::{Field, ProfileForm},
    render::render,
};

struct SessionText {
    prompt: &'static str,
    busy: &'static str,
    loading: &'static str,
    nothing_to_save: &'static str,
    saved: &'static str,
    plan_intro: &'static str,
}

const ES: SessionText = SessionText {
    prompt: "> ",
    busy: "Ese comando no está disponible ahora.",
    loading: "Analizando...",
    nothing_to_save: "No hay ningún resultado ni plan que guardar.",
    saved: "Guardado en",
    plan_intro: "Crea tu plan de comidas. Pulsa Enter para aceptar el valor entre corchetes.",
};

const EN: SessionText = SessionText {
    prompt: "> ",
    busy: "That command is not available right now.",
    loading: "Analyzing...",
    nothing_to_save: "There is no result or plan to save.",
    saved: "Saved to",
    plan_intro: "Build your meal plan. Press Enter to accept the value in brackets.",
};

fn text(language: Language) -> &'static SessionText {
    match language {
        Language::Es => &ES,
        Language::En => &EN,
    }
}

/// Line-oriented front-end over an [`InteractionController`].
pub struct Session<O, R, W>
where
    O: OracleClient,
{
    controller: InteractionController<O>,
    language: Language,
    tips: TipRotator,
    input: Lines<R>,
    output: W,
}

impl<O, R, W> Session<O, R, W>
where
    O: OracleClient,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(controller: InteractionController<O>, language: Language, input: R, output: W) -> Self {
        Self {
            controller,
            language,
            tips: TipRotator::new(language, Instant::now()),
            input: input.lines(),
            output,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        self.show_state().await?;

        loop {
            self.write(text(self.language).prompt).await?;
            let Some(line) = self.input.next_line().await? else {
                break;
            };

            match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.dispatch(command).await?,
                Err(e) => self.writeln(&e.to_string()).await?,
            }
        }

        tracing::info!("Session finished");
        Ok(())
    }

    async fn dispatch(&mut self, command: Command) -> anyhow::Result<()> {
        let language = self.language;
        let submission = match command {
            Command::Empty | Command::Quit => return Ok(()),
            Command::Help => return self.writeln(help_text(language)).await,
            Command::Tip => {
                let tip = self.tips.advance();
                return self.writeln(tip).await;
            }
            Command::Lang(language) => {
                self.language = language;
                self.tips.set_language(language, Instant::now());
                return self.show_state().await;
            }
            Command::Reset => {
                self.controller.reset();
                return self.show_state().await;
            }
            Command::Save(path) => return self.save(&path).await,
            Command::Image(path) => {
                let bytes = match tokio::fs::read(&path).await {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        tracing::warn!(path = %path.display(), "Could not read image: {}", e);
                        return self.writeln(&format!("{}: {}", path.display(), e)).await;
                    }
                };
                let call = self.controller.submit_image(bytes, language);
                drive(call, self.controller.subscribe(), &mut self.output, language).await?
            }
            Command::Text(description) => {
                let call = self.controller.submit_text(&description, language);
                drive(call, self.controller.subscribe(), &mut self.output, language).await?
            }
            Command::Answer(answer) => {
                let call = self.controller.submit_clarification(&answer, language);
                drive(call, self.controller.subscribe(), &mut self.output, language).await?
            }
            Command::Plan => {
                if matches!(
                    self.controller.state(),
                    InteractionState::Loading | InteractionState::AwaitingClarification { .. }
                ) {
                    Submission::Ignored
                } else {
                    let Some(profile) = self.ask_profile().await? else {
                        return Ok(());
                    };
                    let call = self.controller.request_meal_plan(profile, language);
                    drive(call, self.controller.subscribe(), &mut self.output, language).await?
                }
            }
        };

        match submission {
            Submission::Accepted => self.show_state().await,
            Submission::Ignored => self.writeln(text(language).busy).await,
        }
    }

    /// Walks the questionnaire. `None` when input ends midway.
    async fn ask_profile(&mut self) -> anyhow::Result<Option<UserProfile>> {
        let language = self.language;
        self.writeln(text(language).plan_intro).await?;

        let mut form = ProfileForm::default();
        let mut index = 0;
        while let Some(field) = form.fields().get(index).copied() {
            self.write(&form.prompt(field, language)).await?;
            let Some(answer) = self.input.next_line().await? else {
                return Ok(None);
            };

            match form.apply(field, &answer) {
                Ok(()) => index += 1,
                Err(e) => {
                    self.writeln(&e).await?;
                    continue;
                }
            }

            if field == Field::Height {
                if let Some(bmi) = form.bmi_line(language) {
                    self.writeln(&bmi).await?;
                }
            }
        }

        Ok(Some(form.into_profile()))
    }

    async fn save(&mut self, path: &Path) -> anyhow::Result<()> {
        let t = text(self.language);
        let json = match self.controller.state() {
            InteractionState::ShowingResult(result) => serde_json::to_string_pretty(&result)?,
            InteractionState::ShowingPlan(plan) => serde_json::to_string_pretty(&plan)?,
            _ => return self.writeln(t.nothing_to_save).await,
        };

        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "Saved current view");
        self.writeln(&format!("{} {}", t.saved, path.display())).await
    }

    async fn show_state(&mut self) -> anyhow::Result<()> {
        let tip = self.tips.poll(Instant::now());
        let view = render(&self.controller.state(), self.language, tip);
        self.writeln(&view).await
    }

    async fn write(&mut self, text: &str) -> anyhow::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }

    async fn writeln(&mut self, text: &str) -> anyhow::Result<()> {
        self.write(&format!("{text}\n")).await
    }
}

/// Awaits a controller call, printing the loading line once it starts.
async fn drive<F, W>(
    call: F,
    mut states: watch::Receiver<InteractionState>,
    output: &mut W,
    language: Language,
) -> anyhow::Result<Submission>
where
    F: Future<Output = Submission>,
    W: AsyncWrite + Unpin,
{
    tokio::pin!(call);
    loop {
        tokio::select! {
            submission = &mut call => return Ok(submission),
            changed = states.changed() => {
                if changed.is_err() {
                    break;
                }
                let loading = states.borrow_and_update().is_loading();
                if loading {
                    output
                        .write_all(format!("{}\n", text(language).loading).as_bytes())
                        .await?;
                    output.flush().await?;
                }
            }
        }
    }
    Ok(call.await)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use nutrilens_core::domain::{
        common::entities::app_errors::CoreError,
        oracle::value_objects::{OracleRequest, PromptPart},
    };

    use super::*;

    struct CannedOracle {
        response: String,
        prompts: Mutex<Vec<String>>,
    }

    impl CannedOracle {
        fn new(response: serde_json::Value) -> Self {
            Self {
                response: response.to_string(),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    impl OracleClient for CannedOracle {
        async fn submit(&self, request: OracleRequest) -> Result<String, CoreError> {
            let prompt = request
                .parts
                .iter()
                .filter_map(|part| match part {
                    PromptPart::Text(text) => Some(text.as_str()),
                    PromptPart::InlineImage(_) => None,
                })
                .collect::<String>();
            self.prompts.lock().unwrap().push(prompt);
            Ok(self.response.clone())
        }
    }

    async fn run_session(oracle: CannedOracle, script: &str) -> String {
        let mut output = Vec::new();
        let controller = InteractionController::new(oracle);
        Session::new(controller, Language::En, script.as_bytes(), &mut output)
            .run()
            .await
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn test_text_analysis_is_rendered() {
        let oracle = CannedOracle::new(serde_json::json!({
            "needsClarification": false,
            "totalCalories": 450,
            "healthLevel": "Saludable",
            "ingredients": [{ "name": "Rice", "calories": 200 }]
        }));

        let output = run_session(oracle, "text chicken and rice\nquit\n").await;

        assert!(output.contains("Health tip:"));
        assert!(output.contains("Total calories: 450 kcal"));
    }

    #[tokio::test]
    async fn test_answer_without_question_reports_missing_image() {
        let oracle = CannedOracle::new(serde_json::json!({}));

        let output = run_session(oracle, "answer rice\n").await;

        assert!(output.contains("Image not found. Please upload it again."));
        assert!(!output.contains("Analyzing..."));
    }

    #[tokio::test]
    async fn test_plan_questionnaire_with_defaults() {
        let oracle = CannedOracle::new(serde_json::json!({
            "title": "Balanced week",
            "summary": "",
            "plan": [{ "day": "Monday", "meals": [{ "type": "Lunch", "name": "Lentils", "description": "" }] }]
        }));

        // Goal, duration, gender, age, weight, height, restrictions, dislikes.
        let output = run_session(oracle, "plan\n\n\n\n\n70\n175\n\n\n").await;

        assert!(output.contains("BMI: 22.9 (Normal)"));
        assert!(output.contains("BALANCED WEEK"));
        assert!(output.contains("[Lunch] Lentils"));
    }

    #[tokio::test]
    async fn test_unknown_command_and_missing_file() {
        let oracle = CannedOracle::new(serde_json::json!({}));

        let output = run_session(oracle, "dance\nimage /nonexistent/meal.jpg\nsave out.json\n").await;

        assert!(output.contains("unknown command: dance"));
        assert!(output.contains("/nonexistent/meal.jpg"));
        assert!(output.contains("There is no result or plan to save."));
    }
}
