//! Shared fixtures for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::Value;

use crate::api::{Backend, Endpoint, Reply, TransportError};
use crate::clinical::{
    ChestPainType, ClinicalParameters, ExerciseAngina, FastingBloodSugar, RestingEcg, Sex, StSlope,
};
use crate::forms::{FormError, Prompt};

// =========================================================================
// MockBackend
// =========================================================================

/// Replays queued outcomes and records every request it receives.
pub struct MockBackend {
    outcomes: Mutex<VecDeque<Result<Reply, TransportError>>>,
    calls: Mutex<Vec<(Endpoint, Value)>>,
}

impl MockBackend {
    pub fn new(outcomes: Vec<Result<Reply, TransportError>>) -> Self {
        Self { outcomes: Mutex::new(outcomes.into()), calls: Mutex::new(Vec::new()) }
    }

    pub fn replying(status: u16, body: &str) -> Self {
        Self::new(vec![Ok(Reply::new(status, body))])
    }

    pub fn unreachable() -> Self {
        Self::new(vec![Err(TransportError::Connect {
            url: "http://127.0.0.1:9".into(),
            message: "connection refused".into(),
        })])
    }

    pub fn calls(&self) -> Vec<(Endpoint, Value)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl Backend for MockBackend {
    async fn post(&self, endpoint: Endpoint, body: Value) -> Result<Reply, TransportError> {
        self.calls.lock().unwrap().push((endpoint, body));
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Reply::new(500, "no scripted reply")))
    }
}

// =========================================================================
// ScriptedPrompt
// =========================================================================

/// Answers prompts from a fixed script; closes when the script runs out.
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
    pub said: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self { answers: answers.iter().map(|a| (*a).to_owned()).collect(), ..Self::default() }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, label: &str) -> Result<String, FormError> {
        self.asked.push(label.to_owned());
        self.answers.pop_front().ok_or(FormError::Closed)
    }

    fn say(&mut self, text: &str) {
        self.said.push(text.to_owned());
    }
}

// =========================================================================
// Clinical fixtures
// =========================================================================

/// age=54 sex=1 cp=0 trestbps=130 chol=246 fbs=0 restecg=1 thalach=150 exang=0 oldpeak=1.0 slope=2
pub fn sample_parameters() -> ClinicalParameters {
    ClinicalParameters {
        age: 54,
        sex: Sex::Male,
        chest_pain_type: ChestPainType::TypicalAngina,
        resting_bp: 130,
        cholesterol: 246,
        fasting_blood_sugar: FastingBloodSugar::Normal,
        resting_ecg: RestingEcg::StTWaveAbnormality,
        max_heart_rate: 150,
        exercise_angina: ExerciseAngina::No,
        st_depression: 1.0,
        st_slope: StSlope::Downsloping,
    }
}

/// Answers for `collect_clinical` matching [`sample_parameters`].
pub const SAMPLE_CLINICAL_ANSWERS: [&str; 11] = ["54", "1", "0", "130", "246", "0", "1", "150", "0", "1.0", "2"];
