#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use sous_core::config::ApiConfig;
use sous_core::{AlertSink, Narrator, Notice, Notifier, SequencerEffects};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const MODEL: &str = "test-model";
pub const API_KEY: &str = "test-key";

/// Side effects observed during a cooking session, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Speak(String),
    Cancel,
    Alert,
    Notice(Notice),
}

/// Narrator, alert and notifier that only record what they were asked to do.
#[derive(Default)]
pub struct EffectLog {
    effects: Mutex<Vec<Effect>>,
}

impl EffectLog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn effects(&self) -> Vec<Effect> {
        self.effects.lock().unwrap().clone()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.effects()
            .into_iter()
            .filter_map(|e| match e {
                Effect::Notice(notice) => Some(notice),
                _ => None,
            })
            .collect()
    }

    pub fn spoken(&self) -> Vec<String> {
        self.effects()
            .into_iter()
            .filter_map(|e| match e {
                Effect::Speak(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn alerts(&self) -> usize {
        self.effects()
            .iter()
            .filter(|e| matches!(e, Effect::Alert))
            .count()
    }

    pub fn clear(&self) {
        self.effects.lock().unwrap().clear();
    }

    fn push(&self, effect: Effect) {
        self.effects.lock().unwrap().push(effect);
    }
}

impl Narrator for EffectLog {
    fn speak(&self, text: &str) {
        self.push(Effect::Speak(text.to_string()));
    }

    fn cancel(&self) {
        self.push(Effect::Cancel);
    }
}

impl AlertSink for EffectLog {
    fn play_alert(&self) {
        self.push(Effect::Alert);
    }
}

impl Notifier for EffectLog {
    fn notify(&self, notice: Notice) {
        self.push(Effect::Notice(notice));
    }
}

/// Sequencer effects all routed into `log`.
pub fn effects(log: &Arc<EffectLog>) -> SequencerEffects {
    SequencerEffects::new(log.clone(), log.clone(), log.clone())
}

/// A recipe as the endpoint would generate it.
pub fn recipe_json() -> Value {
    json!({
        "title": "Lemon Garlic Pasta",
        "description": "Bright weeknight pasta",
        "ingredients": [
            {"name": "spaghetti", "amount": "200", "unit": "g"},
            {"name": "garlic", "amount": "3", "unit": "cloves"},
            {"name": "lemon", "amount": "1", "unit": "", "optional": false}
        ],
        "steps": [
            {"id": 1, "instruction": "Boil the pasta", "duration": 600},
            {"id": 2, "instruction": "Fry the garlic"},
            {"id": 3, "instruction": "Toss with lemon", "duration": 60}
        ],
        "prepTime": 5,
        "cookTime": 15,
        "servings": 2,
        "cuisine": "Italian",
        "difficulty": "easy",
        "tags": ["pasta", "quick"],
        "nutritionFacts": {"calories": 450, "protein": 14, "carbs": 70, "fats": 12}
    })
}

/// The endpoint's envelope around generated text.
pub fn envelope(text: &str) -> Value {
    json!({
        "candidates": [{"content": {"parts": [{"text": text}], "role": "model"}}]
    })
}

/// Starts a mock endpoint answering every generate call with `response`.
pub async fn mock_endpoint(response: ResponseTemplate) -> (MockServer, ApiConfig) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/v1/models/{MODEL}:generateContent")))
        .and(query_param("key", API_KEY))
        .respond_with(response)
        .mount(&server)
        .await;
    let config = ApiConfig {
        endpoint: format!("{}/v1", server.uri()),
        model: MODEL.to_string(),
        api_key: Some(API_KEY.to_string()),
        timeout_secs: 5,
    };
    (server, config)
}
