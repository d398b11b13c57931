use std::sync::Arc;

use anyhow::Result;
use log::error;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::{api::DestinationApi, countries::CountryDirectory, events::EventChannel};

use super::{FormField, FormState};

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
struct FormStateChangedEvent {
    state: FormState,
}

#[derive(Clone)]
pub struct FormController {
    state: Arc<Mutex<FormState>>,
    api: Arc<dyn DestinationApi>,
    countries: Arc<CountryDirectory>,
    events: EventChannel,
}

impl FormController {
    pub fn new(
        api: Arc<dyn DestinationApi>,
        countries: Arc<CountryDirectory>,
        events: EventChannel,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(FormState::new())),
            api,
            countries,
            events,
        }
    }

    pub async fn get_state(&self) -> FormState {
        self.state.lock().await.clone()
    }

    pub async fn update_field(&self, field: FormField, value: String) -> FormState {
        let snapshot = {
            let mut state = self.state.lock().await;
            state.update_field(field, value);
            state.clone()
        };
        self.emit_state(&snapshot);
        snapshot
    }

    pub async fn select_country(&self, alpha2: &str) -> FormState {
        let entry = self.countries.lookup(alpha2);
        let snapshot = {
            let mut state = self.state.lock().await;
            state.select_country(entry);
            state.clone()
        };
        self.emit_state(&snapshot);
        snapshot
    }

    /// Sends the current draft to the insert endpoint. The draft survives
    /// either way; a reload is what makes the new entry visible in the list.
    pub async fn submit(&self) -> Result<String> {
        let draft = self.state.lock().await.draft.clone();

        match self.api.insert_destination(&draft).await {
            Ok(ack) => {
                let snapshot = {
                    let mut state = self.state.lock().await;
                    state.message = Some(ack.message.clone());
                    state.last_error = None;
                    state.clone()
                };
                self.emit_state(&snapshot);
                Ok(ack.message)
            }
            Err(err) => {
                error!("Failed to insert destination: {err}");
                let snapshot = {
                    let mut state = self.state.lock().await;
                    state.last_error = Some(err.to_string());
                    state.clone()
                };
                self.emit_state(&snapshot);
                Err(err.into())
            }
        }
    }

    fn emit_state(&self, state: &FormState) {
        self.events.emit(
            "form-state-changed",
            FormStateChangedEvent {
                state: state.clone(),
            },
        );
    }
}
