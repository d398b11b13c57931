use tauri::State;

use crate::AppState;

use super::{FormField, FormState};

#[tauri::command]
pub async fn get_form_state(state: State<'_, AppState>) -> Result<FormState, String> {
    Ok(state.form.get_state().await)
}

#[tauri::command]
pub async fn update_form_field(
    state: State<'_, AppState>,
    field: FormField,
    value: String,
) -> Result<FormState, String> {
    Ok(state.form.update_field(field, value).await)
}

#[tauri::command]
pub async fn select_form_country(
    state: State<'_, AppState>,
    alpha2: String,
) -> Result<FormState, String> {
    Ok(state.form.select_country(&alpha2).await)
}

#[tauri::command]
pub async fn submit_destination(state: State<'_, AppState>) -> Result<String, String> {
    state.form.submit().await.map_err(|e| e.to_string())
}
