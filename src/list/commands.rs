use tauri::State;

use crate::AppState;

use super::ListSnapshot;

#[tauri::command]
pub async fn get_destinations(state: State<'_, AppState>) -> Result<ListSnapshot, String> {
    Ok(state.list.get_snapshot().await)
}

#[tauri::command]
pub async fn reload_destinations(state: State<'_, AppState>) -> Result<ListSnapshot, String> {
    state.list.load().await.map_err(|e| e.to_string())?;
    Ok(state.list.get_snapshot().await)
}

#[tauri::command]
pub async fn toggle_destination_selected(
    state: State<'_, AppState>,
    id: i64,
) -> Result<ListSnapshot, String> {
    Ok(state.list.toggle_select(id).await)
}

#[tauri::command]
pub async fn delete_selected_destinations(state: State<'_, AppState>) -> Result<usize, String> {
    state.list.delete_selected().await.map_err(|e| e.to_string())
}
