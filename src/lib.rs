mod api;
mod countries;
mod events;
mod form;
mod list;
mod models;
mod settings;

use std::sync::Arc;

use api::{DestinationApi, HttpDestinationApi};
use countries::CountryDirectory;
use events::EventChannel;
use form::{
    commands::{get_form_state, select_form_country, submit_destination, update_form_field},
    FormController,
};
use list::{
    commands::{
        delete_selected_destinations, get_destinations, reload_destinations,
        toggle_destination_selected,
    },
    ListController,
};
use log::error;
use models::CountryEntry;
use settings::{ApiSettings, SettingsStore};
use tauri::{Emitter, Manager, State};

pub(crate) struct AppState {
    pub(crate) form: FormController,
    pub(crate) list: ListController,
    pub(crate) countries: Arc<CountryDirectory>,
    pub(crate) http_api: Arc<HttpDestinationApi>,
    pub(crate) settings: SettingsStore,
}

#[tauri::command]
fn get_country_options(state: State<AppState>) -> Vec<CountryEntry> {
    state.countries.entries().to_vec()
}

#[tauri::command]
fn get_flag_path(alpha2: String) -> String {
    CountryDirectory::flag_path(&alpha2)
}

#[tauri::command]
fn get_api_settings(state: State<AppState>) -> Result<ApiSettings, String> {
    Ok(state.settings.api())
}

#[tauri::command]
fn set_api_settings(
    settings: ApiSettings,
    state: State<AppState>,
    app_handle: tauri::AppHandle,
) -> Result<(), String> {
    state
        .settings
        .update_api(settings.clone())
        .map_err(|e| e.to_string())?;

    state.http_api.set_base_url(&settings.base_url);

    app_handle
        .emit("api-settings-updated", &settings)
        .map_err(|e| e.to_string())?;

    Ok(())
}

/// Administrative endpoint; not reachable from the regular page flow.
#[tauri::command]
async fn create_destination_table(state: State<'_, AppState>) -> Result<String, String> {
    state
        .http_api
        .create_table()
        .await
        .map(|ack| ack.message)
        .map_err(|e| e.to_string())
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Travelpage starting up...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let result = (|| -> anyhow::Result<()> {
                let app_data_dir = app
                    .path()
                    .app_data_dir()
                    .map_err(|err| anyhow::anyhow!(err))?;
                std::fs::create_dir_all(&app_data_dir)?;

                let settings_path = app_data_dir.join("settings.json");
                let settings_store = SettingsStore::new(settings_path)?;
                let api_settings = settings_store.api();

                let country_directory = Arc::new(CountryDirectory::bundled()?);
                let http_api = Arc::new(HttpDestinationApi::new(&api_settings.base_url)?);
                let destination_api: Arc<dyn DestinationApi> = http_api.clone();

                let channel = EventChannel::new(app.handle().clone());
                let form_controller = FormController::new(
                    destination_api.clone(),
                    country_directory.clone(),
                    channel.clone(),
                );
                let list_controller = ListController::new(destination_api, channel);

                // One read at startup fills the list; later refreshes are user-driven.
                {
                    let list_for_load = list_controller.clone();
                    tauri::async_runtime::spawn(async move {
                        if let Err(err) = list_for_load.load().await {
                            error!("Initial destination load failed: {err}");
                        }
                    });
                }

                app.manage(AppState {
                    form: form_controller,
                    list: list_controller,
                    countries: country_directory,
                    http_api,
                    settings: settings_store,
                });

                Ok(())
            })();

            result.map_err(|err| err.into())
        })
        .invoke_handler(tauri::generate_handler![
            get_country_options,
            get_flag_path,
            get_form_state,
            update_form_field,
            select_form_country,
            submit_destination,
            get_destinations,
            reload_destinations,
            toggle_destination_selected,
            delete_selected_destinations,
            get_api_settings,
            set_api_settings,
            create_destination_table,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
