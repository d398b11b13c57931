//! Destination records as the backend serves and accepts them.

use serde::{Deserialize, Serialize};

/// A persisted travel entry. The backend assigns `id` on insert; the client
/// only ever holds a transient cached copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: i64,
    pub country: String,
    pub region: String,
    pub city: String,
    pub iso: String,
    pub text: String,
}

/// The in-progress form record. No identity until the backend accepts it;
/// doubles as the POST body of the insert endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationDraft {
    pub country: String,
    pub region: String,
    pub city: String,
    pub iso: String,
    pub text: String,
}

/// A list row as the webview renders it: the destination plus the derived
/// flag asset path. Built per snapshot, never stored.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationView {
    pub id: i64,
    pub country: String,
    pub region: String,
    pub city: String,
    pub iso: String,
    pub text: String,
    pub flag: String,
}
