use serde::{Deserialize, Serialize};

use crate::models::{CountryEntry, DestinationDraft};

/// Form fields addressable from keystroke events.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Country,
    Region,
    City,
    Iso,
    Text,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub draft: DestinationDraft,
    /// Message from the last successful insert. Failures never touch it.
    pub message: Option<String>,
    pub last_error: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a single named field on the draft. No validation.
    pub fn update_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Country => self.draft.country = value,
            FormField::Region => self.draft.region = value,
            FormField::City => self.draft.city = value,
            FormField::Iso => self.draft.iso = value,
            FormField::Text => self.draft.text = value,
        }
    }

    /// Applies a dropdown selection: display name and code move together.
    /// An unresolved code leaves the draft exactly as it was, never a
    /// partial name/code overwrite.
    pub fn select_country(&mut self, entry: Option<&CountryEntry>) -> bool {
        match entry {
            Some(entry) => {
                self.draft.country = entry.name.clone();
                self.draft.iso = entry.alpha2.clone();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_field_targets_one_field() {
        let mut state = FormState::new();

        state.update_field(FormField::Region, "Cusco".into());
        state.update_field(FormField::City, "Pisac".into());
        state.update_field(FormField::Text, "Valle Sagrado".into());

        assert_eq!(state.draft.region, "Cusco");
        assert_eq!(state.draft.city, "Pisac");
        assert_eq!(state.draft.text, "Valle Sagrado");
        assert_eq!(state.draft.country, "");
        assert_eq!(state.draft.iso, "");
    }

    #[test]
    fn select_country_sets_name_and_code_together() {
        let mut state = FormState::new();
        let entry = CountryEntry {
            name: "Peru".into(),
            alpha2: "PE".into(),
        };

        assert!(state.select_country(Some(&entry)));
        assert_eq!(state.draft.country, "Peru");
        assert_eq!(state.draft.iso, "PE");
    }

    #[test]
    fn unresolved_selection_leaves_draft_untouched() {
        let mut state = FormState::new();
        let entry = CountryEntry {
            name: "Chile".into(),
            alpha2: "CL".into(),
        };
        state.select_country(Some(&entry));
        state.update_field(FormField::Region, "Atacama".into());
        let before = state.draft.clone();

        assert!(!state.select_country(None));
        assert_eq!(state.draft, before);
    }

    #[test]
    fn field_names_deserialize_from_ui_strings() {
        let field: FormField = serde_json::from_str("\"country\"").unwrap();
        assert_eq!(field, FormField::Country);
        let field: FormField = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(field, FormField::Text);
    }
}
