//! Form state machine: idle → submitting → idle on both outcomes.

use contracts::domain::qa::QaRecord;
use contracts::StoreError;
use leptos::prelude::*;

use crate::domain::qa::api::RecordStore;

/// ViewModel for the add-record form.
///
/// `draft` is only mutated through the field transitions below; `saving`
/// mirrors the submitting state (form disabled, spinner shown).
#[derive(Clone, Copy)]
pub struct QaFormViewModel {
    pub draft: RwSignal<QaRecord>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl QaFormViewModel {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(QaRecord::draft()),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Category edit routes through the aggregate transition so the
    /// language is reset to the first allowed sub-language.
    pub fn set_category(&self, name: String) {
        self.draft.update(|d| d.set_category(&name));
    }

    pub fn set_language(&self, language: String) {
        self.draft.update(|d| d.language = language);
    }

    pub fn set_question(&self, question: String) {
        self.draft.update(|d| d.question = question);
    }

    pub fn set_explanation(&self, markup: String) {
        self.draft.update(|d| d.explanation = markup);
    }

    pub fn set_usecase(&self, markup: String) {
        self.draft.update(|d| d.usecase = markup);
    }

    pub fn set_example_code(&self, code: String) {
        self.draft.update(|d| d.example_code = code);
    }

    pub fn set_output(&self, output: String) {
        self.draft.update(|d| d.output = output);
    }

    pub fn set_summary(&self, markup: String) {
        self.draft.update(|d| d.summary = markup);
    }

    /// Reset to the all-default draft (successful save, logout).
    pub fn reset(&self) {
        self.draft.set(QaRecord::draft());
        self.error.set(None);
    }

    /// Submit the draft.
    ///
    /// A blank question fails immediately with a visible validation message
    /// and no network traffic. Otherwise the create call runs with
    /// `saving` held true; success resets the form to defaults, failure
    /// keeps the entered values so the user can retry.
    pub async fn submit(&self, store: &impl RecordStore) -> Result<QaRecord, StoreError> {
        let current = self.draft.get_untracked();
        if let Err(e) = current.validate() {
            self.error.set(Some(e.to_string()));
            return Err(e);
        }

        self.saving.set(true);
        self.error.set(None);
        let result = store.create(&current).await;
        self.saving.set(false);

        match result {
            Ok(saved) => {
                self.reset();
                Ok(saved)
            }
            Err(e) => {
                self.error.set(Some(format!("Failed to save: {}", e)));
                Err(e)
            }
        }
    }
}

impl Default for QaFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}
