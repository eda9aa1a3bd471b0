//! Contact form state machine.
//!
//! [`LeadForm`] owns the four field values and the [`SubmissionState`].
//! A submission is split in two halves around the network call:
//! [`LeadForm::begin_submit`] hands out the record plus a ticket, and
//! [`LeadForm::finish_submit`] applies the store's answer for that ticket.
//! Banner resets carry the same ticket, so a timer left over from an
//! earlier submission can never touch a newer one.

use crate::services::LeadStore;
use crate::types::{FormField, LeadSubmission, StoreResult, SubmissionState};

/// Record snapshot taken when a submission starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSubmission {
    pub record: LeadSubmission,
    pub ticket: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadForm {
    fields: LeadSubmission,
    state: SubmissionState,
    ticket: u64,
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.fields.name,
            FormField::Email => &self.fields.email,
            FormField::Phone => &self.fields.phone,
            FormField::Message => &self.fields.message,
        }
    }

    /// Plain assignment; format checks are left to the browser.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.fields.name,
            FormField::Email => &mut self.fields.email,
            FormField::Phone => &mut self.fields.phone,
            FormField::Message => &mut self.fields.message,
        };
        *slot = value.into();
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Start a submission.
    ///
    /// Returns `None` while another submission is in flight. Any visible
    /// banner is dropped and outstanding reset tickets become stale.
    pub fn begin_submit(&mut self) -> Option<PendingSubmission> {
        if self.is_submitting() {
            return None;
        }

        self.ticket += 1;
        self.state = SubmissionState::Submitting;

        Some(PendingSubmission {
            record: self.fields.clone(),
            ticket: self.ticket,
        })
    }

    /// Apply the store's answer for `ticket`.
    ///
    /// On success the fields are cleared; on failure they are kept so the
    /// visitor can retry. Returns `true` when the outcome was applied and a
    /// banner reset should be scheduled.
    pub fn finish_submit(&mut self, ticket: u64, outcome: StoreResult<()>) -> bool {
        if !self.is_submitting() || ticket != self.ticket {
            return false;
        }

        match outcome {
            Ok(()) => {
                log::info!("✅ Contact request stored");
                self.state = SubmissionState::Succeeded;
                self.fields = LeadSubmission::default();
            }
            Err(e) => {
                log::error!("❌ Contact request failed: {}", e);
                self.state = SubmissionState::Failed;
            }
        }

        true
    }

    /// Hide the banner shown for `ticket`.
    ///
    /// Ignored if a newer submission has started since.
    pub fn reset_banner(&mut self, ticket: u64) -> bool {
        let finished = matches!(self.state, SubmissionState::Succeeded | SubmissionState::Failed);
        if finished && ticket == self.ticket {
            self.state = SubmissionState::Idle;
            true
        } else {
            false
        }
    }

    /// Run a whole submission against `store`.
    ///
    /// Returns the ticket to reset the banner with, or `None` if a
    /// submission was already in flight.
    pub async fn submit<S: LeadStore + ?Sized>(&mut self, store: &S) -> Option<u64> {
        let pending = self.begin_submit()?;
        let outcome = store.insert(std::slice::from_ref(&pending.record)).await;
        self.finish_submit(pending.ticket, outcome).then_some(pending.ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StoreError;
    use futures::executor::block_on;
    use futures::future::LocalBoxFuture;
    use std::cell::RefCell;

    /// In-memory store recording every batch it receives.
    #[derive(Default)]
    struct RecordingStore {
        batches: RefCell<Vec<Vec<LeadSubmission>>>,
        fail: bool,
    }

    impl RecordingStore {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }
    }

    impl LeadStore for RecordingStore {
        fn insert<'a>(&'a self, records: &'a [LeadSubmission]) -> LocalBoxFuture<'a, StoreResult<()>> {
            self.batches.borrow_mut().push(records.to_vec());
            let fail = self.fail;
            Box::pin(async move {
                if fail {
                    Err(StoreError::Network("connection reset".into()))
                } else {
                    Ok(())
                }
            })
        }
    }

    fn filled_form() -> LeadForm {
        let mut form = LeadForm::new();
        form.update_field(FormField::Name, "Kovács Anna");
        form.update_field(FormField::Email, "anna@example.com");
        form.update_field(FormField::Phone, "+36201234567");
        form.update_field(FormField::Message, "Érdeklődnék az alap csomagról.");
        form
    }

    fn expected_lead() -> LeadSubmission {
        LeadSubmission {
            name: "Kovács Anna".into(),
            email: "anna@example.com".into(),
            phone: "+36201234567".into(),
            message: "Érdeklődnék az alap csomagról.".into(),
        }
    }

    #[test]
    fn test_successful_submit_clears_fields() {
        let store = RecordingStore::default();
        let mut form = filled_form();

        let ticket = block_on(form.submit(&store));

        assert!(ticket.is_some());
        assert_eq!(*store.batches.borrow(), vec![vec![expected_lead()]]);
        assert_eq!(form.state(), SubmissionState::Succeeded);
        assert!(!form.is_submitting());
        for field in FormField::ALL {
            assert_eq!(form.field(field), "");
        }
        assert!(form.state().banner().unwrap().title.contains("Köszönjük"));
    }

    #[test]
    fn test_failed_submit_keeps_fields() {
        let store = RecordingStore::failing();
        let mut form = filled_form();

        block_on(form.submit(&store));

        assert_eq!(store.batches.borrow().len(), 1);
        assert_eq!(form.state(), SubmissionState::Failed);
        assert!(!form.is_submitting());
        assert_eq!(form.field(FormField::Name), "Kovács Anna");
        assert_eq!(form.field(FormField::Email), "anna@example.com");
        assert_eq!(form.field(FormField::Phone), "+36201234567");
        assert_eq!(form.field(FormField::Message), "Érdeklődnék az alap csomagról.");
        assert!(form.state().banner().unwrap().title.contains("hiba"));
    }

    #[test]
    fn test_submit_sends_latest_field_values() {
        let store = RecordingStore::default();
        let mut form = filled_form();
        form.update_field(FormField::Name, "Kovács");
        form.update_field(FormField::Name, "Nagy Béla");

        block_on(form.submit(&store));

        let batches = store.batches.borrow();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].len(), 1);
        assert_eq!(batches[0][0].name, "Nagy Béla");
        assert_eq!(batches[0][0].email, "anna@example.com");
    }

    #[test]
    fn test_second_submit_refused_while_in_flight() {
        let mut form = filled_form();

        let first = form.begin_submit().unwrap();
        assert!(form.is_submitting());
        assert_eq!(form.state().button_label(), "Küldés...");
        assert!(form.begin_submit().is_none());

        assert!(form.finish_submit(first.ticket, Ok(())));
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn test_banner_resets_to_idle() {
        let store = RecordingStore::default();
        let mut form = filled_form();

        let ticket = block_on(form.submit(&store)).unwrap();
        assert!(form.reset_banner(ticket));
        assert_eq!(form.state(), SubmissionState::Idle);

        let store = RecordingStore::failing();
        let mut form = filled_form();
        let ticket = block_on(form.submit(&store)).unwrap();
        assert!(form.reset_banner(ticket));
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_stale_reset_is_ignored() {
        let mut form = filled_form();

        let first = form.begin_submit().unwrap();
        form.finish_submit(first.ticket, Err(StoreError::Network("offline".into())));

        // Visitor retries before the first banner timer fires.
        let second = form.begin_submit().unwrap();
        assert_eq!(form.state(), SubmissionState::Submitting);
        assert!(!form.reset_banner(first.ticket));
        assert_eq!(form.state(), SubmissionState::Submitting);

        form.finish_submit(second.ticket, Ok(()));
        assert!(!form.reset_banner(first.ticket));
        assert_eq!(form.state(), SubmissionState::Succeeded);
        assert!(form.reset_banner(second.ticket));
    }

    #[test]
    fn test_finish_with_unknown_ticket_is_ignored() {
        let mut form = filled_form();
        assert!(!form.finish_submit(7, Ok(())));
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(form.field(FormField::Name), "Kovács Anna");
    }
}
