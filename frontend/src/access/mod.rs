//! The access request form: validation, the submission round trip and the
//! notifications it raises.

mod request;
mod submission;

pub use request::{validate, AccessRequest, Field, Seeking, ValidationResult, Violation};
pub use submission::{SubmissionError, Submission, SubmitControl, Ticket};

use log::{debug, info, warn};

use crate::notification::{NotificationCenter, NotificationId, NotificationKind};
use crate::scheduler::Scheduler;

pub const ERROR_TITLE: &str = "Please Check Your Information";
pub const SUCCESS_TITLE: &str = "Access Request Submitted Successfully";
pub const SUCCESS_BODY: &str = "Thank you for your interest in YAG. We will review your request \
    and respond within 48 hours. Check your email for further instructions.";
pub const FAILURE_TITLE: &str = "Request Not Sent";

#[derive(Debug, Default)]
pub struct AccessLifecycle {
    form: AccessRequest,
    submission: Submission,
}

impl AccessLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &AccessRequest {
        &self.form
    }

    pub fn control(&self) -> &SubmitControl {
        self.submission.control()
    }

    pub fn in_flight(&self) -> Option<Ticket> {
        self.submission.in_flight()
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.form.set(field, value);
    }

    /// Validates the form. An invalid form raises one error notification
    /// right away and leaves the control alone; a valid one locks the
    /// control and starts the simulated request.
    pub fn submit(
        &mut self,
        notifications: &mut NotificationCenter,
        scheduler: &mut dyn Scheduler,
    ) -> Option<Ticket> {
        if self.submission.in_flight().is_some() {
            return None;
        }

        if let Some(violation) = validate(&self.form).first() {
            info!("Access request rejected: {:?}", violation.field());
            notifications.create(ERROR_TITLE, violation.to_string(), NotificationKind::Error, scheduler);
            return None;
        }

        let ticket = self.submission.begin()?;
        if let Ok(payload) = serde_json::to_string(&self.form) {
            debug!("Access request payload: {}", payload);
        }
        self.submission.simulate(ticket, scheduler);
        Some(ticket)
    }

    /// Completes the attempt behind `ticket`. Success clears the form; a
    /// failure keeps it so the user can retry. Either way the control is
    /// restored.
    pub fn settle(
        &mut self,
        ticket: Ticket,
        outcome: Result<(), SubmissionError>,
        notifications: &mut NotificationCenter,
        scheduler: &mut dyn Scheduler,
    ) -> Option<NotificationId> {
        let id = match self.submission.settle(ticket, outcome, scheduler)? {
            Ok(()) => {
                info!("Access request submitted");
                self.form.clear();
                notifications.create(SUCCESS_TITLE, SUCCESS_BODY, NotificationKind::Success, scheduler)
            }
            Err(err) => {
                warn!("Access request failed: {}", err);
                notifications.create(FAILURE_TITLE, err.to_string(), NotificationKind::Error, scheduler)
            }
        };
        Some(id)
    }

    pub fn cancel(&mut self, scheduler: &mut dyn Scheduler) -> bool {
        self.submission.cancel(scheduler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use crate::scheduler::{ManualScheduler, TimerEvent};

    fn fill_valid(lifecycle: &mut AccessLifecycle) {
        lifecycle.set_field(Field::FullName, "Jo".into());
        lifecycle.set_field(Field::Age, "18".into());
        lifecycle.set_field(Field::Location, "NY".into());
        lifecycle.set_field(Field::Seeking, "friendship".into());
        lifecycle.set_field(Field::Message, "1234567890".into());
    }

    fn run(
        lifecycle: &mut AccessLifecycle,
        notifications: &mut NotificationCenter,
        scheduler: &mut ManualScheduler,
        ms: u64,
    ) {
        scheduler.advance(ms, |s, event| match event {
            TimerEvent::SubmissionSettled(ticket) => {
                lifecycle.settle(ticket, Ok(()), notifications, s);
            }
            other => notifications.on_timer(&other, s),
        });
    }

    #[test]
    fn valid_submit_disables_then_succeeds_once() {
        let mut scheduler = ManualScheduler::new();
        let mut notifications = NotificationCenter::new();
        let mut lifecycle = AccessLifecycle::new();
        fill_valid(&mut lifecycle);

        assert!(lifecycle.submit(&mut notifications, &mut scheduler).is_some());
        assert!(lifecycle.control().disabled);
        assert_eq!(lifecycle.control().label, config::PROCESSING_LABEL);
        assert!(notifications.is_empty());

        // A second click while processing changes nothing.
        assert!(lifecycle.submit(&mut notifications, &mut scheduler).is_none());

        run(&mut lifecycle, &mut notifications, &mut scheduler, 2000);
        let kinds: Vec<_> = notifications.iter().map(|n| (n.kind, n.title.clone())).collect();
        assert_eq!(kinds, vec![(NotificationKind::Success, SUCCESS_TITLE.to_string())]);
        assert!(!lifecycle.control().disabled);
        assert_eq!(lifecycle.control().label, config::SUBMIT_LABEL);
        assert_eq!(lifecycle.form(), &AccessRequest::default());
    }

    #[test]
    fn invalid_submit_reports_first_violation_synchronously() {
        let mut scheduler = ManualScheduler::new();
        let mut notifications = NotificationCenter::new();
        let mut lifecycle = AccessLifecycle::new();
        lifecycle.set_field(Field::FullName, "J".into());
        lifecycle.set_field(Field::Age, "17".into());
        lifecycle.set_field(Field::Message, "short".into());

        assert!(lifecycle.submit(&mut notifications, &mut scheduler).is_none());
        assert!(!lifecycle.control().disabled);

        let shown: Vec<_> = notifications.iter().collect();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].kind, NotificationKind::Error);
        assert_eq!(shown[0].title, ERROR_TITLE);
        assert_eq!(shown[0].body, Violation::FullName.to_string());
        assert!(scheduler.pending_events().all(|e| !matches!(e, TimerEvent::SubmissionSettled(_))));
    }

    #[test]
    fn failed_submission_keeps_the_form_and_restores_the_control() {
        let mut scheduler = ManualScheduler::new();
        let mut notifications = NotificationCenter::new();
        let mut lifecycle = AccessLifecycle::new();
        fill_valid(&mut lifecycle);
        let ticket = lifecycle.submit(&mut notifications, &mut scheduler).expect("ticket");
        assert!(lifecycle.cancel(&mut scheduler));
        let ticket_again = lifecycle.submit(&mut notifications, &mut scheduler).expect("ticket");
        assert_ne!(ticket, ticket_again);

        let id = lifecycle
            .settle(
                ticket_again,
                Err(SubmissionError::Connection("offline".into())),
                &mut notifications,
                &mut scheduler,
            )
            .expect("notification");
        let shown = notifications.get(id).expect("shown");
        assert_eq!(shown.kind, NotificationKind::Error);
        assert_eq!(shown.body, "Could not reach the server: offline");
        assert!(!lifecycle.control().disabled);
        assert_eq!(lifecycle.form().full_name, "Jo");
    }
}
