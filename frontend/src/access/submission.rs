use log::{debug, warn};
use thiserror::Error;

use crate::config;
use crate::scheduler::{Delay, Scheduler, TimerEvent, TimerId};

/// Identifies one submission attempt so late results for an old attempt can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("The request timed out. Please try again.")]
    Timeout,
    #[error("Your request was declined: {0}")]
    Rejected(String),
    #[error("Could not reach the server: {0}")]
    Connection(String),
}

/// The submit button as the form renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: String,
    pub disabled: bool,
    pub dimmed: bool,
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self { label: config::SUBMIT_LABEL.to_string(), disabled: false, dimmed: false }
    }
}

impl SubmitControl {
    pub fn opacity(&self) -> &'static str {
        if self.dimmed {
            "0.7"
        } else {
            "1"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    InFlight { ticket: Ticket, timer: Option<TimerId> },
}

/// One outstanding request at a time, with the control kept in step.
#[derive(Debug)]
pub struct Submission {
    control: SubmitControl,
    original_label: String,
    state: State,
    next_ticket: u64,
}

impl Default for Submission {
    fn default() -> Self {
        Self::new()
    }
}

impl Submission {
    pub fn new() -> Self {
        let control = SubmitControl::default();
        Self {
            original_label: control.label.clone(),
            control,
            state: State::Idle,
            next_ticket: 0,
        }
    }

    pub fn control(&self) -> &SubmitControl {
        &self.control
    }

    pub fn in_flight(&self) -> Option<Ticket> {
        match self.state {
            State::Idle => None,
            State::InFlight { ticket, .. } => Some(ticket),
        }
    }

    /// Locks the control and hands out a ticket. The control is disabled
    /// before any timer exists, so a second click can't start another attempt.
    pub fn begin(&mut self) -> Option<Ticket> {
        if self.in_flight().is_some() {
            warn!("Submit ignored, a request is already in flight");
            return None;
        }
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;

        self.original_label = self.control.label.clone();
        self.control.label = config::PROCESSING_LABEL.to_string();
        self.control.disabled = true;
        self.control.dimmed = true;
        self.state = State::InFlight { ticket, timer: None };
        debug!("Submission {:?} started", ticket);
        Some(ticket)
    }

    /// Stands in for the network call: settles successfully after a fixed delay.
    pub fn simulate(&mut self, ticket: Ticket, scheduler: &mut dyn Scheduler) {
        if let State::InFlight { ticket: current, timer } = &mut self.state {
            if *current == ticket {
                *timer = Some(scheduler.schedule(
                    Delay::Millis(config::SUBMISSION_DELAY_MS),
                    TimerEvent::SubmissionSettled(ticket),
                ));
            }
        }
    }

    /// Finishes the attempt behind `ticket` and restores the control whatever
    /// the outcome. Returns `None` for a ticket that is no longer current.
    pub fn settle(
        &mut self,
        ticket: Ticket,
        outcome: Result<(), SubmissionError>,
        scheduler: &mut dyn Scheduler,
    ) -> Option<Result<(), SubmissionError>> {
        match self.state {
            State::InFlight { ticket: current, timer } if current == ticket => {
                if let Some(timer) = timer {
                    scheduler.cancel(timer);
                }
                self.restore();
                debug!("Submission {:?} settled: {:?}", ticket, outcome);
                Some(outcome)
            }
            _ => {
                debug!("Ignoring result for stale submission {:?}", ticket);
                None
            }
        }
    }

    /// Abandons the attempt in flight, if any, without reporting a result.
    pub fn cancel(&mut self, scheduler: &mut dyn Scheduler) -> bool {
        let State::InFlight { ticket, timer } = self.state else {
            return false;
        };
        if let Some(timer) = timer {
            scheduler.cancel(timer);
        }
        self.restore();
        debug!("Submission {:?} cancelled", ticket);
        true
    }

    fn restore(&mut self) {
        self.state = State::Idle;
        self.control = SubmitControl {
            label: self.original_label.clone(),
            disabled: false,
            dimmed: false,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;

    #[test]
    fn begin_locks_the_control_synchronously() {
        let mut submission = Submission::new();
        let ticket = submission.begin().expect("ticket");

        assert!(submission.control().disabled);
        assert_eq!(submission.control().label, config::PROCESSING_LABEL);
        assert_eq!(submission.control().opacity(), "0.7");
        assert_eq!(submission.in_flight(), Some(ticket));
        assert!(submission.begin().is_none());
    }

    #[test]
    fn settle_restores_original_label_on_every_outcome() {
        let outcomes = [
            Ok(()),
            Err(SubmissionError::Timeout),
            Err(SubmissionError::Rejected("full".into())),
            Err(SubmissionError::Connection("offline".into())),
        ];
        for outcome in outcomes {
            let mut scheduler = ManualScheduler::new();
            let mut submission = Submission::new();
            let ticket = submission.begin().expect("ticket");
            assert_eq!(submission.settle(ticket, outcome.clone(), &mut scheduler), Some(outcome));
            assert_eq!(submission.control(), &SubmitControl::default());
        }
    }

    #[test]
    fn stale_tickets_are_ignored() {
        let mut scheduler = ManualScheduler::new();
        let mut submission = Submission::new();
        let first = submission.begin().expect("ticket");
        submission.settle(first, Ok(()), &mut scheduler);
        let second = submission.begin().expect("ticket");

        assert_eq!(submission.settle(first, Ok(()), &mut scheduler), None);
        assert!(submission.control().disabled);
        assert!(submission.settle(second, Ok(()), &mut scheduler).is_some());
    }

    #[test]
    fn early_result_drops_the_simulated_timer() {
        let mut scheduler = ManualScheduler::new();
        let mut submission = Submission::new();
        let ticket = submission.begin().expect("ticket");
        submission.simulate(ticket, &mut scheduler);
        assert_eq!(scheduler.pending(), 1);

        let outcome = submission.settle(ticket, Err(SubmissionError::Timeout), &mut scheduler);
        assert_eq!(outcome, Some(Err(SubmissionError::Timeout)));
        assert!(scheduler
            .pending_events()
            .all(|e| !matches!(e, TimerEvent::SubmissionSettled(_))));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn cancel_drops_the_simulated_timer() {
        let mut scheduler = ManualScheduler::new();
        let mut submission = Submission::new();
        let ticket = submission.begin().expect("ticket");
        submission.simulate(ticket, &mut scheduler);
        assert_eq!(scheduler.pending(), 1);

        assert!(submission.cancel(&mut scheduler));
        assert_eq!(scheduler.pending(), 0);
        assert!(!submission.control().disabled);
        assert!(!submission.cancel(&mut scheduler));
    }

    #[test]
    fn simulated_request_settles_after_the_delay() {
        let mut scheduler = ManualScheduler::new();
        let mut submission = Submission::new();
        let ticket = submission.begin().expect("ticket");
        submission.simulate(ticket, &mut scheduler);

        let mut fired = Vec::new();
        scheduler.advance(1999, |_, event| fired.push(event));
        assert!(fired.is_empty());
        scheduler.advance(1, |_, event| fired.push(event));
        assert_eq!(fired, vec![TimerEvent::SubmissionSettled(ticket)]);
    }

    #[test]
    fn error_messages_read_naturally() {
        assert_eq!(
            SubmissionError::Rejected("invites are closed".into()).to_string(),
            "Your request was declined: invites are closed"
        );
    }
}
