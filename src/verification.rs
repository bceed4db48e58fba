//! Contact form flow: honeypot filter, arithmetic challenge and the
//! simulated submission.
//!
//! ```text
//! Idle --mismatch--> Error --3s--> Idle (new challenge)
//! Idle --match-----> Submitting --1.5s--> Success --reset--> Idle (new challenge)
//! ```
//!
//! The state itself is timer-free. [`FormStatus::pending_timer`] names the
//! delay and follow-up action for each status; the component starts that
//! timer whenever the status changes and cancels it when the status moves on.

use std::rc::Rc;

use log::{info, warn};
use yew::Reducible;

use crate::config;

/// Source of uniform draws in `[0, 1)`.
pub type Rng = fn() -> f64;

pub fn browser_random() -> f64 {
    web_sys::js_sys::Math::random()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Challenge {
    pub a: u32,
    pub b: u32,
}

impl Challenge {
    pub fn draw(rng: Rng) -> Self {
        Challenge {
            a: operand(rng()),
            b: operand(rng()),
        }
    }

    pub fn answer(&self) -> u32 {
        self.a + self.b
    }

    pub fn is_answered_by(&self, input: &str) -> bool {
        leading_integer(input).map_or(false, |n| n == i64::from(self.answer()))
    }
}

/// Reads the optionally signed run of digits at the start of `input`, so a
/// number field that reports "7.0" still answers 7. Trailing text is ignored.
fn leading_integer(input: &str) -> Option<i64> {
    let input = input.trim();
    let (sign, rest) = match input.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, input.strip_prefix('+').unwrap_or(input)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse::<i64>().ok().map(|n| sign * n)
}

fn operand(r: f64) -> u32 {
    ((r * 9.0).floor() as u32 + 1).clamp(1, 9)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

impl FormStatus {
    /// Delay and follow-up action owed to a status that ends on its own.
    pub fn pending_timer(self) -> Option<(u32, FormAction)> {
        match self {
            FormStatus::Error => Some((config::ERROR_RESET_MS, FormAction::ErrorElapsed)),
            FormStatus::Submitting => Some((config::SUBMIT_DELAY_MS, FormAction::SubmissionElapsed)),
            FormStatus::Idle | FormStatus::Success => None,
        }
    }
}

/// What a submit attempt did, so the caller knows which timer to start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Honeypot was filled in. Nothing changes and nothing is scheduled.
    Dropped,
    /// The form is not accepting submissions right now.
    Ignored,
    Rejected,
    Accepted,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    SetAnswer(String),
    Submit { honeypot: String },
    ErrorElapsed,
    SubmissionElapsed,
    Reset,
}

#[derive(Clone)]
pub struct ContactForm {
    pub status: FormStatus,
    pub challenge: Challenge,
    pub answer: String,
    consumed: bool,
    rng: Rng,
}

impl ContactForm {
    pub fn new(rng: Rng) -> Self {
        ContactForm {
            status: FormStatus::Idle,
            challenge: Challenge::draw(rng),
            answer: String::new(),
            consumed: false,
            rng,
        }
    }

    pub fn evaluate(&self, honeypot: &str) -> SubmitOutcome {
        if !honeypot.is_empty() {
            return SubmitOutcome::Dropped;
        }
        if self.status != FormStatus::Idle || self.consumed {
            return SubmitOutcome::Ignored;
        }
        if self.challenge.is_answered_by(&self.answer) {
            SubmitOutcome::Accepted
        } else {
            SubmitOutcome::Rejected
        }
    }

    pub fn apply(&mut self, action: FormAction) -> SubmitOutcome {
        match action {
            FormAction::SetAnswer(answer) => {
                self.answer = answer;
                SubmitOutcome::Ignored
            }
            FormAction::Submit { honeypot } => {
                let outcome = self.evaluate(&honeypot);
                match outcome {
                    SubmitOutcome::Dropped => warn!("Bot detected, dropping inquiry"),
                    SubmitOutcome::Ignored => {}
                    SubmitOutcome::Rejected => {
                        info!("Verification failed for {} + {}", self.challenge.a, self.challenge.b);
                        self.consumed = true;
                        self.status = FormStatus::Error;
                    }
                    SubmitOutcome::Accepted => {
                        info!("Inquiry accepted");
                        self.consumed = true;
                        self.status = FormStatus::Submitting;
                    }
                }
                outcome
            }
            FormAction::ErrorElapsed => {
                if self.status == FormStatus::Error {
                    self.reset_to_idle();
                }
                SubmitOutcome::Ignored
            }
            FormAction::SubmissionElapsed => {
                if self.status == FormStatus::Submitting {
                    self.status = FormStatus::Success;
                    self.answer.clear();
                }
                SubmitOutcome::Ignored
            }
            FormAction::Reset => {
                if self.status == FormStatus::Success {
                    self.reset_to_idle();
                }
                SubmitOutcome::Ignored
            }
        }
    }

    fn reset_to_idle(&mut self) {
        self.status = FormStatus::Idle;
        self.challenge = Challenge::draw(self.rng);
        self.consumed = false;
    }
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    thread_local! {
        static DRAWS: RefCell<VecDeque<f64>> = RefCell::new(VecDeque::new());
    }

    fn scripted() -> f64 {
        DRAWS.with(|d| d.borrow_mut().pop_front().unwrap_or(0.0))
    }

    fn script(values: &[f64]) {
        DRAWS.with(|d| d.borrow_mut().extend(values.iter().copied()));
    }

    // 0.25 -> 3, 0.35 -> 4
    fn form_with_three_plus_four() -> ContactForm {
        DRAWS.with(|d| d.borrow_mut().clear());
        script(&[0.25, 0.35]);
        ContactForm::new(scripted)
    }

    fn submit(form: &mut ContactForm, answer: &str) -> SubmitOutcome {
        form.apply(FormAction::SetAnswer(answer.to_string()));
        form.apply(FormAction::Submit { honeypot: String::new() })
    }

    #[test]
    fn operands_cover_one_to_nine() {
        assert_eq!(operand(0.0), 1);
        assert_eq!(operand(0.999_999), 9);
        assert_eq!(operand(0.5), 5);
        assert_eq!(operand(1.0), 9);
    }

    #[test]
    fn answer_parsing() {
        let c = Challenge { a: 3, b: 4 };
        assert!(c.is_answered_by("7"));
        assert!(c.is_answered_by(" 7 "));
        assert!(!c.is_answered_by("8"));
        assert!(!c.is_answered_by(""));
        assert!(!c.is_answered_by("seven"));
        assert!(!c.is_answered_by("-7"));
        assert!(c.is_answered_by("7.0"));
        assert!(c.is_answered_by("+7"));
        assert!(c.is_answered_by("07"));
        assert!(!c.is_answered_by("-"));
        assert!(!c.is_answered_by(".7"));
    }

    #[test]
    fn only_transient_statuses_schedule_a_timer() {
        assert_eq!(
            FormStatus::Error.pending_timer(),
            Some((3_000, FormAction::ErrorElapsed))
        );
        assert_eq!(
            FormStatus::Submitting.pending_timer(),
            Some((1_500, FormAction::SubmissionElapsed))
        );
        assert_eq!(FormStatus::Idle.pending_timer(), None);
        assert_eq!(FormStatus::Success.pending_timer(), None);
    }

    #[test]
    fn bot_submission_leaves_nothing_to_schedule() {
        let mut form = form_with_three_plus_four();
        form.apply(FormAction::SetAnswer("7".into()));
        form.apply(FormAction::Submit { honeypot: "filled".into() });
        assert_eq!(form.status.pending_timer(), None);
    }

    #[test]
    fn double_submit_owes_a_single_reset() {
        let mut form = form_with_three_plus_four();
        submit(&mut form, "8");
        let owed = form.status.pending_timer();
        assert_eq!(submit(&mut form, "8"), SubmitOutcome::Ignored);
        // the status did not change, so no second timer is started
        assert_eq!(form.status.pending_timer(), owed);

        let (_, action) = owed.unwrap();
        form.apply(action);
        assert_eq!(form.status, FormStatus::Idle);
        assert_eq!(form.status.pending_timer(), None);
    }

    #[test]
    fn accepted_inquiry_follows_its_timers_to_success() {
        let mut form = form_with_three_plus_four();
        submit(&mut form, "7");
        let (delay, action) = form.status.pending_timer().unwrap();
        assert_eq!(delay, config::SUBMIT_DELAY_MS);
        form.apply(action);
        assert_eq!(form.status, FormStatus::Success);
    }

    #[test]
    fn correct_answer_submits_then_succeeds() {
        let mut form = form_with_three_plus_four();
        assert_eq!(form.challenge, Challenge { a: 3, b: 4 });

        assert_eq!(submit(&mut form, "7"), SubmitOutcome::Accepted);
        assert_eq!(form.status, FormStatus::Submitting);

        form.apply(FormAction::SubmissionElapsed);
        assert_eq!(form.status, FormStatus::Success);
        assert!(form.answer.is_empty());
    }

    #[test]
    fn wrong_answer_errors_then_returns_idle_with_new_challenge() {
        let mut form = form_with_three_plus_four();

        assert_eq!(submit(&mut form, "8"), SubmitOutcome::Rejected);
        assert_eq!(form.status, FormStatus::Error);
        assert_eq!(form.challenge, Challenge { a: 3, b: 4 });

        script(&[0.9, 0.0]);
        form.apply(FormAction::ErrorElapsed);
        assert_eq!(form.status, FormStatus::Idle);
        assert_eq!(form.challenge, Challenge { a: 9, b: 1 });
    }

    #[test]
    fn honeypot_drops_silently() {
        let mut form = form_with_three_plus_four();
        form.apply(FormAction::SetAnswer("7".into()));
        let outcome = form.apply(FormAction::Submit { honeypot: "https://spam.example".into() });

        assert_eq!(outcome, SubmitOutcome::Dropped);
        assert_eq!(form.status, FormStatus::Idle);
        assert_eq!(form.challenge, Challenge { a: 3, b: 4 });
        // the challenge was not spent on the bot attempt
        assert_eq!(submit(&mut form, "7"), SubmitOutcome::Accepted);
    }

    #[test]
    fn submitting_is_only_reachable_from_idle() {
        let mut form = form_with_three_plus_four();
        submit(&mut form, "8");
        assert_eq!(submit(&mut form, "7"), SubmitOutcome::Ignored);
        assert_eq!(form.status, FormStatus::Error);

        let mut form = form_with_three_plus_four();
        submit(&mut form, "7");
        assert_eq!(submit(&mut form, "7"), SubmitOutcome::Ignored);
        assert_eq!(form.status, FormStatus::Submitting);
    }

    #[test]
    fn consumed_challenge_cannot_be_replayed() {
        let mut form = form_with_three_plus_four();
        submit(&mut form, "7");
        form.apply(FormAction::SubmissionElapsed);

        script(&[0.0, 0.0]);
        form.apply(FormAction::Reset);
        assert_eq!(form.status, FormStatus::Idle);
        assert_eq!(form.challenge, Challenge { a: 1, b: 1 });
        // the memorised answer to the old pair no longer works
        assert_eq!(submit(&mut form, "7"), SubmitOutcome::Rejected);
    }

    #[test]
    fn stale_timers_are_ignored() {
        let mut form = form_with_three_plus_four();
        form.apply(FormAction::ErrorElapsed);
        form.apply(FormAction::SubmissionElapsed);
        form.apply(FormAction::Reset);
        assert_eq!(form.status, FormStatus::Idle);
        assert_eq!(form.challenge, Challenge { a: 3, b: 4 });

        submit(&mut form, "7");
        form.apply(FormAction::ErrorElapsed);
        assert_eq!(form.status, FormStatus::Submitting);
    }

    #[test]
    fn reducer_leaves_previous_state_untouched() {
        let form = Rc::new(form_with_three_plus_four());
        let next = form.clone().reduce(FormAction::SetAnswer("7".into()));
        let next = next.reduce(FormAction::Submit { honeypot: String::new() });
        assert_eq!(form.status, FormStatus::Idle);
        assert_eq!(next.status, FormStatus::Submitting);
    }
}
