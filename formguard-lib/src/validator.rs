//! Event-driven form validator.

use std::time::Instant;

use log::{debug, info, trace};

use crate::config::FormConfig;
use crate::error::FormError;
use crate::field::{FieldName, FieldValue};
use crate::render::{FormView, PageView};
use crate::state::FormState;
use crate::timer::{TimerHandle, Timers};
use crate::validation::{FormValues, check_field};

/// UI event delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The value of a text field changed while typing.
    Input(FieldName, FieldValue),
    /// The value of a field was committed (select, checkbox toggle).
    Change(FieldName, FieldValue),
    /// A field lost focus.
    Blur(FieldName),
    /// The form was submitted.
    Submit,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field was valid; the success view is shown.
    Accepted,
    /// At least one field was invalid; focus moved to the first one.
    Rejected {
        /// First invalid field, in evaluation order.
        focus: FieldName,
    },
    /// The success view is showing; the submit was ignored.
    Ignored,
}

/// Scheduled work owned by the validator.
#[derive(Debug, Clone, Copy)]
enum TimerTask {
    /// Hide a field's error message.
    HideError(FieldName),
    /// Return from the success view to an empty form.
    ResetForm,
}

/// Validates a sign-up form in response to host events.
///
/// All methods are synchronous and take the current time explicitly; timers
/// only fire from [`FormValidator::fire_due`].
///
/// # Example
///
/// ```ignore
/// let mut validator = FormValidator::new(FormConfig::default());
/// let now = Instant::now();
///
/// validator.handle(FormEvent::Input(FieldName::Email, "ada@example".into()), now)?;
/// validator.handle(FormEvent::Blur(FieldName::Email), now)?;
///
/// match validator.submit(now) {
///     SubmitOutcome::Accepted => println!("welcome"),
///     SubmitOutcome::Rejected { focus } => println!("check {}", focus),
///     SubmitOutcome::Ignored => {}
/// }
/// ```
#[derive(Debug)]
pub struct FormValidator {
    config: FormConfig,
    state: FormState,
    page: PageView,
    focused: Option<FieldName>,
    timers: Timers<TimerTask>,
    /// Pending message timer of each field, by field index.
    message_timers: [Option<TimerHandle>; FieldName::COUNT],
    reset_timer: Option<TimerHandle>,
}

impl FormValidator {
    /// Create a validator for an empty form.
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            state: FormState::new(),
            page: PageView::Form,
            focused: None,
            timers: Timers::new(),
            message_timers: [None; FieldName::COUNT],
            reset_timer: None,
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// The timing configuration.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Current values and field states.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Current raw values.
    pub fn values(&self) -> &FormValues {
        self.state.values()
    }

    /// Which page is visible.
    pub fn page(&self) -> PageView {
        self.page
    }

    /// Field that should hold focus, if any.
    pub fn focused(&self) -> Option<FieldName> {
        self.focused
    }

    /// Snapshot for the host to render.
    pub fn view(&self) -> FormView {
        FormView::from_state(&self.state, self.page, self.focused)
    }

    /// Earliest pending timer deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Store a field's raw value without validating it.
    pub fn set_value(&mut self, name: FieldName, value: FieldValue) -> Result<(), FormError> {
        self.state.set_value(name, value)
    }

    /// Evaluate one field's rules and record the outcome.
    ///
    /// An invalid outcome (re)starts the field's message timer, superseding
    /// any earlier one.
    pub fn validate_field(&mut self, name: FieldName, now: Instant) -> bool {
        let outcome = check_field(name, self.state.values());
        self.state.apply(name, &outcome);

        self.cancel_message_timer(name);
        if let (false, Some(delay)) = (outcome.is_valid(), self.config.error_clear_delay) {
            let handle = self.timers.schedule(TimerTask::HideError(name), now + delay);
            self.message_timers[name.index()] = Some(handle);
        }

        trace!("Validated {}: {:?}", name, outcome);
        outcome.is_valid()
    }

    /// Evaluate every field, in evaluation order, without stopping at the
    /// first failure.
    pub fn validate_all(&mut self, now: Instant) -> bool {
        let mut all_valid = true;
        for name in FieldName::ALL {
            all_valid &= self.validate_field(name, now);
        }
        debug_assert_eq!(all_valid, self.state.all_valid());
        all_valid
    }

    /// Return a field to Unvalidated without running its rules.
    pub fn clear_field_error(&mut self, name: FieldName) {
        self.state.clear(name);
        self.cancel_message_timer(name);
    }

    fn cancel_message_timer(&mut self, name: FieldName) {
        if let Some(handle) = self.message_timers[name.index()].take() {
            self.timers.cancel(handle);
        }
    }

    /// Validate everything and either show the success view or focus the
    /// first invalid field.
    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        if self.page == PageView::Success {
            debug!("Submit ignored while the success view is shown");
            return SubmitOutcome::Ignored;
        }

        let all_valid = self.validate_all(now);

        // After validate_all every field is Valid or Invalid.
        match self.state.first_invalid() {
            Some(focus) => {
                debug!("Submit rejected, focusing {}", focus);
                self.focused = Some(focus);
                SubmitOutcome::Rejected { focus }
            }
            None => {
                debug_assert!(all_valid);
                info!("Form submitted");
                self.page = PageView::Success;
                self.focused = None;
                let deadline = now + self.config.success_reset_delay;
                self.reset_timer = Some(self.timers.schedule(TimerTask::ResetForm, deadline));
                SubmitOutcome::Accepted
            }
        }
    }

    /// Apply a host event.
    ///
    /// Returns the submit outcome for [`FormEvent::Submit`]. Field events are
    /// ignored while the success view is shown.
    pub fn handle(
        &mut self,
        event: FormEvent,
        now: Instant,
    ) -> Result<Option<SubmitOutcome>, FormError> {
        trace!("Event: {:?}", event);

        if let FormEvent::Submit = event {
            return Ok(Some(self.submit(now)));
        }

        if self.page == PageView::Success {
            debug!("Event ignored while the success view is shown: {:?}", event);
            return Ok(None);
        }

        match event {
            FormEvent::Input(name, value) | FormEvent::Change(name, value) => {
                self.set_value(name, value)?;
                self.clear_field_error(name);
            }
            // The checkbox is only validated on submit.
            FormEvent::Blur(FieldName::Terms) => {}
            FormEvent::Blur(name) => {
                self.validate_field(name, now);
            }
            FormEvent::Submit => {}
        }

        Ok(None)
    }

    /// Fire every timer due at `now`. Returns how many fired.
    pub fn fire_due(&mut self, now: Instant) -> usize {
        let due = self.timers.take_due(now);
        for task in &due {
            match *task {
                TimerTask::HideError(name) => {
                    trace!("Hiding error message for {}", name);
                    self.message_timers[name.index()] = None;
                    self.state.hide_message(name);
                }
                TimerTask::ResetForm => {
                    debug!("Success view elapsed, resetting form");
                    self.reset_timer = None;
                    self.reset();
                }
            }
        }
        due.len()
    }

    /// Empty the form and return to the editable view, cancelling all timers.
    pub fn reset(&mut self) {
        self.state.reset();
        self.page = PageView::Form;
        self.focused = None;
        for name in FieldName::ALL {
            self.cancel_message_timer(name);
        }
        if let Some(handle) = self.reset_timer.take() {
            self.timers.cancel(handle);
        }
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}
