use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tokio::sync::watch;

use crate::config::Config;
use crate::error::SubmitError;
use crate::form::FormState;
use crate::models::{FieldKind, Severity, SubmissionOutcome};
use crate::submission::{self, HttpSubmitter, PageOrigin, Submitter};
use crate::views::status::StatusRegion;
use crate::views::{FeedbackPresenter, LengthCounter, live};
use crate::workflow::{InFlight, SubmitControl, WorkflowSnapshot, WorkflowState};

/// Everything that can happen to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Input { field: String, value: String },
    Focus(String),
    Blur(String),
    Submit,
    Tick(Instant),
}

/// Owns all form state and routes events to their handlers.
pub struct FormController {
    config: Config,
    form: FormState,
    counters: Vec<LengthCounter>,
    presenter: FeedbackPresenter,
    control: SubmitControl,
    state: WorkflowState,
    last_outcome: Option<WorkflowState>,
    submitter: Arc<dyn Submitter>,
    updates: watch::Sender<WorkflowSnapshot>,
}

impl FormController {
    pub fn new(config: Config, form: FormState, submitter: Arc<dyn Submitter>) -> Self {
        let counters = form
            .fields()
            .iter()
            .filter(|f| f.kind == FieldKind::TextArea)
            .map(|f| LengthCounter::new(&f.name, config.max_text_length))
            .collect();

        let presenter = FeedbackPresenter::new(config.success_hide_after);
        let control = SubmitControl::new(&config.submit_label);
        let (updates, _) = watch::channel(WorkflowSnapshot {
            state: WorkflowState::Idle,
            control: control.clone(),
            status: presenter.region().clone(),
        });

        let mut controller = Self {
            presenter,
            control,
            config,
            form,
            counters,
            state: WorkflowState::Idle,
            last_outcome: None,
            submitter,
            updates,
        };
        controller.refresh_counters();
        controller
    }

    /// The standard survey posting to the backend resolved from `origin`.
    pub fn for_origin(config: Config, origin: &PageOrigin) -> Self {
        let submitter = Arc::new(HttpSubmitter::new(&config, origin));
        tracing::info!("Survey form submitting to {}", submitter.submit_url());
        Self::new(config, FormState::survey(), submitter)
    }

    pub async fn dispatch(&mut self, event: FormEvent) {
        match event {
            FormEvent::Input { field, value } => self.on_input(&field, value),
            FormEvent::Focus(field) => self.on_focus(&field),
            FormEvent::Blur(field) => self.on_blur(&field),
            FormEvent::Submit => self.on_submit().await,
            FormEvent::Tick(now) => {
                if self.presenter.poll(now) {
                    tracing::debug!("Status message auto-hidden");
                    self.publish();
                }
            }
        }
    }

    fn on_input(&mut self, name: &str, value: String) {
        let Some(field) = self.form.field_mut(name) else {
            tracing::warn!("Input for unknown field: {name}");
            return;
        };
        if !field.accepts(&value) {
            tracing::warn!("Ignoring '{value}' for {name}: not one of its options");
            return;
        }
        field.value = value;

        if let Some(counter) = self.counters.iter_mut().find(|c| c.field() == name) {
            field.border = counter.on_input(&field.value);
        }
    }

    fn on_focus(&mut self, name: &str) {
        match self.form.field_mut(name) {
            Some(field) => field.border = live::on_focus(field),
            None => tracing::warn!("Focus on unknown field: {name}"),
        }
    }

    fn on_blur(&mut self, name: &str) {
        match self.form.field_mut(name) {
            Some(field) => field.border = live::on_blur(field),
            None => tracing::warn!("Blur on unknown field: {name}"),
        }
    }

    async fn on_submit(&mut self) {
        self.state = WorkflowState::Validating;
        self.publish();
        let payload = self.form.collect(Utc::now());

        let errors = submission::validate(&payload);
        if !errors.is_empty() {
            tracing::debug!("Validation failed: {errors:?}");
            let message = SubmitError::Validation(errors).to_string();
            self.presenter.show(&message, Severity::Error);
            self.finish(WorkflowState::Invalid);
            return;
        }

        self.state = WorkflowState::Submitting;
        self.control.begin(&self.config.submitting_label);
        self.presenter.show(&self.config.loading_message, Severity::Loading);
        self.publish();

        let outcome = {
            let mut in_flight = InFlight::new(
                &mut self.control,
                &mut self.state,
                &self.config.submit_label,
                &self.updates,
            );
            let outcome = self.submitter.submit(&payload).await;
            in_flight.settle();
            outcome
        };

        match outcome {
            SubmissionOutcome::Success(message) => {
                self.presenter.show(&message, Severity::Success);
                self.form.reset();
                self.refresh_counters();
                self.finish(WorkflowState::Succeeded);
            }
            SubmissionOutcome::Failure(message) => {
                self.presenter.show(&message, Severity::Error);
                self.finish(WorkflowState::Failed);
            }
        }
    }

    fn finish(&mut self, outcome: WorkflowState) {
        debug_assert!(outcome.is_terminal());
        self.last_outcome = Some(outcome);
        self.state = WorkflowState::Idle;
        self.publish();
    }

    fn publish(&self) {
        self.updates.send_replace(WorkflowSnapshot {
            state: self.state,
            control: self.control.clone(),
            status: self.presenter.region().clone(),
        });
    }

    fn refresh_counters(&mut self) {
        for counter in &mut self.counters {
            if let Some(field) = self.form.field_mut(counter.field()) {
                field.border = counter.on_input(&field.value);
            }
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    /// Where the last submit attempt ended up.
    pub fn last_outcome(&self) -> Option<WorkflowState> {
        self.last_outcome
    }

    pub fn control(&self) -> &SubmitControl {
        &self.control
    }

    pub fn status(&self) -> &StatusRegion {
        self.presenter.region()
    }

    pub fn counter(&self, field: &str) -> Option<&LengthCounter> {
        self.counters.iter().find(|c| c.field() == field)
    }

    /// Follow workflow transitions as they happen, including while a submit is in flight.
    pub fn subscribe(&self) -> watch::Receiver<WorkflowSnapshot> {
        self.updates.subscribe()
    }

    /// When the next `Tick` would change anything.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.presenter.hide_deadline()
    }
}
