use serde::Serialize;
use tokio::sync::watch;

use crate::views::status::StatusRegion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowState {
    Idle,
    Validating,
    Invalid,
    Submitting,
    Succeeded,
    Failed,
}

impl WorkflowState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            WorkflowState::Invalid | WorkflowState::Succeeded | WorkflowState::Failed
        )
    }
}

/// The submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub enabled: bool,
    pub label: String,
}

impl SubmitControl {
    pub fn new(label: &str) -> Self {
        Self {
            enabled: true,
            label: label.to_string(),
        }
    }

    pub fn begin(&mut self, in_progress_label: &str) {
        self.enabled = false;
        self.label = in_progress_label.to_string();
    }

    pub fn restore(&mut self, label: &str) {
        self.enabled = true;
        self.label = label.to_string();
    }
}

/// What a renderer needs to draw the workflow, published on every transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowSnapshot {
    pub state: WorkflowState,
    pub control: SubmitControl,
    pub status: StatusRegion,
}

/// Held across the submitter call. Re-enables the control when dropped,
/// and leaves `Submitting` if the call never settled (its future was cancelled).
pub(crate) struct InFlight<'a> {
    control: &'a mut SubmitControl,
    state: &'a mut WorkflowState,
    label: &'a str,
    updates: &'a watch::Sender<WorkflowSnapshot>,
    settled: bool,
}

impl<'a> InFlight<'a> {
    pub(crate) fn new(
        control: &'a mut SubmitControl,
        state: &'a mut WorkflowState,
        label: &'a str,
        updates: &'a watch::Sender<WorkflowSnapshot>,
    ) -> Self {
        Self {
            control,
            state,
            label,
            updates,
            settled: false,
        }
    }

    pub(crate) fn settle(&mut self) {
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.control.restore(self.label);
        if !self.settled {
            tracing::warn!("Submission abandoned before the backend answered");
            *self.state = WorkflowState::Idle;
        }

        let control = self.control.clone();
        let state = *self.state;
        self.updates.send_modify(|snapshot| {
            snapshot.state = state;
            snapshot.control = control;
        });
    }
}
