//! Form state controller.
//!
//! Owns the draft and moves it through `Editing → Submitting → Submitted`,
//! back to `Editing` on reset. Nothing here performs I/O except the awaited
//! refinement call, whose failures the refiner already absorbs.

use std::sync::Arc;

use tracing::{debug, info, warn};
use zenthera_ai::BriefRefiner;
use zenthera_core::{Budget, Draft, Field, ReferenceId, Sector, ServiceTag, Viewport};

use crate::config::{FormConfig, ResetPolicy};
use crate::confirmation::Confirmation;

/// Where the form is in its submission lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Editing,
    /// Submit pressed; waiting out the simulated latency.
    Submitting,
    Submitted(Confirmation),
}

/// Drag-and-drop events on the document zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent {
    Enter,
    Over,
    Leave,
    Drop,
}

/// A refinement in flight. Obtained from [`FormController::begin_refinement`]
/// and handed back to [`FormController::finish_refinement`].
#[derive(Debug)]
#[must_use]
pub struct RefineTicket {
    prompt: String,
}

impl RefineTicket {
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

pub struct FormController {
    draft: Draft,
    phase: Phase,
    ai_prompt: String,
    generating: bool,
    drag_active: bool,
    config: FormConfig,
    viewport: Arc<dyn Viewport>,
}

impl FormController {
    pub fn new(config: FormConfig, viewport: Arc<dyn Viewport>) -> Self {
        Self {
            draft: Draft::new(),
            phase: Phase::Editing,
            ai_prompt: String::new(),
            generating: false,
            drag_active: false,
            config,
            viewport,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        match &self.phase {
            Phase::Submitted(c) => Some(c),
            _ => None,
        }
    }

    /// The form is on screen (not replaced by the confirmation).
    fn form_visible(&self) -> bool {
        !matches!(self.phase, Phase::Submitted(_))
    }

    // ── Draft edits ──

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if !self.form_visible() {
            warn!(%field, "edit ignored: request already submitted");
            return;
        }
        self.draft.set_field(field, value);
    }

    pub fn set_sector(&mut self, sector: Option<Sector>) {
        if self.form_visible() {
            self.draft.set_sector(sector);
        }
    }

    pub fn set_budget(&mut self, budget: Option<Budget>) {
        if self.form_visible() {
            self.draft.set_budget(budget);
        }
    }

    /// Select or deselect a service. Returns whether it is selected afterwards.
    pub fn toggle_service(&mut self, tag: ServiceTag) -> bool {
        if !self.form_visible() {
            return self.draft.is_selected(tag);
        }
        self.draft.toggle_service(tag)
    }

    // ── AI scope refinement ──

    pub fn ai_prompt(&self) -> &str {
        &self.ai_prompt
    }

    pub fn set_ai_prompt(&mut self, prompt: impl Into<String>) {
        if !self.form_visible() {
            warn!("prompt ignored: request already submitted");
            return;
        }
        self.ai_prompt = prompt.into();
    }

    /// A refinement is in flight.
    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// Whether the refine control is enabled.
    pub fn can_refine(&self) -> bool {
        self.form_visible() && !self.generating && !self.ai_prompt.is_empty()
    }

    /// Start a refinement of the scratch prompt.
    ///
    /// Returns `None`, and changes nothing, when the prompt is blank, a
    /// refinement is already in flight or the request has been submitted.
    pub fn begin_refinement(&mut self) -> Option<RefineTicket> {
        if !self.form_visible() {
            warn!("refinement ignored: request already submitted");
            return None;
        }
        if self.generating {
            debug!("refinement already in flight");
            return None;
        }
        if self.ai_prompt.trim().is_empty() {
            return None;
        }
        self.generating = true;
        Some(RefineTicket {
            prompt: self.ai_prompt.clone(),
        })
    }

    /// Complete a refinement: append `text` to the description, clear the
    /// scratch prompt and release the busy flag.
    ///
    /// If the request was submitted while the refinement was in flight, the
    /// text is dropped and only the busy flag is released.
    pub fn finish_refinement(&mut self, ticket: RefineTicket, text: &str) {
        self.generating = false;
        if !self.form_visible() {
            warn!("refinement discarded: request already submitted");
            return;
        }
        debug!(prompt_len = ticket.prompt.len(), "refinement finished");
        self.draft.append_refinement(text);
        self.ai_prompt.clear();
    }

    /// Refine the scratch prompt with `refiner` and fold the result into the
    /// description. Returns whether a refinement ran.
    pub async fn refine_scope(&mut self, refiner: &BriefRefiner) -> bool {
        let Some(ticket) = self.begin_refinement() else {
            return false;
        };
        let text = refiner.refine(ticket.prompt()).await;
        self.finish_refinement(ticket, &text);
        true
    }

    // ── Submission ──

    /// Enter `Submitting`. Returns false when not editing.
    ///
    /// Required fields are not checked here; the front end does that before
    /// calling.
    pub fn begin_submit(&mut self) -> bool {
        if self.phase != Phase::Editing {
            warn!("submit ignored: not editing");
            return false;
        }
        self.phase = Phase::Submitting;
        true
    }

    /// Leave `Submitting` for `Submitted`, snapshotting the draft and
    /// scrolling the viewport to the top.
    pub fn complete_submit(&mut self) {
        if self.phase != Phase::Submitting {
            return;
        }
        let confirmation = Confirmation::from_draft(&self.draft, ReferenceId::random());
        info!(
            reference = %confirmation.reference,
            project = %self.draft.project_name,
            services = self.draft.services().len(),
            "proposal request submitted"
        );
        self.phase = Phase::Submitted(confirmation);
        self.viewport.scroll_to_top();
    }

    /// Submit the draft after the configured delay.
    ///
    /// Returns the confirmation, or `None` if the form was not editing. If the
    /// future is dropped during the delay, the form goes back to `Editing`.
    pub async fn submit(&mut self) -> Option<&Confirmation> {
        if !self.begin_submit() {
            return None;
        }
        let pending = PendingSubmit { form: self };
        tokio::time::sleep(pending.form.config.submit_delay).await;
        pending.form.complete_submit();
        drop(pending);
        self.confirmation()
    }

    /// "Submit another request": back to editing per the reset policy.
    ///
    /// Only valid from `Submitted`; returns whether the reset happened.
    pub fn reset(&mut self) -> bool {
        if !matches!(self.phase, Phase::Submitted(_)) {
            return false;
        }
        match self.config.reset_policy {
            ResetPolicy::RetainContact => self.draft.clear_scope(),
            ResetPolicy::ClearAll => self.draft = Draft::new(),
        }
        self.phase = Phase::Editing;
        debug!(policy = %self.config.reset_policy, "form reset");
        true
    }

    // ── Document drop zone ──

    pub fn drag(&mut self, event: DragEvent) {
        self.drag_active = matches!(event, DragEvent::Enter | DragEvent::Over);
    }

    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }
}

/// Holds the controller across the submit delay. Dropped before the delay
/// ends, it puts the form back into `Editing`.
struct PendingSubmit<'a> {
    form: &'a mut FormController,
}

impl Drop for PendingSubmit<'_> {
    fn drop(&mut self) {
        if self.form.phase == Phase::Submitting {
            debug!("pending submit abandoned");
            self.form.phase = Phase::Editing;
        }
    }
}
