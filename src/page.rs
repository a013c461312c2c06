//! View state for the portfolio page.
//!
//! Everything here is plain data and pure transitions, so it runs the same
//! under SSR, in the browser and in unit tests. The browser side lives in
//! `app::controller`, which turns DOM events into [`PageEvent`]s and carries
//! out the [`PageCommand`]s that come back.

pub mod form;
pub mod reveal;
pub mod section;
pub mod tasks;

use std::time::Duration;

use crate::config::ViewConfig;

use form::{ContactDraft, Field};
use reveal::{RevealSet, RevealTarget};
use section::{section_at, Section, SectionLayout};
use tasks::Task;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    pub active: Section,
    pub menu_open: bool,
    pub revealed: RevealSet,
    pub draft: ContactDraft,
    pub submitted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// The page finished its first render.
    Mounted,
    Scrolled {
        scroll_y: f64,
        layout: SectionLayout,
    },
    NavigateTo(Section),
    ToggleMenu,
    FieldEdited {
        field: Field,
        value: String,
    },
    Submitted,
    SubmissionExpired,
    Revealed(RevealTarget),
}

/// Side effects requested by a transition, carried out by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum PageCommand {
    ScrollTo(Section),
    Schedule { task: Task, after: Duration },
}

/// Result of [`PageState::apply`]. `changed` is false when the event left
/// the state as it was, so readers need not be notified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transition {
    pub changed: bool,
    pub commands: Vec<PageCommand>,
}

impl Transition {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed(changed: bool) -> Self {
        Self {
            changed,
            commands: vec![],
        }
    }

    fn with(mut self, command: PageCommand) -> Self {
        self.commands.push(command);
        self
    }
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: PageEvent, config: &ViewConfig) -> Transition {
        match event {
            PageEvent::Mounted => Transition::unchanged().with(PageCommand::Schedule {
                task: Task::AttachReveal,
                after: config.reveal_attach_delay,
            }),
            PageEvent::Scrolled { scroll_y, layout } => {
                Transition::changed(self.on_scroll(scroll_y + config.scroll_offset, &layout))
            }
            PageEvent::NavigateTo(section) => self.on_navigate(section),
            PageEvent::ToggleMenu => {
                self.menu_open = !self.menu_open;
                Transition::changed(true)
            }
            PageEvent::FieldEdited { field, value } => {
                if self.draft.get(field) == value {
                    return Transition::unchanged();
                }
                self.draft.set(field, value);
                Transition::changed(true)
            }
            PageEvent::Submitted => self.on_submit(config),
            PageEvent::SubmissionExpired => {
                let changed = self.submitted || !self.draft.is_empty();
                self.submitted = false;
                self.draft.clear();
                Transition::changed(changed)
            }
            PageEvent::Revealed(target) => {
                let fresh = self.revealed.reveal(target);
                if fresh {
                    log::debug!(
                        "revealed #{} ({} so far)",
                        target.id(),
                        self.revealed.len()
                    );
                }
                Transition::changed(fresh)
            }
        }
    }

    fn on_scroll(&mut self, position: f64, layout: &SectionLayout) -> bool {
        match section_at(position, layout) {
            Some(section) if section != self.active => {
                log::debug!("active section {} -> {}", self.active, section);
                self.active = section;
                true
            }
            _ => false,
        }
    }

    fn on_navigate(&mut self, section: Section) -> Transition {
        let changed = self.active != section || self.menu_open;
        self.active = section;
        self.menu_open = false;
        Transition::changed(changed).with(PageCommand::ScrollTo(section))
    }

    fn on_submit(&mut self, config: &ViewConfig) -> Transition {
        // nothing leaves the page, the confirmation is all there is
        log::debug!(
            "contact form submitted ({} chars)",
            self.draft.message.chars().count()
        );
        let changed = !self.submitted;
        self.submitted = true;
        Transition::changed(changed).with(PageCommand::Schedule {
            task: Task::ClearSubmission,
            after: config.submission_window,
        })
    }

    pub fn is_revealed(&self, target: RevealTarget) -> bool {
        self.revealed.contains(target)
    }
}
