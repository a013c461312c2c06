use std::time::Duration;

use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::{
    config::ViewConfig,
    page::{
        form::Field,
        reveal::{watch_all, RevealTarget, RevealWatch},
        section::{Extent, Section, SectionLayout},
        tasks::{Cancel, PendingTasks, Task, Ticket},
        PageCommand, PageEvent, PageState,
    },
};

use super::reveal::{ObserverStop, ViewportNotifier};

/// Owns the page's view state and every browser hook that feeds it.
///
/// Provided as context by the portfolio page; components read state through
/// [`PageController::with`] and report interaction through
/// [`PageController::dispatch`].
#[derive(Clone, Copy)]
pub struct PageController {
    state: RwSignal<PageState>,
    config: StoredValue<ViewConfig>,
    timers: StoredValue<PendingTasks<TimeoutHandle>>,
    listeners: StoredValue<Vec<ObserverStop>>,
    reveals: StoredValue<RevealWatch<ObserverStop>>,
}

impl PageController {
    pub fn new(config: ViewConfig) -> Self {
        let controller = Self {
            state: RwSignal::new(PageState::new()),
            config: StoredValue::new(config),
            timers: StoredValue::new(PendingTasks::new()),
            listeners: StoredValue::new(Vec::new()),
            reveals: StoredValue::new(RevealWatch::default()),
        };

        let stop_scroll = use_event_listener(use_window(), ev::scroll, move |_| {
            controller.on_scroll();
        });
        controller
            .listeners
            .update_value(|l| l.push(ObserverStop::new(stop_scroll)));

        // effects only run in the browser, after the first render
        Effect::new(move |_| controller.dispatch(PageEvent::Mounted));

        on_cleanup(move || controller.teardown());
        controller
    }

    /// Reads the current state, tracking it when called reactively.
    pub fn with<T>(self, f: impl FnOnce(&PageState) -> T) -> T {
        self.state.with(f)
    }

    pub fn dispatch(self, event: PageEvent) {
        let Some(config) = self.config.try_get_value() else {
            return;
        };
        let commands = self
            .state
            .try_maybe_update(|state| {
                let transition = state.apply(event, &config);
                (transition.changed, transition.commands)
            })
            .unwrap_or_default();
        for command in commands {
            match command {
                PageCommand::ScrollTo(section) => scroll_into_view(section),
                PageCommand::Schedule { task, after } => self.schedule(task, after),
            }
        }
    }

    pub fn navigate(self, section: Section) {
        self.dispatch(PageEvent::NavigateTo(section));
    }

    /// Input handler for the contact form; the field comes from the
    /// control's `name` attribute.
    pub fn edit(self, ev: ev::Event) {
        let value = event_target_value(&ev);
        let name = event_target::<web_sys::Element>(&ev)
            .get_attribute("name")
            .unwrap_or_default();
        match name.parse::<Field>() {
            Ok(field) => self.dispatch(PageEvent::FieldEdited { field, value }),
            Err(e) => log::warn!("ignoring edit: {e}"),
        }
    }

    fn on_scroll(self) {
        let window = window();
        let Ok(scroll_y) = window.scroll_y() else {
            return;
        };
        let document = document();
        let layout = SectionLayout::measure(|section| {
            let element = document.get_element_by_id(section.id())?;
            let element = element.dyn_into::<HtmlElement>().ok()?;
            Some(Extent::new(
                element.offset_top() as f64,
                element.offset_height() as f64,
            ))
        });
        self.dispatch(PageEvent::Scrolled { scroll_y, layout });
    }

    fn schedule(self, task: Task, after: Duration) {
        let Some(ticket) = self.timers.try_update_value(|t| t.reserve(task)) else {
            return;
        };
        let owner = Owner::current();
        let fire = move || match owner {
            Some(owner) => owner.with(|| self.fire(ticket)),
            None => self.fire(ticket),
        };
        match set_timeout_with_handle(fire, after) {
            Ok(handle) => self.timers.update_value(|t| t.insert(ticket, handle)),
            Err(e) => log::warn!("couldn't schedule {task:?}: {e:?}"),
        }
    }

    fn fire(self, ticket: Ticket) {
        let live = self
            .timers
            .try_update_value(|t| t.complete(ticket))
            .unwrap_or(false);
        if !live {
            return;
        }
        match ticket.task {
            Task::AttachReveal => self.attach_reveal(),
            Task::ClearSubmission => self.dispatch(PageEvent::SubmissionExpired),
        }
    }

    fn attach_reveal(self) {
        let Some(config) = self.config.try_get_value() else {
            return;
        };
        let notifier = ViewportNotifier::new(config.reveal_threshold);
        let watch = watch_all(&notifier, &RevealTarget::ALL, move |target| {
            self.dispatch(PageEvent::Revealed(target));
            self.reveals.try_update_value(|w| w.finish(target));
        });
        log::debug!("watching {} reveal targets", watch.len());
        let previous = self.reveals.try_update_value(|w| std::mem::replace(w, watch));
        if let Some(mut previous) = previous {
            previous.cancel_all();
        }
    }

    fn teardown(self) {
        self.timers.try_update_value(|t| t.cancel_all());
        self.listeners.try_update_value(|l| {
            for stop in l.drain(..) {
                stop.cancel();
            }
        });
        self.reveals.try_update_value(|w| w.cancel_all());
    }
}

impl Cancel for TimeoutHandle {
    fn cancel(self) {
        self.clear();
    }
}

fn scroll_into_view(section: Section) {
    let Some(element) = document().get_element_by_id(section.id()) else {
        log::debug!("#{section} not rendered, not scrolling");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
