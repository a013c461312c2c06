use leptos::prelude::*;
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::page::{
    reveal::{RevealTarget, VisibilityNotifier},
    tasks::Cancel,
};

use super::controller::PageController;

/// Stops a browser listener or observer.
pub struct ObserverStop(Box<dyn Fn() + Send + Sync>);

impl ObserverStop {
    pub fn new(stop: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Box::new(stop))
    }
}

impl Cancel for ObserverStop {
    fn cancel(self) {
        (self.0)()
    }
}

/// [`VisibilityNotifier`] backed by the browser's `IntersectionObserver`.
pub struct ViewportNotifier {
    threshold: f64,
}

impl ViewportNotifier {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl VisibilityNotifier for ViewportNotifier {
    type Subscription = ObserverStop;

    fn subscribe<F>(&self, element_id: &str, on_enter: F) -> Option<Self::Subscription>
    where
        F: Fn() + Clone + Send + Sync + 'static,
    {
        let element = document().get_element_by_id(element_id)?;
        let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
            element,
            move |entries, _| {
                if entries.iter().any(|entry| entry.is_intersecting()) {
                    on_enter();
                }
            },
            UseIntersectionObserverOptions::default().thresholds(vec![self.threshold]),
        );
        Some(ObserverStop::new(stop))
    }
}

/// Wraps `children` in an element that fades in the first time it is seen.
#[component]
pub fn FadeIn(
    target: RevealTarget,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let controller = expect_context::<PageController>();
    let revealed = Memo::new(move |_| controller.with(|state| state.is_revealed(target)));

    view! {
        <div
            id=target.id()
            class=move || {
                if revealed.get() {
                    format!("fade-in visible {class}")
                } else {
                    format!("fade-in {class}")
                }
            }
        >
            {children()}
        </div>
    }
}
