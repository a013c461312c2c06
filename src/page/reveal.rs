use std::collections::{BTreeSet, HashMap};

use super::tasks::Cancel;

/// Page regions that fade in the first time they scroll into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RevealTarget {
    Hero,
    AboutIntro,
    Skills,
    ProjectsGrid,
    ContactForm,
    ContactLinks,
}

impl RevealTarget {
    pub const ALL: [RevealTarget; 6] = [
        RevealTarget::Hero,
        RevealTarget::AboutIntro,
        RevealTarget::Skills,
        RevealTarget::ProjectsGrid,
        RevealTarget::ContactForm,
        RevealTarget::ContactLinks,
    ];

    /// DOM id of the wrapping element.
    pub fn id(self) -> &'static str {
        match self {
            RevealTarget::Hero => "hero",
            RevealTarget::AboutIntro => "about-intro",
            RevealTarget::Skills => "skills",
            RevealTarget::ProjectsGrid => "projects-grid",
            RevealTarget::ContactForm => "contact-form",
            RevealTarget::ContactLinks => "contact-links",
        }
    }
}

/// Regions that have been seen at least once.
///
/// Only ever grows: a region that scrolls back out of view stays revealed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealSet(BTreeSet<RevealTarget>);

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` the first time `target` is revealed.
    pub fn reveal(&mut self, target: RevealTarget) -> bool {
        self.0.insert(target)
    }

    pub fn contains(&self, target: RevealTarget) -> bool {
        self.0.contains(&target)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Tells us when an element scrolls into the viewport.
pub trait VisibilityNotifier {
    type Subscription: Cancel;

    /// Starts watching the element with DOM id `element_id`. `on_enter` runs
    /// every time the element becomes visible. Returns `None` when no such
    /// element is rendered.
    fn subscribe<F>(&self, element_id: &str, on_enter: F) -> Option<Self::Subscription>
    where
        F: Fn() + Clone + Send + Sync + 'static;
}

/// Live visibility subscriptions, one per watched region.
#[derive(Debug)]
pub struct RevealWatch<S: Cancel> {
    subscriptions: HashMap<RevealTarget, S>,
}

impl<S: Cancel> Default for RevealWatch<S> {
    fn default() -> Self {
        Self {
            subscriptions: HashMap::new(),
        }
    }
}

impl<S: Cancel> RevealWatch<S> {
    /// Stops watching `target`; it has been revealed and never needs to be
    /// seen again. Returns whether a subscription was still live.
    pub fn finish(&mut self, target: RevealTarget) -> bool {
        match self.subscriptions.remove(&target) {
            Some(sub) => {
                sub.cancel();
                true
            }
            None => false,
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, sub) in self.subscriptions.drain() {
            sub.cancel();
        }
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    #[cfg(test)]
    pub fn is_watching(&self, target: RevealTarget) -> bool {
        self.subscriptions.contains_key(&target)
    }
}

/// Subscribes every target, skipping the ones not rendered yet.
pub fn watch_all<N, F>(notifier: &N, targets: &[RevealTarget], on_enter: F) -> RevealWatch<N::Subscription>
where
    N: VisibilityNotifier,
    F: Fn(RevealTarget) + Clone + Send + Sync + 'static,
{
    let subscriptions = targets
        .iter()
        .filter_map(|&target| {
            let on_enter = on_enter.clone();
            let sub = notifier.subscribe(target.id(), move || on_enter(target));
            if sub.is_none() {
                log::debug!("reveal target #{} not rendered, skipping", target.id());
            }
            sub.map(|sub| (target, sub))
        })
        .collect();
    RevealWatch { subscriptions }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    type Callback = Arc<dyn Fn() + Send + Sync>;

    /// Notifier driven by the test: `enter(id)` plays a visibility event to
    /// every subscription still open for that id.
    #[derive(Default)]
    struct ScriptedNotifier {
        rendered: Vec<&'static str>,
        watchers: Arc<Mutex<Vec<(String, Callback)>>>,
        stopped: Arc<Mutex<Vec<String>>>,
    }

    struct ScriptedSubscription {
        id: String,
        watchers: Arc<Mutex<Vec<(String, Callback)>>>,
        stopped: Arc<Mutex<Vec<String>>>,
    }

    impl Cancel for ScriptedSubscription {
        fn cancel(self) {
            self.watchers.lock().unwrap().retain(|(w, _)| *w != self.id);
            self.stopped.lock().unwrap().push(self.id);
        }
    }

    impl VisibilityNotifier for ScriptedNotifier {
        type Subscription = ScriptedSubscription;

        fn subscribe<F>(&self, element_id: &str, on_enter: F) -> Option<Self::Subscription>
        where
            F: Fn() + Clone + Send + Sync + 'static,
        {
            if !self.rendered.contains(&element_id) {
                return None;
            }
            self.watchers
                .lock()
                .unwrap()
                .push((element_id.to_string(), Arc::new(on_enter)));
            Some(ScriptedSubscription {
                id: element_id.to_string(),
                watchers: self.watchers.clone(),
                stopped: self.stopped.clone(),
            })
        }
    }

    impl ScriptedNotifier {
        fn enter(&self, id: &str) {
            let callbacks = self
                .watchers
                .lock()
                .unwrap()
                .iter()
                .filter(|(w, _)| w == id)
                .map(|(_, cb)| cb.clone())
                .collect::<Vec<_>>();
            for cb in callbacks {
                cb();
            }
        }
    }

    #[test]
    fn target_ids_are_unique() {
        let mut ids = RevealTarget::ALL.map(RevealTarget::id).to_vec();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), RevealTarget::ALL.len());
    }

    #[test]
    fn reveal_is_one_shot() {
        let mut set = RevealSet::new();
        assert!(set.reveal(RevealTarget::AboutIntro));
        assert!(!set.reveal(RevealTarget::AboutIntro));
        assert!(set.contains(RevealTarget::AboutIntro));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn set_never_shrinks() {
        use RevealTarget::*;
        let mut set = RevealSet::new();
        let events = [Hero, Skills, Hero, ContactForm, Skills, Hero, ProjectsGrid];
        let mut previous = set.clone();
        for target in events {
            set.reveal(target);
            assert!(RevealTarget::ALL
                .into_iter()
                .filter(|&t| previous.contains(t))
                .all(|t| set.contains(t)));
            assert!(set.len() >= previous.len());
            previous = set.clone();
        }
        assert_eq!(set.len(), 4);
        assert!(!set.contains(AboutIntro));
    }

    #[test]
    fn watch_all_skips_missing_targets() {
        let notifier = ScriptedNotifier {
            rendered: vec!["hero", "projects-grid"],
            ..Default::default()
        };
        let watch = watch_all(
            &notifier,
            &[RevealTarget::Hero, RevealTarget::AboutIntro, RevealTarget::ProjectsGrid],
            |_| {},
        );
        assert_eq!(watch.len(), 2);
        assert!(watch.is_watching(RevealTarget::Hero));
        assert!(!watch.is_watching(RevealTarget::AboutIntro));
    }

    #[test]
    fn finished_targets_stop_being_observed() {
        let notifier = ScriptedNotifier {
            rendered: vec!["hero", "projects-grid"],
            ..Default::default()
        };
        let seen = Arc::new(Mutex::new(RevealSet::new()));
        let entered = Arc::new(Mutex::new(Vec::new()));
        let (sink, order) = (seen.clone(), entered.clone());
        let mut watch = watch_all(&notifier, &RevealTarget::ALL, move |target| {
            order.lock().unwrap().push(target);
            sink.lock().unwrap().reveal(target);
        });

        notifier.enter("projects-grid");
        assert!(watch.finish(RevealTarget::ProjectsGrid));
        assert!(!watch.finish(RevealTarget::ProjectsGrid));

        // scrolling past it again reaches nobody
        notifier.enter("projects-grid");
        assert_eq!(*entered.lock().unwrap(), vec![RevealTarget::ProjectsGrid]);
        assert!(seen.lock().unwrap().contains(RevealTarget::ProjectsGrid));
        assert!(watch.is_watching(RevealTarget::Hero));

        watch.cancel_all();
        assert_eq!(watch.len(), 0);
        assert_eq!(
            *notifier.stopped.lock().unwrap(),
            vec!["projects-grid".to_string(), "hero".to_string()]
        );
    }
}
