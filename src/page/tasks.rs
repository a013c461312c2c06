use std::collections::HashMap;

/// Deferred work the page controller schedules on a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    /// Start watching fade-in elements once they exist in the rendered tree.
    AttachReveal,
    /// Close the "message sent" window and reset the form.
    ClearSubmission,
}

/// Something that can be stopped before it fires: a timeout, an observer, a
/// listener.
pub trait Cancel {
    fn cancel(self);
}

/// Identifies one scheduling of a [`Task`]. A ticket goes stale when its task
/// is rescheduled, cancelled, or torn down, and a stale ticket never fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub task: Task,
    generation: u64,
}

/// Timer handles for every task that is scheduled but has not fired yet.
///
/// At most one instance of each [`Task`] is pending; scheduling it again
/// cancels the earlier one.
#[derive(Debug)]
pub struct PendingTasks<H: Cancel> {
    pending: HashMap<Task, (u64, H)>,
    next_generation: u64,
}

impl<H: Cancel> Default for PendingTasks<H> {
    fn default() -> Self {
        Self {
            pending: HashMap::new(),
            next_generation: 0,
        }
    }
}

impl<H: Cancel> PendingTasks<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves a ticket for `task`. The caller creates the timer with the
    /// ticket captured, then hands the timer's handle to [`Self::insert`].
    pub fn reserve(&mut self, task: Task) -> Ticket {
        let generation = self.next_generation;
        self.next_generation += 1;
        Ticket { task, generation }
    }

    pub fn insert(&mut self, ticket: Ticket, handle: H) {
        if let Some((_, previous)) = self
            .pending
            .insert(ticket.task, (ticket.generation, handle))
        {
            previous.cancel();
        }
    }

    /// Called from the timer callback. Returns whether the ticket is still the
    /// live one; if so, the task is no longer pending.
    pub fn complete(&mut self, ticket: Ticket) -> bool {
        match self.pending.get(&ticket.task) {
            Some((generation, _)) if *generation == ticket.generation => {
                self.pending.remove(&ticket.task);
                true
            }
            _ => false,
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, (_, handle)) in self.pending.drain() {
            handle.cancel();
        }
    }

    #[cfg(test)]
    pub fn is_pending(&self, task: Task) -> bool {
        self.pending.contains_key(&task)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[derive(Debug)]
    struct FakeTimer {
        id: u32,
        cancelled: Rc<RefCell<Vec<u32>>>,
    }

    impl Cancel for FakeTimer {
        fn cancel(self) {
            self.cancelled.borrow_mut().push(self.id);
        }
    }

    fn timer(id: u32, log: &Rc<RefCell<Vec<u32>>>) -> FakeTimer {
        FakeTimer {
            id,
            cancelled: log.clone(),
        }
    }

    #[test]
    fn fired_task_completes_once() {
        let log = Rc::default();
        let mut tasks = PendingTasks::new();
        let ticket = tasks.reserve(Task::ClearSubmission);
        tasks.insert(ticket, timer(1, &log));
        assert!(tasks.is_pending(Task::ClearSubmission));

        assert!(tasks.complete(ticket));
        assert!(!tasks.complete(ticket));
        assert!(tasks.is_empty());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn rescheduling_cancels_previous_and_stales_its_ticket() {
        let log = Rc::default();
        let mut tasks = PendingTasks::new();
        let first = tasks.reserve(Task::ClearSubmission);
        tasks.insert(first, timer(1, &log));
        let second = tasks.reserve(Task::ClearSubmission);
        tasks.insert(second, timer(2, &log));

        assert_eq!(*log.borrow(), vec![1]);
        assert_eq!(tasks.len(), 1);
        assert!(!tasks.complete(first));
        assert!(tasks.complete(second));
    }

    #[test]
    fn distinct_tasks_coexist() {
        let log = Rc::default();
        let mut tasks = PendingTasks::new();
        let reveal = tasks.reserve(Task::AttachReveal);
        tasks.insert(reveal, timer(1, &log));
        let clear = tasks.reserve(Task::ClearSubmission);
        tasks.insert(clear, timer(2, &log));
        assert_eq!(tasks.len(), 2);

        assert!(tasks.complete(reveal));
        assert!(tasks.is_pending(Task::ClearSubmission));
        assert!(tasks.complete(clear));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn teardown_cancels_everything() {
        let log = Rc::default();
        let mut tasks = PendingTasks::new();
        let reveal = tasks.reserve(Task::AttachReveal);
        tasks.insert(reveal, timer(1, &log));
        let clear = tasks.reserve(Task::ClearSubmission);
        tasks.insert(clear, timer(2, &log));

        tasks.cancel_all();
        let mut cancelled = log.borrow().clone();
        cancelled.sort();
        assert_eq!(cancelled, vec![1, 2]);
        assert!(!tasks.complete(reveal));
        assert!(!tasks.complete(clear));
    }
}
