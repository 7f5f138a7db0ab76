//! # Observer Module
//!
//! Publish/subscribe protocol between accounts and interested parties.
//! A [`Subject`] keeps weak handles to its observers so that registration
//! never extends an observer's lifetime; delivery is synchronous and in
//! attachment order.

use crate::error::CoreError;
use std::rc::{Rc, Weak};

/// Capability to receive push notifications from a subject.
///
/// An observer that fails is reported and skipped; it must not stop
/// delivery to observers attached after it.
pub trait Observer {
    /// Identifier used when logging delivery failures.
    fn name(&self) -> &str;

    /// Handle a notification message.
    fn update(&self, message: &str) -> Result<(), CoreError>;
}

/// Ordered registry of observers.
///
/// Attach never deduplicates: attaching the same observer twice delivers
/// every message twice. Detach removes the first matching registration and
/// is a no-op when the observer was never attached.
#[derive(Default)]
pub struct Subject {
    observers: Vec<Weak<dyn Observer>>,
}

impl Subject {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Register an observer. Only a weak handle is kept; the caller owns
    /// the observer's lifetime.
    pub fn attach(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(Rc::downgrade(&observer));
    }

    /// Remove the first registration of this observer, by identity.
    pub fn detach(&mut self, observer: Rc<dyn Observer>) {
        let target = Rc::as_ptr(&observer) as *const ();
        if let Some(pos) = self.observers.iter().position(|weak| {
            weak.upgrade()
                .map(|live| Rc::as_ptr(&live) as *const () == target)
                .unwrap_or(false)
        }) {
            self.observers.remove(pos);
        }
    }

    /// Deliver a message to every live observer, in attachment order.
    ///
    /// A failing observer is logged and skipped. Observers that have been
    /// dropped since attachment are silently passed over.
    pub fn notify(&self, message: &str) {
        for weak in &self.observers {
            let Some(observer) = weak.upgrade() else {
                continue;
            };
            if let Err(err) = observer.update(message) {
                tracing::warn!(
                    observer = observer.name(),
                    error = %err,
                    "observer update failed"
                );
            }
        }
    }

    /// Number of registrations whose observer is still alive.
    pub fn live_observers(&self) -> usize {
        self.observers
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Recorder {
        label: String,
        log: Rc<RefCell<Vec<String>>>,
        fail: bool,
    }

    impl Recorder {
        fn new(label: &str, log: Rc<RefCell<Vec<String>>>) -> Rc<Self> {
            Rc::new(Self {
                label: label.to_string(),
                log,
                fail: false,
            })
        }

        fn failing(label: &str, log: Rc<RefCell<Vec<String>>>) -> Rc<Self> {
            Rc::new(Self {
                label: label.to_string(),
                log,
                fail: true,
            })
        }
    }

    impl Observer for Recorder {
        fn name(&self) -> &str {
            &self.label
        }

        fn update(&self, message: &str) -> Result<(), CoreError> {
            if self.fail {
                return Err(CoreError::NotificationFailed(self.label.clone()));
            }
            self.log.borrow_mut().push(format!("{}:{}", self.label, message));
            Ok(())
        }
    }

    #[test]
    fn test_notify_in_attachment_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let first = Recorder::new("first", log.clone());
        let second = Recorder::new("second", log.clone());

        let mut subject = Subject::new();
        subject.attach(first.clone());
        subject.attach(second.clone());
        subject.notify("hello");

        assert_eq!(
            *log.borrow(),
            vec!["first:hello".to_string(), "second:hello".to_string()]
        );
    }

    #[test]
    fn test_attach_does_not_deduplicate() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let observer = Recorder::new("obs", log.clone());

        let mut subject = Subject::new();
        subject.attach(observer.clone());
        subject.attach(observer.clone());
        subject.notify("twice");

        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_detach_removes_one_registration() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let observer = Recorder::new("obs", log.clone());

        let mut subject = Subject::new();
        subject.attach(observer.clone());
        subject.attach(observer.clone());
        subject.detach(observer.clone());
        subject.notify("once");

        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_detach_absent_is_noop() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let attached = Recorder::new("attached", log.clone());
        let stranger = Recorder::new("stranger", log.clone());

        let mut subject = Subject::new();
        subject.attach(attached.clone());
        subject.detach(stranger);
        subject.notify("still here");

        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_failing_observer_does_not_block_later_ones() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let broken = Recorder::failing("broken", log.clone());
        let healthy = Recorder::new("healthy", log.clone());

        let mut subject = Subject::new();
        subject.attach(broken.clone());
        subject.attach(healthy.clone());
        subject.notify("alert");

        assert_eq!(*log.borrow(), vec!["healthy:alert".to_string()]);
    }

    #[test]
    fn test_dropped_observer_is_skipped() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let keeper = Recorder::new("keeper", log.clone());

        let mut subject = Subject::new();
        {
            let transient = Recorder::new("transient", log.clone());
            subject.attach(transient.clone());
        }
        subject.attach(keeper.clone());

        assert_eq!(subject.live_observers(), 1);
        subject.notify("survivors only");
        assert_eq!(*log.borrow(), vec!["keeper:survivors only".to_string()]);
    }
}
