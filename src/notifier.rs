// Observer: telling the baristas about new orders.
//
// Listeners are notified synchronously, in the order they were attached.
// The source is single-threaded, so listeners are shared as Rc<RefCell<_>>.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::error::NotifyError;
use crate::phrasebook::Phrasebook;

pub trait Listener {
    fn update(&mut self, message: &str);
}

pub type SharedListener = Rc<RefCell<dyn Listener>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

// ============================================================================
// Order source
// ============================================================================

pub struct OrderSource {
    listeners: Vec<(ListenerId, SharedListener)>,
    next_id: u64,
    limit: Option<usize>,
}

impl OrderSource {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
            limit: None,
        }
    }

    /// A source that accepts at most `limit` listeners.
    pub fn bounded(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::new()
        }
    }

    /// Appends `listener`. The same listener may be attached more than once
    /// and is then notified once per attachment.
    pub fn attach(&mut self, listener: SharedListener) -> Result<ListenerId, NotifyError> {
        if let Some(limit) = self.limit {
            if self.listeners.len() >= limit {
                return Err(NotifyError::SubscriberLimit { limit });
            }
        }

        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        debug!("attached listener {:?} ({} total)", id, self.listeners.len());
        Ok(id)
    }

    /// Removes the listener attached under `id`. Returns false if it is not
    /// attached.
    pub fn detach(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(attached, _)| *attached != id);
        let removed = self.listeners.len() != before;
        if removed {
            debug!("detached listener {:?}", id);
        }
        removed
    }

    /// Delivers `message` to every listener in attachment order and returns
    /// how many were reached.
    pub fn notify(&self, message: &str) -> usize {
        debug!("notifying {} listener(s): {}", self.listeners.len(), message);
        for (_, listener) in &self.listeners {
            listener.borrow_mut().update(message);
        }
        self.listeners.len()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl Default for OrderSource {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Barista
// ============================================================================

/// Prints a receipt line for every order and keeps it in its inbox.
#[derive(Debug)]
pub struct Barista {
    name: String,
    phrases: &'static Phrasebook,
    inbox: Vec<String>,
}

impl Barista {
    pub fn new(name: impl Into<String>, phrases: &'static Phrasebook) -> Self {
        Self {
            name: name.into(),
            phrases,
            inbox: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inbox(&self) -> &[String] {
        &self.inbox
    }
}

impl Listener for Barista {
    fn update(&mut self, message: &str) {
        let receipt = self.phrases.order_received(message);
        println!("{}", receipt);
        self.inbox.push(receipt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Records (tag, message) pairs into a log shared by every recorder.
    struct Recorder {
        tag: usize,
        log: Rc<RefCell<Vec<(usize, String)>>>,
    }

    impl Listener for Recorder {
        fn update(&mut self, message: &str) {
            self.log.borrow_mut().push((self.tag, message.to_string()));
        }
    }

    fn recorder(tag: usize, log: &Rc<RefCell<Vec<(usize, String)>>>) -> SharedListener {
        Rc::new(RefCell::new(Recorder {
            tag,
            log: Rc::clone(log),
        }))
    }

    #[test]
    fn test_barista_receives_order() {
        let mut source = OrderSource::new();
        let barista = Rc::new(RefCell::new(Barista::new("Olena", Phrasebook::english())));
        source.attach(barista.clone()).unwrap();

        assert_eq!(source.notify("New order: Cappuccino"), 1);
        assert_eq!(
            barista.borrow().inbox(),
            ["Barista received the order: New order: Cappuccino"]
        );
    }

    #[test]
    fn test_notify_without_listeners() {
        let source = OrderSource::new();
        assert!(source.is_empty());
        assert_eq!(source.notify("nobody listens"), 0);
    }

    #[test]
    fn test_duplicate_attach_notifies_twice() {
        let mut source = OrderSource::new();
        let barista = Rc::new(RefCell::new(Barista::new("Taras", Phrasebook::english())));
        source.attach(barista.clone()).unwrap();
        source.attach(barista.clone()).unwrap();

        source.notify("Latte");
        assert_eq!(barista.borrow().inbox().len(), 2);
    }

    #[test]
    fn test_detach_keeps_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut source = OrderSource::new();
        let ids: Vec<ListenerId> = (0..4)
            .map(|tag| source.attach(recorder(tag, &log)).unwrap())
            .collect();

        assert!(source.detach(ids[1]));
        assert!(!source.detach(ids[1]));
        assert_eq!(source.len(), 3);

        source.notify("Mocha");
        let tags: Vec<usize> = log.borrow().iter().map(|(tag, _)| *tag).collect();
        assert_eq!(tags, vec![0, 2, 3]);
    }

    #[test]
    fn test_bounded_source() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut source = OrderSource::bounded(2);
        source.attach(recorder(0, &log)).unwrap();
        source.attach(recorder(1, &log)).unwrap();

        let err = source.attach(recorder(2, &log)).unwrap_err();
        assert_eq!(err, NotifyError::SubscriberLimit { limit: 2 });
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn test_bounded_source_frees_slot_on_detach() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut source = OrderSource::bounded(1);
        let id = source.attach(recorder(0, &log)).unwrap();
        assert!(source.attach(recorder(1, &log)).is_err());

        source.detach(id);
        assert!(source.attach(recorder(1, &log)).is_ok());
    }

    proptest! {
        #[test]
        fn test_each_listener_updated_once_in_order(n in 0usize..16, msg in ".*") {
            let log = Rc::new(RefCell::new(Vec::new()));
            let mut source = OrderSource::new();
            for tag in 0..n {
                source.attach(recorder(tag, &log)).unwrap();
            }

            prop_assert_eq!(source.notify(&msg), n);

            let expected: Vec<(usize, String)> = (0..n).map(|tag| (tag, msg.clone())).collect();
            prop_assert_eq!(log.borrow().clone(), expected);
        }
    }
}
