//! Single-threaded observable value.
//!
//! `Store<T>` is a shared slot (`Rc<RefCell<..>>`) that calls every
//! subscriber with the new value on each `set`. Subscribers are also called
//! once with the current value when they register, so a late subscriber never
//! misses the state it should render.
//!
//! # Invariants
//!
//! 1. Every `set` notifies, even when the new value equals the old one.
//! 2. Subscribers are notified in registration order.
//! 3. A `set` made from inside a subscriber updates the value immediately but
//!    its notifications run after the current round, so every subscriber sees
//!    values in the order they were set.
//! 4. Dropping or unsubscribing a [`Subscription`] removes the callback before
//!    the next notification round.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

type Observer<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    subscribers: Vec<(u64, Observer<T>)>,
    next_id: u64,
    notifying: bool,
    pending: VecDeque<T>,
}

/// Handle to an observable slot. Clones share the same slot.
pub struct Store<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T: Clone + 'static> Store<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value: initial,
                subscribers: Vec::new(),
                next_id: 0,
                notifying: false,
                pending: VecDeque::new(),
            })),
        }
    }

    /// Replace the value and notify subscribers before returning.
    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.value = value.clone();
            inner.pending.push_back(value);
            if inner.notifying {
                return;
            }
            inner.notifying = true;
        }
        self.drain();
    }

    /// Set the value computed from the current one.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.inner.borrow().value);
        self.set(next);
    }

    /// Clone of the latest value.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Borrow the latest value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Register `observer`. It is called right away with the current value and
    /// again after every `set` until the returned handle is unsubscribed or
    /// dropped.
    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) -> Subscription {
        let observer: Observer<T> = Rc::new(observer);
        let (id, current) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, Rc::clone(&observer)));
            (id, inner.value.clone())
        };

        observer(&current);

        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            remove: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner
                        .borrow_mut()
                        .subscribers
                        .retain(|(subscriber_id, _)| *subscriber_id != id);
                }
            })),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    fn drain(&self) {
        loop {
            // No borrow is held while observers run, so they may read or set
            // the store themselves.
            let next = {
                let mut inner = self.inner.borrow_mut();
                match inner.pending.pop_front() {
                    Some(value) => {
                        let observers: Vec<Observer<T>> = inner
                            .subscribers
                            .iter()
                            .map(|(_, observer)| Rc::clone(observer))
                            .collect();
                        Some((value, observers))
                    }
                    None => {
                        inner.notifying = false;
                        None
                    }
                }
            };

            let Some((value, observers)) = next else {
                break;
            };
            for observer in observers {
                observer(&value);
            }
        }
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Default + 'static> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Store")
            .field("value", &inner.value)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

/// Registration handle returned by [`Store::subscribe`].
///
/// Dropping the handle unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    remove: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Stop receiving values. Calling it again is a no-op.
    pub fn unsubscribe(&mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }

    /// Keep the observer registered for the lifetime of the store.
    pub fn detach(mut self) {
        self.remove = None;
    }

    pub fn is_active(&self) -> bool {
        self.remove.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
