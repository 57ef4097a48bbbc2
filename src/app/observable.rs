//! Single-threaded observable value holder.
//!
//! [`Observable`] keeps the latest value and multicasts every new value to its
//! subscribers, in registration order, before `set` returns. New subscribers
//! receive the current value immediately.
//!
//! Subscribers are stored as `Weak` callbacks; the strong reference lives in the
//! [`Subscription`] guard, so dropping the guard unsubscribes. Dead entries are
//! pruned on the next `set`.
//!
//! No `RefCell` borrow is held while callbacks run, so a callback may read the
//! observable or trigger another `set`. A nested `set` supersedes the one in
//! progress: subscribers not yet notified only see the newer value.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = dyn Fn(&T);

struct Inner<T> {
    value: T,
    version: u64,
    subscribers: Vec<Weak<Callback<T>>>,
}

/// Shared handle to an observed value.
///
/// Cloning the handle shares the same value and subscriber list.
///
/// # Example
///
/// ```rust
/// use shelfview::app::Observable;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let titles = Observable::new(vec!["Dune".to_string()]);
/// let seen = Rc::new(RefCell::new(Vec::new()));
///
/// let sink = Rc::clone(&seen);
/// let subscription = titles.subscribe(move |value: &Vec<String>| sink.borrow_mut().push(value.len()));
///
/// titles.set(vec![]);
/// drop(subscription);
/// titles.set(vec!["Emma".to_string()]);
///
/// assert_eq!(*seen.borrow(), vec![1, 0]);
/// ```
pub struct Observable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

/// Guard keeping a subscriber registered.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription<T> {
    _callback: Rc<Callback<T>>,
}

impl<T> Subscription<T> {
    /// Unsubscribes explicitly. Equivalent to dropping the guard.
    pub fn unsubscribe(self) {}
}

impl<T> fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

impl<T: Clone + 'static> Observable<T> {
    /// Creates an observable holding `value`, with no subscribers.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Returns a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Runs `f` against the current value without cloning it.
    ///
    /// `f` must not call [`set`](Self::set) on this observable.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Number of values published since creation.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .filter(|s| s.strong_count() > 0)
            .count()
    }

    /// Stores `value` and notifies every live subscriber.
    pub fn set(&self, value: T) {
        let (snapshot, version, callbacks) = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value;
            inner.version = inner.version.wrapping_add(1);
            inner.subscribers.retain(|s| s.strong_count() > 0);

            let callbacks: Vec<Rc<Callback<T>>> =
                inner.subscribers.iter().filter_map(Weak::upgrade).collect();
            (inner.value.clone(), inner.version, callbacks)
        };

        for callback in callbacks {
            if self.version() != version {
                break;
            }
            callback(&snapshot);
        }
    }

    /// Registers `callback` and immediately calls it with the current value.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription<T> {
        let callback: Rc<Callback<T>> = Rc::new(callback);
        let current = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.push(Rc::downgrade(&callback));
            inner.value.clone()
        };

        callback(&current);

        Subscription {
            _callback: callback,
        }
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<i32>>>, impl Fn(&i32) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |v: &i32| sink.borrow_mut().push(*v))
    }

    #[test]
    fn subscribe_replays_current_value() {
        let observable = Observable::new(5);
        let (seen, callback) = recorder();

        let _sub = observable.subscribe(callback);

        assert_eq!(*seen.borrow(), vec![5]);
    }

    #[test]
    fn set_notifies_in_registration_order() {
        let observable = Observable::new(0);
        let order = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&order);
        let _a = observable.subscribe(move |v: &i32| first.borrow_mut().push(("a", *v)));
        let second = Rc::clone(&order);
        let _b = observable.subscribe(move |v: &i32| second.borrow_mut().push(("b", *v)));

        order.borrow_mut().clear();
        observable.set(1);

        assert_eq!(*order.borrow(), vec![("a", 1), ("b", 1)]);
        assert_eq!(observable.version(), 1);
    }

    #[test]
    fn dropping_subscription_stops_delivery() {
        let observable = Observable::new(0);
        let (seen, callback) = recorder();

        let sub = observable.subscribe(callback);
        observable.set(1);
        sub.unsubscribe();
        observable.set(2);

        assert_eq!(*seen.borrow(), vec![0, 1]);
        assert_eq!(observable.subscriber_count(), 0);
        assert_eq!(observable.get(), 2);
    }

    #[test]
    fn callback_may_set_again() {
        let observable = Observable::new(0);
        let handle = observable.clone();
        let _bump = observable.subscribe(move |v: &i32| {
            if *v == 1 {
                handle.set(2);
            }
        });
        let (seen, callback) = recorder();
        let _watch = observable.subscribe(callback);

        observable.set(1);

        assert_eq!(observable.get(), 2);
        assert_eq!(*seen.borrow(), vec![0, 2]);
    }
}
