//! Single-threaded event sources with explicit subscription handles.
//!
//! An [`EventSource`] holds a list of handlers. Subscribing returns a
//! [`Subscription`]; dropping or disposing the handle removes the handler.
//! Everything here runs on one thread, so shared state is `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Handler<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Registry<T: 'static> {
    next_id: u64,
    handlers: Vec<(u64, Handler<T>)>,
}

/// A source of events of type `T`.
///
/// Cloning an event source yields another handle to the same handler list.
pub struct EventSource<T: 'static> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T: 'static> EventSource<T> {
    /// Creates an event source with no handlers.
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                handlers: Vec::new(),
            })),
        }
    }

    /// Registers a handler, returning the handle that keeps it registered.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&T) + 'static,
    {
        let handler: Handler<T> = Rc::new(RefCell::new(handler));
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.handlers.push((id, handler));
            id
        };

        let registry: Weak<RefCell<Registry<T>>> = Rc::downgrade(&self.registry);
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry
                    .borrow_mut()
                    .handlers
                    .retain(|(handler_id, _)| *handler_id != id);
            }
        })
    }

    /// Calls every registered handler, in subscription order.
    ///
    /// Handlers may subscribe or unsubscribe while the event is being
    /// delivered; the set of handlers called is fixed when `emit` starts.
    /// A handler that re-entrantly emits on its own source is not called a
    /// second time for the nested event.
    pub fn emit(&self, event: &T) {
        let handlers: Vec<Handler<T>> = self
            .registry
            .borrow()
            .handlers
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();

        for handler in handlers {
            match handler.try_borrow_mut() {
                Ok(mut handler) => (&mut *handler)(event),
                Err(_) => tracing::debug!("skipping re-entrant event handler"),
            }
        }
    }

    /// Number of currently registered handlers.
    pub fn handler_count(&self) -> usize {
        self.registry.borrow().handlers.len()
    }
}

impl<T: 'static> Clone for EventSource<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<T: 'static> Default for EventSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> fmt::Debug for EventSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventSource")
            .field("handlers", &self.handler_count())
            .finish()
    }
}

/// Handle to a registered event handler.
///
/// The handler stays registered for as long as the handle lives. Call
/// [`dispose`](Self::dispose) (or drop the handle) to unregister it, or
/// [`detach`](Self::detach) to leave it registered for the lifetime of the
/// event source.
#[must_use = "dropping a Subscription unregisters its handler"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Unregisters the handler.
    pub fn dispose(mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }

    /// Keeps the handler registered without holding on to the handle.
    pub fn detach(mut self) {
        self.unsubscribe = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_emit_calls_handlers_in_order() {
        let source = EventSource::<u32>::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = {
            let seen = Rc::clone(&seen);
            source.subscribe(move |n| seen.borrow_mut().push(("first", *n)))
        };
        let second = {
            let seen = Rc::clone(&seen);
            source.subscribe(move |n| seen.borrow_mut().push(("second", *n)))
        };

        source.emit(&7);
        assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7)]);

        drop(first);
        drop(second);
    }

    #[test]
    fn test_dispose_unregisters_handler() {
        let source = EventSource::<()>::new();
        let count = Rc::new(Cell::new(0));

        let sub = {
            let count = Rc::clone(&count);
            source.subscribe(move |_| count.set(count.get() + 1))
        };
        source.emit(&());
        sub.dispose();
        source.emit(&());

        assert_eq!(count.get(), 1);
        assert_eq!(source.handler_count(), 0);
    }

    #[test]
    fn test_drop_unregisters_handler() {
        let source = EventSource::<()>::new();
        {
            let _sub = source.subscribe(|_| {});
            assert_eq!(source.handler_count(), 1);
        }
        assert_eq!(source.handler_count(), 0);
    }

    #[test]
    fn test_detach_keeps_handler() {
        let source = EventSource::<()>::new();
        let count = Rc::new(Cell::new(0));
        {
            let count = Rc::clone(&count);
            source
                .subscribe(move |_| count.set(count.get() + 1))
                .detach();
        }
        source.emit(&());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_subscription_outliving_source_is_harmless() {
        let source = EventSource::<()>::new();
        let sub = source.subscribe(|_| {});
        drop(source);
        sub.dispose();
    }

    #[test]
    fn test_reentrant_emit_does_not_recurse() {
        let source = EventSource::<u32>::new();
        let count = Rc::new(Cell::new(0));

        let sub = {
            let inner = source.clone();
            let count = Rc::clone(&count);
            source.subscribe(move |n| {
                count.set(count.get() + 1);
                if *n == 0 {
                    inner.emit(&1);
                }
            })
        };

        source.emit(&0);
        assert_eq!(count.get(), 1);
        drop(sub);
    }
}
