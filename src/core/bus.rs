//! Cross-component event bus.
//!
//! A typed publish/subscribe channel scoped to the page's lifetime.
//! Sibling components that are not in a parent-child relationship
//! (menu, sliders, transition links) coordinate through it instead of
//! through ad-hoc upward method injection or ambient browser events.
//!
//! Fan-out is synchronous: subscribers run before
//! [`EventBus::publish`] returns, in subscription order, with no
//! cross-event ordering contract. [`EventBus::subscribe`] returns a
//! [`Subscription`] disposer; components tie it to their cleanup so a
//! handler can never fire into unmounted state. Execution is
//! single-threaded (one browser event loop); the lock only satisfies
//! the `Send + Sync` bounds of the surrounding reactive runtime and is
//! never contended.

use std::sync::{Arc, Mutex, Weak};

use crate::core::menu::MenuSection;

/// Events exchanged between sibling components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEvent {
    /// Expand the menu belt directly to a section.
    OpenMenuSection(MenuSection),
    /// A page transition is starting; content should fade out now.
    PageTransitionStart {
        /// Whether the project-info panel should fade as well.
        fade_out_project_info: bool,
    },
    /// Flip the project gallery between slideshow and grid.
    ToggleGridView,
}

type Handler = Arc<dyn Fn(&AppEvent) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

/// Page-scoped publish/subscribe channel. Cheap to clone; all clones
/// share one subscriber registry.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Arc<Mutex<Registry>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for every published event.
    ///
    /// The handler stays registered until the returned [`Subscription`]
    /// is dropped.
    #[must_use = "dropping the subscription immediately unsubscribes the handler"]
    pub fn subscribe(&self, handler: impl Fn(&AppEvent) + Send + Sync + 'static) -> Subscription {
        let id = {
            let Ok(mut registry) = self.inner.lock() else {
                return Subscription {
                    registry: Weak::new(),
                    id: 0,
                };
            };
            let id = registry.next_id;
            registry.next_id += 1;
            registry.handlers.push((id, Arc::new(handler)));
            id
        };
        Subscription {
            registry: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Notify all current subscribers synchronously.
    pub fn publish(&self, event: &AppEvent) {
        // Snapshot the handler list outside the lock so subscribers
        // may subscribe or unsubscribe while the fan-out is running.
        let snapshot: Vec<Handler> = {
            let Ok(registry) = self.inner.lock() else {
                return;
            };
            registry
                .handlers
                .iter()
                .map(|(_, handler)| Arc::clone(handler))
                .collect()
        };
        for handler in snapshot {
            handler(event);
        }
    }
}

/// Disposer for one subscription; unsubscribes on drop.
pub struct Subscription {
    registry: Weak<Mutex<Registry>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade()
            && let Ok(mut registry) = registry.lock()
        {
            let id = self.id;
            registry.handlers.retain(|(handler_id, _)| *handler_id != id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn publish_reaches_all_subscribers() {
        let bus = EventBus::new();
        let count = Arc::new(AtomicUsize::new(0));

        let c1 = Arc::clone(&count);
        let _s1 = bus.subscribe(move |_| {
            c1.fetch_add(1, Ordering::Relaxed);
        });
        let c2 = Arc::clone(&count);
        let _s2 = bus.subscribe(move |_| {
            c2.fetch_add(1, Ordering::Relaxed);
        });

        bus.publish(&AppEvent::ToggleGridView);
        assert_eq!(count.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn dropped_subscription_stops_firing() {
        let bus = EventBus::new();
        let count = Arc::new(AtomicUsize::new(0));

        let c = Arc::clone(&count);
        let sub = bus.subscribe(move |_| {
            c.fetch_add(1, Ordering::Relaxed);
        });

        bus.publish(&AppEvent::ToggleGridView);
        drop(sub);
        bus.publish(&AppEvent::ToggleGridView);

        assert_eq!(count.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn payloads_are_delivered_intact() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let s = Arc::clone(&seen);
        let _sub = bus.subscribe(move |event| {
            s.lock().expect("test lock").push(event.clone());
        });

        bus.publish(&AppEvent::OpenMenuSection(MenuSection::ProjectInfo));
        bus.publish(&AppEvent::PageTransitionStart {
            fade_out_project_info: true,
        });

        assert_eq!(
            *seen.lock().expect("test lock"),
            vec![
                AppEvent::OpenMenuSection(MenuSection::ProjectInfo),
                AppEvent::PageTransitionStart {
                    fade_out_project_info: true
                },
            ]
        );
    }

    #[test]
    fn subscribing_during_publish_does_not_deadlock() {
        let bus = EventBus::new();
        let late = Arc::new(AtomicUsize::new(0));

        let bus2 = bus.clone();
        let late2 = Arc::clone(&late);
        let extra: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
        let extra2 = Arc::clone(&extra);
        let _sub = bus.subscribe(move |_| {
            let mut slot = extra2.lock().expect("test lock");
            if slot.is_none() {
                let l = Arc::clone(&late2);
                *slot = Some(bus2.subscribe(move |_| {
                    l.fetch_add(1, Ordering::Relaxed);
                }));
            }
        });

        // First publish registers the late subscriber but must not
        // deliver the in-flight event to it.
        bus.publish(&AppEvent::ToggleGridView);
        assert_eq!(late.load(Ordering::Relaxed), 0);

        bus.publish(&AppEvent::ToggleGridView);
        assert_eq!(late.load(Ordering::Relaxed), 1);
    }
}
