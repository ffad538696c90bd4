//! A watcher that runs without a browser.
//!
//! [`HeadlessObserver`] computes the same notifications a browser would, from geometry supplied
//! through a [`Layout`]. Nothing happens on its own: call [`HeadlessObserver::update()`] whenever
//! the layout changed, which is where a browser would run its "update intersection observations"
//! step of the event loop.
//!
//! Only the root box is used for clipping; ancestors of the target between it and the root are
//! not modeled.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::mem;
use std::rc::Rc;
#[cfg(not(web_platform))]
use std::time::Instant;

#[cfg(web_platform)]
use web_time::Instant;

use crate::entry::VisibilityEntry;
use crate::geometry::Rect;
use crate::observe::Observe;
use crate::options::WatcherOptions;

/// The geometry a [`HeadlessObserver`] is evaluated against.
pub trait Layout<T> {
    /// The top-level viewport, used when no root is configured.
    fn viewport(&self) -> Rect;

    /// The bounding box of `target`, or `None` when it isn't laid out.
    fn bounds(&self, target: &T) -> Option<Rect>;
}

/// A flat [`Layout`]: a viewport and a bounding box per target, in page coordinates.
#[derive(Debug, Clone)]
pub struct Scene<T> {
    viewport: Rect,
    bounds: HashMap<T, Rect>,
}

impl<T: Eq + Hash> Scene<T> {
    pub fn new(viewport: Rect) -> Self {
        Self { viewport, bounds: HashMap::new() }
    }

    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// Scrolls the viewport by the given offset.
    pub fn scroll_by(&mut self, dx: f64, dy: f64) {
        self.viewport = self.viewport.translate(dx, dy);
    }

    /// Places `target`, replacing its previous box.
    pub fn place(&mut self, target: T, bounds: Rect) -> Option<Rect> {
        self.bounds.insert(target, bounds)
    }

    pub fn remove(&mut self, target: &T) -> Option<Rect> {
        self.bounds.remove(target)
    }
}

impl<T: Eq + Hash> Layout<T> for Scene<T> {
    fn viewport(&self) -> Rect {
        self.viewport
    }

    fn bounds(&self, target: &T) -> Option<Rect> {
        self.bounds.get(target).copied()
    }
}

type Callback<T> = Box<dyn FnMut(&[VisibilityEntry<T>], &HeadlessObserver<T>)>;

struct Registration<T> {
    target: T,
    // `None` until the first update, so that one always notifies.
    previous_threshold_index: Option<usize>,
    previous_is_intersecting: bool,
}

struct State<T> {
    options: WatcherOptions<T>,
    registrations: Vec<Registration<T>>,
    queue: Vec<VisibilityEntry<T>>,
}

struct Inner<T> {
    state: RefCell<State<T>>,
    // Taken out while the callback runs.
    callback: RefCell<Option<Callback<T>>>,
    origin: Instant,
}

/// A visibility watcher evaluated against a [`Layout`].
///
/// Cloning yields another handle to the same watcher.
pub struct HeadlessObserver<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for HeadlessObserver<T> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<T: fmt::Debug> fmt::Debug for HeadlessObserver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.state.try_borrow() {
            Ok(state) => f
                .debug_struct("HeadlessObserver")
                .field("options", &state.options)
                .field("observed", &state.registrations.iter().map(|r| &r.target).collect::<Vec<_>>())
                .finish_non_exhaustive(),
            Err(_) => f.debug_struct("HeadlessObserver").finish_non_exhaustive(),
        }
    }
}

impl<T> HeadlessObserver<T>
where
    T: Clone + PartialEq + fmt::Debug + 'static,
{
    pub fn new<F>(callback: F, options: WatcherOptions<T>) -> Self
    where
        F: 'static + FnMut(&[VisibilityEntry<T>], &HeadlessObserver<T>),
    {
        let state = State { options, registrations: Vec::new(), queue: Vec::new() };
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(state),
                callback: RefCell::new(Some(Box::new(callback))),
                origin: Instant::now(),
            }),
        }
    }

    /// Whether `target` is currently watched.
    pub fn is_observing(&self, target: &T) -> bool {
        self.inner.state.borrow().registrations.iter().any(|r| r.target == *target)
    }

    /// The watched targets, in the order they were added.
    pub fn observed(&self) -> Vec<T> {
        self.inner.state.borrow().registrations.iter().map(|r| r.target.clone()).collect()
    }

    /// Drains the entries that were queued but not delivered yet.
    ///
    /// Entries are only ever pending while the callback runs, see [`update()`](Self::update).
    pub fn take_records(&self) -> Vec<VisibilityEntry<T>> {
        mem::take(&mut self.inner.state.borrow_mut().queue)
    }

    /// Recomputes every watched target against `layout` and delivers the resulting entries to
    /// the callback in a single batch. Returns the number of entries delivered.
    ///
    /// The callback may call back into the watcher, including `update()`. An update from inside
    /// the callback only queues its entries; the outer call delivers them once the callback
    /// returns.
    pub fn update<L>(&self, layout: &L) -> usize
    where
        L: Layout<T> + ?Sized,
    {
        self.queue_entries(layout);

        let Some(mut callback) = CallbackGuard::take(&self.inner.callback) else {
            tracing::trace!("update from inside the callback, delivery deferred");
            return 0;
        };

        let mut delivered = 0;
        loop {
            let batch = self.take_records();
            if batch.is_empty() {
                break;
            }
            tracing::debug!(entries = batch.len(), "delivering visibility entries");
            delivered += batch.len();
            callback.call(&batch, self);
            // Entries queued by a nested update are part of this delivery.
        }

        delivered
    }

    fn queue_entries<L>(&self, layout: &L)
    where
        L: Layout<T> + ?Sized,
    {
        let time = self.inner.origin.elapsed();
        let mut state = self.inner.state.borrow_mut();
        let State { options, registrations, queue } = &mut *state;

        let root_bounds = match &options.root {
            None => Some(layout.viewport()),
            Some(root) => layout.bounds(root),
        }
        .map(|root| options.root_margin.apply(root));

        for registration in registrations.iter_mut() {
            let Some(target_rect) = layout.bounds(&registration.target) else {
                tracing::warn!(observed = ?registration.target, "observed target has no layout");
                continue;
            };

            let intersection = root_bounds.and_then(|root| target_rect.intersection(&root));
            let is_intersecting = intersection.is_some();
            let intersection_rect = intersection.unwrap_or(Rect::ZERO);

            let target_area = target_rect.area();
            let intersection_ratio = if target_area > 0.0 {
                (intersection_rect.area() / target_area).clamp(0.0, 1.0)
            } else if is_intersecting {
                1.0
            } else {
                0.0
            };

            let threshold_index = options.thresholds.index_for(intersection_ratio);
            if registration.previous_threshold_index == Some(threshold_index)
                && registration.previous_is_intersecting == is_intersecting
            {
                continue;
            }

            registration.previous_threshold_index = Some(threshold_index);
            registration.previous_is_intersecting = is_intersecting;

            queue.push(VisibilityEntry {
                time,
                root_bounds,
                bounding_client_rect: target_rect,
                intersection_rect,
                is_intersecting,
                intersection_ratio,
                target: registration.target.clone(),
            });
        }
    }
}

/// The callback, out of its slot while it runs. Dropping the guard puts it back, also when the
/// callback panics.
struct CallbackGuard<'a, T> {
    slot: &'a RefCell<Option<Callback<T>>>,
    callback: Option<Callback<T>>,
}

impl<'a, T> CallbackGuard<'a, T> {
    fn take(slot: &'a RefCell<Option<Callback<T>>>) -> Option<Self> {
        let callback = slot.borrow_mut().take()?;
        Some(Self { slot, callback: Some(callback) })
    }

    fn call(&mut self, entries: &[VisibilityEntry<T>], observer: &HeadlessObserver<T>) {
        if let Some(callback) = self.callback.as_mut() {
            callback(entries, observer);
        }
    }
}

impl<T> Drop for CallbackGuard<'_, T> {
    fn drop(&mut self) {
        *self.slot.borrow_mut() = self.callback.take();
    }
}

impl<T> Observe for HeadlessObserver<T>
where
    T: Clone + PartialEq + fmt::Debug + 'static,
{
    type Target = T;

    fn observe(&self, target: &T) {
        let mut state = self.inner.state.borrow_mut();
        if state.registrations.iter().any(|r| r.target == *target) {
            return;
        }

        tracing::debug!(observed = ?target, "observe");
        state.registrations.push(Registration {
            target: target.clone(),
            previous_threshold_index: None,
            previous_is_intersecting: false,
        });
    }

    fn unobserve(&self, target: &T) {
        let mut state = self.inner.state.borrow_mut();
        let before = state.registrations.len();
        state.registrations.retain(|r| r.target != *target);
        if state.registrations.len() != before {
            tracing::debug!(observed = ?target, "unobserve");
            state.queue.retain(|entry| entry.target != *target);
        }
    }

    fn disconnect(&self) {
        let mut state = self.inner.state.borrow_mut();
        tracing::debug!(targets = state.registrations.len(), "disconnect");
        state.registrations.clear();
        state.queue.clear();
    }
}
