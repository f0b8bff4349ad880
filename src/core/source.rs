//! Progress sources
//!
//! Drivers read scroll-derived values through the [`ProgressSource`]
//! capability and never touch the browser directly. The browser layer
//! (`ui::scroll`) feeds measurements in; tests feed them by hand.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use super::progress::{ElementGeometry, Progress, ScrollMetrics, ScrollWindow};
use super::reveal::EntranceFlag;

/// Callback invoked with the new value whenever a source changes.
pub type OnChange = Rc<dyn Fn(Progress)>;

/// A continuously updating progress value.
pub trait ProgressSource {
    fn current_value(&self) -> Progress;

    /// Register `on_change`. The callback stays registered until the
    /// returned [`Subscription`] is dropped.
    fn subscribe(&self, on_change: OnChange) -> Subscription;
}

#[derive(Default)]
struct ListenerList {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(u64, OnChange)>>,
}

/// Registered change listeners shared between a source and its subscriptions.
#[derive(Default, Clone)]
struct Listeners(Rc<ListenerList>);

impl Listeners {
    fn add(&self, on_change: OnChange) -> Subscription {
        let id = self.0.next_id.get();
        self.0.next_id.set(id + 1);
        self.0.entries.borrow_mut().push((id, on_change));
        Subscription {
            id,
            list: Rc::downgrade(&self.0),
        }
    }

    fn notify(&self, value: Progress) {
        // Snapshot so callbacks may subscribe or unsubscribe re-entrantly.
        let snapshot: Vec<OnChange> = self
            .0
            .entries
            .borrow()
            .iter()
            .map(|(_, f)| Rc::clone(f))
            .collect();
        for on_change in snapshot {
            on_change(value);
        }
    }

    fn len(&self) -> usize {
        self.0.entries.borrow().len()
    }
}

/// Handle keeping a listener registered. Unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    list: Weak<ListenerList>,
}

impl Subscription {
    /// Explicitly stop listening.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(list) = self.list.upgrade() {
            list.entries.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

struct Value {
    current: Cell<Progress>,
    listeners: Listeners,
}

impl Value {
    fn new(initial: Progress) -> Self {
        Self {
            current: Cell::new(initial),
            listeners: Listeners::default(),
        }
    }

    fn set(&self, value: Progress) {
        if self.current.replace(value) != value {
            self.listeners.notify(value);
        }
    }
}

/// Page-wide progress: scrolled distance over scrollable distance.
#[derive(Clone)]
pub struct WholeDocumentSource {
    value: Rc<Value>,
}

impl WholeDocumentSource {
    pub fn new() -> Self {
        Self {
            value: Rc::new(Value::new(Progress::START)),
        }
    }

    /// Re-evaluate after a scroll or resize.
    pub fn update(&self, metrics: &ScrollMetrics) {
        self.value.set(metrics.document_progress());
    }

    /// Reset to 0, e.g. when the window is unavailable.
    pub fn clear(&self) {
        self.value.set(Progress::START);
    }

    pub fn listener_count(&self) -> usize {
        self.value.listeners.len()
    }
}

impl Default for WholeDocumentSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSource for WholeDocumentSource {
    fn current_value(&self) -> Progress {
        self.value.current.get()
    }

    fn subscribe(&self, on_change: OnChange) -> Subscription {
        self.value.listeners.add(on_change)
    }
}

struct WindowState {
    window: ScrollWindow,
    geometry: Cell<Option<ElementGeometry>>,
    metrics: Cell<ScrollMetrics>,
    value: Value,
}

/// Local progress of one element through a [`ScrollWindow`].
#[derive(Clone)]
pub struct ElementWindowSource {
    state: Rc<WindowState>,
}

impl ElementWindowSource {
    pub fn new(window: ScrollWindow) -> Self {
        Self {
            state: Rc::new(WindowState {
                window,
                geometry: Cell::new(None),
                metrics: Cell::new(ScrollMetrics::default()),
                value: Value::new(Progress::START),
            }),
        }
    }

    pub fn window(&self) -> ScrollWindow {
        self.state.window
    }

    /// Whether a usable measurement is available.
    pub fn is_measured(&self) -> bool {
        self.state
            .geometry
            .get()
            .is_some_and(|geometry| geometry.height > 0.0)
    }

    /// Record the element's layout; `None` when it cannot be measured.
    pub fn update_layout(&self, geometry: Option<ElementGeometry>) {
        self.state.geometry.set(geometry);
        self.recompute();
    }

    /// Record the current scroll position.
    pub fn update_scroll(&self, metrics: &ScrollMetrics) {
        self.state.metrics.set(*metrics);
        self.recompute();
    }

    fn recompute(&self) {
        let geometry = self.state.geometry.get();
        let progress = self
            .state
            .window
            .progress(geometry.as_ref(), &self.state.metrics.get());
        self.state.value.set(progress);
    }

    pub fn listener_count(&self) -> usize {
        self.state.value.listeners.len()
    }
}

impl ProgressSource for ElementWindowSource {
    fn current_value(&self) -> Progress {
        self.state.value.current.get()
    }

    fn subscribe(&self, on_change: OnChange) -> Subscription {
        self.state.value.listeners.add(on_change)
    }
}

struct OneShotState {
    flag: Cell<EntranceFlag>,
    value: Value,
}

/// Reports 0 until the element first intersects the viewport, then 1
/// for the rest of its lifetime.
#[derive(Clone)]
pub struct OneShotIntersectionSource {
    state: Rc<OneShotState>,
}

impl OneShotIntersectionSource {
    pub fn new() -> Self {
        Self {
            state: Rc::new(OneShotState {
                flag: Cell::new(EntranceFlag::new()),
                value: Value::new(Progress::START),
            }),
        }
    }

    pub fn flag(&self) -> EntranceFlag {
        self.state.flag.get()
    }

    /// Whether the underlying observer is still needed.
    pub fn is_armed(&self) -> bool {
        !self.state.flag.get().is_entered()
    }

    /// Feed an intersection report. Returns true only on the flip.
    pub fn report(&self, intersecting: bool) -> bool {
        let mut flag = self.state.flag.get();
        let flipped = flag.observe(intersecting);
        if flipped {
            self.state.flag.set(flag);
            self.state.value.set(Progress::END);
        }
        flipped
    }

    pub fn listener_count(&self) -> usize {
        self.state.value.listeners.len()
    }
}

impl Default for OneShotIntersectionSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSource for OneShotIntersectionSource {
    fn current_value(&self) -> Progress {
        self.state.value.current.get()
    }

    fn subscribe(&self, on_change: OnChange) -> Subscription {
        self.state.value.listeners.add(on_change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::progress::ElementGeometry;

    fn recorder() -> (Rc<RefCell<Vec<f64>>>, OnChange) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, Rc::new(move |p: Progress| sink.borrow_mut().push(p.value())))
    }

    #[test]
    fn test_document_source_notifies_on_change() {
        let source = WholeDocumentSource::new();
        let (seen, on_change) = recorder();
        let _sub = source.subscribe(on_change);

        let metrics = ScrollMetrics::new(0.0, 500.0, 1500.0);
        source.update(&metrics);
        source.update(&metrics.scrolled_to(500.0));
        source.update(&metrics.scrolled_to(500.0));
        source.update(&metrics.scrolled_to(1000.0));

        // No notification for the initial 0 nor for the repeated 0.5.
        assert_eq!(*seen.borrow(), vec![0.5, 1.0]);
        assert_eq!(source.current_value(), Progress::END);
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let source = WholeDocumentSource::new();
        let (seen, on_change) = recorder();
        let sub = source.subscribe(on_change);
        assert_eq!(source.listener_count(), 1);

        drop(sub);
        assert_eq!(source.listener_count(), 0);

        source.update(&ScrollMetrics::new(250.0, 500.0, 1000.0));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_subscription_outliving_source() {
        let source = WholeDocumentSource::new();
        let (_, on_change) = recorder();
        let sub = source.subscribe(on_change);
        drop(source);
        sub.unsubscribe();
    }

    #[test]
    fn test_document_source_clear() {
        let source = WholeDocumentSource::new();
        source.update(&ScrollMetrics::new(500.0, 500.0, 1000.0));
        assert_eq!(source.current_value(), Progress::END);
        source.clear();
        assert_eq!(source.current_value(), Progress::START);
    }

    #[test]
    fn test_element_source_tracks_scroll_and_layout() {
        let source = ElementWindowSource::new(ScrollWindow::EXIT_THROUGH_TOP);
        let metrics = ScrollMetrics::new(1200.0, 800.0, 4000.0);

        source.update_scroll(&metrics);
        assert_eq!(source.current_value(), Progress::START);
        assert!(!source.is_measured());

        source.update_layout(Some(ElementGeometry::new(800.0, 800.0)));
        assert!(source.is_measured());
        assert_eq!(source.current_value().value(), 0.5);

        // Layout change: the section grew, same scroll position.
        source.update_layout(Some(ElementGeometry::new(800.0, 1600.0)));
        assert_eq!(source.current_value().value(), 0.25);
    }

    #[test]
    fn test_element_source_degrades_when_unmeasured() {
        let source = ElementWindowSource::new(ScrollWindow::EXIT_THROUGH_TOP);
        source.update_layout(Some(ElementGeometry::new(0.0, 800.0)));
        source.update_scroll(&ScrollMetrics::new(400.0, 800.0, 4000.0));
        assert_eq!(source.current_value().value(), 0.5);

        source.update_layout(None);
        assert!(!source.is_measured());
        assert_eq!(source.current_value(), Progress::START);
    }

    #[test]
    fn test_one_shot_fires_once() {
        let source = OneShotIntersectionSource::new();
        let (seen, on_change) = recorder();
        let _sub = source.subscribe(on_change);

        assert!(source.is_armed());
        assert!(!source.report(false));
        assert!(source.report(true));
        assert!(!source.is_armed());
        assert!(!source.report(false));
        assert!(!source.report(true));

        assert_eq!(*seen.borrow(), vec![1.0]);
        assert!(source.flag().is_entered());
    }

    #[test]
    fn test_callback_may_unsubscribe_itself() {
        let source = WholeDocumentSource::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let inner = Rc::clone(&slot);
        let sub = source.subscribe(Rc::new(move |_: Progress| {
            inner.borrow_mut().take();
        }));
        *slot.borrow_mut() = Some(sub);

        source.update(&ScrollMetrics::new(250.0, 500.0, 1000.0));
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn test_sources_behind_trait_object() {
        let document = WholeDocumentSource::new();
        let one_shot = OneShotIntersectionSource::new();
        one_shot.report(true);

        let sources: Vec<Box<dyn ProgressSource>> = vec![Box::new(document), Box::new(one_shot)];
        let values: Vec<f64> = sources.iter().map(|s| s.current_value().value()).collect();
        assert_eq!(values, vec![0.0, 1.0]);
    }
}
