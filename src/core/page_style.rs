//! Scoped page-wide style override
//!
//! The landing page needs the document body to hide horizontal overflow and
//! use a dark background while it is mounted. A [`StyleStack`] hands out a
//! [`PageStyleGuard`] per mount and puts back the exact previous values once
//! every guard is gone.

use std::cell::RefCell;
use std::rc::Rc;

/// Inline style storage of an element, e.g. `document.body.style`.
pub trait StyleTarget {
    /// Current inline value, empty when unset.
    fn property(&self, name: &str) -> String;
    fn set_property(&mut self, name: &str, value: &str);
    fn remove_property(&mut self, name: &str);
}

/// Property/value pairs applied to the page body while mounted.
pub const LANDING_OVERRIDES: &[(&str, &str)] = &[
    ("overflow-x", "hidden"),
    ("background-color", PAGE_BACKGROUND),
];

/// gray-900
pub const PAGE_BACKGROUND: &str = "#111827";

/// Overrides stacked on one style target.
///
/// Every [`PageStyleGuard`] handed out by [`StyleStack::push`] contributes
/// its overrides for as long as it lives; the most recently pushed live
/// guard wins per property. The values found before the first push are
/// restored once the last guard is released, whatever the release order.
pub struct StyleStack<T: StyleTarget> {
    state: Rc<RefCell<StackState<T>>>,
}

struct StackState<T> {
    target: T,
    /// Values found before the first live override touched each property.
    original: Vec<(&'static str, String)>,
    active: Vec<(u64, Vec<(&'static str, String)>)>,
    next_id: u64,
}

impl<T: StyleTarget> StackState<T> {
    fn winning_value(&self, name: &str) -> Option<&str> {
        self.active.iter().rev().find_map(|(_, overrides)| {
            overrides
                .iter()
                .find(|(property, _)| *property == name)
                .map(|(_, value)| value.as_str())
        })
    }

    /// Write the effective value of every touched property to the target.
    fn apply(&mut self) {
        for index in (0..self.original.len()).rev() {
            let name = self.original[index].0;
            let value = match self.winning_value(name) {
                Some(value) => value.to_string(),
                None => self.original[index].1.clone(),
            };
            if value.is_empty() {
                self.target.remove_property(name);
            } else {
                self.target.set_property(name, &value);
            }
        }
    }

    fn release(&mut self, id: u64) {
        self.active.retain(|(guard, _)| *guard != id);
        self.apply();
        if self.active.is_empty() {
            self.original.clear();
        }
    }
}

impl<T: StyleTarget> StyleStack<T> {
    pub fn new(target: T) -> Self {
        Self {
            state: Rc::new(RefCell::new(StackState {
                target,
                original: Vec::new(),
                active: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Apply `overrides` until the returned guard is dropped.
    pub fn push(&self, overrides: &[(&'static str, &str)]) -> PageStyleGuard<T> {
        let mut state = self.state.borrow_mut();
        for (name, _) in overrides {
            if !state.original.iter().any(|(saved, _)| saved == name) {
                let previous = state.target.property(name);
                state.original.push((*name, previous));
            }
        }

        let id = state.next_id;
        state.next_id += 1;
        let owned = overrides
            .iter()
            .map(|(name, value)| (*name, value.to_string()))
            .collect();
        state.active.push((id, owned));
        state.apply();

        PageStyleGuard {
            id,
            state: Rc::clone(&self.state),
        }
    }

    /// Apply [`LANDING_OVERRIDES`].
    pub fn landing(&self) -> PageStyleGuard<T> {
        self.push(LANDING_OVERRIDES)
    }

    /// Number of live guards.
    pub fn depth(&self) -> usize {
        self.state.borrow().active.len()
    }
}

impl<T: StyleTarget> Clone for StyleStack<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

/// One live entry of a [`StyleStack`]; withdraws its overrides on drop.
#[must_use = "the override is withdrawn as soon as the guard is dropped"]
pub struct PageStyleGuard<T: StyleTarget> {
    id: u64,
    state: Rc<RefCell<StackState<T>>>,
}

impl<T: StyleTarget> Drop for PageStyleGuard<T> {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.try_borrow_mut() {
            state.release(self.id);
        }
    }
}
