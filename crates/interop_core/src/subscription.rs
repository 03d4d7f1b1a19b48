//! Scoped pointer subscriptions
//!
//! While a part is pressed it needs to hear about pointer moves and releases
//! anywhere in the document. Instead of global listeners, the pressing part
//! subscribes here and gets a [`SubscriptionId`] back; the host routes
//! document-level pointer events through [`Subscriptions::listeners`] and the
//! part removes its own entry on release.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::events::PointerId;

new_key_type! {
    /// Handle to a live subscription
    pub struct SubscriptionId;
}

/// Document pointer events a subscription can listen to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    Move,
    Up,
}

#[derive(Debug, Clone)]
struct Subscription<T> {
    owner: T,
    pointer_id: PointerId,
    on_move: bool,
    on_up: bool,
}

/// Table of active pointer subscriptions, keyed by owner `T`
#[derive(Debug, Clone)]
pub struct Subscriptions<T> {
    entries: SlotMap<SubscriptionId, Subscription<T>>,
}

impl<T> Default for Subscriptions<T> {
    fn default() -> Self {
        Self {
            entries: SlotMap::with_key(),
        }
    }
}

impl<T> Subscriptions<T> {
    /// Remove a subscription; returns false if it was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.entries.remove(id).is_some()
    }

    pub fn contains(&self, id: SubscriptionId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T: Copy + PartialEq> Subscriptions<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listen to moves and releases of `pointer_id`
    pub fn subscribe(&mut self, owner: T, pointer_id: PointerId) -> SubscriptionId {
        self.entries.insert(Subscription {
            owner,
            pointer_id,
            on_move: true,
            on_up: true,
        })
    }

    /// Listen to releases of `pointer_id` only
    pub fn subscribe_release(&mut self, owner: T, pointer_id: PointerId) -> SubscriptionId {
        self.entries.insert(Subscription {
            owner,
            pointer_id,
            on_move: false,
            on_up: true,
        })
    }

    /// Stop receiving moves but keep the release listener
    pub fn unsubscribe_move(&mut self, id: SubscriptionId) {
        if let Some(entry) = self.entries.get_mut(id) {
            entry.on_move = false;
        }
    }

    /// Remove every subscription held by `owner`
    pub fn unsubscribe_owner(&mut self, owner: T) {
        self.entries.retain(|_, entry| entry.owner != owner);
    }

    /// Owners listening to `phase` for `pointer_id`, in subscription order
    pub fn listeners(&self, phase: PointerPhase, pointer_id: PointerId) -> SmallVec<[T; 4]> {
        self.entries
            .values()
            .filter(|entry| entry.pointer_id == pointer_id)
            .filter(|entry| match phase {
                PointerPhase::Move => entry.on_move,
                PointerPhase::Up => entry.on_up,
            })
            .map(|entry| entry.owner)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Owner {
        Thumb,
        Track,
    }

    #[test]
    fn test_listeners_filter_by_pointer_and_phase() {
        let mut subs = Subscriptions::new();
        subs.subscribe(Owner::Thumb, 1);
        subs.subscribe_release(Owner::Track, 1);
        subs.subscribe(Owner::Track, 2);

        assert_eq!(subs.listeners(PointerPhase::Move, 1).as_slice(), &[Owner::Thumb]);
        assert_eq!(subs.listeners(PointerPhase::Up, 1).len(), 2);
        assert_eq!(subs.listeners(PointerPhase::Move, 2).as_slice(), &[Owner::Track]);
    }

    #[test]
    fn test_unsubscribe_move_keeps_release() {
        let mut subs = Subscriptions::new();
        let id = subs.subscribe(Owner::Track, 1);
        subs.unsubscribe_move(id);
        assert!(subs.listeners(PointerPhase::Move, 1).is_empty());
        assert_eq!(subs.listeners(PointerPhase::Up, 1).as_slice(), &[Owner::Track]);
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let mut subs = Subscriptions::new();
        let id = subs.subscribe(Owner::Thumb, 1);
        assert!(subs.unsubscribe(id));
        assert!(!subs.unsubscribe(id));
        assert!(subs.is_empty());
    }

    #[test]
    fn test_unsubscribe_owner() {
        let mut subs = Subscriptions::new();
        subs.subscribe(Owner::Thumb, 1);
        subs.subscribe(Owner::Track, 1);
        subs.unsubscribe_owner(Owner::Thumb);
        assert_eq!(subs.len(), 1);
    }

    #[test]
    fn test_default_for_any_owner() {
        let subs: Subscriptions<String> = Subscriptions::default();
        assert!(subs.is_empty());
        assert_eq!(subs.len(), 0);
    }
}
