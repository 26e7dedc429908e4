//! Active light set
//!
//! Refreshed from every actor during the update pass. Any actor with the
//! light capability that is not yet a member is promoted. Members are
//! never evicted, so the set only grows within a run.

use std::collections::HashSet;

use crate::actor::{ActorEntry, ActorId, Capabilities};

/// Light-emitting actors considered for lighting
#[derive(Debug, Default)]
pub struct ActiveLightSet {
    order: Vec<ActorId>,
    members: HashSet<ActorId>,
}

impl ActiveLightSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Promote `entry` if it emits light and is not a member yet
    ///
    /// Returns `true` when the actor was newly promoted.
    pub fn refresh(&mut self, entry: &ActorEntry) -> bool {
        self.refresh_with(entry.id(), entry.capabilities())
    }

    /// Promote by identity and capabilities
    pub fn refresh_with(&mut self, id: ActorId, capabilities: Capabilities) -> bool {
        if !capabilities.contains(Capabilities::LIGHT) || !self.members.insert(id) {
            return false;
        }
        log::debug!("Light {} promoted to active set", id);
        self.order.push(id);
        true
    }

    /// Whether `id` is a member
    pub fn contains(&self, id: ActorId) -> bool {
        self.members.contains(&id)
    }

    /// Members in promotion order
    pub fn iter(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.order.iter().copied()
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
