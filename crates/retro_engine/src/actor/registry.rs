//! Actor registry
//!
//! Owns every live actor in insertion order. Insertion order is iteration
//! order for the lifetime of the registry: there is no removal and no
//! reordering. Names are checked for uniqueness at insertion time.

use super::{Actor, ActorId, Capabilities};

/// Outcome of [`ActorRegistry::add`]
pub enum Registration {
    /// The actor was appended and received this identity
    Accepted(ActorId),
    /// An actor with the same name is already registered; registry state is
    /// unchanged and the candidate is handed back
    Rejected(Box<dyn Actor>),
}

impl Registration {
    /// Whether the actor was added
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Identity of the added actor, if it was accepted
    pub fn id(&self) -> Option<ActorId> {
        match self {
            Self::Accepted(id) => Some(*id),
            Self::Rejected(_) => None,
        }
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accepted(id) => f.debug_tuple("Accepted").field(id).finish(),
            Self::Rejected(actor) => f.debug_tuple("Rejected").field(&actor.name()).finish(),
        }
    }
}

/// A registered actor together with what the registry knows about it
pub struct ActorEntry {
    id: ActorId,
    name: String,
    capabilities: Capabilities,
    initialized: bool,
    actor: Box<dyn Actor>,
}

impl ActorEntry {
    /// Identity assigned at registration
    pub fn id(&self) -> ActorId {
        self.id
    }

    /// Name the actor was registered under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Capabilities cached at registration
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Whether `init` has run
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub(crate) fn mark_initialized(&mut self) {
        self.initialized = true;
    }

    /// The actor
    pub fn actor(&self) -> &dyn Actor {
        self.actor.as_ref()
    }

    /// The actor, mutably
    pub fn actor_mut(&mut self) -> &mut dyn Actor {
        self.actor.as_mut()
    }
}

/// Ordered collection of live actors
#[derive(Default)]
pub struct ActorRegistry {
    entries: Vec<ActorEntry>,
    next_identity: u32,
}

impl ActorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an actor
    ///
    /// Rejects the actor when its name is already taken. Rejection does not
    /// advance the identity counter or change the sequence.
    pub fn add(&mut self, actor: Box<dyn Actor>) -> Registration {
        if self.contains_name(actor.name()) {
            log::debug!("Actor '{}' already registered, ignoring duplicate", actor.name());
            return Registration::Rejected(actor);
        }

        let id = ActorId::new(self.next_identity);
        let name = actor.name().to_string();
        let capabilities = actor.capabilities();
        log::debug!("Registered actor '{}' as {} ({:?})", name, id, capabilities);

        self.entries.push(ActorEntry {
            id,
            name,
            capabilities,
            initialized: false,
            actor,
        });
        self.next_identity += 1;
        Registration::Accepted(id)
    }

    /// Identity the next accepted actor will receive
    pub fn next_identity(&self) -> ActorId {
        ActorId::new(self.next_identity)
    }

    /// Whether an actor with this name is registered
    pub fn contains_name(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    /// Look up an actor by identity
    pub fn get(&self, id: ActorId) -> Option<&ActorEntry> {
        // Identities are dense and never reused, so they double as indices.
        self.entries.get(id.id() as usize)
    }

    /// Look up an actor by name
    pub fn find(&self, name: &str) -> Option<&ActorEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Visit every actor once, in insertion order
    pub fn for_each(&self, mut visitor: impl FnMut(&ActorEntry)) {
        self.entries.iter().for_each(|entry| visitor(entry));
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &ActorEntry> {
        self.entries.iter()
    }

    /// Iterate mutably in insertion order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ActorEntry> {
        self.entries.iter_mut()
    }

    /// Number of registered actors
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no actor is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl Actor for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn capabilities(&self) -> Capabilities {
            Capabilities::UPDATE | Capabilities::DRAW
        }
    }

    fn names(registry: &ActorRegistry) -> Vec<&str> {
        registry.iter().map(ActorEntry::name).collect()
    }

    #[test]
    fn test_empty_registry() {
        let registry = ActorRegistry::new();
        let mut visited = 0;
        registry.for_each(|_| visited += 1);
        assert_eq!(visited, 0);
        assert!(registry.is_empty());
        assert_eq!(registry.next_identity().id(), 0);
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let mut registry = ActorRegistry::new();
        assert!(registry.add(Box::new(Named("wall"))).is_accepted());
        assert!(registry.add(Box::new(Named("player"))).is_accepted());
        assert_eq!(registry.next_identity().id(), 2);

        let outcome = registry.add(Box::new(Named("wall")));
        match outcome {
            Registration::Rejected(actor) => assert_eq!(actor.name(), "wall"),
            Registration::Accepted(id) => panic!("duplicate accepted as {}", id),
        }
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.next_identity().id(), 2);
    }

    #[test]
    fn test_next_identity_predicts_assigned_identity() {
        let mut registry = ActorRegistry::new();
        for name in ["a", "b", "c"] {
            let expected = registry.next_identity();
            assert_eq!(registry.add(Box::new(Named(name))).id(), Some(expected));
        }
        assert_eq!(registry.find("c").map(ActorEntry::id), Some(ActorId::new(2)));
    }

    #[test]
    fn test_insertion_order_preserved_and_names_unique() {
        let mut registry = ActorRegistry::new();
        let candidates = ["b", "a", "b", "c", "a", "d", "c"];
        for name in candidates {
            let _ = registry.add(Box::new(Named(name)));
        }
        assert_eq!(names(&registry), vec!["b", "a", "c", "d"]);

        let ids: Vec<u32> = registry.iter().map(|entry| entry.id().id()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_lookup_by_identity() {
        let mut registry = ActorRegistry::new();
        let wall = registry.add(Box::new(Named("wall"))).id().unwrap();
        let player = registry.add(Box::new(Named("player"))).id().unwrap();

        assert_eq!(registry.get(wall).map(ActorEntry::name), Some("wall"));
        assert_eq!(registry.get(player).map(ActorEntry::name), Some("player"));
        assert!(registry.get(ActorId::new(2)).is_none());
    }

    #[test]
    fn test_capabilities_cached_and_not_initialized() {
        let mut registry = ActorRegistry::new();
        let id = registry.add(Box::new(Named("wall"))).id().unwrap();
        let entry = registry.get(id).unwrap();
        assert_eq!(entry.capabilities(), Capabilities::UPDATE | Capabilities::DRAW);
        assert!(!entry.is_initialized());
    }
}
