//! Projectile storage
//!
//! Generational slot map so removals mid-step never invalidate other handles.
//! A soft capacity bounds per-step cost: inserting into a full pool evicts the
//! oldest live projectile.

use slotmap::{SlotMap, new_key_type};

use super::state::Projectile;

new_key_type! {
    /// Stable handle for a live projectile
    pub struct ProjectileId;
}

#[derive(Debug, Clone, Default)]
pub struct ProjectilePool {
    slots: SlotMap<ProjectileId, Projectile>,
    /// Soft cap on live projectiles (0 = unbounded)
    capacity: usize,
    next_serial: u64,
}

impl ProjectilePool {
    /// Create a pool holding at most `capacity` projectiles (0 = unbounded)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: SlotMap::with_capacity_and_key(capacity),
            capacity,
            next_serial: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Insert a projectile, stamping its serial.
    ///
    /// Returns the new handle and the projectile evicted to make room, if any.
    pub fn insert(&mut self, mut projectile: Projectile) -> (ProjectileId, Option<Projectile>) {
        let evicted = if self.capacity > 0 && self.slots.len() >= self.capacity {
            self.oldest().and_then(|id| self.slots.remove(id))
        } else {
            None
        };

        projectile.serial = self.next_serial;
        self.next_serial += 1;
        (self.slots.insert(projectile), evicted)
    }

    pub fn remove(&mut self, id: ProjectileId) -> Option<Projectile> {
        self.slots.remove(id)
    }

    #[cfg(test)]
    pub fn contains(&self, id: ProjectileId) -> bool {
        self.slots.contains_key(id)
    }

    /// Handle of the longest-lived projectile
    pub fn oldest(&self) -> Option<ProjectileId> {
        self.slots
            .iter()
            .min_by_key(|(_, p)| p.serial)
            .map(|(id, _)| id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProjectileId, &Projectile)> + '_ {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ProjectileId, &mut Projectile)> + '_ {
        self.slots.iter_mut()
    }

    pub fn values(&self) -> impl Iterator<Item = &Projectile> + '_ {
        self.slots.values()
    }
}
