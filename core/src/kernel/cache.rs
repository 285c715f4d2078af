//! Memoization of loft results.
//!
//! Lofting is by far the most expensive step, and regenerating an unchanged
//! handle hands the kernel the exact same wire list. Results are keyed by a
//! deterministic digest of every wire coordinate.

use super::{GeometryKernel, KernelResult};
use crate::geometry::Polygon;
use std::collections::HashMap;
use uuid::Uuid;

/// Derive a stable cache key from the ordered wire list.
///
/// Uses UUID v5 (SHA-1) over the raw coordinate bits, so keys are identical
/// across runs and platforms and any bit-level change yields a new key.
pub fn loft_key(wires: &[Polygon]) -> Uuid {
    let mut bytes = Vec::with_capacity(wires.iter().map(|w| 8 + w.len() * 24).sum());
    for wire in wires {
        bytes.extend_from_slice(&(wire.len() as u64).to_be_bytes());
        for p in wire.points() {
            bytes.extend_from_slice(&p.x.to_bits().to_be_bytes());
            bytes.extend_from_slice(&p.y.to_bits().to_be_bytes());
            bytes.extend_from_slice(&p.z.to_bits().to_be_bytes());
        }
    }
    Uuid::new_v5(&Uuid::NAMESPACE_OID, &bytes)
}

/// Cache of lofted solids keyed by [`loft_key`].
#[derive(Debug)]
pub struct LoftCache<S> {
    entries: HashMap<Uuid, S>,
    hits: usize,
    misses: usize,
}

impl<S> Default for LoftCache<S> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }
}

impl<S: Clone> LoftCache<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached solid for `wires`, lofting with `kernel` on a miss.
    ///
    /// Failed lofts are not cached.
    pub fn get_or_loft<K>(&mut self, kernel: &K, wires: &[Polygon]) -> KernelResult<S>
    where
        K: GeometryKernel<Solid = S>,
    {
        let key = loft_key(wires);
        if let Some(solid) = self.entries.get(&key) {
            self.hits += 1;
            tracing::debug!(%key, "loft cache hit");
            return Ok(solid.clone());
        }

        self.misses += 1;
        tracing::debug!(%key, wires = wires.len(), "loft cache miss");
        let solid = kernel.loft(wires)?;
        self.entries.insert(key, solid.clone());
        Ok(solid)
    }

    pub fn contains(&self, wires: &[Polygon]) -> bool {
        self.entries.contains_key(&loft_key(wires))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Drop every cached solid and reset the hit/miss counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
