//! Scene of generated shapes.
//!
//! Cross sections enter the scene as wires; a loft consumes them and, unless
//! asked to keep them, replaces them with the resulting solid.


use crate::error::{HandleError, HandleResult};
use crate::geometry::Polygon;
use crate::kernel::{GeometryKernel, LoftCache};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a shape in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(pub Uuid);

impl ShapeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub enum SceneShape<S> {
    Wire(Polygon),
    Solid(S),
}

impl<S> SceneShape<S> {
    pub fn as_wire(&self) -> Option<&Polygon> {
        match self {
            Self::Wire(p) => Some(p),
            Self::Solid(_) => None,
        }
    }

    pub fn as_solid(&self) -> Option<&S> {
        match self {
            Self::Solid(s) => Some(s),
            Self::Wire(_) => None,
        }
    }
}

/// Ordered collection of shapes, in insertion order.
#[derive(Debug, Clone)]
pub struct Scene<S> {
    shapes: Vec<(ShapeId, SceneShape<S>)>,
}

impl<S> Default for Scene<S> {
    fn default() -> Self {
        Self { shapes: Vec::new() }
    }
}

impl<S> Scene<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_wire(&mut self, wire: Polygon) -> ShapeId {
        self.push(SceneShape::Wire(wire))
    }

    pub fn add_solid(&mut self, solid: S) -> ShapeId {
        self.push(SceneShape::Solid(solid))
    }

    fn push(&mut self, shape: SceneShape<S>) -> ShapeId {
        let id = ShapeId::new();
        self.shapes.push((id, shape));
        id
    }

    pub fn remove(&mut self, id: ShapeId) -> Option<SceneShape<S>> {
        let index = self.shapes.iter().position(|(sid, _)| *sid == id)?;
        Some(self.shapes.remove(index).1)
    }

    pub fn get(&self, id: ShapeId) -> Option<&SceneShape<S>> {
        self.shapes.iter().find(|(sid, _)| *sid == id).map(|(_, s)| s)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.shapes.iter().map(|(id, _)| *id)
    }

    pub fn wire_ids(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.shapes
            .iter()
            .filter(|(_, s)| matches!(s, SceneShape::Wire(_)))
            .map(|(id, _)| *id)
    }

    pub fn solids(&self) -> impl Iterator<Item = (ShapeId, &S)> + '_ {
        self.shapes
            .iter()
            .filter_map(|(id, s)| s.as_solid().map(|solid| (*id, solid)))
    }

    /// Loft the given wires (in order) into a solid and add it to the scene.
    ///
    /// The source wires are removed unless `keep_wires` is set.
    pub fn loft<K>(
        &mut self,
        kernel: &K,
        cache: &mut LoftCache<S>,
        wire_ids: &[ShapeId],
        keep_wires: bool,
    ) -> HandleResult<ShapeId>
    where
        K: GeometryKernel<Solid = S>,
        S: Clone,
    {
        let wires = wire_ids
            .iter()
            .map(|id| match self.get(*id) {
                Some(SceneShape::Wire(p)) => Ok(p.clone()),
                Some(SceneShape::Solid(_)) => Err(HandleError::validation(format!(
                    "Shape {} is a solid, not a wire",
                    id
                ))),
                None => Err(HandleError::UnknownShape(id.to_string())),
            })
            .collect::<HandleResult<Vec<Polygon>>>()?;

        let solid = cache.get_or_loft(kernel, &wires)?;

        if !keep_wires {
            for id in wire_ids {
                self.remove(*id);
            }
        }
        let id = self.add_solid(solid);
        tracing::debug!(%id, wires = wires.len(), keep_wires, "added loft to scene");
        Ok(id)
    }
}
