//! Drag lifecycle for registered objects.
//!
//! While a gesture is active the object follows the pointer one-to-one. When
//! the gesture ends (or is cancelled) the object returns to the position it
//! was registered with. Physics stays kinematic throughout so simulation never
//! fights the manual placement.

use fnv::FnvHashMap;
use glam::Vec3;

use crate::error::SnapError;
use crate::gesture::GestureEvent;
use crate::host::{HostEngine, ObjectHandle, PhysicsMode};
use crate::registry::RestingPositionRegistry;

/// Per-object gesture phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

#[derive(Debug)]
pub struct DragSnapController<H: ObjectHandle> {
    registry: RestingPositionRegistry<H>,
    phases: FnvHashMap<H, DragPhase>,
}

impl<H: ObjectHandle> Default for DragSnapController<H> {
    fn default() -> Self {
        Self {
            registry: RestingPositionRegistry::new(),
            phases: FnvHashMap::default(),
        }
    }
}

impl<H: ObjectHandle> DragSnapController<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `initial_position` as the object's resting spot and make it
    /// draggable.
    ///
    /// Registering the same object twice is a caller bug: the first entry is
    /// kept, the host is left alone and `AlreadyRegistered` is returned.
    pub fn register<E>(
        &mut self,
        host: &mut E,
        object: H,
        initial_position: Vec3,
    ) -> Result<(), SnapError>
    where
        E: HostEngine<Handle = H>,
    {
        self.registry.insert(object, initial_position)?;
        self.phases.insert(object, DragPhase::Idle);
        host.set_interactable(object, true);
        host.set_physics_mode(object, PhysicsMode::Kinematic);
        log::info!("[drag] registered {object:?} resting at {initial_position}");
        Ok(())
    }

    /// Start a gesture on `object`.
    ///
    /// A second begin without an intervening end is ignored for the phase;
    /// the gesture simply continues from the new pointer sample.
    pub fn drag_began<E>(&mut self, host: &mut E, object: H, pointer_position: Vec3)
    where
        E: HostEngine<Handle = H>,
    {
        let Some(phase) = self.phases.get_mut(&object) else {
            log::warn!("[drag] begin on unregistered {object:?} ignored");
            return;
        };
        if *phase == DragPhase::Dragging {
            log::debug!("[drag] {object:?} already dragging; begin ignored");
        } else {
            *phase = DragPhase::Dragging;
            log::debug!("[drag] begin {object:?}");
        }
        follow(host, object, pointer_position);
    }

    /// Move `object` to exactly `pointer_position` (parent-local space).
    ///
    /// No smoothing and no bounds: the object may leave the table or sink
    /// through the floor.
    pub fn drag_changed<E>(&mut self, host: &mut E, object: H, pointer_position: Vec3)
    where
        E: HostEngine<Handle = H>,
    {
        let Some(phase) = self.phases.get_mut(&object) else {
            log::warn!("[drag] change on unregistered {object:?} ignored");
            return;
        };
        if *phase == DragPhase::Idle {
            // missed begin
            log::debug!("[drag] change on idle {object:?}; starting gesture");
            *phase = DragPhase::Dragging;
        }
        follow(host, object, pointer_position);
    }

    /// Snap `object` back to its resting position.
    ///
    /// Kinematic mode is re-asserted whether or not the object is known.
    pub fn drag_ended<E>(&mut self, host: &mut E, object: H)
    where
        E: HostEngine<Handle = H>,
    {
        match self.registry.get(object) {
            Some(resting) => {
                host.set_position(object, resting);
                self.phases.insert(object, DragPhase::Idle);
                log::debug!("[drag] end {object:?}; restored to {resting}");
            }
            None => log::warn!("[drag] end on unregistered {object:?}; position left as is"),
        }
        host.set_physics_mode(object, PhysicsMode::Kinematic);
    }

    /// The input system aborted the gesture. Same outcome as a normal end.
    pub fn drag_cancelled<E>(&mut self, host: &mut E, object: H)
    where
        E: HostEngine<Handle = H>,
    {
        log::debug!("[drag] cancel {object:?}");
        self.drag_ended(host, object);
    }

    /// Route a host gesture event to the matching lifecycle method.
    pub fn dispatch<E>(&mut self, host: &mut E, event: GestureEvent<H>)
    where
        E: HostEngine<Handle = H>,
    {
        match event {
            GestureEvent::Began { object, location } => self.drag_began(host, object, location),
            GestureEvent::Changed { object, location } => {
                self.drag_changed(host, object, location)
            }
            GestureEvent::Ended { object } => self.drag_ended(host, object),
            GestureEvent::Cancelled { object } => self.drag_cancelled(host, object),
        }
    }

    pub fn resting_position(&self, object: H) -> Option<Vec3> {
        self.registry.get(object)
    }

    pub fn phase(&self, object: H) -> Option<DragPhase> {
        self.phases.get(&object).copied()
    }

    pub fn is_registered(&self, object: H) -> bool {
        self.registry.contains(object)
    }

    /// Objects currently mid-gesture.
    pub fn dragging(&self) -> impl Iterator<Item = H> + '_ {
        self.phases
            .iter()
            .filter(|(_, phase)| **phase == DragPhase::Dragging)
            .map(|(h, _)| *h)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

#[inline]
fn follow<E: HostEngine>(host: &mut E, object: E::Handle, position: Vec3) {
    host.set_position(object, position);
    host.set_physics_mode(object, PhysicsMode::Kinematic);
}
