//! Capabilities the interaction core drives on the hosting engine.
//!
//! The core never owns scene objects. It only holds handles and asks the host
//! to move them, change their physics mode, or toggle input targeting. The
//! host is passed explicitly on every call so the core keeps no ambient state.

use std::fmt::Debug;
use std::hash::Hash;

use glam::Vec3;

/// Opaque identity of a scene object as seen by the core.
pub trait ObjectHandle: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> ObjectHandle for T {}

/// How the physics engine treats an object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhysicsMode {
    /// Positioned manually; exempt from simulation forces.
    Kinematic,
    /// Fully simulated.
    Simulated,
    /// Immovable collider.
    Static,
}

/// Imperative object mutations consumed by the renderer/physics on the next frame.
pub trait HostEngine {
    type Handle: ObjectHandle;

    /// Current position in the object's parent space, `None` if the host does
    /// not know the handle.
    fn position(&self, object: Self::Handle) -> Option<Vec3>;

    fn set_position(&mut self, object: Self::Handle, position: Vec3);

    fn physics_mode(&self, object: Self::Handle) -> Option<PhysicsMode>;

    fn set_physics_mode(&mut self, object: Self::Handle, mode: PhysicsMode);

    /// Whether the object receives future gesture events.
    fn set_interactable(&mut self, object: Self::Handle, interactable: bool);
}
