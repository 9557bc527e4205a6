use glam::Vec3;

use crate::host::ObjectHandle;

/// Drag gesture as delivered by the host's input dispatch.
///
/// `location` is already converted into the object's parent-local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent<H: ObjectHandle> {
    Began { object: H, location: Vec3 },
    Changed { object: H, location: Vec3 },
    Ended { object: H },
    Cancelled { object: H },
}

impl<H: ObjectHandle> GestureEvent<H> {
    pub fn object(&self) -> H {
        match *self {
            GestureEvent::Began { object, .. }
            | GestureEvent::Changed { object, .. }
            | GestureEvent::Ended { object }
            | GestureEvent::Cancelled { object } => object,
        }
    }

    /// True for events that close a gesture.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GestureEvent::Ended { .. } | GestureEvent::Cancelled { .. }
        )
    }
}
