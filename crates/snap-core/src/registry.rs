use fnv::FnvHashMap;
use glam::Vec3;

use crate::error::SnapError;
use crate::host::ObjectHandle;

/// Canonical resting position of every draggable object.
///
/// Entries are written once, at registration, and only read afterwards. There
/// is no removal path: objects live for the whole session.
#[derive(Clone, Debug)]
pub struct RestingPositionRegistry<H: ObjectHandle> {
    entries: FnvHashMap<H, Vec3>,
}

impl<H: ObjectHandle> Default for RestingPositionRegistry<H> {
    fn default() -> Self {
        Self {
            entries: FnvHashMap::default(),
        }
    }
}

impl<H: ObjectHandle> RestingPositionRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `position` for `object`. An existing entry is never replaced.
    pub fn insert(&mut self, object: H, position: Vec3) -> Result<(), SnapError> {
        if self.entries.contains_key(&object) {
            return Err(SnapError::AlreadyRegistered(format!("{object:?}")));
        }
        self.entries.insert(object, position);
        Ok(())
    }

    #[inline]
    pub fn get(&self, object: H) -> Option<Vec3> {
        self.entries.get(&object).copied()
    }

    #[inline]
    pub fn contains(&self, object: H) -> bool {
        self.entries.contains_key(&object)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
