use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A thread-safe, reference-counted resource container with read-write locking.
///
/// `MtResource` is the handle type the world hands out for chunks, and the lock a
/// threaded host wraps around a whole [`World`](crate::World). Cloning the handle
/// never copies the resource: every clone points at the same allocation, which is
/// what makes cache identity observable through [`MtResource::ptr_eq`].
///
/// # Examples
///
/// ```
/// use voxel_world::MtResource;
///
/// let counter = MtResource::new(0);
/// let alias = counter.clone();
///
/// *alias.get_mut() += 1;
///
/// assert_eq!(*counter.get(), 1);
/// assert!(counter.ptr_eq(&alias));
/// ```
///
/// # Locking
/// - Any number of readers may hold [`get`](MtResource::get) guards at once
/// - [`get_mut`](MtResource::get_mut) is exclusive and blocks until readers are gone
/// - Writers must not mutate a chunk while a mesh build may be reading it; taking
///   the write guard is how a host serializes that
pub struct MtResource<T: Send + Sync> {
    resource: Arc<RwLock<T>>,
}

impl<T: Send + Sync> MtResource<T> {
    /// Creates a new `MtResource` containing the given value.
    pub fn new(resource: T) -> Self {
        Self {
            resource: Arc::new(RwLock::new(resource)),
        }
    }

    /// Returns a read-only guard over the contained value.
    ///
    /// A lock poisoned by a panicking writer is recovered rather than propagated;
    /// every mutation in this crate leaves its value consistent before it can panic.
    pub fn get(&self) -> RwLockReadGuard<'_, T> {
        self.resource.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns an exclusive guard that allows modifying the contained value.
    pub fn get_mut(&self) -> RwLockWriteGuard<'_, T> {
        self.resource.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns `true` when both handles refer to the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.resource, &other.resource)
    }
}

impl<T: Send + Sync> Clone for MtResource<T> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource.clone(),
        }
    }
}

impl<T: Send + Sync + std::fmt::Debug> std::fmt::Debug for MtResource<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MtResource")
            .field("resource", &*self.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clones_share_one_allocation() {
        let original = MtResource::new(vec![1, 2, 3]);
        let alias = original.clone();
        let unrelated = MtResource::new(vec![1, 2, 3]);

        assert!(original.ptr_eq(&alias));
        assert!(!original.ptr_eq(&unrelated));
        *alias.get_mut() = vec![4];
        assert_eq!(*original.get(), vec![4]);
        assert_eq!(*unrelated.get(), vec![1, 2, 3]);
    }

    #[test]
    fn writes_are_visible_across_threads() {
        let counter = MtResource::new(0u32);

        thread::scope(|scope| {
            for _ in 0..8 {
                let counter = counter.clone();
                scope.spawn(move || {
                    *counter.get_mut() += 1;
                });
            }
        });

        assert_eq!(*counter.get(), 8);
    }
}
