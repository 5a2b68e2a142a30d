use barber_booking_domain::{Entity, ID};
use std::sync::{Mutex, MutexGuard};

/// Useful functions for creating inmemory repositories

pub fn lock<T>(collection: &Mutex<Vec<T>>) -> anyhow::Result<MutexGuard<'_, Vec<T>>> {
    collection
        .lock()
        .map_err(|_| anyhow::Error::msg("In-memory collection lock was poisoned"))
}

pub fn insert<T: Clone>(val: &T, collection: &Mutex<Vec<T>>) -> anyhow::Result<()> {
    lock(collection)?.push(val.clone());
    Ok(())
}

pub fn find<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> anyhow::Result<Option<T>> {
    Ok(lock(collection)?
        .iter()
        .find(|item| item.id() == val_id)
        .cloned())
}

pub fn find_by<T: Clone, F: FnMut(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    mut compare: F,
) -> anyhow::Result<Vec<T>> {
    Ok(lock(collection)?
        .iter()
        .filter(|item| compare(item))
        .cloned()
        .collect())
}
