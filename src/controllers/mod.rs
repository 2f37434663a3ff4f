mod detail;
mod search;
mod suggest;

pub use detail::{DetailController, DetailView};
pub use search::{SearchController, SearchOutcome, SearchView};
pub use suggest::{SuggestController, SuggestView};

use std::sync::{Mutex, MutexGuard, PoisonError};

/// View state paired with the generation of the latest request that may
/// write to it. A response only lands if nothing newer was issued since.
#[derive(Debug, Default)]
pub(crate) struct Tracked<V> {
    generation: u64,
    pub(crate) view: V,
}

impl<V> Tracked<V> {
    /// Start a new request, superseding every earlier one.
    pub(crate) fn issue(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub(crate) fn apply_if_current(
        &mut self,
        generation: u64,
        update: impl FnOnce(&mut V),
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        update(&mut self.view);
        true
    }
}

/// Lock that keeps going after a panicked holder; view state is always whole.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
