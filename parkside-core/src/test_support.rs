//! Test-only fixtures and an in-memory `StateRepository`.

use std::cell::RefCell;
use std::convert::Infallible;

use crate::{Attraction, Catalog, CatalogEntry, StateRepository, StateSnapshot};

/// Two equally ranked rides: id 1 waits 10 minutes, id 2 waits 200.
pub(crate) fn two_ride_catalog() -> Vec<Attraction> {
    let mut attractions: Vec<Attraction> = vec![
        CatalogEntry::new(1, "Space Coaster", "Tomorrow", 1).into(),
        CatalogEntry::new(2, "Jungle Cruise", "Adventure", 1).into(),
    ];
    attractions[0].wait_time = Some(10);
    attractions[1].wait_time = Some(200);
    attractions
}

/// A small located park used by session and listing tests.
pub(crate) fn park_catalog() -> Catalog {
    let entries = vec![
        CatalogEntry::new(1, "Space Coaster", "Tomorrow", 1).with_location(35.6340, 139.8790),
        CatalogEntry::new(2, "Jungle Cruise", "Adventure", 2).with_location(35.6310, 139.8810),
        CatalogEntry::new(3, "Carousel", "Fantasy", 4).with_location(35.6325, 139.8830),
        CatalogEntry::new(4, "Parade", "Plaza", 3).with_notes("twice daily"),
    ];
    match Catalog::new(entries) {
        Ok(catalog) => catalog,
        Err(err) => panic!("fixture catalog must be valid: {err}"),
    }
}

/// Collect raw ids in order.
pub(crate) fn ids<'a, I>(attractions: I) -> Vec<u64>
where
    I: IntoIterator<Item = &'a Attraction>,
{
    attractions.into_iter().map(|a| a.id.get()).collect()
}

/// `StateRepository` that keeps the last saved snapshot in memory.
#[derive(Debug, Default)]
pub(crate) struct MemoryRepository {
    snapshot: RefCell<StateSnapshot>,
    saves: RefCell<usize>,
}

impl MemoryRepository {
    pub(crate) fn with_snapshot(snapshot: StateSnapshot) -> Self {
        Self {
            snapshot: RefCell::new(snapshot),
            saves: RefCell::new(0),
        }
    }

    pub(crate) fn saves(&self) -> usize {
        *self.saves.borrow()
    }
}

impl StateRepository for MemoryRepository {
    type Error = Infallible;

    fn load(&self) -> Result<StateSnapshot, Self::Error> {
        Ok(self.snapshot.borrow().clone())
    }

    fn save(&self, snapshot: &StateSnapshot) -> Result<(), Self::Error> {
        *self.snapshot.borrow_mut() = snapshot.clone();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}
