pub mod post;

use serde::{Deserialize, Serialize};
use std::{fmt::Display, marker::PhantomData};

/// Database identifier of an entity, tagged with a marker type so ids of
/// different entities can't be mixed up.
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Id<Marker>(i32, #[serde(skip)] PhantomData<Marker>);

impl<Marker> Id<Marker> {
    #[must_use]
    pub fn new(id: i32) -> Self {
        Self(id, PhantomData)
    }

    #[must_use]
    pub fn get(self) -> i32 {
        self.0
    }
}

impl<Marker> Display for Id<Marker> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<Marker> From<i32> for Id<Marker> {
    fn from(value: i32) -> Self {
        Id::new(value)
    }
}

impl<Marker> From<Id<Marker>> for i32 {
    fn from(value: Id<Marker>) -> Self {
        value.get()
    }
}
