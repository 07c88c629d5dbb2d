//! The passenger record: immutable traits plus a wait-time counter.

use std::fmt;

use crate::{Floor, PassengerId, QueueSide};

/// Age from which a passenger counts as an elder.
pub const ELDER_AGE: u8 = 60;

/// Boarding priority, derived from a passenger's traits.
///
/// Ordered so that a larger value boards first:
/// `Normal < Elder < Wheelchair`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PriorityClass {
    Normal,
    Elder,
    Wheelchair,
}

impl PriorityClass {
    /// `true` for elders and wheelchair users.
    #[inline]
    pub fn is_priority(self) -> bool {
        !matches!(self, PriorityClass::Normal)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PriorityClass::Normal     => "normal",
            PriorityClass::Elder      => "elder",
            PriorityClass::Wheelchair => "wheelchair",
        }
    }
}

impl fmt::Display for PriorityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One person travelling through the building.
///
/// Traits are fixed at construction.  The wait counter only moves forward,
/// and only while the passenger sits in a floor queue; once boarded nobody
/// ticks it again, so the value read at boarding is the final wait.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    id:           PassengerId,
    age:          u8,
    wheelchair:   bool,
    weight_kg:    u16,
    origin:       Floor,
    destination:  Floor,
    wait_minutes: u32,
}

impl Passenger {
    /// Create a passenger with zero accumulated wait.
    ///
    /// # Panics
    /// Panics if `origin == destination` or `weight_kg == 0`.
    pub fn new(
        id:          PassengerId,
        age:         u8,
        wheelchair:  bool,
        weight_kg:   u16,
        origin:      Floor,
        destination: Floor,
    ) -> Self {
        assert_ne!(origin, destination, "passenger {id} travels nowhere");
        assert!(weight_kg > 0, "passenger {id} has no weight");
        Self { id, age, wheelchair, weight_kg, origin, destination, wait_minutes: 0 }
    }

    #[inline]
    pub fn id(&self) -> PassengerId {
        self.id
    }

    /// Display name, `P<seq>`.
    pub fn name(&self) -> String {
        format!("P{}", self.id.0)
    }

    #[inline]
    pub fn age(&self) -> u8 {
        self.age
    }

    #[inline]
    pub fn is_wheelchair(&self) -> bool {
        self.wheelchair
    }

    #[inline]
    pub fn is_elder(&self) -> bool {
        self.age >= ELDER_AGE
    }

    #[inline]
    pub fn weight_kg(&self) -> u16 {
        self.weight_kg
    }

    #[inline]
    pub fn origin(&self) -> Floor {
        self.origin
    }

    #[inline]
    pub fn destination(&self) -> Floor {
        self.destination
    }

    /// Minutes spent waiting in a floor queue so far.
    #[inline]
    pub fn wait_minutes(&self) -> u32 {
        self.wait_minutes
    }

    /// Wheelchair beats elder beats everyone else.
    pub fn priority(&self) -> PriorityClass {
        if self.wheelchair {
            PriorityClass::Wheelchair
        } else if self.is_elder() {
            PriorityClass::Elder
        } else {
            PriorityClass::Normal
        }
    }

    #[inline]
    pub fn is_priority(&self) -> bool {
        self.priority().is_priority()
    }

    /// Queue side this passenger belongs on at their origin floor.
    #[inline]
    pub fn side(&self) -> QueueSide {
        QueueSide::for_trip(self.origin, self.destination)
    }

    /// Add one minute of waiting.
    #[inline]
    pub fn tick_wait(&mut self) {
        self.wait_minutes = self.wait_minutes.saturating_add(1);
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (age {}, {} kg, {} -> {}, {}, waited {} min)",
            self.name(),
            self.age,
            self.weight_kg,
            self.origin.0,
            self.destination.0,
            self.priority(),
            self.wait_minutes,
        )
    }
}
