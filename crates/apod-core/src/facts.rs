//! Space facts shown next to the gallery.

use rand::seq::IndexedRandom;

/// Source of short informational facts.
pub trait FactSource {
    /// Pick a fact. Implementations always have at least one.
    fn random_fact(&self) -> String;
}

const BUILTIN_FACTS: &[&str] = &[
    "A day on Venus is longer than its year: it takes 243 Earth days to rotate once.",
    "Neutron stars are so dense that a teaspoon of their material would weigh about a billion tons.",
    "The footprints left on the Moon will likely remain for millions of years, as there is no wind to erase them.",
    "Light from the Sun takes about 8 minutes and 20 seconds to reach Earth.",
    "Jupiter's Great Red Spot is a storm larger than Earth that has raged for centuries.",
    "There are more stars in the observable universe than grains of sand on all of Earth's beaches.",
    "Saturn would float in water because its average density is lower than water's.",
    "The Andromeda Galaxy is on a collision course with the Milky Way, in about 4.5 billion years.",
    "Olympus Mons on Mars is the tallest volcano in the solar system, nearly three times the height of Everest.",
    "The Hubble Space Telescope has made more than 1.5 million observations since 1990.",
    "A year on Mercury lasts just 88 Earth days.",
    "The International Space Station orbits Earth about every 90 minutes.",
];

/// Fixed, non-empty list of facts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceFacts {
    facts: Vec<String>,
}

impl SpaceFacts {
    /// Build from a custom list. Returns `None` for an empty list.
    pub fn new(facts: Vec<String>) -> Option<Self> {
        if facts.is_empty() {
            None
        } else {
            Some(Self { facts })
        }
    }

    /// The facts shipped with the application
    pub fn builtin() -> Self {
        Self {
            facts: BUILTIN_FACTS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl Default for SpaceFacts {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FactSource for SpaceFacts {
    fn random_fact(&self) -> String {
        self.facts
            .choose(&mut rand::rng())
            .cloned()
            .unwrap_or_default()
    }
}
