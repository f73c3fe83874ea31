use chrono::Utc;
use reefsim_data::{AnimalId, DeathCause, Location, Species};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "event")]
pub enum LiveEvent {
    Birth {
        id: AnimalId,
        parent_id: AnimalId,
        species: Species,
        location: Location,
        step: u64,
        timestamp: String,
    },
    Death {
        id: AnimalId,
        species: Species,
        age: u32,
        cause: DeathCause,
        step: u64,
        timestamp: String,
    },
    TideChange {
        high_tide: bool,
        step: u64,
        timestamp: String,
    },
    Extinction {
        species: Species,
        step: u64,
        timestamp: String,
    },
}

impl LiveEvent {
    #[must_use]
    pub fn step(&self) -> u64 {
        match self {
            LiveEvent::Birth { step, .. }
            | LiveEvent::Death { step, .. }
            | LiveEvent::TideChange { step, .. }
            | LiveEvent::Extinction { step, .. } => *step,
        }
    }

    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            LiveEvent::Birth {
                species, location, ..
            } => format!("{species} born at {location}"),
            LiveEvent::Death {
                species, age, cause, ..
            } => match cause {
                DeathCause::Eaten { by } => format!("{species} eaten by {by} aged {age}"),
                _ => format!("{species} died of {cause} aged {age}"),
            },
            LiveEvent::TideChange { high_tide, .. } => {
                if *high_tide {
                    "The tide rises".to_string()
                } else {
                    "The tide falls".to_string()
                }
            }
            LiveEvent::Extinction { species, .. } => format!("{species} went extinct"),
        }
    }

    pub(crate) fn now() -> String {
        Utc::now().to_rfc3339()
    }
}

/// Bounded buffer of the most recent events, newest last.
#[derive(Debug, Clone)]
pub struct EventLog {
    events: VecDeque<LiveEvent>,
    capacity: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(64)
    }
}

impl EventLog {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn extend(&mut self, events: impl IntoIterator<Item = LiveEvent>) {
        for event in events {
            if self.capacity == 0 {
                return;
            }
            if self.events.len() == self.capacity {
                self.events.pop_front();
            }
            self.events.push_back(event);
        }
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LiveEvent> + '_ {
        self.events.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
