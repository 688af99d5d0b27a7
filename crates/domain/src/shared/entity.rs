use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

pub trait Entity<T: PartialEq> {
    fn id(&self) -> T;
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// Identifier of a `Reminder`, assigned by the record store on insertion.
///
/// The raw value `0` means "not yet assigned". The same value is reused
/// as the alarm token and as the notification id for that reminder, so the
/// three namespaces stay in lockstep by construction. If that invariant is
/// ever relaxed, each namespace needs its own generator.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ID(i64);

impl ID {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn inner(self) -> i64 {
        self.0
    }

    pub fn is_unassigned(&self) -> bool {
        self.0 == 0
    }
}

impl From<i64> for ID {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl Display for ID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug)]
pub enum InvalidIDError {
    #[error("ID: {0} is malformed")]
    Malformed(String),
}

impl FromStr for ID {
    type Err = InvalidIDError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| InvalidIDError::Malformed(s.to_string()))
    }
}
