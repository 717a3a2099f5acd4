//! Queue ordering policy.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Which end of the pending queue a freed worker takes from.
///
/// Arrivals are always appended at the back.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Discipline {
    /// First in, first out: pop from the front.
    #[default]
    Fifo,
    /// Last in, first out: pop from the back.
    Lifo,
}

impl Discipline {
    pub fn as_str(self) -> &'static str {
        match self {
            Discipline::Fifo => "fifo",
            Discipline::Lifo => "lifo",
        }
    }
}

impl FromStr for Discipline {
    type Err = CoreError;

    /// Case-insensitive.  Anything other than `fifo` / `lifo` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(Discipline::Fifo),
            "lifo" => Ok(Discipline::Lifo),
            _ => Err(CoreError::UnknownDiscipline(s.to_owned())),
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
