use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identity authenticated by the hosting environment.
///
/// The registry never inspects the value; it only compares principals for
/// equality against an account's controller.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    pub fn new(value: impl Into<String>) -> Self {
        Principal(value.into())
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
