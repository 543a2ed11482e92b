use std::{fmt, num::ParseIntError, str::FromStr};

/// Identifier of an authenticated user.
///
/// Only produced by verifying an access token. Carried explicitly from the auth guard
/// into every reservation operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Principal(i32);

impl Principal {
    pub fn new(user_id: i32) -> Self {
        Self(user_id)
    }

    pub fn user_id(self) -> i32 {
        self.0
    }
}

impl FromStr for Principal {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i32>().map(Self)
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
