//! Session role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles carried in token claims.
///
/// `Owner` and `Employee` are staff roles with access to the management
/// area; `Guest` is a table-bound diner created by scanning a QR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Restaurant owner: full management access.
    Owner,
    /// Staff member: management access without account administration.
    Employee,
    /// Table-bound diner: guest ordering area only.
    Guest,
}

impl Role {
    /// Whether this role may enter the management area.
    pub fn is_staff(&self) -> bool {
        matches!(self, Self::Owner | Self::Employee)
    }

    /// Return the role as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Employee => "Employee",
            Self::Guest => "Guest",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = bistro_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Owner" => Ok(Self::Owner),
            "Employee" => Ok(Self::Employee),
            "Guest" => Ok(Self::Guest),
            _ => Err(bistro_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: Owner, Employee, Guest"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_classification() {
        assert!(Role::Owner.is_staff());
        assert!(Role::Employee.is_staff());
        assert!(!Role::Guest.is_staff());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Owner".parse::<Role>().unwrap(), Role::Owner);
        assert_eq!("Guest".parse::<Role>().unwrap(), Role::Guest);
        assert!("owner".parse::<Role>().is_err());
    }
}
