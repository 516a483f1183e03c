//! Failure reason codes carried by authentication and access-check failures

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Why an authentication or access-control action failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    Password,
    Invalid,
    Disabled,
    Locked,
}

impl FailureReason {
    /// The integer code stored in the `reason` column
    pub fn code(&self) -> i32 {
        match self {
            Self::Password => 1,
            Self::Invalid => 2,
            Self::Disabled => 3,
            Self::Locked => 4,
        }
    }

    /// Human-readable reason text used in formatted log messages
    pub fn text(&self) -> &'static str {
        match self {
            Self::Password => "Incorrect password",
            Self::Invalid => "Account invalid",
            Self::Disabled => "Account disabled",
            Self::Locked => "Account locked",
        }
    }
}

impl TryFrom<i32> for FailureReason {
    type Error = DomainError;

    /// Resolve a wire code to a typed reason.
    ///
    /// An unrecognized code signals a defective event source, not user
    /// error; the returned error is never caught inside this workspace.
    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Password),
            2 => Ok(Self::Invalid),
            3 => Ok(Self::Disabled),
            4 => Ok(Self::Locked),
            other => Err(DomainError::UnknownFailureReason(other)),
        }
    }
}
