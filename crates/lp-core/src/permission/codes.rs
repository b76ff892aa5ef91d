use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Identifier attached to a permission request and echoed back in its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestCode(pub i32);

/// Sentinel request code used for every permission request issued by the manager.
pub const PERMISSION_REQUEST_CODE: RequestCode = RequestCode(114514);

impl Display for RequestCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result code delivered by the privileged service for a permission request.
///
/// Values follow the platform package manager convention: `0` is granted,
/// `-1` is denied. Any other value is treated as "not granted".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultCode(pub i32);

impl ResultCode {
    pub const GRANTED: ResultCode = ResultCode(0);
    pub const DENIED: ResultCode = ResultCode(-1);

    pub fn is_granted(self) -> bool {
        self == Self::GRANTED
    }

    pub fn from_granted(granted: bool) -> Self {
        if granted {
            Self::GRANTED
        } else {
            Self::DENIED
        }
    }
}

impl Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ResultCode::GRANTED => write!(f, "granted"),
            ResultCode::DENIED => write!(f, "denied"),
            ResultCode(other) => write!(f, "unknown({other})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_granted_sentinel_counts_as_granted() {
        assert!(ResultCode::GRANTED.is_granted());
        assert!(!ResultCode::DENIED.is_granted());
        assert!(!ResultCode(1).is_granted());
        assert!(!ResultCode(i32::MIN).is_granted());
    }

    #[test]
    fn from_granted_maps_to_sentinels() {
        assert_eq!(ResultCode::from_granted(true), ResultCode::GRANTED);
        assert_eq!(ResultCode::from_granted(false), ResultCode::DENIED);
    }

    #[test]
    fn display_names_known_codes() {
        assert_eq!(ResultCode::GRANTED.to_string(), "granted");
        assert_eq!(ResultCode::DENIED.to_string(), "denied");
        assert_eq!(ResultCode(7).to_string(), "unknown(7)");
        assert_eq!(PERMISSION_REQUEST_CODE.to_string(), "114514");
    }
}
