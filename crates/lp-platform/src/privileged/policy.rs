use std::fmt::{self, Display};
use std::str::FromStr;

/// How the local broker answers permission requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GrantPolicy {
    /// Grant every request.
    #[default]
    Grant,
    /// Deny every request.
    Deny,
    /// Hold requests until [`super::LocalPrivilegedService::resolve_pending`].
    Manual,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown broker policy {0:?}, expected grant, deny or manual")]
pub struct UnknownPolicy(pub String);

impl FromStr for GrantPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "grant" => Ok(GrantPolicy::Grant),
            "deny" => Ok(GrantPolicy::Deny),
            "manual" => Ok(GrantPolicy::Manual),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

impl Display for GrantPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrantPolicy::Grant => write!(f, "grant"),
            GrantPolicy::Deny => write!(f, "deny"),
            GrantPolicy::Manual => write!(f, "manual"),
        }
    }
}
