//! Privileged-service client adapters.

mod local_broker;
mod policy;

pub use local_broker::{BrokerError, LocalPrivilegedService};
pub use policy::{GrantPolicy, UnknownPolicy};
