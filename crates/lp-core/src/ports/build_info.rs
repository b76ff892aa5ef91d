use crate::device::BuildInfo;
use crate::ports::errors::BuildInfoError;

/// Read-only source of static build and device facts.
pub trait BuildInfoPort: Send + Sync {
    fn build_info(&self) -> Result<BuildInfo, BuildInfoError>;
}
