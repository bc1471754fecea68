//! # Outbound Ports (Driven Ports)

use crate::domain::errors::CaptureError;
use shared_types::PhotoResource;

/// Photo-acquisition collaborator.
///
/// Captures a single still on an explicit trigger. The pipeline never drives
/// the device; front ends call `capture` and pass the result to `issue`.
///
/// Production: `StillFileSource`
/// Testing: `UnavailableSource`
pub trait PhotoSource: Send + Sync {
    fn capture(&self) -> Result<PhotoResource, CaptureError>;
}
