//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::callbacks::Binding;
use crate::chart::Figure;
use crate::layout::{ControlId, ControlValues, OutputId};

// ============================================
// UPDATE DTOs
// ============================================

/// Chart update request, sent whenever a control changes
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    /// Controls that changed; empty on initial page load
    #[serde(default)]
    pub changed: Vec<ControlId>,
    /// Current value of every control
    pub inputs: ControlValues,
}

/// Recomputed charts keyed by output id
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub outputs: BTreeMap<OutputId, Figure>,
}

// ============================================
// DEPENDENCY DTOs
// ============================================

/// One binding as exposed to the page
#[derive(Debug, Serialize)]
pub struct DependencyDto {
    /// Binding name
    pub id: String,
    /// Controls that trigger it
    pub inputs: Vec<ControlId>,
    /// Chart it updates
    pub output: OutputId,
}

impl From<&Binding> for DependencyDto {
    fn from(binding: &Binding) -> Self {
        Self {
            id: binding.id.to_string(),
            inputs: binding.inputs.to_vec(),
            output: binding.output,
        }
    }
}

/// Binding table response
#[derive(Debug, Serialize)]
pub struct DependenciesResponse {
    pub dependencies: Vec<DependencyDto>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, unhealthy
    pub status: String,
    /// Number of loaded launch records
    pub records: usize,
    /// Number of distinct launch sites
    pub sites: usize,
    /// Number of registered bindings
    pub bindings: usize,
    /// Server start time (RFC 3339)
    pub started_at: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
