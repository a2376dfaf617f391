use attune_core::constants::UNMEASURED_LOAD_TIME_MS;
use attune_core::models::{NetworkTier, ResourceDescriptor};

/// `(lastLoadTimeMs or 100) * (2 on a slow network) + sizeKB * 0.1`.
pub fn estimate_load_ms(resource: &ResourceDescriptor, network: NetworkTier) -> f64 {
    let base = if resource.last_load_time_ms > 0.0 {
        resource.last_load_time_ms
    } else {
        UNMEASURED_LOAD_TIME_MS
    };
    let network_factor = match network {
        NetworkTier::Slow => 2.0,
        NetworkTier::Fast => 1.0,
    };
    base * network_factor + (resource.size_bytes as f64 / 1024.0) * 0.1
}
