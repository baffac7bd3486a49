//! Per-tick systems, run in a fixed order by the world orchestrator:
//! input resolution, then takeoffs, then flight integration.

pub mod flight;
pub mod input;
pub mod takeoff;
