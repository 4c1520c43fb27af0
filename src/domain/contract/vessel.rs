//! Vessel specification record.

use serde::{Deserialize, Serialize};

/// Specifications of the chartered vessel.
///
/// Defaults are applied once at construction; readers access plain fields
/// rather than falling back at every call site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselSpecs {
    pub name: String,
    pub yacht_type: String,
    pub official_number: String,
    pub flag_state: String,
    pub length_overall_m: f64,
    pub beam_m: f64,
    pub draft_m: f64,
    pub engine_power_hp: u32,
    pub max_speed_knots: f64,
    pub cruising_speed_knots: f64,
    pub guest_capacity: u32,
    pub crew_capacity: u32,
}

impl Default for VesselSpecs {
    fn default() -> Self {
        Self {
            name: String::new(),
            yacht_type: "Motor Yacht".to_string(),
            official_number: String::new(),
            flag_state: "Malta".to_string(),
            length_overall_m: 0.0,
            beam_m: 0.0,
            draft_m: 0.0,
            engine_power_hp: 0,
            max_speed_knots: 0.0,
            cruising_speed_knots: 0.0,
            guest_capacity: 0,
            crew_capacity: 0,
        }
    }
}
