//! Factorio space platform speed calculator.

use crate::{
    error::game::GameError,
    model::factorio::{PlatformSpeeds, Quality, SpacePlatformParams},
};

/// Width of a single thruster, in tiles.
pub const THRUSTER_WIDTH: i64 = 4;

/// Platforms leave this much slower, and arrive this much faster, than their max speed.
const DEPARTURE_ARRIVAL_OFFSET: f64 = 10.0;

/// Combined thrust of `count` thrusters of one quality, in mega-newtons.
pub fn max_thrust(count: i64, quality: Quality) -> f64 {
    quality.thrust_mn() * count as f64
}

/// Maximum speed of a space platform, in km/s.
///
/// # Arguments
/// - `thrust_mn` - Combined thrust of all thrusters, in mega-newtons
/// - `mass` - Platform mass in tonnes
/// - `width` - Widest row of the platform, in tiles
///
/// # Returns
/// - `Some(f64)` - Max speed
/// - `None` - The thrust cannot overcome the platform's drag at this width
pub fn max_speed(thrust_mn: f64, mass: f64, width: i64) -> Option<f64> {
    let inner = ((480000.0 * thrust_mn) / (mass + 10000.0) - 480.0) / width as f64 + 9.0;
    (inner >= 0.0).then(|| 10.0 * inner.sqrt() - 30.0)
}

/// Computes departure and arrival speeds for a platform.
///
/// # Returns
/// - `Ok(PlatformSpeeds)` - Speeds in km/s
/// - `Err(GameError::InvalidArgument)` - The thrusters do not fit in the platform's
///   width, or the inputs are out of range
pub fn platform_speeds(params: &SpacePlatformParams) -> Result<PlatformSpeeds, GameError> {
    if params.max_width < 1 || params.num_of_thrusters < 1 || params.mass < 0.1 {
        return Err(GameError::InvalidArgument(
            "`max_width` and `num_of_thrusters` must be at least 1 and `mass` at least 0.1"
                .to_string(),
        ));
    }

    if THRUSTER_WIDTH * params.num_of_thrusters > params.max_width {
        return Err(GameError::InvalidArgument(format!(
            "It's impossible to fit {} thrusters on a space platform with max width = {}.\n\
             Each thruster has width = {}, thus, we require that {} * num_of_thrusters <= max_width.",
            params.num_of_thrusters, params.max_width, THRUSTER_WIDTH, THRUSTER_WIDTH
        )));
    }

    let thrust = max_thrust(params.num_of_thrusters, params.quality);
    let speed = max_speed(thrust, params.mass, params.max_width).ok_or_else(|| {
        GameError::InvalidArgument("Your thrusters are too weak to move this platform.".to_string())
    })?;

    Ok(PlatformSpeeds {
        departure: speed - DEPARTURE_ARRIVAL_OFFSET,
        arrival: speed + DEPARTURE_ARRIVAL_OFFSET,
    })
}

/// Formats calculated speeds as the command reply.
pub fn format_speeds(speeds: &PlatformSpeeds) -> String {
    format!(
        "The max speed of your space platform after departure is: {:.2} km/s\n\
         The max speed of your space platform upon arrival is: {:.2} km/s",
        speeds.departure, speeds.arrival
    )
}
