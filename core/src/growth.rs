//! Lake ice growth from freezing degree days.
//!
//! Stefan's Law, `H = alpha * sqrt(FDD)`, with `H` in cm and `FDD` the
//! accumulated freezing degree days (°C·day below 0 °C). Snow cover insulates
//! the ice and lowers `alpha`.

/// Growth coefficient for snow-free ice.
pub const ALPHA_BARE_ICE: f64 = 2.7;

/// Growth coefficient for snow-covered ice.
pub const ALPHA_SNOW_COVER: f64 = 1.8;

fn alpha(has_snow_cover: bool) -> f64 {
    if has_snow_cover {
        ALPHA_SNOW_COVER
    } else {
        ALPHA_BARE_ICE
    }
}

/// Freezing degree days accumulated over `days` days at `avg_temp_c`.
///
/// Zero at or above freezing.
pub fn freezing_degree_days(avg_temp_c: f64, days: u32) -> f64 {
    if avg_temp_c >= 0.0 {
        return 0.0;
    }
    avg_temp_c.abs() * f64::from(days)
}

/// Ice thickness (cm) grown over `days` days at a constant average
/// temperature.
pub fn ice_growth_cm(avg_temp_c: f64, days: u32, has_snow_cover: bool) -> f64 {
    if avg_temp_c >= 0.0 {
        return 0.0;
    }
    let fdd = freezing_degree_days(avg_temp_c, days);
    alpha(has_snow_cover) * fdd.sqrt()
}

/// Ice thickness (cm) grown in a single day.
pub fn daily_growth_cm(avg_temp_c: f64, has_snow_cover: bool) -> f64 {
    ice_growth_cm(avg_temp_c, 1, has_snow_cover)
}

/// Whole days of constant `avg_temp_c` needed to grow `target_cm` of ice.
///
/// Returns 0 when the temperature is not below freezing (no finite answer)
/// or the target is not positive.
pub fn days_to_reach_thickness(target_cm: f64, avg_temp_c: f64, has_snow_cover: bool) -> u32 {
    if avg_temp_c >= 0.0 || target_cm <= 0.0 {
        return 0;
    }
    // H = alpha * sqrt(FDD)  =>  FDD = (H / alpha)^2
    let fdd = (target_cm / alpha(has_snow_cover)).powi(2);
    let days = fdd / avg_temp_c.abs();
    // Saturating float-to-int cast; absurd targets pin to u32::MAX.
    days.ceil() as u32
}
