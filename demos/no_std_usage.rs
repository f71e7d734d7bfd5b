//! Usage without std or chrono: plain numeric inputs and the fixed analysis calendar.
//!
//! Build with `--no-default-features --features libm`.

use ladybug_core::comfort::utci;
use ladybug_core::time::{CalendarHour, hour_to_date};
use ladybug_core::{SurfaceOrientation, irradiance, noaa};

fn main() {
    // Vienna: 48.21°N, 16.37°E, UTC+1
    let (latitude, longitude, time_zone) = (48.21, 16.37, 1.0);

    println!("Hour-of-year walk on June 21st (fixed 365-day calendar)\n");
    let start = CalendarHour::new(6, 21, 6).expect("valid date");
    let surface = SurfaceOrientation::new(35.0, 180.0).expect("valid tilt");

    for hoy in (start.hour_of_year()..start.hour_of_year() + 14).step_by(2) {
        let date = hour_to_date(hoy);
        let hour = f64::from(date.hour()) - 0.5;
        let position = noaa::sun_position(
            latitude,
            longitude,
            time_zone,
            2024,
            date.month(),
            date.day(),
            hour,
        );
        let poa = irradiance::poa_irradiance(
            position.zenith(),
            position.azimuth(),
            &surface,
            700.0,
            110.0,
            0.2,
        );
        println!(
            "  {date}: azimuth {:6.1}°, altitude {:5.1}°, POA {:6.1} W/m²",
            position.azimuth(),
            position.altitude(),
            poa.total
        );
    }

    println!("\nUTCI across a hot afternoon:");
    for tmrt in [30.0, 45.0, 60.0] {
        match utci::utci(31.0, tmrt, 1.5, 40.0) {
            Some(result) => println!("  tmrt {tmrt:4.1} °C -> UTCI {:5.1} °C", result.utci),
            None => println!("  tmrt {tmrt:4.1} °C -> outside the UTCI range"),
        }
    }
}
