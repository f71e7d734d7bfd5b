//! Sun position, sun-path diagram and a day of PV output for one site.

use chrono::{DateTime, FixedOffset};
use ladybug_core::pvwatts::{self, ModuleType, PvSystem};
use ladybug_core::sunpath::SunpathConfig;
use ladybug_core::{
    Ephemeris, Location, SurfaceOrientation, Vector3, irradiance, noaa, sun_position,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // San Francisco, June 21st at noon Pacific Daylight Time
    let datetime = "2023-06-21T12:00:00-07:00".parse::<DateTime<FixedOffset>>()?;
    let latitude = 37.7749;
    let longitude = -122.4194;

    let almanac = noaa::solar_position_at(&datetime, latitude, longitude)?;
    println!("Solar position for San Francisco on June 21, 2023 at noon PDT:");
    println!("  Azimuth: {:.3}°", almanac.position.azimuth());
    println!("  Altitude: {:.3}°", almanac.position.altitude());
    println!("  Zenith angle: {:.3}°", almanac.position.zenith());
    println!("  Declination: {:.3}°", almanac.declination);

    // The same moment in local standard time, through each implementation
    let site = Location::new(latitude, longitude, -8.0)?;
    println!("\nAt 11:00 PST:");
    for ephemeris in [Ephemeris::Noaa, Ephemeris::Sunpath, Ephemeris::PerezSky] {
        let position = sun_position(ephemeris, &site, 2023, 6, 21, 11.0)?;
        println!(
            "  {ephemeris:?}: azimuth {:.3}°, altitude {:.3}°",
            position.azimuth(),
            position.altitude()
        );
    }

    // Sun-path diagram points for the summer solstice, 100 units radius
    let diagram = SunpathConfig::new(site)
        .with_scale(100.0)?
        .with_center(Vector3::new(0.0, 0.0, 0.0));
    println!("\nSun-path diagram, June 21st:");
    for hour in (6..=20).step_by(2) {
        let context = diagram.solar_context(6, 21, f64::from(hour), false)?;
        if context.altitude < 0.0 {
            continue;
        }
        let point = diagram.sun_point(&context);
        println!(
            "  {hour:02}:00 -> ({:7.2}, {:7.2}, {:7.2}), equation of time {:+.2} min",
            point.x, point.y, point.z, context.equation_of_time
        );
    }

    // Hourly AC output of a south-facing 4 kW array under a clear-sky guess
    let roof = SurfaceOrientation::new(30.0, 180.0)?;
    let system = PvSystem::new(ModuleType::GlassPolymerOpenRack, 4.0, 0.77)?;
    let mut daily_energy = 0.0;
    for hour in 0..24 {
        let position = sun_position(Ephemeris::Noaa, &site, 2023, 6, 21, f64::from(hour) + 0.5)?;
        if !position.is_up() {
            continue;
        }
        let air_mass = irradiance::air_mass(position.zenith());
        // Meinel clear-sky beam estimate
        let dni = 1353.0 * 0.7_f64.powf(air_mass.powf(0.678));
        let poa = irradiance::poa_irradiance(
            position.zenith(),
            position.azimuth(),
            &roof,
            dni,
            80.0,
            0.2,
        );
        let output = pvwatts::pvwatts(&system, &poa, 18.0, 3.0);
        daily_energy += output.ac_power;
    }
    println!("\nEstimated clear-day yield: {daily_energy:.2} kWh");

    Ok(())
}
