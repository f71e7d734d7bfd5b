//! Plane-of-array irradiance and PVWatts output checked against reference values.

use csv::ReaderBuilder;
use ladybug_core::pvwatts::{self, ModuleType, PvSystem};
use ladybug_core::{SurfaceOrientation, irradiance};
use std::error::Error;
use std::fs::File;

const IRRADIANCE_TOLERANCE: f64 = 1e-6;
const POWER_TOLERANCE: f64 = 1e-8;

#[derive(Debug)]
struct PoaRecord {
    sun_zenith: f64,
    sun_azimuth: f64,
    surface: SurfaceOrientation,
    dni: f64,
    dhi: f64,
    albedo: f64,
    ambient_temperature: f64,
    wind_speed: f64,
    total: f64,
    beam: f64,
    sky_diffuse: f64,
    ground_reflected: f64,
    cell_temperature: f64,
    ac_power: f64,
}

fn load_poa_reference() -> Result<Vec<PoaRecord>, Box<dyn Error>> {
    let file = File::open("tests/data/poa_reference.csv")?;
    let mut reader = ReaderBuilder::new()
        .comment(Some(b'#'))
        .has_headers(false)
        .from_reader(file);

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        let values = record
            .iter()
            .map(str::parse::<f64>)
            .collect::<Result<Vec<_>, _>>()?;
        if values.len() < 15 {
            continue;
        }
        records.push(PoaRecord {
            sun_zenith: values[0],
            sun_azimuth: values[1],
            surface: SurfaceOrientation::new(values[2], values[3])?,
            dni: values[4],
            dhi: values[5],
            albedo: values[6],
            ambient_temperature: values[7],
            wind_speed: values[8],
            total: values[9],
            beam: values[10],
            sky_diffuse: values[11],
            ground_reflected: values[12],
            cell_temperature: values[13],
            ac_power: values[14],
        });
    }
    Ok(records)
}

#[test]
fn test_poa_irradiance_against_reference() -> Result<(), Box<dyn Error>> {
    let records = load_poa_reference()?;
    assert!(!records.is_empty(), "No test records loaded");
    println!("Testing {} plane-of-array reference records", records.len());

    let mut max_error = 0.0_f64;
    for (i, r) in records.iter().enumerate() {
        let poa = irradiance::poa_irradiance(
            r.sun_zenith,
            r.sun_azimuth,
            &r.surface,
            r.dni,
            r.dhi,
            r.albedo,
        );
        let errors = [
            (poa.total - r.total).abs(),
            (poa.beam - r.beam).abs(),
            (poa.sky_diffuse - r.sky_diffuse).abs(),
            (poa.ground_reflected - r.ground_reflected).abs(),
        ];
        let worst = errors.iter().copied().fold(0.0, f64::max);
        if worst > IRRADIANCE_TOLERANCE {
            println!("Record {i}: {r:?}");
            println!(
                "  Actual: total={:.8}, beam={:.8}, sky={:.8}, ground={:.8}",
                poa.total, poa.beam, poa.sky_diffuse, poa.ground_reflected
            );
        }
        max_error = max_error.max(worst);
    }

    println!("Maximum irradiance error: {max_error:.2e} W/m²");
    assert!(
        max_error < IRRADIANCE_TOLERANCE,
        "Maximum irradiance error {max_error:.2e} exceeds tolerance"
    );
    Ok(())
}

#[test]
fn test_pvwatts_against_reference() -> Result<(), Box<dyn Error>> {
    let records = load_poa_reference()?;
    let system = PvSystem::new(ModuleType::GlassPolymerOpenRack, 4.0, 0.77)?;

    let mut max_temperature_error = 0.0_f64;
    let mut max_power_error = 0.0_f64;
    for r in &records {
        let poa = irradiance::poa_irradiance(
            r.sun_zenith,
            r.sun_azimuth,
            &r.surface,
            r.dni,
            r.dhi,
            r.albedo,
        );
        let output = pvwatts::pvwatts(&system, &poa, r.ambient_temperature, r.wind_speed);
        max_temperature_error =
            max_temperature_error.max((output.cell_temperature - r.cell_temperature).abs());
        max_power_error = max_power_error.max((output.ac_power - r.ac_power).abs());
    }

    println!("Maximum cell temperature error: {max_temperature_error:.2e} °C");
    println!("Maximum AC power error: {max_power_error:.2e} kW");
    assert!(max_temperature_error < IRRADIANCE_TOLERANCE);
    assert!(max_power_error < POWER_TOLERANCE);
    Ok(())
}

#[test]
fn test_ac_power_never_exceeds_rating() -> Result<(), Box<dyn Error>> {
    let system = PvSystem::new(ModuleType::GlassGlassOpenRack, 5.0, 1.0)?;
    let surface = SurfaceOrientation::new(0.0, 180.0)?;
    for dni in [0.0, 200.0, 600.0, 1000.0, 1400.0] {
        let poa = irradiance::poa_irradiance(0.0, 0.0, &surface, dni, 150.0, 0.2);
        let output = pvwatts::pvwatts(&system, &poa, -5.0, 0.0);
        assert!(output.ac_power >= 0.0);
        assert!(output.ac_power <= system.ac_rating() + 1e-12);
    }
    Ok(())
}
