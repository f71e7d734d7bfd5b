//! Comfort models checked against reference tables.

use approx::assert_relative_eq;
use csv::ReaderBuilder;
use ladybug_core::comfort::{pmv, set, utci};
use std::error::Error;
use std::fs::File;

/// Parses every numeric row of a reference table.
fn load_rows(path: &str, columns: usize) -> Result<Vec<Vec<f64>>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .comment(Some(b'#'))
        .has_headers(false)
        .from_reader(file);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.len() >= columns {
            let row = record
                .iter()
                .take(columns)
                .map(str::parse::<f64>)
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
    }
    assert!(!rows.is_empty(), "No test records loaded from {path}");
    Ok(rows)
}

#[test]
fn test_pmv_against_reference() -> Result<(), Box<dyn Error>> {
    let rows = load_rows("tests/data/pmv_reference.csv", 8)?;
    println!("Testing {} PMV reference records", rows.len());

    let mut max_pmv_error = 0.0_f64;
    let mut max_ppd_error = 0.0_f64;
    for row in &rows {
        let result = pmv::pmv(row[0], row[1], row[2], row[3], row[4], row[5], 0.0)?;
        max_pmv_error = max_pmv_error.max((result.pmv - row[6]).abs());
        max_ppd_error = max_ppd_error.max((result.ppd - row[7]).abs());
    }

    println!("Maximum PMV error: {max_pmv_error:.2e}");
    println!("Maximum PPD error: {max_ppd_error:.2e} %");
    assert!(max_pmv_error < 1e-6);
    assert!(max_ppd_error < 1e-5);
    Ok(())
}

#[test]
fn test_pmv_against_iso7730_table() -> Result<(), Box<dyn Error>> {
    let rows = load_rows("tests/data/pmv_iso7730.csv", 8)?;
    println!("Testing {} ISO 7730 records", rows.len());

    for row in &rows {
        let result = pmv::pmv(row[0], row[1], row[2], row[3], row[4], row[5], 0.0)?;
        // The table prints PMV to two decimals and PPD to whole percent
        assert!(
            (result.pmv - row[6]).abs() <= 0.011,
            "PMV {} against {} for {:?}",
            result.pmv,
            row[6],
            &row[..6]
        );
        assert!(
            (result.ppd - row[7]).abs() < 0.6,
            "PPD {} against {} for {:?}",
            result.ppd,
            row[7],
            &row[..6]
        );
    }
    Ok(())
}

#[test]
fn test_set_against_reference() -> Result<(), Box<dyn Error>> {
    let rows = load_rows("tests/data/set_reference.csv", 8)?;
    println!("Testing {} SET reference records", rows.len());

    let mut max_set_error = 0.0_f64;
    let mut max_cooling_error = 0.0_f64;
    for (i, row) in rows.iter().enumerate() {
        let standard = set::pierce_set(row[0], row[1], row[2], row[3], row[4], row[5], 0.0)?;
        let elevated =
            set::pmv_elevated_air_speed(row[0], row[1], row[2], row[3], row[4], row[5], 0.0)?;

        let set_error = (standard - row[6]).abs();
        let cooling_error = (elevated.cooling_effect - row[7]).abs();
        if set_error > 1e-5 || cooling_error > 1e-4 {
            println!("Record {i}: {row:?}");
            println!(
                "  Actual: SET={standard:.8}, cooling effect={:.8}",
                elevated.cooling_effect
            );
        }
        assert_relative_eq!(elevated.set, standard);
        max_set_error = max_set_error.max(set_error);
        max_cooling_error = max_cooling_error.max(cooling_error);
    }

    println!("Maximum SET error: {max_set_error:.2e} °C");
    println!("Maximum cooling effect error: {max_cooling_error:.2e} K");
    assert!(max_set_error < 1e-5);
    assert!(max_cooling_error < 1e-4);
    Ok(())
}

#[test]
fn test_utci_against_reference() -> Result<(), Box<dyn Error>> {
    let rows = load_rows("tests/data/utci_reference.csv", 5)?;
    println!("Testing {} UTCI reference records", rows.len());

    let mut max_error = 0.0_f64;
    for row in &rows {
        let result = utci::utci(row[0], row[1], row[2], row[3])
            .ok_or("reference record outside the UTCI domain")?;
        max_error = max_error.max((result.utci - row[4]).abs());
        assert_eq!(result.stress, utci::ThermalStress::from_utci(result.utci));
    }

    println!("Maximum UTCI error: {max_error:.2e} °C");
    assert!(max_error < 1e-6);
    Ok(())
}

#[test]
fn test_elevated_air_speed_reference_case() {
    // Warm office with a ceiling fan
    let result = set::pmv_elevated_air_speed(29.0, 29.0, 0.8, 50.0, 1.2, 0.5, 0.0).unwrap();
    assert_relative_eq!(result.pmv, 0.178_433_38, epsilon = 1e-6);
    assert_relative_eq!(result.cooling_effect, 3.242_177_36, epsilon = 1e-5);
    assert_relative_eq!(
        result.adjusted_air_temperature,
        29.0 - result.cooling_effect,
        epsilon = 1e-12
    );
}

#[test]
fn test_utci_published_example() {
    // Documented pythermalcomfort example, printed to one decimal
    let result = utci::utci(25.0, 25.0, 1.0, 50.0).unwrap();
    assert_relative_eq!(result.utci, 24.6, epsilon = 0.05);
    assert!(result.comfortable);
}
