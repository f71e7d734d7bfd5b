//! Indoor and outdoor comfort for a handful of conditions.

use ladybug_core::comfort::adaptive::{self, AdaptiveOptions, AshraeAcceptability};
use ladybug_core::comfort::{pmv, set, utci};
use ladybug_core::psychrometrics;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Indoor conditions (met 1.1, clo 0.5, 50 % RH):");
    println!("   ta    vel     PMV    PPD    SET*  cooling");
    for (ta, vel) in [(22.0, 0.1), (26.0, 0.1), (28.0, 0.6), (30.0, 1.2)] {
        let still = pmv::pmv(ta, ta, vel, 50.0, 1.1, 0.5, 0.0)?;
        let elevated = set::pmv_elevated_air_speed(ta, ta, vel, 50.0, 1.1, 0.5, 0.0)?;
        println!(
            "{ta:5.1} {vel:6.2} {:7.2} {:6.1} {:7.2} {:7.2}",
            still.pmv, still.ppd, elevated.set, elevated.cooling_effect
        );
    }

    // Last two weeks of daily mean outdoor temperatures, most recent first
    let history = [
        24.1, 23.5, 22.8, 21.0, 22.4, 23.9, 25.2, 24.6, 23.3, 22.1, 21.7, 22.9, 23.4, 24.0,
    ];
    let prevailing = adaptive::running_mean_ashrae(&history)?;
    let running_mean = adaptive::running_mean_en15251(&history)?;
    let options = AdaptiveOptions::default().with_acceptability(AshraeAcceptability::Ninety);

    let ashrae = adaptive::ashrae55(27.0, 28.0, prevailing, 0.3, &options);
    let en = adaptive::en15251(27.0, 28.0, running_mean, 0.3, &options);
    println!("\nNaturally ventilated office at 27.5 °C operative:");
    println!(
        "  ASHRAE-55 (90 %): neutral {:.1} °C, band {:.1}..{:.1}, acceptable {}",
        ashrae.comfort_temperature, ashrae.lower_limit, ashrae.upper_limit, ashrae.acceptable
    );
    println!(
        "  EN-15251 (class II): neutral {:.1} °C, band {:.1}..{:.1}, acceptable {}",
        en.comfort_temperature, en.lower_limit, en.upper_limit, en.acceptable
    );

    println!("\nOutdoor conditions:");
    for (ta, tmrt, wind, rh) in [
        (-5.0, -8.0, 6.0, 80.0),
        (22.0, 30.0, 2.0, 45.0),
        (34.0, 60.0, 1.0, 30.0),
    ] {
        let dew_point = psychrometrics::dew_point(ta, rh)?;
        match utci::utci(ta, tmrt, wind, rh) {
            Some(result) => println!(
                "  ta {ta:5.1} °C, tmrt {tmrt:5.1} °C, dew point {dew_point:5.1} °C: \
                 UTCI {:5.1} °C ({:?})",
                result.utci, result.stress
            ),
            None => println!("  ta {ta:5.1} °C, tmrt {tmrt:5.1} °C: outside the UTCI range"),
        }
    }

    Ok(())
}
