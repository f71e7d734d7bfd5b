use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ladybug_core::pvwatts::{self, ModuleType, PvSystem};
use ladybug_core::sky::{SkyContext, patches};
use ladybug_core::sunpath::SunpathConfig;
use ladybug_core::time::hour_to_date;
use ladybug_core::{Ephemeris, Location, SurfaceOrientation, irradiance, sun_position};
use std::hint::black_box;

fn benchmark_single_position(c: &mut Criterion) {
    let boston = Location::new(42.36, -71.06, -5.0).unwrap();

    for (name, ephemeris) in [
        ("noaa_single", Ephemeris::Noaa),
        ("sunpath_single", Ephemeris::Sunpath),
        ("perez_sky_single", Ephemeris::PerezSky),
    ] {
        c.bench_function(name, |b| {
            b.iter(|| {
                sun_position(
                    black_box(ephemeris),
                    black_box(&boston),
                    black_box(2013),
                    black_box(6),
                    black_box(21),
                    black_box(12.5),
                )
                .unwrap()
            })
        });
    }
}

fn benchmark_annual_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("annual_hourly_series");
    group.throughput(Throughput::Elements(8760));

    let boston = Location::new(42.36, -71.06, -5.0).unwrap();
    let hours: Vec<_> = (1..=8760).map(hour_to_date).collect();

    group.bench_function("sun_path", |b| {
        let config = SunpathConfig::new(boston);
        b.iter(|| {
            for date in &hours {
                let _context = config
                    .solar_context(
                        black_box(date.month()),
                        black_box(date.day()),
                        black_box(f64::from(date.hour()) - 0.5),
                        false,
                    )
                    .unwrap();
            }
        })
    });

    group.bench_function("poa_and_pvwatts", |b| {
        let surface = SurfaceOrientation::new(30.0, 180.0).unwrap();
        let system = PvSystem::new(ModuleType::GlassPolymerOpenRack, 4.0, 0.77).unwrap();
        b.iter(|| {
            for date in &hours {
                let position = sun_position(
                    Ephemeris::Noaa,
                    &boston,
                    2013,
                    date.month(),
                    date.day(),
                    f64::from(date.hour()) - 0.5,
                )
                .unwrap();
                let poa = irradiance::poa_irradiance(
                    black_box(position.zenith()),
                    black_box(position.azimuth()),
                    &surface,
                    black_box(600.0),
                    black_box(120.0),
                    black_box(0.2),
                );
                let _output = pvwatts::pvwatts(&system, &poa, black_box(20.0), black_box(2.0));
            }
        })
    });

    group.finish();
}

fn benchmark_sky(c: &mut Criterion) {
    let mut group = c.benchmark_group("sky_luminance");
    let sky = SkyContext::new(172, 2013, 14.0, -5.0, 42.36, -71.06, 3.0).unwrap();

    for &resolution in &[8_usize, 32, 64] {
        group.throughput(Throughput::Elements((4 * resolution * resolution) as u64));
        group.bench_with_input(
            BenchmarkId::new("sky_average", resolution),
            &resolution,
            |b, &resolution| b.iter(|| sky.sky_average(black_box(resolution)).unwrap()),
        );
    }

    group.bench_function("reinhart_patches", |b| {
        b.iter(|| {
            for direction in patches::reinhart() {
                let zenith = direction.z.clamp(-1.0, 1.0).acos();
                let azimuth = direction.x.atan2(direction.y);
                let _color = sky.sky_color(black_box(azimuth), black_box(zenith));
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_position,
    benchmark_annual_series,
    benchmark_sky
);

criterion_main!(benches);
