use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ladybug_core::comfort::adaptive::{self, AdaptiveOptions};
use ladybug_core::comfort::{pmv, set, utci};
use std::hint::black_box;

fn benchmark_single_evaluation(c: &mut Criterion) {
    c.bench_function("pmv_single", |b| {
        b.iter(|| {
            pmv::pmv(
                black_box(24.0),
                black_box(25.0),
                black_box(0.1),
                black_box(50.0),
                black_box(1.1),
                black_box(0.6),
                black_box(0.0),
            )
            .unwrap()
        })
    });

    c.bench_function("pierce_set_single", |b| {
        b.iter(|| {
            set::pierce_set(
                black_box(24.0),
                black_box(25.0),
                black_box(0.1),
                black_box(50.0),
                black_box(1.1),
                black_box(0.6),
                black_box(0.0),
            )
            .unwrap()
        })
    });

    c.bench_function("pmv_elevated_air_speed_single", |b| {
        b.iter(|| {
            set::pmv_elevated_air_speed(
                black_box(29.0),
                black_box(29.0),
                black_box(0.8),
                black_box(50.0),
                black_box(1.2),
                black_box(0.5),
                black_box(0.0),
            )
            .unwrap()
        })
    });

    c.bench_function("utci_single", |b| {
        b.iter(|| {
            utci::utci(
                black_box(30.0),
                black_box(50.0),
                black_box(2.0),
                black_box(50.0),
            )
        })
    });

    c.bench_function("adaptive_ashrae55_single", |b| {
        let options = AdaptiveOptions::default();
        b.iter(|| {
            adaptive::ashrae55(
                black_box(26.0),
                black_box(27.0),
                black_box(22.0),
                black_box(0.3),
                &options,
            )
        })
    });
}

fn benchmark_annual_outdoor_comfort(c: &mut Criterion) {
    let mut group = c.benchmark_group("annual_utci");

    for &count in &[1000_u32, 8760] {
        group.throughput(Throughput::Elements(u64::from(count)));
        // Synthetic diurnal and seasonal cycle
        let hours: Vec<(f64, f64)> = (0..count)
            .map(|h| {
                let hour = f64::from(h);
                let seasonal = 10.0 * (hour / 8760.0 * std::f64::consts::TAU).sin();
                let diurnal = 5.0 * (hour / 24.0 * std::f64::consts::TAU).sin();
                (15.0 + seasonal + diurnal, 15.0 + seasonal + 3.0 * diurnal)
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("utci", count), &count, |b, _| {
            b.iter(|| {
                for &(ta, tr) in &hours {
                    let _result = utci::utci(black_box(ta), black_box(tr), 3.0, 60.0);
                }
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_evaluation,
    benchmark_annual_outdoor_comfort
);

criterion_main!(benches);
