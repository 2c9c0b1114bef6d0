use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use heatmap_core::dataset::{Observation, TemperatureDataset};
use heatmap_core::{HeatMap, RenderOptions};

fn build_dataset(years: usize) -> TemperatureDataset {
    let mut monthly_variance = Vec::with_capacity(years * 12);
    for y in 0..years {
        for month in 1..=12u32 {
            let variance = ((y * 12 + month as usize) as f64 * 0.01).sin() * 3.0;
            monthly_variance.push(Observation { year: 1753 + y as i32, month, variance });
        }
    }
    TemperatureDataset { base_temperature: 8.66, monthly_variance }
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &years in &[100usize, 263usize] {
        group.bench_function(format!("years_{years}"), |b| {
            let chart = HeatMap::new(build_dataset(years)).expect("valid dataset");
            let mut opts = RenderOptions::default();
            opts.width = 800;
            opts.height = 500;
            opts.draw_text = false;
            b.iter(|| -> Result<()> {
                let bytes = chart.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
