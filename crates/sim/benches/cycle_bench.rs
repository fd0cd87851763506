use assimil_sim::evolution::{ContinuousModel, CullingPolicy, MultiLocusModel};
use assimil_sim::genome::GenomeLayout;
use assimil_sim::simulation::{
    continuous_founders, multi_locus_founders, run_cycle, BreedingConfig, SimulationConfig,
};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

fn bench_continuous_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("continuous_cycle");
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let model = ContinuousModel::default();

    for founders in [100, 1000] {
        let config = SimulationConfig::new(
            BreedingConfig::default(),
            CullingPolicy::oldest_first(10_000, 10_000, 10),
            1,
            0,
            None,
        );
        let population = continuous_founders(founders);

        group.bench_with_input(BenchmarkId::from_parameter(founders), &founders, |b, _| {
            b.iter_batched(
                || population.clone(),
                |mut pop| run_cycle(&mut pop, &model, &config, 0, &mut rng),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_multi_locus_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_locus_cycle");
    group.sample_size(20);
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

    for quartets in [50, 200] {
        let layout = GenomeLayout::default();
        let model = MultiLocusModel::new(layout);
        let config = SimulationConfig::new(
            BreedingConfig::default(),
            CullingPolicy::random_total(2000, 0),
            1,
            0,
            None,
        );
        let population = multi_locus_founders(quartets, &layout);

        group.bench_with_input(BenchmarkId::from_parameter(quartets), &quartets, |b, _| {
            b.iter_batched(
                || population.clone(),
                |mut pop| run_cycle(&mut pop, &model, &config, 0, &mut rng),
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_continuous_cycle, bench_multi_locus_cycle);
criterion_main!(benches);
