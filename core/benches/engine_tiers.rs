use criterion::{Criterion, criterion_group, criterion_main};
use minado_core::{Game, GameConfig, deduce, generate};
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, config) in [
        ("beginner", GameConfig::BEGINNER),
        ("intermediate", GameConfig::INTERMEDIATE),
        ("expert", GameConfig::EXPERT),
    ] {
        group.bench_function(name, |b| {
            let mut rng = SmallRng::seed_from_u64(7);
            b.iter(|| generate(config, &mut rng).unwrap())
        });
    }
    group.finish();
}

fn bench_deduce(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(7);
    let board = generate(GameConfig::EXPERT, &mut rng).unwrap();
    let mut game = Game::new(board);
    let _ = game.reveal((15, 8)).unwrap();
    let info = game.snapshot();

    c.bench_function("deduce/expert_midgame", |b| b.iter(|| deduce(&info)));
}

criterion_group!(benches, bench_generate, bench_deduce);
criterion_main!(benches);
