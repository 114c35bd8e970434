use criterion::{criterion_group, criterion_main, Criterion};
use hypersweep_core::Game;

fn bench_flood_fill(c: &mut Criterion) {
    c.bench_function("dig open 64x64 board", |b| {
        b.iter(|| {
            let mut game = Game::new_2d(64, 64, &[]).unwrap();
            game.dig(&[0, 0]).unwrap()
        })
    });

    c.bench_function("dig open 16x16x16 board", |b| {
        b.iter(|| {
            let mut game = Game::from_bombs(&[16, 16, 16], &[]).unwrap();
            game.dig(&[0, 0, 0]).unwrap()
        })
    });
}

criterion_group!(benches, bench_flood_fill);
criterion_main!(benches);
