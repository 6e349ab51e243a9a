use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use guardian_maze::data::GameConfig;
use guardian_maze::game::Level;
use guardian_maze::world::{place_randomly, Grid, DEFAULT_PLACEMENT_ATTEMPTS};

const MAP: &str = include_str!("../assets/map/map1.txt");

fn bench_session_setup(c: &mut Criterion) {
    let config = GameConfig::default();
    let mut rng = StdRng::seed_from_u64(1);
    c.bench_function("level_generate", |b| {
        b.iter(|| Level::generate(black_box(&config), black_box(MAP), &mut rng))
    });
}

fn bench_fill_grid(c: &mut Criterion) {
    let config = GameConfig::default();
    let grid = Grid::build(MAP, config.symbols.clone()).expect("shipped map is valid");
    let mut rng = StdRng::seed_from_u64(2);
    c.bench_function("place_until_full", |b| {
        b.iter(|| {
            let mut grid = grid.clone();
            while place_randomly(&mut grid, &mut rng, 'X', None, DEFAULT_PLACEMENT_ATTEMPTS).is_ok() {}
            grid
        })
    });
}

criterion_group!(benches, bench_session_setup, bench_fill_grid);
criterion_main!(benches);
