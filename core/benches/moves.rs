use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pushbox_core::{Direction, Grid};

/// Open square room with the player in a corner and a row of blocks along the top.
fn room(side: usize) -> String {
    let mut stage = String::with_capacity((side + 3) * (side + 2));
    stage.push_str(&"#".repeat(side + 2));
    stage.push('\n');
    for y in 0..side {
        stage.push('#');
        for x in 0..side {
            stage.push(match (x, y) {
                (0, 0) => 'p',
                (_, 1) if x % 2 == 1 => 'o',
                (_, 2) if x % 2 == 1 => '.',
                _ => ' ',
            });
        }
        stage.push_str("#\n");
    }
    stage.push_str(&"#".repeat(side + 2));
    stage.push('\n');
    stage
}

fn parse_stage(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_stage");
    for side in [8, 32, 128] {
        let stage = room(side);
        group.bench_with_input(BenchmarkId::from_parameter(side), &stage, |b, stage| {
            b.iter(|| Grid::from_stage(black_box(stage.as_bytes())))
        });
    }
    group.finish();
}

fn resolve_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_moves");
    for side in [8, 32, 128] {
        let grid = Grid::from_stage(room(side).as_bytes()).expect("bench stage must parse");
        group.bench_with_input(BenchmarkId::from_parameter(side), &grid, |b, grid| {
            b.iter(|| {
                let mut grid = grid.clone();
                for direction in [Direction::Right, Direction::Down, Direction::Left, Direction::Up] {
                    black_box(grid.update(direction));
                }
                black_box(grid.has_cleared())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, parse_stage, resolve_moves);
criterion_main!(benches);
