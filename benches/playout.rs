use criterion::{black_box, criterion_group, criterion_main, Criterion};

use senet_engine::board::Board;
use senet_engine::core::{EngineConfig, Player};
use senet_engine::engine::GameEngine;

fn valid_moves(c: &mut Criterion) {
    let board = Board::with_pieces(&[0, 3, 11, 20, 27], &[5, 9, 14, 22, 26]);
    let mut game =
        GameEngine::from_position(board, Player::Light, &EngineConfig::default().with_seed(1))
            .unwrap();
    game.force_dice(3);

    c.bench_function("valid_moves", |b| b.iter(|| black_box(&game).get_valid_moves()));
}

fn full_playout(c: &mut Criterion) {
    c.bench_function("full_playout", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let mut game = GameEngine::new(&EngineConfig::default().with_seed(seed));
            while !game.game_over() {
                game.roll_dice().unwrap();
                match game.get_valid_moves().last() {
                    Some(&origin) => {
                        game.make_move(origin).unwrap();
                    }
                    None => game.pass_turn().unwrap(),
                }
            }
            black_box(game.winner())
        })
    });
}

criterion_group!(benches, valid_moves, full_playout);
criterion_main!(benches);
