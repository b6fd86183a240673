use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_common::games::tictactoe::{Board, BotInput, Mark, calculate_minimax_move, check_win};

fn board_from(marks: &[(usize, Mark)]) -> Board {
    marks
        .iter()
        .fold(Board::new(), |board, &(index, mark)| board.with_mark(index, mark))
}

fn bench_self_play() {
    let mut board = Board::new();
    let mut current_mark = Mark::X;

    while check_win(&board).is_none() {
        let Some(index) = BotInput::new(board, current_mark)
            .and_then(|input| calculate_minimax_move(&input))
        else {
            break;
        };
        board = board.with_mark(index, current_mark);
        match current_mark.opponent() {
            Some(next) => current_mark = next,
            None => break,
        }
    }
    black_box(board);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.bench_function("single_move_empty", |b| {
        let input = BotInput::new(Board::new(), Mark::X).unwrap();
        b.iter(|| calculate_minimax_move(black_box(&input)))
    });

    group.bench_function("reply_to_corner", |b| {
        let input = BotInput::new(board_from(&[(0, Mark::X)]), Mark::O).unwrap();
        b.iter(|| calculate_minimax_move(black_box(&input)))
    });

    group.bench_function("single_move_mid_game", |b| {
        let board = board_from(&[(0, Mark::X), (4, Mark::O), (8, Mark::X)]);
        let input = BotInput::new(board, Mark::O).unwrap();
        b.iter(|| calculate_minimax_move(black_box(&input)))
    });

    group.sample_size(10);
    group.bench_function("self_play", |b| b.iter(bench_self_play));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
