use chess_engine::board::Board;
use chess_engine::constants::SCORE_INFINITY;
use chess_engine::evaluation::evaluate;
use chess_engine::move_gen::{is_in_check, legal_move_list};
use chess_engine::search::{minimax, select_move_scored, AiPlayer, SearchConfig};
use chess_engine::types::{Color, Score};
use chess_engine::{Game, Outcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Minimax over the whole tree with no pruning
fn full_minimax(board: &Board, depth: u32, side: Color) -> Score {
    if depth == 0 {
        return evaluate(board);
    }
    let moves = legal_move_list(board, side);
    if moves.is_empty() {
        return match (is_in_check(board, side), side) {
            (true, Color::White) => -SCORE_INFINITY,
            (true, Color::Black) => SCORE_INFINITY,
            (false, _) => 0,
        };
    }
    let scores = moves
        .into_iter()
        .map(|mv| full_minimax(&board.with_move(mv), depth - 1, side.opposite()));
    match side {
        Color::White => scores.max().unwrap_or(-SCORE_INFINITY),
        Color::Black => scores.min().unwrap_or(SCORE_INFINITY),
    }
}

/// Positions reached by short seeded random games
fn sample_positions(seed: u64, count: usize) -> Vec<(Board, Color)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::initial();
    let mut side = Color::White;
    let mut out = Vec::new();

    while out.len() < count {
        let moves = legal_move_list(&board, side);
        if moves.is_empty() {
            break;
        }
        board.make_move(moves[rng.random_range(0..moves.len())]);
        side = side.opposite();
        out.push((board.clone(), side));
    }
    out
}

#[test]
fn depth_zero_returns_evaluation() {
    for (board, side) in sample_positions(5, 30) {
        let score = minimax(&board, 0, -SCORE_INFINITY, SCORE_INFINITY, side);
        assert_eq!(score, evaluate(&board));
    }
}

#[test]
fn pruning_does_not_change_scores() {
    //! Alpha-beta must agree with the unpruned tree on every sampled position
    for (board, side) in sample_positions(17, 12) {
        for depth in 1..=2 {
            assert_eq!(
                minimax(&board, depth, -SCORE_INFINITY, SCORE_INFINITY, side),
                full_minimax(&board, depth, side),
                "depth {depth} on {}",
                board.to_fen_placement()
            );
        }
    }
}

#[test]
fn pruning_does_not_change_tactical_scores() {
    let positions = [
        ("r3k3/1pp5/8/3q4/4N3/8/1PP2B2/R3K3", Color::White),
        ("k7/8/1K6/8/8/8/8/7R", Color::White),
        ("k7/8/1K6/8/8/8/8/7R", Color::Black),
        ("4k3/8/8/3q4/8/8/8/3RK3", Color::Black),
    ];
    for (fen, side) in positions {
        let board = Board::from_fen_placement(fen).unwrap();
        assert_eq!(
            minimax(&board, 3, -SCORE_INFINITY, SCORE_INFINITY, side),
            full_minimax(&board, 3, side),
            "{fen}"
        );
    }
}

#[test]
fn selected_score_is_best_root_score() {
    for (board, side) in sample_positions(23, 6) {
        let mut rng = StdRng::seed_from_u64(1);
        let Some(chosen) = select_move_scored(&board, 2, side, &mut rng) else {
            continue;
        };
        let scores = legal_move_list(&board, side)
            .into_iter()
            .map(|mv| full_minimax(&board.with_move(mv), 1, side.opposite()));
        let best = match side {
            Color::White => scores.max(),
            Color::Black => scores.min(),
        };
        assert_eq!(Some(chosen.score), best);
    }
}

#[test]
fn self_play_stays_legal() {
    //! Two seeded players alternate for a while; every committed move is
    //! accepted by the session's validation
    let mut game = Game::new();
    let mut white = AiPlayer::new(SearchConfig::default().with_depth(1).with_seed(1)).unwrap();
    let mut black = AiPlayer::new(SearchConfig::default().with_depth(1).with_seed(2)).unwrap();

    for _ in 0..20 {
        if game.outcome().is_some() {
            break;
        }
        let player = match game.side_to_move() {
            Color::White => &mut white,
            Color::Black => &mut black,
        };
        assert!(game.play_ai(player).unwrap().is_some());
    }
    assert!(game.history().len() <= 20);
    if let Some(Outcome::Winner(_)) = game.outcome() {
        assert!(game.state().is_terminal());
    }
}
