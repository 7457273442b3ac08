//! 2v2 attacks, garbage and match outcome

use coop_tetris::core::Matrix;
use coop_tetris::engine::{InputSnapshot, Session, SessionConfig, Status};
use coop_tetris::types::{Block, Owner, ShapeKind, VisualEvent};

fn versus() -> Session {
    Session::new(&SessionConfig::versus(), 77, 0).unwrap()
}

fn place(session: &mut Session, id: usize, matrix: Matrix, x: i32, y: i32) {
    let p = session.player_mut(id).unwrap();
    p.matrix = matrix;
    p.x = x;
    p.y = y;
}

/// Ground `id` above a block at row 0 so its next lock tops the board out
fn doom(session: &mut Session, board_index: usize, id: usize) {
    session
        .board_mut(board_index)
        .unwrap()
        .grid_mut()
        .set(0, 0, Some(Block::garbage()));
    place(session, id, Matrix::of(ShapeKind::O), 0, -2);
}

#[test]
fn test_tetris_attacks_opponent() {
    let mut session = versus();
    {
        let grid = session.board_mut(0).unwrap().grid_mut();
        for y in 16..20 {
            for x in 0..13 {
                grid.set(x, y, Some(Block::garbage()));
            }
        }
    }
    place(&mut session, 0, Matrix::of(ShapeKind::I).rotate_cw(), 13, 16);

    session.tick(10, &InputSnapshot::idle());
    session.tick(430, &InputSnapshot::idle());

    assert_eq!(session.score(), 800);
    assert_eq!(session.lines(), 4);
    assert_eq!(session.team_lines(), [4, 0]);
    assert_eq!(session.boards()[1].pending_garbage(), 3);
    assert_eq!(session.boards()[0].pending_garbage(), 0);
    assert_eq!(
        session.drain_events(),
        vec![
            VisualEvent::LineClear {
                board_index: 0,
                rows: vec![19, 19, 19, 19],
                power: 4,
                at: 430
            },
            VisualEvent::GarbageQueued {
                board_index: 1,
                rows: 3,
                at: 430
            },
        ]
    );

    // garbage rises when the opponent next locks
    place(&mut session, 2, Matrix::of(ShapeKind::O), 0, 18);
    session.tick(440, &InputSnapshot::idle());
    session.tick(870, &InputSnapshot::idle());

    let board = &session.boards()[1];
    assert_eq!(board.pending_garbage(), 0);
    for y in 17..20 {
        assert_eq!(board.grid().filled_in_row(y), 13);
        for block in board.grid().row(y).iter().flatten() {
            assert_eq!(block.owner, Owner::Garbage);
        }
    }
    assert!(board.grid().is_occupied(0, 15));
    assert!(board.grid().is_occupied(1, 16));
    assert_eq!(
        session.drain_events(),
        vec![VisualEvent::GarbageRise {
            board_index: 1,
            rows: 3,
            at: 870
        }]
    );
}

#[test]
fn test_attack_lands_on_later_board_in_same_tick() {
    let mut session = versus();
    {
        let grid = session.board_mut(0).unwrap().grid_mut();
        for y in 18..20 {
            for x in 2..14 {
                grid.set(x, y, Some(Block::garbage()));
            }
        }
    }
    place(&mut session, 0, Matrix::of(ShapeKind::O), 0, 18);
    place(&mut session, 2, Matrix::of(ShapeKind::O), 0, 18);

    session.tick(10, &InputSnapshot::idle());
    session.tick(430, &InputSnapshot::idle());

    // board 1 locked after board 0 within the tick, so the attack was already queued
    let board = &session.boards()[1];
    assert_eq!(board.pending_garbage(), 0);
    assert_eq!(board.grid().filled_in_row(19), 13);
    assert!(board.grid().is_occupied(0, 17) && board.grid().is_occupied(1, 18));
    assert_eq!(
        session.drain_events(),
        vec![
            VisualEvent::LineClear {
                board_index: 0,
                rows: vec![19, 19],
                power: 2,
                at: 430
            },
            VisualEvent::GarbageQueued {
                board_index: 1,
                rows: 1,
                at: 430
            },
            VisualEvent::GarbageRise {
                board_index: 1,
                rows: 1,
                at: 430
            },
        ]
    );
}

#[test]
fn test_single_clear_sends_nothing() {
    let mut session = versus();
    {
        let grid = session.board_mut(0).unwrap().grid_mut();
        for x in 0..12 {
            grid.set(x, 19, Some(Block::garbage()));
        }
    }
    place(&mut session, 0, Matrix::of(ShapeKind::O), 12, 18);
    session.tick(10, &InputSnapshot::idle());
    session.tick(430, &InputSnapshot::idle());

    assert_eq!(session.lines(), 1);
    assert_eq!(session.boards()[1].pending_garbage(), 0);
    let events = session.drain_events();
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], VisualEvent::LineClear { power: 1, .. }));
}

#[test]
fn test_surviving_team_wins() {
    let mut session = versus();
    doom(&mut session, 1, 2);
    session.tick(10, &InputSnapshot::idle());
    session.tick(430, &InputSnapshot::idle());

    assert!(!session.is_running());
    assert_eq!(session.status(), Status::GameOver);
    assert_eq!(session.winner(), Some(0));
    assert!(!session.boards()[0].is_dead());
    assert!(!session.player(3).unwrap().alive);
    assert!(session.player(0).unwrap().alive);
    assert_eq!(session.summary().headline, "Team 1 wins. Match time: 0.4s.");
}

#[test]
fn test_simultaneous_top_out_is_draw() {
    let mut session = versus();
    doom(&mut session, 0, 0);
    doom(&mut session, 1, 2);
    session.tick(10, &InputSnapshot::idle());
    session.tick(430, &InputSnapshot::idle());

    assert!(!session.is_running());
    assert_eq!(session.winner(), None);
    assert!(session.boards().iter().all(|b| b.is_dead()));
    assert!(session.summary().headline.starts_with("Draw."));
}
