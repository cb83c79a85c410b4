use gridsnake::{
    Board, Coordinates, FixedFood, GameState, Glyph, NoFood, RandomFood, SnakeDirection,
    SnakeError,
};
use tempfile::tempdir;

const ARENA: &str = "####################\n\
                     #                  #\n\
                     #  d>>v     *      #\n\
                     #     v            #\n\
                     #     >>>          #\n\
                     #                  #\n\
                     #   *      s       #\n\
                     #          v       #\n\
                     #          v  *    #\n\
                     #                  #\n\
                     # ^                #\n\
                     # w                #\n\
                     ####################\n";

fn food_count(game: &GameState) -> usize {
    game.board().count(Glyph::Food)
}

#[test]
fn file_round_trip_is_byte_identical() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("arena.txt");
    std::fs::write(&path, ARENA).unwrap();

    let game = GameState::load(&path).unwrap();
    let copy = dir.path().join("copy.txt");
    game.save(&copy).unwrap();

    assert_eq!(std::fs::read_to_string(&copy).unwrap(), ARENA);
}

#[test]
fn arena_snakes_are_recovered_in_scan_order() {
    let game = GameState::from_text(ARENA).unwrap();
    let snakes = game.snakes();
    assert_eq!(snakes.len(), 3);
    assert_eq!(snakes[0].tail(), Coordinates::new(3, 2));
    assert_eq!(snakes[0].head(), Coordinates::new(8, 4));
    assert_eq!(snakes[1].tail(), Coordinates::new(11, 6));
    assert_eq!(snakes[1].head(), Coordinates::new(11, 8));
    assert_eq!(snakes[2].tail(), Coordinates::new(2, 11));
    assert_eq!(snakes[2].head(), Coordinates::new(2, 10));
    assert_eq!(game.snake_length(0).unwrap(), 8);
    assert_eq!(game.snake_length(1).unwrap(), 3);
    assert_eq!(game.snake_length(2).unwrap(), 2);
}

#[test]
fn default_game_moves_one_cell() {
    let mut game = GameState::new_default().unwrap();
    game.tick(&mut NoFood);
    let snake = game.snake(0).unwrap();
    assert_eq!(snake.head(), Coordinates::new(6, 4));
    assert_eq!(snake.tail(), Coordinates::new(5, 4));
    assert_eq!(game.board().get(&Coordinates::new(6, 4)), Some(Glyph::Body(SnakeDirection::Right)));
    assert_eq!(game.board().get(&Coordinates::new(5, 4)), Some(Glyph::Tail(SnakeDirection::Right)));
    assert_eq!(game.board().get(&Coordinates::new(4, 4)), Some(Glyph::Empty));
}

#[test]
fn ticks_are_deterministic() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("start.txt");
    let mut start = GameState::new_default().unwrap();
    start.board_mut().set(&Coordinates::new(6, 4), Glyph::Food);
    start.save(&path).unwrap();

    let mut first = GameState::load(&path).unwrap();
    let mut second = GameState::load(&path).unwrap();
    let mut placer = FixedFood(Coordinates::new(3, 7));
    for _ in 0..6 {
        first.tick(&mut placer);
        second.tick(&mut placer);
    }
    assert_eq!(first, second);
    assert_eq!(first.to_text(), second.to_text());
}

#[test]
fn eating_adds_one_cell_and_food_is_replaced() {
    let mut game = GameState::new_default().unwrap();
    game.board_mut().set(&Coordinates::new(6, 4), Glyph::Food);
    let food_before = food_count(&game);
    let length_before = game.snake_length(0).unwrap();

    let summary = game.tick(&mut FixedFood(Coordinates::new(3, 7)));

    assert_eq!(summary.grew, 1);
    assert_eq!(game.snake_length(0).unwrap(), length_before + 1);
    assert_eq!(food_count(&game), food_before);
}

#[test]
fn normal_moves_keep_length() {
    let mut game = GameState::from_text(ARENA).unwrap();
    let lengths: Vec<_> = (0..3).map(|index| game.snake_length(index).unwrap()).collect();
    game.tick(&mut NoFood);
    for (index, length) in lengths.into_iter().enumerate() {
        if game.snake(index).unwrap().is_alive() {
            assert_eq!(game.snake_length(index).unwrap(), length);
        }
    }
}

#[test]
fn dead_snakes_stay_frozen() {
    let mut game = GameState::new_default().unwrap();
    game.board_mut().set(&Coordinates::new(6, 4), Glyph::Wall);
    game.tick(&mut NoFood);
    let dead = *game.snake(0).unwrap();
    assert!(!dead.is_alive());
    let board = game.board().clone();

    for _ in 0..10 {
        game.tick(&mut RandomFood::seeded(3));
    }

    assert_eq!(*game.snake(0).unwrap(), dead);
    assert_eq!(game.board(), &board);
}

#[test]
fn wall_collision_only_marks_the_head() {
    let mut game = GameState::new_default().unwrap();
    game.board_mut().set(&Coordinates::new(6, 4), Glyph::Wall);
    let mut expected = game.board().clone();
    expected.set(&Coordinates::new(5, 4), Glyph::Dead);

    game.tick(&mut NoFood);

    assert_eq!(game.board(), &expected);
    assert!(game.is_over());
}

/// Tail/head pairs in a stable order; indices are renumbered on load.
fn descriptors(game: &GameState) -> Vec<(i32, i32, i32, i32, bool)> {
    let mut found: Vec<_> = game
        .snakes()
        .iter()
        .map(|snake| {
            let (tail, head) = (snake.tail(), snake.head());
            (tail.x(), tail.y(), head.x(), head.y(), snake.is_alive())
        })
        .collect();
    found.sort();
    found
}

#[test]
fn recovery_matches_engine_state() {
    let mut game = GameState::from_text(ARENA).unwrap();
    let spots = [
        Coordinates::new(15, 2),
        Coordinates::new(3, 8),
        Coordinates::new(17, 10),
        Coordinates::new(9, 1),
        Coordinates::new(13, 11),
    ];
    let mut attempts = 0;
    let mut placed = 0;
    let mut food = |board: &mut Board| -> usize {
        for _ in 0..spots.len() {
            let spot = spots[attempts % spots.len()];
            attempts += 1;
            if board.get(&spot) == Some(Glyph::Empty) {
                board.set(&spot, Glyph::Food);
                placed += 1;
                return 1;
            }
        }
        0
    };
    let turns = [
        SnakeDirection::Left,
        SnakeDirection::Down,
        SnakeDirection::Right,
        SnakeDirection::Up,
    ];
    for step in 0..40 {
        if step % 4 == 0 {
            for index in 0..game.snakes().len() {
                // dead snakes refuse to turn, which is fine here
                let _ = game.steer(index, turns[(step / 4 + index) % turns.len()]);
            }
        }
        game.tick(&mut food);
        let recovered = GameState::from_text(&game.to_text()).unwrap();
        assert_eq!(
            descriptors(&recovered),
            descriptors(&game),
            "after tick {step}:\n{}",
            game.to_text()
        );
    }
    assert_eq!(placed, 2);
    assert_eq!(game.live_snakes(), 2);
}

#[test]
fn malformed_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ragged.txt");
    std::fs::write(&path, "#####\n#d> #\n####\n").unwrap();
    assert!(matches!(
        GameState::load(&path),
        Err(SnakeError::MalformedGrid { line: 3, .. })
    ));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let result = GameState::load(dir.path().join("nothing.txt"));
    assert!(matches!(result, Err(SnakeError::Io { .. })));
}

#[test]
fn unwritable_target_is_io_error() {
    let dir = tempdir().unwrap();
    let game = GameState::new_default().unwrap();
    let result = game.save(dir.path().join("missing").join("board.txt"));
    assert!(matches!(result, Err(SnakeError::Io { .. })));
}

#[test]
fn board_parses_through_from_str() {
    let board: Board = "###\n#*#\n###\n".parse().unwrap();
    assert_eq!(board.count(Glyph::Food), 1);
}
