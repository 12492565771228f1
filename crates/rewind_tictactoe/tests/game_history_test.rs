//! Tests for the history controller: play, time-travel, sort order.

use rewind_tictactoe::{
    ClickOutcome, Game, IgnoredClick, Mark, Outcome, Position, SortOrder, Square,
};

fn play_indices(game: &mut Game, indices: &[usize]) {
    for &index in indices {
        let position = Position::from_index(index).expect("index on board");
        assert!(matches!(game.click(position), ClickOutcome::Placed { .. }));
    }
}

#[test]
fn test_top_row_win_example() {
    let mut game = Game::new();
    play_indices(&mut game, &[0, 4, 1, 7, 2]);

    let result = game.result().expect("X completes the top row");
    assert_eq!(result.outcome(), Outcome::Winner(Mark::X));
    assert_eq!(result.line_indices(), vec![0, 1, 2]);
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_click_on_occupied_cell_changes_nothing() {
    let mut game = Game::new();
    play_indices(&mut game, &[4]);
    let before = game.clone();

    let outcome = game.click(Position::Center);
    assert_eq!(outcome, ClickOutcome::Ignored(IgnoredClick::Occupied));
    assert_eq!(game, before);
}

#[test]
fn test_click_after_win_is_ignored() {
    let mut game = Game::new();
    play_indices(&mut game, &[0, 4, 1, 7, 2]);
    let before = game.clone();

    let outcome = game.click(Position::BottomRight);
    assert_eq!(outcome, ClickOutcome::Ignored(IgnoredClick::GameOver));
    assert_eq!(game, before);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut game = Game::new();
    // X O X / X O O / O X X
    play_indices(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    let result = game.result().expect("board is full");
    assert_eq!(result.outcome(), Outcome::Draw);
    assert!(result.line_indices().is_empty());
}

#[test]
fn test_time_travel_then_play_truncates() {
    let mut game = Game::new();
    play_indices(&mut game, &[0, 4, 1, 7]);
    assert_eq!(game.history().len(), 5);

    for k in 0..=3 {
        let mut branch = game.clone();
        branch.jump_to(k).expect("k is in range");
        assert_eq!(branch.history().len(), 5);

        let free = Position::valid_moves(branch.current_board())[0];
        assert!(matches!(branch.click(free), ClickOutcome::Placed { .. }));
        assert_eq!(branch.history().len(), k + 2);
        assert_eq!(branch.current_move(), k + 1);
        assert_eq!(&branch.history()[..=k], &game.history()[..=k]);
    }
}

#[test]
fn test_jump_sets_turn_parity() {
    let mut game = Game::new();
    play_indices(&mut game, &[0, 4, 1]);

    game.jump_to(2).unwrap();
    assert_eq!(game.next_mark(), Mark::X);
    game.jump_to(1).unwrap();
    assert_eq!(game.next_mark(), Mark::O);

    assert!(matches!(
        game.click(Position::BottomRight),
        ClickOutcome::Placed { mark: Mark::O, .. }
    ));
    assert_eq!(
        game.current_board().get(Position::BottomRight),
        Square::Occupied(Mark::O)
    );
}

#[test]
fn test_jump_back_to_finished_game_reopens_it() {
    let mut game = Game::new();
    play_indices(&mut game, &[0, 4, 1, 7, 2]);
    game.jump_to(4).unwrap();
    assert_eq!(game.result(), None);
    game.jump_to(5).unwrap();
    assert!(game.result().is_some());
}

#[test]
fn test_consecutive_snapshots_differ_by_one_mark() {
    let mut game = Game::new();
    play_indices(&mut game, &[4, 0, 8, 2, 1]);
    game.jump_to(2).unwrap();
    play_indices(&mut game, &[6, 3]);

    for pair in game.history().windows(2) {
        let changed = pair[0]
            .squares()
            .iter()
            .zip(pair[1].squares())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(changed, 1);
    }
}

#[test]
fn test_move_list_order() {
    let mut game = Game::new();
    play_indices(&mut game, &[0, 4, 1]);
    game.jump_to(1).unwrap();

    let ascending: Vec<usize> = game.moves().iter().map(|m| m.index()).collect();
    assert_eq!(ascending, vec![0, 1, 2, 3]);
    let current: Vec<usize> = game
        .moves()
        .iter()
        .filter(|m| m.is_current())
        .map(|m| m.index())
        .collect();
    assert_eq!(current, vec![1]);

    game.toggle_sort_order();
    let descending: Vec<usize> = game.moves().iter().map(|m| m.index()).collect();
    assert_eq!(descending, vec![3, 2, 1, 0]);

    game.toggle_sort_order();
    assert_eq!(game.sort_order(), SortOrder::Ascending);
    let again: Vec<usize> = game.moves().iter().map(|m| m.index()).collect();
    assert_eq!(again, ascending);
}

#[test]
fn test_game_round_trips_through_json() {
    let mut game = Game::with_sort_order(SortOrder::Descending);
    play_indices(&mut game, &[4, 0]);
    let json = serde_json::to_string(&game).unwrap();
    let restored: Game = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, game);
}

#[test]
fn test_deserialize_rejects_unreachable_games() {
    let empty = r#"{"history":[],"current_move":3,"sort_order":"ascending"}"#;
    assert!(serde_json::from_str::<Game>(empty).is_err());

    let mut game = Game::new();
    play_indices(&mut game, &[4, 0]);
    let mut json = serde_json::to_value(&game).unwrap();

    let mut past_end = json.clone();
    past_end["current_move"] = serde_json::json!(3);
    assert!(serde_json::from_value::<Game>(past_end).is_err());

    // Drop the middle snapshot: two marks appear at once.
    json["history"].as_array_mut().unwrap().remove(1);
    json["current_move"] = serde_json::json!(1);
    assert!(serde_json::from_value::<Game>(json).is_err());
}

#[test]
fn test_deserialize_rejects_moves_after_a_win() {
    let mut game = Game::new();
    play_indices(&mut game, &[0, 4, 1, 7, 2]);
    let mut json = serde_json::to_value(&game).unwrap();
    let extra = game.current_board().with_mark(Position::BottomRight, Mark::O);
    json["history"]
        .as_array_mut()
        .unwrap()
        .push(serde_json::to_value(extra).unwrap());
    assert!(serde_json::from_value::<Game>(json).is_err());
}
