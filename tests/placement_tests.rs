//! Placement tests - decks, players and the full rule pipeline

use blokus::core::{Board, Deck, Piece, PlacementError, Player};
use blokus::engine::standard_pieces;
use blokus::types::{Cell, Color, DECK_SIZE};

fn standard() -> Vec<Piece> {
    standard_pieces().unwrap()
}

#[test]
fn test_deck_needs_exactly_21_pieces() {
    let pieces = standard();
    assert!(Deck::new(&pieces).is_ok());
    assert_eq!(
        Deck::new(&pieces[..20]),
        Err(PlacementError::InvalidDeckSize(20))
    );

    let mut extra = pieces.clone();
    extra.push(pieces[0].clone());
    assert_eq!(Deck::new(&extra), Err(PlacementError::InvalidDeckSize(22)));
}

#[test]
fn test_deck_remove_keeps_order() {
    let pieces = standard();
    let mut deck = Deck::new(&pieces).unwrap();
    let removed = deck.remove(&pieces[3]).unwrap();
    assert_eq!(removed, pieces[3]);
    assert_eq!(deck.size(), DECK_SIZE - 1);
    assert!(!deck.is_full());
    assert_eq!(deck.get(3).unwrap(), &pieces[4]);

    assert_eq!(deck.remove(&pieces[3]), Err(PlacementError::PieceNotFound));
    assert_eq!(deck.get(DECK_SIZE - 1), Err(PlacementError::PieceNotFound));
}

#[test]
fn test_player_colors_their_deck() {
    let player = Player::new(Color::Yellow, &standard()).unwrap();
    assert!(player.is_opening());
    assert!(player.deck().iter().all(|p| p.color() == Some(Color::Yellow)));
}

#[test]
fn test_player_refuses_another_players_pieces() {
    let blue = Player::new(Color::Blue, &standard()).unwrap();
    assert_eq!(
        Player::new(Color::Red, blue.deck().pieces()),
        Err(PlacementError::ColorConflict)
    );

    // The same color may be dealt again.
    let again = Player::new(Color::Blue, blue.deck().pieces()).unwrap();
    assert!(again.deck().iter().all(|p| p.color() == Some(Color::Blue)));
}

#[test]
fn test_opening_then_chained_moves() {
    let mut board = Board::new(20, 20);
    let mut blue = Player::new(Color::Blue, &standard()).unwrap();

    // Monomino into the top-left corner.
    blue.place_piece(&mut board, 0, 0, 0).unwrap();
    assert_eq!(blue.deck().size(), 20);
    assert_eq!(board.get(0, 0), Some(Cell::Filled(Color::Blue)));

    // Domino (now slot 0) touching the monomino by its corner.
    board.save();
    blue.place_piece(&mut board, 0, 1, 1).unwrap();
    assert_eq!(blue.deck().size(), 19);
    assert_eq!(board.get(1, 1), Some(Cell::Filled(Color::Blue)));
    assert_eq!(board.get(2, 1), Some(Cell::Filled(Color::Blue)));
}

#[test]
fn test_opening_must_reach_a_corner() {
    let mut board = Board::new(20, 20);
    let mut red = Player::new(Color::Red, &standard()).unwrap();
    assert_eq!(
        red.place_piece(&mut board, 0, 10, 10),
        Err(PlacementError::NotInCorner)
    );
    assert_eq!(
        red.place_piece(&mut board, 1, 19, 19),
        Err(PlacementError::OutOfBoard)
    );
    red.place_piece(&mut board, 1, 18, 19).unwrap();
}

#[test]
fn test_colors_do_not_chain_off_each_other() {
    let mut board = Board::new(20, 20);
    let mut blue = Player::new(Color::Blue, &standard()).unwrap();
    let mut red = Player::new(Color::Red, &standard()).unwrap();

    blue.place_piece(&mut board, 0, 0, 0).unwrap();
    red.place_piece(&mut board, 0, 19, 19).unwrap();

    board.save();
    assert_eq!(
        red.place_piece(&mut board, 0, 1, 1),
        Err(PlacementError::NotAdjacent)
    );
    red.place_piece(&mut board, 0, 17, 18).unwrap();
}

#[test]
fn test_pieces_may_touch_other_colors() {
    let mut board = Board::new(4, 4);
    let mut blue = Player::new(Color::Blue, &standard()).unwrap();
    let mut red = Player::new(Color::Red, &standard()).unwrap();

    blue.place_piece(&mut board, 0, 0, 0).unwrap();
    red.place_piece(&mut board, 0, 3, 3).unwrap();

    // Blue domino at (1, 1)-(2, 1), chained off (0, 0).
    board.save();
    blue.place_piece(&mut board, 0, 1, 1).unwrap();

    // Red domino at (1, 2)-(2, 2): corner to red (3, 3), flat against blue.
    board.save();
    red.place_piece(&mut board, 0, 1, 2).unwrap();
    assert_eq!(board.get(1, 2), Some(Cell::Filled(Color::Red)));
    assert_eq!(board.get(2, 2), Some(Cell::Filled(Color::Red)));
    assert_eq!(board.get(1, 1), Some(Cell::Filled(Color::Blue)));
    assert_eq!(red.deck().size(), DECK_SIZE - 2);
}

#[test]
fn test_rejected_placement_changes_nothing() {
    let mut board = Board::new(20, 20);
    let mut green = Player::new(Color::Green, &standard()).unwrap();
    green.place_piece(&mut board, 0, 0, 0).unwrap();
    board.save();

    let before = board.snapshot();
    let deck_before = green.deck().clone();
    for (x, y) in [(5, 5), (0, 0), (19, 0)] {
        assert!(green.place_piece(&mut board, 2, x, y).is_err());
    }
    assert_eq!(board.snapshot(), before);
    assert_eq!(green.deck(), &deck_before);
}

#[test]
fn test_unknown_deck_slot() {
    let mut board = Board::new(20, 20);
    let mut green = Player::new(Color::Green, &standard()).unwrap();
    assert_eq!(
        green.place_piece(&mut board, DECK_SIZE, 0, 0),
        Err(PlacementError::PieceNotFound)
    );
}
