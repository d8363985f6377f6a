//! Piece tests - shapes, transforms and corner sets

use blokus::core::{Corner, Offset, Piece, ShapeError};
use blokus::engine::standard_pieces;
use blokus::types::Color;

fn sorted(cells: &[Offset]) -> Vec<Offset> {
    let mut v = cells.to_vec();
    v.sort();
    v
}

fn rect(w: i32, h: i32) -> Piece {
    let cells: Vec<Offset> = (0..h).flat_map(|y| (0..w).map(move |x| (x, y))).collect();
    Piece::new(&cells).unwrap()
}

#[test]
fn test_new_rejects_bad_shapes() {
    assert_eq!(Piece::new(&[]), Err(ShapeError::Empty));
    assert_eq!(
        Piece::new(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]),
        Err(ShapeError::TooManyCells(6))
    );
    assert_eq!(
        Piece::new(&[(0, 0), (1, 0), (0, 0)]),
        Err(ShapeError::DuplicateCell(0, 0))
    );
}

#[test]
fn test_single_cell_is_every_corner() {
    let dot = Piece::new(&[(0, 0)]).unwrap();
    for corner in Corner::ALL {
        assert_eq!(dot.corner_cells(corner), &[(0, 0)]);
    }
}

#[test]
fn test_rectangle_corners() {
    let piece = rect(2, 3);
    assert_eq!(piece.top_left(), &[(0, 0)]);
    assert_eq!(piece.top_right(), &[(1, 0)]);
    assert_eq!(piece.bottom_left(), &[(0, 2)]);
    assert_eq!(piece.bottom_right(), &[(1, 2)]);
}

#[test]
fn test_l_tetromino_corners() {
    let l = Piece::new(&[(0, 0), (0, 1), (0, 2), (1, 2)]).unwrap();
    assert_eq!(sorted(l.top_left()), vec![(0, 0)]);
    assert_eq!(sorted(l.top_right()), vec![(0, 0), (1, 2)]);
    assert_eq!(sorted(l.bottom_left()), vec![(0, 2)]);
    assert_eq!(sorted(l.bottom_right()), vec![(1, 2)]);
}

#[test]
fn test_four_rotations_are_identity() {
    for piece in standard_pieces().unwrap() {
        let mut turned = piece.clone();
        for _ in 0..4 {
            turned.rotate();
        }
        assert_eq!(turned, piece);
    }
}

#[test]
fn test_rotation_swaps_dimensions() {
    let mut piece = rect(2, 3);
    piece.rotate();
    assert_eq!((piece.width(), piece.height()), (3, 2));
    assert!(piece.cells().all(|(x, y)| x >= 0 && y >= 0));
}

#[test]
fn test_mirror_is_an_involution() {
    for piece in standard_pieces().unwrap() {
        for (h, v) in [(true, false), (false, true), (true, true)] {
            let mut flipped = piece.clone();
            flipped.mirror(h, v);
            flipped.mirror(h, v);
            assert_eq!(flipped, piece);
        }
    }
}

#[test]
fn test_double_mirror_keeps_cell_count() {
    let mut piece = Piece::new(&[(0, 0), (0, 1), (0, 2), (1, 2)]).unwrap();
    piece.mirror(true, true);
    assert_eq!(piece.len(), 4);
    assert_eq!(
        piece.cells().collect::<Vec<_>>(),
        vec![(0, 0), (1, 0), (1, 1), (1, 2)]
    );
}

#[test]
fn test_horizontal_mirror_of_l() {
    let mut l = Piece::new(&[(0, 0), (0, 1), (0, 2), (1, 2)]).unwrap();
    l.mirror(true, false);
    assert_eq!(
        sorted(&l.cells().collect::<Vec<_>>()),
        vec![(0, 2), (1, 0), (1, 1), (1, 2)]
    );
}

#[test]
fn test_color_is_set_once() {
    let mut piece = rect(1, 1);
    assert_eq!(piece.color(), None);
    assert!(piece.set_color(Color::Red));
    assert!(!piece.set_color(Color::Blue));
    assert_eq!(piece.color(), Some(Color::Red));
}
