//! The shipped piece files must describe the built-in set.

use std::path::Path;

use blokus::engine::{load_catalog_dir, parse_catalog, standard_pieces, CatalogError};

#[test]
fn shipped_pieces_match_builtin_set() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("res/pieces");
    let loaded = load_catalog_dir(&dir).unwrap();
    assert_eq!(loaded, standard_pieces().unwrap());
}

#[test]
fn catalog_errors_name_the_piece() {
    let err = parse_catalog("0,0 & 0,0;1,0;2,0;3,0;4,0;5,0").unwrap_err();
    assert!(matches!(err, CatalogError::Shape { piece: 1, .. }));
    assert_eq!(err.to_string(), "piece #2: piece has 6 cells, at most 5 allowed");
}
