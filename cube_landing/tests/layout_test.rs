use bevy::math::Vec3;

use cube_landing::glyph::layout::{letter_offsets, LETTER_PITCH};
use cube_landing::glyph::table::{is_supported, supported_letters, FALLBACK_LETTER};
use cube_landing::scene::{layout_records, WordRecord, WordSpec};
use cube_landing::{layout, lookup, word_layout, PlacedCube};

#[test]
fn every_supported_letter_places_one_cube_per_filled_cell() {
    for letter in supported_letters() {
        let glyph = lookup(letter);
        let cubes: Vec<PlacedCube> = layout(glyph, Vec3::ZERO).collect();
        assert_eq!(cubes.len(), glyph.filled_count(), "letter {letter}");
        for cube in &cubes {
            assert!(glyph.is_filled(cube.row, cube.col));
        }
    }
}

#[test]
fn layout_is_deterministic() {
    let base = Vec3::new(-1.0, 1.5, 0.0);
    for letter in "AYUSHDUBEY".chars() {
        let first: Vec<PlacedCube> = layout(lookup(letter), base).collect();
        let second: Vec<PlacedCube> = layout(lookup(letter), base).collect();
        assert_eq!(first, second);
    }
}

#[test]
fn unsupported_characters_match_the_fallback_layout() {
    let fallback: Vec<Vec3> = layout(lookup(FALLBACK_LETTER), Vec3::ZERO)
        .map(|c| c.position)
        .collect();
    for ch in ['0', '9', '.', '-', '@', 'y', 'u'] {
        assert!(!is_supported(ch));
        let cubes: Vec<Vec3> = layout(lookup(ch), Vec3::ZERO).map(|c| c.position).collect();
        assert_eq!(cubes, fallback, "char {ch:?}");
    }
}

#[test]
fn u_at_origin_has_its_bottom_row_lowest() {
    let cubes: Vec<PlacedCube> = layout(lookup('U'), Vec3::ZERO).collect();
    // 10001 x4 + 01110
    assert_eq!(cubes.len(), 11);

    let lowest = cubes
        .iter()
        .min_by(|a, b| a.position.y.total_cmp(&b.position.y))
        .unwrap();
    assert_eq!(lowest.row, 4);
    assert!(cubes
        .iter()
        .filter(|c| c.row < 4)
        .all(|c| c.position.y > lowest.position.y));
}

fn cube_cells(record: &WordRecord) -> Vec<(char, usize, usize, [f32; 3])> {
    record
        .cubes
        .iter()
        .map(|c| (c.letter, c.row, c.col, c.position))
        .collect()
}

#[test]
fn words_do_not_depend_on_each_other() {
    assert_eq!(letter_offsets(5), vec![-6.0, -3.0, 0.0, 3.0, 6.0]);
    assert_eq!(LETTER_PITCH, 3.0);

    let ayush = WordSpec::new("AYUSH", Vec3::new(-1.0, 1.5, 0.0));
    let dubey = WordSpec::new("DUBEY", Vec3::new(-1.0, -1.5, 0.0));
    let single = layout_records(&[ayush.clone()]);
    let pair = layout_records(&[ayush.clone(), dubey.clone()]);
    let swapped = layout_records(&[dubey, ayush]);

    assert_eq!(pair.len(), 2);
    assert_eq!(cube_cells(&single[0]), cube_cells(&pair[0]));
    assert_eq!(cube_cells(&single[0]), cube_cells(&swapped[1]));
    assert_eq!(single[0].position, pair[0].position);

    let alone = word_layout("AYUSH", Vec3::new(-1.0, 1.5, 0.0));

    // First cube of each letter lies within that letter's slot.
    for (i, letter) in "AYUSH".chars().enumerate() {
        let origin = -1.0 + letter_offsets(5)[i];
        let first = alone.iter().find(|c| c.letter == letter).unwrap();
        assert!((first.position.x - origin).abs() <= 1.5, "letter {letter}");
    }
}
