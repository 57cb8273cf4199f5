use super::*;
use crate::keymap::{Layer, NO_KEY};

#[rustfmt::skip]
const NUMBERED: Layer<14, 6> = crate::ergodox_layer!(
        // left hand
        0x100, 0x101, 0x102, 0x103, 0x104, 0x105, 0x106,
        0x107, 0x108, 0x109, 0x10a, 0x10b, 0x10c, 0x10d,
        0x10e, 0x10f, 0x110, 0x111, 0x112, 0x113,
        0x114, 0x115, 0x116, 0x117, 0x118, 0x119, 0x11a,
        0x11b, 0x11c, 0x11d, 0x11e, 0x11f,
        0x120, 0x121,
        0x122,
        0x123, 0x124, 0x125,
        // right hand
        0x126, 0x127, 0x128, 0x129, 0x12a, 0x12b, 0x12c,
        0x12d, 0x12e, 0x12f, 0x130, 0x131, 0x132, 0x133,
        0x134, 0x135, 0x136, 0x137, 0x138, 0x139,
        0x13a, 0x13b, 0x13c, 0x13d, 0x13e, 0x13f, 0x140,
        0x141, 0x142, 0x143, 0x144, 0x145,
        0x146, 0x147,
        0x148,
        0x149, 0x14a, 0x14b
);

#[test]
fn spatial_order_matches_matrix_cells() {
    for (i, (row, col)) in SPATIAL_POSITIONS.iter().enumerate() {
        assert_eq!(NUMBERED[*row][*col], 0x100 + i as u16, "key {i} at {row},{col}");
    }
}

#[test]
fn cells_without_switches_are_no() {
    let empty = NUMBERED.iter().flatten().filter(|c| **c == NO_KEY).count();
    assert_eq!(empty, 14 * 6 - KEYS_PER_HAND * 2);

    assert_eq!(NUMBERED[0][5], NO_KEY);
    assert_eq!(NUMBERED[6][2], NO_KEY);
    assert_eq!(NUMBERED[13][5], NO_KEY);
}

#[test]
fn hand_row_lengths_cover_each_hand() {
    assert_eq!(HAND_ROW_LENGTHS.iter().sum::<usize>(), KEYS_PER_HAND);
}

#[test]
fn thumb_clusters() {
    // left thumb: the two top keys, then the single key, then the big keys
    assert_eq!(NUMBERED[5][5], 0x100 + 32);
    assert_eq!(NUMBERED[6][5], 0x100 + 33);
    assert_eq!(NUMBERED[4][5], 0x100 + 34);
    assert_eq!(NUMBERED[3][5], 0x100 + 35);
    assert_eq!(NUMBERED[1][5], 0x100 + 37);

    // right thumb keys are listed left to right, the reverse of their matrix rows
    assert_eq!(NUMBERED[12][5], 0x100 + 38 + 35);
    assert_eq!(NUMBERED[10][5], 0x100 + 38 + 37);
}
