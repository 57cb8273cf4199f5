//! ErgoDox matrix geometry.
//!
//! Keymaps are written hand by hand in the spatial order the keys sit on the board; the matrix is
//! wired column-major so [crate::ergodox_layer] transposes each key to its `[row][column]` cell.

/// Number of keys in each spatial row group of one hand: four full rows, the home row, the bottom
/// row and the three thumb cluster rows.
pub const HAND_ROW_LENGTHS: [usize; 8] = [7, 7, 6, 7, 5, 2, 1, 3];

pub const KEYS_PER_HAND: usize = 38;

/// The `(row, column)` matrix cell for each key, in the order [crate::ergodox_layer] takes them.
#[rustfmt::skip]
pub const SPATIAL_POSITIONS: [(usize, usize); KEYS_PER_HAND * 2] = [
    // left hand
    (0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0),
    (0, 1), (1, 1), (2, 1), (3, 1), (4, 1), (5, 1), (6, 1),
    (0, 2), (1, 2), (2, 2), (3, 2), (4, 2), (5, 2),
    (0, 3), (1, 3), (2, 3), (3, 3), (4, 3), (5, 3), (6, 3),
    (0, 4), (1, 4), (2, 4), (3, 4), (4, 4),
    (5, 5), (6, 5),
    (4, 5),
    (3, 5), (2, 5), (1, 5),
    // right hand
    (7, 0), (8, 0), (9, 0), (10, 0), (11, 0), (12, 0), (13, 0),
    (7, 1), (8, 1), (9, 1), (10, 1), (11, 1), (12, 1), (13, 1),
    (8, 2), (9, 2), (10, 2), (11, 2), (12, 2), (13, 2),
    (7, 3), (8, 3), (9, 3), (10, 3), (11, 3), (12, 3), (13, 3),
    (9, 4), (10, 4), (11, 4), (12, 4), (13, 4),
    (7, 5), (8, 5),
    (9, 5),
    (12, 5), (11, 5), (10, 5),
];

/// Build one layer of an ErgoDox keymap from keycodes listed in spatial order: the left hand's
/// rows top to bottom then its thumb cluster, followed by the right hand the same way. Matrix cells
/// with no switch are filled with `NO`.
#[macro_export]
macro_rules! ergodox_layer {
    (
        // left hand
        $k00:expr, $k01:expr, $k02:expr, $k03:expr, $k04:expr, $k05:expr, $k06:expr,
        $k10:expr, $k11:expr, $k12:expr, $k13:expr, $k14:expr, $k15:expr, $k16:expr,
        $k20:expr, $k21:expr, $k22:expr, $k23:expr, $k24:expr, $k25:expr,
        $k30:expr, $k31:expr, $k32:expr, $k33:expr, $k34:expr, $k35:expr, $k36:expr,
        $k40:expr, $k41:expr, $k42:expr, $k43:expr, $k44:expr,
        $k55:expr, $k56:expr,
        $k54:expr,
        $k53:expr, $k52:expr, $k51:expr,
        // right hand
        $k07:expr, $k08:expr, $k09:expr, $k0a:expr, $k0b:expr, $k0c:expr, $k0d:expr,
        $k17:expr, $k18:expr, $k19:expr, $k1a:expr, $k1b:expr, $k1c:expr, $k1d:expr,
        $k28:expr, $k29:expr, $k2a:expr, $k2b:expr, $k2c:expr, $k2d:expr,
        $k37:expr, $k38:expr, $k39:expr, $k3a:expr, $k3b:expr, $k3c:expr, $k3d:expr,
        $k49:expr, $k4a:expr, $k4b:expr, $k4c:expr, $k4d:expr,
        $k57:expr, $k58:expr,
        $k59:expr,
        $k5c:expr, $k5b:expr, $k5a:expr $(,)?
    ) => {
        [
            [$k00, $k10, $k20, $k30, $k40, $crate::keymap::NO_KEY],
            [$k01, $k11, $k21, $k31, $k41, $k51],
            [$k02, $k12, $k22, $k32, $k42, $k52],
            [$k03, $k13, $k23, $k33, $k43, $k53],
            [$k04, $k14, $k24, $k34, $k44, $k54],
            [$k05, $k15, $k25, $k35, $crate::keymap::NO_KEY, $k55],
            [$k06, $k16, $crate::keymap::NO_KEY, $k36, $crate::keymap::NO_KEY, $k56],
            [$k07, $k17, $crate::keymap::NO_KEY, $k37, $crate::keymap::NO_KEY, $k57],
            [$k08, $k18, $k28, $k38, $crate::keymap::NO_KEY, $k58],
            [$k09, $k19, $k29, $k39, $k49, $k59],
            [$k0a, $k1a, $k2a, $k3a, $k4a, $k5a],
            [$k0b, $k1b, $k2b, $k3b, $k4b, $k5b],
            [$k0c, $k1c, $k2c, $k3c, $k4c, $k5c],
            [$k0d, $k1d, $k2d, $k3d, $k4d, $crate::keymap::NO_KEY],
        ]
    };
}

#[cfg(test)]
#[path = "ergodox_test.rs"]
mod test;
