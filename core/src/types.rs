/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts, flag counts, and dug-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Conversion into an `ndarray` index.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Iterates the up to 8 in-bounds neighbors of `center` on a board of size
/// `bounds`, in reading order.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    DISPLACEMENTS
        .iter()
        .filter_map(move |&delta| apply_delta(center, delta, bounds))
}

fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(center: Coord2, bounds: Coord2) -> Vec<Coord2> {
        neighbors(center, bounds).collect()
    }

    #[test]
    fn center_cell_has_eight_neighbors() {
        let got = collect((4, 4), (9, 9));
        assert_eq!(got.len(), 8);
        for expected in [
            (3, 3),
            (4, 3),
            (5, 3),
            (3, 4),
            (5, 4),
            (3, 5),
            (4, 5),
            (5, 5),
        ] {
            assert!(got.contains(&expected), "missing neighbor {:?}", expected);
        }
    }

    #[test]
    fn corner_cell_has_three_neighbors() {
        let got = collect((0, 0), (9, 9));
        assert_eq!(got, vec![(1, 0), (0, 1), (1, 1)]);

        let got = collect((8, 8), (9, 9));
        assert_eq!(got, vec![(7, 7), (8, 7), (7, 8)]);
    }

    #[test]
    fn edge_cell_has_five_neighbors() {
        assert_eq!(collect((4, 0), (9, 9)).len(), 5);
        assert_eq!(collect((0, 4), (9, 9)).len(), 5);
    }

    #[test]
    fn neighbors_never_include_center() {
        for x in 0..3 {
            for y in 0..3 {
                assert!(!collect((x, y), (3, 3)).contains(&(x, y)));
            }
        }
    }
}
