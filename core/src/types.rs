/// Single board axis, wide enough for any practical field.
pub type Axis = u16;

/// Grid position addressed as `(x, y)`.
pub type Pos = (Axis, Axis);

/// Count of cells or mines on a board.
pub type CellCount = u32;

/// Converts a position into an `ndarray` index.
pub(crate) const fn nd((x, y): Pos) -> [usize; 2] {
    [x as usize, y as usize]
}

pub const fn cell_total(width: Axis, height: Axis) -> CellCount {
    width as CellCount * height as CellCount
}

const DELTAS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Iterates the up-to-8 in-bounds neighbors of `center` under
/// 8-connectivity. The center itself is never yielded.
pub fn neighbors(center: Pos, bounds: Pos) -> impl Iterator<Item = Pos> {
    DELTAS.iter().filter_map(move |&(dx, dy)| {
        let x = i32::from(center.0) + dx;
        let y = i32::from(center.1) + dy;
        if x < 0 || y < 0 || x >= i32::from(bounds.0) || y >= i32::from(bounds.1) {
            None
        } else {
            Some((x as Axis, y as Axis))
        }
    })
}

/// Row-major iteration over every position of a `bounds`-sized grid.
pub fn positions(bounds: Pos) -> impl Iterator<Item = Pos> {
    (0..bounds.0).flat_map(move |x| (0..bounds.1).map(move |y| (x, y)))
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn corner_has_three_neighbors() {
        let found: Vec<Pos> = neighbors((0, 0), (4, 4)).collect();
        assert_eq!(found, [(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        assert_eq!(neighbors((1, 1), (3, 3)).count(), 8);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert_eq!(neighbors((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn positions_cover_the_whole_grid_once() {
        let all: Vec<Pos> = positions((3, 2)).collect();
        assert_eq!(all, [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
    }
}
