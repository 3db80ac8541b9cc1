use once_cell::sync::Lazy;

use super::{Color, Coord, SQUARE_COUNT};

/// Diagonal directions as `(dx, dy)`: up-left, down-left, up-right, down-right.
pub(crate) const DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// For every square and direction, the squares along that diagonal ordered
/// outward from the square itself (which is not included).
static RAYS: Lazy<Vec<[Vec<Coord>; 4]>> = Lazy::new(|| {
    (0..SQUARE_COUNT)
        .map(|idx| {
            let origin = Coord::from_index(idx);
            DIRECTIONS.map(|(dx, dy)| {
                let mut ray = Vec::new();
                let mut current = origin;
                while let Some(next) = current.offset(dx, dy) {
                    ray.push(next);
                    current = next;
                }
                ray
            })
        })
        .collect()
});

#[inline]
pub(crate) fn ray(from: Coord, dir: usize) -> &'static [Coord] {
    &RAYS[from.index()][dir]
}

/// Direction indices a man of `color` may step along, left before right
#[inline]
pub(crate) fn forward_directions(color: Color) -> [usize; 2] {
    match color {
        Color::White => [0, 2],
        Color::Black => [1, 3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_rays() {
        let corner = Coord(0, 0);
        assert!(ray(corner, 0).is_empty());
        assert!(ray(corner, 1).is_empty());
        assert!(ray(corner, 2).is_empty());
        assert_eq!(ray(corner, 3).len(), 9);
        assert_eq!(ray(corner, 3)[0], Coord(1, 1));
        assert_eq!(ray(corner, 3)[8], Coord(9, 9));
    }

    #[test]
    fn test_forward_directions_match_color() {
        for color in Color::BOTH {
            for dir in forward_directions(color) {
                assert_eq!(DIRECTIONS[dir].1, color.forward());
            }
            let [left, right] = forward_directions(color);
            assert!(DIRECTIONS[left].0 < DIRECTIONS[right].0);
        }
    }

    #[test]
    fn test_ray_lengths() {
        let sq = Coord(3, 6);
        assert_eq!(ray(sq, 0).len(), 3);
        assert_eq!(ray(sq, 1).len(), 3);
        assert_eq!(ray(sq, 2).len(), 6);
        assert_eq!(ray(sq, 3).len(), 3);
    }
}
