//! Distance and grid factorization helpers

use num_traits::Float;

/// Euclidean distance between two points
///
/// Generic over float width so callers can stay in whatever precision their
/// surface coordinates use.
pub fn euclidean_distance<T: Float>(a: [T; 2], b: [T; 2]) -> T {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    dx.mul_add(dx, dy * dy).sqrt()
}

/// Near-square factorization of a sticker count into (columns, rows)
///
/// Columns grow as `ceil(sqrt(count))` and rows absorb the remainder, so the
/// grid may hold more cells than stickers; trailing cells simply stay empty.
pub fn near_square_partition(count: usize) -> (usize, usize) {
    if count == 0 {
        return (0, 0);
    }

    let columns = (count as f64).sqrt().ceil() as usize;
    let rows = count.div_ceil(columns);
    (columns, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_covers_requested_count() {
        for count in 1..200 {
            let (columns, rows) = near_square_partition(count);
            assert!(columns * rows >= count, "undersized grid for {count}");
            assert!(columns >= rows, "rows should never exceed columns");
        }
    }

    #[test]
    fn test_partition_known_shapes() {
        assert_eq!(near_square_partition(0), (0, 0));
        assert_eq!(near_square_partition(1), (1, 1));
        assert_eq!(near_square_partition(6), (3, 2));
        assert_eq!(near_square_partition(15), (4, 4));
        assert_eq!(near_square_partition(16), (4, 4));
        assert_eq!(near_square_partition(17), (5, 4));
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = [3.0f64, 4.0];
        let b = [0.0f64, 0.0];
        assert!((euclidean_distance(a, b) - 5.0).abs() < f64::EPSILON);
        assert!((euclidean_distance(b, a) - 5.0).abs() < f64::EPSILON);
    }
}
