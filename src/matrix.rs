/// Edge weight. Signed because negative edge weights (without negative
/// cycles) are supported; 64-bit so sentinel sums have headroom, see
/// [`crate::constants::NO_PATH`].
pub type Weight = i64;

/// Square grid of weights. Row i, column j is the current best-known
/// distance from vertex i to vertex j.
pub type DistanceMatrix = Vec<Vec<Weight>>;

/// Checks that the matrix is a square grid: every row as long as there are
/// rows. Pure predicate, the engine refuses to run on anything else.
pub fn is_valid_matrix(matrix: &[Vec<Weight>]) -> bool {
    let size = matrix.len();
    matrix.iter().all(|row| row.len() == size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_square_matrix() {
        let matrix = vec![vec![1, 3], vec![4, 3]];

        assert!(is_valid_matrix(&matrix));
    }

    #[test]
    fn test_accepts_empty_matrix() {
        let matrix: DistanceMatrix = vec![];

        assert!(is_valid_matrix(&matrix));
    }

    #[test]
    fn test_rejects_ragged_matrix() {
        let matrix = vec![vec![1, 3], vec![4]];

        assert!(!is_valid_matrix(&matrix));
    }

    #[test]
    fn test_rejects_non_square_matrix() {
        let matrix = vec![vec![1, 2, 3], vec![4, 5, 6]];

        assert!(!is_valid_matrix(&matrix));
    }
}
