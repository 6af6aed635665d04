use super::update_distance;
use crate::matrix::DistanceMatrix;

/// Triple-nested sweep: intermediate vertex outermost so that every update
/// using intermediates `0..k` is committed before intermediate `k + 1` is
/// considered. Exactly n³ relaxations, O(1) auxiliary memory.
pub(crate) fn run(matrix: &mut DistanceMatrix) {
    let size = matrix.len();

    for intermediate in 0..size {
        for start in 0..size {
            for end in 0..size {
                update_distance(matrix, start, intermediate, end);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::{Strategy, execute};
    use crate::test_matrix_utils::fixtures;

    #[test]
    fn test_four_vertex_graph() {
        let (input, expected) = fixtures::four_vertex();

        let result = execute(input, Strategy::Iterative).unwrap();

        assert_eq!(result, expected);
    }

    #[test]
    fn test_five_vertex_graph() {
        let (input, expected) = fixtures::five_vertex();

        let result = execute(input, Strategy::Iterative).unwrap();

        assert_eq!(result, expected);
    }

    #[test]
    fn test_six_vertex_graph() {
        let (input, expected) = fixtures::six_vertex();

        let result = execute(input, Strategy::Iterative).unwrap();

        assert_eq!(result, expected);
    }

    #[test]
    fn test_ten_vertex_graph() {
        let (input, expected) = fixtures::ten_vertex();

        let result = execute(input, Strategy::Iterative).unwrap();

        assert_eq!(result, expected);
    }

    #[test]
    fn test_negative_weights_graph() {
        let (input, expected) = fixtures::negative_weights();

        let result = execute(input, Strategy::Iterative).unwrap();

        assert_eq!(result, expected);
    }
}
