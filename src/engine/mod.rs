pub(crate) mod iterative;
pub(crate) mod recursive;

use tracing::debug;

use crate::constants::NO_PATH;
use crate::error::MatrixError;
use crate::matrix::{DistanceMatrix, Weight, is_valid_matrix};
use crate::stopwatch::Stopwatch;

/// Traversal mechanism for the sweep. Both strategies visit the same
/// (intermediate, start, end) triples in the same order and produce
/// identical matrices; the recursive one exists to mirror the self-call
/// formulation for equivalence benchmarking.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub enum Strategy {
    #[default]
    Iterative,
    Recursive,
}

/// Sum of two path weights, absorbing over [`NO_PATH`]: extending an
/// unknown path never yields a finite one. Without this, a negative edge
/// behind a sentinel would erode it into a large-but-finite distance.
#[inline]
fn path_sum(a: Weight, b: Weight) -> Weight {
    if a >= NO_PATH || b >= NO_PATH {
        NO_PATH
    } else {
        a + b
    }
}

/// Relaxation step for a single (start, intermediate, end) triple.
///
/// Self-distances are forced to zero regardless of the input diagonal,
/// negative self-loops included. Every other cell is lowered to the detour
/// through `intermediate` when that detour is shorter.
#[inline]
pub(crate) fn update_distance(
    matrix: &mut DistanceMatrix,
    start: usize,
    intermediate: usize,
    end: usize,
) {
    if start == end {
        matrix[start][end] = 0;
    } else {
        let through = path_sum(matrix[start][intermediate], matrix[intermediate][end]);
        matrix[start][end] = matrix[start][end].min(through);
    }
}

/// https://en.wikipedia.org/wiki/Floyd%E2%80%93Warshall_algorithm
///
/// Validates the matrix, then relaxes it in place with the selected
/// strategy. The caller's allocation is consumed and handed back; on
/// completion cell (i, j) holds the shortest path weight from i to j, or
/// stays sentinel-high when j is unreachable from i.
pub fn execute(
    mut matrix: DistanceMatrix,
    strategy: Strategy,
) -> Result<DistanceMatrix, MatrixError> {
    if !is_valid_matrix(&matrix) {
        return Err(MatrixError::InvalidInput(
            "expected every row to be as long as there are rows".to_string(),
        ));
    }

    let watch = Stopwatch::start();
    debug!(
        "Starting {:?} shortest path sweep over {} vertices",
        strategy,
        matrix.len()
    );

    match strategy {
        Strategy::Iterative => iterative::run(&mut matrix),
        Strategy::Recursive => recursive::run(&mut matrix),
    }

    debug!("Shortest path sweep finished in {:?}", watch.elapsed());

    Ok(matrix)
}
