use super::update_distance;
use crate::matrix::DistanceMatrix;

/// Counter state of the self-call formulation: one cursor position per call
/// frame the recursion would have opened.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
struct Cursor {
    intermediate: usize,
    start: usize,
    end: usize,
}

/// The recursive formulation of the sweep, driven as a trampoline.
///
/// The natural translation recurses once per (intermediate, start, end)
/// triple, which is n³ call frames. Each loop pass here takes exactly one of
/// the recursion's transitions instead: a counter that reached `size` rolls
/// over and bumps its parent, otherwise the cell is relaxed and the
/// innermost counter advances. Visitation order is identical to the
/// self-call version while the stack stays flat.
pub(crate) fn run(matrix: &mut DistanceMatrix) {
    let size = matrix.len();
    let mut cursor = Cursor {
        intermediate: 0,
        start: 0,
        end: 0,
    };

    loop {
        if cursor.intermediate >= size {
            // Base case of the recursion: every intermediate consumed.
            return;
        } else if cursor.start >= size {
            cursor = Cursor {
                intermediate: cursor.intermediate + 1,
                start: 0,
                end: 0,
            };
        } else if cursor.end >= size {
            cursor = Cursor {
                intermediate: cursor.intermediate,
                start: cursor.start + 1,
                end: 0,
            };
        } else {
            update_distance(matrix, cursor.start, cursor.intermediate, cursor.end);
            cursor.end += 1;
        }
    }
}
