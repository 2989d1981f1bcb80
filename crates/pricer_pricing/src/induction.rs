//! Backward induction over the state grid.

use crate::boundary::{self, BoundaryLocation, CellRegime, ExerciseSide};
use crate::error::PricerError;
use crate::grid::StateGrid;
use crate::moments::{integrate_between, MomentTable};
use crate::quadratic::{crossing_in_cell, fit_cells, Quadratic};
use crate::tabulation::flatten_tails;
use num_traits::Float;

/// Piecewise-quadratic content of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<T: Float> {
    /// A single quadratic covers the whole cell.
    Uniform(Quadratic<T>),
    /// The exercise boundary crosses the cell at `root`; `below` applies to
    /// the left of it and `above` to the right.
    Straddle {
        /// Quadratic left of the crossing
        below: Quadratic<T>,
        /// Quadratic right of the crossing
        above: Quadratic<T>,
        /// State coordinate of the crossing
        root: T,
    },
}

/// The value function at one exercise date.
///
/// Holds the tabulated values on the extended grid (flat in the outer
/// bands) together with the per-cell quadratic representation used by the
/// transition integral. Instances are immutable; each induction step builds
/// a fresh one.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueFunction<T: Float> {
    /// Tabulated values, one per extended grid point
    values: Vec<T>,
    /// Piecewise representation, one per grid cell
    cells: Vec<CellValue<T>>,
}

impl<T: Float> ValueFunction<T> {
    /// Assemble from parts; lengths must be consistent.
    pub(crate) fn new(values: Vec<T>, cells: Vec<CellValue<T>>) -> Self {
        debug_assert_eq!(values.len(), cells.len() + 1);
        Self { values, cells }
    }

    /// Return the tabulated values.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Return the per-cell representation.
    #[inline]
    pub fn cells(&self) -> &[CellValue<T>] {
        &self.cells
    }
}

/// Combine the exercise and continuation candidates at one date into the
/// date's value function.
///
/// Locates the boundary, fits quadratic segments to both candidates, then
/// assembles per-cell content: continuation cells and exercise cells carry
/// their candidate's quadratic; the straddle cell is split at the exact
/// crossing of the two fitted quadratics. Tabulated values take the
/// dominant candidate pointwise.
///
/// # Errors
///
/// [`PricerError::NumericDegeneracy`] when the straddle cell's difference
/// quadratic has no root inside the cell.
pub fn splice<T: Float>(
    grid: &StateGrid<T>,
    exercise: &[T],
    continuation: &[T],
    side: ExerciseSide,
) -> Result<ValueFunction<T>, PricerError> {
    let location = boundary::locate(exercise, continuation, side, grid.center());

    let x0 = grid.coordinate(0);
    let step = grid.step();
    let exercise_cells = fit_cells(exercise, x0, step);
    let continuation_cells = fit_cells(continuation, x0, step);

    let values: Vec<T> = (0..grid.extended_len())
        .map(|i| {
            let exercised = match location {
                BoundaryLocation::AllContinuation => false,
                BoundaryLocation::AllExercise => true,
                BoundaryLocation::Split { index } => match side {
                    ExerciseSide::Above => i >= index,
                    ExerciseSide::Below => i <= index,
                },
            };
            if exercised {
                exercise[i]
            } else {
                continuation[i]
            }
        })
        .collect();

    let mut cells = Vec::with_capacity(exercise_cells.len());
    for cell in 0..exercise_cells.len() {
        let content = match boundary::cell_regime(location, side, cell) {
            CellRegime::Continuation => CellValue::Uniform(continuation_cells[cell]),
            CellRegime::Exercise => CellValue::Uniform(exercise_cells[cell]),
            CellRegime::Straddle => {
                let difference = exercise_cells[cell] - continuation_cells[cell];
                let lo = grid.coordinate(cell);
                let hi = grid.coordinate(cell + 1);
                let root = crossing_in_cell(&difference, lo, hi).ok_or_else(|| {
                    PricerError::NumericDegeneracy {
                        reason: format!("no crossing root in straddle cell {}", cell),
                    }
                })?;
                match side {
                    ExerciseSide::Above => CellValue::Straddle {
                        below: continuation_cells[cell],
                        above: exercise_cells[cell],
                        root,
                    },
                    ExerciseSide::Below => CellValue::Straddle {
                        below: exercise_cells[cell],
                        above: continuation_cells[cell],
                        root,
                    },
                }
            }
        };
        cells.push(content);
    }

    Ok(ValueFunction::new(values, cells))
}

/// Propagate a value function one period back through the Gaussian kernel.
///
/// For each grid point `X_j` the continuation value is the expectation of
/// `prior` under `u = X_j + β·Z` with `Z` standard normal: every grid
/// boundary is mapped to `z = (u - X_j) / β`, the partial moments are
/// tabulated there, each cell quadratic is recomposed by the affine
/// substitution and integrated, straddle cells are integrated in two parts
/// split at the mapped root, and the flat tails contribute their value times
/// the residual mass. The output is tabulated on the inner band and
/// flattened outward, in a fresh buffer.
pub fn propagate<T: Float>(grid: &StateGrid<T>, prior: &ValueFunction<T>, period_vol: T) -> Vec<T> {
    let len = grid.extended_len();
    let mut out = vec![T::zero(); len];

    for j in grid.inner_range() {
        let x = grid.coordinate(j);
        let bounds: Vec<T> = (0..len)
            .map(|m| (grid.coordinate(m) - x) / period_vol)
            .collect();
        let table = MomentTable::new(&bounds);

        let mut total = table.lower_tail(prior.values()[0]) + table.upper_tail(prior.values()[len - 1]);
        for (cell, content) in prior.cells().iter().enumerate() {
            match content {
                CellValue::Uniform(q) => {
                    total = total + table.integrate_cell(cell, &q.shift_scale(x, period_vol));
                }
                CellValue::Straddle { below, above, root } => {
                    let z_root = (*root - x) / period_vol;
                    total = total
                        + integrate_between(
                            &below.shift_scale(x, period_vol),
                            bounds[cell],
                            z_root,
                        )
                        + integrate_between(
                            &above.shift_scale(x, period_vol),
                            z_root,
                            bounds[cell + 1],
                        );
                }
            }
        }
        out[j] = total;
    }

    flatten_tails(grid, &mut out);
    out
}
