//! Exercise boundary location.

use num_traits::Float;

/// Which side of the state axis the exercise region occupies.
///
/// Under the chosen state convention high states mean high rates, so a
/// payer exercises on the high side and a receiver on the low side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseSide {
    /// Exercise for states above the boundary (payer).
    Above,
    /// Exercise for states below the boundary (receiver).
    Below,
}

/// Outcome of the boundary scan at one exercise date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryLocation {
    /// Continuation dominates everywhere: the boundary is clamped off-grid
    /// on the exercise side.
    AllContinuation,
    /// Exercise dominates everywhere: the boundary is clamped off-grid on
    /// the continuation side.
    AllExercise,
    /// The regimes split; `index` is the innermost grid point at which
    /// exercise dominates (exercise occupies indices at or beyond it in the
    /// exercise direction).
    Split {
        /// First exercise-dominant grid point
        index: usize,
    },
}

/// Regime of one grid cell under a located boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRegime {
    /// Both cell endpoints continue.
    Continuation,
    /// Both cell endpoints exercise.
    Exercise,
    /// The boundary crosses inside the cell.
    Straddle,
}

/// Scan outward from the centre point for the regime change.
///
/// `exercise` and `continuation` are the tabulated candidate values on the
/// extended grid; dominance at a point means the exercise value strictly
/// exceeds the continuation value. The scan starts at `center` and walks in
/// the exercise direction (or back towards the continuation side when the
/// centre itself is exercise-dominant), assuming a single regime change
/// across the grid.
pub fn locate<T: Float>(
    exercise: &[T],
    continuation: &[T],
    side: ExerciseSide,
    center: usize,
) -> BoundaryLocation {
    debug_assert_eq!(exercise.len(), continuation.len());
    let dominates = |i: usize| exercise[i] > continuation[i];
    let len = exercise.len();

    match side {
        ExerciseSide::Above => {
            if !dominates(center) {
                for i in center + 1..len {
                    if dominates(i) {
                        return BoundaryLocation::Split { index: i };
                    }
                }
                BoundaryLocation::AllContinuation
            } else {
                for i in (0..center).rev() {
                    if !dominates(i) {
                        return BoundaryLocation::Split { index: i + 1 };
                    }
                }
                BoundaryLocation::AllExercise
            }
        }
        ExerciseSide::Below => {
            if !dominates(center) {
                for i in (0..center).rev() {
                    if dominates(i) {
                        return BoundaryLocation::Split { index: i };
                    }
                }
                BoundaryLocation::AllContinuation
            } else {
                for i in center + 1..len {
                    if !dominates(i) {
                        return BoundaryLocation::Split { index: i - 1 };
                    }
                }
                BoundaryLocation::AllExercise
            }
        }
    }
}

/// Classify cell `cell` (spanning grid points `cell` and `cell + 1`) under
/// the located boundary.
pub fn cell_regime(location: BoundaryLocation, side: ExerciseSide, cell: usize) -> CellRegime {
    match location {
        BoundaryLocation::AllContinuation => CellRegime::Continuation,
        BoundaryLocation::AllExercise => CellRegime::Exercise,
        BoundaryLocation::Split { index } => match side {
            ExerciseSide::Above => {
                if cell >= index {
                    CellRegime::Exercise
                } else if cell + 1 == index {
                    CellRegime::Straddle
                } else {
                    CellRegime::Continuation
                }
            }
            ExerciseSide::Below => {
                if cell + 1 <= index {
                    CellRegime::Exercise
                } else if cell == index {
                    CellRegime::Straddle
                } else {
                    CellRegime::Continuation
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Exercise values crossing zero at `boundary`, continuation flat zero.
    fn ramp(len: usize, boundary: f64, rising: bool) -> (Vec<f64>, Vec<f64>) {
        let exercise: Vec<f64> = (0..len)
            .map(|i| {
                let x = i as f64 - boundary;
                if rising {
                    x
                } else {
                    -x
                }
            })
            .collect();
        (exercise, vec![0.0; len])
    }

    #[test]
    fn test_split_above_from_continuation_center() {
        let (ex, cont) = ramp(21, 14.5, true);
        let location = locate(&ex, &cont, ExerciseSide::Above, 10);
        assert_eq!(location, BoundaryLocation::Split { index: 15 });
    }

    #[test]
    fn test_split_above_from_exercise_center() {
        let (ex, cont) = ramp(21, 4.5, true);
        let location = locate(&ex, &cont, ExerciseSide::Above, 10);
        assert_eq!(location, BoundaryLocation::Split { index: 5 });
    }

    #[test]
    fn test_split_below() {
        let (ex, cont) = ramp(21, 6.5, false);
        let location = locate(&ex, &cont, ExerciseSide::Below, 10);
        assert_eq!(location, BoundaryLocation::Split { index: 6 });
    }

    #[test]
    fn test_all_continuation_clamped() {
        let ex = vec![-1.0; 21];
        let cont = vec![0.0; 21];
        assert_eq!(
            locate(&ex, &cont, ExerciseSide::Above, 10),
            BoundaryLocation::AllContinuation
        );
        assert_eq!(
            locate(&ex, &cont, ExerciseSide::Below, 10),
            BoundaryLocation::AllContinuation
        );
    }

    #[test]
    fn test_all_exercise_clamped() {
        let ex = vec![1.0; 21];
        let cont = vec![0.0; 21];
        assert_eq!(
            locate(&ex, &cont, ExerciseSide::Above, 10),
            BoundaryLocation::AllExercise
        );
        assert_eq!(
            locate(&ex, &cont, ExerciseSide::Below, 10),
            BoundaryLocation::AllExercise
        );
    }

    #[test]
    fn test_ties_count_as_continuation() {
        // Equal values do not dominate.
        let ex = vec![0.0; 21];
        let cont = vec![0.0; 21];
        assert_eq!(
            locate(&ex, &cont, ExerciseSide::Above, 10),
            BoundaryLocation::AllContinuation
        );
    }

    #[test]
    fn test_cell_regimes_above() {
        let location = BoundaryLocation::Split { index: 5 };
        assert_eq!(
            cell_regime(location, ExerciseSide::Above, 3),
            CellRegime::Continuation
        );
        assert_eq!(
            cell_regime(location, ExerciseSide::Above, 4),
            CellRegime::Straddle
        );
        assert_eq!(
            cell_regime(location, ExerciseSide::Above, 5),
            CellRegime::Exercise
        );
    }

    #[test]
    fn test_cell_regimes_below() {
        let location = BoundaryLocation::Split { index: 5 };
        assert_eq!(
            cell_regime(location, ExerciseSide::Below, 4),
            CellRegime::Exercise
        );
        assert_eq!(
            cell_regime(location, ExerciseSide::Below, 5),
            CellRegime::Straddle
        );
        assert_eq!(
            cell_regime(location, ExerciseSide::Below, 6),
            CellRegime::Continuation
        );
    }

    proptest! {
        // The three regimes partition the cells: zero or one straddle cell,
        // contiguous zones, every cell classified.
        #[test]
        fn prop_partition_complete(
            boundary in 0.0_f64..20.0,
            rising in any::<bool>(),
        ) {
            let len = 21;
            let side = if rising { ExerciseSide::Above } else { ExerciseSide::Below };
            let (ex, cont) = ramp(len, boundary, rising);
            let location = locate(&ex, &cont, side, 10);

            let regimes: Vec<CellRegime> =
                (0..len - 1).map(|cell| cell_regime(location, side, cell)).collect();

            let straddles = regimes.iter().filter(|r| **r == CellRegime::Straddle).count();
            prop_assert!(straddles <= 1);

            // Zones are contiguous: the regime sequence never returns to an
            // earlier value after switching away from it.
            let order = |r: &CellRegime| match side {
                ExerciseSide::Above => match r {
                    CellRegime::Continuation => 0,
                    CellRegime::Straddle => 1,
                    CellRegime::Exercise => 2,
                },
                ExerciseSide::Below => match r {
                    CellRegime::Exercise => 0,
                    CellRegime::Straddle => 1,
                    CellRegime::Continuation => 2,
                },
            };
            for pair in regimes.windows(2) {
                prop_assert!(order(&pair[0]) <= order(&pair[1]));
            }
        }
    }
}
