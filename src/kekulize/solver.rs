//! Constraint propagation over one ring group.
//!
//! Every open ring bond already carries one order unit. What is left to
//! decide per atom is how many of its unresolved bonds become double:
//!
//! ```text
//! remaining = free - sum(orders of resolved incident bonds)
//! required  = remaining - unresolved
//! ```
//!
//! `required == 0` forces the rest single, `required == unresolved` forces the
//! rest double, anything outside `0..=unresolved` is a contradiction. When
//! nothing is forced the lowest-index unresolved bond is made double and
//! propagation resumes.

use std::collections::VecDeque;

use tracing::trace;

use super::error::GroupError;
use super::incidence::IncidenceMatrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BondAssignment {
    #[default]
    Unresolved,
    Single,
    Double,
}

impl BondAssignment {
    fn order(self) -> i16 {
        match self {
            BondAssignment::Unresolved => 0,
            BondAssignment::Single => 1,
            BondAssignment::Double => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    Unresolved,
    Propagating,
    Stalled,
    Choosing,
    Solved,
    Failed,
}

pub struct ConstraintSolver<'a> {
    matrix: &'a IncidenceMatrix,
    free: &'a [i16],
    assignment: Vec<BondAssignment>,
    remaining: Vec<i16>,
    unresolved: Vec<i16>,
    state: SolverState,
}

impl<'a> ConstraintSolver<'a> {
    /// `free` holds one free valence per matrix row, as produced by
    /// [`free_valences`](super::budget::free_valences) for the same matrix.
    pub(crate) fn new(matrix: &'a IncidenceMatrix, free: &'a [i16]) -> Self {
        Self {
            matrix,
            free,
            assignment: vec![BondAssignment::Unresolved; matrix.cols()],
            remaining: free.to_vec(),
            unresolved: (0..matrix.rows())
                .map(|r| matrix.row_sum(r) as i16)
                .collect(),
            state: SolverState::Unresolved,
        }
    }

    pub fn state(&self) -> SolverState {
        self.state
    }

    /// Runs to a terminal state. On success the assignment is aligned with
    /// the matrix columns and contains no `Unresolved` entry.
    pub fn solve(&mut self) -> Result<Vec<BondAssignment>, GroupError> {
        let mut queue: VecDeque<usize> = (0..self.matrix.rows()).collect();
        self.transition(SolverState::Propagating);

        loop {
            if let Err(err) = self.propagate(&mut queue) {
                self.transition(SolverState::Failed);
                return Err(err);
            }

            let Some(col) = self.lowest_unresolved() else {
                if let Err(err) = self.verify() {
                    self.transition(SolverState::Failed);
                    return Err(err);
                }
                self.transition(SolverState::Solved);
                return Ok(self.assignment.clone());
            };

            self.transition(SolverState::Stalled);
            self.transition(SolverState::Choosing);
            trace!(bond = self.matrix.bond(col).index(), "tie-break: double");
            self.resolve(col, BondAssignment::Double, &mut queue);
            self.transition(SolverState::Propagating);
        }
    }

    fn transition(&mut self, next: SolverState) {
        trace!(from = ?self.state, to = ?next, "solver state");
        self.state = next;
    }

    fn propagate(&mut self, queue: &mut VecDeque<usize>) -> Result<(), GroupError> {
        let matrix = self.matrix;
        while let Some(row) = queue.pop_front() {
            let unresolved = self.unresolved[row];
            let required = self.remaining[row] - unresolved;
            if required < 0 || required > unresolved {
                return Err(GroupError::UnsolvableConstraint {
                    atom: matrix.atom(row).index(),
                });
            }
            if unresolved == 0 {
                continue;
            }

            let forced = if required == 0 {
                BondAssignment::Single
            } else if required == unresolved {
                BondAssignment::Double
            } else {
                continue;
            };
            for &col in matrix.incident(row) {
                if self.assignment[col] == BondAssignment::Unresolved {
                    self.resolve(col, forced, queue);
                }
            }
        }
        Ok(())
    }

    fn resolve(&mut self, col: usize, value: BondAssignment, queue: &mut VecDeque<usize>) {
        self.assignment[col] = value;
        for row in self.matrix.endpoints(col) {
            self.remaining[row] -= value.order();
            self.unresolved[row] -= 1;
            queue.push_back(row);
        }
    }

    fn lowest_unresolved(&self) -> Option<usize> {
        self.assignment
            .iter()
            .position(|&a| a == BondAssignment::Unresolved)
    }

    /// Recomputes every row sum from scratch.
    fn verify(&self) -> Result<(), GroupError> {
        for row in 0..self.matrix.rows() {
            let mut sum = 0;
            for &col in self.matrix.incident(row) {
                let assigned = self.assignment[col];
                if assigned == BondAssignment::Unresolved {
                    return Err(GroupError::UnsolvableConstraint {
                        atom: self.matrix.atom(row).index(),
                    });
                }
                sum += assigned.order();
            }
            if sum != self.free[row] {
                return Err(GroupError::UnsolvableConstraint {
                    atom: self.matrix.atom(row).index(),
                });
            }
        }
        Ok(())
    }
}
