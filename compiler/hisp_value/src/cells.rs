//! Owned children of an S- or Q-expression.
//!
//! Lists nest as deep as the input does. Everything that walks a `Cells`
//! recursively either goes through `ensure_sufficient_stack` (clone,
//! equality, debug output) or avoids recursion entirely (drop), so a list
//! nested a hundred thousand levels deep is as safe to copy and free as a
//! flat one.

use std::fmt;
use std::ops::{Deref, DerefMut};

use hisp_stack::ensure_sufficient_stack;

use crate::value::Value;

/// The cells of a list value.
///
/// Derefs to `Vec<Value>` for ordinary list manipulation.
#[derive(Default)]
pub struct Cells(Vec<Value>);

impl Cells {
    /// Take the cells out as a plain vector.
    pub fn into_vec(mut self) -> Vec<Value> {
        std::mem::take(&mut self.0)
    }
}

impl From<Vec<Value>> for Cells {
    fn from(cells: Vec<Value>) -> Self {
        Cells(cells)
    }
}

impl Deref for Cells {
    type Target = Vec<Value>;

    fn deref(&self) -> &Vec<Value> {
        &self.0
    }
}

impl DerefMut for Cells {
    fn deref_mut(&mut self) -> &mut Vec<Value> {
        &mut self.0
    }
}

impl IntoIterator for Cells {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl Clone for Cells {
    fn clone(&self) -> Self {
        Cells(
            self.0
                .iter()
                .map(|cell| ensure_sufficient_stack(|| cell.clone()))
                .collect(),
        )
    }
}

impl PartialEq for Cells {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(&other.0)
                .all(|(lhs, rhs)| ensure_sufficient_stack(|| lhs == rhs))
    }
}

impl fmt::Debug for Cells {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| f.debug_list().entries(self.0.iter()).finish())
    }
}

/// Frees nested lists from a worklist instead of recursing per level.
impl Drop for Cells {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.0);
        while let Some(cell) = pending.pop() {
            if let Value::SExpr(mut inner) | Value::QExpr(mut inner) = cell {
                pending.append(&mut inner.0);
            }
        }
    }
}
