//! Total self-maps on `[0, n)` and their partially-filled precursor.
//!
//! "Is this function fully specified" is a first-class predicate here:
//! [`FunctionTable`] keeps one `Option<usize>` per slot while values are
//! being assigned, and only a successful [`FunctionTable::freeze`] (or a
//! validated [`SelfMap::from_values`]) yields a [`SelfMap`] the bijection
//! and cipher engines will accept.

use std::fmt;
use std::ops::Index;

/// Errors surfaced while assembling or validating a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionError {
    /// A slot was still unset when totality was required.
    Unset { slot: usize },
    /// A value lies outside `[0, n)`.
    OutOfRange { slot: usize, value: usize, n: usize },
}

impl fmt::Display for FunctionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionError::Unset { slot } => write!(f, "slot {slot} is unset"),
            FunctionError::OutOfRange { slot, value, n } => {
                write!(f, "slot {slot} holds {value}, outside [0, {n})")
            }
        }
    }
}

impl std::error::Error for FunctionError {}

/// A function under construction: `n` slots, each unset or in `[0, n)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FunctionTable {
    slots: Vec<Option<usize>>,
}

impl FunctionTable {
    pub fn new(n: usize) -> Self {
        Self {
            slots: vec![None; n],
        }
    }

    pub fn n(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, slot: usize) -> Option<usize> {
        self.slots.get(slot).copied().flatten()
    }

    /// Assign `value` to `slot`; both must lie in `[0, n)`.
    pub fn set(&mut self, slot: usize, value: usize) -> Result<(), FunctionError> {
        let n = self.slots.len();
        if slot >= n {
            return Err(FunctionError::OutOfRange { slot, value, n });
        }
        if value >= n {
            return Err(FunctionError::OutOfRange { slot, value, n });
        }
        self.slots[slot] = Some(value);
        Ok(())
    }

    pub fn clear(&mut self, slot: usize) {
        if let Some(s) = self.slots.get_mut(slot) {
            *s = None;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Totality check: every slot set, or the first unset slot reported.
    pub fn freeze(&self) -> Result<SelfMap, FunctionError> {
        let mut values = Vec::with_capacity(self.slots.len());
        for (slot, v) in self.slots.iter().enumerate() {
            match v {
                Some(value) => values.push(*value),
                None => return Err(FunctionError::Unset { slot }),
            }
        }
        Ok(SelfMap { values })
    }
}

/// A validated total function `[0, n) -> [0, n)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelfMap {
    values: Vec<usize>,
}

impl SelfMap {
    /// Validate a fully-specified value array.
    pub fn from_values(values: Vec<usize>) -> Result<Self, FunctionError> {
        let n = values.len();
        for (slot, &value) in values.iter().enumerate() {
            if value >= n {
                return Err(FunctionError::OutOfRange { slot, value, n });
            }
        }
        Ok(Self { values })
    }

    /// Construction bypass for values already known to be in range.
    pub(crate) fn from_values_unchecked(values: Vec<usize>) -> Self {
        debug_assert!(values.iter().all(|&v| v < values.len()));
        Self { values }
    }

    pub fn n(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[usize] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.values.iter().copied()
    }
}

impl Index<usize> for SelfMap {
    type Output = usize;

    fn index(&self, v: usize) -> &usize {
        &self.values[v]
    }
}
