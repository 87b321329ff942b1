//! Step replay against a logical slot model.
//!
//! ## Purpose
//!
//! A [`Replayer`] applies a step log one step at a time to a model of where
//! every element currently is: the main row, the joining area, the pivot
//! staging row and the holding slot. It is what a rendering layer keeps in
//! sync with its views, and what the engine's tests use to prove a log
//! reproduces the reported ordering.
//!
//! ## Design notes
//!
//! * **Typed slots**: Each area is an explicit map or row of element handles;
//!   no area shares keys with another.
//! * **Vacate, never shift**: Moving an element out of the main row leaves its
//!   slot empty until the matching `mergeComplete`/`dropPivot`/`unhold`, so
//!   every source index in a round refers to the pre-round layout.
//! * **Reconciliation**: [`Replayer::finish`] runs [`repair_indices`] over
//!   the final main row when its keys are not already `0..n`.
//!
//! ## Key concepts
//!
//! ### Step semantics
//! * `swap(a, b)`: exchange two main-row slots.
//! * `hold(m)`: lift slot `m` into the holding slot.
//! * `match(m, Some(s))`: slot `m` takes the element at `s`, vacating `s`.
//! * `match(m, None)`: slot `m` takes the held element.
//! * `unhold`: release the holding slot; an element still held lands in the
//!   lowest vacant main-row slot.
//! * `moveToJoiningArea(m, j)`: slot `m` moves to joining key `j`.
//! * `mergeComplete`: freed slots, ascending, receive the joining area in key
//!   order.
//! * `selectPivot(p)`: slot `p` starts a staged row anchored at address `p`.
//! * `moveBefore(m, t)` / `moveAfter(m, t)`: slot `m` is inserted before /
//!   after the staged element at row position `pivot + (t - p)`.
//! * `dropPivot`: freed slots, ascending, receive the staged row in order.
//!
//! ## Invariants
//!
//! * Elements in main row + joining area + staged row + holding slot always
//!   number exactly `n`.
//! * A finished replay has nothing held or staged and a dense main row.
//!
//! ## Non-goals
//!
//! * This module does not compare traits; it only moves handles.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::SortError;
use crate::primitives::slots::{SlotMap, is_dense, repair_indices, slot_values, slots_from};
use crate::primitives::step::Step;

// ============================================================================
// Staging Areas
// ============================================================================

/// Holding slot used by insertion sort.
#[derive(Debug, Clone)]
struct Held<E> {
    origin: usize,
    element: Option<E>,
}

/// Staged row built between `selectPivot` and `dropPivot`.
#[derive(Debug, Clone)]
struct PivotStage<E> {
    /// Address the pivot was selected at.
    anchor: usize,
    /// Current position of the pivot within `row`.
    pivot_pos: usize,
    row: Vec<E>,
    freed: Vec<usize>,
}

// ============================================================================
// Replayer
// ============================================================================

/// Slot model that applies steps in order.
#[derive(Debug, Clone)]
pub struct Replayer<E> {
    main: SlotMap<E>,
    joining: SlotMap<E>,
    freed: Vec<usize>,
    held: Option<Held<E>>,
    pivot: Option<PivotStage<E>>,
    len: usize,
    applied: usize,
}

impl<E: Clone> Replayer<E> {
    /// Start from `elements` occupying slots `0..n`.
    pub fn new(elements: &[E]) -> Self {
        Self {
            main: slots_from(elements),
            joining: SlotMap::new(),
            freed: Vec::new(),
            held: None,
            pivot: None,
            len: elements.len(),
            applied: 0,
        }
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// The main row, keyed by slot.
    pub fn main_row(&self) -> &SlotMap<E> {
        &self.main
    }

    /// The merge joining area, keyed by joining slot.
    pub fn joining_area(&self) -> &SlotMap<E> {
        &self.joining
    }

    /// The pivot staging row, in staged order.
    pub fn staged(&self) -> &[E] {
        self.pivot.as_ref().map(|stage| stage.row.as_slice()).unwrap_or(&[])
    }

    /// The element in the holding slot, if any.
    pub fn held(&self) -> Option<&E> {
        self.held.as_ref().and_then(|h| h.element.as_ref())
    }

    /// Number of steps applied so far.
    pub fn applied(&self) -> usize {
        self.applied
    }

    /// Total number of elements across every area.
    pub fn occupancy(&self) -> usize {
        self.main.len() + self.joining.len() + self.staged().len() + usize::from(self.held().is_some())
    }

    /// Whether nothing is held, joining or staged.
    pub fn is_settled(&self) -> bool {
        self.held.is_none() && self.joining.is_empty() && self.pivot.is_none()
    }

    // ========================================================================
    // Application
    // ========================================================================

    /// Apply every step in order.
    pub fn apply_all<'a, I>(&mut self, steps: I) -> Result<(), SortError>
    where
        I: IntoIterator<Item = &'a Step>,
    {
        for step in steps {
            self.apply(step)?;
        }
        Ok(())
    }

    /// Apply one step.
    pub fn apply(&mut self, step: &Step) -> Result<(), SortError> {
        #[cfg(feature = "tracing")]
        tracing::trace!(index = self.applied, %step, "replaying step");

        match *step {
            Step::Highlight { .. } | Step::Split { .. } => {}
            Step::Swap { a, b } => self.swap(a, b)?,
            Step::Hold { main } => self.hold(main)?,
            Step::Unhold => self.unhold()?,
            Step::Match { main, source } => self.fill(main, source)?,
            Step::MoveToJoiningArea { main, joining } => self.move_to_joining(main, joining)?,
            Step::MergeComplete => self.merge_complete()?,
            Step::SelectPivot { main } => self.select_pivot(main)?,
            Step::MoveBefore { main, target } => self.stage(main, target, false)?,
            Step::MoveAfter { main, target } => self.stage(main, target, true)?,
            Step::DropPivot => self.drop_pivot()?,
        }

        self.applied += 1;
        Ok(())
    }

    /// Check the replay is settled and return the final ordering.
    pub fn finish(self) -> Result<Vec<E>, SortError> {
        if !self.is_settled() {
            return Err(self.mismatch("log ended with elements held, joining or staged"));
        }
        if self.main.len() != self.len {
            return Err(self.mismatch(format!(
                "{} of {} elements remain in the main row",
                self.main.len(),
                self.len
            )));
        }
        let main = if is_dense(&self.main) {
            self.main
        } else {
            repair_indices(&self.main)
        };
        Ok(slot_values(&main))
    }

    // ========================================================================
    // Step Handlers
    // ========================================================================

    fn swap(&mut self, a: usize, b: usize) -> Result<(), SortError> {
        if !self.main.contains_key(&b) {
            return Err(self.mismatch(format!("slot {b} is empty")));
        }
        let first = self.take(a)?;
        if a == b {
            self.main.insert(a, first);
            return Ok(());
        }
        let second = self.take(b)?;
        self.main.insert(a, second);
        self.main.insert(b, first);
        Ok(())
    }

    fn hold(&mut self, slot: usize) -> Result<(), SortError> {
        if self.held.is_some() {
            return Err(self.mismatch("holding slot already in use"));
        }
        let element = self.take(slot)?;
        self.held = Some(Held {
            origin: slot,
            element: Some(element),
        });
        Ok(())
    }

    fn unhold(&mut self) -> Result<(), SortError> {
        let held = self
            .held
            .take()
            .ok_or_else(|| self.mismatch("unhold with nothing held"))?;
        if let Some(element) = held.element {
            let slot = (0..self.len)
                .find(|s| !self.main.contains_key(s))
                .unwrap_or(held.origin);
            self.place(slot, element)?;
        }
        Ok(())
    }

    fn fill(&mut self, slot: usize, source: Option<usize>) -> Result<(), SortError> {
        let element = match source {
            Some(source) => self.take(source)?,
            None => self
                .held
                .as_mut()
                .and_then(|h| h.element.take())
                .ok_or_else(|| self.mismatch("match from an empty holding slot"))?,
        };
        self.place(slot, element)
    }

    fn move_to_joining(&mut self, slot: usize, joining: usize) -> Result<(), SortError> {
        if self.joining.contains_key(&joining) {
            return Err(self.mismatch(format!("joining slot {joining} already occupied")));
        }
        let element = self.take(slot)?;
        self.joining.insert(joining, element);
        self.freed.push(slot);
        Ok(())
    }

    fn merge_complete(&mut self) -> Result<(), SortError> {
        if self.freed.len() != self.joining.len() {
            return Err(self.mismatch("joining area and freed slots disagree"));
        }
        let mut freed = core::mem::take(&mut self.freed);
        freed.sort_unstable();
        let joining = core::mem::take(&mut self.joining);
        for (slot, element) in freed.into_iter().zip(joining.into_values()) {
            self.place(slot, element)?;
        }
        Ok(())
    }

    fn select_pivot(&mut self, slot: usize) -> Result<(), SortError> {
        if self.pivot.is_some() {
            return Err(self.mismatch("pivot already selected"));
        }
        let element = self.take(slot)?;
        self.pivot = Some(PivotStage {
            anchor: slot,
            pivot_pos: 0,
            row: [element].to_vec(),
            freed: [slot].to_vec(),
        });
        Ok(())
    }

    fn stage(&mut self, slot: usize, target: usize, after: bool) -> Result<(), SortError> {
        let (anchor, pivot_pos, row_len) = match &self.pivot {
            Some(stage) => (stage.anchor, stage.pivot_pos, stage.row.len()),
            None => return Err(self.mismatch("move without a selected pivot")),
        };

        let position = if target >= anchor {
            pivot_pos.checked_add(target - anchor)
        } else {
            pivot_pos.checked_sub(anchor - target)
        }
        .and_then(|p| p.checked_add(usize::from(after)))
        .filter(|&p| p <= row_len)
        .ok_or_else(|| self.mismatch(format!("move target {target} is outside the staged row")))?;

        let element = self.take(slot)?;
        if let Some(stage) = self.pivot.as_mut() {
            stage.row.insert(position, element);
            if position <= stage.pivot_pos {
                stage.pivot_pos += 1;
            }
            stage.freed.push(slot);
        }
        Ok(())
    }

    fn drop_pivot(&mut self) -> Result<(), SortError> {
        let stage = self
            .pivot
            .take()
            .ok_or_else(|| self.mismatch("drop without a selected pivot"))?;
        let mut freed = stage.freed;
        freed.sort_unstable();
        for (slot, element) in freed.into_iter().zip(stage.row) {
            self.place(slot, element)?;
        }
        Ok(())
    }

    // ========================================================================
    // Slot Helpers
    // ========================================================================

    fn take(&mut self, slot: usize) -> Result<E, SortError> {
        match self.main.remove(&slot) {
            Some(element) => Ok(element),
            None => Err(self.mismatch(format!("slot {slot} is empty"))),
        }
    }

    fn place(&mut self, slot: usize, element: E) -> Result<(), SortError> {
        if slot >= self.len || self.main.contains_key(&slot) {
            return Err(self.mismatch(format!("slot {slot} is not free")));
        }
        self.main.insert(slot, element);
        Ok(())
    }

    fn mismatch(&self, reason: impl Into<String>) -> SortError {
        SortError::ReplayMismatch {
            step: self.applied,
            reason: reason.into(),
        }
    }
}

/// Replay `steps` over `elements` and return the final ordering.
pub fn replay<E: Clone>(elements: &[E], steps: &[Step]) -> Result<Vec<E>, SortError> {
    let mut replayer = Replayer::new(elements);
    replayer.apply_all(steps)?;
    replayer.finish()
}
