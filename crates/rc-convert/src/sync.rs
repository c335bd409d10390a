//! Driver/follower synchronization of two linked (value, unit) slots.
//!
//! Every user event runs one cycle: the driver slot's text is parsed and
//! converted into the follower slot's unit, and the result overwrites the
//! follower's text. Value edits drive from the edited slot. Selector changes
//! and swaps always drive from slot A, so slot A's number is never rewritten
//! by a unit change.
//!
//! UI toolkits that observe every text change (including programmatic ones)
//! will report the follower write back as an edit. After each cycle the state
//! waits in [`Phase::FollowerUpdating`]; an edit on that slot carrying exactly
//! the written text is swallowed instead of driving a new cycle.
//!
//! The match is on text alone. With a toolkit that does not echo, the user's
//! first edit to the follower is swallowed if it equals the written text
//! exactly; that edit would produce the same dose, so both slots stay
//! consistent.

use crate::{ConvertResult, on_driver_changed};
use rc_core::Real;
use rc_units::UnitTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotId {
    /// Left slot; fixed input for selector changes.
    A,
    /// Right slot.
    B,
}

impl SlotId {
    pub fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// One (value, unit) display pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Text as shown in the value field.
    pub text: String,
    pub unit: String,
}

impl Slot {
    fn empty(unit: &str) -> Self {
        Self {
            text: String::new(),
            unit: unit.to_string(),
        }
    }
}

/// What the follower field should show after a cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FollowerValue {
    Value(Real),
    /// Driver text did not parse; the follower is cleared.
    Blank,
}

impl FollowerValue {
    pub fn value(self) -> Option<Real> {
        match self {
            Self::Value(v) => Some(v),
            Self::Blank => None,
        }
    }

    /// Text for the follower field. Lossless: parsing it back yields the same
    /// number. Very large or small magnitudes use exponent notation.
    pub fn display(self) -> String {
        match self {
            Self::Value(v) => {
                let abs = v.abs();
                if abs >= 1.0e15 || (abs > 0.0 && abs < 1.0e-4) {
                    format!("{v:e}")
                } else {
                    format!("{v}")
                }
            }
            Self::Blank => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No cycle in progress and no follower write pending.
    Idle,
    /// Computing the follower from this driver slot.
    Driving(SlotId),
    /// Follower slot was just written; an identical echo from it is ignored.
    FollowerUpdating(SlotId),
}

/// User input delivered by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    ValueEdited { slot: SlotId, text: String },
    UnitSelected { slot: SlotId, unit: String },
    /// Exchange the two selected units, keeping both numbers in place.
    Swap,
}

impl SyncEvent {
    pub fn value_edited(slot: SlotId, text: impl Into<String>) -> Self {
        Self::ValueEdited {
            slot,
            text: text.into(),
        }
    }

    pub fn unit_selected(slot: SlotId, unit: impl Into<String>) -> Self {
        Self::UnitSelected {
            slot,
            unit: unit.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    /// The follower was recomputed and its text overwritten.
    Updated {
        driver: SlotId,
        follower: SlotId,
        value: FollowerValue,
    },
    /// The event was the echo of the previous follower write.
    EchoSuppressed,
}

/// State of the two linked slots, owned by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncState {
    a: Slot,
    b: Slot,
    phase: Phase,
    last: Option<FollowerValue>,
}

impl SyncState {
    /// Both slots empty, both selectors on the table's first unit.
    pub fn new(table: &UnitTable) -> Self {
        let unit = &table.first().name;
        Self {
            a: Slot::empty(unit),
            b: Slot::empty(unit),
            phase: Phase::Idle,
            last: None,
        }
    }

    pub fn slot(&self, id: SlotId) -> &Slot {
        match id {
            SlotId::A => &self.a,
            SlotId::B => &self.b,
        }
    }

    fn slot_mut(&mut self, id: SlotId) -> &mut Slot {
        match id {
            SlotId::A => &mut self.a,
            SlotId::B => &mut self.b,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Value written by the most recent cycle.
    pub fn follower_value(&self) -> Option<FollowerValue> {
        self.last
    }

    /// Run one sync cycle for `event`.
    ///
    /// Fails only with an unknown unit; a rejected selector change leaves both
    /// slots unchanged. Unparseable text and conversions that overflow blank
    /// the follower instead of failing.
    pub fn handle(&mut self, table: &UnitTable, event: SyncEvent) -> ConvertResult<SyncOutcome> {
        if let Phase::FollowerUpdating(pending) = self.phase {
            self.phase = Phase::Idle;
            if let SyncEvent::ValueEdited { slot, text } = &event {
                if *slot == pending && *text == self.slot(pending).text {
                    tracing::debug!(slot = ?pending, "Suppressed follower echo");
                    return Ok(SyncOutcome::EchoSuppressed);
                }
            }
        }

        let driver = match event {
            SyncEvent::ValueEdited { slot, text } => {
                self.slot_mut(slot).text = text;
                slot
            }
            SyncEvent::UnitSelected { slot, unit } => {
                table.factor(&unit)?;
                self.slot_mut(slot).unit = unit;
                SlotId::A
            }
            SyncEvent::Swap => {
                let (unit_a, unit_b) = crate::on_units_swapped(
                    std::mem::take(&mut self.a.unit),
                    std::mem::take(&mut self.b.unit),
                );
                self.a.unit = unit_a;
                self.b.unit = unit_b;
                SlotId::A
            }
        };

        self.run_cycle(table, driver)
    }

    /// Re-validate against a freshly loaded table.
    ///
    /// Units missing from `table` fall back to its first unit, then slot B is
    /// re-derived from slot A.
    pub fn reconcile(&mut self, table: &UnitTable) -> ConvertResult<SyncOutcome> {
        self.phase = Phase::Idle;
        for id in [SlotId::A, SlotId::B] {
            let slot = self.slot_mut(id);
            if !table.contains(&slot.unit) {
                tracing::warn!(slot = ?id, unit = %slot.unit, "Unit missing after reload; resetting");
                slot.unit = table.first().name.clone();
            }
        }
        self.run_cycle(table, SlotId::A)
    }

    fn run_cycle(&mut self, table: &UnitTable, driver: SlotId) -> ConvertResult<SyncOutcome> {
        let follower = driver.other();
        self.phase = Phase::Driving(driver);

        let value = match on_driver_changed(
            table,
            &self.slot(driver).text,
            &self.slot(driver).unit,
            &self.slot(follower).unit,
        ) {
            Ok(value) => value,
            Err(err) => {
                self.phase = Phase::Idle;
                return Err(err);
            }
        };

        self.slot_mut(follower).text = value.display();
        self.last = Some(value);
        self.phase = Phase::FollowerUpdating(follower);

        tracing::debug!(
            driver = ?driver,
            follower = ?follower,
            from = %self.slot(driver).unit,
            to = %self.slot(follower).unit,
            text = %self.slot(follower).text,
            "Sync cycle"
        );

        Ok(SyncOutcome::Updated {
            driver,
            follower,
            value,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rc_core::{Tolerances, nearly_equal};
    use rc_units::TableSource;

    proptest! {
        #[test]
        fn slots_hold_the_same_dose(
            v in 1.0e-6..1.0e6_f64,
            u in 0..21_usize,
            w in 0..21_usize,
            edit_b in any::<bool>(),
        ) {
            let table = TableSource::Embedded.load().unwrap();
            let unit_a = table.entries()[u % table.len()].name.clone();
            let unit_b = table.entries()[w % table.len()].name.clone();

            let mut state = SyncState::new(&table);
            state.handle(&table, SyncEvent::unit_selected(SlotId::A, unit_a.clone())).unwrap();
            state.handle(&table, SyncEvent::unit_selected(SlotId::B, unit_b.clone())).unwrap();

            let driver = if edit_b { SlotId::B } else { SlotId::A };
            state.handle(&table, SyncEvent::value_edited(driver, v.to_string())).unwrap();

            let a: f64 = state.slot(SlotId::A).text.parse().unwrap();
            let b: f64 = state.slot(SlotId::B).text.parse().unwrap();
            let dose_a = a * table.factor(&unit_a).unwrap();
            let dose_b = b * table.factor(&unit_b).unwrap();
            prop_assert!(nearly_equal(dose_a, dose_b, Tolerances::default()), "{dose_a} != {dose_b}");
        }
    }
}
