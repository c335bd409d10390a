//! rc-convert: dose conversion and two-slot synchronization for radconvert.
//!
//! Provides:
//! - `convert`: linear conversion between two units of a [`UnitTable`]
//! - `SyncState`: the driver/follower policy for two linked (value, unit) slots
//! - Presentation contract: the three calls a UI layer needs
//!
//! # Architecture
//!
//! Nothing here owns the table or any UI state. The presentation layer keeps a
//! `SyncState`, loads a `UnitTable` once at startup, and routes every user
//! event through [`SyncState::handle`]. Selector changes and swaps always
//! re-derive slot B from slot A.
//!
//! # Example
//!
//! ```
//! use rc_convert::{FollowerValue, SlotId, SyncEvent, SyncState};
//! use rc_units::UnitTable;
//!
//! let table = UnitTable::from_str_named(
//!     "unit,sievert_equivalent\nsievert,1\nmillisievert,0.001\n",
//!     "example",
//! )
//! .unwrap();
//!
//! let mut state = SyncState::new(&table);
//! state.handle(&table, SyncEvent::unit_selected(SlotId::A, "millisievert")).unwrap();
//! state.handle(&table, SyncEvent::value_edited(SlotId::A, "5")).unwrap();
//! assert_eq!(state.slot(SlotId::B).unit, "sievert");
//! assert!(matches!(state.follower_value(), Some(FollowerValue::Value(v)) if (v - 0.005).abs() < 1e-15));
//! ```

pub mod engine;
pub mod error;
pub mod presentation;
pub mod sync;

pub use engine::{ConversionRequest, convert};
pub use error::{ConvertError, ConvertResult, ParseError};
pub use presentation::{get_unit_names, on_driver_changed, on_units_swapped, parse_driver_value};
pub use sync::{FollowerValue, Phase, Slot, SlotId, SyncEvent, SyncOutcome, SyncState};

pub use rc_units::UnitTable;
