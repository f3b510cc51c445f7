//! Catering registry domain module.
//!
//! Menu capacity tracking and guest-menu assignment rules, implemented as
//! deterministic domain logic (no IO, no console, no storage).

pub mod error;
pub mod guest;
pub mod menu;
pub mod policy;
pub mod registry;
pub mod report;
pub mod snapshot;

pub use error::{AssignmentFailure, ReassignmentFailure, RegistryError, RegistryResult};
pub use guest::Guest;
pub use menu::MenuOption;
pub use policy::ReassignPolicy;
pub use registry::CateringRegistry;
pub use report::{AssignedMenu, AssignmentLine, Availability};
pub use snapshot::{GuestRecord, MenuRecord, RegistrySnapshot, SNAPSHOT_FORMAT_VERSION};
