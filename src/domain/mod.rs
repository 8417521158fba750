//! Domain records consumed by the reporting engine. All of them are owned
//! and mutated by the external persistence collaborator; the engine only
//! reads snapshots.

pub mod common;
pub mod inventory;
pub mod invoice;
pub mod personnel;
pub mod project;
pub mod transaction;

pub use common::DateRange;
pub use inventory::{Equipment, EquipmentStatus, Material, Vehicle, VehicleStatus};
pub use invoice::{Invoice, InvoiceStatus};
pub use personnel::{AttendanceRecord, Employee, EmployeeStatus};
pub use project::{Project, ProjectStatus};
pub use transaction::{Transaction, TransactionKind};
