pub use rusb;
pub mod device;
pub mod devices;
pub mod error;
pub mod prober;
pub mod reports;

pub use crate::devices::TabletDevice;
pub use crate::error::{ErrorKind, ProbeError};
pub use crate::prober::{enable_tablet, enable_tablet_with_log_level, probe};
