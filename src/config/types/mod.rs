//! Configuration utility types.
//!
//! | Module   | Purpose                                       |
//! |----------|-----------------------------------------------|
//! | `error`  | Configuration error and diagnostic types      |
//! | `field`  | `FieldPath` used by `#[derive(Config)]`       |
//! | `handle` | Process-wide configuration (install once)     |
//! | `status` | Field status checks and key presence tracking |

mod error;
mod field;
pub mod handle;
mod status;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use handle::{cfg, init_config};
pub use status::{ConfigPresence, FieldStatus, check_field_status, check_section_status};
