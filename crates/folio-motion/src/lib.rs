//! Folio motion — the animated layers behind the portfolio hero.
//!
//! - [`GearField`]: a flat set of rotating gears, ticked once per frame and
//!   painted onto a [`Surface`](folio_engine::surface::Surface)
//! - [`Backdrop`]: the mounted component; owns the surface, the field and the
//!   cancel token that stops its frame loop
//! - [`CountUp`]: the hero's animated statistic counters
//!
//! Everything here is decorative. A missing drawing context disables the
//! backdrop silently instead of surfacing an error.

pub mod backdrop;
pub mod config;
pub mod count_up;
pub mod field;
pub mod gear;

pub use backdrop::Backdrop;
pub use config::{GearFieldConfig, GearStyle};
pub use count_up::CountUp;
pub use field::GearField;
pub use gear::{teeth_for_radius, Gear, Spin};
