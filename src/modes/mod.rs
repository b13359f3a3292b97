pub mod driver;
pub mod human;

pub use driver::{RoundDriver, RoundObserver, TickScheduler};
pub use human::HumanMode;
