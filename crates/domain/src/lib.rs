mod reminder;
mod shared;
mod time_of_day;

pub use reminder::{Reminder, DEFAULT_REMINDER_MESSAGE};
pub use shared::entity::{Entity, ID};
pub use time_of_day::{InvalidTimeOfDayError, TimeOfDay};
