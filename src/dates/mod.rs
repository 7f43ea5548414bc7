pub mod clock;
pub use clock::{Clock, FixedClock, SystemClock};
pub mod date_filter;
pub use date_filter::{date, try_date};
pub(crate) mod derived;
pub mod error;
pub use error::DateError;
pub mod format_token;
pub use format_token::{FormatToken, Segment, compile, translate};
pub mod humanize;
pub use humanize::{DurationHumanizer, TimeUnit};
pub mod relative;
pub use relative::{time_since, time_until, try_time_since, try_time_until};
pub(crate) mod utils;
