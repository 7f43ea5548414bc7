pub mod config;
pub mod constants;
pub mod dates;
pub mod error;
pub mod filter_set;
pub mod filters;
pub mod value;

pub use dates::{date, time_since, time_until};
pub use filter_set::FilterSet;
pub use filters::{
    addslashes, capfirst, cut, dictsort, dictsortreversed, first_item, floatformat, iriencode,
    last_item, linenumbers, lower, pluralize, random_item, slugify, title, truncatechars,
    truncatewords, upper, urlencode, wordcount, wordwrap,
};
pub use value::{Item, Record, Sequence};
