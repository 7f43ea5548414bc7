pub mod collections;
pub use collections::{
    dictsort, dictsortreversed, first_item, last_item, random_item, try_first_item,
    try_last_item, try_random_item,
};
pub mod encoding;
pub use encoding::{addslashes, iriencode, urlencode};
pub mod error;
pub use error::CollectionError;
pub mod layout;
pub use layout::{linenumbers, truncatechars, truncatewords, truncatewords_with_marker, wordwrap};
pub mod numeric;
pub use numeric::{floatformat, pluralize};
pub mod text;
pub use text::{capfirst, cut, lower, slugify, title, upper, wordcount};
