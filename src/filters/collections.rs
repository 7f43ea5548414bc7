use crate::filters::error::CollectionError;
use crate::value::{Item, Record, Sequence};
use log::debug;
use rand::Rng;
use std::cmp::Ordering;

pub fn try_first_item(value: &Sequence) -> Result<Option<Item>, CollectionError> {
    pick(value, |_| Some(0))
}

pub fn try_last_item(value: &Sequence) -> Result<Option<Item>, CollectionError> {
    pick(value, |len| len.checked_sub(1))
}

/// Picks a uniformly random element using the caller's generator.
pub fn try_random_item<R: Rng + ?Sized>(
    value: &Sequence,
    rng: &mut R,
) -> Result<Option<Item>, CollectionError> {
    pick(value, |len| (len > 0).then(|| rng.gen_range(0..len)))
}

pub fn first_item(value: &Sequence) -> Option<Item> {
    absent_on_error("first", try_first_item(value))
}

pub fn last_item(value: &Sequence) -> Option<Item> {
    absent_on_error("last", try_last_item(value))
}

pub fn random_item<R: Rng + ?Sized>(value: &Sequence, rng: &mut R) -> Option<Item> {
    absent_on_error("random", try_random_item(value, rng))
}

fn pick(
    value: &Sequence,
    index_for: impl FnOnce(usize) -> Option<usize>,
) -> Result<Option<Item>, CollectionError> {
    match value {
        Sequence::Ints(ints) => Ok(index_for(ints.len())
            .and_then(|index| ints.get(index))
            .map(|int| Item::Int(*int))),
        Sequence::Strings(strings) => Ok(index_for(strings.len())
            .and_then(|index| strings.get(index))
            .map(|string| Item::Str(string.clone()))),
        Sequence::Records(_) => Err(CollectionError::unsupported(value.kind())),
    }
}

fn absent_on_error(
    filter_name: &str,
    result: Result<Option<Item>, CollectionError>,
) -> Option<Item> {
    result.unwrap_or_else(|err| {
        debug!("The {filter_name} filter returned nothing. {err}");
        None
    })
}

/// Sorts records by the value under `key`, keeping the order of equal keys.
///
/// Records lacking the key sort as if they held an empty string.
pub fn dictsort(records: &[Record], key: &str) -> Vec<Record> {
    sorted_by_key(records, key, |left, right| left.cmp(right))
}

pub fn dictsortreversed(records: &[Record], key: &str) -> Vec<Record> {
    sorted_by_key(records, key, |left, right| right.cmp(left))
}

fn sorted_by_key(
    records: &[Record],
    key: &str,
    compare: impl Fn(&str, &str) -> Ordering,
) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|left, right| compare(sort_value(left, key), sort_value(right, key)));
    sorted
}

fn sort_value<'a>(record: &'a Record, key: &str) -> &'a str {
    record.get(key).map(String::as_str).unwrap_or_default()
}
