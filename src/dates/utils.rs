use crate::dates::error::DateError;
use log::warn;

/// Collapses a failed date computation into the empty string a template expects.
pub(crate) fn or_empty(filter_name: &str, value: &str, result: Result<String, DateError>) -> String {
    match result {
        Ok(rendered) => rendered,
        Err(err) => {
            warn!("The {filter_name} filter could not handle '{value}'. {err}");
            String::new()
        }
    }
}
