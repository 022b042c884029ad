use tracing::info;

use crate::abi::AbiEntry;
use crate::error::FindError;
use crate::selector::{Selector, SelectorPrefix};

/// An error declaration together with its rebuilt signature and selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDescriptor<'a> {
    /// Position of the entry in the ABI array.
    pub index: usize,
    pub entry: &'a AbiEntry,
    pub signature: String,
    pub selector: Selector,
}

/// Walk the `error` entries of `entries` in declaration order.
///
/// Other entry kinds are skipped. A malformed error declaration yields an
/// `Err` item in its place; the iterator is lazy, so nothing past the point
/// where the caller stops is inspected.
pub fn error_selectors(
    entries: &[AbiEntry],
) -> impl Iterator<Item = Result<ErrorDescriptor<'_>, FindError>> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.is_error())
        .map(|(index, entry)| {
            let signature = entry.signature(index)?;
            let selector = Selector::from_signature(&signature);
            Ok(ErrorDescriptor {
                index,
                entry,
                signature,
                selector,
            })
        })
}

/// Find the first error declaration whose selector starts with `prefix`.
///
/// `Ok(None)` means the whole ABI was scanned without a match.
pub fn find_matching_error<'a>(
    entries: &'a [AbiEntry],
    prefix: &SelectorPrefix,
) -> Result<Option<ErrorDescriptor<'a>>, FindError> {
    for item in error_selectors(entries) {
        let descriptor = item?;
        info!(
            "found error type: {} with selector: {}",
            descriptor.entry.name.as_deref().unwrap_or_default(),
            descriptor.selector
        );

        if descriptor.selector.starts_with(prefix) {
            return Ok(Some(descriptor));
        }
    }

    Ok(None)
}
