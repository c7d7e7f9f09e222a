//! Validation errors raised while building a selector.

use thiserror::Error;

/// A rule of the selector grammar that an append would break.
///
/// The messages are fixed; they never include the offending value, so
/// callers match on the variant rather than on the text.
///
/// # Examples
///
/// ```rust
/// use kata_selector::{SelectorBuilder, SelectorError};
///
/// let builder = SelectorBuilder::new();
/// let err = builder.id("main").id("other").unwrap_err();
/// assert_eq!(err, SelectorError::Cardinality);
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorError {
    /// A second element, id or pseudo-element was appended to a chain that
    /// already has one.
    #[error("Element, id and pseudo-element should not occur more than one time inside the selector")]
    Cardinality,

    /// A part was appended after a part that must come later in a compound
    /// selector.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    Order,
}
