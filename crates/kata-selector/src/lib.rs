//! CSS selector builder with grammar validation.
//!
//! # Scope
//!
//! This crate builds selector *strings*; it does not parse or match them.
//!
//! - **Simple selectors** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Type, id, class, attribute, pseudo-class and pseudo-element parts
//!   - Order and cardinality checks for compound selectors
//!
//! - **Combinators** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant (` `), child (`>`), next-sibling (`+`), subsequent-sibling (`~`)
//!
//! Every operation returns a new [`Fragment`]; fragments are never mutated
//! after they are handed out.
//!
//! # Example
//!
//! ```rust
//! use kata_selector::SelectorBuilder;
//!
//! let builder = SelectorBuilder::new();
//! let selector = builder.combine(
//!     &builder.element("div").id("main")?.class("container")?.class("draggable")?,
//!     "+",
//!     &builder.combine(
//!         &builder.element("table").id("data")?,
//!         "~",
//!         &builder.combine(
//!             &builder.element("tr").pseudo_class("nth-of-type(even)")?,
//!             " ",
//!             &builder.element("td").pseudo_class("nth-of-type(even)")?,
//!         ),
//!     ),
//! );
//!
//! assert_eq!(
//!     selector.stringify(),
//!     "div#main.container.draggable + table#data ~ tr:nth-of-type(even) td:nth-of-type(even)"
//! );
//! # Ok::<(), kata_selector::SelectorError>(())
//! ```

/// The stateless builder facade.
pub mod builder;
/// Validation errors.
pub mod error;
/// Immutable selector fragments.
pub mod fragment;
/// Tokens, categories and combinators.
pub mod token;

pub use builder::SelectorBuilder;
pub use error::SelectorError;
pub use fragment::Fragment;
pub use token::{Category, Combinator, Token};
