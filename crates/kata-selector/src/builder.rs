//! The builder facade.

use crate::fragment::Fragment;
use crate::token::Category;

/// Entry point for building selectors.
///
/// The builder holds no state. Each entry method starts a new [`Fragment`];
/// appending to that fragment is where validation happens.
///
/// ```rust
/// use kata_selector::SelectorBuilder;
///
/// let builder = SelectorBuilder::new();
/// let link = builder.element("a").attr(r#"href$=".png""#)?.pseudo_class("focus")?;
/// assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
/// # Ok::<(), kata_selector::SelectorError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorBuilder;

impl SelectorBuilder {
    /// Create a builder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Start a fragment with a type selector, e.g. `div`.
    #[must_use]
    pub fn element(&self, name: &str) -> Fragment {
        Fragment::single(Category::Element, name)
    }

    /// Start a fragment with an id selector, `#name`.
    #[must_use]
    pub fn id(&self, name: &str) -> Fragment {
        Fragment::single(Category::Id, name)
    }

    /// Start a fragment with a class selector, `.name`.
    #[must_use]
    pub fn class(&self, name: &str) -> Fragment {
        Fragment::single(Category::Class, name)
    }

    /// Start a fragment with an attribute selector, `[spec]`.
    #[must_use]
    pub fn attr(&self, spec: &str) -> Fragment {
        Fragment::single(Category::Attribute, spec)
    }

    /// Start a fragment with a pseudo-class, `:name`.
    #[must_use]
    pub fn pseudo_class(&self, name: &str) -> Fragment {
        Fragment::single(Category::PseudoClass, name)
    }

    /// Start a fragment with a pseudo-element, `::name`.
    #[must_use]
    pub fn pseudo_element(&self, name: &str) -> Fragment {
        Fragment::single(Category::PseudoElement, name)
    }

    /// Join two fragments with a combinator. See [`Fragment::combine`].
    #[must_use]
    pub fn combine(&self, left: &Fragment, combinator: &str, right: &Fragment) -> Fragment {
        Fragment::combine(left, combinator, right)
    }
}
