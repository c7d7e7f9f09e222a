//! Selector tokens and the categories that order them.
//!
//! Category names and combinators follow
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/).

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// The kinds of simple selector a compound selector is built from, declared
/// in the order they must appear. The derived `Ord` is that order.
///
/// "If it contains a type selector or universal selector, that selector must
/// come first in the sequence."
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `a`, `table`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Examples: `#main`, `#data`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.container`, `.editable`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[href$=".png"]`
    Attribute,

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:focus`, `:nth-of-type(even)`
    PseudoClass,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Examples: `::after`, `::first-line`
    PseudoElement,
}

impl Category {
    /// Whether a single compound selector may contain this category more
    /// than once. Element, id and pseudo-element may occur only once.
    #[must_use]
    pub const fn is_repeatable(self) -> bool {
        matches!(self, Self::Class | Self::Attribute | Self::PseudoClass)
    }

    /// Render `value` with this category's punctuation.
    fn write_value(self, f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
        match self {
            Self::Element => f.write_str(value),
            Self::Id => write!(f, "#{value}"),
            Self::Class => write!(f, ".{value}"),
            Self::Attribute => write!(f, "[{value}]"),
            Self::PseudoClass => write!(f, ":{value}"),
            Self::PseudoElement => write!(f, "::{value}"),
        }
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// Parsed from the trimmed combinator text passed to
/// [`Fragment::combine`](crate::Fragment::combine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    #[strum(serialize = "", to_string = " ")]
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound selectors."
    #[strum(serialize = ">")]
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound selectors."
    #[strum(serialize = "+")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound selectors."
    #[strum(serialize = "~")]
    SubsequentSibling,
}

/// One unit of a [`Fragment`](crate::Fragment).
///
/// Tokens store the raw value; punctuation is added when rendering, so a
/// token always renders in the canonical form for its category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Token {
    /// A simple selector such as `#main` (category `Id`, value `main`).
    Simple {
        /// Which kind of simple selector this is.
        category: Category,
        /// The name or attribute expression, without punctuation.
        value: String,
    },

    /// The trimmed text of a combinator between two fragments.
    ///
    /// Empty text is the descendant combinator.
    Combinator(String),
}

impl Token {
    /// The category of a simple selector token, `None` for combinators.
    #[must_use]
    pub const fn category(&self) -> Option<Category> {
        match self {
            Self::Simple { category, .. } => Some(*category),
            Self::Combinator(_) => None,
        }
    }

    /// Whether this token joins two fragments.
    #[must_use]
    pub const fn is_combinator(&self) -> bool {
        matches!(self, Self::Combinator(_))
    }

    /// The recognised combinator, or `None` for simple selectors and
    /// unrecognised combinator text.
    #[must_use]
    pub fn combinator(&self) -> Option<Combinator> {
        match self {
            Self::Combinator(text) => text.parse().ok(),
            Self::Simple { .. } => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple { category, value } => category.write_value(f, value),
            // Descendant is the whitespace itself
            Self::Combinator(text) if text.is_empty() => f.write_str(" "),
            Self::Combinator(text) => write!(f, " {text} "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn simple(category: Category, value: &str) -> Token {
        Token::Simple {
            category,
            value: value.to_string(),
        }
    }

    #[test]
    fn test_categories_iterate_in_grammar_order() {
        let order: Vec<Category> = Category::iter().collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
        assert_eq!(order.first(), Some(&Category::Element));
        assert_eq!(order.last(), Some(&Category::PseudoElement));
    }

    #[test]
    fn test_repeatable_categories() {
        let repeatable: Vec<Category> = Category::iter().filter(|c| c.is_repeatable()).collect();
        assert_eq!(
            repeatable,
            vec![Category::Class, Category::Attribute, Category::PseudoClass]
        );
    }

    #[test]
    fn test_category_display_is_kebab_case() {
        assert_eq!(Category::PseudoClass.to_string(), "pseudo-class");
        assert_eq!(Category::Element.to_string(), "element");
    }

    #[test]
    fn test_simple_token_rendering() {
        assert_eq!(simple(Category::Element, "div").to_string(), "div");
        assert_eq!(simple(Category::Id, "main").to_string(), "#main");
        assert_eq!(simple(Category::Class, "cls").to_string(), ".cls");
        assert_eq!(
            simple(Category::Attribute, "href$=\".png\"").to_string(),
            "[href$=\".png\"]"
        );
        assert_eq!(simple(Category::PseudoClass, "focus").to_string(), ":focus");
        assert_eq!(simple(Category::PseudoElement, "after").to_string(), "::after");
    }

    #[test]
    fn test_combinator_token_rendering() {
        assert_eq!(Token::Combinator("+".to_string()).to_string(), " + ");
        assert_eq!(Token::Combinator(String::new()).to_string(), " ");
    }

    #[test]
    fn test_combinator_parsing() {
        assert_eq!("".parse::<Combinator>(), Ok(Combinator::Descendant));
        assert_eq!(">".parse::<Combinator>(), Ok(Combinator::Child));
        assert_eq!("+".parse::<Combinator>(), Ok(Combinator::NextSibling));
        assert_eq!("~".parse::<Combinator>(), Ok(Combinator::SubsequentSibling));
        assert!("||".parse::<Combinator>().is_err());
    }

    #[test]
    fn test_token_accessors() {
        let id = simple(Category::Id, "main");
        assert_eq!(id.category(), Some(Category::Id));
        assert!(!id.is_combinator());
        assert_eq!(id.combinator(), None);

        let child = Token::Combinator(">".to_string());
        assert_eq!(child.category(), None);
        assert!(child.is_combinator());
        assert_eq!(child.combinator(), Some(Combinator::Child));
    }
}
