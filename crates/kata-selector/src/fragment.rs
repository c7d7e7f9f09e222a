//! Immutable selector fragments.
//!
//! A [`Fragment`] is an ordered list of [`Token`]s. Appending never mutates
//! the receiver: each call validates against the existing tokens and returns
//! a new fragment.

use std::fmt;

use kata_common::warning::warn_once;
use serde::{Deserialize, Serialize};

use crate::error::SelectorError;
use crate::token::{Category, Combinator, Token};

/// A buildable CSS selector, either one compound selector or two fragments
/// joined by a combinator.
///
/// Until it is combined, a fragment holds at most one element, id and
/// pseudo-element, and its parts stay in grammar order:
///
/// ```text
/// element#id.class[attr]:pseudo-class::pseudo-element
///           \----/\----/\-----------/
///            may repeat
/// ```
///
/// A combined fragment is not validated as a whole. Appends to it are
/// checked against its last compound only, the tokens after the final
/// combinator; see [`Fragment::combine`].
///
/// Deserialising replays the same validation for every compound, so a stored
/// fragment cannot smuggle in an ordering the builder would reject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Token>", into = "Vec<Token>")]
pub struct Fragment {
    tokens: Vec<Token>,
}

impl Fragment {
    /// The empty fragment. It renders as `""`.
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// A fragment holding a single simple selector. Cannot fail.
    pub(crate) fn single(category: Category, value: &str) -> Self {
        Self {
            tokens: vec![Token::Simple {
                category,
                value: value.to_string(),
            }],
        }
    }

    /// Append a type selector, e.g. `div`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Cardinality`] if an element is already present,
    /// [`SelectorError::Order`] if any other part is.
    pub fn element(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(Category::Element, name)
    }

    /// Append an id selector, `#name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Cardinality`] if an id is already present,
    /// [`SelectorError::Order`] if a class, attribute or pseudo part is.
    pub fn id(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(Category::Id, name)
    }

    /// Append a class selector, `.name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if an attribute or pseudo part is present.
    pub fn class(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(Category::Class, name)
    }

    /// Append an attribute selector, `[spec]`. The expression is used
    /// verbatim, e.g. `href$=".png"`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if a pseudo-class or pseudo-element is present.
    pub fn attr(&self, spec: &str) -> Result<Self, SelectorError> {
        self.append(Category::Attribute, spec)
    }

    /// Append a pseudo-class, `:name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if a pseudo-element is present.
    pub fn pseudo_class(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(Category::PseudoClass, name)
    }

    /// Append a pseudo-element, `::name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Cardinality`] if a pseudo-element is already present.
    pub fn pseudo_element(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(Category::PseudoElement, name)
    }

    /// Join two fragments with a combinator: `left <combinator> right`.
    ///
    /// The combinator text is trimmed. Empty text is the descendant
    /// combinator and renders as a single space; anything else renders as
    /// `" <text> "`. Unrecognised combinators are kept verbatim and reported
    /// once through [`warn_once`].
    ///
    /// Never fails: both sides are assumed valid already, and the result is
    /// exempt from order and cardinality checks. Later appends extend `right`
    /// and are validated against it alone.
    #[must_use]
    pub fn combine(left: &Self, combinator: &str, right: &Self) -> Self {
        let text = combinator.trim();
        if text.parse::<Combinator>().is_err() {
            warn_once("Selector", "unrecognized combinator rendered verbatim");
        }

        let mut tokens = Vec::with_capacity(left.tokens.len() + right.tokens.len() + 1);
        tokens.extend_from_slice(&left.tokens);
        tokens.push(Token::Combinator(text.to_string()));
        tokens.extend_from_slice(&right.tokens);
        Self { tokens }
    }

    /// Render the selector. Tokens are concatenated as stored; combinator
    /// tokens carry their own spacing.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// The tokens in insertion order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Whether this fragment has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether this fragment was produced by [`Fragment::combine`].
    #[must_use]
    pub fn is_combined(&self) -> bool {
        self.tokens.iter().any(Token::is_combinator)
    }

    /// Categories of the simple selectors, in order, skipping combinators.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.tokens.iter().filter_map(Token::category)
    }

    /// Combinators joining the parts, left to right. `None` marks
    /// unrecognised combinator text.
    pub fn combinators(&self) -> impl Iterator<Item = Option<Combinator>> + '_ {
        self.tokens
            .iter()
            .filter(|token| token.is_combinator())
            .map(Token::combinator)
    }

    fn append(&self, category: Category, value: &str) -> Result<Self, SelectorError> {
        self.push(Token::Simple {
            category,
            value: value.to_string(),
        })
    }

    /// The compound selector appends extend: everything after the last
    /// combinator.
    fn last_compound(&self) -> &[Token] {
        let start = self
            .tokens
            .iter()
            .rposition(Token::is_combinator)
            .map_or(0, |index| index + 1);
        &self.tokens[start..]
    }

    fn push(&self, token: Token) -> Result<Self, SelectorError> {
        if let Some(category) = token.category() {
            self.check(category)?;
        }
        let mut tokens = self.tokens.clone();
        tokens.push(token);
        Ok(Self { tokens })
    }

    /// Cardinality first, then order, both within the last compound.
    fn check(&self, category: Category) -> Result<(), SelectorError> {
        let present = || self.last_compound().iter().filter_map(Token::category);
        if !category.is_repeatable() && present().any(|existing| existing == category) {
            return Err(SelectorError::Cardinality);
        }
        if present().any(|existing| existing > category) {
            return Err(SelectorError::Order);
        }
        Ok(())
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Token>> for Fragment {
    type Error = SelectorError;

    fn try_from(tokens: Vec<Token>) -> Result<Self, Self::Error> {
        tokens
            .into_iter()
            .try_fold(Self::new(), |fragment, token| fragment.push(token))
    }
}

impl From<Fragment> for Vec<Token> {
    fn from(fragment: Fragment) -> Self {
        fragment.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fragment() {
        let fragment = Fragment::new();
        assert!(fragment.is_empty());
        assert!(!fragment.is_combined());
        assert_eq!(fragment.stringify(), "");
        assert_eq!(fragment, Fragment::default());
    }

    #[test]
    fn test_append_leaves_receiver_untouched() {
        let base = Fragment::single(Category::Element, "div");
        let extended = base.class("a").unwrap();
        assert_eq!(base.stringify(), "div");
        assert_eq!(extended.stringify(), "div.a");
    }

    #[test]
    fn test_failed_append_leaves_receiver_untouched() {
        let base = Fragment::single(Category::Class, "a");
        assert_eq!(base.id("x"), Err(SelectorError::Order));
        assert_eq!(base.tokens().len(), 1);
    }

    #[test]
    fn test_cardinality_checked_before_order() {
        // Both rules are broken: a second element, after an id
        let fragment = Fragment::single(Category::Element, "a").id("x").unwrap();
        assert_eq!(fragment.element("b"), Err(SelectorError::Cardinality));
    }

    #[test]
    fn test_try_from_replays_validation() {
        let tokens = vec![
            Token::Simple {
                category: Category::Class,
                value: "a".to_string(),
            },
            Token::Simple {
                category: Category::Id,
                value: "b".to_string(),
            },
        ];
        assert_eq!(Fragment::try_from(tokens), Err(SelectorError::Order));
    }

    #[test]
    fn test_last_compound_follows_final_combinator() {
        let left = Fragment::single(Category::Element, "a");
        let right = Fragment::single(Category::Class, "b");
        let combined = Fragment::combine(&left, "+", &right);
        assert_eq!(combined.last_compound(), right.tokens());
        assert_eq!(left.last_compound(), left.tokens());
    }

    #[test]
    fn test_try_from_validates_each_compound() {
        let tokens = vec![
            Token::Simple {
                category: Category::Id,
                value: "a".to_string(),
            },
            Token::Combinator(">".to_string()),
            Token::Simple {
                category: Category::Class,
                value: "b".to_string(),
            },
            Token::Simple {
                category: Category::Element,
                value: "c".to_string(),
            },
        ];
        assert_eq!(Fragment::try_from(tokens), Err(SelectorError::Order));
    }

    #[test]
    fn test_try_from_accepts_combined_tokens() {
        let tokens = vec![
            Token::Simple {
                category: Category::Id,
                value: "a".to_string(),
            },
            Token::Combinator(">".to_string()),
            Token::Simple {
                category: Category::Id,
                value: "b".to_string(),
            },
        ];
        let fragment = Fragment::try_from(tokens).unwrap();
        assert_eq!(fragment.stringify(), "#a > #b");
    }
}
