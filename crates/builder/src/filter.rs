use core::fmt;

use compact_str::CompactString;
use itertools::Itertools as _;
use smallvec::SmallVec;

use crate::literal::Literal;

/// Attribute-name shortcut matching any attribute:
/// `has_attribute(ANY_ATTRIBUTE)` renders `@*`.
pub const ANY_ATTRIBUTE: &str = "*";

type Fragments = SmallVec<[CompactString; 4]>;

/// Immutable builder for a boolean XPath predicate.
///
/// A `Filter` accumulates predicate fragments; rendering joins them in
/// order. Every chaining method returns a new value and leaves the receiver
/// untouched, so partial predicates can be shared and recombined freely:
///
/// ```
/// use xpath_builder::filter;
///
/// let visible = filter().attribute_not_equals("style", "display: none");
/// let first_visible = visible.and([&filter().first()]);
/// assert_eq!(visible.to_string(), "@style!='display: none'");
/// assert_eq!(first_visible.to_string(), "@style!='display: none' and (1)");
/// ```
///
/// An empty filter renders to `""` and is skipped wherever it is embedded;
/// a non-empty one always renders a self-contained boolean sub-expression
/// usable inside `[...]` or as an `and`/`or`/`not` operand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    fragments: Fragments,
}

impl Filter {
    /// Creates an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    fn appended(&self, fragment: impl Into<CompactString>) -> Self {
        let mut fragments = self.fragments.clone();
        fragments.push(fragment.into());
        Self { fragments }
    }

    /// Selects the nodes carrying the attribute `attribute`.
    pub fn has_attribute(&self, attribute: &str) -> Self {
        self.appended(format!("@{attribute}"))
    }

    /// Selects the nodes whose attribute `attribute` contains `value`.
    pub fn attribute_contains(&self, attribute: &str, value: impl Into<Literal>) -> Self {
        self.appended(format!("contains(@{attribute}, {})", value.into()))
    }

    /// Selects the nodes whose attribute `attribute` equals `value`.
    pub fn attribute_equals(&self, attribute: &str, value: impl Into<Literal>) -> Self {
        self.appended(format!("@{attribute}={}", value.into()))
    }

    /// Selects the nodes whose attribute `attribute` differs from `value`.
    pub fn attribute_not_equals(&self, attribute: &str, value: impl Into<Literal>) -> Self {
        self.appended(format!("@{attribute}!={}", value.into()))
    }

    /// Selects the nodes whose attribute `attribute` is less than `value`.
    pub fn attribute_less_than(&self, attribute: &str, value: impl Into<Literal>) -> Self {
        self.appended(format!("@{attribute}<{}", value.into()))
    }

    /// Selects the nodes whose attribute `attribute` is at most `value`.
    pub fn attribute_less_than_or_equal(&self, attribute: &str, value: impl Into<Literal>) -> Self {
        self.appended(format!("@{attribute}<={}", value.into()))
    }

    /// Selects the nodes whose attribute `attribute` is greater than `value`.
    pub fn attribute_greater_than(&self, attribute: &str, value: impl Into<Literal>) -> Self {
        self.appended(format!("@{attribute}>{}", value.into()))
    }

    /// Selects the nodes whose attribute `attribute` is at least `value`.
    pub fn attribute_greater_than_or_equal(
        &self,
        attribute: &str,
        value: impl Into<Literal>,
    ) -> Self {
        self.appended(format!("@{attribute}>={}", value.into()))
    }

    /// Selects the nodes whose text content contains `value`.
    pub fn value_contains(&self, value: impl Into<Literal>) -> Self {
        self.appended(format!("text()[contains(., {})]", value.into()))
    }

    /// Selects the nodes whose text content equals `value`.
    pub fn value_equals(&self, value: impl Into<Literal>) -> Self {
        self.appended(format!("text() = {}", value.into()))
    }

    /// Selects the nodes whose text content differs from `value`.
    pub fn value_not_equals(&self, value: impl Into<Literal>) -> Self {
        self.appended(format!("text() !={}", value.into()))
    }

    /// Selects the nodes whose text content is less than `value`.
    pub fn value_less_than(&self, value: impl Into<Literal>) -> Self {
        self.appended(format!("text() <{}", value.into()))
    }

    /// Selects the nodes whose text content is at most `value`.
    pub fn value_less_than_or_equal(&self, value: impl Into<Literal>) -> Self {
        self.appended(format!("text() <={}", value.into()))
    }

    /// Selects the nodes whose text content is greater than `value`.
    pub fn value_greater_than(&self, value: impl Into<Literal>) -> Self {
        self.appended(format!("text() >{}", value.into()))
    }

    /// Selects the nodes whose text content is at least `value`.
    pub fn value_greater_than_or_equal(&self, value: impl Into<Literal>) -> Self {
        self.appended(format!("text() >={}", value.into()))
    }

    /// Selects the node at position `index` (1-based) among its siblings.
    pub fn position(&self, index: usize) -> Self {
        self.appended(format!("{index}"))
    }

    /// Selects the first node among its siblings.
    pub fn first(&self) -> Self {
        self.appended("1")
    }

    /// Selects the last node among its siblings.
    pub fn last(&self) -> Self {
        self.appended("last()")
    }

    /// Negates `operand`. An empty operand still renders the `not( )`
    /// wrapper; callers composing dynamically should check
    /// [`is_empty`](Self::is_empty) first.
    pub fn not(&self, operand: &Filter) -> Self {
        self.appended(format!("not( {operand} )"))
    }

    /// Conjoins `operands` onto the current expression.
    ///
    /// The operands form one parenthesized group joined by ` and `; when the
    /// receiver is already non-empty the group is attached with a leading
    /// ` and `. Empty operands contribute nothing, separators included.
    pub fn and<'a, I>(&self, operands: I) -> Self
    where
        I: IntoIterator<Item = &'a Filter>,
    {
        self.joined(" and ", operands)
    }

    /// Disjoins `operands` onto the current expression; see
    /// [`and`](Self::and) for the grouping rules.
    pub fn or<'a, I>(&self, operands: I) -> Self
    where
        I: IntoIterator<Item = &'a Filter>,
    {
        self.joined(" or ", operands)
    }

    fn joined<'a, I>(&self, separator: &str, operands: I) -> Self
    where
        I: IntoIterator<Item = &'a Filter>,
    {
        let body = operands
            .into_iter()
            .filter(|operand| !operand.is_empty())
            .join(separator);
        let mut expression = String::with_capacity(body.len() + separator.len() + 2);
        if !self.is_empty() {
            expression.push_str(separator);
        }
        expression.push('(');
        expression.push_str(&body);
        expression.push(')');
        self.appended(expression)
    }

    /// True while no fragment has been appended; an empty filter renders
    /// `""` and is suppressed wherever it is embedded.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Resets the receiver in place to the empty predicate. This is the one
    /// mutating operation; strings rendered earlier are unaffected.
    pub fn clear(&mut self) {
        self.fragments.clear();
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            f.write_str(fragment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_filter_is_empty_and_renders_nothing() {
        let filter = Filter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.to_string(), "");
    }

    #[test]
    fn chaining_appends_without_separator() {
        let combined = Filter::new().value_greater_than(14).and([&Filter::new().value_not_equals(20)]);
        assert_eq!(combined.to_string(), "text() >14 and (text() !=20)");
    }

    #[test]
    fn clear_drops_all_fragments() {
        let mut filter = Filter::new().has_attribute("href").first();
        assert!(!filter.is_empty());
        filter.clear();
        assert!(filter.is_empty());
        assert_eq!(filter.to_string(), "");
    }
}
