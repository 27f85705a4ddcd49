use core::fmt;

use compact_str::CompactString;
use smallvec::{SmallVec, smallvec};
use tracing::trace;

use crate::filter::Filter;

/// The axes the path builder can step along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Descendant,
    DescendantOrSelf,
    Child,
    Ancestor,
    AncestorOrSelf,
    Following,
    FollowingSibling,
    Preceding,
    PrecedingSibling,
}

impl Axis {
    /// Literal token prepended to every step on this axis. Descendant and
    /// child use the abbreviated syntax, the rest the explicit `axis::` form.
    pub fn token(self) -> &'static str {
        match self {
            Axis::Descendant => "//",
            Axis::DescendantOrSelf => "/descendant-or-self::",
            Axis::Child => "/",
            Axis::Ancestor => "/ancestor::",
            Axis::AncestorOrSelf => "/ancestor-or-self::",
            Axis::Following => "/following::",
            Axis::FollowingSibling => "/following-sibling::",
            Axis::Preceding => "/preceding::",
            Axis::PrecedingSibling => "/preceding-sibling::",
        }
    }
}

type Steps = SmallVec<[CompactString; 4]>;

/// Immutable builder for an XPath location path, rooted at the context node.
///
/// A fresh path renders `.`; every step method appends one axis step and
/// returns a new value, leaving the receiver untouched. Steps optionally
/// embed a [`Filter`] as a bracketed predicate; absent or empty filters add
/// no brackets at all.
///
/// ```
/// use xpath_builder::{filter, xpath};
///
/// let row = xpath()
///     .element_by_tag("table", Some(&filter().has_attribute("data-grid")))
///     .child_by_tag("tr", Some(&filter().position(3)));
/// assert_eq!(row.to_string(), ".//table[@data-grid]/tr[3]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XPath {
    steps: Steps,
}

impl Default for XPath {
    fn default() -> Self {
        Self { steps: smallvec![CompactString::const_new(".")] }
    }
}

impl XPath {
    /// Creates a path consisting of the bare context node.
    pub fn new() -> Self {
        Self::default()
    }

    fn appended(&self, step: impl Into<CompactString>) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step.into());
        Self { steps }
    }

    fn step(&self, axis: Axis, node_test: &str, filter: Option<&Filter>) -> Self {
        let token = axis.token();
        let mut fragment = String::with_capacity(token.len() + node_test.len() + 16);
        fragment.push_str(token);
        fragment.push_str(node_test);
        if let Some(predicate) = filter.filter(|f| !f.is_empty()) {
            fragment.push('[');
            fragment.push_str(&predicate.to_string());
            fragment.push(']');
        }
        self.appended(fragment)
    }

    /// Selects the nodes below the context node, no matter the depth.
    pub fn descendant(&self, filter: Option<&Filter>) -> Self {
        self.step(Axis::Descendant, "*", filter)
    }

    /// Selects the nodes with tag `tag` below the context node, no matter
    /// the depth.
    pub fn descendant_by_tag(&self, tag: &str, filter: Option<&Filter>) -> Self {
        self.step(Axis::Descendant, tag, filter)
    }

    /// Like [`descendant_by_tag`](Self::descendant_by_tag), but matches on
    /// the local name so namespaced (e.g. SVG) elements are found too.
    pub fn descendant_by_svg_tag(&self, tag: &str, filter: Option<&Filter>) -> Self {
        self.step(Axis::Descendant, &local_name_test(tag), filter)
    }

    /// Synonym of [`descendant`](Self::descendant).
    pub fn element(&self, filter: Option<&Filter>) -> Self {
        self.descendant(filter)
    }

    /// Synonym of [`descendant_by_tag`](Self::descendant_by_tag).
    pub fn element_by_tag(&self, tag: &str, filter: Option<&Filter>) -> Self {
        self.descendant_by_tag(tag, filter)
    }

    /// Synonym of [`descendant_by_svg_tag`](Self::descendant_by_svg_tag).
    pub fn element_by_svg_tag(&self, tag: &str, filter: Option<&Filter>) -> Self {
        self.descendant_by_svg_tag(tag, filter)
    }

    /// Selects the nodes below the context node, the context node included.
    pub fn descendant_or_self(&self, filter: Option<&Filter>) -> Self {
        self.step(Axis::DescendantOrSelf, "*", filter)
    }

    pub fn descendant_or_self_by_tag(&self, tag: &str, filter: Option<&Filter>) -> Self {
        self.step(Axis::DescendantOrSelf, tag, filter)
    }

    pub fn descendant_or_self_by_svg_tag(&self, tag: &str, filter: Option<&Filter>) -> Self {
        self.step(Axis::DescendantOrSelf, &local_name_test(tag), filter)
    }

    /// Selects the nodes immediately below the context node.
    pub fn child(&self, filter: Option<&Filter>) -> Self {
        self.step(Axis::Child, "*", filter)
    }

    pub fn child_by_tag(&self, tag: &str, filter: Option<&Filter>) -> Self {
        self.step(Axis::Child, tag, filter)
    }

    pub fn child_by_svg_tag(&self, tag: &str, filter: Option<&Filter>) -> Self {
        self.step(Axis::Child, &local_name_test(tag), filter)
    }

    /// Selects the ancestors of the context node, up to the root.
    pub fn ancestor(&self, filter: Option<&Filter>) -> Self {
        self.step(Axis::Ancestor, "*", filter)
    }

    pub fn ancestor_by_tag(&self, tag: &str, filter: Option<&Filter>) -> Self {
        self.step(Axis::Ancestor, tag, filter)
    }

    pub fn ancestor_by_svg_tag(&self, tag: &str, filter: Option<&Filter>) -> Self {
        self.step(Axis::Ancestor, &local_name_test(tag), filter)
    }

    /// Selects the ancestors of the context node, the context node included.
    pub fn ancestor_or_self(&self, filter: Option<&Filter>) -> Self {
        self.step(Axis::AncestorOrSelf, "*", filter)
    }

    pub fn ancestor_or_self_by_tag(&self, tag: &str, filter: Option<&Filter>) -> Self {
        self.step(Axis::AncestorOrSelf, tag, filter)
    }

    pub fn ancestor_or_self_by_svg_tag(&self, tag: &str, filter: Option<&Filter>) -> Self {
        self.step(Axis::AncestorOrSelf, &local_name_test(tag), filter)
    }

    /// Selects the nodes after the context node in document order, its own
    /// descendants excluded.
    pub fn following(&self, filter: Option<&Filter>) -> Self {
        self.step(Axis::Following, "*", filter)
    }

    pub fn following_by_tag(&self, tag: &str, filter: Option<&Filter>) -> Self {
        self.step(Axis::Following, tag, filter)
    }

    pub fn following_by_svg_tag(&self, tag: &str, filter: Option<&Filter>) -> Self {
        self.step(Axis::Following, &local_name_test(tag), filter)
    }

    /// Selects the siblings located after the context node.
    pub fn following_sibling(&self, filter: Option<&Filter>) -> Self {
        self.step(Axis::FollowingSibling, "*", filter)
    }

    pub fn following_sibling_by_tag(&self, tag: &str, filter: Option<&Filter>) -> Self {
        self.step(Axis::FollowingSibling, tag, filter)
    }

    pub fn following_sibling_by_svg_tag(&self, tag: &str, filter: Option<&Filter>) -> Self {
        self.step(Axis::FollowingSibling, &local_name_test(tag), filter)
    }

    /// Selects the nodes before the context node in document order, its own
    /// ancestors excluded.
    pub fn preceding(&self, filter: Option<&Filter>) -> Self {
        self.step(Axis::Preceding, "*", filter)
    }

    pub fn preceding_by_tag(&self, tag: &str, filter: Option<&Filter>) -> Self {
        self.step(Axis::Preceding, tag, filter)
    }

    pub fn preceding_by_svg_tag(&self, tag: &str, filter: Option<&Filter>) -> Self {
        self.step(Axis::Preceding, &local_name_test(tag), filter)
    }

    /// Selects the siblings located before the context node.
    pub fn preceding_sibling(&self, filter: Option<&Filter>) -> Self {
        self.step(Axis::PrecedingSibling, "*", filter)
    }

    pub fn preceding_sibling_by_tag(&self, tag: &str, filter: Option<&Filter>) -> Self {
        self.step(Axis::PrecedingSibling, tag, filter)
    }

    pub fn preceding_sibling_by_svg_tag(&self, tag: &str, filter: Option<&Filter>) -> Self {
        self.step(Axis::PrecedingSibling, &local_name_test(tag), filter)
    }

    /// Selects the parent of the context node.
    pub fn parent(&self) -> Self {
        self.appended("/..")
    }

    /// Appends `fragment` verbatim, nothing escaped or validated. Escape
    /// hatch for expressions the builder cannot form; an unbalanced fragment
    /// surfaces only when the rendered path reaches an evaluator.
    pub fn raw(&self, fragment: &str) -> Self {
        trace!(fragment, "appending raw xpath fragment");
        self.appended(fragment)
    }

    /// True while no step has been appended (the path still renders `.`).
    pub fn is_empty(&self) -> bool {
        self.steps.len() == 1
    }

    /// Resets the receiver in place to the bare context-node path. This is
    /// the one mutating operation; strings rendered earlier are unaffected.
    pub fn clear(&mut self) {
        self.steps.clear();
        self.steps.push(CompactString::const_new("."));
    }
}

impl fmt::Display for XPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            f.write_str(step)?;
        }
        Ok(())
    }
}

fn local_name_test(tag: &str) -> String {
    format!("*[local-name() = '{tag}']")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_path_is_the_context_node() {
        let path = XPath::new();
        assert!(path.is_empty());
        assert_eq!(path.to_string(), ".");
    }

    #[test]
    fn axis_tokens_match_the_abbreviated_and_explicit_forms() {
        assert_eq!(Axis::Descendant.token(), "//");
        assert_eq!(Axis::Child.token(), "/");
        assert_eq!(Axis::AncestorOrSelf.token(), "/ancestor-or-self::");
        assert_eq!(Axis::PrecedingSibling.token(), "/preceding-sibling::");
    }

    #[test]
    fn clear_reseeds_the_context_node() {
        let mut path = XPath::new().descendant_by_tag("ul", None).parent();
        assert!(!path.is_empty());
        path.clear();
        assert!(path.is_empty());
        assert_eq!(path.to_string(), ".");
    }
}
