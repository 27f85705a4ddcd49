//! Fluent, immutable builders for XPath selector strings.
//!
//! Two cooperating builders assemble selectors without hand-concatenated
//! strings: [`XPath`] chains navigational axis steps, [`Filter`] composes
//! the boolean predicates embedded into those steps. Every chaining call
//! returns a new value, so partially built selectors can be shared and
//! extended in different directions. The rendered output is plain XPath 1.0
//! (`text()`, `contains()`, `local-name()`, `last()`, `concat()`), ready for
//! any 1.0-compatible evaluator.
//!
//! ```
//! use xpath_builder::{filter, xpath};
//!
//! let item = xpath().element_by_tag("li", Some(&filter().position(2)));
//! assert_eq!(item.to_string(), ".//li[2]");
//!
//! let link = xpath()
//!     .element_by_tag("nav", Some(&filter().attribute_equals("role", "menu")))
//!     .child_by_tag("a", Some(&filter().has_attribute("href")));
//! assert_eq!(link.to_string(), ".//nav[@role='menu']/a[@href]");
//! ```
//!
//! Literal values are escaped so the rendered expression stays balanced;
//! apostrophes are routed through `concat(...)`:
//!
//! ```
//! use xpath_builder::filter;
//!
//! let predicate = filter().value_contains("it's");
//! assert_eq!(
//!     predicate.to_string(),
//!     r#"text()[contains(., concat('it', "'", 's'))]"#
//! );
//! ```
//!
//! The builders assemble strings, they do not validate them: tag and
//! attribute names pass through untouched, and nothing is executed — pair
//! the rendered string with the XPath engine of your choice.

pub mod filter;
mod literal;
pub mod path;

pub use filter::{ANY_ATTRIBUTE, Filter};
pub use literal::Literal;
pub use path::{Axis, XPath};

/// Returns a fresh [`XPath`] rooted at the context node.
pub fn xpath() -> XPath {
    XPath::new()
}

/// Returns a fresh, empty [`Filter`].
pub fn filter() -> Filter {
    Filter::new()
}
