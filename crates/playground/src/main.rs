//! Scratchpad binary: builds a handful of selectors and prints them.
//! Run with `RUST_LOG=trace` to watch the raw-fragment escape hatch.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use xpath_builder::{filter, xpath};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let submit = xpath()
        .element_by_tag("form", Some(&filter().attribute_equals("id", "login")))
        .child_by_tag("input", Some(&filter().attribute_equals("type", "submit")));
    println!("submit button:   {submit}");

    let quoted = xpath().element_by_tag("li", Some(&filter().value_contains("it's alive")));
    println!("quoted literal:  {quoted}");

    let either = filter().or([
        &filter().and([&filter().value_contains("uses"), &filter().value_contains("nginx")]),
        &filter().attribute_greater_than_or_equal("data-number", 25),
    ]);
    let grouped = xpath().element_by_tag("li", Some(&either));
    println!("grouped filters: {grouped}");

    let icon = xpath()
        .element_by_tag("button", Some(&filter().has_attribute("aria-label")))
        .descendant_by_svg_tag("svg", None);
    println!("svg icon:        {icon}");

    let escape_hatch = xpath()
        .element_by_tag("table", None)
        .raw("/tbody/tr[position() mod 2 = 0]");
    println!("escape hatch:    {escape_hatch}");

    tracing::info!("all selectors rendered");
    Ok(())
}
