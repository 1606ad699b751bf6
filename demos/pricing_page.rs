//! Render one pricing-page pass per seed company to stdout.
//!
//! Run with: cargo run --example pricing_page

use headway::pricing::{
    fixtures, AccountProvider, ComparisonSelection, EntitlementResolver, FeatureMatrix,
};
use headway::ConfigBuilder;

fn main() {
    let config = ConfigBuilder::new().from_env().build();
    headway::init_tracing_with_config(&config);

    let resolver = EntitlementResolver::new(fixtures::standard_catalog());
    let directory = fixtures::sample_directory();

    // The initially selected company comes from config; anything the
    // directory does not know falls back to the free-tier view.
    if let Some(name) = &config.default_account {
        let view = resolver
            .resolve_by_name(&directory, name)
            .unwrap_or_else(|_| resolver.fallback_view());
        println!(
            "default selection: {} on {}\n",
            view.account_name.as_deref().unwrap_or("(none)"),
            view.current_plan
        );
    }

    for account in directory.accounts() {
        let view = resolver
            .resolve_account_view(account)
            .expect("seed accounts resolve");

        println!("== {} ==", account.name);
        println!("  plan:     {} ({})", view.current_plan, view.price_label);
        println!("  advisor:  {}", view.advisor_tier);
        println!("  scenario: {}", view.scenario);
        if view.seats.total() > 0 {
            println!("  seats:    {}", view.seats.summary());
        }
        for (plan, offer) in &view.discounts {
            println!(
                "  discount: {} ${} -> ${} ({}% off)",
                plan, offer.original_price, offer.discounted_price, offer.discount_percent
            );
        }
        println!();
    }

    let catalog = resolver.catalog();
    let selection = ComparisonSelection::new(
        catalog,
        ["Business Free", "Business Mini", "Business Max"],
    )
    .expect("seed plans exist");
    let grid = FeatureMatrix::project(catalog, &selection).expect("projection succeeds");

    println!("== Compare plans ==");
    print!("{:<24}", "capability");
    for column in grid.columns() {
        print!("{column:<18}");
    }
    println!();
    for row in grid.rows() {
        print!("{:<24}", row.capability);
        for cell in &row.cells {
            print!("{:<18}", cell.as_str());
        }
        println!();
    }
}
