//! Factors command implementation.

use super::banner;
use smartbeta_factors::available_factors;

/// List the factor registry.
pub(crate) fn list_factors(verbose: bool) {
    banner("Available Factors");

    for info in available_factors() {
        if verbose {
            println!("  {:15} - {}", info.factor.as_str(), info.description);
            println!("  {:15}   inputs:  {}", "", info.inputs.join(", "));
            println!("  {:15}   formula: {}", "", info.formula);
            println!();
        } else {
            println!("  {}", info.factor.as_str());
        }
    }

    if !verbose {
        println!("\nUse --verbose for inputs and formulas.");
    }
    println!("All factor scores are clamped to [0, 100].\n");
}
