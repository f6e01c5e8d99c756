use miette::Result;

/// Main entry point for the modgraph CLI
fn main() -> Result<()> {
    miette::set_panic_hook();

    modgraph::run()
}
