//! Main entry point for the certfix CLI

fn main() -> Result<(), Box<dyn std::error::Error>> {
    certfix::logging::init();

    certfix::cli::run()?;
    Ok(())
}
