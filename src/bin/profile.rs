use mazeseek::{
    app::{ProfileConfig, profile, report},
    generators::Generator,
    logging,
};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let _guard = logging::init(1, None)?;

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let iterations = args.next().and_then(|s| s.parse::<usize>().ok());
    let generator = args.next().and_then(|s| s.parse::<Generator>().ok());

    let mut config = ProfileConfig::default();
    if let Some(iterations) = iterations {
        config.iterations = iterations;
    }
    if let Some(generator) = generator {
        config.generator = generator;
    }

    let totals = profile(&config)?;
    print!("{}", report::profile_table(&totals, true));
    Ok(())
}
