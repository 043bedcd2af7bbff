use promptline::cli::Cli;
use promptline::config::{Config, InitResult};
use promptline::core::{collect_all_segments, RenderContext, StatusLineGenerator};
use promptline::probe::CommandProbe;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();
    promptline::utils::init_tracing(cli.verbose);

    // Handle configuration commands
    if cli.init {
        match Config::init()? {
            InitResult::Created(path) => println!("Created config at {}", path.display()),
            InitResult::AlreadyExists(path) => {
                println!("Config already exists at {}", path.display())
            }
        }
        return Ok(());
    }

    if cli.check {
        let mut config = Config::load()?;
        cli.apply(&mut config);
        config.check()?;
        println!("✓ Configuration valid");
        return Ok(());
    }

    // Load configuration
    let mut config = Config::load().unwrap_or_else(|e| {
        tracing::debug!(error = %e, "using default config");
        Config::default()
    });
    cli.apply(&mut config);

    if cli.print {
        config.print()?;
        return Ok(());
    }

    let ctx = RenderContext::new(&config, cli.cwd.clone());
    let segments = collect_all_segments(&ctx, &CommandProbe::pmset());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&segments)?);
        return Ok(());
    }

    let generator = StatusLineGenerator::new(&ctx);
    print!("{}", generator.generate(&segments));

    Ok(())
}
