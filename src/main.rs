use anyhow::{Context, Result};
use clap::Parser;
use runstats::{
    analysis,
    cli::{Cli, OutputFormat},
    config::AnalysisConfig,
    csv_output::CsvOutput,
    json_output::JsonOutput,
    table::{Shape, ShapeMode},
    text_output,
};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber; warnings always reach stderr, `--debug` adds everything
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Merge config file and CLI flags; flags win
fn build_config(args: &Cli) -> Result<AnalysisConfig> {
    let mut config = match &args.config {
        Some(path) => AnalysisConfig::from_file(path)?,
        None => AnalysisConfig::default(),
    };

    if let Some(delimiter) = args.delimiter {
        config.delimiter = delimiter;
    }
    if args.strict {
        config.mode = ShapeMode::Strict;
    }

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;
    Ok(config)
}

fn render(analysis: &analysis::Analysis, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => text_output::format_text(&analysis.statistics),
        OutputFormat::Json => {
            let mut json = JsonOutput::from_analysis(analysis)
                .to_json()
                .context("Failed to serialize JSON output")?;
            json.push('\n');
            json
        }
        OutputFormat::Csv => CsvOutput::from_analysis(analysis).to_csv(),
    })
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let config = build_config(&args)?;

    let iterations = usize::try_from(args.iterations).context("ITERATIONS is too large")?;
    let tests = usize::try_from(args.tests).context("TESTS is too large")?;
    let shape = Shape::new(iterations, tests)?;

    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Input unavailable: cannot read {}", args.input.display()))?;

    let analysis = analysis::analyze(&text, shape, &config).map_err(|e| {
        let stage = e.stage();
        anyhow::Error::new(e).context(format!(
            "Analysis of {} failed at {} stage",
            args.input.display(),
            stage
        ))
    })?;

    print!("{}", render(&analysis, args.format)?);

    Ok(())
}
