use std::path::PathBuf;
use std::process::exit;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{error, info};

use picker_core::{
    estimate_both, BinningPolicy, EstimatorConfig, OrderTimeBreakdown, Scenario, TimingModel,
};
use picker_reports::logging::init_tracing;
use picker_reports::{export_scenarios, render_summary, render_text_table, ExportFormat};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "picker_sweep",
    about = "Estimate warehouse picker requirements across a range of order volumes",
    long_about = "Computes how many milk, non-milk (and optionally binning) pickers are\n\
                  needed per order count, with and without binning time, and prints or\n\
                  exports the resulting tables."
)]
struct Cli {
    #[command(flatten)]
    inputs: InputArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the single-order summary and both scenario tables
    Table {
        /// Only print one scenario
        #[arg(long, value_enum)]
        scenario: Option<ScenarioArg>,
    },
    /// Print only the single-order time breakdown
    Summary,
    /// Write both scenario tables to files
    Export {
        #[arg(long, value_enum, default_value_t = FormatArg::Xlsx)]
        format: FormatArg,
        /// Directory the files are written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Print the effective configuration as JSON
    Config,
}

#[derive(Args)]
struct InputArgs {
    /// JSON estimator config; flags below override its fields
    #[arg(long, global = true, env = "PICKER_CONFIG")]
    config: Option<PathBuf>,

    /// Timing model used to derive per-order times
    #[arg(long, global = true, value_enum)]
    model: Option<ModelArg>,

    /// Staff binning as its own workforce instead of adding it to picking
    #[arg(long, global = true)]
    separate_binning: bool,

    #[arg(long, global = true)]
    shift_min: Option<u32>,

    #[arg(long, global = true)]
    start: Option<u32>,

    #[arg(long, global = true)]
    end: Option<u32>,

    #[arg(long, global = true)]
    step: Option<u32>,

    #[arg(long, global = true)]
    binning_sec: Option<f64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModelArg {
    /// Milk / non-milk item counts per order
    PerItem,
    /// Average basket quantity split by milk contribution
    Contribution,
    /// Whole-basket picking time
    Basket,
}

#[derive(Clone, Copy, ValueEnum)]
enum ScenarioArg {
    WithBinning,
    WithoutBinning,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Csv,
    Json,
    Parquet,
    Xlsx,
}

impl From<ScenarioArg> for Scenario {
    fn from(arg: ScenarioArg) -> Self {
        match arg {
            ScenarioArg::WithBinning => Scenario::WithBinning,
            ScenarioArg::WithoutBinning => Scenario::WithoutBinning,
        }
    }
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Parquet => ExportFormat::Parquet,
            FormatArg::Xlsx => ExportFormat::Xlsx,
        }
    }
}

impl ModelArg {
    /// Keep the configured model when it already matches the requested kind.
    fn resolve(self, current: TimingModel) -> TimingModel {
        match (self, current) {
            (ModelArg::PerItem, m @ TimingModel::PerItem { .. })
            | (ModelArg::Contribution, m @ TimingModel::ContributionSplit { .. })
            | (ModelArg::Basket, m @ TimingModel::BasketLevel { .. }) => m,
            (ModelArg::PerItem, _) => TimingModel::per_item(),
            (ModelArg::Contribution, _) => TimingModel::contribution_split(),
            (ModelArg::Basket, _) => TimingModel::basket_level(),
        }
    }
}

// ── helpers ────────────────────────────────────────────────────────

fn build_config(inputs: &InputArgs) -> Result<EstimatorConfig> {
    let mut config = match &inputs.config {
        Some(path) => EstimatorConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EstimatorConfig::default(),
    };

    if let Some(model) = inputs.model {
        config.model = model.resolve(config.model);
    }
    if inputs.separate_binning {
        config.binning_policy = BinningPolicy::SeparateCategory;
    }
    if let Some(shift_min) = inputs.shift_min {
        config.shift.shift_duration_min = shift_min;
    }
    if let Some(start) = inputs.start {
        config.sweep.start = start;
    }
    if let Some(end) = inputs.end {
        config.sweep.end = end;
    }
    if let Some(step) = inputs.step {
        config.sweep.step = step;
    }
    if let Some(binning_sec) = inputs.binning_sec {
        config.rates.binning_time_per_order_sec = binning_sec;
    }

    Ok(config)
}

fn checked_breakdown(config: &EstimatorConfig) -> Result<OrderTimeBreakdown> {
    if let Err(errors) = config.validate() {
        for err in &errors.0 {
            error!("{err}");
        }
        return Err(errors.into());
    }

    info!(
        model = config.model.label(),
        rows = config.sweep.len(),
        shift_min = config.shift.shift_duration_min,
        "estimating picker requirements"
    );
    Ok(OrderTimeBreakdown::derive(&config.rates, &config.model))
}

fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli.inputs)?;

    match cli.command {
        Commands::Config => {
            println!("{}", config.to_json_string()?);
        }
        Commands::Summary => {
            let breakdown = checked_breakdown(&config)?;
            print!("{}", render_summary(&breakdown, config.binning_policy));
        }
        Commands::Table { scenario } => {
            let breakdown = checked_breakdown(&config)?;
            print!("{}", render_summary(&breakdown, config.binning_policy));
            let tables = estimate_both(&config);
            for table in tables.iter() {
                if scenario.is_some_and(|s| Scenario::from(s) != table.scenario) {
                    continue;
                }
                println!();
                println!("{}", table.scenario.heading());
                print!("{}", render_text_table(table));
            }
        }
        Commands::Export { format, out_dir } => {
            checked_breakdown(&config)?;
            let tables = estimate_both(&config);
            let paths = export_scenarios(&tables, format.into(), &out_dir)
                .with_context(|| format!("exporting to {}", out_dir.display()))?;
            for path in paths {
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Cli {
        let argv = std::iter::once("picker_sweep").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_flags_give_default_config() {
        let cli = parse(&["summary"]);
        let inputs = InputArgs {
            config: None,
            ..cli.inputs
        };
        assert_eq!(build_config(&inputs).unwrap(), EstimatorConfig::default());
    }

    #[test]
    fn flags_override_loaded_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inputs.json");
        EstimatorConfig::default()
            .with_model(TimingModel::ContributionSplit {
                average_basket_quantity: 5.0,
                milk_contribution_percent: 40.0,
            })
            .with_shift_minutes(240)
            .with_sweep(10, 100, 10)
            .save(&path)
            .unwrap();

        let path_arg = path.display().to_string();
        let cli = parse(&[
            "--config",
            &path_arg,
            "--shift-min",
            "480",
            "--end",
            "500",
            "--separate-binning",
            "--model",
            "contribution",
            "table",
        ]);
        let config = build_config(&cli.inputs).unwrap();

        assert_eq!(config.shift.shift_duration_min, 480);
        assert_eq!(config.sweep.start, 10);
        assert_eq!(config.sweep.end, 500);
        assert_eq!(config.sweep.step, 10);
        assert_eq!(config.binning_policy, BinningPolicy::SeparateCategory);
        assert_eq!(
            config.model,
            TimingModel::ContributionSplit {
                average_basket_quantity: 5.0,
                milk_contribution_percent: 40.0,
            }
        );
    }

    #[test]
    fn switching_model_kind_uses_its_defaults() {
        let cli = parse(&["--model", "basket", "--binning-sec", "0", "summary"]);
        let inputs = InputArgs {
            config: None,
            ..cli.inputs
        };
        let config = build_config(&inputs).unwrap();

        assert_eq!(config.model, TimingModel::basket_level());
        assert_eq!(config.rates.binning_time_per_order_sec, 0.0);
    }

    #[test]
    fn missing_config_file_is_reported() {
        let dir = tempdir().unwrap();
        let inputs = InputArgs {
            config: Some(dir.path().join("absent.json")),
            ..parse(&["summary"]).inputs
        };
        let err = build_config(&inputs).unwrap_err();
        assert!(format!("{err:#}").contains("loading config"));
    }

    #[test]
    fn invalid_inputs_are_rejected_before_estimating() {
        let config = EstimatorConfig::default().with_shift_minutes(10);
        assert!(checked_breakdown(&config).is_err());
        assert!(checked_breakdown(&EstimatorConfig::default()).is_ok());
    }
}
