//! usage-alchemist CLI
//!
//! Interactive daily-allowance calculator, plus a one-shot `calc` command.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tracing::debug;

use usage_alchemist::allowance::calculate;
use usage_alchemist::error::{Error, InputError};
use usage_alchemist::logging;
use usage_alchemist::report::format_calculation;
use usage_alchemist::selection::Selection;
use usage_alchemist::types::{
    AnimationConfig, CalculatorConfig, DayCount, Month, OutputFormat, Period, Variant,
    DEFAULT_PACK_INPUT,
};

#[derive(Parser)]
#[command(name = "usage-alchemist")]
#[command(about = "Calculate the daily share of a monthly data allowance")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Interactive calculator options (used when no subcommand is given)
    #[command(flatten)]
    tui: TuiArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute one allowance and print it
    Calc {
        /// Day of the month
        #[arg(long)]
        day: u8,

        /// Month name, abbreviation or number (monthly variant)
        #[arg(long, conflicts_with = "days")]
        month: Option<Month>,

        /// 30 or 31: use the fixed toggle with its implicit pack
        #[arg(long)]
        days: Option<u8>,

        /// Pack size in GB (monthly variant)
        #[arg(long, default_value = DEFAULT_PACK_INPUT, conflicts_with = "days")]
        pack: String,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Args)]
struct TuiArgs {
    /// Calculator flavor
    #[arg(long, value_enum, default_value = "monthly")]
    variant: VariantArg,

    /// Pack size shown (and restored on reset) in the monthly variant
    #[arg(long, default_value = DEFAULT_PACK_INPUT)]
    pack: String,

    /// Count-up animation length in milliseconds
    #[arg(long, default_value_t = 1000)]
    duration_ms: u64,

    /// Animation tick in milliseconds
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,

    /// Write logs here (filter with USAGE_ALCHEMIST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum VariantArg {
    /// 30/31-day toggle, implicit pack
    Fixed,
    /// Twelve months, editable pack size
    Monthly,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Fixed => Variant::Fixed,
            VariantArg::Monthly => Variant::Monthly,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None => cmd_tui(cli.tui),
        Some(Commands::Calc { day, month, days, pack, format }) => {
            cmd_calc(day, month, days, pack, format.into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_tui(args: TuiArgs) -> Result<(), Error> {
    if let Some(path) = &args.log_file {
        logging::init_file(path)?;
    }

    let config = CalculatorConfig {
        variant: args.variant.into(),
        default_pack: args.pack,
        animation: AnimationConfig {
            duration: Duration::from_millis(args.duration_ms),
            tick: Duration::from_millis(args.tick_ms),
        },
    };
    debug!(?config, "starting tui");

    usage_alchemist::tui::run(config).map_err(Error::Terminal)
}

fn cmd_calc(
    day: u8,
    month: Option<Month>,
    days: Option<u8>,
    pack: String,
    format: OutputFormat,
) -> Result<(), Error> {
    logging::init_stderr();

    let period = match days {
        Some(days) => Period::Fixed(DayCount::try_from(days)?),
        None => Period::Month(month.unwrap_or_default()),
    };

    let mut selection = Selection::new(period.variant(), pack);
    selection.select_period(period);
    if !selection.select_day(day) {
        return Err(InputError::DayOutOfRange {
            day,
            days_in_month: selection.days_in_month(),
        }
        .into());
    }

    let calc = calculate(&selection)?;
    debug!(allowance = calc.allowance, "calculated");

    print!("{}", format_calculation(&calc, format)?);
    Ok(())
}
