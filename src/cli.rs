//! CLI definition and dispatch.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_bars::CsvBarAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::json_report::JsonReportAdapter;
use crate::domain::config_validation::validate_data_config;
use crate::domain::error::StocklensError;
use crate::domain::forecast::forecast_series;
use crate::domain::indicator::IndicatorSeries;
use crate::domain::insight::generate_insight;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::MarketDataPort;
use crate::ports::report_port::ReportPort;
use crate::render::{render_forecast, render_insight};

#[derive(Parser, Debug)]
#[command(name = "stocklens", about = "Indicator and investment-insight engine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Produce the full insight report for one code
    Analyze {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        code: String,
        #[arg(long)]
        start: Option<NaiveDate>,
        #[arg(long)]
        end: Option<NaiveDate>,
    },
    /// Export the indicator table for one code as CSV
    Indicators {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        code: String,
        #[arg(long)]
        start: Option<NaiveDate>,
        #[arg(long)]
        end: Option<NaiveDate>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List codes with available price data
    ListCodes {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Analyze {
            config,
            code,
            start,
            end,
        } => run_analyze(&config, &code, start, end),
        Command::Indicators {
            config,
            code,
            start,
            end,
            output,
        } => run_indicators(&config, &code, start, end, output.as_ref()),
        Command::ListCodes { config } => run_list_codes(&config),
        Command::Validate { config } => run_validate(&config),
    }
}

fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, StocklensError> {
    let adapter = FileConfigAdapter::from_file(path).map_err(|e| StocklensError::ConfigParse {
        file: path.display().to_string(),
        reason: e.to_string(),
    })?;
    validate_data_config(&adapter)?;
    Ok(adapter)
}

fn build_adapters(
    config: &FileConfigAdapter,
) -> (CsvBarAdapter, JsonReportAdapter) {
    // validate_data_config already guaranteed both keys exist.
    let bars_dir = config.get_string("data", "bars_dir").unwrap_or_default();
    let reports_dir = config.get_string("data", "reports_dir").unwrap_or_default();
    (
        CsvBarAdapter::new(PathBuf::from(bars_dir)),
        JsonReportAdapter::new(PathBuf::from(reports_dir)),
    )
}

fn date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> (NaiveDate, NaiveDate) {
    (start.unwrap_or(NaiveDate::MIN), end.unwrap_or(NaiveDate::MAX))
}

fn fail(err: &StocklensError) -> ExitCode {
    eprintln!("error: {err}");
    err.into()
}

fn run_analyze(
    config_path: &PathBuf,
    code: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => return fail(&e),
    };
    let (bar_port, report_port) = build_adapters(&config);
    let (start, end) = date_range(start, end);

    eprintln!("Fetching report for {code}");
    let snapshot = match report_port.fetch_snapshot(code) {
        Ok(s) => s,
        Err(e) => return fail(&e),
    };

    let insight = generate_insight(&snapshot);
    print!("{}", render_insight(code, &insight));

    let forecast = match report_port.fetch_forecast(code) {
        Ok(f) => f,
        Err(e) => return fail(&e),
    };

    // The forecast series needs a current price; prefer the snapshot's,
    // fall back to the last close.
    let current_price = match snapshot.valuation.price {
        Some(price) => Some(price),
        None => match bar_port.fetch_bars(code, start, end) {
            Ok(bars) => bars.last().map(|b| b.close),
            Err(_) => None,
        },
    };

    match (forecast, current_price) {
        (Some(payload), Some(price)) => {
            if let Some(series) = forecast_series(Some(&payload), price) {
                println!();
                print!("{}", render_forecast(&series, &payload.key_drivers));
            }
        }
        _ => eprintln!("No forecast available for {code}"),
    }

    ExitCode::SUCCESS
}

fn run_indicators(
    config_path: &PathBuf,
    code: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    output: Option<&PathBuf>,
) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => return fail(&e),
    };
    let (bar_port, _) = build_adapters(&config);
    let (start, end) = date_range(start, end);

    eprintln!("Fetching bars for {code}");
    let bars = match bar_port.fetch_bars(code, start, end) {
        Ok(b) => b,
        Err(e) => return fail(&e),
    };

    eprintln!("Computing indicators over {} bars", bars.len());
    let series = IndicatorSeries::compute(&bars);

    let result = match output {
        Some(path) => csv::Writer::from_path(path)
            .map_err(|e| StocklensError::Data {
                reason: format!("failed to create {}: {}", path.display(), e),
            })
            .and_then(|w| write_indicator_csv(w, &bars, &series)),
        None => write_indicator_csv(csv::Writer::from_writer(std::io::stdout()), &bars, &series),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&e),
    }
}

fn write_indicator_csv<W: std::io::Write>(
    mut writer: csv::Writer<W>,
    bars: &[crate::domain::ohlcv::PriceBar],
    series: &IndicatorSeries,
) -> Result<(), StocklensError> {
    let io_err = |e: csv::Error| StocklensError::Data {
        reason: format!("csv write error: {e}"),
    };

    writer
        .write_record([
            "date",
            "close",
            "ma5",
            "ma20",
            "ma60",
            "ma120",
            "boll_upper",
            "boll_mid",
            "boll_lower",
            "color",
        ])
        .map_err(io_err)?;

    let cell = |value: Option<f64>| match value {
        Some(v) => format!("{v:.4}"),
        None => String::new(),
    };

    for (i, bar) in bars.iter().enumerate() {
        writer
            .write_record([
                bar.date.to_string(),
                format!("{:.4}", bar.close),
                cell(series.ma5[i]),
                cell(series.ma20[i]),
                cell(series.ma60[i]),
                cell(series.ma120[i]),
                cell(series.boll_upper[i]),
                cell(series.boll_mid[i]),
                cell(series.boll_lower[i]),
                series.bar_colors[i].as_str().to_string(),
            ])
            .map_err(io_err)?;
    }

    writer.flush().map_err(StocklensError::Io)
}

fn run_list_codes(config_path: &PathBuf) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => return fail(&e),
    };
    let (bar_port, _) = build_adapters(&config);

    match bar_port.list_codes() {
        Ok(codes) => {
            for code in codes {
                println!("{code}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    match load_config(config_path) {
        Ok(_) => {
            println!("config ok");
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}
