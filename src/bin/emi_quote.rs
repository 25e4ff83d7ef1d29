//! Command-line EMI quotes, schedule export and batch evaluation
//!
//! Batch mode reads scenarios with columns `principal,rate,tenure,income`
//! and evaluates them in parallel. A bad row gets an `error` column instead
//! of stopping the run.

use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use mortgage_calculator::{
    amortization_schedule, check_eligibility, compute_amortization, format_currency,
    CalculatorError, CalculatorInputs, LoanInput,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(author, version, about = "Home loan EMI calculator", long_about = None)]
struct Cli {
    /// Currency code for printed amounts
    #[arg(long, default_value = "INR", global = true)]
    currency: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Quote the EMI for a property purchase
    Quote {
        /// Property price
        #[arg(long)]
        price: f64,
        /// Down payment
        #[arg(long, default_value_t = 0.0)]
        down: f64,
        /// Annual interest rate in percent
        #[arg(long)]
        rate: f64,
        /// Tenure in years
        #[arg(long, default_value_t = 1.0)]
        tenure: f64,
        /// Monthly income for the eligibility check
        #[arg(long)]
        income: Option<f64>,
    },
    /// Write the month-by-month repayment schedule as CSV
    Schedule {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        tenure: f64,
        /// Output CSV path
        #[arg(long)]
        output: PathBuf,
    },
    /// Evaluate many scenarios from a CSV file
    Batch {
        /// Input CSV with principal,rate,tenure,income columns
        #[arg(long)]
        input: PathBuf,
        /// Output CSV path
        #[arg(long)]
        output: PathBuf,
    },
}

#[derive(Debug, Deserialize)]
struct Scenario {
    principal: f64,
    rate: f64,
    tenure: f64,
    #[serde(default)]
    income: Option<f64>,
}

#[derive(Debug, Serialize, Default)]
struct ScenarioRow {
    principal: f64,
    rate: f64,
    tenure: f64,
    income: Option<f64>,
    installment: Option<f64>,
    total_interest: Option<f64>,
    total_payment: Option<f64>,
    ratio_percent: Option<f64>,
    eligible: Option<bool>,
    error: Option<String>,
}

fn evaluate(scenario: &Scenario) -> Result<ScenarioRow, CalculatorError> {
    let result = compute_amortization(scenario.principal, scenario.rate, scenario.tenure)?;
    let eligibility = scenario
        .income
        .map(|income| check_eligibility(result.installment, income))
        .transpose()?;

    Ok(ScenarioRow {
        principal: scenario.principal,
        rate: scenario.rate,
        tenure: scenario.tenure,
        income: scenario.income,
        installment: Some(result.installment),
        total_interest: Some(result.total_interest),
        total_payment: Some(result.total_payment),
        ratio_percent: eligibility.as_ref().and_then(|e| e.ratio_percent),
        eligible: eligibility.map(|e| e.is_eligible),
        error: None,
    })
}

fn quote(currency: &str, inputs: CalculatorInputs, with_income: bool) -> Result<()> {
    let view = inputs.evaluate(currency).context("Failed to evaluate loan")?;

    println!("Loan amount:    {}", format_currency(view.principal, currency));
    println!("Down payment:   {}%", view.down_payment_percentage);
    println!("Monthly EMI:    {}", view.installment_display);
    println!("Total interest: {}", view.total_interest_display);
    println!("Total payment:  {}", view.total_payment_display);

    if with_income {
        match view.eligibility.ratio_percent {
            Some(ratio) => println!("EMI / income:   {}%", ratio),
            None => println!("EMI / income:   n/a"),
        }
        println!("{}", view.eligibility.message);
    }
    Ok(())
}

fn schedule(principal: f64, rate: f64, tenure: f64, output: &PathBuf) -> Result<()> {
    let rows = amortization_schedule(&LoanInput::new(principal, rate, tenure))
        .context("Failed to build schedule")?;

    let file = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    let mut writer = csv::Writer::from_writer(file);
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!("Wrote {} periods to {}", rows.len(), output.display());
    Ok(())
}

fn batch(input: &PathBuf, output: &PathBuf) -> Result<()> {
    let start = Instant::now();
    let mut reader = csv::Reader::from_path(input)
        .with_context(|| format!("Failed to open {}", input.display()))?;
    let scenarios: Vec<Scenario> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .context("Failed to read scenarios")?;
    info!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let rows: Vec<ScenarioRow> = scenarios
        .par_iter()
        .map(|scenario| {
            evaluate(scenario).unwrap_or_else(|e| ScenarioRow {
                principal: scenario.principal,
                rate: scenario.rate,
                tenure: scenario.tenure,
                income: scenario.income,
                error: Some(e.to_string()),
                ..Default::default()
            })
        })
        .collect();

    let failed = rows.iter().filter(|r| r.error.is_some()).count();
    if failed > 0 {
        warn!("{} of {} scenarios had invalid input", failed, rows.len());
    }

    let mut writer = csv::Writer::from_path(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!(
        "Evaluated {} scenarios in {:?}, output written to {}",
        rows.len(),
        start.elapsed(),
        output.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Quote { price, down, rate, tenure, income } => {
            let inputs = CalculatorInputs {
                property_price: price,
                down_payment: down,
                interest_rate: rate,
                tenure_years: tenure,
                monthly_income: income.unwrap_or(0.0),
            };
            quote(&cli.currency, inputs, income.is_some())
        }
        Command::Schedule { principal, rate, tenure, output } => {
            schedule(principal, rate, tenure, &output)
        }
        Command::Batch { input, output } => batch(&input, &output),
    }
}
