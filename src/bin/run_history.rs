//! Run one employee's career through the engine and print/write the result.
//!
//! Grounded on `run_block.rs`'s shape: load data, run the engine, print a
//! console summary, and write the full detail to disk.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tn_payroll_engine::{run_payroll, EmployeeInput, ReferenceTables};

#[derive(Parser)]
#[command(name = "run-history", about = "Simulate one employee's payroll history")]
struct Args {
    /// Path to an EmployeeInput JSON fixture.
    employee: PathBuf,

    /// Directory of reference-table CSVs. Falls back to the built-in tables.
    #[arg(long)]
    reference_dir: Option<PathBuf>,

    /// Where to write the monthly periods as CSV.
    #[arg(long, default_value = "payroll_output.csv")]
    csv_out: PathBuf,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let raw = std::fs::read_to_string(&args.employee).expect("failed to read employee fixture");
    let input: EmployeeInput = serde_json::from_str(&raw).expect("failed to parse employee fixture");

    let tables = match &args.reference_dir {
        Some(dir) => ReferenceTables::from_csv_path(dir).expect("failed to load reference tables"),
        None => ReferenceTables::default_tables(),
    };

    let result = run_payroll(&input, &tables).expect("payroll simulation failed");

    println!("Employee: {}", result.employee_details.employee_name);
    println!("Retirement date: {}", result.employee_details.retirement_date);
    println!(
        "Years covered: {}",
        result.yearly_calculations.iter().map(|y| y.year.to_string()).collect::<Vec<_>>().join(", ")
    );
    println!(
        "Increments: regular={} selection_grade={} special_grade={} promotion={} account_test={} total={}",
        result.increment_analysis.regular,
        result.increment_analysis.selection_grade,
        result.increment_analysis.special_grade,
        result.increment_analysis.promotion,
        result.increment_analysis.account_test,
        result.increment_analysis.total,
    );

    let mut file = File::create(&args.csv_out).expect("failed to create CSV output file");
    writeln!(file, "Date,Commission,BasicPay,DA,HRA,CCA,Medical,Gross,Deductions,Net,Remarks").unwrap();
    for year in &result.yearly_calculations {
        for period in &year.periods {
            writeln!(
                file,
                "{},{:?},{},{},{},{},{},{},{},{},\"{}\"",
                period.date.format("%d/%m/%Y"),
                period.commission,
                period.basic_pay,
                period.da_amount,
                period.hra_amount,
                period.cca_amount,
                period.medical_allowance,
                period.gross_pay,
                period.deductions.total(),
                period.net_pay,
                period.remarks.join("; "),
            )
            .unwrap();
        }
    }

    println!("Monthly detail written to {}", args.csv_out.display());
}
