// SPDX-License-Identifier: MIT

use clap::{Parser, Subcommand, ValueEnum};
use dotenv::dotenv;
use postfix_calc::calc::{convert, Report, OPERATORS};

/// Sample expressions run by `demo`
const DEMO_EXPRESSIONS: [&str; 7] = [
    "1+2*3",
    "2+2^2*3",
    "1==2",
    "1+3>2",
    "(4>=4)&&0",
    "(1+2)*3",
    "++++2-5*(3^2)",
];

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output format for results
    #[arg(short, long, value_enum, env = "CALC_OUTPUT", default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate one or more expressions
    Eval {
        /// Expressions to evaluate (single-digit operands)
        #[arg(required = true)]
        expressions: Vec<String>,
    },
    /// Print the postfix form of an expression
    Postfix {
        /// Expression to convert
        expression: String,
    },
    /// Run the built-in sample expressions
    Demo,
    /// Print the operator precedence table
    Table,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn print_report(report: &Report, format: OutputFormat) -> serde_json::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => match (&report.result, &report.error) {
            (Some(value), _) => println!("{}", value),
            (_, Some(error)) => eprintln!("Error: {}", error.message),
            _ => {}
        },
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Eval { expressions } => {
            let mut failed = 0;
            for expression in &expressions {
                let report = Report::for_expression(expression);
                if !report.is_ok() {
                    failed += 1;
                }
                print_report(&report, args.output)?;
            }
            if failed > 0 {
                anyhow::bail!("{} of {} expressions failed", failed, expressions.len());
            }
        }
        Commands::Postfix { expression } => {
            let postfix = convert(&expression)?;
            match args.output {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({ "expression": expression, "postfix": postfix.to_string() })
                ),
                OutputFormat::Text => println!("{}", postfix),
            }
        }
        Commands::Demo => {
            log::info!("Running {} sample expressions", DEMO_EXPRESSIONS.len());
            for expression in DEMO_EXPRESSIONS {
                print_report(&Report::for_expression(expression), args.output)?;
            }
        }
        Commands::Table => {
            for op in OPERATORS {
                let info = op.info();
                match args.output {
                    OutputFormat::Json => println!(
                        "{}",
                        serde_json::json!({
                            "operator": op.to_string(),
                            "unary": op.is_unary(),
                            "precedence": info.precedence,
                            "associativity": info.associativity.to_string(),
                        })
                    ),
                    OutputFormat::Text => println!(
                        "{:<4} {:<6} {} {}",
                        op.to_string(),
                        if op.is_unary() { "unary" } else { "binary" },
                        info.precedence,
                        info.associativity
                    ),
                }
            }
        }
    }

    Ok(())
}
