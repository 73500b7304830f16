use std::{io::IsTerminal, process::ExitCode};

use clap::Parser;
use cli_calculator::{calculate, calculator::operation::Operation};
use tracing_subscriber::EnvFilter;

/// cli-calculator adds, subtracts, multiplies or divides two decimal operands.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The operation to perform: add, subtract, multiply or divide.
    operation: Option<String>,

    /// The two operands. Any further arguments are ignored.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true, num_args = 0..)]
    operands: Vec<String>,
}

fn usage() -> String {
    let operations = Operation::ALL.map(Operation::name).join(", ");
    format!("Usage: cli-calculator operation operand1 operand2\nSupported operations: {operations}")
}

/// Empty arguments count as missing. They do not shift later arguments.
fn present(arg: Option<&String>) -> Option<&str> {
    arg.map(String::as_str).filter(|arg| !arg.is_empty())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
                             .with_writer(std::io::stderr)
                             .with_ansi(std::io::stderr().is_terminal())
                             .init();

    let args = Args::parse();

    let mut operands = args.operands.iter();
    let (Some(operation), Some(lhs), Some(rhs)) =
        (present(args.operation.as_ref()), present(operands.next()), present(operands.next()))
    else {
        println!("{}", usage());
        return ExitCode::FAILURE;
    };

    let ignored: Vec<&String> = operands.collect();
    if !ignored.is_empty() {
        tracing::warn!(?ignored, "ignoring arguments after the second operand");
    }

    match calculate(operation, lhs, rhs) {
        Ok(result) => {
            println!("Result: {result}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            println!("{e}");
            ExitCode::FAILURE
        },
    }
}
