use clap::{Parser, Subcommand, ValueEnum};
use math_utils::{MathUtils, Operation, ZeroDivisionPolicy};

#[derive(Parser)]
#[command(name = "math-utils", version, about = "Multiply or divide two integers")]
struct Cli {
    /// What to do when dividing by zero
    #[arg(long, value_enum, default_value_t = OnZero::Zero)]
    on_zero: OnZero,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a * b (wrapping on overflow)
    Multiply {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
    /// Print a / b, truncated toward zero
    Divide {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OnZero {
    /// Print 0
    Zero,
    /// Fail with an error
    Error,
}

impl From<OnZero> for ZeroDivisionPolicy {
    fn from(value: OnZero) -> Self {
        match value {
            OnZero::Zero => ZeroDivisionPolicy::ReturnZero,
            OnZero::Error => ZeroDivisionPolicy::Reject,
        }
    }
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::formatted_builder()
        .parse_env("MATH_UTILS_LOG")
        .init();

    let cli = Cli::parse();
    let math = MathUtils::with_policy(cli.on_zero.into());

    let (op, a, b) = match cli.command {
        Command::Multiply { a, b } => (Operation::Multiply, a, b),
        Command::Divide { a, b } => (Operation::Divide, a, b),
    };

    let result = math.evaluate(op, a, b)?;
    println!("{result}");

    Ok(())
}
