use std::io::{self, BufRead, Write};

use clap::Parser;
use romana::evaluate;
use tracing::{Level, debug};

/// romana evaluates equations such as `V + III` or `7 * 3`, keeping the
/// notation of the operands in the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Log every parsed and evaluated equation to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// An equation to evaluate once. Starts an interactive prompt if omitted.
    #[arg(allow_hyphen_values = true)]
    equation: Option<String>,
}

const PROMPT: &str = "Enter equation (or q to exit): ";

fn main() {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_target(false)
                             .without_time()
                             .with_writer(io::stderr)
                             .init();

    if let Some(equation) = args.equation {
        match evaluate(&equation) {
            Ok(result) => println!("{result}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    if let Err(e) = run_prompt() {
        eprintln!("Failed to read from stdin: {e}");
        std::process::exit(1);
    }
}

/// Reads equations until `q` or the end of input.
fn run_prompt() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "{PROMPT}")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            debug!("end of input");
            println!();
            return Ok(());
        }

        if line.trim().eq_ignore_ascii_case("q") {
            return Ok(());
        }

        match evaluate(line.trim_end_matches(['\n', '\r'])) {
            Ok(result) => println!("Result: {result}"),
            Err(e) => println!("Error: {e}"),
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Args;

    #[test]
    fn equation_may_start_with_hyphen() {
        let args = Args::try_parse_from(["romana", "-1 + 1"]).unwrap();

        assert_eq!(args.equation.as_deref(), Some("-1 + 1"));
        assert!(!args.verbose);
    }

    #[test]
    fn verbose_flag_is_still_recognized() {
        let args = Args::try_parse_from(["romana", "-v", "5 + 3"]).unwrap();

        assert!(args.verbose);
        assert_eq!(args.equation.as_deref(), Some("5 + 3"));
    }
}
