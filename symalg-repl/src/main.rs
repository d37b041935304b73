mod command;
mod error;

use command::{Command, Usage};
use error::Error;
use log::{debug, info};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs::File, io::{self, BufReader, IsTerminal, Read}};
use symalg_compute::{parse, simplify_with_steps, Ctxt, Eval, Latex, Number};

/// Formats an evaluated number, adding a decimal approximation if it cannot be written exactly.
fn fmt_number(n: &Number) -> String {
    if n.is_representable() {
        n.to_string()
    } else {
        format!("{} (approximately {})", n, n.to_f64())
    }
}

/// Runs a single command, returning the text to print.
fn run(command: &Command, ctxt: &mut Ctxt) -> Result<String, Error> {
    Ok(match *command {
        Command::Let { name, expr } => {
            let value = parse(expr)?.eval(ctxt)?;
            let output = format!("{} = {}", name, fmt_number(&value));
            ctxt.add_var(name, value);
            output
        },
        Command::Eval(expr) => fmt_number(&parse(expr)?.eval(ctxt)?),
        Command::Simplify(expr) => parse(expr)?.simplify().to_string(),
        Command::Steps(expr) => {
            let (simplified, steps) = simplify_with_steps(&parse(expr)?);
            steps.iter()
                .map(|step| format!("{:?}\n", step))
                .chain(std::iter::once(simplified.to_string()))
                .collect()
        },
        Command::Diff { var, expr } => parse(expr)?.differentiate(var)?.simplify().to_string(),
        Command::Pretty(expr) => parse(expr)?.pretty().to_string(),
        Command::Latex(expr) => parse(expr)?.as_display().to_string(),
        Command::Vars => {
            let mut vars = ctxt.get_vars().iter().collect::<Vec<_>>();
            vars.sort_by(|(a, _), (b, _)| a.cmp(b));
            vars.into_iter()
                .map(|(name, value)| format!("{} = {}", name, fmt_number(value)))
                .collect::<Vec<_>>()
                .join("\n")
        },
        Command::Bare(expr) => {
            let expr = parse(expr)?;
            if expr.variables().into_iter().all(|name| ctxt.get_var(name).is_some()) {
                fmt_number(&expr.eval(ctxt)?)
            } else {
                expr.simplify().to_string()
            }
        },
    })
}

/// Parses and runs one line of input, printing the result or reporting the error.
fn execute_line(line: &str, ctxt: &mut Ctxt) {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return;
    }

    debug!("running line: {}", line);
    let result = match Command::parse(line) {
        Ok(command) => run(&command, ctxt).map_err(|err| (err, command.source())),
        Err(Usage(usage)) => Err((Error::Usage(usage), line)),
    };

    match result {
        Ok(output) if output.is_empty() => (), // intentionally print nothing
        Ok(output) => println!("{}", output),
        Err((err, source)) => {
            if let Err(io_err) = err.report_to_stderr("input", source) {
                eprintln!("{}", io_err);
            }
        },
    }
}

/// Runs every line of the given source, sharing variable bindings between lines.
fn execute(input: &str) {
    let mut ctxt = Ctxt::new();
    for line in input.lines() {
        execute_line(line, &mut ctxt);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args();
    args.next();

    if let Some(filename) = args.next() {
        // run source file
        let mut file = BufReader::new(File::open(filename)?);
        let mut input = String::new();
        file.read_to_string(&mut input)?;

        execute(&input);
    } else if !io::stdin().is_terminal() {
        // read source from stdin
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;

        execute(&input);
    } else {
        // run the repl / interactive mode
        info!("starting interactive session");
        let mut rl = DefaultEditor::new()?;
        let mut ctxt = Ctxt::new();

        fn process_line(rl: &mut DefaultEditor, ctxt: &mut Ctxt) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            execute_line(&input, ctxt);
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl, &mut ctxt) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }

    Ok(())
}
