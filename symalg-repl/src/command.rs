use symalg_parser::tokenizer::{tokenize_complete, TokenKind};

/// A command entered on one line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<'a> {
    /// `let <name> = <expr>`: evaluate the expression and bind the result to the name.
    Let { name: &'a str, expr: &'a str },

    /// `eval <expr>`: evaluate the expression.
    Eval(&'a str),

    /// `simplify <expr>`: simplify the expression.
    Simplify(&'a str),

    /// `steps <expr>`: simplify the expression, listing each rewrite that was applied.
    Steps(&'a str),

    /// `diff <var> <expr>`: differentiate the expression, then simplify the result.
    Diff { var: &'a str, expr: &'a str },

    /// `pretty <expr>`: print the expression with minimal parentheses.
    Pretty(&'a str),

    /// `latex <expr>`: print the expression as LaTeX.
    Latex(&'a str),

    /// `vars`: list the bound variables.
    Vars,

    /// Any other input is an expression, which is evaluated if all of its variables are bound, or
    /// simplified otherwise.
    Bare(&'a str),
}

/// A line that starts with a command keyword, but is missing its arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Usage(pub &'static str);

/// Returns true if the string is a single identifier.
fn is_name(s: &str) -> bool {
    matches!(&*tokenize_complete(s), [token] if token.kind == TokenKind::Name)
}

/// Splits off the first whitespace-separated word of the line.
fn split_word(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    }
}

impl<'a> Command<'a> {
    /// Parses a line of input into a command.
    pub fn parse(line: &'a str) -> Result<Self, Usage> {
        let line = line.trim();
        let (keyword, rest) = split_word(line);

        let non_empty = |usage: &'static str| {
            if rest.is_empty() {
                Err(Usage(usage))
            } else {
                Ok(rest)
            }
        };

        match keyword {
            "let" => {
                let (name, expr) = rest.split_once('=').ok_or(Usage("let <name> = <expr>"))?;
                let (name, expr) = (name.trim(), expr.trim());
                if !is_name(name) || expr.is_empty() {
                    return Err(Usage("let <name> = <expr>"));
                }
                Ok(Command::Let { name, expr })
            },
            "eval" => non_empty("eval <expr>").map(Command::Eval),
            "simplify" => non_empty("simplify <expr>").map(Command::Simplify),
            "steps" => non_empty("steps <expr>").map(Command::Steps),
            "diff" => {
                let (var, expr) = split_word(rest);
                if !is_name(var) || expr.is_empty() {
                    return Err(Usage("diff <var> <expr>"));
                }
                Ok(Command::Diff { var, expr })
            },
            "pretty" => non_empty("pretty <expr>").map(Command::Pretty),
            "latex" => non_empty("latex <expr>").map(Command::Latex),
            "vars" if rest.is_empty() => Ok(Command::Vars),
            _ => Ok(Command::Bare(line)),
        }
    }

    /// Returns the expression text the command operates on. Errors raised by the command point
    /// into this text.
    pub fn source(&self) -> &'a str {
        match *self {
            Command::Let { expr, .. }
            | Command::Eval(expr)
            | Command::Simplify(expr)
            | Command::Steps(expr)
            | Command::Diff { expr, .. }
            | Command::Pretty(expr)
            | Command::Latex(expr)
            | Command::Bare(expr) => expr,
            Command::Vars => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn keywords() {
        assert_eq!(Command::parse("let x = (1 + 2)"), Ok(Command::Let { name: "x", expr: "(1 + 2)" }));
        assert_eq!(Command::parse("  eval (x * 2) "), Ok(Command::Eval("(x * 2)")));
        assert_eq!(Command::parse("simplify (x + 0)"), Ok(Command::Simplify("(x + 0)")));
        assert_eq!(Command::parse("steps (x + 0)"), Ok(Command::Steps("(x + 0)")));
        assert_eq!(Command::parse("diff x (x ** 2)"), Ok(Command::Diff { var: "x", expr: "(x ** 2)" }));
        assert_eq!(Command::parse("pretty ((a + b) * c)"), Ok(Command::Pretty("((a + b) * c)")));
        assert_eq!(Command::parse("latex (a / b)"), Ok(Command::Latex("(a / b)")));
        assert_eq!(Command::parse("vars"), Ok(Command::Vars));
    }

    #[test]
    fn bare_expressions() {
        assert_eq!(Command::parse("(x + 1)"), Ok(Command::Bare("(x + 1)")));
        assert_eq!(Command::parse("x"), Ok(Command::Bare("x")));
        assert_eq!(Command::parse("vars_2"), Ok(Command::Bare("vars_2")));
    }

    #[test]
    fn expression_source() {
        assert_eq!(Command::parse("let y = (x / 2)").unwrap().source(), "(x / 2)");
        assert_eq!(Command::parse("diff x (x ** 2)").unwrap().source(), "(x ** 2)");
        assert_eq!(Command::parse("vars").unwrap().source(), "");
    }

    #[test]
    fn missing_arguments() {
        assert_eq!(Command::parse("eval"), Err(Usage("eval <expr>")));
        assert_eq!(Command::parse("let x"), Err(Usage("let <name> = <expr>")));
        assert_eq!(Command::parse("let 2 = 3"), Err(Usage("let <name> = <expr>")));
        assert_eq!(Command::parse("let x ="), Err(Usage("let <name> = <expr>")));
        assert_eq!(Command::parse("diff (x ** 2)"), Err(Usage("diff <var> <expr>")));
    }
}
