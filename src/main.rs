use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use calctree::{
    Error,
    interpreter::lexer::{Token, tokenize},
    parse,
    render::{PrefixLayout, TreeLayout},
};
use clap::{Parser, ValueEnum};

/// calctree parses an integer arithmetic expression, draws its syntax tree
/// and prints its value.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// How to draw the syntax tree.
    #[arg(short, long, value_enum, default_value_t = Layout::Tree)]
    layout: Layout,

    /// Never colour the tree, even on a terminal.
    #[arg(long)]
    no_color: bool,

    /// Only draw the tree; skip the `= <value>` line.
    #[arg(short = 'n', long)]
    no_eval: bool,

    /// Print the token stream before parsing.
    #[arg(long)]
    tokens: bool,

    /// The expression to parse, for example "1 + 2 * 3". May start with a
    /// unary minus, as in "-5 + 3".
    #[arg(allow_hyphen_values = true)]
    expression: String,
}

/// Tree drawing styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Layout {
    /// Sideways tree with the right operand above the operator.
    Tree,
    /// Indented prefix form, one node per line.
    Prefix,
    /// Do not draw the tree.
    None,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("failed on {:?}: {e:?}", args.expression);
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        },
    }
}

fn run(args: &Args) -> Result<(), Error> {
    if args.tokens {
        let tokens = tokenize(&args.expression)?;
        let listing = tokens.iter().map(Token::to_string).collect::<Vec<_>>();
        println!("tokens: {}", listing.join(", "));
    }

    let tree = parse(&args.expression)?;

    match args.layout {
        Layout::Tree => print!("{}", TreeLayout { expr:  &tree,
                                                  color: use_color(args), }),
        Layout::Prefix => print!("{}", PrefixLayout(&tree)),
        Layout::None => {},
    }

    if !args.no_eval {
        println!("= {}", tree.evaluate()?);
    }
    Ok(())
}

fn use_color(args: &Args) -> bool {
    !args.no_color && std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
}
