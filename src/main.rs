use std::fs;

use clap::Parser;
use exprheap::ast::ExprTree;

/// exprheap evaluates integer arithmetic and shows its expression tree in
/// prefix, infix or postfix order.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the contents as a file path and evaluate one expression per line.
    #[arg(short, long)]
    file: bool,

    /// Print the tree in prefix order before the value.
    #[arg(long)]
    prefix: bool,

    /// Print the tree in infix order before the value.
    #[arg(long)]
    infix: bool,

    /// Print the tree in postfix order before the value.
    #[arg(long)]
    postfix: bool,

    contents: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    for expression in script.lines().filter(|line| !line.trim().is_empty()) {
        if let Err(e) = run(expression, &args) {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn run(expression: &str, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let tree = expression.parse::<ExprTree>()?;

    if args.prefix {
        println!("prefix:  {}", tree.prefix_order());
    }
    if args.infix {
        println!("infix:   {}", tree.infix_order());
    }
    if args.postfix {
        println!("postfix: {}", tree.postfix_order());
    }

    println!("{}", tree.evaluate()?);
    Ok(())
}
