//! Selcraft CLI
//!
//! Build CSS selectors from the command line with the same ordering and
//! cardinality checks as the library.

mod chain;

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use selcraft_common::set_quiet;

use chain::Chain;

/// Selcraft: build order-checked CSS selectors
#[derive(Parser, Debug)]
#[command(name = "selcraft")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"TOKENS:
    kind=value    append a part; kind is one of element (or type), id, class,
                  attribute (or attr), pseudo-class, pseudo-element
    > + '~'       combinators; quote '~' so the shell does not expand it
    descendant    the descendant (whitespace) combinator

EXAMPLES:
    # Compound selector
    selcraft element=a id=main class=x

    # Combined selectors
    selcraft element=ul class=nav '>' element=li pseudo-class=first-child

    # JSON report
    selcraft --json element=a attr='href$=".png"' pseudo-class=focus
"#)]
struct Cli {
    /// Parts and combinators, in selector order
    #[arg(value_name = "TOKEN", required = true, allow_hyphen_values = true)]
    tokens: Vec<String>,

    /// Print a JSON report instead of the bare selector
    #[arg(long, conflicts_with = "explain")]
    json: bool,

    /// List every compound's parts with their kinds
    #[arg(short, long)]
    explain: bool,

    /// Do not print warnings (e.g. for non-standard combinators)
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    set_quiet(cli.quiet);

    let chain = Chain::parse(&cli.tokens)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&chain.report())?);
        return Ok(());
    }

    if cli.explain {
        print_explanation(&chain);
    }

    println!("{}", chain.render());
    Ok(())
}

/// Print each compound and the combinator that follows it.
fn print_explanation(chain: &Chain) {
    for (index, compound) in chain.compounds.iter().enumerate() {
        println!("{} {}", format!("compound {index}:").bold(), compound);
        for part in compound.parts() {
            println!("  {:<16} {part}", part.kind.cyan());
        }
        if let Some(token) = chain.combinators.get(index) {
            println!("{} {token:?}", "combinator:".magenta());
        }
    }
    println!();
}
