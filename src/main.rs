use std::{
    env,
    io::{self, BufRead, Write},
    time::Instant,
};

use minilang::{display_error, paint, parser::parser::parse, Color};
use tracing::debug;

/// Installs a `fmt` subscriber when `RUST_LOG` is set, e.g. `RUST_LOG=minilang=trace`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() {
    init_tracing();

    // Name shown in diagnostics, `shell` unless given
    let source_name = env::args().nth(1);
    let mut show_tree = false;

    println!("Commands:");
    println!("#cls: To clear the screen");
    println!("#showParseTree: To show/hide Parse Trees\n");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print!("-> ");
        if io::stdout().flush().is_err() {
            return;
        }

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }

        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            return;
        }

        match line {
            "#showParseTree" => {
                show_tree = !show_tree;
                println!(
                    "{}",
                    if show_tree {
                        "Showing Parse Trees"
                    } else {
                        "Not showing Parse trees"
                    }
                );
                continue;
            }
            "#cls" => {
                print!("\x1B[2J\x1B[1;1H");
                continue;
            }
            _ => {}
        }

        let parse_start = Instant::now();
        let syntax_tree = parse(line, source_name.clone());
        debug!(elapsed = ?parse_start.elapsed(), "parsed");

        if show_tree {
            print!("{}", paint(&syntax_tree.to_string(), Color::DarkGray));
        }

        if syntax_tree.diagnostics().is_empty() {
            if !show_tree {
                println!("ok");
            }
        } else {
            for diagnostic in syntax_tree.diagnostics() {
                println!();
                display_error(diagnostic, syntax_tree.text());
            }
            println!();
        }
    }
}
