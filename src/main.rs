//! Terminal front end: the interactive menu loop and the `--demo` mode.
//! All gacha logic lives in the library; this file only reads stdin and
//! prints what [`breakfast_gacha::render`] hands back.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use breakfast_gacha::{GachaMachine, render};

#[derive(Parser, Debug)]
#[command(name = "breakfast-gacha", version, about = "What's for breakfast? Let the gacha decide.")]
struct Cli {
    /// Run a scripted single draw and ten-pull, then exit.
    #[arg(long)]
    demo: bool,
}

/// One round of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Single,
    TenPull,
    Menu,
    Exit,
}

impl Choice {
    fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::Single),
            "2" => Some(Self::TenPull),
            "3" => Some(Self::Menu),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let machine = GachaMachine::new()?;
    let mut rng = rand::rng();

    if cli.demo {
        print!("{}", demo_transcript(&machine, &mut rng));
        return Ok(());
    }

    run_interactive(&machine, &mut rng)
}

fn run_interactive<R: rand::Rng + ?Sized>(machine: &GachaMachine, rng: &mut R) -> Result<()> {
    println!("{}", render::banner());

    loop {
        println!("\nChoose an option:");
        println!("1. Single draw");
        println!("2. Ten-pull");
        println!("3. Show menu");
        println!("4. Exit");
        print!("\nEnter option (1-4): ");
        io::stdout().flush()?;

        let mut line = String::new();
        // A zero-byte read is EOF (piped input ran out, or ^D); leave quietly.
        if io::stdin().read_line(&mut line)? == 0 {
            println!();
            break;
        }

        match Choice::parse(line.trim()) {
            Some(Choice::Single) => print!("{}", render::card(machine.draw(rng))),
            Some(Choice::TenPull) => print!("{}", render::batch(&machine.ten_pull(rng))),
            Some(Choice::Menu) => print!("{}", render::menu_listing()),
            Some(Choice::Exit) => {
                println!("\nEnjoy your breakfast! See you next time~ 👋");
                break;
            }
            None => println!("{}", "❌ Invalid option, please try again!".red()),
        }
    }

    Ok(())
}

/// The whole `--demo` run as one string, so tests can pin its shape
/// without capturing stdout.
fn demo_transcript<R: rand::Rng + ?Sized>(machine: &GachaMachine, rng: &mut R) -> String {
    let mut out = String::new();
    out.push_str(&render::banner());
    out.push('\n');
    out.push_str("\n📋 Demo mode, drawing for you!\n");
    out.push_str("\nSingle draw demo:\n");
    out.push_str(&"─".repeat(50));
    out.push('\n');
    out.push_str(&render::card(machine.draw(rng)));
    out.push_str("\nTen-pull demo:\n");
    out.push_str(&render::batch(&machine.ten_pull(rng)));
    out
}
