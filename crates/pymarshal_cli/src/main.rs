#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "pymarshal", about = "Marshal stream inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Summarize every value in a dump.
	Info(cmd::info::Args),
	/// Decode and print a dump.
	Show(cmd::show::Args),
	/// Decode a value given as hex on the command line.
	Hex(cmd::hex::Args),
}

fn main() {
	env_logger::init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> pymarshal::marshal::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::Show(args) => cmd::show::run(args),
		Commands::Hex(args) => cmd::hex::run(args),
	}
}
