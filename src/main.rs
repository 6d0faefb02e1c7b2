use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use hunt_diff::{diff_files, format_script};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hunt-diff")]
#[command(about = "Line-oriented diff tool using the Hunt-Szymanski algorithm")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a line-numbered diff between two text files
    Diff {
        /// The old file
        left: PathBuf,
        /// The new file
        right: PathBuf,
        /// Collapse unchanged and deleted runs to counts
        #[arg(long)]
        optimize: bool,
        /// Append a summary of unchanged, deleted, and inserted lines
        #[arg(long)]
        stats: bool,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Generate the man page
    #[command(hide = true)]
    Man,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Diff {
            left,
            right,
            optimize,
            stats,
        } => {
            let script = diff_files(&left, &right)?;
            let script = if optimize { script.optimize() } else { script };
            print!("{}", format_script(&script));
            if stats {
                println!("{}", script.stats());
            }
        }
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "hunt-diff", &mut std::io::stdout());
        }
        Commands::Man => {
            clap_mangen::Man::new(Cli::command()).render(&mut std::io::stdout())?;
        }
    }

    Ok(())
}
