//! Command-line arguments

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use judecca_disassembler::Style;
use judecca_spec::Limits;

#[derive(Parser, Debug)]
#[command(name = "judecca")]
#[command(version, about = "Run a Judecca program")]
pub struct Cli {
    /// Program file; its bytes are the source
    pub program: PathBuf,

    /// Disable the page and tape limits (same as JUDECCA_RUN_NOLIMIT=1)
    #[arg(long)]
    pub no_limit: bool,

    /// Highest page index the program may touch
    #[arg(long, value_name = "N")]
    pub max_page: Option<u64>,

    /// Largest distance of the tape head from its start cell
    #[arg(long, value_name = "N")]
    pub max_tape: Option<u64>,

    /// Stop successfully after N instructions
    #[arg(long, value_name = "N")]
    pub max_steps: Option<u64>,

    /// Discard output and answer every read with '?'
    #[arg(long)]
    pub null_io: bool,

    /// Print the first N pages instead of running
    #[arg(long, value_name = "N")]
    pub dump_pages: Option<u64>,

    /// Keep inert symbols in page dumps
    #[arg(long, requires = "dump_pages")]
    pub raw: bool,

    /// More logging on stderr (-v debug, -vv trace every instruction)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Limits from the environment, overridden by flags
    pub fn limits(&self, env_limits: Limits) -> Limits {
        let mut limits = if self.no_limit {
            Limits::unlimited()
        } else {
            env_limits
        };
        if self.max_page.is_some() {
            limits.max_page = self.max_page;
        }
        if self.max_tape.is_some() {
            limits.max_tape = self.max_tape;
        }
        limits
    }

    pub fn style(&self) -> Style {
        if self.raw {
            Style::Raw
        } else {
            Style::Stripped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("judecca").chain(args.iter().copied()))
    }

    #[test]
    fn parse_defaults() {
        let cli = parse(&["prog.jd"]);
        assert_eq!(cli.program, PathBuf::from("prog.jd"));
        assert!(!cli.no_limit);
        assert!(!cli.null_io);
        assert_eq!(cli.max_steps, None);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.style(), Style::Stripped);
        assert_eq!(cli.limits(Limits::default()), Limits::default());
    }

    #[test]
    fn parse_flags_override_environment() {
        let cli = parse(&["--max-tape", "9", "prog.jd"]);
        let limits = cli.limits(Limits::unlimited());
        assert_eq!(limits.max_tape, Some(9));
        assert_eq!(limits.max_page, None);
    }

    #[test]
    fn parse_no_limit_then_explicit_bound() {
        let cli = parse(&["--no-limit", "--max-page", "3", "prog.jd"]);
        assert_eq!(cli.limits(Limits::default()), Limits::new(Some(3), None));
    }

    #[test]
    fn parse_dump_and_verbosity() {
        let cli = parse(&["-vv", "--dump-pages", "2", "--raw", "prog.jd"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.dump_pages, Some(2));
        assert_eq!(cli.style(), Style::Raw);
    }

    #[test]
    fn parse_raw_needs_dump() {
        let result = Cli::try_parse_from(["judecca", "--raw", "prog.jd"]);
        assert!(result.is_err());
    }
}
