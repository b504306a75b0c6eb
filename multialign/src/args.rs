use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use libmultialign::align::structs::ScoreParams;

#[derive(Subcommand)]
pub enum SubCommands {
    #[command(about = "Align every sequence end to end (N-dimensional Needleman-Wunsch)")]
    Global(AlignArgs),
    #[command(about = "Align the best scoring substrings of every sequence (N-dimensional Smith-Waterman)")]
    Local(AlignArgs),
}

#[derive(Parser)]
#[command(name = "multialign")]
#[command(about = "Optimally align two or more sequences over an N-dimensional dynamic programming lattice")]
pub struct Cli {
    #[command(subcommand)]
    pub command: SubCommands,

    /// Increase logging verbosity (-v for info, -vv for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Args, Debug, Clone)]
pub struct AlignArgs {
    /// Fasta files, the first sequence of each is aligned
    #[arg(value_name = "SEQ.fasta")]
    pub sequence_paths: Vec<PathBuf>,

    /// Arguments that set the scoring weights
    #[command(flatten)]
    pub score_args: ScoreArgs,

    /// Arguments that control output options
    #[command(flatten)]
    pub output_args: OutputArgs,

    /// Arguments that control how the lattice is solved
    #[command(flatten)]
    pub common_args: CommonArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ScoreArgs {
    /// A JSON file of scoring weights: {"match", "mismatch", "gap", "twogaps"}
    #[arg(long = "params", value_name = "PATH")]
    pub params_path: Option<PathBuf>,

    /// The reward for a pair of identical symbols [default: 5]
    #[arg(long = "match", value_name = "N", allow_negative_numbers = true)]
    pub match_score: Option<i32>,

    /// The weight of a pair of differing symbols [default: -2]
    #[arg(long = "mismatch", value_name = "N", allow_negative_numbers = true)]
    pub mismatch_score: Option<i32>,

    /// The weight of a symbol paired with a gap [default: -4]
    #[arg(long = "gap", value_name = "N", allow_negative_numbers = true)]
    pub gap_score: Option<i32>,

    /// The weight of a pair of gaps [default: 0]
    #[arg(long = "twogaps", value_name = "N", allow_negative_numbers = true)]
    pub two_gaps_score: Option<i32>,
}

impl ScoreArgs {
    /// Start from the parameter file (or the defaults) and apply any weights given as flags.
    pub fn resolve(&self) -> anyhow::Result<ScoreParams> {
        let mut params = match &self.params_path {
            Some(path) => ScoreParams::from_json_path(path)?,
            None => ScoreParams::default(),
        };

        if let Some(score) = self.match_score {
            params.match_score = score;
        }
        if let Some(score) = self.mismatch_score {
            params.mismatch_score = score;
        }
        if let Some(score) = self.gap_score {
            params.gap_score = score;
        }
        if let Some(score) = self.two_gaps_score {
            params.two_gaps_score = score;
        }

        Ok(params)
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Where to write the alignment report [default: stdout]
    #[arg(short = 'O', long = "output", value_name = "PATH")]
    pub ali_results_path: Option<PathBuf>,

    /// Where to write a tabular summary of the alignment
    #[arg(short = 'T', long = "tab-output", value_name = "PATH")]
    pub tbl_results_path: Option<PathBuf>,

    /// Where to write every cell of the solved matrix
    #[arg(long = "dump-matrix", value_name = "PATH")]
    pub matrix_dump_path: Option<PathBuf>,

    /// Allow multialign to overwrite files
    #[arg(short = 'q', long = "allow-overwrite", default_value_t = false)]
    pub allow_overwrite: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Solve the lattice one wavefront at a time, in parallel
    #[arg(long = "wavefront", default_value_t = false)]
    pub wavefront: bool,

    /// The number of threads to use with --wavefront
    #[arg(
        short = 't',
        long = "threads",
        default_value_t = 8usize,
        value_name = "n"
    )]
    pub num_threads: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(args: &[&str]) -> anyhow::Result<Cli> {
        Ok(Cli::try_parse_from(args)?)
    }

    #[test]
    fn test_global_args() -> anyhow::Result<()> {
        let cli = parse(&["multialign", "global", "a.fa", "b.fa", "c.fa", "--mismatch", "-3"])?;
        let SubCommands::Global(args) = cli.command else {
            anyhow::bail!("expected the global subcommand");
        };

        assert_eq!(args.sequence_paths.len(), 3);
        assert_eq!(args.score_args.mismatch_score, Some(-3));
        assert!(!args.common_args.wavefront);
        assert_eq!(cli.verbosity, 0);
        Ok(())
    }

    #[test]
    fn test_local_args() -> anyhow::Result<()> {
        let cli = parse(&[
            "multialign", "-vv", "local", "a.fa", "--wavefront", "-t", "2", "-T", "out.tbl",
        ])?;
        let SubCommands::Local(args) = cli.command else {
            anyhow::bail!("expected the local subcommand");
        };

        // a single path parses; the command itself reports it
        assert_eq!(args.sequence_paths.len(), 1);
        assert!(args.common_args.wavefront);
        assert_eq!(args.common_args.num_threads, 2);
        assert_eq!(args.output_args.tbl_results_path, Some(PathBuf::from("out.tbl")));
        assert_eq!(cli.verbosity, 2);
        Ok(())
    }

    #[test]
    fn test_flags_override_params_file() -> anyhow::Result<()> {
        let path = std::env::temp_dir().join(format!("multialign-params-{}.json", std::process::id()));
        let mut file = std::fs::File::create(&path)?;
        write!(file, r#"{{"match": 2, "gap": -1}}"#)?;
        drop(file);

        let args = ScoreArgs {
            params_path: Some(path.clone()),
            gap_score: Some(-7),
            ..Default::default()
        };
        let params = args.resolve()?;
        std::fs::remove_file(&path)?;

        assert_eq!(params, ScoreParams::new(2, -2, -7, 0));
        Ok(())
    }
}
