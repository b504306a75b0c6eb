use std::io::{stdout, IsTerminal, Write};

use colored::Colorize;
use libmultialign::align::structs::{EngineConfigBuilder, Recurrence, Strategy, SCORE_HEADER};
use libmultialign::align::Engine;
use libmultialign::output::output_standard::write_standard_output;
use libmultialign::output::output_tabular::{write_tabular_output, TableFormat};
use libmultialign::output::Report;
use libmultialign::structs::Sequence;
use log::info;

use crate::args::AlignArgs;
use crate::util::{set_threads, PathBufExt};

pub const TOO_FEW_SEQUENCES_MESSAGE: &str = "Please give at least 2 sequences";

pub fn align(args: &AlignArgs, recurrence: Recurrence) -> anyhow::Result<()> {
    if args.sequence_paths.len() < 2 {
        println!("{TOO_FEW_SEQUENCES_MESSAGE}");
        return Ok(());
    }

    let params = args.score_args.resolve()?;
    info!("score parameters: {}", serde_json::to_string(&params)?);

    let strategy = if args.common_args.wavefront {
        set_threads(args.common_args.num_threads)?;
        Strategy::Wavefront
    } else {
        Strategy::Sequential
    };

    let sequences: Vec<Sequence> = args
        .sequence_paths
        .iter()
        .map(|path| {
            info!("reading: {}", path.to_string_lossy());
            Sequence::first_from_fasta(path)
        })
        .collect::<anyhow::Result<_>>()?;

    let config = EngineConfigBuilder::default()
        .recurrence(recurrence)
        .strategy(strategy)
        .params(params)
        .build()?;

    let mut engine = Engine::new(&sequences, config)?;
    engine.solve()?;

    let report: Report = match recurrence {
        Recurrence::Global => engine.global_alignment()?.into(),
        Recurrence::Local => engine.local_alignment()?.into(),
    };

    let output_args = &args.output_args;

    match &output_args.ali_results_path {
        Some(path) => {
            let mut writer = path.open(output_args.allow_overwrite)?;
            write_standard_output(&report, &mut writer)?;
            writer.flush()?;
        }
        None => {
            let mut out = stdout().lock();
            if out.is_terminal() {
                write_highlighted(&report, &mut out)?;
            } else {
                write_standard_output(&report, &mut out)?;
            }
        }
    }

    if let Some(path) = &output_args.tbl_results_path {
        let mut writer = path.open(output_args.allow_overwrite)?;
        write_tabular_output(&report, &mut TableFormat::all_fields()?, &mut writer)?;
        writer.flush()?;
    }

    if let Some(path) = &output_args.matrix_dump_path {
        let mut writer = path.open(output_args.allow_overwrite)?;
        engine.matrix().dump(&mut writer)?;
        writer.flush()?;
    }

    Ok(())
}

/// Write the report with its score line highlighted.
fn write_highlighted(report: &Report, out: &mut impl Write) -> anyhow::Result<()> {
    for line in report.to_string().lines() {
        if line.starts_with(SCORE_HEADER) {
            writeln!(out, "{}", line.bold().green())?;
        } else {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{CommonArgs, OutputArgs, ScoreArgs};
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("multialign-{}-{name}", std::process::id()))
    }

    fn write_fasta(name: &str, contents: &str) -> anyhow::Result<PathBuf> {
        let path = temp_path(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    fn args(sequence_paths: Vec<PathBuf>, output: &PathBuf, table: &PathBuf) -> AlignArgs {
        AlignArgs {
            sequence_paths,
            score_args: ScoreArgs::default(),
            output_args: OutputArgs {
                ali_results_path: Some(output.clone()),
                tbl_results_path: Some(table.clone()),
                matrix_dump_path: None,
                allow_overwrite: true,
            },
            common_args: CommonArgs {
                wavefront: false,
                num_threads: 1,
            },
        }
    }

    #[test]
    fn test_too_few_sequences() -> anyhow::Result<()> {
        let output = temp_path("too-few.out");
        let table = temp_path("too-few.tbl");
        align(&args(vec![], &output, &table), Recurrence::Global)?;

        // nothing is computed or written
        assert!(!output.exists());
        assert!(!table.exists());
        Ok(())
    }

    #[test]
    fn test_global_report() -> anyhow::Result<()> {
        let a = write_fasta("global-a.fa", ">a\nGATTACA\n")?;
        let b = write_fasta("global-b.fa", ">b\nGATTACA\n")?;
        let output = temp_path("global.out");
        let table = temp_path("global.tbl");

        align(&args(vec![a.clone(), b.clone()], &output, &table), Recurrence::Global)?;

        let report = std::fs::read_to_string(&output)?;
        assert_eq!(
            report,
            "The score for this alignment is: 35\n\nGATTACA\nGATTACA\n"
        );
        let table_text = std::fs::read_to_string(&table)?;
        assert_eq!(table_text.lines().count(), 3 + 2);

        for path in [a, b, output, table] {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}
