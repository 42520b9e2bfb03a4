use std::{io::Write, path::PathBuf};

use clap::{ArgGroup, Parser};
use tracing::info;

use crate::{
    commands::files::{read_identifiers, render_records, write_output},
    core::{
        errors::{AppError, AppResult},
        types::EntityKind,
    },
    retriever::pipeline::Pipeline,
};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "pokedex",
    about = "Look up pokemon, abilities and moves in the online catalog",
    group(ArgGroup::new("input").required(true).args(["inputfile", "inputdata"]))
)]
pub struct QueryArgs {
    /// What to look up: pokemon, ability or move.
    pub query: EntityKind,

    /// Text file with one name or id per line.
    #[arg(long)]
    pub inputfile: Option<PathBuf>,

    /// A single name or id.
    #[arg(long)]
    pub inputdata: Option<String>,

    /// Follow stat, ability and move references one level deep.
    #[arg(long)]
    pub expanded: bool,

    /// Write the results to this file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Emit JSON instead of the text report.
    #[arg(long)]
    pub json: bool,
}

impl QueryArgs {
    fn identifiers(&self) -> AppResult<Vec<String>> {
        match (&self.inputfile, &self.inputdata) {
            (Some(path), _) => read_identifiers(path),
            (None, Some(data)) => Ok(vec![data.clone()]),
            (None, None) => Err(AppError::InvalidInput(
                "missing argument after --inputdata or --inputfile".to_string(),
            )),
        }
    }
}

/// Runs one query end to end and returns how many records were produced.
pub async fn handle_query<W: Write>(
    pipeline: &Pipeline,
    args: &QueryArgs,
    stdout: &mut W,
) -> AppResult<usize> {
    let identifiers = args.identifiers()?;
    let records = pipeline.run(args.query, &identifiers, args.expanded).await?;

    let rendered = if args.json {
        let mut json = serde_json::to_string_pretty(&records)
            .map_err(|err| AppError::Io(err.to_string()))?;
        json.push('\n');
        json
    } else {
        render_records(&records)
    };

    match &args.output {
        Some(path) => {
            write_output(path, &rendered)?;
            info!(path = %path.display(), records = records.len(), "wrote results");
        }
        None => stdout.write_all(rendered.as_bytes())?,
    }
    Ok(records.len())
}
