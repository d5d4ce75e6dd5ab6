//! Handlers shared by `products`, `categories` and `customers`.

use std::io::IsTerminal;

use catalogo_core::{Catalog, SliceHandle, Sliced};

use crate::cli::{GlobalOpts, OutputFormat, ResourceArgs, ResourceCommand};
use crate::error::CliError;
use crate::output;

use super::util::{self, Progress};

/// Run one operation on a slice and print the settled slice.
///
/// A backend that answers with `status: false` still prints the slice,
/// then exits with an error carrying the slice message.
pub async fn handle<R: Sliced>(
    catalog: &Catalog,
    slice: SliceHandle<'_, R>,
    args: ResourceArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    // Input errors surface before anything is dispatched.
    let request = Request::<R>::parse(args.command)?;
    let interactive = !global.quiet && std::io::stderr().is_terminal();

    let progress = Progress::start::<R>(catalog, interactive);
    let settled = request.run(&slice).await;
    progress.finish().await;

    let accepted = settled?;
    let state = slice.state();
    tracing::debug!(slice = R::KEY, status = %state.status, "operation settled");

    let format = global.output_format();
    if format == OutputFormat::Table && !global.quiet && !state.message.is_empty() {
        eprintln!("{}", state.message);
    }
    output::print_output(&output::render_slice(format, &state)?, global.quiet);

    if accepted {
        Ok(())
    } else {
        Err(CliError::Backend {
            message: state.message,
        })
    }
}

// ── Request ──────────────────────────────────────────────────────────

/// One slice operation with its record already parsed.
#[derive(Debug)]
enum Request<R> {
    List,
    Add(R),
    Update(R),
    Remove(R),
}

impl<R: Sliced> Request<R> {
    fn parse(command: ResourceCommand) -> Result<Self, CliError> {
        Ok(match command {
            ResourceCommand::List => Self::List,
            ResourceCommand::Add(input) => Self::Add(util::read_record(&input)?),
            ResourceCommand::Update(input) => Self::Update(util::read_record(&input)?),
            ResourceCommand::Remove(input) => Self::Remove(util::read_record(&input)?),
        })
    }

    /// Perform the operation, returning the backend's own success flag.
    async fn run(self, slice: &SliceHandle<'_, R>) -> Result<bool, CliError> {
        let status = match self {
            Self::List => slice.fetch_all().await.map(|p| p.status),
            Self::Add(record) => slice.add(record).await.map(|p| p.status),
            Self::Update(record) => slice.update(record).await.map(|p| p.status),
            Self::Remove(record) => slice.remove(record).await.map(|p| p.status),
        };
        status.map_err(CliError::from)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cli::RecordInput;
    use catalogo_core::{Code, Product};

    fn inline(json: &str) -> RecordInput {
        RecordInput {
            json: Some(json.into()),
            from_file: None,
        }
    }

    #[test]
    fn malformed_record_fails_before_running() {
        let err = Request::<Product>::parse(ResourceCommand::Add(inline("{not json"))).unwrap_err();
        assert!(matches!(err, CliError::Json(_)));
    }

    #[test]
    fn missing_record_file_fails_before_running() {
        let input = RecordInput {
            json: None,
            from_file: Some("/nonexistent/catalogo-record.json".into()),
        };
        let err = Request::<Product>::parse(ResourceCommand::Remove(input)).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn update_carries_the_parsed_record() {
        let request =
            Request::<Product>::parse(ResourceCommand::Update(inline(r#"{"codigo": 4}"#))).unwrap();
        assert!(matches!(request, Request::Update(ref p) if p.code == Code::Number(4)));
    }
}
