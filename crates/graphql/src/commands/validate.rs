use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_validation::file_reader;
use libgraphql_validation::parser::parse_executable_document_with_options;
use libgraphql_validation::parser::GraphQLParseError;
use libgraphql_validation::parser::ParserOptions;
use libgraphql_validation::schema::Schema;
use libgraphql_validation::schema::SchemaBuilder;
use libgraphql_validation::validation::specified_rules;
use libgraphql_validation::validation::validate_with_options;
use libgraphql_validation::validation::DuplicateFragmentPolicy;
use libgraphql_validation::validation::ValidationError;
use libgraphql_validation::validation::ValidationOptions;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum DuplicateFragmentsArg {
    First,
    Last,
}
impl std::convert::From<DuplicateFragmentsArg> for DuplicateFragmentPolicy {
    fn from(arg: DuplicateFragmentsArg) -> Self {
        match arg {
            DuplicateFragmentsArg::First => DuplicateFragmentPolicy::KeepFirst,
            DuplicateFragmentsArg::Last => DuplicateFragmentPolicy::KeepLast,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        help="Which definition fragment spreads resolve to when a document \
             defines the same fragment name more than once.",
        long,
        value_enum,
        default_value_t=DuplicateFragmentsArg::Last,
    )]
    duplicate_fragments: DuplicateFragmentsArg,

    #[arg(
        help="How to print validation errors.",
        long,
        value_enum,
        default_value_t=OutputFormat::Text,
    )]
    format: OutputFormat,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Reject variable definitions on fragments \
             (`fragment Foo($a: Int) on T`) as a parse error.",
        long,
    )]
    no_fragment_variables: bool,

    #[arg(
        help="Schema (SDL) file to validate documents against. May be repeated.",
        long,
        required=true,
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="Paths to one or more GraphQL documents or directories \
             containing GraphQL documents which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// Everything that went wrong with one document.
#[derive(Debug)]
enum FileProblem {
    Unreadable(String),
    Unparsable(GraphQLParseError),
    Invalid(Vec<ValidationError>),
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        log::debug!("Loading {} schema file(s)...", self.schema.len());
        let schema = match load_schema(&self.schema) {
            Ok(schema) => schema,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Errors loading schema: {e:#}",
                output_utils::RED_X,
            )),
        };

        let (file_paths, walk_errors) = self.find_document_paths();
        log::debug!(
            "Found {} GraphQL documents to be validated.",
            file_paths.len(),
        );

        let parser_options = ParserOptions::new()
            .allow_fragment_variables(!self.no_fragment_variables);
        let validation_options = ValidationOptions::new()
            .duplicate_fragment_policy(self.duplicate_fragments.into());
        let rules = specified_rules();

        let mut problems: Vec<(PathBuf, FileProblem)> = walk_errors.into_iter()
            .map(|(path, e)| (path, FileProblem::Unreadable(e)))
            .collect();
        let mut num_errors = problems.len();
        for path in &file_paths {
            log::trace!("Validating {path:#?}.");
            let source = match file_reader::read_content(path) {
                Ok(source) => source,
                Err(e) => {
                    num_errors += 1;
                    problems.push((path.to_owned(), FileProblem::Unreadable(e.to_string())));
                    continue
                },
            };
            let document = match parse_executable_document_with_options(
                &source,
                parser_options.to_owned(),
            ) {
                Ok(document) => document,
                Err(e) => {
                    num_errors += 1;
                    problems.push((path.to_owned(), FileProblem::Unparsable(e)));
                    continue
                },
            };
            let errors = validate_with_options(&schema, &document, &validation_options, &rules);
            if !errors.is_empty() {
                num_errors += errors.len();
                problems.push((path.to_owned(), FileProblem::Invalid(errors)));
            }
        }

        if problems.is_empty() {
            return CommandResult::stdout(format_args!(
                concat!(
                    "{} All GraphQL validated successfully:\n",
                    "  * Validated {} documents.",
                ),
                output_utils::GREEN_CHECK,
                file_paths.len(),
            ));
        }

        let report = match self.format {
            OutputFormat::Text => format_text_report(&problems),
            OutputFormat::Json => match format_json_report(&problems) {
                Ok(report) => report,
                Err(e) => return CommandResult::stderr(format_args!(
                    "{} Failed to serialize errors: {e}",
                    output_utils::RED_X,
                )),
            },
        };
        CommandResult::failure(Some(report), format_args!(
            "{} Found {num_errors} error(s) in {} of {} documents.",
            output_utils::RED_X,
            problems.len(),
            file_paths.len(),
        ))
    }
}

impl ValidateCmd {
    /// Finds all GraphQL documents at or under each path argument.
    fn find_document_paths(&self) -> (Vec<PathBuf>, Vec<(PathBuf, String)>) {
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut errors = vec![];
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let entry_path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {entry_path:#?}.");
                            continue
                        }
                        if let Some(ext) = entry_path.extension()
                            && graphql_file_exts.contains(ext.to_string_lossy().as_ref()) {
                            log::trace!("Found document at {entry_path:#?}.");
                            file_paths.push(entry_path.to_path_buf());
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push((path.to_owned(), e.to_string()));
                    },
                }
            }
        }

        // A lone file argument is validated even if its extension isn't one
        // of `--graphql-file-exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to validate {first_arg_path:#?} even though it \
                doesn't match any of the --graphql-file-exts ({}).",
                self.graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.to_owned());
        }

        (file_paths, errors)
    }
}

fn load_schema(paths: &[PathBuf]) -> anyhow::Result<Schema> {
    let schema = SchemaBuilder::new()
        .load_files(paths.to_vec())?
        .build()?;
    Ok(schema)
}

fn format_text_report(problems: &[(PathBuf, FileProblem)]) -> String {
    let mut lines = vec![];
    for (path, problem) in problems {
        let path = path.display();
        match problem {
            FileProblem::Unreadable(message) => lines.push(format!("{path}: {message}")),
            FileProblem::Unparsable(err) => lines.push(format!(
                "{path}:{}: {}",
                err.position(),
                err.message(),
            )),
            FileProblem::Invalid(errors) => {
                for error in errors {
                    match first_position(error) {
                        Some(position) => lines.push(format!("{path}:{position}: {error}")),
                        None => lines.push(format!("{path}: {error}")),
                    }
                }
            },
        }
    }
    lines.join("\n")
}

fn format_json_report(
    problems: &[(PathBuf, FileProblem)],
) -> serde_json::Result<String> {
    let mut entries = vec![];
    for (path, problem) in problems {
        match problem {
            FileProblem::Unreadable(message) => entries.push(serde_json::json!({
                "file": display_path(path),
                "message": message,
            })),
            FileProblem::Unparsable(err) => entries.push(serde_json::json!({
                "file": display_path(path),
                "message": err.message(),
                "line": err.position().line(),
                "column": err.position().column(),
            })),
            FileProblem::Invalid(errors) => {
                for error in errors {
                    entries.push(serde_json::json!({
                        "file": display_path(path),
                        "message": error.message(),
                        "rule": error.rule(),
                        "locations": error.locations(),
                    }));
                }
            },
        }
    }
    serde_json::to_string_pretty(&entries)
}

fn first_position(error: &ValidationError) -> Option<libgraphql_validation::SourcePosition> {
    error.locations().iter().find_map(|location| location.position)
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}
