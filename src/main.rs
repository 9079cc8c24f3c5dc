use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use flowmaid::document::{DEFAULT_THEME, DiagramKeyword, DocumentOptions, HeaderStyle, Orientation, ThemeQuote};
use flowmaid::error::{ErrorCode, report};
use flowmaid::export::{self, ExportError, ExportFormat, ExportInput};
use flowmaid::generate::{DEFAULT_SYSTEM_PROMPT, DEFAULT_TEMPERATURE, GenerateError, GenerationRequest, Generator};
use flowmaid::llm::{LlmChat, LlmClient};
use flowmaid::sanitize::sanitize_bytes;
use flowmaid::session::Session;
use flowmaid::store::WorkflowStore;
use flowmaid::templates::{self, TEMPLATES};
use tracing::info;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("unknown template '{0}'; run `flowmaid templates` to list them")]
    UnknownTemplate(String),
    #[error("no workflow description; pass --description, --template, or pipe text on stdin")]
    MissingDescription,
    #[error("read input failed: {0}")]
    Input(#[from] io::Error),
}

impl ErrorCode for CliError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Generate(e) => e.error_code(),
            Self::Export(e) => e.error_code(),
            Self::UnknownTemplate(_) => "E_UNKNOWN_TEMPLATE",
            Self::MissingDescription => "E_EMPTY_DESCRIPTION",
            Self::Input(_) => "E_INPUT",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Generate(e) if e.retryable())
    }
}

#[derive(Parser, Debug)]
#[command(name = "flowmaid", about = "Turn workflow descriptions into Mermaid diagrams")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a diagram document from a workflow description
    Generate(GenerateArgs),
    /// Clean raw model output into a diagram body
    Sanitize {
        #[arg(long, default_value = "-", help = "Input file path, or - for stdin")]
        input: String,
    },
    /// List built-in workflow templates
    Templates,
    /// Generate interactively and keep a saved-workflow history
    Session(DiagramArgs),
}

#[derive(Args, Debug)]
struct DiagramArgs {
    #[arg(long, env = "FLOWMAID_ORIENTATION", value_enum, ignore_case = true, default_value_t = Orientation::Tb)]
    orientation: Orientation,

    #[arg(long, env = "FLOWMAID_THEME", default_value = DEFAULT_THEME, help = "default, forest, dark, neutral, or any theme name")]
    theme: String,

    #[arg(long, env = "FLOWMAID_TEMPERATURE", default_value_t = DEFAULT_TEMPERATURE, help = "Sampling temperature in [0, 1]")]
    temperature: f32,

    #[arg(long, env = "FLOWMAID_MODEL", help = "Model identifier; defaults to LLM_MODEL or the provider default")]
    model: Option<String>,

    #[arg(long, env = "FLOWMAID_SYSTEM_PROMPT", default_value = DEFAULT_SYSTEM_PROMPT, hide_default_value = true)]
    system_prompt: String,

    #[arg(long, help = "Write a `flowchart` opener instead of `graph`")]
    flowchart: bool,

    #[arg(long, help = "Quote the theme name with ' instead of \"")]
    single_quote_theme: bool,
}

impl DiagramArgs {
    fn document_options(&self) -> DocumentOptions {
        DocumentOptions {
            theme: self.theme.clone(),
            orientation: self.orientation,
            style: HeaderStyle {
                keyword: if self.flowchart { DiagramKeyword::Flowchart } else { DiagramKeyword::Graph },
                quote: if self.single_quote_theme { ThemeQuote::Single } else { ThemeQuote::Double },
            },
        }
    }
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[arg(long, short, conflicts_with = "template")]
    description: Option<String>,

    #[arg(long, short, help = "Template slug or title (see `flowmaid templates`)")]
    template: Option<String>,

    #[command(flatten)]
    diagram: DiagramArgs,

    #[arg(long, help = "Print the unsanitized model output instead of the document")]
    raw: bool,

    #[arg(long, value_enum)]
    export: Option<ExportFormat>,

    #[arg(long, default_value = "flowmaid_diagram", help = "Export path without extension")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", report(&err));
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Generate(args) => generate(args).await,
        Command::Sanitize { input } => {
            let raw = read_input(&input)?;
            println!("{}", sanitize_bytes(&raw));
            Ok(())
        }
        Command::Templates => {
            for template in TEMPLATES {
                println!("{:<20} {}", template.slug, template.description);
            }
            Ok(())
        }
        Command::Session(args) => session(args).await,
    }
}

async fn generate(args: GenerateArgs) -> Result<(), CliError> {
    let description = resolve_description(&args)?;
    let (generator, defaults) = connect(&args.diagram)?;
    let request = GenerationRequest { description, ..defaults };

    let generation = generator
        .generate(&request, &args.diagram.document_options())
        .await?;
    if args.raw {
        println!("{}", generation.raw);
    } else {
        println!("{}", generation.document);
    }

    if let Some(format) = args.export {
        let title = args
            .output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("flowmaid_diagram");
        let input = ExportInput { title, description: &request.description, document: generation.document.as_str() };
        export::write_export(&args.output, format, &input)?;
    }
    Ok(())
}

async fn session(args: DiagramArgs) -> Result<(), CliError> {
    let (generator, defaults) = connect(&args)?;
    let mut session = Session::new(&generator, defaults, args.document_options(), WorkflowStore::new());
    session.run(io::stdin().lock(), io::stdout().lock()).await?;
    Ok(())
}

/// Build the LLM-backed generator. Fails with a configuration error, before
/// any request, when no credential is available.
fn connect(args: &DiagramArgs) -> Result<(Generator, GenerationRequest), CliError> {
    let client = LlmClient::from_env().map_err(GenerateError::from)?;
    let model = args.model.clone().unwrap_or_else(|| client.model().to_string());
    info!(model = %model, "LLM client initialized");

    let max_tokens = client.max_tokens();
    let generator = Generator::new(Some(Arc::new(client) as Arc<dyn LlmChat>)).with_max_tokens(max_tokens);
    let defaults = GenerationRequest {
        description: String::new(),
        system_prompt: args.system_prompt.clone(),
        temperature: args.temperature,
        model,
    };
    Ok((generator, defaults))
}

fn resolve_description(args: &GenerateArgs) -> Result<String, CliError> {
    if let Some(description) = &args.description {
        return Ok(description.clone());
    }
    if let Some(name) = &args.template {
        return templates::find(name)
            .map(|t| t.description.to_string())
            .ok_or_else(|| CliError::UnknownTemplate(name.clone()));
    }
    if io::stdin().is_terminal() {
        return Err(CliError::MissingDescription);
    }
    let mut description = String::new();
    io::stdin().read_to_string(&mut description)?;
    if description.trim().is_empty() {
        return Err(CliError::MissingDescription);
    }
    Ok(description)
}

fn read_input(path: &str) -> Result<Vec<u8>, CliError> {
    if path == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read(path)?)
    }
}
