use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use pageforge::provider::gemini::DEFAULT_MODEL;
use pageforge::{
    ContentPayload, ContentProvider, GeminiProvider, GenerationSession, GenerationState,
    InMemoryCanvas, SceneGraphBuilder, ScriptedProvider, StatusSink, StatusUpdate, TokenResolver,
    TokenSchema, apply_content,
};

#[derive(Parser, Debug)]
#[command(name = "pageforge", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the landing page template on an in-memory canvas.
    Build(BuildArgs),
    /// Build, then overlay content from a payload JSON file.
    Apply(ApplyArgs),
    /// Full pipeline: prompt, provider, build, overlay.
    Generate(GenerateArgs),
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Token schema JSON; the embedded default schema when omitted.
    #[arg(long)]
    tokens: Option<PathBuf>,

    /// Theme to resolve color tokens against.
    #[arg(long, default_value = "dark")]
    theme: String,

    /// Write a JSON snapshot of the built tree to this path.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ApplyArgs {
    /// Content payload JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Token schema JSON; the embedded default schema when omitted.
    #[arg(long)]
    tokens: Option<PathBuf>,

    /// Theme to resolve color tokens against.
    #[arg(long, default_value = "dark")]
    theme: String,

    /// Write a JSON snapshot of the populated tree to this path.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Product description to generate copy for.
    prompt: String,

    /// Gemini API key; `$GEMINI_API_KEY` when omitted.
    #[arg(long)]
    api_key: Option<String>,

    /// Gemini model name.
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Skip the network and replay a reply from this file instead.
    #[arg(long)]
    reply_file: Option<PathBuf>,

    /// Token schema JSON; the embedded default schema when omitted.
    #[arg(long)]
    tokens: Option<PathBuf>,

    /// Theme to resolve color tokens against.
    #[arg(long, default_value = "dark")]
    theme: String,

    /// Write a JSON snapshot of the populated tree to this path.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Build(args) => cmd_build(args).await,
        Command::Apply(args) => cmd_apply(args).await,
        Command::Generate(args) => cmd_generate(args).await,
    }
}

fn load_resolver(tokens: Option<&Path>) -> anyhow::Result<TokenResolver> {
    match tokens {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("read token schema '{}'", path.display()))?;
            let schema = TokenSchema::from_json_str(&raw)
                .with_context(|| format!("parse token schema '{}'", path.display()))?;
            Ok(TokenResolver::new(schema)?)
        }
        None => Ok(TokenResolver::builtin()?),
    }
}

fn write_snapshot(
    canvas: &InMemoryCanvas,
    root: pageforge::NodeId,
    out: Option<&Path>,
) -> anyhow::Result<()> {
    let Some(out) = out else {
        return Ok(());
    };
    let snapshot = canvas.snapshot(root)?;
    let json = serde_json::to_string_pretty(&snapshot).with_context(|| "serialize snapshot")?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
    }
    fs::write(out, json).with_context(|| format!("write snapshot '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

async fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let resolver = load_resolver(args.tokens.as_deref())?;
    let mut canvas = InMemoryCanvas::new();

    let scene = SceneGraphBuilder::new(&mut canvas, &resolver, args.theme.as_str())
        .build()
        .await?;

    eprintln!(
        "built page: {} nodes, {} anchors, fingerprint {}",
        canvas.node_count(),
        scene.anchors.len(),
        scene.anchors.fingerprint()
    );
    write_snapshot(&canvas, scene.root, args.out.as_deref())
}

async fn cmd_apply(args: ApplyArgs) -> anyhow::Result<()> {
    let raw = fs::read_to_string(&args.in_path)
        .with_context(|| format!("read payload '{}'", args.in_path.display()))?;
    let payload: ContentPayload =
        serde_json::from_str(&raw).with_context(|| "parse payload JSON")?;

    let resolver = load_resolver(args.tokens.as_deref())?;
    let mut canvas = InMemoryCanvas::new();

    let scene = SceneGraphBuilder::new(&mut canvas, &resolver, args.theme.as_str())
        .build()
        .await?;
    let stats = apply_content(&mut canvas, scene.root, &payload).await?;

    eprintln!(
        "applied content: {} texts set, {} rows shown, {} rows hidden, {} anchors missed",
        stats.texts_set, stats.rows_shown, stats.rows_hidden, stats.anchors_missed
    );
    write_snapshot(&canvas, scene.root, args.out.as_deref())
}

async fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let resolver = load_resolver(args.tokens.as_deref())?;

    match &args.reply_file {
        Some(path) => {
            let reply = fs::read_to_string(path)
                .with_context(|| format!("read reply '{}'", path.display()))?;
            let provider = ScriptedProvider::single(reply);
            run_generate(&provider, &resolver, &args).await
        }
        None => {
            let api_key = match args.api_key.clone() {
                Some(key) => key,
                None => std::env::var("GEMINI_API_KEY").unwrap_or_default(),
            };
            let provider = GeminiProvider::with_model(api_key, &args.model);
            run_generate(&provider, &resolver, &args).await
        }
    }
}

async fn run_generate<P: ContentProvider>(
    provider: &P,
    resolver: &TokenResolver,
    args: &GenerateArgs,
) -> anyhow::Result<()> {
    let mut canvas = InMemoryCanvas::new();
    let mut session =
        GenerationSession::new(&mut canvas, provider, resolver, args.theme.as_str());
    let mut sink = EprintStatus;

    let report = session.run(&args.prompt, &mut sink).await;
    if report.state == GenerationState::Error {
        anyhow::bail!("{}", report.message);
    }

    if let Some(stats) = report.stats {
        eprintln!(
            "applied content: {} texts set, {} rows shown, {} rows hidden, {} anchors missed",
            stats.texts_set, stats.rows_shown, stats.rows_hidden, stats.anchors_missed
        );
    }
    if let Some(scene) = &report.scene {
        write_snapshot(&canvas, scene.root, args.out.as_deref())?;
    }
    Ok(())
}

struct EprintStatus;

impl StatusSink for EprintStatus {
    fn status(&mut self, update: &StatusUpdate) {
        eprintln!("[{}] {}", update.state, update.message);
    }
}
