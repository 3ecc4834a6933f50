use std::{
    path::PathBuf,
    process::{ExitCode, Stdio},
    time::Duration,
};

use ada_bridge::{
    BridgeSettings, DocumentRegistry, JsonRpcChannel, ReferenceElement, ReferenceResolver, Vfs, offset_to_position,
    vfs::normalized_path,
};
use anyhow::{Context, anyhow, bail};
use clap::Parser;
use tokio::process::Command;
use tower_lsp::lsp_types::Url;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "ada-bridge", version, about)]
struct Args {
    #[arg(long, short)]
    verbose: bool,

    #[arg(long)]
    log_file: Option<PathBuf>,

    /// TOML settings file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Workspace root definitions may point into (repeatable).
    #[arg(long = "root")]
    roots: Vec<PathBuf>,

    /// Print whether the identifier is a declaration instead of its definition.
    #[arg(long)]
    declaration: bool,

    /// Ada source file containing the identifier.
    file: PathBuf,

    /// Byte offset of the identifier in FILE.
    offset: usize,

    /// Analysis service command line, after `--`.
    #[arg(last = true, required = true)]
    server: Vec<String>,
}

fn init_logging(
    args: &Args,
    settings: &BridgeSettings,
) {
    let directive = if args.verbose {
        "ada_bridge=debug".to_string()
    } else {
        settings.logging.level.filter_directive()
    };

    let file_layer = args.log_file.as_ref().map(|log_path| {
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path.file_name().unwrap_or(std::ffi::OsStr::new("ada-bridge.log")),
        );
        fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_target(false)
            .with_filter(EnvFilter::new(&directive))
    });

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_filter(EnvFilter::new(&directive));

    tracing_subscriber::registry().with(file_layer).with(stderr_layer).init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let settings = match args.config.as_deref().map(BridgeSettings::load_file).transpose() {
        Ok(settings) => settings.unwrap_or_default(),
        Err(error) => {
            eprintln!("ada-bridge: {error}");
            return ExitCode::FAILURE;
        },
    };
    init_logging(&args, &settings);

    match run(args, settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error:#}");
            ExitCode::FAILURE
        },
    }
}

async fn run(
    args: Args,
    settings: BridgeSettings,
) -> anyhow::Result<()> {
    let mut roots = settings.workspace.root_paths();
    roots.extend(args.roots.iter().cloned());
    let vfs = Vfs::new();
    vfs.set_roots(roots.clone());

    let path = normalized_path(&args.file);
    let text = std::fs::read_to_string(&path).with_context(|| format!("cannot read {}", path.display()))?;
    let uri = Url::from_file_path(&path).map_err(|()| anyhow!("{} is not an absolute path", path.display()))?;
    let file = vfs.open(uri, text, 1);
    let tree = vfs.tree(&file).with_context(|| format!("no syntax tree for {file}"))?;
    let Some(reference) = ReferenceElement::at(&tree, &file, args.offset) else {
        bail!("no identifier at offset {} in {}", args.offset, path.display());
    };
    debug!("reference `{}` at {:?}", reference.text(), reference.text_range());

    let (program, program_args) = args.server.split_first().context("missing analysis service command")?;
    let mut child = Command::new(program)
        .args(program_args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .kill_on_drop(true)
        .spawn()
        .with_context(|| format!("cannot start {program}"))?;
    let stdin = child.stdin.take().context("analysis service stdin unavailable")?;
    let stdout = child.stdout.take().context("analysis service stdout unavailable")?;
    info!("Started analysis service `{program}`");

    let channel = JsonRpcChannel::spawn(stdout, stdin);
    let root_uri = roots.first().map(|root| normalized_path(root)).or_else(|| path.parent().map(PathBuf::from));
    channel
        .initialize(root_uri.and_then(|root| Url::from_directory_path(root).ok()))
        .await
        .context("initialize failed")?;
    channel.initialized().await?;
    let document = vfs.document(&file).with_context(|| format!("no document for {file}"))?;
    channel.did_open(&document, &settings.service.language_id).await?;

    let resolver = ReferenceResolver::new(&channel, &vfs).with_settings(&settings.service);
    if args.declaration {
        let is_declaration = resolver.is_declaration(&reference).await;
        println!("{}: declaration: {is_declaration}", reference.text());
    } else {
        match resolver.resolve(&reference).await {
            Some(element) => {
                let position = vfs
                    .document(element.file())
                    .and_then(|target| offset_to_position(&target, element.start_offset()))
                    .unwrap_or_default();
                println!(
                    "{}:{}:{}: {}",
                    element.file(),
                    position.line + 1,
                    position.character + 1,
                    element.referent().text()
                );
            },
            None => println!("no definition found"),
        }
    }

    if let Err(error) = channel.shutdown().await {
        warn!("analysis service shutdown failed: {error}");
    }
    drop(channel);
    if tokio::time::timeout(Duration::from_secs(2), child.wait()).await.is_err() {
        debug!("analysis service did not exit, killing it");
    }
    info!("Analysis service stopped");
    Ok(())
}
