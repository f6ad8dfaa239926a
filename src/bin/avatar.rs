use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use avatar::config::{
    BinaryContentType, DEFAULT_HOST, DEFAULT_MAX_UPLOAD_BYTES, HOST_ENV_VAR, ServerConfig,
};

#[derive(Parser, Debug)]
#[command(name = "avatar", version, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (the default when no subcommand is given).
    Serve(ServeArgs),
    /// Composite a single local photo and write the avatar.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// Bind address, `host:port` or `:port`.
    #[arg(long, env = HOST_ENV_VAR, default_value = DEFAULT_HOST)]
    host: String,

    /// Directory holding hat.png and demo.png.
    #[arg(long, default_value = avatar::DEFAULT_IMAGES_DIR)]
    images_dir: PathBuf,

    /// Send `Content-Type: image/png` for binary responses instead of `image/jpeg`.
    #[arg(long)]
    png_content_type: bool,

    /// Largest accepted upload request, in bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    max_upload_bytes: usize,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input photo (.png, .jpg or .jpeg).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print the base64 JSON envelope to stdout.
    #[arg(long)]
    base64: bool,

    /// Directory holding hat.png.
    #[arg(long, default_value = avatar::DEFAULT_IMAGES_DIR)]
    images_dir: PathBuf,
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            host: args.host,
            images_dir: args.images_dir,
            binary_content_type: if args.png_content_type {
                BinaryContentType::Png
            } else {
                BinaryContentType::Jpeg
            },
            max_upload_bytes: args.max_upload_bytes,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    avatar::server::init_tracing();
    match cli.cmd {
        Some(Command::Serve(args)) => cmd_serve(args),
        Some(Command::Render(args)) => cmd_render(args),
        None => cmd_serve(cli.serve),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = ServerConfig::from(args);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("build tokio runtime")?;
    runtime.block_on(avatar::server::serve(config))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    if args.out.is_none() && !args.base64 {
        anyhow::bail!("nothing to do: pass --out and/or --base64");
    }

    let png = render_file(&args.in_path, &args.images_dir)?;

    if let Some(out) = &args.out {
        if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        std::fs::write(out, &png).with_context(|| format!("write png '{}'", out.display()))?;
        eprintln!("wrote {}", out.display());
    }

    if args.base64 {
        let envelope = avatar::Base64Envelope::from_png(&png);
        println!("{}", serde_json::to_string(&envelope)?);
    }
    Ok(())
}

fn render_file(in_path: &Path, images_dir: &Path) -> anyhow::Result<Vec<u8>> {
    let name = in_path.to_string_lossy();
    avatar::check_upload_name(&name)?;

    let bytes =
        std::fs::read(in_path).with_context(|| format!("read photo '{}'", in_path.display()))?;
    let background = avatar::normalize_to_png(&bytes)?;
    let assets = avatar::AssetStore::new(images_dir);
    let png = avatar::generate_avatar(&background, &assets)
        .with_context(|| format!("render avatar for '{}'", in_path.display()))?;
    Ok(png)
}
