use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "viewkit", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out a view and print the resulting geometry as JSON.
    Layout(LayoutArgs),
    /// Lay out and paint a view into a PNG.
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct ViewArgs {
    /// Input view JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 480)]
    height: u32,

    /// TTF/OTF file used to measure and draw text. Text is estimated (and not drawn) without it.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Directory image keys are resolved against (defaults to the input file's directory).
    #[arg(long)]
    assets: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    #[command(flatten)]
    view: ViewArgs,

    /// Print the indented tree dump instead of JSON.
    #[arg(long)]
    dump: bool,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    view: ViewArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Resolve semantic colors for a dark appearance.
    #[arg(long)]
    dark: bool,

    /// Outline every node.
    #[arg(long)]
    debug_views: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn read_view_json(path: &Path) -> anyhow::Result<viewkit::View> {
    let f = File::open(path).with_context(|| format!("open view '{}'", path.display()))?;
    let view: viewkit::View =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse view JSON")?;
    view.validate()?;
    Ok(view)
}

fn make_host(args: &ViewArgs, view: &viewkit::View) -> anyhow::Result<viewkit::HostingContext> {
    let canvas = viewkit::Canvas::new(args.width, args.height)?;
    let assets_root = match &args.assets {
        Some(root) => root.clone(),
        None => args
            .in_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf(),
    };
    let assets = viewkit::AssetStore::prepare(view, assets_root)?;
    let text = match &args.font {
        Some(path) => viewkit::TextEngine::Parley(Box::new(
            viewkit::ParleyTextEngine::from_path(path)
                .with_context(|| format!("load font '{}'", path.display()))?,
        )),
        None => viewkit::TextEngine::default(),
    };

    Ok(viewkit::HostingContext::new(canvas)
        .with_config(viewkit::LayoutConfig::from_env())
        .with_assets(assets)
        .with_text_engine(text))
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let view = read_view_json(&args.view.in_path)?;
    let mut host = make_host(&args.view, &view)?;
    let tree = host.layout(&view)?;

    if args.dump {
        print!("{tree}");
    } else {
        let snapshot = viewkit::LayoutSnapshot::capture(&tree);
        println!("{}", snapshot.to_json_string_pretty()?);
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let view = read_view_json(&args.view.in_path)?;
    let scheme = if args.dark {
        viewkit::ColorScheme::Dark
    } else {
        viewkit::ColorScheme::Light
    };
    let background = match scheme {
        viewkit::ColorScheme::Light => viewkit::Color::White,
        viewkit::ColorScheme::Dark => viewkit::Color::Black,
    }
    .resolve(scheme);
    let settings = viewkit::RenderSettings::default()
        .with_clear_rgba(Some([background.r, background.g, background.b, 255]))
        .with_debug_views(args.debug_views)
        .with_color_scheme(scheme);

    let mut host = make_host(&args.view, &view)?.with_settings(settings);
    let frame = host.render(&view)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
