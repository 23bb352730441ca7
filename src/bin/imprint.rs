use std::path::PathBuf;

use clap::Parser;

use imprint::{FontSpec, OverlaySpec, RectSpec, StampParams};

#[derive(Parser, Debug)]
#[command(
    name = "imprint",
    version,
    about = "Overlay a rounded text plaque onto a raster image and write PNG"
)]
struct Cli {
    /// Input image path (any format the decoder understands).
    #[arg(long)]
    image: PathBuf,

    /// UTF-8 text file; one visual line per physical line.
    #[arg(long)]
    text: PathBuf,

    /// Output path. The file is always written as PNG, whatever the
    /// extension says.
    #[arg(long)]
    out: PathBuf,

    /// Plaque width as a percentage of the image width.
    #[arg(long = "width-pct")]
    width_pct: f64,

    /// Plaque height as a percentage of the image height.
    #[arg(long = "height-pct")]
    height_pct: f64,

    /// Horizontal center as a percentage of the image width. Accepted for
    /// compatibility; the plaque is always centered on the image midline.
    #[arg(long = "center-x-pct")]
    center_x_pct: f64,

    /// Vertical center as a percentage of the image height.
    #[arg(long = "center-y-pct")]
    center_y_pct: f64,

    /// Plaque fill color as three 0-255 channel values.
    #[arg(long = "rect-color", num_args = 3, required = true, value_names = ["R", "G", "B"])]
    rect_color: Vec<u8>,

    /// Plaque fill opacity (0 transparent, 255 opaque).
    #[arg(long)]
    opacity: u8,

    /// Font file for the plaque text. A missing or unreadable file falls
    /// back to a system font with a warning; omitting the flag goes straight
    /// to the system font.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Font size in pixels.
    #[arg(long = "font-size", default_value_t = FontSpec::DEFAULT_SIZE)]
    font_size: u32,

    /// Print resolved geometry and per-line placements as JSON (stderr).
    #[arg(long = "dump-layout")]
    dump_layout: bool,

    /// Enable debug-level log output.
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let params = StampParams {
        image_path: cli.image,
        text_path: cli.text,
        out_path: cli.out.clone(),
        spec: OverlaySpec {
            rect: RectSpec {
                width_pct: cli.width_pct,
                height_pct: cli.height_pct,
                center_x_pct: cli.center_x_pct,
                center_y_pct: cli.center_y_pct,
                color: [cli.rect_color[0], cli.rect_color[1], cli.rect_color[2]],
                opacity: cli.opacity,
            },
            font: FontSpec {
                source: cli.font,
                size_px: cli.font_size,
            },
        },
    };

    let outcome = imprint::stamp_to_png(&params)?;

    if cli.dump_layout {
        eprintln!("{}", serde_json::to_string_pretty(&outcome)?);
    }
    eprintln!("wrote {}", cli.out.display());
    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(level)
        .try_init();
}
