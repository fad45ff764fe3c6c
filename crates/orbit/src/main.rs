use clap::{Parser, Subcommand};
use orbit::control::{ControlCommand, SOCKET_PATH};
use orbit::geometry::{ITEM_SIZE, Layout, Metrics, ORBIT_RADIUS, Point};
use orbit::{Destination, NavConfig, NavItems};
use std::io::Write;
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "orbit", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Print where each navigation item sits around the center
    Layout {
        /// Item file (TOML with `home` and `items`); built-in items when omitted
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        #[arg(short = 'r', long, default_value_t = ORBIT_RADIUS)]
        radius: f64,

        #[arg(short = 's', long, default_value_t = ITEM_SIZE)]
        item_size: f64,
    },
    /// Validate an item file
    Check { path: PathBuf },
    /// Open or close the navigation ring of a running folio
    Toggle,
    /// Open the navigation ring
    Open,
    /// Close the navigation ring
    Close,
    /// Go back to the previous page
    Back,
    /// Show the page at a destination, e.g. `/projects`
    Goto { destination: String },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Layout {
            config,
            radius,
            item_size,
        } => print_layout(config, radius, item_size),
        Commands::Check { path } => {
            let items = load_items(&path)?;
            println!("{}: {} items, home '{}'", path.display(), items.len(), items.home().id);
            Ok(())
        }
        Commands::Toggle => send_command(ControlCommand::Toggle),
        Commands::Open => send_command(ControlCommand::Open),
        Commands::Close => send_command(ControlCommand::Close),
        Commands::Back => send_command(ControlCommand::Back),
        Commands::Goto { destination } => {
            if !destination.starts_with('/') {
                anyhow::bail!("Destination '{}' must start with '/'", destination);
            }
            send_command(ControlCommand::Goto(Destination::from(destination)))
        }
    }
}

fn load_items(path: &Path) -> anyhow::Result<NavItems> {
    // surfaces a missing file with its path before the config crate sees it
    fs_err::metadata(path)?;
    let nav: NavConfig = config::Config::builder()
        .add_source(config::File::from(path))
        .build()?
        .try_deserialize()?;
    Ok(nav.build()?)
}

fn print_layout(config: Option<PathBuf>, radius: f64, item_size: f64) -> anyhow::Result<()> {
    let items = match config {
        Some(path) => load_items(&path)?,
        None => NavItems::default(),
    };
    let metrics = Metrics {
        radius,
        item_size,
        ..Metrics::default()
    };
    let layout = Layout::new(Point::default(), &items, metrics);

    println!(
        "{:<12} {:>7} {:>9} {:>9} {:>9} {:>9}",
        "id", "angle", "x", "y", "left", "top"
    );
    for (item, (_, geometry)) in items.iter().zip(&layout.items) {
        println!(
            "{:<12} {:>7.1} {:>9.2} {:>9.2} {:>9.2} {:>9.2}",
            item.id.as_str(),
            item.angle,
            geometry.offset.x,
            geometry.offset.y,
            geometry.origin.x,
            geometry.origin.y
        );
    }
    Ok(())
}

fn send_command(cmd: ControlCommand) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to folio at {}: {}. Is folio running?",
            SOCKET_PATH,
            e
        )
    })?;

    writeln!(stream, "{}", cmd)?;
    log::debug!("Sent '{}'", cmd);
    Ok(())
}
