use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use covid_trails::highlight::{Controller, SessionSurface};
use covid_trails::{Client, Config, DailyRecord, Populations, RegionColors, Session};
use covid_trails::{render, stats, storage};
use num_format::{Locale, ToFormattedString};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(
    name = "trails",
    version,
    about = "Render per-state testing vs. positivity trails over a region map"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch data and map, then write the page (and optionally exports, a snapshot, stats).
    Build(BuildArgs),
    /// Print the popup markup (label and both bar charts) for one region.
    Popup(PopupArgs),
    /// Feed a scripted sequence of hover/click events through the highlight controller.
    Replay(ReplayArgs),
}

#[derive(Args, Debug)]
struct DatasetArgs {
    /// Read the daily dataset from a local JSON file instead of fetching it.
    #[arg(long)]
    dataset_file: Option<PathBuf>,
    /// Dataset endpoint (overrides TRAILS_DATASET_URL).
    #[arg(long)]
    dataset_url: Option<String>,
}

#[derive(Args, Debug)]
struct BuildArgs {
    #[command(flatten)]
    dataset: DatasetArgs,
    /// Read the boundary map from a local SVG file instead of fetching it.
    #[arg(long)]
    map_file: Option<PathBuf>,
    /// Map endpoint (overrides TRAILS_MAP_URL).
    #[arg(long)]
    map_url: Option<String>,
    /// Render the page without a map.
    #[arg(long, default_value_t = false)]
    no_map: bool,
    /// JSON object of region code to six-digit hex color, merged over the defaults.
    #[arg(long)]
    colors: Option<PathBuf>,
    /// Where to write the HTML page.
    #[arg(long)]
    out: PathBuf,
    /// Export plotted points as CSV.
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Export the whole session as JSON.
    #[arg(long)]
    json: Option<PathBuf>,
    /// Create a snapshot of all trails at the given path (.svg or .png).
    #[arg(long)]
    plot: Option<PathBuf>,
    /// Width of the snapshot (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the snapshot (default 1000).
    #[arg(long, default_value_t = 1000)]
    height: u32,
    /// Print per-region statistics to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

#[derive(Args, Debug)]
struct PopupArgs {
    #[command(flatten)]
    dataset: DatasetArgs,
    /// Two-letter region code, e.g. NY.
    #[arg(short, long)]
    region: String,
}

#[derive(Args, Debug)]
struct ReplayArgs {
    /// Optional dataset so popups carry real bar charts.
    #[arg(long)]
    dataset_file: Option<PathBuf>,
    /// Comma-separated events: select:XX, deselect, wait:MS
    #[arg(short, long)]
    events: String,
    /// Fade-out delay in milliseconds (overrides TRAILS_FADE_MS).
    #[arg(long)]
    fade_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Select(String),
    Deselect,
    Wait(Duration),
}

fn parse_steps(s: &str) -> Result<Vec<Step>> {
    s.split([',', ';'])
        .map(str::trim)
        .filter(|x| !x.is_empty())
        .map(|tok| match tok.split_once(':') {
            Some(("select", r)) if !r.trim().is_empty() => Ok(Step::Select(r.trim().to_string())),
            Some(("wait", ms)) => ms
                .trim()
                .parse::<u64>()
                .map(|ms| Step::Wait(Duration::from_millis(ms)))
                .with_context(|| format!("invalid wait in {tok:?}")),
            None if tok == "deselect" => Ok(Step::Deselect),
            _ => bail!("unknown event {tok:?}, expected select:XX, deselect or wait:MS"),
        })
        .collect()
}

fn fmt_opt(v: Option<i64>) -> String {
    match v {
        Some(x) => x.to_formatted_string(&Locale::en),
        None => "NA".to_string(),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let cfg = Config::from_env();
    match cli.cmd {
        Command::Build(args) => cmd_build(args, cfg),
        Command::Popup(args) => cmd_popup(args, cfg),
        Command::Replay(args) => cmd_replay(args, cfg),
    }
}

fn load_records(args: &DatasetArgs, cfg: &Config) -> Result<Vec<DailyRecord>> {
    if let Some(path) = &args.dataset_file {
        return storage::load_records(path);
    }
    let mut cfg = cfg.clone();
    if let Some(url) = &args.dataset_url {
        cfg.dataset_url = url.clone();
    }
    Ok(Client::new(&cfg)?.fetch_daily()?)
}

fn cmd_build(args: BuildArgs, cfg: Config) -> Result<()> {
    let records = load_records(&args.dataset, &cfg)?;
    let session = Session::from_records(&records, &Populations::default());
    log::info!("session holds {} regions", session.len());

    let map = if args.no_map {
        None
    } else if let Some(path) = &args.map_file {
        Some(storage::load_map(path)?)
    } else {
        let mut cfg = cfg.clone();
        if let Some(url) = &args.map_url {
            cfg.map_url = url.clone();
        }
        Some(Client::new(&cfg)?.fetch_map()?)
    };

    let mut colors = RegionColors::for_regions(session.regions().map(|(r, _)| r));
    if let Some(path) = &args.colors {
        colors = colors.merge(RegionColors::load(path)?);
    }

    let page = render::render_page(&session, &colors, map.as_deref())?;
    storage::save_text(&page, &args.out)?;
    eprintln!("Wrote page for {} regions to {}", session.len(), args.out.display());

    if let Some(path) = &args.csv {
        storage::save_csv(&session, path)?;
        eprintln!("Saved points to {}", path.display());
    }
    if let Some(path) = &args.json {
        storage::save_json(&session, path)?;
        eprintln!("Saved session to {}", path.display());
    }
    if let Some(path) = &args.plot {
        render::plot_trails(&session, &colors, path, args.width, args.height)?;
        eprintln!("Wrote plot to {}", path.display());
    }

    if args.stats {
        for s in stats::region_summary(&session) {
            let latest = s
                .latest
                .map(|p| format!("({},{})", p.x, p.y))
                .unwrap_or_else(|| "NA".to_string());
            println!(
                "{}  days={} pos={} hsp={}  latest={}  peak_positive={} peak_dead={} tested={}",
                s.region,
                s.days,
                s.pos_points,
                s.hsp_points,
                latest,
                fmt_opt(s.peak_positive),
                fmt_opt(s.peak_dead),
                s.total_tested.to_formatted_string(&Locale::en)
            );
        }
    }

    Ok(())
}

fn cmd_popup(args: PopupArgs, cfg: Config) -> Result<()> {
    let records = load_records(&args.dataset, &cfg)?;
    let session = Session::from_records(&records, &Populations::default());
    let region = args.region.trim().to_ascii_uppercase();
    let Some(popup) = session.popup(&region) else {
        bail!("no data for region {region}");
    };
    println!("{}", popup.to_markup());
    Ok(())
}

fn cmd_replay(args: ReplayArgs, cfg: Config) -> Result<()> {
    let steps = parse_steps(&args.events)?;
    let session = match &args.dataset_file {
        Some(path) => Session::from_records(&storage::load_records(path)?, &Populations::default()),
        None => Session::default(),
    };
    let fade = args.fade_ms.map(Duration::from_millis).unwrap_or(cfg.fade_delay);
    let mut ctl = Controller::new(SessionSurface::new(&session), fade);

    // Simulated clock: waits advance it, and the fade fires when its deadline passes.
    let mut now = Instant::now();
    for step in steps {
        let effects = match &step {
            Step::Select(r) => ctl.select(r, now),
            Step::Deselect => ctl.deselect(now),
            Step::Wait(d) => {
                now += *d;
                ctl.tick(now)
            }
        };
        println!("{step:?} -> {:?} {effects:?}", ctl.state());
    }

    let surface = ctl.surface();
    println!(
        "final: highlighted={} showing={} popups_built={}",
        surface.highlighted.as_deref().unwrap_or("-"),
        surface.showing,
        surface.popup_builds
    );
    Ok(())
}
