use std::path::PathBuf;

use anyhow::Context;
use dotenv::dotenv;
use structopt::StructOpt;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tsp_plot::{
    plot::{plot_edges, read_and_plot_tour, Canvas, LineStyle, SvgCanvas},
    tsplib::{edge_list::read_edge_list_file, point_reader::read_coordinates_file},
};

/// Overlays a set of short edges and a reference tour of a TSP instance and
/// prints the total length of the short edges.
#[derive(StructOpt)]
struct Opts {
    /// TSPLIB instance file (NODE_COORD_SECTION)
    #[structopt(short, long, env = "TSP_INSTANCE", parse(from_os_str))]
    instance: PathBuf,

    /// Zero-indexed edge list, one `i j` pair per line
    #[structopt(
        short = "e",
        long,
        env = "TSP_SHORT_EDGES",
        default_value = "output/short_edges.txt",
        parse(from_os_str)
    )]
    short_edges: PathBuf,

    /// TSPLIB tour file (TOUR_SECTION)
    #[structopt(short, long, env = "TSP_OPTIMAL_TOUR", parse(from_os_str))]
    tour: PathBuf,

    /// SVG file the figure is written to
    #[structopt(
        short,
        long,
        env = "TSP_PLOT_OUTPUT",
        default_value = "short_edges.svg",
        parse(from_os_str)
    )]
    output: PathBuf,

    #[structopt(long, default_value = "r:x")]
    edge_style: LineStyle,

    #[structopt(long, default_value = ":k")]
    tour_style: LineStyle,
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let opts = Opts::from_args();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tsp_plot=info,plot_short=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!(
        "Edge style {}, tour style {}",
        opts.edge_style, opts.tour_style
    );

    let coordinates = read_coordinates_file(&opts.instance)
        .with_context(|| format!("reading point set {}", opts.instance.display()))?;
    let short_edges = read_edge_list_file(&opts.short_edges)
        .with_context(|| format!("reading edge list {}", opts.short_edges.display()))?;

    let mut canvas = SvgCanvas::new();

    plot_edges(
        &coordinates,
        &short_edges,
        &opts.edge_style,
        &mut canvas,
        std::io::stdout().lock(),
    )
    .with_context(|| format!("plotting edges of {}", opts.short_edges.display()))?;

    read_and_plot_tour(&coordinates, &opts.tour, &opts.tour_style, &mut canvas)
        .with_context(|| format!("plotting tour {}", opts.tour.display()))?;

    canvas.set_equal_aspect(true);
    canvas
        .save(&opts.output)
        .with_context(|| format!("writing figure {}", opts.output.display()))?;

    info!("Done");
    Ok(())
}
