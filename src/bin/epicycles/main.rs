//! epicycles - Terminal Fourier epicycle viewer
//!
//! Run with: cargo run --bin epicycles -- --sinusoid 1,1,0 --sinusoid 3,0.3,0

mod app;
mod cli;
mod ui;

use app::Epicycles;
use clap::Parser;
use cli::Args;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = args.fourier_config()?;

    let mut epicycles = Epicycles::new().config(config).fps(args.fps);
    for spec in args.sinusoids() {
        epicycles = epicycles.sinusoid(spec);
    }

    if args.print {
        epicycles.print()
    } else {
        epicycles.run()
    }
}
