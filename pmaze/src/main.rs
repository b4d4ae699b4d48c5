use std::{io::Write as _, path::PathBuf, process::ExitCode};

use clap::Parser;
use pmaze::{
    check::check_maze,
    error::AppError,
    logging,
    renderer::Format,
    settings::Settings,
    viewport,
};
use pmaze_core::Generator;

#[derive(Parser, Debug)]
#[clap(version, about, name = "pmaze")]
struct Args {
    #[clap(short, long, help = "Number of rows, at least 5")]
    rows: Option<usize>,
    #[clap(short, long, help = "Number of columns, at least 5")]
    columns: Option<usize>,
    #[clap(short, long, help = "Seed for a reproducible maze")]
    seed: Option<u64>,
    #[clap(long, help = "Pick dimensions for a viewport this many pixels wide")]
    viewport_width: Option<u32>,
    #[clap(short, long, value_enum, help = "Output format")]
    format: Option<Format>,
    #[clap(long, help = "Settings file to use instead of the default one")]
    settings: Option<PathBuf>,
    #[clap(long, action, help = "Show settings path and quit")]
    show_config_path: bool,
    #[clap(long, action, help = "Verify the generated maze before printing it")]
    check: bool,
    #[clap(short, long, action = clap::ArgAction::Count, help = "More logging, repeatable")]
    verbose: u8,
}

fn run(args: Args) -> Result<(), AppError> {
    let settings_path = args.settings.clone().or_else(Settings::default_path);

    if args.show_config_path {
        match &settings_path {
            Some(path) => println!("{}", path.display()),
            None => println!("no settings directory on this platform"),
        }
        return Ok(());
    }

    let settings = match &settings_path {
        Some(path) => Settings::load(path)?,
        None => Settings::builtin()?,
    };

    let viewport_width = args
        .viewport_width
        .or_else(|| viewport::terminal_width(settings.char_width))
        .unwrap_or(viewport::FALLBACK_WIDTH);
    let config = settings.maze_config(args.rows, args.columns, viewport_width);
    log::info!("maze {}x{}", config.rows, config.columns);

    let (maze, seed) = Generator::default().generate_seeded(&config, args.seed.or(settings.seed))?;
    log::info!("seed {}", seed);

    if args.check {
        check_maze(&maze)?;
    }

    let output = args
        .format
        .unwrap_or(settings.format)
        .renderer(settings.cell_size)
        .render(&maze)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    better_panic::install();
    logging::init(logging::level_from_verbosity(args.verbose));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("pmaze: {}", err);
            ExitCode::FAILURE
        }
    }
}
