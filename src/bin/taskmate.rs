use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, WriteLogger};
use std::io::{self, BufRead, Write};
use taskmate::cli::{self, Mode};
use taskmate::config::Config;
use taskmate::context::{AppContext, StandardContext};
use taskmate::session::Session;
use taskmate::storage::{LocalStorage, MemoryStorage, TaskStorage};
use taskmate::ui;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = match cli::parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("Try 'taskmate --help'.");
            std::process::exit(2);
        }
    };

    if args.mode == Mode::Help {
        cli::print_help("taskmate");
        return Ok(());
    }

    let ctx = StandardContext::new(args.root.clone());
    let cfg = Config::load_or_default(&ctx)?;
    init_logging(&ctx, &cfg);
    log::info!("Taskmate v{} starting", env!("CARGO_PKG_VERSION"));

    let mut local = LocalStorage::from_context(&ctx)?;
    log::info!("Task file: {:?}", local.path());

    let storage: Box<dyn TaskStorage> = if args.no_save {
        let seed = local
            .load()
            .with_context(|| format!("Failed to read tasks from {:?}", local.path()))?;
        Box::new(MemoryStorage::new(seed))
    } else {
        Box::new(local)
    };
    let mut session = Session::open(storage, cfg.autosave)
        .context("Failed to load saved tasks")?;

    match args.mode {
        Mode::List => println!("{}", ui::list(session.tasks())),
        Mode::Run(lines) => {
            for line in lines {
                let response = session.handle(&line);
                println!("{}", ui::frame(&response.text));
                if response.exit {
                    break;
                }
            }
        }
        Mode::Interactive => interactive(&mut session, &cfg)?,
        Mode::Help => {}
    }

    log::info!("Taskmate exiting");
    Ok(())
}

fn interactive<S: TaskStorage>(session: &mut Session<S>, cfg: &Config) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if cfg.show_welcome {
        writeln!(stdout, "{}", ui::frame(&ui::welcome(&cfg.user_name)))?;
    }

    let mut line = String::new();
    loop {
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF ends the session like "bye", minus the farewell.
            log::info!("Input closed");
            break;
        }
        let response = session.handle(&line);
        writeln!(stdout, "{}", ui::frame(&response.text))?;
        stdout.flush()?;
        if response.exit {
            break;
        }
    }
    Ok(())
}

fn init_logging(ctx: &dyn AppContext, cfg: &Config) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = ctx.open_log_file() {
        let _ = WriteLogger::init(cfg.log_level_filter(), log_config, log_file);
    }
}
