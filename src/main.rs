use clap::Parser;
use jobtrack::cli::{Args, Command};
use jobtrack::commands;
use jobtrack::config::AppConfig;
use jobtrack::context::AppContext;
use jobtrack::NewApplication;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = AppConfig::locate(args.config.as_deref())?;
    let mut ctx = AppContext::open(&config)?;
    let store = &mut ctx.store;
    let mut out = std::io::stdout().lock();

    match args.command {
        Command::Add {
            company,
            role,
            status,
            notes,
        } => {
            let new_application = NewApplication::new(company, role.unwrap_or_default())
                .with_status(status)
                .with_notes(notes);
            commands::add_application(store, new_application, &mut out)?;
        }
        Command::List { statuses } => {
            commands::list_applications(store, &statuses, &mut out)?;
        }
        Command::Delete { labels, ids } => {
            commands::delete_applications(store, &labels, &ids, &mut out)?;
        }
        Command::Import { file_path } => {
            commands::import_applications(store, &file_path, &mut out)?;
        }
        Command::Export { output } => {
            commands::export_applications(store, output.as_deref(), &mut out)?;
        }
        Command::Statuses => {
            commands::print_statuses(&mut out)?;
        }
    };

    Ok(())
}
