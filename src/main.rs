use clap::Parser;
use staffbook::application::{self, ConfigService, HeadcountService, SeedOutcome};
use staffbook::cli::input::build_filter;
use staffbook::cli::output::{
    format_department_counts, format_role_counts, format_staff_detail, format_staff_table,
};
use staffbook::cli::{Cli, Commands};
use staffbook::error::{Result, StaffbookError};
use staffbook::infrastructure::{Config, Latency, Workspace};
use staffbook::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init {
            path,
            organization,
            currency,
            simulate_latency,
        } => {
            let defaults = Config::default();
            let config = Config {
                organization: organization.unwrap_or(defaults.organization),
                currency: currency
                    .map(|c| c.to_uppercase())
                    .unwrap_or(defaults.currency),
                latency: if simulate_latency {
                    Latency::simulated()
                } else {
                    Latency::NONE
                },
                ..defaults
            };

            let outcome = application::init(&path, &config)?;
            println!("Initialized staffbook roster at {}", path.display());
            if outcome == SeedOutcome::Seeded {
                println!("Seeded with example staff for {}", config.organization);
            }
            Ok(())
        }
        Commands::List {
            department,
            role,
            from,
            to,
            search,
            json,
        } => {
            let filter = build_filter(
                department.as_deref(),
                role.as_deref(),
                from.as_deref(),
                to.as_deref(),
                search.as_deref(),
            )?;
            let (config, store) = application::open_store(&Workspace::discover()?)?;
            let staff = store.list(&filter)?;

            if json {
                print_json(&staff)
            } else {
                println!("{}", format_staff_table(&staff, &config.currency).trim_end());
                Ok(())
            }
        }
        Commands::Show { id, json } => {
            let (config, store) = application::open_store(&Workspace::discover()?)?;
            let staff = store
                .get(&id)?
                .ok_or_else(|| StaffbookError::StaffNotFound(id.clone()))?;

            if json {
                print_json(&staff)
            } else {
                print!("{}", format_staff_detail(&staff, &config.currency));
                Ok(())
            }
        }
        Commands::Add(args) => {
            let new_staff = args.into_new_staff()?;
            let (_, store) = application::open_store(&Workspace::discover()?)?;
            let created = store.create(new_staff)?;

            println!("{} has been added to staff", created.full_name());
            println!("ID: {}", created.id);
            Ok(())
        }
        Commands::Update { id, fields } => {
            let patch = fields.into_patch()?;
            let (_, store) = application::open_store(&Workspace::discover()?)?;
            let updated = store.update(&id, patch)?;

            println!("{}'s information has been updated", updated.full_name());
            Ok(())
        }
        Commands::Delete { id } => {
            let (_, store) = application::open_store(&Workspace::discover()?)?;
            let removed = store
                .remove(&id)?
                .ok_or_else(|| StaffbookError::StaffNotFound(id.clone()))?;

            println!("{} has been removed", removed.full_name());
            Ok(())
        }
        Commands::Reset => {
            let (_, store) = application::open_store(&Workspace::discover()?)?;
            let count = store.reseed()?;
            println!("Roster reset to {} example staff", count);
            Ok(())
        }
        Commands::Departments => {
            let (_, store) = application::open_store(&Workspace::discover()?)?;
            let counts = HeadcountService::new(&store).departments()?;
            print!("{}", format_department_counts(&counts));
            Ok(())
        }
        Commands::Roles => {
            let (_, store) = application::open_store(&Workspace::discover()?)?;
            let counts = HeadcountService::new(&store).roles()?;
            print!("{}", format_role_counts(&counts));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(Workspace::discover()?);

            if list {
                let config = service.list()?;
                println!("organization = {}", config.organization);
                println!("currency = {}", config.currency);
                println!("storage_key = {}", config.storage_key);
                println!("latency.list = {}", config.latency.list_ms);
                println!("latency.get = {}", config.latency.get_ms);
                println!("latency.create = {}", config.latency.create_ms);
                println!("latency.update = {}", config.latency.update_ms);
                println!("latency.delete = {}", config.latency.delete_ms);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: staffbook config [--list | <key> [<value>]]");
                println!("Valid keys: organization, currency, storage_key, latency.<operation>");
                Ok(())
            }
        }
    }
}
