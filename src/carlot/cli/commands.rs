use super::logging::init_cli_logger;
use super::print::{
    print_car_details, print_config, print_listing, print_messages, print_status,
};
use super::setup::{Cli, Commands, Toggle};
use carlot::api::{CarlotApi, CarlotPaths, ConfigAction, NewCar};
use carlot::config::resolve_data_dir;
use carlot::error::{CarlotError, Result};
use carlot::model::CarChanges;
use carlot::store::fs::FileStore;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

struct AppContext {
    api: CarlotApi<FileStore>,
}

impl AppContext {
    /// The dealer of the active session. Read fresh for every command.
    fn dealer_id(&self) -> Result<Uuid> {
        self.api
            .active_session()?
            .and_then(|session| session.dealer_id)
            .ok_or(CarlotError::NoActiveSession)
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Login {
            name,
            create,
            presence,
        }) => handle_login(&mut ctx, name.join(" "), create, presence),
        Some(Commands::Logout { force }) => handle_logout(&mut ctx, force),
        Some(Commands::Presence { state }) => handle_presence(&mut ctx, state),
        Some(Commands::Status) | None => handle_status(&ctx),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Add {
            plate,
            vin,
            brand,
            model,
            year,
            color,
        }) => handle_add(
            &mut ctx,
            NewCar {
                plate,
                vin,
                brand,
                model,
                year,
                color,
            },
        ),
        Some(Commands::Show { plate }) => handle_show(&ctx, plate),
        Some(Commands::Rent { plate, user_id }) => handle_rent(&mut ctx, plate, user_id),
        Some(Commands::Return { plate }) => handle_return(&mut ctx, plate),
        Some(Commands::Update {
            plate,
            new_plate,
            brand,
            model,
            year,
            color,
        }) => handle_update(
            &mut ctx,
            plate,
            CarChanges {
                plate: new_plate,
                brand,
                model,
                year,
                color,
            },
        ),
        Some(Commands::Remove { plate }) => handle_remove(&mut ctx, plate),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let data_dir = resolve_data_dir(cli.data_dir.clone(), &cwd);
    debug!(data_dir = %data_dir.display(), "using data directory");

    let store = FileStore::new(data_dir.clone());
    let paths = CarlotPaths { data_dir };
    Ok(AppContext {
        api: CarlotApi::new(store, paths),
    })
}

fn handle_login(ctx: &mut AppContext, name: String, create: bool, presence: bool) -> Result<()> {
    let dealer = match ctx.api.find_dealer_by_name(&name)? {
        Some(dealer) => dealer,
        None if create => {
            let result = ctx.api.create_dealer(&name)?;
            print_messages(&result.messages);
            result
                .dealer
                .ok_or_else(|| CarlotError::Api("Dealer creation returned no dealer".into()))?
        }
        None => {
            println!(
                "{}",
                format!("Dealer '{}' does not exist. Use --create to register it.", name)
                    .yellow()
            );
            return Err(CarlotError::DealerNotFound(name));
        }
    };

    let result = ctx.api.log_in(&dealer, presence)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_logout(ctx: &mut AppContext, force: bool) -> Result<()> {
    let presence = ctx
        .api
        .active_session()?
        .map(|s| s.presence)
        .unwrap_or(false);
    if presence && !force {
        println!(
            "{}",
            "Presence is enabled; the session was kept. Use --force to clear it.".yellow()
        );
        return Ok(());
    }

    let result = ctx.api.log_out()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_presence(ctx: &mut AppContext, state: Toggle) -> Result<()> {
    ctx.dealer_id()?;
    let result = ctx.api.set_presence(state.enabled())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_status(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.status()?;
    print_status(result.session.as_ref(), result.dealer.as_ref());
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let dealer_id = ctx.dealer_id()?;
    let result = ctx.api.list_vehicles(&dealer_id)?;
    if let Some(listing) = &result.listing {
        print_listing(listing);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, new_car: NewCar) -> Result<()> {
    let dealer_id = ctx.dealer_id()?;
    let result = ctx.api.add_vehicle(&dealer_id, new_car)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, plate: String) -> Result<()> {
    let dealer_id = ctx.dealer_id()?;
    let result = ctx.api.view_vehicle(&dealer_id, &plate)?;
    if let Some(car) = result.affected_cars.first() {
        print_car_details(car, &result.recent_users);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_rent(ctx: &mut AppContext, plate: String, user_id: String) -> Result<()> {
    let dealer_id = ctx.dealer_id()?;
    let result = ctx.api.rent_car(&dealer_id, &plate, &user_id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_return(ctx: &mut AppContext, plate: String) -> Result<()> {
    let dealer_id = ctx.dealer_id()?;
    let result = ctx.api.return_car(&dealer_id, &plate)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, plate: String, changes: CarChanges) -> Result<()> {
    let dealer_id = ctx.dealer_id()?;
    let result = ctx.api.update_vehicle(&dealer_id, &plate, changes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, plate: String) -> Result<()> {
    let dealer_id = ctx.dealer_id()?;
    let result = ctx.api.remove_vehicle(&plate, &dealer_id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}
