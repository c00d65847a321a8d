//! EventHub command line client
//!
//! Main application entry point

mod cli;

use anyhow::Context;
use chrono::Utc;
use serde::Serialize;
use tracing::{info, error};

use EventHub::{
    config::Settings,
    models::{Category, Event, User, UserRole},
    services::ServiceFactory,
    state::EventListProvider,
    utils::{helpers, logging},
    EventHubError,
};

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = cli::parse();

    // Load configuration
    let mut settings = match &cli.config {
        Some(path) => Settings::from_file(path).with_context(|| format!("failed to load {}", path))?,
        None => Settings::new().context("failed to load configuration")?,
    };
    if cli.verbose {
        settings.logging.level = "debug".to_string();
    }
    settings.validate()?;

    // Initialize logging; the guard flushes the log file on exit
    let log_guard = logging::init_logging(&settings.logging)?;
    info!("Starting {}", EventHub::info());

    let services = ServiceFactory::new(&settings)?;

    if let Err(e) = run(cli, &settings, services).await {
        error!(error = %e, severity = %e.severity(), "Command failed");
        eprintln!("error: {}", e.user_message());
        drop(log_guard);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli, settings: &Settings, services: ServiceFactory) -> Result<(), EventHubError> {
    let json = cli.json;

    match cli.command {
        Command::Login { email, password } => {
            let user = services.auth_service.login(&email, &password).await?;
            println!("Logged in as {} <{}>", user.name, user.email);
        }
        Command::Signup { name, email, password, role } => {
            let role = role.map(|r| r.parse::<UserRole>().unwrap_or_default());
            let outcome = services.auth_service.signup(&name, &email, &password, role).await?;
            if outcome.logged_in {
                println!("Account created, you are now logged in");
            } else {
                println!("Account created, confirm your email and then log in");
            }
        }
        Command::Logout => {
            services.auth_service.logout().await?;
            println!("Logged out");
        }
        Command::Whoami => {
            let user = services.auth_service.current_user().await?;
            emit(json, &user, print_user)?;
        }
        Command::Events { category } => {
            let mut provider = EventListProvider::new(services, settings.listing.clone());
            provider.fetch_registered_events().await?;
            provider.fetch_events(category.as_deref()).await?;
            emit(json, provider.events(), print_events)?;
        }
        Command::MyEvents => {
            let mut provider = EventListProvider::new(services, settings.listing.clone());
            provider.fetch_registered_events().await?;
            emit(json, provider.registered_events(), print_events)?;
        }
        Command::Categories => {
            let mut provider = EventListProvider::new(services, settings.listing.clone());
            provider.fetch_categories().await?;
            emit(json, provider.categories(), print_categories)?;
        }
        Command::Show { id } => {
            let token = services.auth_service.token().await?;
            let event = services.event_service.event(&token, id).await?;
            emit(json, &event, print_event_details)?;
        }
        Command::Register { id } => {
            let mut provider = EventListProvider::new(services, settings.listing.clone());
            provider.register(id).await?;
            println!("Registered for event {} ({} registrations)", id, provider.registered_events().len());
        }
        Command::Unregister { id } => {
            let mut provider = EventListProvider::new(services, settings.listing.clone());
            provider.unregister(id).await?;
            println!("Unregistered from event {}", id);
        }
    }

    Ok(())
}

fn emit<T: Serialize + ?Sized>(json: bool, value: &T, text: fn(&T)) -> Result<(), EventHubError> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        text(value);
    }
    Ok(())
}

fn print_events(events: &[Event]) {
    if events.is_empty() {
        println!("No events");
        return;
    }

    let now = Utc::now();
    for event in events {
        println!(
            "#{:<6} {:<40} {:<12} {:<20} {}",
            event.id,
            helpers::truncate_text(&event.title, 40),
            helpers::truncate_text(&event.category, 12),
            helpers::format_starts_in(event.start_time, now),
            helpers::format_price(event.price),
        );
    }
}

fn print_event_details(event: &Event) {
    println!("{} (#{})", event.title, event.id);
    println!("  Category: {}", event.category);
    println!("  Starts:   {}", helpers::format_timestamp(event.start_time));
    println!("  Ends:     {}", helpers::format_timestamp(event.end_time));
    if let Some(location) = &event.location {
        println!("  Where:    {}", location);
    }
    if let Some((lat, lon)) = event.coordinates() {
        println!("  Map:      {:.5}, {:.5}", lat, lon);
    }
    if let Some(capacity) = event.capacity {
        println!("  Capacity: {}", capacity);
    }
    println!("  Price:    {}", helpers::format_price(event.price));
    if let Some(description) = &event.description {
        println!();
        println!("{}", description);
    }
}

fn print_categories(categories: &[Category]) {
    for category in categories {
        println!("{}", category.name);
    }
}

fn print_user(user: &User) {
    println!("{} <{}>", user.name, user.email);
    println!("  Role:      {}", user.role);
    println!("  Confirmed: {}", if user.is_confirmed { "yes" } else { "no" });
}
