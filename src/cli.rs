use clap::{Parser, Subcommand};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "EVENTHUB_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "EVENTHUB_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long, value_name = "ROLE", help = "user or organizer")]
        role: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Upcoming events you are not registered for
    Events {
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Events you are registered for
    MyEvents,
    /// Available categories
    Categories,
    /// Details of a single event
    Show {
        id: i64,
    },
    /// Register for an event
    Register {
        id: i64,
    },
    /// Cancel a registration
    Unregister {
        id: i64,
    },
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Browse and register for events",
    long_about = "Command line client for the EventHub events API.\n\nEnvironment:\n  EVENTHUB_API__BASE_URL        API base URL\n  EVENTHUB_SESSION__TOKEN_PATH  Where the login token is stored\n  EVENTHUB_LOGGING__LEVEL       trace|debug|info|warn|error\n"
)]
pub struct Cli {
    #[arg(long, global = true, value_name = "PATH", help = "Configuration file (defaults to ./config.toml if present)")]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Log at debug level")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Print raw JSON instead of text")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["eventhub", "events", "--verbose", "--config", "alt.toml", "--json"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.json);
        assert_eq!(cli.config.as_deref(), Some("alt.toml"));
        assert!(matches!(cli.command, Command::Events { category: None }));
    }

    #[test]
    fn test_global_flags_before_subcommand() {
        let cli = Cli::try_parse_from(["eventhub", "-v", "--config", "alt.toml", "show", "7"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config.as_deref(), Some("alt.toml"));
        assert!(matches!(cli.command, Command::Show { id: 7 }));
    }
}
