use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    pub fn enabled(self) -> bool {
        self == Toggle::On
    }
}

#[derive(Parser, Debug)]
#[command(name = "carlot", bin_name = "carlot", version)]
#[command(about = "Track a dealership's vehicles and rentals", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding Dealers.json and Session.json (default: ./Data)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Select the dealer to work with
    #[command(display_order = 1)]
    Login {
        /// Dealer name (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Create the dealer if it does not exist yet
        #[arg(long)]
        create: bool,

        /// Keep this dealer logged in across runs
        #[arg(long)]
        presence: bool,
    },

    /// End the current session
    #[command(display_order = 2)]
    Logout {
        /// Clear the session even when presence is enabled
        #[arg(long)]
        force: bool,
    },

    /// Enable or disable session presence
    #[command(display_order = 3)]
    Presence {
        #[arg(value_enum)]
        state: Toggle,
    },

    /// Show the logged-in dealer
    #[command(alias = "whoami", display_order = 4)]
    Status,

    /// Show all vehicles, split into available and rented
    #[command(alias = "ls", display_order = 10)]
    List,

    /// Register a vehicle
    #[command(alias = "n", display_order = 11)]
    Add {
        /// Plate in XXX-000 format
        plate: String,
        vin: String,
        brand: String,
        model: String,
        /// Four-digit year
        year: String,
        color: String,
    },

    /// Show a vehicle and its recent renters
    #[command(alias = "v", display_order = 12)]
    Show { plate: String },

    /// Rent a vehicle to a user
    #[command(display_order = 13)]
    Rent {
        plate: String,
        /// Numeric user id
        user_id: String,
    },

    /// Mark a rented vehicle as returned
    #[command(display_order = 14)]
    Return { plate: String },

    /// Change a vehicle's details
    #[command(alias = "e", display_order = 15)]
    Update {
        plate: String,

        /// New plate
        #[arg(long = "plate", value_name = "PLATE")]
        new_plate: Option<String>,

        #[arg(long)]
        brand: Option<String>,

        #[arg(long)]
        model: Option<String>,

        #[arg(long)]
        year: Option<String>,

        #[arg(long)]
        color: Option<String>,
    },

    /// Remove a vehicle
    #[command(alias = "rm", display_order = 16)]
    Remove { plate: String },

    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (e.g., history-limit)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the data directory and empty documents
    #[command(display_order = 31)]
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn login_joins_name_words() {
        let cli = Cli::parse_from(["carlot", "login", "Acme", "Motors", "--create"]);
        match cli.command {
            Some(Commands::Login { name, create, presence }) => {
                assert_eq!(name.join(" "), "Acme Motors");
                assert!(create);
                assert!(!presence);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn update_takes_optional_fields() {
        let cli = Cli::parse_from(["carlot", "update", "abc-123", "--plate", "abc-124"]);
        match cli.command {
            Some(Commands::Update {
                plate,
                new_plate,
                brand,
                ..
            }) => {
                assert_eq!(plate, "abc-123");
                assert_eq!(new_plate.as_deref(), Some("abc-124"));
                assert!(brand.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn presence_accepts_on_off() {
        let cli = Cli::parse_from(["carlot", "presence", "on"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Presence { state: Toggle::On })
        ));
        assert!(Cli::try_parse_from(["carlot", "presence", "maybe"]).is_err());
    }
}
