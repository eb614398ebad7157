//! Command-line interface.

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::app::App;
use crate::config::{Config, Settings};
use crate::data::{Dataset, OfficeData};
use crate::error::AppError;
use crate::events::EventHandler;
use crate::export::{render_page, SortSpec};
use crate::session::{SessionStore, User, UserRole};
use crate::{logging, tui};

#[derive(Debug, Parser)]
#[command(name = "ledgerdesk", version, about = "Terminal dashboard for an accounting office")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the interactive table browser (default).
    Browse(BrowseArgs),
    /// Sign in with a demo account.
    Login {
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out and forget the saved session.
    Logout,
    /// Show the signed-in user.
    Whoami,
    /// Change the role of the signed-in user.
    SwitchRole {
        #[arg(value_enum)]
        role: UserRole,
    },
    /// Print one page of a dataset as plain text.
    Export(ExportArgs),
    /// Show the config file location, optionally writing the defaults.
    Config {
        /// Write a default config.toml if none exists.
        #[arg(long)]
        init: bool,
    },
}

#[derive(Debug, Default, Args)]
pub struct BrowseArgs {
    /// Dataset to open first.
    #[arg(long, value_enum)]
    pub dataset: Option<Dataset>,
    /// Rows per page.
    #[arg(long)]
    pub page_size: Option<usize>,
    /// Hide the search input.
    #[arg(long)]
    pub no_search: bool,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(value_enum)]
    pub dataset: Dataset,
    /// Case-insensitive search text.
    #[arg(long)]
    pub search: Option<String>,
    /// Sort column, as `key` or `key:desc`.
    #[arg(long)]
    pub sort: Option<SortSpec>,
    /// Page to print (clamped to the valid range).
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    /// Rows per page.
    #[arg(long)]
    pub page_size: Option<usize>,
}

/// Apply command-line overrides on top of the loaded settings.
pub fn apply_browse_overrides(settings: &mut Settings, args: &BrowseArgs) {
    if let Some(dataset) = args.dataset {
        settings.default_dataset = dataset.name().to_string();
    }
    if let Some(size) = args.page_size {
        settings.page_size = size;
    }
    if args.no_search {
        settings.searchable = false;
    }
}

/// Build the requested page of a dataset as `user` sees it.
pub fn export_page(user: &User, settings: &Settings, args: &ExportArgs) -> Result<String, AppError> {
    if !args.dataset.is_allowed_for(user.role) {
        return Err(AppError::Unauthorized {
            role: user.role,
            dataset: args.dataset,
        });
    }

    let mut settings = settings.clone();
    if let Some(size) = args.page_size {
        settings.page_size = size;
    }
    let mut table = OfficeData::demo().table(args.dataset, user, &settings);

    if let Some(search) = &args.search {
        table.set_search(search.as_str());
    }
    if let Some(sort) = &args.sort {
        if !table.set_sort(&sort.key, sort.direction) {
            let sortable: Vec<&str> = table
                .columns()
                .iter()
                .filter(|c| c.sortable)
                .map(|c| c.key.as_str())
                .collect();
            return Err(AppError::other(format!(
                "'{}' is not a sortable column of {} (try: {})",
                sort.key,
                args.dataset,
                sortable.join(", ")
            )));
        }
    }
    table.go_to_page(args.page);

    Ok(render_page(&table))
}

/// The stored user, or the office demo user when nobody is signed in.
fn current_user(store: &mut SessionStore) -> Result<(User, bool), AppError> {
    Ok(match store.load()? {
        Some(user) => (user.clone(), true),
        None => (User::demo_office(), false),
    })
}

fn describe(user: &User) -> String {
    let mut out = format!(
        "{} <{}>\nrole: {}",
        user.name,
        user.email,
        user.role.as_str()
    );
    if let Some(company) = &user.company_id {
        out.push_str(&format!("\ncompany: {}", company));
    }
    out
}

fn load_settings() -> Result<Settings, AppError> {
    let config = Config::load()?;
    Ok(config.settings)
}

fn validated(settings: Settings) -> Result<Settings, AppError> {
    let config = Config { settings };
    config.validate()?;
    Ok(config.settings)
}

fn browse(args: &BrowseArgs) -> Result<(), AppError> {
    let mut settings = load_settings()?;
    apply_browse_overrides(&mut settings, args);
    let settings = validated(settings)?;

    let mut store = SessionStore::open()?;
    let (user, signed_in) = current_user(&mut store)?;
    let dataset: Dataset = settings
        .default_dataset
        .parse()
        .map_err(AppError::Other)?;
    info!(email = %user.email, signed_in, dataset = dataset.name(), "Starting browser");

    let events = EventHandler::from_settings(&settings);
    let mut app = App::new(user, signed_in.then_some(store), settings, dataset);
    tui::run(&mut app, &events)
}

/// Execute the parsed command line.
pub fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command.unwrap_or(Command::Browse(BrowseArgs::default())) {
        Command::Browse(args) => browse(&args),
        Command::Login { email, password } => {
            let mut store = SessionStore::open()?;
            let user = store.login(&email, &password)?;
            println!("Signed in as {} ({})", user.name, user.role.label());
            Ok(())
        }
        Command::Logout => {
            SessionStore::open()?.logout()?;
            println!("Signed out");
            Ok(())
        }
        Command::Whoami => {
            let mut store = SessionStore::open()?;
            match store.load()? {
                Some(user) => println!("{}", describe(user)),
                None => println!(
                    "Not signed in. Browsing uses {} (office).",
                    User::demo_office().email
                ),
            }
            if let Some(dir) = logging::log_directory() {
                println!("logs: {}", dir.display());
            }
            Ok(())
        }
        Command::SwitchRole { role } => {
            let mut store = SessionStore::open()?;
            store.load()?;
            let user = store.switch_role(role)?;
            println!("Role is now {}", user.role.label());
            Ok(())
        }
        Command::Export(args) => {
            let settings = load_settings()?;
            let mut store = SessionStore::open()?;
            let (user, _) = current_user(&mut store)?;
            print!("{}", export_page(&user, &settings, &args)?);
            Ok(())
        }
        Command::Config { init } => {
            let path = Config::path()?;
            if init && !path.exists() {
                Config::default().save()?;
                println!("Wrote defaults to {}", path.display());
            } else {
                println!("{}", path.display());
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_DIR_ENV;
    use crate::session::SessionError;
    use serial_test::serial;
    use tempfile::tempdir;

    fn export_args(dataset: Dataset) -> ExportArgs {
        ExportArgs {
            dataset,
            search: None,
            sort: None,
            page: 1,
            page_size: None,
        }
    }

    #[test]
    fn test_parse_default_is_browse() {
        let cli = Cli::try_parse_from(["ledgerdesk"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_browse_flags() {
        let cli = Cli::try_parse_from([
            "ledgerdesk",
            "browse",
            "--dataset",
            "payments",
            "--page-size",
            "25",
            "--no-search",
        ])
        .unwrap();
        let Some(Command::Browse(args)) = cli.command else {
            panic!("expected browse");
        };
        assert_eq!(args.dataset, Some(Dataset::Payments));

        let mut settings = Settings::default();
        apply_browse_overrides(&mut settings, &args);
        assert_eq!(settings.default_dataset, "payments");
        assert_eq!(settings.page_size, 25);
        assert!(!settings.searchable);
    }

    #[test]
    fn test_parse_export() {
        let cli = Cli::try_parse_from([
            "ledgerdesk",
            "export",
            "payments",
            "--sort",
            "amount:desc",
            "--page",
            "2",
        ])
        .unwrap();
        let Some(Command::Export(args)) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.page, 2);
        assert_eq!(args.sort.unwrap().key, "amount");
    }

    #[test]
    fn test_parse_rejects_bad_role() {
        assert!(Cli::try_parse_from(["ledgerdesk", "switch-role", "admin"]).is_err());
    }

    #[test]
    fn test_export_sorted_descending() {
        let mut args = export_args(Dataset::Payments);
        args.sort = Some("amount:desc".parse().unwrap());
        args.page_size = Some(3);
        let out = export_page(&User::demo_office(), &Settings::default(), &args).unwrap();
        assert!(out.lines().next().unwrap().contains("Amount ▼"));
        assert!(out.contains("Page 1 of 5"));
    }

    #[test]
    fn test_export_clamps_page() {
        let mut args = export_args(Dataset::Payments);
        args.page = 99;
        let out = export_page(&User::demo_office(), &Settings::default(), &args).unwrap();
        assert!(out.contains("Page 2 of 2"));
    }

    #[test]
    fn test_export_search_no_results() {
        let mut args = export_args(Dataset::Clients);
        args.search = Some("no such client".to_string());
        let out = export_page(&User::demo_office(), &Settings::default(), &args).unwrap();
        assert!(out.contains("No results found"));
        assert!(out.contains("0 result(s)"));
    }

    #[test]
    fn test_export_rejects_unsortable_column() {
        let mut args = export_args(Dataset::Clients);
        args.sort = Some("cnpj".parse().unwrap());
        let err = export_page(&User::demo_office(), &Settings::default(), &args).unwrap_err();
        assert!(err.to_string().contains("cnpj"));
    }

    #[test]
    fn test_export_role_gate() {
        let err = export_page(
            &User::demo_client(),
            &Settings::default(),
            &export_args(Dataset::Payments),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized { .. }));
    }

    #[test]
    #[serial]
    fn test_session_commands_use_config_dir() {
        let dir = tempdir().unwrap();
        std::env::set_var(CONFIG_DIR_ENV, dir.path());

        let login = Cli::try_parse_from(["ledgerdesk", "login", "client@demo.com", "--password", "demo123"]).unwrap();
        run(login).unwrap();
        assert!(dir.path().join("session.json").exists());

        run(Cli::try_parse_from(["ledgerdesk", "switch-role", "office"]).unwrap()).unwrap();
        let mut store = SessionStore::open().unwrap();
        assert_eq!(store.load().unwrap().unwrap().role, UserRole::Office);

        run(Cli::try_parse_from(["ledgerdesk", "logout"]).unwrap()).unwrap();
        assert!(!dir.path().join("session.json").exists());

        let err = run(Cli::try_parse_from(["ledgerdesk", "switch-role", "client"]).unwrap())
            .unwrap_err();
        assert!(matches!(err, AppError::Session(SessionError::NotSignedIn)));

        std::env::remove_var(CONFIG_DIR_ENV);
    }

    #[test]
    #[serial]
    fn test_config_init_writes_defaults() {
        let dir = tempdir().unwrap();
        std::env::set_var(CONFIG_DIR_ENV, dir.path());

        run(Cli::try_parse_from(["ledgerdesk", "config", "--init"]).unwrap()).unwrap();
        let loaded = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(loaded, Config::default());

        std::env::remove_var(CONFIG_DIR_ENV);
    }
}
