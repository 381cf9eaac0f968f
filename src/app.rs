use colored::Colorize;

use crate::{
    cli::Commands,
    commands::{
        self, AddOutcome, Listing, ProfileDraft, RemoveOutcome, SwitchOutcome,
    },
    error::AppError,
    git::GitConfig,
    menu,
    prompt::Prompter,
    storage::ProfileStore,
};

/// Resolves the profile store when a command first needs it
type StoreResolver<'a> = Box<dyn Fn() -> Result<ProfileStore, AppError> + 'a>;

/// Runs commands against a profile store, a prompter and the Git configuration
pub struct App<'a> {
    resolve_store: StoreResolver<'a>,
    prompter: &'a dyn Prompter,
    git: &'a dyn GitConfig,
}

impl<'a> App<'a> {
    pub fn new(store: ProfileStore, prompter: &'a dyn Prompter, git: &'a dyn GitConfig) -> Self {
        Self::with_store_resolver(move || Ok(store.clone()), prompter, git)
    }

    /// Defers locating the store, so `current` works without a home directory
    pub fn with_store_resolver(
        resolve_store: impl Fn() -> Result<ProfileStore, AppError> + 'a,
        prompter: &'a dyn Prompter,
        git: &'a dyn GitConfig,
    ) -> Self {
        Self {
            resolve_store: Box::new(resolve_store),
            prompter,
            git,
        }
    }

    pub fn store(&self) -> Result<ProfileStore, AppError> {
        (self.resolve_store)()
    }

    pub fn prompter(&self) -> &dyn Prompter {
        self.prompter
    }

    /// Executes the chosen subcommand, or the interactive menu when there is none
    pub fn run(&self, command: Option<Commands>) -> Result<(), AppError> {
        match command {
            Some(command) => self.execute(command),
            None => menu::run_menu(self),
        }
    }

    pub fn execute(&self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Add {
                name,
                username,
                email,
            } => self.add(ProfileDraft {
                name,
                username,
                email,
            }),
            Commands::Remove => self.remove(),
            Commands::List => self.list(),
            Commands::Switch => self.switch(),
            Commands::Current => self.current(),
        }
    }

    fn add(&self, draft: ProfileDraft) -> Result<(), AppError> {
        match commands::add_interactive(&self.store()?, draft, self.prompter)? {
            AddOutcome::Added { .. } => println!("{}", "Profile added successfully!".green()),
            AddOutcome::Cancelled => println!("{}", "Operation cancelled.".yellow()),
        }
        Ok(())
    }

    fn list(&self) -> Result<(), AppError> {
        match commands::list_profiles(&self.store()?) {
            Listing::Empty => println!("{}", "No profiles found.".yellow()),
            Listing::Entries(entries) => {
                println!("\n{}", "Available profiles:".blue());
                for entry in entries {
                    println!("{entry}");
                }
            }
        }
        Ok(())
    }

    fn remove(&self) -> Result<(), AppError> {
        match commands::remove_profile(&self.store()?, self.prompter)? {
            RemoveOutcome::NoProfiles => println!("{}", "No profiles found to remove.".yellow()),
            RemoveOutcome::Cancelled => println!("{}", "Operation cancelled.".yellow()),
            RemoveOutcome::Declined(_) => println!("{}", "Profile removal cancelled.".yellow()),
            RemoveOutcome::Removed(_) => println!("{}", "Profile removed successfully!".green()),
        }
        Ok(())
    }

    fn switch(&self) -> Result<(), AppError> {
        let store = self.store()?;
        let outcome = commands::switch_profile(&store, self.prompter, self.git)
            .map_err(|err| err.context("error switching profile"))?;

        match outcome {
            SwitchOutcome::NoProfiles => println!(
                "{}",
                "No profiles found. Please add a profile first.".yellow()
            ),
            SwitchOutcome::Cancelled => println!("{}", "Operation cancelled.".yellow()),
            SwitchOutcome::Switched(profile) => {
                println!("{} {}", "Switched to profile:".green(), profile.name)
            }
        }
        Ok(())
    }

    fn current(&self) -> Result<(), AppError> {
        let identity = commands::current_identity(self.git)
            .map_err(|err| err.context("error getting current configuration"))?;

        println!("\n{}", "Current Git configuration:".blue());
        println!("Username: {}", identity.username);
        println!("Email: {}", identity.email);
        Ok(())
    }
}
