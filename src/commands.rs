//! Profile operations: add, list, remove, switch and current.
//!
//! Each operation loads the collection once and works on that snapshot, so a
//! selected index always refers to the profiles the user was shown.

use std::fmt;

use tracing::info;

use crate::{
    error::AppError,
    git::{GitConfig, USER_EMAIL_KEY, USER_NAME_KEY},
    profile::Profile,
    prompt::{CANCEL_OPTION, Prompter},
    storage::ProfileStore,
};

/// One row of `list`, with its 1-based position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub position: usize,
    pub name: String,
    pub username: String,
    pub email: String,
}

impl fmt::Display for ListEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} ({}, {})",
            self.position, self.name, self.username, self.email
        )
    }
}

/// Result of `list`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// Nothing stored yet
    Empty,
    Entries(Vec<ListEntry>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Profile appended; `count` is the new collection length
    Added { profile: Profile, count: usize },
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    NoProfiles,
    Cancelled,
    /// User answered no to the confirmation
    Declined(Profile),
    Removed(Profile),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    NoProfiles,
    Cancelled,
    Switched(Profile),
}

/// Identity currently applied in the global Git configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentIdentity {
    pub username: String,
    pub email: String,
}

/// Fields of a profile given on the command line; missing ones are prompted for
#[derive(Debug, Clone, Default)]
pub struct ProfileDraft {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
}

/// Fills the missing fields of `draft` by prompting
///
/// Returns `None` if the user cancels any prompt.
pub fn complete_profile(
    draft: ProfileDraft,
    prompter: &dyn Prompter,
) -> Result<Option<Profile>, AppError> {
    let Some(name) = fill_field(draft.name, "Enter profile name:", prompter)? else {
        return Ok(None);
    };
    let Some(username) = fill_field(draft.username, "Enter Git username:", prompter)? else {
        return Ok(None);
    };
    let Some(email) = fill_field(draft.email, "Enter Git email:", prompter)? else {
        return Ok(None);
    };

    Ok(Some(Profile::new(name, username, email)))
}

fn fill_field(
    given: Option<String>,
    message: &str,
    prompter: &dyn Prompter,
) -> Result<Option<String>, AppError> {
    match given {
        Some(value) => Ok(Some(value)),
        None => prompter.input(message),
    }
}

/// Appends `profile` to the stored collection
pub fn add_profile(store: &ProfileStore, profile: Profile) -> Result<usize, AppError> {
    let mut profiles: Vec<Profile> = store.load();
    profiles.push(profile);
    store.save(&profiles)?;

    info!(count = profiles.len(), "profile added");
    Ok(profiles.len())
}

/// Prompts for any missing fields and adds the profile
pub fn add_interactive(
    store: &ProfileStore,
    draft: ProfileDraft,
    prompter: &dyn Prompter,
) -> Result<AddOutcome, AppError> {
    let Some(profile) = complete_profile(draft, prompter)? else {
        return Ok(AddOutcome::Cancelled);
    };

    let count = add_profile(store, profile.clone())?;
    Ok(AddOutcome::Added { profile, count })
}

/// Enumerates stored profiles in insertion order
pub fn list_profiles(store: &ProfileStore) -> Listing {
    let profiles: Vec<Profile> = store.load();
    if profiles.is_empty() {
        return Listing::Empty;
    }

    let entries = profiles
        .into_iter()
        .enumerate()
        .map(|(index, profile)| ListEntry {
            position: index + 1,
            name: profile.name,
            username: profile.username,
            email: profile.email,
        })
        .collect();
    Listing::Entries(entries)
}

/// Labels shown when choosing a profile
pub fn profile_labels(profiles: &[Profile]) -> Vec<String> {
    profiles.iter().map(Profile::label).collect()
}

/// Lets the user pick a profile to delete, confirms, then removes it
pub fn remove_profile(
    store: &ProfileStore,
    prompter: &dyn Prompter,
) -> Result<RemoveOutcome, AppError> {
    let mut profiles: Vec<Profile> = store.load();
    if profiles.is_empty() {
        return Ok(RemoveOutcome::NoProfiles);
    }

    let labels: Vec<String> = profile_labels(&profiles);
    let Some(index) = prompter.select(
        "Select a profile to remove (or Cancel to exit):",
        &labels,
        CANCEL_OPTION,
    )?
    else {
        return Ok(RemoveOutcome::Cancelled);
    };
    // An index outside the snapshot selects nothing.
    let Some(selected) = profiles.get(index) else {
        return Ok(RemoveOutcome::Cancelled);
    };

    let confirmed = prompter.confirm(&format!(
        "Are you sure you want to remove \"{}\"?",
        selected.name
    ))?;
    if !confirmed {
        return Ok(RemoveOutcome::Declined(selected.clone()));
    }

    let removed: Profile = profiles.remove(index);
    store.save(&profiles)?;

    info!(position = index + 1, remaining = profiles.len(), "profile removed");
    Ok(RemoveOutcome::Removed(removed))
}

/// Writes the profile's username and email into the global Git configuration
///
/// The two keys are set one after the other; if the email fails the username stays applied.
pub fn apply_profile(git: &dyn GitConfig, profile: &Profile) -> Result<(), AppError> {
    git.set(USER_NAME_KEY, &profile.username)?;
    git.set(USER_EMAIL_KEY, &profile.email)?;
    Ok(())
}

/// Lets the user pick a profile and applies it globally
pub fn switch_profile(
    store: &ProfileStore,
    prompter: &dyn Prompter,
    git: &dyn GitConfig,
) -> Result<SwitchOutcome, AppError> {
    let profiles: Vec<Profile> = store.load();
    if profiles.is_empty() {
        return Ok(SwitchOutcome::NoProfiles);
    }

    let labels: Vec<String> = profile_labels(&profiles);
    let Some(index) = prompter.select("Select a profile to switch to:", &labels, CANCEL_OPTION)?
    else {
        return Ok(SwitchOutcome::Cancelled);
    };

    let Some(profile) = profiles.get(index).cloned() else {
        return Ok(SwitchOutcome::Cancelled);
    };
    apply_profile(git, &profile)?;

    info!(name = %profile.name, "switched profile");
    Ok(SwitchOutcome::Switched(profile))
}

/// Reads back the identity applied in the global Git configuration
pub fn current_identity(git: &dyn GitConfig) -> Result<CurrentIdentity, AppError> {
    let username: String = git.get(USER_NAME_KEY)?;
    let email: String = git.get(USER_EMAIL_KEY)?;
    Ok(CurrentIdentity {
        username: username.trim().to_string(),
        email: email.trim().to_string(),
    })
}
