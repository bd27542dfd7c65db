use crate::{
    db::profiles::Profiles,
    libs::{
        hash::{hash_password, verify_password},
        messages::Message,
        profile::{validate_new_profile, Profile},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password};

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    command: ProfileCommand,
}

#[derive(Debug, Subcommand)]
enum ProfileCommand {
    /// Create a new profile
    Add {
        /// Username for the new profile
        username: Option<String>,
    },
    /// List all profiles
    List,
    /// Select the active profile
    Select {
        /// Username of the profile to select
        username: String,
    },
    /// Delete a profile and all of its tasks
    Delete {
        /// Username of the profile to delete
        username: String,
    },
}

pub fn cmd(args: ProfileArgs) -> Result<()> {
    match args.command {
        ProfileCommand::Add { username } => handle_add(username),
        ProfileCommand::List => handle_list(),
        ProfileCommand::Select { username } => handle_select(username),
        ProfileCommand::Delete { username } => handle_delete(username),
    }
}

fn handle_add(username: Option<String>) -> Result<()> {
    let username = match username {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptUsername.to_string())
            .interact_text()?,
    };

    let password: String = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPasswordOptional.to_string())
        .allow_empty_password(true)
        .interact()?;
    let password = if password.is_empty() { None } else { Some(password) };

    let mut profiles_db = Profiles::new()?;
    let username_taken = profiles_db.get_by_username(&username)?.is_some();

    if let Err(message) = validate_new_profile(&username, password.as_deref(), username_taken) {
        msg_error!(message);
        return Ok(());
    }

    let digest = password.map(|p| hash_password(&p));
    profiles_db.add(&username, digest.as_deref())?;

    msg_success!(Message::ProfileAdded(username));
    Ok(())
}

fn handle_list() -> Result<()> {
    let mut profiles_db = Profiles::new()?;
    let profiles = profiles_db.list()?;

    if profiles.is_empty() {
        msg_info!(Message::NoProfilesFound);
        return Ok(());
    }

    msg_print!(Message::ProfileListHeader, true);
    View::profiles(&profiles)?;
    Ok(())
}

fn handle_select(username: String) -> Result<()> {
    let mut profiles_db = Profiles::new()?;

    let profile = match profiles_db.get_by_username(&username)? {
        Some(p) => p,
        None => {
            msg_error!(Message::ProfileNotFound(username));
            return Ok(());
        }
    };

    if !authorize(&profile)? {
        msg_error!(Message::PasswordIncorrect);
        return Ok(());
    }

    if let Some(id) = profile.id {
        profiles_db.swap_selected(id)?;
    }
    msg_success!(Message::ProfileSelected(profile.username));
    Ok(())
}

fn handle_delete(username: String) -> Result<()> {
    let mut profiles_db = Profiles::new()?;

    let profile = match profiles_db.get_by_username(&username)? {
        Some(p) => p,
        None => {
            msg_error!(Message::ProfileNotFound(username));
            return Ok(());
        }
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptConfirmDeleteProfile(profile.username.clone()).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

    if !authorize(&profile)? {
        msg_error!(Message::PasswordIncorrect);
        return Ok(());
    }

    if let Some(id) = profile.id {
        if profiles_db.delete(id)? {
            msg_success!(Message::ProfileDeleted(profile.username));
            return Ok(());
        }
    }
    msg_error!(Message::ProfileNotFound(profile.username));
    Ok(())
}

/// Prompts for and verifies the password of a protected profile. Returns
/// `true` for unprotected profiles without prompting.
fn authorize(profile: &Profile) -> Result<bool> {
    let Some(stored_digest) = &profile.password else {
        return Ok(true);
    };

    let candidate: String = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPassword.to_string())
        .interact()?;

    Ok(verify_password(&candidate, stored_digest))
}
