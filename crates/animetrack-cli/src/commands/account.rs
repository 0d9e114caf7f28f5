use color_eyre::eyre::{eyre, Result};
use serde_json::json;
use crate::commands::prompts::{prompt_password, value_or_prompt};
use crate::context::AppContext;
use crate::output::Output;
use crate::render::session_card;

pub fn run_login(ctx: &AppContext, email: Option<String>, password: Option<String>, output: &Output) -> Result<()> {
    let mut session = ctx.session()?;
    let email = value_or_prompt(email, "Email")?;
    let password = match password {
        Some(p) => p,
        None => prompt_password("Password")?,
    };

    if !session.login(email.trim(), &password)? {
        return Err(eyre!("Invalid email or password"));
    }

    if let Some(current) = session.current() {
        output.success(format!("Welcome back, {}!", current.username));
        output.json(&json!({ "type": "session", "session": current }));
    }
    Ok(())
}

pub fn run_register(ctx: &AppContext, username: Option<String>, email: Option<String>, output: &Output) -> Result<()> {
    let mut session = ctx.session()?;
    let username = value_or_prompt(username, "Username")?;
    let email = value_or_prompt(email, "Email")?;
    let password = prompt_password("Password")?;

    session.register(username.trim(), email.trim(), &password)?;
    if let Some(current) = session.current() {
        output.success(format!("Account created. Welcome, {}!", current.username));
        output.json(&json!({ "type": "session", "session": current }));
    }
    Ok(())
}

pub fn run_logout(ctx: &AppContext, output: &Output) -> Result<()> {
    let mut session = ctx.session()?;
    if !session.is_authenticated() {
        output.info("Not logged in");
        return Ok(());
    }
    session.logout()?;
    output.success("Logged out");
    Ok(())
}

pub fn run_whoami(ctx: &AppContext, output: &Output) -> Result<()> {
    let session = ctx.session()?;
    match session.current() {
        Some(current) => {
            output.block(session_card(current));
            output.json(&json!({ "type": "session", "session": current }));
        }
        None => output.info("Not logged in. Run `animetrack login` first."),
    }
    Ok(())
}
