use color_eyre::Result;
use dialoguer::{Confirm, Input, Password, Select};

/// Prompt for a string value with optional default
pub fn prompt_string(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input_builder = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true);

    if let Some(default_value) = default {
        input_builder = input_builder.default(default_value.to_string());
    }

    input_builder
        .interact_text()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read input: {}", e))
}

/// Prompt for a password (masked input)
pub fn prompt_password(prompt: &str) -> Result<String> {
    Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read password: {}", e))
}

/// Prompt for yes/no with a default
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read confirmation: {}", e))
}

/// Pick one of `items`, returning its index
pub fn prompt_select<T: ToString>(prompt: &str, items: &[T], default: usize) -> Result<usize> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(default.min(items.len().saturating_sub(1)))
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read selection: {}", e))
}

/// Use `value` if given, otherwise prompt for it
pub fn value_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => prompt_string(prompt, None),
    }
}
