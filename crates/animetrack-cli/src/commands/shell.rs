use color_eyre::eyre::Result;
use std::fmt;
use watchlist_catalog::{CatalogSource, SearchCoordinator, SearchOutcome};
use watchlist_core::{Dashboard, EntryEditor, SessionSlot};
use watchlist_models::{SortKey, StatusFilter, WatchStatus};
use crate::commands::prompts::{prompt_password, prompt_select, prompt_string, prompt_yes_no};
use crate::commands::search::search_with_spinner;
use crate::context::AppContext;
use crate::output::Output;
use crate::render::{candidates_table, editor_card, entries_table, session_card, stats_table};

#[derive(Clone, Copy)]
enum MenuItem {
    ShowList,
    SetQuery,
    FilterStatus,
    SortBy,
    AddAnime,
    EditEntry,
    RemoveEntry,
    Profile,
    Logout,
    Quit,
}

const MENU: [MenuItem; 10] = [
    MenuItem::ShowList,
    MenuItem::SetQuery,
    MenuItem::FilterStatus,
    MenuItem::SortBy,
    MenuItem::AddAnime,
    MenuItem::EditEntry,
    MenuItem::RemoveEntry,
    MenuItem::Profile,
    MenuItem::Logout,
    MenuItem::Quit,
];

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuItem::ShowList => "Show my list",
            MenuItem::SetQuery => "Search my list",
            MenuItem::FilterStatus => "Filter by status",
            MenuItem::SortBy => "Sort by",
            MenuItem::AddAnime => "Add anime",
            MenuItem::EditEntry => "Edit an entry",
            MenuItem::RemoveEntry => "Remove an entry",
            MenuItem::Profile => "Profile and stats",
            MenuItem::Logout => "Log out",
            MenuItem::Quit => "Quit",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Copy)]
enum EditAction {
    NextEpisode,
    PreviousEpisode,
    SetProgress,
    ChangeStatus,
    Rate,
    Review,
    Save,
    Cancel,
}

const EDIT_ACTIONS: [EditAction; 8] = [
    EditAction::NextEpisode,
    EditAction::PreviousEpisode,
    EditAction::SetProgress,
    EditAction::ChangeStatus,
    EditAction::Rate,
    EditAction::Review,
    EditAction::Save,
    EditAction::Cancel,
];

impl fmt::Display for EditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EditAction::NextEpisode => "+1 episode",
            EditAction::PreviousEpisode => "-1 episode",
            EditAction::SetProgress => "Set episodes watched",
            EditAction::ChangeStatus => "Change status",
            EditAction::Rate => "Rate (1-10)",
            EditAction::Review => "Write review",
            EditAction::Save => "Save changes",
            EditAction::Cancel => "Cancel",
        };
        f.write_str(label)
    }
}

pub async fn run_shell(ctx: &AppContext, output: &Output) -> Result<()> {
    let mut dashboard = ctx.dashboard()?;
    let coordinator = ctx.catalog();
    let default_add_status = ctx.config.list.default_add_status;

    if dashboard.session().is_none() && !sign_in(&mut dashboard, output)? {
        return Ok(());
    }

    loop {
        let view = dashboard.view();
        let prompt = format!(
            "Anime Tracker [query: \"{}\", status: {}, sort: {}]",
            view.query(),
            view.status_filter(),
            view.sort_key()
        );
        let choice = prompt_select(&prompt, &MENU, 0)?;

        match MENU[choice] {
            MenuItem::ShowList => show_list(&dashboard, output)?,
            MenuItem::SetQuery => {
                let current = dashboard.view().query().to_string();
                let query = prompt_string("Search anime (empty for all)", Some(&current))?;
                dashboard.view_mut().set_query(query.trim());
                show_list(&dashboard, output)?;
            }
            MenuItem::FilterStatus => {
                let mut filters = vec![StatusFilter::All];
                filters.extend(WatchStatus::ALL.iter().copied().map(StatusFilter::Only));
                let labels: Vec<&str> = filters
                    .iter()
                    .map(|filter| match filter {
                        StatusFilter::All => "All Status",
                        StatusFilter::Only(status) => status.label(),
                    })
                    .collect();
                let current = filters
                    .iter()
                    .position(|f| *f == dashboard.view().status_filter())
                    .unwrap_or(0);
                let picked = prompt_select("Filter by status", &labels, current)?;
                dashboard.view_mut().set_status_filter(filters[picked]);
                show_list(&dashboard, output)?;
            }
            MenuItem::SortBy => {
                let current = SortKey::ALL
                    .iter()
                    .position(|k| *k == dashboard.view().sort_key())
                    .unwrap_or(0);
                let picked = prompt_select("Sort by", &SortKey::ALL, current)?;
                dashboard.view_mut().set_sort_key(SortKey::ALL[picked]);
                show_list(&dashboard, output)?;
            }
            MenuItem::AddAnime => add_anime(&mut dashboard, &coordinator, default_add_status, output).await?,
            MenuItem::EditEntry => {
                if let Some(id) = pick_entry(&dashboard, "Edit which anime?", output)? {
                    if let Some(editor) = dashboard.open_entry(&id)? {
                        edit_entry(&mut dashboard, editor, output)?;
                    }
                }
            }
            MenuItem::RemoveEntry => {
                if let Some(id) = pick_entry(&dashboard, "Remove which anime?", output)? {
                    if prompt_yes_no("Remove it from your list?", false)? && dashboard.on_remove(&id)? {
                        output.success("Removed from your list");
                    }
                }
            }
            MenuItem::Profile => {
                if let Some(session) = dashboard.session() {
                    output.block(session_card(session));
                }
                output.block(stats_table(&dashboard.stats()?));
            }
            MenuItem::Logout => {
                dashboard.on_logout()?;
                output.success("Logged out");
                if !sign_in(&mut dashboard, output)? {
                    return Ok(());
                }
            }
            MenuItem::Quit => return Ok(()),
        }
    }
}

/// Login/register loop; `false` when the user chose to quit instead
fn sign_in<S: SessionSlot>(dashboard: &mut Dashboard<S>, output: &Output) -> Result<bool> {
    const CHOICES: [&str; 3] = ["Log in", "Register", "Quit"];

    loop {
        match prompt_select("Welcome to Anime Tracker", &CHOICES, 0)? {
            0 => {
                let email = prompt_string("Email", None)?;
                let password = prompt_password("Password")?;
                if dashboard.on_login(email.trim(), &password)? {
                    break;
                }
                output.error("Invalid email or password");
            }
            1 => {
                let username = prompt_string("Username", None)?;
                let email = prompt_string("Email", None)?;
                let password = prompt_password("Password")?;
                if dashboard.on_register(username.trim(), email.trim(), &password)? {
                    break;
                }
            }
            _ => return Ok(false),
        }
    }

    if let Some(session) = dashboard.session() {
        output.success(format!("Welcome, {}!", session.username));
    }
    Ok(true)
}

fn show_list<S: SessionSlot>(dashboard: &Dashboard<S>, output: &Output) -> Result<()> {
    let entries = dashboard.visible_entries()?;
    if entries.is_empty() {
        output.info("No anime found matching your criteria.");
    } else {
        output.block(entries_table(&entries));
    }
    Ok(())
}

/// Choose one of the visible entries; `None` for "Back" or an empty list
fn pick_entry<S: SessionSlot>(dashboard: &Dashboard<S>, prompt: &str, output: &Output) -> Result<Option<String>> {
    let entries = dashboard.visible_entries()?;
    if entries.is_empty() {
        output.info("No anime found matching your criteria.");
        return Ok(None);
    }

    let mut labels: Vec<String> = entries
        .iter()
        .map(|e| format!("{} ({}, {}/{})", e.title, e.status.label(), e.progress, e.total_episodes))
        .collect();
    labels.push("Back".to_string());

    let picked = prompt_select(prompt, &labels, 0)?;
    Ok(entries.get(picked).map(|e| e.id.clone()))
}

fn edit_entry<S: SessionSlot>(dashboard: &mut Dashboard<S>, mut editor: EntryEditor, output: &Output) -> Result<()> {
    loop {
        output.block(editor_card(&editor));
        let action = EDIT_ACTIONS[prompt_select("Edit", &EDIT_ACTIONS, 0)?];

        match action {
            EditAction::NextEpisode => editor.increment_progress(),
            EditAction::PreviousEpisode => editor.decrement_progress(),
            EditAction::SetProgress => {
                let current = editor.progress().to_string();
                let input = prompt_string("Episodes watched", Some(&current))?;
                editor.set_progress_input(&input);
            }
            EditAction::ChangeStatus => {
                let current = WatchStatus::ALL
                    .iter()
                    .position(|s| *s == editor.status())
                    .unwrap_or(0);
                let labels: Vec<&str> = WatchStatus::ALL.iter().map(|s| s.label()).collect();
                let picked = prompt_select("Status", &labels, current)?;
                editor.set_status(WatchStatus::ALL[picked]);
            }
            EditAction::Rate => {
                let stars: Vec<String> = (1..=10).map(|n| format!("{} {}", "★".repeat(n), n)).collect();
                let current = editor.rating().map_or(0, |r| usize::from(r.max(1)) - 1);
                let picked = prompt_select("Your rating", &stars, current)?;
                // Index 0 is the first star
                editor.set_rating(picked as u8 + 1);
            }
            EditAction::Review => {
                let current = editor.review().to_string();
                let review = prompt_string("Share your thoughts about this anime", Some(&current))?;
                editor.set_review(review);
            }
            EditAction::Save => {
                let receipt = dashboard.commit_editor(editor)?;
                if receipt.applied {
                    output.success(receipt.message());
                } else {
                    output.warn(receipt.message());
                }
                return Ok(());
            }
            EditAction::Cancel => {
                editor.cancel();
                return Ok(());
            }
        }
    }
}

async fn add_anime<S: SessionSlot, C: CatalogSource>(
    dashboard: &mut Dashboard<S>,
    coordinator: &SearchCoordinator<C>,
    default_status: WatchStatus,
    output: &Output,
) -> Result<()> {
    let query = prompt_string("Search for anime", None)?;
    let outcome = search_with_spinner(coordinator, &query).await?;

    let results = match outcome {
        SearchOutcome::Skipped => return Ok(()),
        SearchOutcome::Stale => {
            output.warn("Search was superseded by a newer one");
            return Ok(());
        }
        SearchOutcome::Completed(results) => results,
    };
    if results.is_empty() {
        output.info(format!("No anime found for \"{}\"", query));
        return Ok(());
    }
    output.block(candidates_table(&results));

    let status_labels: Vec<&str> = WatchStatus::ALL.iter().map(|s| s.label()).collect();
    let default_index = WatchStatus::ALL
        .iter()
        .position(|s| *s == default_status)
        .unwrap_or(0);
    let status = WatchStatus::ALL[prompt_select("Default status", &status_labels, default_index)?];

    let mut labels: Vec<String> = results
        .iter()
        .map(|c| format!("{} ({}, {} eps)", c.title, c.year, c.total_episodes))
        .collect();
    labels.push("Back".to_string());
    let picked = prompt_select("Add which anime?", &labels, 0)?;

    if let Some(candidate) = results.get(picked) {
        let entry = dashboard.add_candidate(candidate, status)?;
        output.success(format!("{} has been added to your list.", entry.title));
    }
    Ok(())
}
