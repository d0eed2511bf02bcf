//! Hook registration in `.claude/settings.json`.
//!
//! Adds, per phase, one matcher group that runs editguard for file edits:
//!
//! ```json
//! { "hooks": { "PreToolUse": [
//!     { "matcher": "Edit|MultiEdit|Write",
//!       "hooks": [{ "type": "command", "command": "editguard pre-edit" }] }
//! ] } }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{json, Map, Value};
use tracing::info;

use crate::error::Error;

/// Tools whose events are routed to editguard.
const EDIT_TOOLS_MATCHER: &str = "Edit|MultiEdit|Write";

/// Host event name and the command it runs.
const HOOK_COMMANDS: [(&str, &str); 2] = [
    ("PreToolUse", "editguard pre-edit"),
    ("PostToolUse", "editguard post-edit"),
];

/// Settings file for a project.
pub fn settings_path(project_root: &Path) -> PathBuf {
    project_root.join(".claude").join("settings.json")
}

/// Check if editguard hooks are already registered.
pub fn hooks_installed(project_root: &Path) -> bool {
    fs::read_to_string(settings_path(project_root))
        .ok()
        .and_then(|content| serde_json::from_str::<Value>(&content).ok())
        .map(|settings| {
            HOOK_COMMANDS
                .iter()
                .all(|(event, command)| has_command(&settings, event, command))
        })
        .unwrap_or(false)
}

/// Run install command.
pub fn install(project: Option<PathBuf>) -> Result<(), Error> {
    let project_root = resolve_root(project)?;
    if install_hooks(&project_root)? {
        println!(
            "editguard hooks installed in {}",
            settings_path(&project_root).display()
        );
    } else {
        println!("editguard hooks already installed.");
    }
    Ok(())
}

/// Run uninstall command.
pub fn uninstall(project: Option<PathBuf>) -> Result<(), Error> {
    let project_root = resolve_root(project)?;
    if uninstall_hooks(&project_root)? {
        println!("editguard hooks removed.");
    } else {
        println!("No editguard hooks found.");
    }
    Ok(())
}

fn resolve_root(project: Option<PathBuf>) -> Result<PathBuf, Error> {
    match project {
        Some(path) => Ok(path),
        None => Ok(std::env::current_dir()?),
    }
}

/// Merge editguard hooks into the project settings, backing up an existing
/// file first. Returns false when nothing changed.
pub fn install_hooks(project_root: &Path) -> Result<bool, Error> {
    if hooks_installed(project_root) {
        return Ok(false);
    }

    let path = settings_path(project_root);
    let mut settings = read_settings(&path)?;

    if !merge_hooks(&mut settings, &path)? {
        return Ok(false);
    }

    write_settings(&path, &settings)?;
    info!(path = %path.display(), "Installed editguard hooks");
    Ok(true)
}

/// Remove editguard hooks from the project settings, backing up the file
/// first. Returns false when there was nothing to remove.
pub fn uninstall_hooks(project_root: &Path) -> Result<bool, Error> {
    let path = settings_path(project_root);
    if !path.exists() {
        return Ok(false);
    }
    let mut settings = read_settings(&path)?;

    if !remove_hooks(&mut settings) {
        return Ok(false);
    }

    write_settings(&path, &settings)?;
    info!(path = %path.display(), "Removed editguard hooks");
    Ok(true)
}

fn read_settings(path: &Path) -> Result<Value, Error> {
    if !path.exists() {
        return Ok(json!({}));
    }
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(json!({}));
    }
    Ok(serde_json::from_str(&content)?)
}

/// Write `settings`, copying any existing file to `settings.json.bak` first.
fn write_settings(path: &Path, settings: &Value) -> Result<(), Error> {
    if path.exists() {
        fs::copy(path, backup_path(path))?;
    } else if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(settings)?)?;
    Ok(())
}

fn backup_path(path: &Path) -> PathBuf {
    path.with_extension("json.bak")
}

fn invalid(path: &Path, reason: &str) -> Error {
    Error::InvalidSettings {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

fn hook_entry(command: &str) -> Value {
    json!({
        "matcher": EDIT_TOOLS_MATCHER,
        "hooks": [{ "type": "command", "command": command }]
    })
}

fn group_commands(group: &Value) -> impl Iterator<Item = &str> {
    group
        .get("hooks")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|h| h.get("command").and_then(Value::as_str))
}

fn has_command(settings: &Value, event: &str, command: &str) -> bool {
    settings
        .get("hooks")
        .and_then(|h| h.get(event))
        .and_then(Value::as_array)
        .map(|groups| {
            groups
                .iter()
                .any(|g| group_commands(g).any(|c| c == command))
        })
        .unwrap_or(false)
}

/// Add missing editguard entries to `settings`. `path` is only used for errors.
pub fn merge_hooks(settings: &mut Value, path: &Path) -> Result<bool, Error> {
    let root = settings
        .as_object_mut()
        .ok_or_else(|| invalid(path, "top level is not an object"))?;
    let hooks = root
        .entry("hooks")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| invalid(path, "\"hooks\" is not an object"))?;

    let mut changed = false;
    for (event, command) in HOOK_COMMANDS {
        let groups = hooks
            .entry(event)
            .or_insert_with(|| Value::Array(Vec::new()))
            .as_array_mut()
            .ok_or_else(|| invalid(path, "hook event is not an array"))?;

        if groups.iter().any(|g| group_commands(g).any(|c| c == command)) {
            continue;
        }
        groups.push(hook_entry(command));
        changed = true;
    }
    Ok(changed)
}

/// Strip editguard commands from `settings`, dropping groups, events and the
/// `hooks` table when they end up empty.
pub fn remove_hooks(settings: &mut Value) -> bool {
    let Some(root) = settings.as_object_mut() else {
        return false;
    };
    let Some(hooks) = root.get_mut("hooks").and_then(Value::as_object_mut) else {
        return false;
    };

    let mut changed = false;
    for (event, command) in HOOK_COMMANDS {
        let Some(groups) = hooks.get_mut(event).and_then(Value::as_array_mut) else {
            continue;
        };
        for group in groups.iter_mut() {
            if let Some(list) = group.get_mut("hooks").and_then(Value::as_array_mut) {
                let before = list.len();
                list.retain(|h| h.get("command").and_then(Value::as_str) != Some(command));
                changed |= list.len() != before;
            }
        }
        groups.retain(|g| {
            g.get("hooks")
                .and_then(Value::as_array)
                .map(|list| !list.is_empty())
                .unwrap_or(true)
        });
        if groups.is_empty() {
            hooks.remove(event);
        }
    }

    if hooks.is_empty() {
        root.remove("hooks");
    }
    changed
}
