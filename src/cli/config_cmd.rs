//! Config command handler

use std::sync::Arc;

use crate::application::ports::PreferenceStore;
use crate::application::CallRecord;
use crate::domain::config::RecordPreferences;
use crate::domain::error::ConfigError;
use crate::domain::recording::{AudioEncoder, AudioSource, OutputFormat};

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub fn handle_config_command<S: PreferenceStore>(
    action: ConfigAction,
    store: Arc<S>,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store.as_ref(), presenter),
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value),
        ConfigAction::Get { key } => handle_get(store.as_ref(), presenter, &key),
        ConfigAction::List => handle_list(store.as_ref(), presenter),
        ConfigAction::Path => handle_path(store.as_ref(), presenter),
    }
}

/// Handle `enable` / `disable`
pub fn handle_save_toggle<S: PreferenceStore>(
    enable: bool,
    store: Arc<S>,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    let record = CallRecord::open(store);
    if enable {
        record.enable_save_file()?;
        presenter.success("Saving recordings enabled");
    } else {
        record.disable_save_file()?;
        presenter.success("Saving recordings disabled");
    }
    Ok(())
}

fn handle_init<S: PreferenceStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init()?;
    presenter.success(&format!(
        "Preferences file created at: {}",
        store.path().display()
    ));
    Ok(())
}

fn handle_set<S: PreferenceStore>(
    store: Arc<S>,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let record = CallRecord::open(Arc::clone(&store));
    match key {
        "file_name" => record.change_record_file_name(value)?,
        "dir_name" => record.change_record_dir_name(value)?,
        "dir_path" => record.change_record_dir_path(value)?,
        "save_file" => {
            let enabled = parse_bool_value(key, value)?;
            store.update(&|prefs| prefs.save_file = Some(enabled))?
        }
        "show_seed" => {
            let show = parse_bool_value(key, value)?;
            store.update(&|prefs| prefs.show_seed = Some(show))?
        }
        "show_phone_number" => {
            let show = parse_bool_value(key, value)?;
            store.update(&|prefs| prefs.show_phone_number = Some(show))?
        }
        "audio_source" => {
            let source = parse_code::<AudioSource>(key, value)?;
            store.update(&|prefs| prefs.audio_source = Some(source))?
        }
        "audio_encoder" => {
            let encoder = parse_code::<AudioEncoder>(key, value)?;
            store.update(&|prefs| prefs.audio_encoder = Some(encoder))?
        }
        "output_format" => {
            let format = parse_code::<OutputFormat>(key, value)?;
            store.update(&|prefs| prefs.output_format = Some(format))?
        }
        _ => unreachable!(), // Already validated
    }

    presenter.success(&format!("{} = {}", key, value));
    Ok(())
}

fn handle_get<S: PreferenceStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let prefs = store.load()?;
    match value_of(&prefs, key) {
        Some(v) => presenter.output(&v),
        None => presenter.output("(not set)"),
    }

    Ok(())
}

fn handle_list<S: PreferenceStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let prefs = store.load()?;

    for key in VALID_CONFIG_KEYS {
        presenter.key_value(
            key,
            &value_of(&prefs, key).unwrap_or_else(|| "(not set)".to_string()),
        );
    }

    Ok(())
}

fn handle_path<S: PreferenceStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Stored value of `key`, codes shown with their name
fn value_of(prefs: &RecordPreferences, key: &str) -> Option<String> {
    match key {
        "save_file" => prefs.save_file.map(|b| b.to_string()),
        "file_name" => prefs.file_name.clone(),
        "dir_name" => prefs.dir_name.clone(),
        "dir_path" => prefs.dir_path.clone(),
        "show_seed" => prefs.show_seed.map(|b| b.to_string()),
        "show_phone_number" => prefs.show_phone_number.map(|b| b.to_string()),
        "audio_source" => prefs.audio_source.map(|s| format!("{} ({})", s.code(), s)),
        "audio_encoder" => prefs.audio_encoder.map(|e| format!("{} ({})", e.code(), e)),
        "output_format" => prefs.output_format.map(|f| format!("{} ({})", f.code(), f)),
        _ => None,
    }
}

fn parse_bool_value(key: &str, value: &str) -> Result<bool, ConfigError> {
    parse_bool(value).map_err(|_| ConfigError::ValidationError {
        key: key.to_string(),
        message: "Value must be 'true' or 'false'".to_string(),
    })
}

/// Parse a numeric code, e.g. `3` for the AMR-NB output format
fn parse_code<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: TryFrom<i32>,
    T::Error: std::fmt::Display,
{
    let code = value
        .trim()
        .parse::<i32>()
        .map_err(|_| ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Value must be an integer code, got '{}'", value),
        })?;

    T::try_from(code).map_err(|e| ConfigError::ValidationError {
        key: key.to_string(),
        message: e.to_string(),
    })
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}
