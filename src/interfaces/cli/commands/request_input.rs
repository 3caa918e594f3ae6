//! Shared request inputs for `fetch` and `url`

use std::collections::HashMap;

use crate::cli::RequestArgs;
use crate::config::StaticConfig;
use crate::interfaces::cli::CliError;
use crate::query::KmlForm;

/// Build the form from `--form` plus individual flags
///
/// Flags win over file values. Every field must end up with a value.
pub fn load_form(args: &RequestArgs) -> Result<KmlForm, CliError> {
    let mut fields: HashMap<String, String> = match &args.form {
        Some(path) => read_form_file(path)?,
        None => HashMap::new(),
    };

    let overrides = [
        ("layer", &args.layer),
        ("region", &args.region),
        ("west", &args.west),
        ("south", &args.south),
        ("east", &args.east),
        ("north", &args.north),
        ("time", &args.time),
    ];
    for (name, value) in overrides {
        if let Some(v) = value {
            fields.insert(name.to_string(), v.clone());
        }
    }

    Ok(KmlForm::from_fields(&fields)?)
}

/// 读取表单文件，格式由扩展名决定（.json 用 JSON，其余按 TOML）
///
/// 字段值必须是字符串；数字会被拒绝而不是转换，保证原样透传。
fn read_form_file(path: &str) -> Result<HashMap<String, String>, CliError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::ParseError(format!("Cannot read form file {}: {}", path, e)))?;

    let is_json = std::path::Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parsed = if is_json {
        serde_json::from_str::<HashMap<String, String>>(&content).map_err(|e| e.to_string())
    } else {
        toml::from_str::<HashMap<String, String>>(&content).map_err(|e| e.to_string())
    };

    parsed.map_err(|e| CliError::ParseError(format!("Invalid form file {}: {}", path, e)))
}

/// Apply `--base-url` to a copy of the loaded configuration
pub fn resolve_config(config: &StaticConfig, args: &RequestArgs) -> Result<StaticConfig, CliError> {
    let mut config = config.clone();
    if let Some(base_url) = &args.base_url {
        config.endpoint.base_url = base_url.clone();
        config.validate()?;
    }
    Ok(config)
}
