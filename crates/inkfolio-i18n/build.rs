//! Build script for inkfolio-i18n crate
//!
//! Validates every Fluent locale file under `locales/` at compile time:
//! - All Fluent syntax is valid
//! - All locale files have the same message ids
//! - Variables referenced by a message match across translations
//! - No message is left without a value

use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use fluent_syntax::ast::{Entry, Expression, InlineExpression, Pattern, PatternElement};
use fluent_syntax::parser::parse;

type Messages = BTreeMap<String, BTreeSet<String>>;

/// Extract message ids and the variables each one references
fn extract_messages_and_params(content: &str) -> Result<Messages, String> {
    let resource = parse(content).map_err(|(_, errors)| format!("Parse errors: {errors:?}"))?;

    let mut messages = BTreeMap::new();

    for entry in resource.body {
        if let Entry::Message(message) = entry {
            let key = message.id.name.to_string();
            let mut params = BTreeSet::new();

            match message.value {
                Some(Pattern { elements }) => extract_params_from_pattern(&elements, &mut params),
                None => return Err(format!("Message '{key}' has no value")),
            }

            for attribute in message.attributes {
                let Pattern { elements } = attribute.value;
                extract_params_from_pattern(&elements, &mut params);
            }

            if messages.insert(key.clone(), params).is_some() {
                return Err(format!("Duplicate message id '{key}'"));
            }
        }
    }

    Ok(messages)
}

/// Recursively extract variable names from pattern elements
fn extract_params_from_pattern<S>(elements: &[PatternElement<S>], params: &mut BTreeSet<String>)
where
    S: AsRef<str> + ToString,
{
    for element in elements {
        if let PatternElement::Placeable { expression } = element {
            extract_params_from_expression(expression, params);
        }
    }
}

/// Extract variable names from expressions
fn extract_params_from_expression<S>(expression: &Expression<S>, params: &mut BTreeSet<String>)
where
    S: AsRef<str> + ToString,
{
    match expression {
        Expression::Select { selector, variants } => {
            extract_params_from_inline_expression(selector, params);
            for variant in variants {
                let Pattern { elements } = &variant.value;
                extract_params_from_pattern(elements, params);
            }
        }
        Expression::Inline(inline) => {
            extract_params_from_inline_expression(inline, params);
        }
    }
}

/// Extract variable names from inline expressions
fn extract_params_from_inline_expression<S>(
    expression: &InlineExpression<S>,
    params: &mut BTreeSet<String>,
) where
    S: AsRef<str> + ToString,
{
    match expression {
        InlineExpression::VariableReference { id } => {
            params.insert(id.name.to_string());
        }
        InlineExpression::FunctionReference { arguments, .. } => {
            for arg in &arguments.positional {
                extract_params_from_inline_expression(arg, params);
            }
            for arg in &arguments.named {
                extract_params_from_inline_expression(&arg.value, params);
            }
        }
        InlineExpression::Placeable { expression } => {
            extract_params_from_expression(expression, params);
        }
        InlineExpression::MessageReference { .. }
        | InlineExpression::TermReference { .. }
        | InlineExpression::StringLiteral { .. }
        | InlineExpression::NumberLiteral { .. } => {}
    }
}

/// Find `locales/<code>/main.ftl` for every locale directory
fn find_locale_files(locales_dir: &Path) -> Result<BTreeMap<String, PathBuf>, String> {
    if !locales_dir.exists() {
        return Err(format!(
            "Locales directory not found: {}",
            locales_dir.display()
        ));
    }

    let mut locale_files = BTreeMap::new();

    let entries = fs::read_dir(locales_dir)
        .map_err(|e| format!("Failed to read locales directory: {e}"))?;
    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to read directory entry: {e}"))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let locale_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| format!("Invalid locale directory name: {}", path.display()))?;

        let main_ftl = path.join("main.ftl");
        if main_ftl.exists() {
            println!("cargo:rerun-if-changed={}", main_ftl.display());
            locale_files.insert(locale_name.to_string(), main_ftl);
        }
    }

    if locale_files.is_empty() {
        return Err("No locale files found".to_string());
    }

    Ok(locale_files)
}

fn validate_locales() -> Result<(), String> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").map_err(|_| "CARGO_MANIFEST_DIR not set")?;
    let locales_dir = Path::new(&manifest_dir).join("../../locales");
    println!("cargo:rerun-if-changed={}", locales_dir.display());

    let locale_files = find_locale_files(&locales_dir)?;

    let mut all_messages: BTreeMap<String, Messages> = BTreeMap::new();
    let mut errors = Vec::new();

    for (locale, path) in &locale_files {
        let parsed = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))
            .and_then(|content| extract_messages_and_params(&content));
        match parsed {
            Ok(messages) => {
                all_messages.insert(locale.clone(), messages);
            }
            Err(e) => errors.push(format!("{locale}: {e}")),
        }
    }

    if !errors.is_empty() {
        return Err(format!("Validation errors:\n{}", errors.join("\n")));
    }

    // "en" is the primary language; compare everything else against it.
    let reference_locale = if all_messages.contains_key("en") {
        "en".to_string()
    } else {
        all_messages.keys().next().cloned().unwrap_or_default()
    };
    let Some(reference) = all_messages.get(&reference_locale) else {
        return Ok(());
    };

    for (locale, messages) in &all_messages {
        if *locale == reference_locale {
            continue;
        }

        for key in reference.keys().filter(|k| !messages.contains_key(*k)) {
            errors.push(format!("{locale}: Missing message id '{key}'"));
        }

        for key in messages.keys().filter(|k| !reference.contains_key(*k)) {
            errors.push(format!("{locale}: Extra message id '{key}'"));
        }

        for (key, ref_params) in reference {
            if let Some(params) = messages.get(key) {
                if ref_params != params {
                    errors.push(format!(
                        "{locale}: Variable mismatch for '{key}'. Expected: {ref_params:?}, Found: {params:?}"
                    ));
                }
            }
        }
    }

    if !errors.is_empty() {
        return Err(format!("Consistency errors:\n{}", errors.join("\n")));
    }

    Ok(())
}

fn main() {
    if let Err(e) = validate_locales() {
        eprintln!("Locale validation failed:\n{e}");
        process::exit(1);
    }
}
