//! Reload the type list and print the enumeration

use super::open::preferences;
use anyhow::Result;
use roottag_scene::SceneWorld;
use roottag_sync::{EventBus, Session};
use roottag_types::{EnumItem, EnumerationDomain};
use std::path::Path;

pub fn run(list: Option<&Path>, format: &str) -> Result<()> {
    let prefs = preferences(list)?;
    if prefs.type_list_path().is_none() {
        anyhow::bail!(
            "No GameObject type list configured; use `roottag config set-list <path>` or --list"
        );
    }

    let mut bus = EventBus::new();
    let session = Session::register::<SceneWorld>(prefs, &mut bus, None);

    let output = render(session.context().current_domain(), format)?;
    println!("{}", output);
    if !session.context().source_readable() {
        eprintln!("Type list could not be read; only \"None\" is available");
    }

    session.unregister(&mut bus);
    Ok(())
}

fn render(domain: &EnumerationDomain, format: &str) -> Result<String> {
    match format {
        "text" => Ok(domain
            .items()
            .iter()
            .map(|item| format!("{:>3}  {}", item.value, item.identifier))
            .collect::<Vec<_>>()
            .join("\n")),
        "toml" => {
            #[derive(serde::Serialize)]
            struct Wrapper<'a> {
                types: &'a [EnumItem],
            }
            Ok(toml::to_string_pretty(&Wrapper {
                types: domain.items(),
            })?)
        }
        _ => anyhow::bail!("Unknown format: {}", format),
    }
}
