//! Server and server variable builders.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex_lite::Regex;
use serde_json::{Map, Value};
use tracing::debug;

use crate::extensions::extract_extensions;
use crate::fields::{array, object, text, text_list};
use crate::model::{Server, ServerVariable};
use crate::tags::build_tags;

static SERVER_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+$").expect("server name pattern is valid")
});

/// Whether a key is usable as a server identifier.
pub fn is_valid_server_name(name: &str) -> bool {
    SERVER_NAME.is_match(name)
}

/// Build the `servers` map.
///
/// An entry is kept only if its key is a valid server name and it carries
/// both `url` and `protocol`; anything else is dropped whole.
pub fn build_servers(servers: &Map<String, Value>) -> IndexMap<String, Server> {
    let mut built = IndexMap::new();

    for (name, value) in servers {
        if !is_valid_server_name(name) {
            debug!(event = "entry_dropped", server = %name, "server dropped: invalid name");
            continue;
        }

        match value.as_object().and_then(build_server) {
            Some(server) => {
                built.insert(name.clone(), server);
            }
            None => {
                debug!(
                    event = "entry_dropped",
                    server = %name,
                    "server dropped: missing 'url' or 'protocol'"
                );
            }
        }
    }

    built
}

fn build_server(obj: &Map<String, Value>) -> Option<Server> {
    let url = text(obj, "url")?;
    let protocol = text(obj, "protocol")?;

    let tags = array(obj, "tags")
        .map(|items| build_tags(items))
        .unwrap_or_default();

    let variables = object(obj, "variables")
        .map(build_server_variables)
        .unwrap_or_default();

    Some(Server {
        url,
        protocol,
        protocol_version: text(obj, "protocolVersion"),
        description: text(obj, "description"),
        tags,
        variables,
        extensions: extract_extensions(obj),
    })
}

/// Build the `variables` map of a server. Entries are never rejected.
pub fn build_server_variables(variables: &Map<String, Value>) -> IndexMap<String, ServerVariable> {
    variables
        .iter()
        .map(|(name, value)| {
            let variable = value
                .as_object()
                .map(build_server_variable)
                .unwrap_or_default();
            (name.clone(), variable)
        })
        .collect()
}

fn build_server_variable(obj: &Map<String, Value>) -> ServerVariable {
    ServerVariable {
        enum_values: text_list(obj, "enum"),
        default: text(obj, "default"),
        description: text(obj, "description"),
        examples: text_list(obj, "examples"),
        extensions: extract_extensions(obj),
    }
}
