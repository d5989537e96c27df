use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::error::Error;
use crate::util::client;

/// A framework registered with the master.  `tasks` is how many tasks the
/// state document lists for it, which is all this tool needs to know about
/// them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Framework {
    pub name: String,
    pub id: String,
    pub tasks: usize,
}

/// The part of the master's state document that matters here.  The real
/// document is much larger; everything else is ignored.  `frameworks` stays
/// untyped so that shape validation can report the type actually observed.
#[derive(Debug, Deserialize)]
pub struct StateDocument {
    pub frameworks: Option<Value>,
}

/// Fetch the master's state document and return the frameworks whose names
/// match `pattern`, in the order the master lists them.  Zero matches is not
/// an error.
pub fn find_matching_frameworks(master: &str, pattern: &str) -> Result<Vec<Framework>, Error> {
    let regex = Regex::new(pattern)?;

    let url = format!("http://{master}/state.json");
    tracing::debug!(url, "fetching state document");
    let body = client()?.get(&url).send()?.text()?;

    let state: StateDocument = serde_json::from_str(&body)?;
    matching_frameworks(&state, &regex)
}

/// Pick the matching frameworks out of an already-fetched state document.  A
/// malformed framework entry fails the whole document, even if enough
/// well-formed entries matched already.
pub fn matching_frameworks(state: &StateDocument, regex: &Regex) -> Result<Vec<Framework>, Error> {
    let nodes = require_array("frameworks", state.frameworks.as_ref())?;

    let mut matching = Vec::new();
    for node in nodes {
        let framework = framework_from_node(node)?;
        if regex.is_match(&framework.name) {
            matching.push(framework);
        }
    }

    Ok(matching)
}

///////////////////////////////////////////////////////////////////////////////

fn framework_from_node(node: &Value) -> Result<Framework, Error> {
    let object = require_object("framework", Some(node))?;

    let name = require_str("framework name", object.get("name"))?;
    let id = require_str("framework id", object.get("id"))?;
    let tasks = require_array("framework tasks", object.get("tasks"))?;

    Ok(Framework {
        name: name.to_string(),
        id: id.to_string(),
        tasks: tasks.len(),
    })
}

fn require_array<'a>(
    node: &'static str,
    value: Option<&'a Value>,
) -> Result<&'a Vec<Value>, Error> {
    match value {
        Some(Value::Array(elements)) => Ok(elements),
        other => Err(unexpected(node, "an array", other)),
    }
}

fn require_object<'a>(
    node: &'static str,
    value: Option<&'a Value>,
) -> Result<&'a serde_json::Map<String, Value>, Error> {
    match value {
        Some(Value::Object(fields)) => Ok(fields),
        other => Err(unexpected(node, "an object", other)),
    }
}

fn require_str<'a>(node: &'static str, value: Option<&'a Value>) -> Result<&'a str, Error> {
    match value {
        Some(Value::String(s)) => Ok(s),
        other => Err(unexpected(node, "a string", other)),
    }
}

fn unexpected(node: &'static str, expected: &'static str, actual: Option<&Value>) -> Error {
    Error::UnexpectedNode {
        node,
        expected,
        actual: json_type(actual),
    }
}

/// Human name for the JSON type of a value, `absent` for a missing one.
fn json_type(value: Option<&Value>) -> &'static str {
    match value {
        None => "absent",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "a boolean",
        Some(Value::Number(_)) => "a number",
        Some(Value::String(_)) => "a string",
        Some(Value::Array(_)) => "an array",
        Some(Value::Object(_)) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(json: &str) -> StateDocument {
        serde_json::from_str(json).unwrap()
    }

    fn regex(pattern: &str) -> Regex {
        Regex::new(pattern).unwrap()
    }

    fn framework(name: &str, id: &str, tasks: usize) -> Framework {
        Framework {
            name: name.to_string(),
            id: id.to_string(),
            tasks,
        }
    }

    #[test]
    fn matches_keep_the_order_of_the_document() {
        let state = state(
            r#"{"frameworks":[
                {"name":"marathon","id":"f1","tasks":[{},{}]},
                {"name":"chronos","id":"f2","tasks":[]},
                {"name":"marathon-staging","id":"f3","tasks":[{}]}
            ]}"#,
        );

        let frameworks = matching_frameworks(&state, &regex("marathon")).unwrap();

        assert_eq!(
            frameworks,
            vec![
                framework("marathon", "f1", 2),
                framework("marathon-staging", "f3", 1),
            ]
        );
    }

    #[test]
    fn task_count_is_the_length_of_the_tasks_array() {
        let state = state(r#"{"frameworks":[{"name":"job-a","id":"f1","tasks":[{},{}]}]}"#);

        let frameworks = matching_frameworks(&state, &regex("job")).unwrap();

        assert_eq!(frameworks, vec![framework("job-a", "f1", 2)]);
    }

    #[test]
    fn pattern_matches_anywhere_in_the_name() {
        let state = state(
            r#"{"frameworks":[
                {"name":"marathon","id":"f1","tasks":[]},
                {"name":"spark","id":"f2","tasks":[]}
            ]}"#,
        );

        let frameworks = matching_frameworks(&state, &regex("ar")).unwrap();

        assert_eq!(frameworks.len(), 2);
    }

    #[test]
    fn anchors_restrict_the_match() {
        let state = state(
            r#"{"frameworks":[
                {"name":"marathon","id":"f1","tasks":[]},
                {"name":"marathon-staging","id":"f2","tasks":[]}
            ]}"#,
        );

        let frameworks = matching_frameworks(&state, &regex("^marathon$")).unwrap();

        assert_eq!(frameworks, vec![framework("marathon", "f1", 0)]);
    }

    #[test]
    fn zero_matches_is_not_an_error() {
        let state = state(r#"{"frameworks":[{"name":"marathon","id":"f1","tasks":[]}]}"#);

        let frameworks = matching_frameworks(&state, &regex("chronos")).unwrap();

        assert_eq!(frameworks, Vec::new());
    }

    #[test]
    fn missing_frameworks_node() {
        let state = state(r#"{"cluster":"dev"}"#);

        let error = matching_frameworks(&state, &regex("a")).unwrap_err();

        assert_eq!(
            error.to_string(),
            "frameworks node should be an array, actual absent"
        );
    }

    #[test]
    fn frameworks_node_of_the_wrong_type() {
        let state = state(r#"{"frameworks":"not a list"}"#);

        let error = matching_frameworks(&state, &regex("a")).unwrap_err();

        assert_eq!(
            error.to_string(),
            "frameworks node should be an array, actual a string"
        );
    }

    #[test]
    fn framework_entry_that_is_not_an_object() {
        let state = state(r#"{"frameworks":[42]}"#);

        let error = matching_frameworks(&state, &regex("a")).unwrap_err();

        assert_eq!(
            error.to_string(),
            "framework node should be an object, actual a number"
        );
    }

    #[test]
    fn framework_without_a_name() {
        let state = state(r#"{"frameworks":[{"id":"f1","tasks":[]}]}"#);

        let error = matching_frameworks(&state, &regex("a")).unwrap_err();

        assert_eq!(
            error.to_string(),
            "framework name node should be a string, actual absent"
        );
    }

    #[test]
    fn framework_with_a_non_string_id() {
        let state = state(r#"{"frameworks":[{"name":"marathon","id":7,"tasks":[]}]}"#);

        let error = matching_frameworks(&state, &regex("a")).unwrap_err();

        assert_eq!(
            error.to_string(),
            "framework id node should be a string, actual a number"
        );
    }

    #[test]
    fn framework_with_non_array_tasks() {
        let state = state(r#"{"frameworks":[{"name":"marathon","id":"f1","tasks":3}]}"#);

        let error = matching_frameworks(&state, &regex("a")).unwrap_err();

        assert_eq!(
            error.to_string(),
            "framework tasks node should be an array, actual a number"
        );
    }

    #[test]
    fn one_bad_entry_fails_the_whole_document() {
        let state = state(
            r#"{"frameworks":[
                {"name":"marathon","id":"f1","tasks":[]},
                {"name":null,"id":"f2","tasks":[]}
            ]}"#,
        );

        let error = matching_frameworks(&state, &regex("marathon")).unwrap_err();

        assert_eq!(
            error.to_string(),
            "framework name node should be a string, actual null"
        );
    }
}
