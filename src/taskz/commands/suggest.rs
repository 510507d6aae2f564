use crate::ai::{Assistant, TaskBrief};
use crate::error::Result;
use crate::store::DataStore;
use log::warn;

/// How many pending tasks are shown to the assistant as context.
const MAX_BRIEFS: usize = 10;

/// A finite, non-restartable stream of suggestion lines. List markers
/// (numbers, dots, dashes, bullets, stars) are stripped as entries are
/// pulled; lines that were nothing but markers disappear.
pub struct Suggestions {
    inner: std::vec::IntoIter<String>,
}

impl Iterator for Suggestions {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        for raw in self.inner.by_ref() {
            let stripped = strip_list_marker(&raw);
            if !stripped.is_empty() {
                return Some(stripped.to_string());
            }
        }
        None
    }
}

/// Ask the assistant for new task ideas, seeded with up to [`MAX_BRIEFS`]
/// pending tasks plus free-text context. Unavailability and failures both
/// surface as a single explanatory entry, never as an error.
pub fn run<S: DataStore, A: Assistant>(
    store: &S,
    assistant: &A,
    context: &str,
) -> Result<Suggestions> {
    if !assistant.is_available() {
        return Ok(wrap(vec![
            "(Task suggestions unavailable: OpenAI API key not set)".to_string(),
        ]));
    }

    let tasks = store.load();
    let briefs: Vec<TaskBrief> = tasks
        .iter()
        .filter(|t| t.is_pending())
        .take(MAX_BRIEFS)
        .map(|t| TaskBrief {
            title: t.title.clone(),
            description: t.description.clone(),
        })
        .collect();

    let lines = match assistant.suggest(&briefs, context) {
        Ok(lines) => lines,
        Err(e) => {
            warn!("suggestion request failed: {e}");
            return Ok(wrap(vec![format!("(Suggestion error: {e})")]));
        }
    };

    // A reply of nothing but markers and blank lines still deserves output.
    if lines.iter().all(|line| strip_list_marker(line).is_empty()) {
        return Ok(wrap(vec!["No suggestions generated".to_string()]));
    }
    Ok(wrap(lines))
}

fn wrap(lines: Vec<String>) -> Suggestions {
    Suggestions {
        inner: lines.into_iter(),
    }
}

fn strip_list_marker(line: &str) -> &str {
    line.trim()
        .trim_start_matches(|c: char| {
            c.is_ascii_digit() || matches!(c, '.' | '-' | '•' | '*' | ' ')
        })
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use crate::test_utils::{seeded_store, ScriptedAssistant};

    #[test]
    fn strips_list_markers_from_each_entry() {
        let store = InMemoryStore::new();
        let ai = ScriptedAssistant::with_suggestions(&[
            "1. Defrost the freezer",
            "- Wash the car",
            "• Plan the trip",
            "* Sort receipts",
        ]);

        let got: Vec<String> = run(&store, &ai, "").unwrap().collect();
        assert_eq!(
            got,
            [
                "Defrost the freezer",
                "Wash the car",
                "Plan the trip",
                "Sort receipts"
            ]
        );
    }

    #[test]
    fn marker_only_lines_are_dropped() {
        let store = InMemoryStore::new();
        let ai = ScriptedAssistant::with_suggestions(&["1.", "2. Real entry"]);

        let got: Vec<String> = run(&store, &ai, "").unwrap().collect();
        assert_eq!(got, ["Real entry"]);
    }

    #[test]
    fn unavailable_assistant_yields_the_placeholder_entry() {
        let store = InMemoryStore::new();
        let ai = ScriptedAssistant::unavailable();

        let got: Vec<String> = run(&store, &ai, "").unwrap().collect();
        assert_eq!(
            got,
            ["(Task suggestions unavailable: OpenAI API key not set)"]
        );
    }

    #[test]
    fn request_failure_yields_an_error_entry() {
        let store = InMemoryStore::new();
        let ai = ScriptedAssistant::failing();

        let got: Vec<String> = run(&store, &ai, "").unwrap().collect();
        assert_eq!(got.len(), 1);
        assert!(got[0].starts_with("(Suggestion error:"));
    }

    #[test]
    fn empty_reply_yields_the_no_suggestions_entry() {
        let store = InMemoryStore::new();
        let ai = ScriptedAssistant::with_suggestions(&["1.", "-"]);

        let got: Vec<String> = run(&store, &ai, "").unwrap().collect();
        assert_eq!(got, ["No suggestions generated"]);
    }

    #[test]
    fn only_pending_tasks_are_offered_as_context() {
        use crate::commands::complete;

        let mut store = seeded_store(&["Open one", "Closed one"]);
        complete::run(&mut store, 2).unwrap();
        let ai = ScriptedAssistant::recording();

        run(&store, &ai, "spring cleaning").unwrap();
        let (briefs, context) = ai.last_suggest_call().expect("suggest was called");
        assert_eq!(briefs.len(), 1);
        assert_eq!(briefs[0].title, "Open one");
        assert_eq!(context, "spring cleaning");
    }

    #[test]
    fn at_most_ten_briefs_are_passed() {
        let titles: Vec<String> = (1..=12).map(|i| format!("Task {i}")).collect();
        let title_refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        let store = seeded_store(&title_refs);
        let ai = ScriptedAssistant::recording();

        run(&store, &ai, "").unwrap();
        let (briefs, _) = ai.last_suggest_call().expect("suggest was called");
        assert_eq!(briefs.len(), 10);
    }
}
