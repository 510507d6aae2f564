use super::{Assessment, Assistant, AssistantError, TaskBrief};
use crate::model::DEFAULT_PRIORITY;
use chrono::NaiveDate;
use log::debug;
use serde::Deserialize;
use serde_json::json;
use std::fmt::Write as _;
use std::time::Duration;

const ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const MODEL: &str = "gpt-4o-mini";

// The upstream call has no natural deadline; without a cap a dead network
// stalls the whole command.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Chat-completions backed [`Assistant`]. Unavailable (and silent) when no
/// API key was provided.
pub struct OpenAiAssistant {
    api_key: Option<String>,
    agent: ureq::Agent,
}

impl OpenAiAssistant {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.is_empty()),
            agent: ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build(),
        }
    }

    fn chat(
        &self,
        prompt: String,
        max_tokens: u32,
        temperature: f64,
    ) -> Result<String, AssistantError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AssistantError::Transport("no API key configured".into()))?;

        debug!("chat completion request ({max_tokens} max tokens)");
        let response = self
            .agent
            .post(ENDPOINT)
            .set("Authorization", &format!("Bearer {key}"))
            .send_json(json!({
                "model": MODEL,
                "messages": [{"role": "user", "content": prompt}],
                "max_tokens": max_tokens,
                "temperature": temperature,
            }))
            .map_err(|e| AssistantError::Transport(e.to_string()))?;

        let completion: ChatCompletion = response
            .into_json()
            .map_err(|e| AssistantError::Malformed(e.to_string()))?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| AssistantError::Malformed("reply carried no choices".into()))
    }
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl Assistant for OpenAiAssistant {
    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    fn summarize(&self, title: &str, description: &str) -> Result<String, AssistantError> {
        let prompt = format!(
            "Summarize the following task concisely (<= 30 words).\n\
             Title: {title}\nDescription: {description}"
        );
        self.chat(prompt, 60, 0.4)
    }

    fn assess_priority(
        &self,
        title: &str,
        description: &str,
        due_date: Option<NaiveDate>,
    ) -> Result<Assessment, AssistantError> {
        let description = if description.is_empty() {
            "N/A"
        } else {
            description
        };
        let due = due_date.map_or_else(|| "Not set".to_string(), |d| d.to_string());
        let prompt = format!(
            "You are a task prioritization expert. Analyze the following task and assign \
             a priority level from 1 (highest/most urgent) to 5 (lowest/least urgent).\n\n\
             Task Title: {title}\n\
             Description: {description}\n\
             Due Date: {due}\n\n\
             Consider:\n\
             - Urgency (due date proximity)\n\
             - Importance (impact and consequences)\n\
             - Dependencies and blocking factors\n\
             - Complexity and time required\n\n\
             Respond with ONLY a single number (1-5) and a brief explanation (max 40 words) \
             in this format:\n\
             Priority: <number>\n\
             Reason: <explanation>"
        );
        let reply = self.chat(prompt, 100, 0.3)?;
        Ok(parse_assessment(&reply))
    }

    fn suggest(
        &self,
        pending: &[TaskBrief],
        context: &str,
    ) -> Result<Vec<String>, AssistantError> {
        let mut prompt = String::from(
            "You are a productivity assistant. Based on the following information, \
             suggest 3-5 new tasks that would be helpful.\n\n",
        );
        if !pending.is_empty() {
            prompt.push_str("Current pending tasks:\n");
            for brief in pending {
                let _ = write!(prompt, "- {}", brief.title);
                if !brief.description.is_empty() {
                    let _ = write!(prompt, ": {}", brief.description);
                }
                prompt.push('\n');
            }
            prompt.push('\n');
        }
        if !context.is_empty() {
            let _ = writeln!(prompt, "Additional context: {context}\n");
        }
        prompt.push_str(
            "Provide task suggestions as a simple list. Each suggestion should be concise \
             (one line per task). Format: just the task title/description, no numbers or bullets.",
        );

        let reply = self.chat(prompt, 300, 0.7)?;
        Ok(reply
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }
}

/// Parse the `Priority:`/`Reason:` reply shape. Anything unparseable or out
/// of range lands on the default priority.
fn parse_assessment(reply: &str) -> Assessment {
    let mut priority = None;
    let mut rationale = String::new();

    for line in reply.lines() {
        if let Some(rest) = line.strip_prefix("Priority:") {
            priority = Some(match rest.trim().parse::<i64>() {
                Ok(n) if (1..=5).contains(&n) => n as u8,
                _ => DEFAULT_PRIORITY,
            });
        } else if let Some(rest) = line.strip_prefix("Reason:") {
            rationale = rest.trim().to_string();
        }
    }

    Assessment {
        priority: priority.unwrap_or(DEFAULT_PRIORITY),
        rationale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_key_the_assistant_is_unavailable() {
        assert!(!OpenAiAssistant::new(None).is_available());
        assert!(!OpenAiAssistant::new(Some(String::new())).is_available());
        assert!(OpenAiAssistant::new(Some("sk-test".into())).is_available());
    }

    #[test]
    fn parses_well_formed_assessments() {
        let a = parse_assessment("Priority: 2\nReason: Due soon and blocks other work.");
        assert_eq!(a.priority, 2);
        assert_eq!(a.rationale, "Due soon and blocks other work.");
    }

    #[test]
    fn out_of_range_priority_falls_back_to_default() {
        assert_eq!(parse_assessment("Priority: 9\nReason: x").priority, 3);
        assert_eq!(parse_assessment("Priority: 0").priority, 3);
    }

    #[test]
    fn unparseable_priority_falls_back_to_default() {
        assert_eq!(parse_assessment("Priority: high\nReason: x").priority, 3);
        assert_eq!(parse_assessment("Nothing useful here").priority, 3);
    }

    #[test]
    fn rationale_is_optional() {
        let a = parse_assessment("Priority: 4");
        assert_eq!(a.priority, 4);
        assert!(a.rationale.is_empty());
    }
}
