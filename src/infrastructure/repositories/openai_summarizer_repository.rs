use super::summarizer_repository::SummarizerRepository;
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;

/// OpenAI chat-completion implementation of the summarizer boundary
pub struct OpenAiSummarizerRepository {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
}

impl OpenAiSummarizerRepository {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String) -> Self {
        Self { client, model }
    }
}

#[async_trait]
impl SummarizerRepository for OpenAiSummarizerRepository {
    async fn summarize(&self, text: &str, max_chars: usize) -> Result<String, String> {
        tracing::info!(
            model = %self.model,
            text_length = text.len(),
            max_chars,
            "Calling OpenAI chat completion for summarization"
        );

        let system_prompt = format!(
            "Summarize the user's text so it can be read aloud. \
             The summary must be at most {} characters long. \
             Reply with the summary only, no preamble.",
            max_chars
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.clone())
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(system_prompt)
                    .build()
                    .map_err(|e| format!("OpenAI request build error: {}", e))?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(text)
                    .build()
                    .map_err(|e| format!("OpenAI request build error: {}", e))?
                    .into(),
            ])
            .build()
            .map_err(|e| format!("OpenAI request build error: {}", e))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                model = %self.model,
                text_length = text.len(),
                "OpenAI summarization call failed"
            );
            format!("OpenAI summarization error: {}", e)
        })?;

        let summary = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| "OpenAI returned no summary".to_string())?;

        let summary = summary.trim().to_string();
        tracing::debug!(summary_length = summary.len(), "Summary received");

        Ok(summary)
    }
}
