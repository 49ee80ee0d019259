//! The prompt surface: templated fake-user generation.
//!
//! Pure string formatting; no store access.

use rmcp::model::{
    ErrorData, GetPromptResult, JsonObject, Prompt, PromptArgument, PromptMessage,
    PromptMessageContent, PromptMessageRole,
};

/// Name of the fake-user prompt.
pub const GENERATE_FAKE_USER: &str = "generate-fake-user";

/// Prompt definitions and rendering.
#[derive(Clone, Copy, Debug, Default)]
pub struct UserPrompts;

impl UserPrompts {
    /// The prompt definitions served.
    pub fn prompts(&self) -> Vec<Prompt> {
        vec![Prompt::new(
            GENERATE_FAKE_USER,
            Some("Generate a fake user based on a given name"),
            Some(vec![
                PromptArgument::new("name")
                    .with_description("Name to base the generated user on")
                    .with_required(true),
            ]),
        )]
    }

    /// Render a prompt by name.
    ///
    /// Always succeeds given the required `name` argument; missing or
    /// mistyped arguments and unknown prompt names are invalid params.
    pub fn get(
        &self,
        name: &str,
        arguments: Option<&JsonObject>,
    ) -> Result<GetPromptResult, ErrorData> {
        if name != GENERATE_FAKE_USER {
            return Err(ErrorData::invalid_params(
                format!("unknown prompt: {name}"),
                None,
            ));
        }

        let user_name = arguments
            .and_then(|args| args.get("name"))
            .and_then(|v| v.as_str())
            .ok_or_else(|| ErrorData::invalid_params("missing required argument: name", None))?;

        let text = format!(
            "Generate a fake user with the name {user_name}. \
             The user should have a realistic email, address, and phone number."
        );
        Ok(GetPromptResult::new(vec![PromptMessage::new(
            PromptMessageRole::User,
            PromptMessageContent::text(text),
        )]))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;

    fn args(name: &str) -> JsonObject {
        let mut map = JsonObject::new();
        map.insert("name".to_string(), serde_json::json!(name));
        map
    }

    #[test]
    fn test_prompts_listing() {
        let prompts = UserPrompts.prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].name, GENERATE_FAKE_USER);

        let arguments = prompts[0].arguments.as_ref().unwrap();
        assert_eq!(arguments.len(), 1);
        assert_eq!(arguments[0].name, "name");
        assert_eq!(arguments[0].required, Some(true));
    }

    #[test]
    fn test_get_embeds_name() {
        let map = args("Quincy Larson");
        let result = UserPrompts.get(GENERATE_FAKE_USER, Some(&map)).unwrap();

        assert_eq!(result.messages.len(), 1);
        assert!(matches!(
            result.messages[0].role,
            PromptMessageRole::User
        ));
        match &result.messages[0].content {
            PromptMessageContent::Text { text, .. } => {
                assert_eq!(
                    text,
                    "Generate a fake user with the name Quincy Larson. The user \
                     should have a realistic email, address, and phone number."
                );
            }
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn test_get_missing_argument() {
        let err = UserPrompts.get(GENERATE_FAKE_USER, None).unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);

        let empty = JsonObject::new();
        let err = UserPrompts
            .get(GENERATE_FAKE_USER, Some(&empty))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_get_non_string_argument() {
        let mut map = JsonObject::new();
        map.insert("name".to_string(), serde_json::json!(42));
        let err = UserPrompts.get(GENERATE_FAKE_USER, Some(&map)).unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_get_unknown_prompt() {
        let map = args("A");
        let err = UserPrompts.get("other-prompt", Some(&map)).unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }
}
