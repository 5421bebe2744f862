//! Gemini `generateContent` integration.
//!
//! `wire` holds the JSON bodies exchanged with the endpoint, `transport` the
//! trait that performs the POST.

pub mod transport;
pub mod wire;

pub use transport::{HttpReply, ReqwestTransport, Transport};
pub use wire::{extract_candidate_text, GenerateContentRequest};

/// Build the prompt that embeds `schema_text` and asks for bare JSON.
pub fn build_prompt(schema_text: &str) -> String {
    format!(
        "You are a fashion and apparel expert. Analyze the clothing item in the provided image.\n\
         Based on your analysis, generate a JSON object that strictly adheres to the following schema.\n\
         Do not add any text or formatting before or after the JSON object.\n\
         \n\
         JSON Schema:\n\
         {schema_text}\n\
         \n\
         Analyze the image and provide the JSON output."
    )
}
