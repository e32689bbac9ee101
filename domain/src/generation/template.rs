//! Category result templates
//!
//! Generation is simulated: the result depends only on the category, plus the
//! prompt text for presentations.

use crate::core::category::Category;

const IMAGE_RESULT: &str = "[Generated Image Would Appear Here]";
const MUSIC_RESULT: &str = "[Generated Music Composition]";
const VIDEO_RESULT: &str = "[Generated Video Content]";

const CODE_RESULT: &str = "```javascript\n// Generated code based on prompt\nfunction example() {\n  console.log(\"Generated code\");\n}\n```";

const MULTI_MODAL_RESULT: &str = "Multi-modal AI Response:
• Text: Generated text response
• Image: Visual interpretation
• Code: Related code snippet
• Audio: Generated sound
• Video: Motion content";

/// Produce the result for `prompt` under `category`. Pure; no randomness.
pub fn render_result(prompt: &str, category: Category) -> String {
    match category {
        Category::Presentation => format!(
            "[Presentation Slides Generated]
1. Title Slide: \"{prompt}\"
2. Introduction
3. Key Points
4. Visual Elements
5. Conclusion"
        ),
        Category::Image => IMAGE_RESULT.to_string(),
        Category::Code => CODE_RESULT.to_string(),
        Category::Music => MUSIC_RESULT.to_string(),
        Category::Video => VIDEO_RESULT.to_string(),
        Category::All => MULTI_MODAL_RESULT.to_string(),
    }
}
