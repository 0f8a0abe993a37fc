//! Prompt templates, one per use-case. User text is embedded verbatim.

use crate::models::{ColorTheme, EditStyle, MemeStyle, PosterStyle, StoryStyle};

pub fn edit_prompt(instruction: &str, style: EditStyle) -> String {
    format!(
        "Modify the uploaded image according to: \"{}\". Style: {}. \
         Preserve main objects unless instructed to change. \
         Maintain realistic lighting and perspective.",
        instruction, style
    )
}

pub fn storybook_page_prompt(page_text: &str, style: StoryStyle) -> String {
    format!(
        "Generate a comic panel from the following story page: \"{}\". Style: {}. \
         The image should not contain any text. \
         The image should be visually appealing for a children's storybook.",
        page_text, style
    )
}

/// The poster text is context only; the directive keeps it out of the image.
pub fn poster_prompt(text: &str, style: PosterStyle, color_theme: ColorTheme) -> String {
    format!(
        "Generate a visually striking poster background. The poster text will be \"{}\". \
         The style should be: {}. The color theme should be: {}. \
         The design must be high-impact, focusing on composition and readability, \
         leaving appropriate space for the text to be overlaid later. \
         Do NOT include the text in the image.",
        text, style, color_theme
    )
}

pub fn meme_prompt(caption: &str, style: MemeStyle) -> String {
    format!(
        "Generate a funny or expressive image that would work as a meme background \
         for the caption: \"{}\". Style: {}. \
         The image must leave ample clear space for text overlay. \
         Do NOT include any text in the image itself. \
         The image should be humorous and relatable.",
        caption, style
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_prompt_embeds_instruction_and_style() {
        let prompt = edit_prompt("add a pirate hat", EditStyle::PixelArt);
        assert!(prompt.contains("\"add a pirate hat\""));
        assert!(prompt.contains("Style: pixel-art."));
        assert!(prompt.contains("Preserve main objects"));
        assert!(prompt.contains("realistic lighting and perspective"));
    }

    #[test]
    fn storybook_prompt_forbids_text() {
        let prompt = storybook_page_prompt("The fox ran home.", StoryStyle::Watercolor);
        assert!(prompt.contains("\"The fox ran home.\""));
        assert!(prompt.contains("Style: watercolor."));
        assert!(prompt.contains("should not contain any text"));
        assert!(prompt.contains("comic panel"));
    }

    #[test]
    fn poster_prompt_reserves_space_and_excludes_text() {
        let prompt = poster_prompt(
            "Summer Music Festival",
            PosterStyle::Futuristic,
            ColorTheme::Neon,
        );
        assert!(prompt.contains("\"Summer Music Festival\""));
        assert!(prompt.contains("The style should be: futuristic."));
        assert!(prompt.contains("The color theme should be: neon."));
        assert!(prompt.contains("space for the text to be overlaid"));
        assert!(prompt.contains("Do NOT include the text in the image."));
    }

    #[test]
    fn meme_prompt_reserves_space_and_excludes_text() {
        let prompt = meme_prompt("One does not simply...", MemeStyle::VintagePhoto);
        assert!(prompt.contains("\"One does not simply...\""));
        assert!(prompt.contains("Style: vintage-photo."));
        assert!(prompt.contains("ample clear space for text overlay"));
        assert!(prompt.contains("Do NOT include any text in the image itself."));
    }

    #[test]
    fn builders_are_deterministic() {
        assert_eq!(
            edit_prompt("make it night", EditStyle::Manga),
            edit_prompt("make it night", EditStyle::Manga)
        );
        assert_eq!(
            poster_prompt("Sale", PosterStyle::Grunge, ColorTheme::EarthTones),
            poster_prompt("Sale", PosterStyle::Grunge, ColorTheme::EarthTones)
        );
        assert_eq!(
            meme_prompt("me irl", MemeStyle::Surreal),
            meme_prompt("me irl", MemeStyle::Surreal)
        );
        assert_eq!(
            storybook_page_prompt("A.", StoryStyle::Anime),
            storybook_page_prompt("A.", StoryStyle::Anime)
        );
    }

    #[test]
    fn builders_accept_arbitrary_text() {
        let odd = "quotes \" and\nnewlines {}";
        assert!(meme_prompt(odd, MemeStyle::Cartoon).contains(odd));
        assert!(edit_prompt("", EditStyle::Realistic).contains("\"\""));
    }
}
