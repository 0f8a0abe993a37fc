use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declares a style selector: wire value (`as_str`), human label, the full
/// option list in display order, and the default option.
macro_rules! style_enum {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident {
            $($variant:ident => ($value:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownStyle;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    other => Err(UnknownStyle {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStyle {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownStyle {}

style_enum! {
    /// Style / mode for the image editor.
    EditStyle, default = Realistic {
        Realistic => ("realistic", "Realistic"),
        Manga => ("manga", "Manga"),
        Minimalist => ("minimalist", "Minimalist"),
        PixelArt => ("pixel-art", "Pixel Art"),
    }
}

style_enum! {
    /// Illustration style for storybook pages.
    StoryStyle, default = WhimsicalCartoon {
        WhimsicalCartoon => ("whimsical-cartoon", "Whimsical Cartoon"),
        Watercolor => ("watercolor", "Watercolor"),
        ClassicStorybook => ("storybook-illustration", "Classic Storybook"),
        Anime => ("anime", "Anime"),
    }
}

style_enum! {
    PosterStyle, default = Minimalist {
        Minimalist => ("minimalist", "Minimalist"),
        Vintage => ("vintage", "Vintage"),
        Futuristic => ("futuristic", "Futuristic"),
        Grunge => ("grunge", "Grunge"),
    }
}

style_enum! {
    ColorTheme, default = Monochrome {
        Monochrome => ("monochrome", "Monochrome"),
        VibrantPastels => ("vibrant-pastels", "Vibrant Pastels"),
        Neon => ("neon", "Neon"),
        EarthTones => ("earth-tones", "Earth Tones"),
    }
}

style_enum! {
    MemeStyle, default = Photorealistic {
        Photorealistic => ("photorealistic", "Photorealistic"),
        Cartoon => ("cartoon", "Cartoon"),
        Surreal => ("surreal", "Surreal"),
        VintagePhoto => ("vintage-photo", "Vintage Photo"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_form_initial_values() {
        assert_eq!(EditStyle::default(), EditStyle::Realistic);
        assert_eq!(StoryStyle::default().as_str(), "whimsical-cartoon");
        assert_eq!(PosterStyle::default(), PosterStyle::Minimalist);
        assert_eq!(ColorTheme::default(), ColorTheme::Monochrome);
        assert_eq!(MemeStyle::default(), MemeStyle::Photorealistic);
    }

    #[test]
    fn parses_wire_values() {
        assert_eq!("pixel-art".parse::<EditStyle>(), Ok(EditStyle::PixelArt));
        assert_eq!(
            "storybook-illustration".parse::<StoryStyle>(),
            Ok(StoryStyle::ClassicStorybook)
        );
        let err = "Neon".parse::<ColorTheme>().unwrap_err();
        assert_eq!(err.to_string(), "unknown ColorTheme 'Neon'");
    }

    #[test]
    fn option_lists_keep_display_order() {
        let labels: Vec<&str> = MemeStyle::ALL.iter().map(MemeStyle::label).collect();
        assert_eq!(
            labels,
            vec!["Photorealistic", "Cartoon", "Surreal", "Vintage Photo"]
        );
        assert_eq!(ColorTheme::VibrantPastels.to_string(), "vibrant-pastels");
    }

    #[test]
    fn serde_uses_wire_values() {
        let json = serde_json::to_string(&PosterStyle::Futuristic).unwrap();
        assert_eq!(json, "\"futuristic\"");
        let back: EditStyle = serde_json::from_str("\"manga\"").unwrap();
        assert_eq!(back, EditStyle::Manga);
    }
}
