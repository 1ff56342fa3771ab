/// A closed set of CSS keyword values (`flex-direction`, gradient directions,
/// border-radius units and so on).
pub trait Keyword: Copy + PartialEq + 'static {
    /// Every value, in the order the controls list them.
    const ALL: &'static [Self];

    /// The literal written into CSS.
    fn keyword(self) -> &'static str;

    /// Human readable label for controls.
    fn label(self) -> &'static str;

    fn from_keyword(keyword: &str) -> Option<Self> {
        let keyword = keyword.trim();
        Self::ALL.iter().copied().find(|k| k.keyword() == keyword)
    }
}

/// Declares a keyword enum together with its `Keyword`, `Display` and serde
/// impls. Each variant maps to the CSS literal and a control label.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $keyword:literal, $label:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $($(#[$vmeta])* #[serde(rename = $keyword)] $variant,)+
        }

        impl $crate::css::Keyword for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn keyword(self) -> &'static str {
                match self {
                    $(Self::$variant => $keyword,)+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::css::Keyword::keyword(*self))
            }
        }
    };
}

pub(crate) use keyword_enum;
