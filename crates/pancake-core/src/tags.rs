// File: crates/pancake-core/src/tags.rs
// Summary: Supported tag names and one builder function per tag, generated from a table.

use std::fmt;

use crate::node::Element;

macro_rules! tags {
    ($($variant:ident => $name:literal, $builder:ident;)*) => {
        /// Every element name the node tree can emit.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Tag {
            $($variant,)*
        }

        impl Tag {
            pub const ALL: &'static [Tag] = &[$(Tag::$variant,)*];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Tag::$variant => $name,)*
                }
            }

            /// Look a tag up by its markup name.
            pub fn from_name(name: &str) -> Option<Tag> {
                match name {
                    $($name => Some(Tag::$variant),)*
                    _ => None,
                }
            }
        }

        $(
            #[doc = concat!("Start an empty `<", $name, ">` element.")]
            pub fn $builder() -> Element {
                Element::new(Tag::$variant)
            }
        )*
    };
}

tags! {
    Html => "html", html;
    Head => "head", head;
    Style => "style", style;
    Body => "body", body;
    H1 => "h1", h1;
    H2 => "h2", h2;
    Div => "div", div;
    P => "p", p;
    Em => "em", em;
    Span => "span", span;
    Svg => "svg", svg;
    Path => "path", path;
    PancakeChart => "pancake-chart", pancake_chart;
    PancakeBox => "pancake-box", pancake_box;
    PancakeGrid => "pancake-grid", pancake_grid;
    PancakeGridItem => "pancake-grid-item", pancake_grid_item;
    PancakePoint => "pancake-point", pancake_point;
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
