/// Colour slots that make up an iTerm2 colour scheme.
///
/// Order matters: exported files list their fields in this order.
pub const COLOUR_FIELDS: [&str; 20] = [
    "Background Color",
    "Foreground Color",
    "Cursor Color",
    "Cursor Text Color",
    "Ansi 0 Color",
    "Ansi 1 Color",
    "Ansi 2 Color",
    "Ansi 3 Color",
    "Ansi 4 Color",
    "Ansi 5 Color",
    "Ansi 6 Color",
    "Ansi 7 Color",
    "Ansi 8 Color",
    "Ansi 9 Color",
    "Ansi 10 Color",
    "Ansi 11 Color",
    "Ansi 12 Color",
    "Ansi 13 Color",
    "Ansi 14 Color",
    "Ansi 15 Color",
];

pub fn is_colour_field(name: &str) -> bool {
    COLOUR_FIELDS.contains(&name)
}
