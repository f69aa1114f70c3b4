pub struct Italic;

impl Italic {
    pub const MARKER: &'static str = "_";
    pub const DELIM: &'static [u8] = Self::MARKER.as_bytes();
}
