pub struct Bold;

impl Bold {
    pub const MARKER: &'static str = "**";
    pub const DELIM: &'static [u8] = Self::MARKER.as_bytes();
}
