/// Hard line break: two spaces immediately followed by a newline.
pub struct LineBreak;

impl LineBreak {
    pub const MARKER: &'static [u8] = b"  \n";
}
