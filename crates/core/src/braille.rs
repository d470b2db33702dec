//! Unicode braille to device character mapping.
//!
//! Text embossers accept North American ASCII braille, one byte per cell.
//! The table below lists the ASCII character for each of the 64 six-dot
//! patterns U+2800–U+283F, indexed by the dot bits of the code point.
//! Eight-dot patterns (U+2840–U+28FF) carry dots 7 and 8 in bits 6 and 7;
//! ASCII braille cannot express those dots, so they are masked off and the
//! six-dot entry is used.

/// ASCII braille characters indexed by six-dot pattern value.
const UNICODE_TO_ASCII: &[u8; 64] =
    br#" A1B'K2L@CIF/MSP"E3H9O6R^DJG>NTQ,*5<-U8V.%[$+X!&;:4\0Z7(_?W]#Y)="#;

/// First code point of the Unicode braille patterns block.
pub const BRAILLE_BLOCK_START: u32 = 0x2800;
/// Last code point of the Unicode braille patterns block.
pub const BRAILLE_BLOCK_END: u32 = 0x28FF;

/// Map one Unicode braille cell to its device (ASCII braille) byte.
///
/// Returns `None` for any character outside U+2800–U+28FF.
pub fn to_device_byte(cell: char) -> Option<u8> {
    let cp = cell as u32;
    if (BRAILLE_BLOCK_START..=BRAILLE_BLOCK_END).contains(&cp) {
        Some(UNICODE_TO_ASCII[((cp - BRAILLE_BLOCK_START) & 0x3F) as usize])
    } else {
        None
    }
}
