use crate::utils::consts::BITS_PER_BYTE;

/// Expand a byte into its bits, most significant first.
///
/// Always yields exactly eight bits, so every byte splits into four whole
/// symbols and the modulator never sees a dangling bit.
pub fn byte_to_bits(byte: u8) -> [bool; BITS_PER_BYTE] {
    std::array::from_fn(|i| byte & (0x80 >> i) != 0)
}
