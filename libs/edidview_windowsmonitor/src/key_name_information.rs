//! Text recovery from the kernel's key-name information block.
//!
//! Querying a registry key for its name returns a structural header (a
//! 4-byte length field, i.e. two UTF-16 units) followed by the raw path
//! text. The text is not reliably null-terminated, so the byte count
//! reported by the query itself is the only authority for its extent.

/// Size of the structural prefix before the path text, in UTF-16 units.
const NAME_HEADER_UTF16_UNITS: usize = 2;

/// Extracts the canonical registry path from a key-name information buffer.
///
/// `reported_byte_count` is the length the kernel reported for the whole
/// information block, header included. Trailing zero-fill that the kernel
/// did not overwrite is trimmed; no terminator scan is performed.
pub fn key_path_from_name_information(
    name_information: &[u16],
    reported_byte_count: usize,
) -> Result<String, std::string::FromUtf16Error> {
    let reported_units = reported_byte_count / std::mem::size_of::<u16>();
    let available_units = reported_units.min(name_information.len());
    if available_units <= NAME_HEADER_UTF16_UNITS {
        return Ok(String::new());
    }

    let name_units = &name_information[NAME_HEADER_UTF16_UNITS..available_units];
    let text_end = name_units
        .iter()
        .rposition(|&unit| unit != 0)
        .map_or(0, |position| position + 1);

    String::from_utf16(&name_units[..text_end])
}

#[cfg(test)]
mod tests {
    use super::key_path_from_name_information;

    const SAMPLE_PATH: &str =
        "\\REGISTRY\\MACHINE\\SYSTEM\\ControlSet001\\Enum\\DISPLAY\\GSM5B09\\5&2d4b7a0&0&UID4352\\Device Parameters";

    /// Builds the block the kernel hands back: a little-endian byte-length
    /// header followed by unterminated path text.
    fn name_information_for(path: &str) -> Vec<u16> {
        let text: Vec<u16> = path.encode_utf16().collect();
        let byte_length = (text.len() * 2) as u32;
        let mut block = vec![(byte_length & 0xFFFF) as u16, (byte_length >> 16) as u16];
        block.extend_from_slice(&text);
        block
    }

    #[test]
    fn recovers_the_path_without_a_terminator() {
        let block = name_information_for(SAMPLE_PATH);
        let reported = block.len() * 2;
        let path = key_path_from_name_information(&block, reported).expect("valid UTF-16");
        assert_eq!(path, SAMPLE_PATH);
    }

    #[test]
    fn extent_comes_from_the_reported_count_not_the_buffer() {
        let mut block = name_information_for(SAMPLE_PATH);
        let reported = block.len() * 2;
        // stale data past the reported count must never leak into the path
        block.extend("GARBAGE".encode_utf16());
        let path = key_path_from_name_information(&block, reported).expect("valid UTF-16");
        assert_eq!(path, SAMPLE_PATH);
    }

    #[test]
    fn trailing_zero_fill_is_trimmed() {
        let mut block = name_information_for(SAMPLE_PATH);
        block.extend([0u16, 0u16]);
        let reported = block.len() * 2;
        let path = key_path_from_name_information(&block, reported).expect("valid UTF-16");
        assert_eq!(path, SAMPLE_PATH);
    }

    #[test]
    fn header_only_block_yields_an_empty_path() {
        let block = name_information_for("");
        let path = key_path_from_name_information(&block, block.len() * 2).expect("valid UTF-16");
        assert_eq!(path, "");
    }

    #[test]
    fn reported_count_larger_than_the_buffer_is_clamped() {
        let block = name_information_for(SAMPLE_PATH);
        let path = key_path_from_name_information(&block, block.len() * 2 + 64).expect("valid UTF-16");
        assert_eq!(path, SAMPLE_PATH);
    }
}
