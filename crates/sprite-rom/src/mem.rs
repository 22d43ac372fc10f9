//! Mem file serialization.
//!
//! A mem file is plain text: one lowercase hexadecimal code per line, no
//! `0x` prefix, no zero padding, no address column. Line *i* is the value
//! preloaded at ROM address *i*, so line order is the address map and must
//! never be reordered or deduplicated.

use std::io::{self, Write};

/// Write packed codes to `w`, one hex line per code, in input order.
pub fn write_mem<W: Write>(w: &mut W, codes: &[u32]) -> io::Result<()> {
    for &code in codes {
        writeln!(w, "{:x}", code)?;
    }
    Ok(())
}

/// Serialize packed codes into an in-memory mem file. Convenience wrapper
/// around [`write_mem`] for tests and small inputs.
pub fn to_mem_string(codes: &[u32]) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec cannot fail.
    write_mem(&mut buf, codes).expect("write to Vec is infallible");
    String::from_utf8(buf).expect("hex output is always ASCII")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_line_per_code_in_order() {
        let out = to_mem_string(&[0xf00, 0x0, 0xabc, 0xf00]);
        assert_eq!(out, "f00\n0\nabc\nf00\n");
    }

    #[test]
    fn test_lowercase_no_prefix_no_padding() {
        let out = to_mem_string(&[0xDEAD, 0x1, 0x0]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["dead", "1", "0"]);
        for line in lines {
            assert!(!line.starts_with("0x"), "line {:?} must not carry a prefix", line);
            assert!(
                line.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
                "line {:?} must be lowercase hex",
                line
            );
        }
    }

    #[test]
    fn test_line_count_matches_code_count() {
        let codes: Vec<u32> = (0..1024).collect();
        let out = to_mem_string(&codes);
        assert_eq!(out.lines().count(), 1024);
        assert!(out.ends_with('\n'), "last line must be newline terminated");
    }

    #[test]
    fn test_empty_input_produces_empty_file() {
        assert_eq!(to_mem_string(&[]), "");
    }

    #[test]
    fn test_write_mem_propagates_io_error() {
        /// Writer that always fails.
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "broken pipe"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        assert!(write_mem(&mut Broken, &[1]).is_err());
    }
}
