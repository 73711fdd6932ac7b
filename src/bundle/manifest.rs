//! JAR manifest parsing
//!
//! Only the main section is read: it ends at the first blank line. Attribute
//! names compare case-insensitively and lines starting with a single space
//! continue the previous value.

/// Location of the manifest inside a JAR
pub const MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";

/// Attribute naming the application class of a Spring Boot fat jar
pub const START_CLASS_ATTRIBUTE: &str = "Start-Class";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Manifest {
    main_attributes: Vec<(String, String)>,
}

impl Manifest {
    /// Parse raw manifest bytes.
    ///
    /// Continuation lines are joined before decoding, so a multi-byte
    /// character split by the 72-byte line wrap survives. Invalid UTF-8 is
    /// replaced rather than rejected.
    pub fn parse(bytes: &[u8]) -> Self {
        let mut raw: Vec<(Vec<u8>, Vec<u8>)> = Vec::new();

        for line in split_lines(bytes) {
            if line.is_empty() {
                break;
            }
            if let Some(continuation) = line.strip_prefix(b" ") {
                if let Some((_, value)) = raw.last_mut() {
                    value.extend_from_slice(continuation);
                }
                continue;
            }
            let Some(colon) = line.iter().position(|&b| b == b':') else {
                continue;
            };
            let (name, value) = (&line[..colon], &line[colon + 1..]);
            let value = value.strip_prefix(b" ").unwrap_or(value);
            raw.push((name.to_vec(), value.to_vec()));
        }

        let main_attributes = raw
            .into_iter()
            .map(|(name, value)| {
                (
                    String::from_utf8_lossy(&name).trim().to_string(),
                    String::from_utf8_lossy(&value).into_owned(),
                )
            })
            .collect();
        Self { main_attributes }
    }

    /// Value of a main attribute, first occurrence wins
    pub fn main_attribute(&self, name: &str) -> Option<&str> {
        self.main_attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Split on `\r\n`, `\n` or `\r`; a trailing terminator adds no empty line.
fn split_lines(bytes: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&bytes[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&bytes[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    if start < bytes.len() {
        lines.push(&bytes[start..]);
    }
    lines
}
