use super::{Segment, ValueType};

const SLASH: u8 = b'/';
const OPEN: u8 = b'{';
const CLOSE: u8 = b'}';
const COLON: char = ':';
const OPTIONAL: char = '?';

/// Unreserved and sub-delim URL characters, plus the gen-delims a route may carry.
#[inline]
fn is_url_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"-_.~:?#[]@!$&'()*+,;=".contains(&b)
}

#[inline]
fn scan(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|&b| !is_url_char(b))
        .map_or(bytes.len(), |n| start + n)
}

/// Splits `pattern` into tokens.
///
/// A token is either `{` + url chars (+ an optional `}`) or a run of url chars.
/// Characters that start neither are skipped, so an unclosed brace still yields
/// a placeholder that ends with the segment.
pub(super) fn compile(pattern: &str) -> Vec<Segment> {
    let bytes = pattern.as_bytes();
    let mut segments: Vec<Segment> = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let open = match bytes[i] {
            OPEN => Some(i + 1),
            SLASH if bytes.get(i + 1) == Some(&OPEN) => Some(i + 2),
            _ => None,
        };

        if let Some(start) = open {
            let end = scan(bytes, start);
            if end > start {
                segments.push(placeholder(&pattern[start..end]));
                i = if bytes.get(end) == Some(&CLOSE) {
                    end + 1
                } else {
                    end
                };
                continue;
            }
        }

        let end = scan(bytes, i);
        if end > i {
            segments.push(Segment::literal(&pattern[i..end]));
            i = if bytes.get(end) == Some(&SLASH) {
                end + 1
            } else {
                end
            };
            continue;
        }

        i += 1;
    }

    segments
}

fn placeholder(spec: &str) -> Segment {
    let (name, ty) = match spec.find(COLON) {
        Some(pos) => (&spec[..pos], Some(&spec[pos + 1..])),
        None => (spec, None),
    };

    let mut optional = false;

    let name = match name.strip_suffix(OPTIONAL) {
        Some(n) => {
            optional = true;
            n
        }
        None => name,
    };

    let value_type = match ty {
        None => ValueType::None,
        Some(ty) => match ty.strip_suffix(OPTIONAL) {
            Some(t) => {
                optional = true;
                ValueType::from_name(t)
            }
            None => ValueType::from_name(ty),
        },
    };

    Segment::placeholder(name, value_type, optional)
}
