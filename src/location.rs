//! On-disk location of a loaded assembly.
//!
//! The primary `location` is blank for assemblies loaded from a byte buffer or
//! through some shadow-copy setups. In that case the `code_base` URI, if any,
//! is decoded into a filesystem path.

use percent_encoding::percent_decode_str;
use url::Url;

use crate::identity::Assembly;

/// Best-effort filesystem path of `assembly`, or `None` when neither the
/// location nor the code base yields a non-blank path.
pub fn assembly_location(assembly: &Assembly) -> Option<String> {
    if !assembly.location.trim().is_empty() {
        return Some(assembly.location.clone());
    }

    let code_base = assembly.code_base.as_deref()?;
    if code_base.trim().is_empty() {
        return None;
    }

    let decoded = decode_code_base(code_base);
    if decoded.trim().is_empty() {
        tracing::debug!(target: "xmldoc", "code base {code_base:?} decoded to a blank path");
        return None;
    }
    Some(decoded)
}

/// Strip the scheme from a code base URI and percent-decode its path.
///
/// Strings that do not parse as absolute URIs (including bare drive paths
/// such as `C:\lib\a.dll`) are percent-decoded verbatim.
pub fn decode_code_base(code_base: &str) -> String {
    match Url::parse(code_base) {
        Ok(url) if url.scheme().len() > 1 => {
            let path = percent_decode_str(url.path()).decode_utf8_lossy();
            match url.host_str() {
                Some(host) if url.scheme() == "file" && !host.is_empty() => {
                    format!("//{host}{path}")
                }
                _ => strip_drive_slash(&path).to_string(),
            }
        }
        _ => percent_decode_str(code_base).decode_utf8_lossy().into_owned(),
    }
}

// "/C:/dir/a.dll" -> "C:/dir/a.dll"
fn strip_drive_slash(path: &str) -> &str {
    let bytes = path.as_bytes();
    if bytes.len() >= 3 && bytes[0] == b'/' && bytes[1].is_ascii_alphabetic() && bytes[2] == b':' {
        &path[1..]
    } else {
        path
    }
}
