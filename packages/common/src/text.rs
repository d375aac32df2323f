/// Convert a dashed CSS property name to camelCase (`margin-top` → `marginTop`)
pub fn dashed_to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if ch == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Convert a camelCase property name to dashed form (`marginTop` → `margin-top`)
pub fn camel_to_dashed(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_uppercase() {
            out.push('-');
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Lowercase, collapse non-alphanumeric runs to single hyphens, trim
/// leading and trailing hyphens. Used for export filenames.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashed_to_camel() {
        assert_eq!(dashed_to_camel("margin-top"), "marginTop");
        assert_eq!(dashed_to_camel("border-bottom-width"), "borderBottomWidth");
        assert_eq!(dashed_to_camel("color"), "color");
    }

    #[test]
    fn test_camel_to_dashed() {
        assert_eq!(camel_to_dashed("marginTop"), "margin-top");
        assert_eq!(camel_to_dashed("borderBottomWidth"), "border-bottom-width");
        assert_eq!(camel_to_dashed("color"), "color");
    }

    #[test]
    fn test_round_trip() {
        assert_eq!(dashed_to_camel(&camel_to_dashed("backgroundColor")), "backgroundColor");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("My Landing Page!"), "my-landing-page");
        assert_eq!(slugify("  --Dashboard v2  "), "dashboard-v2");
        assert_eq!(slugify("simple"), "simple");
    }
}
