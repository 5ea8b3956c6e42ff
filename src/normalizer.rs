use crate::model::NormalizedRequest;

// "Ryzen 5" and "Mobility Radeon" are the only two-word family names.
const TWO_WORD_FAMILIES: &[&str] = &["ryzen", "mobility"];

/// Splits a chat message into family and model tokens.
///
/// Returns `None` when the message has no separable family/model pair.
pub fn normalize(raw: &str) -> Option<NormalizedRequest> {
    let text = raw.trim().to_lowercase();

    let max_parts = if TWO_WORD_FAMILIES.iter().any(|prefix| text.starts_with(prefix)) {
        3
    } else {
        2
    };
    let parts = split_max(&text, max_parts);
    if parts.len() < max_parts {
        return None;
    }

    let (family, model) = parts.split_at(max_parts - 1);
    let family = underscored(&family.join(" "));
    let model = underscored(model[0]);
    if family.is_empty() || model.is_empty() {
        return None;
    }

    Some(NormalizedRequest { family, model })
}

/// Whitespace split yielding at most `max` parts, the last one keeping the remainder.
fn split_max(text: &str, max: usize) -> Vec<&str> {
    let mut parts = Vec::with_capacity(max);
    let mut rest = text.trim();
    while !rest.is_empty() {
        if parts.len() + 1 == max {
            parts.push(rest);
            break;
        }
        match rest.split_once(char::is_whitespace) {
            Some((head, tail)) => {
                parts.push(head);
                rest = tail.trim_start();
            }
            None => {
                parts.push(rest);
                break;
            }
        }
    }
    parts
}

fn underscored(token: &str) -> String {
    token.trim().replace(' ', "_")
}
