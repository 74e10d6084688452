use std::sync::LazyLock;

use hashbrown::HashMap as FastHashMap;
use memchr::memchr;
use regex::{Captures, Regex};

use crate::pattern::{PatternError, PatternResult, RouteOption};
use crate::types::{PARAM_BEGIN, PARAM_END};

pub type Params = FastHashMap<String, RouteOption>;

// name[:validation][(min,max)][=setting]
// A trailing `(digits,digits)` group is always read as length bounds, even right
// after `:`: `<id:(1,3)>` has no validation and bounds 1..=3.
static CAPTURE_SYNTAX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<name>[^:(=]*)(?::(?P<validation>[^=]*?))?(?:\((?P<min>\d*),(?P<max>\d*)\))?(?:=(?P<setting>.*))?$",
    )
    .expect("capture syntax should compile")
});

/// Parses every `<...>` capture of a parameter segment.
///
/// Returns the canonical segment (each capture reduced to `<name>`) and the
/// options keyed by capture name.
#[tracing::instrument(level = "trace", skip_all, fields(segment = %segment))]
pub fn parse_param_options(segment: &str) -> PatternResult<(String, Params)> {
    let mut canonical = String::with_capacity(segment.len());
    let mut params = Params::new();
    let mut rest = segment;
    let mut after_capture = false;

    while let Some(open) = memchr(PARAM_BEGIN, rest.as_bytes()) {
        let literal = &rest[..open];
        if literal.is_empty() && after_capture {
            return Err(PatternError::AdjacentParameters {
                segment: segment.to_string(),
            });
        }
        canonical.push_str(literal);

        let inner = &rest[open + 1..];
        let close =
            memchr(PARAM_END, inner.as_bytes()).ok_or_else(|| PatternError::UnterminatedParameter {
                segment: segment.to_string(),
            })?;
        let (name, option) = parse_capture(segment, &inner[..close])?;

        if params.contains_key(&name) {
            return Err(PatternError::DuplicateParamName {
                segment: segment.to_string(),
                name,
            });
        }

        canonical.push(PARAM_BEGIN as char);
        canonical.push_str(&name);
        canonical.push(PARAM_END as char);
        params.insert(name, option);

        rest = &inner[close + 1..];
        after_capture = true;
    }

    if params.is_empty() {
        return Err(PatternError::NotAParameter {
            segment: segment.to_string(),
        });
    }
    canonical.push_str(rest);

    Ok((canonical, params))
}

fn parse_capture(segment: &str, body: &str) -> PatternResult<(String, RouteOption)> {
    let Some(caps) = CAPTURE_SYNTAX.captures(body) else {
        // only a malformed `(min,max)` group can fail the syntax once the name is valid
        let split = body.find([':', '(', '=']).unwrap_or(body.len());
        let name = &body[..split];
        validate_param_name(segment, name)?;
        return Err(PatternError::InvalidLengthBounds {
            segment: segment.to_string(),
            name: name.to_string(),
            bounds: body[split..].to_string(),
        });
    };

    let name = capture(&caps, "name");
    validate_param_name(segment, name)?;

    let (min_length, max_length) = parse_bounds(
        segment,
        name,
        capture(&caps, "min"),
        capture(&caps, "max"),
    )?;
    let option = RouteOption {
        validation: capture(&caps, "validation").to_string(),
        setting: capture(&caps, "setting").to_string(),
        min_length,
        max_length,
    };
    option.validation_regex(name)?;

    Ok((name.to_string(), option))
}

fn capture<'h>(caps: &Captures<'h>, key: &str) -> &'h str {
    caps.name(key).map_or("", |m| m.as_str())
}

fn parse_bounds(segment: &str, name: &str, min: &str, max: &str) -> PatternResult<(u8, u8)> {
    let invalid = || PatternError::InvalidLengthBounds {
        segment: segment.to_string(),
        name: name.to_string(),
        bounds: format!("({min},{max})"),
    };
    let parse = |raw: &str| -> PatternResult<u8> {
        if raw.is_empty() {
            Ok(0)
        } else {
            raw.parse::<u8>().map_err(|_| invalid())
        }
    };

    let (min_length, max_length) = (parse(min)?, parse(max)?);
    if min_length > 0 && max_length > 0 && min_length > max_length {
        return Err(invalid());
    }
    Ok((min_length, max_length))
}

fn validate_param_name(segment: &str, name: &str) -> PatternResult<()> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(PatternError::ParameterNameEmpty {
            segment: segment.to_string(),
        });
    };

    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(PatternError::ParameterInvalidStart {
            segment: segment.to_string(),
            name: name.to_string(),
            found: first,
        });
    }

    if let Some(invalid) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(PatternError::ParameterInvalidCharacter {
            segment: segment.to_string(),
            name: name.to_string(),
            invalid,
        });
    }

    Ok(())
}
