use crate::error::CalcError;
use crate::input::normalize::normalize;

/// Check raw matrix text and return its canonical, comma-terminated form.
///
/// Rejections are classified: empty input, input left empty by normalization
/// (nothing numeric in it), or a character outside the allowed set. The
/// allowed set is digits, `.`, `,`, space and `-`; a lone `-` or `.` that
/// passes here is caught by the parser as `NotANumber`.
///
/// Idempotent on accepted output: re-validating it returns it unchanged.
pub fn validate(raw: &str) -> Result<String, CalcError> {
    if raw.is_empty() {
        return Err(CalcError::EmptyInput);
    }

    let mut cleaned = normalize(raw);
    if cleaned.is_empty() {
        return Err(CalcError::NoNumericEntries);
    }

    if let Some(bad) = cleaned
        .chars()
        .find(|c| !c.is_ascii_digit() && !matches!(c, '.' | ',' | ' ' | '-'))
    {
        return Err(CalcError::InvalidCharacter(bad));
    }

    // every row is comma-terminated for the parser
    if !cleaned.ends_with(',') {
        cleaned.push(',');
    }

    Ok(cleaned)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
