use crate::error::CalcError;
use crate::matrix::matrix::Matrix;

/// Parse validated, comma-terminated matrix text into a `Matrix`.
///
/// Scans left to right over one span at a time: a space closes the pending
/// entry, a comma closes the pending row. Normalization already removed
/// separator noise, but the scan re-checks the preceding character so a stray
/// double separator never yields an empty span. Rows of uneven width are
/// zero-padded by `Matrix::from_rows`.
pub fn parse(input: &str) -> Result<Matrix, CalcError> {
    let chars: Vec<char> = input.chars().collect();
    let mut matrix: Vec<Vec<f64>> = vec![];
    let mut row: Vec<f64> = vec![];
    let mut start = 0;

    for (j, &c) in chars.iter().enumerate() {
        if c == ' ' {
            if j > 0 && chars[j - 1] != ' ' && chars[j - 1] != ',' {
                row.push(entry(&chars[start..j])?);
                start = j + 1;
            }
        } else if c == ',' {
            if j > 0 && chars[j - 1] != ',' {
                row.push(entry(&chars[start..j])?);
                matrix.push(std::mem::take(&mut row));
            }
            start = j + 1;
        }
    }

    Ok(Matrix::from_rows(matrix))
}

fn entry(span: &[char]) -> Result<f64, CalcError> {
    let token: String = span.iter().collect();
    token
        .parse()
        .map_err(|_| CalcError::NotANumber(token.clone()))
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::parse;
    use crate::error::CalcError;
    use crate::input::validate::validate;

    fn parse_raw(raw: &str) -> Vec<Vec<f64>> {
        parse(&validate(raw).unwrap()).unwrap().to_rows()
    }

    #[test]
    fn test_parse_three_by_three() {
        assert_eq!(
            parse_raw("1 2 3, 4 5 6, 7 8 9,"),
            vec![
                vec![1.0, 2.0, 3.0],
                vec![4.0, 5.0, 6.0],
                vec![7.0, 8.0, 9.0],
            ]
        );
    }

    #[test]
    fn test_trailing_comma_is_optional() {
        assert_eq!(
            parse_raw("1 2 3, 4 5 6, 7 8 9"),
            parse_raw("1 2 3, 4 5 6, 7 8 9,")
        );
    }

    #[test]
    fn test_parse_signed_and_decimal_entries() {
        assert_eq!(
            parse_raw("-1.5 2, 0.25 -3,"),
            vec![vec![-1.5, 2.0], vec![0.25, -3.0]]
        );
    }

    #[test]
    fn test_parse_round_trips_through_text() {
        use itertools::Itertools;

        let rows = parse_raw("1 2.5 3, 4 5 -6,");
        let text = rows
            .iter()
            .map(|row| row.iter().map(|x| x.to_string()).join(" "))
            .join(", ");
        assert_eq!(parse_raw(&text), rows);
    }

    #[test]
    fn test_malformed_token_is_a_structured_error() {
        // a lone minus sign survives validation but is not a number
        assert_eq!(
            parse(&validate("1 -, 2 3").unwrap()),
            Err(CalcError::NotANumber("-".into()))
        );
        assert_eq!(
            parse(&validate("1 2-3 4").unwrap()),
            Err(CalcError::NotANumber("2-3".into()))
        );
    }

    #[test]
    fn test_ragged_rows_are_zero_padded() {
        assert_eq!(
            parse_raw("1 2 3, 4,"),
            vec![vec![1.0, 2.0, 3.0], vec![4.0, 0.0, 0.0]]
        );
    }
}
