/// Rewrite raw matrix text into its canonical form.
///
/// Removes dangling and duplicate decimal points, strips spaces and commas
/// from the edges, and collapses interior runs of spaces and commas so that
/// entries are separated by exactly one space and rows by exactly one comma.
/// Total over any input; an empty result means there was nothing numeric to
/// keep (the validator classifies that case).
pub fn normalize(raw: &str) -> String {
    let deduped = drop_dangling_periods(raw);

    let trimmed = deduped
        .trim_start_matches([' ', ','])
        .trim_end_matches(' ');

    collapse_separators(trimmed)
}

// A period glues itself to whatever follows: spaces after it are deleted,
// and if that leaves it facing another period, a comma, or the end of the
// input, the period itself is deleted. Ending trimmed text with a period
// would let the validator's appended comma change what a second
// normalization sees.
fn drop_dangling_periods(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '.' {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let mut next = i + 1;
        while next < chars.len() && chars[next] == ' ' {
            next += 1;
        }

        if next >= chars.len() || chars[next] == '.' || chars[next] == ',' {
            i += 1; // duplicate or dangling, skip the period itself
        } else {
            out.push('.');
            i = next;
        }
    }

    out
}

fn collapse_separators(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            ' ' => {
                while i < chars.len() && chars[i] == ' ' {
                    i += 1;
                }
                // a run of spaces before a comma vanishes entirely
                if i < chars.len() && chars[i] != ',' {
                    out.push(' ');
                }
            }
            ',' => {
                out.push(',');
                i += 1;
                while i < chars.len() && (chars[i] == ',' || chars[i] == ' ') {
                    i += 1;
                }
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
