/// Monday-first day names, indexed by grid column.
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub fn name_of(index: usize) -> Option<&'static str> {
    DAY_NAMES.get(index).copied()
}

/// Parse a CLI day reference: a column index (`0`..`6`), a full name
/// or a three-letter abbreviation, case-insensitive.
pub fn parse_day(input: &str) -> Option<usize> {
    let s = input.trim();

    if let Ok(i) = s.parse::<usize>() {
        return (i < 7).then_some(i);
    }

    let lower = s.to_lowercase();
    DAY_NAMES.iter().position(|name| {
        let n = name.to_lowercase();
        n == lower || (lower.len() == 3 && n.starts_with(&lower))
    })
}
