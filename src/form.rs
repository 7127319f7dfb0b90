/// Raw text of the two table fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableForm {
    pub color: String,
    pub seats: String,
}

impl TableForm {
    pub fn clear(&mut self) {
        self.color.clear();
        self.seats.clear();
    }

    /// The color and seat count to submit, or `None` if either field is unusable.
    pub fn validated(&self, max_seats: u32) -> Option<(&str, u32)> {
        if self.color.trim().is_empty() {
            return None;
        }
        let seats = parse_seat_count(&self.seats, max_seats)?;
        Some((self.color.as_str(), seats))
    }
}

/// Parses a seat count, ignoring surrounding whitespace. Decimals are cut to
/// their whole part; anything below one or above `max` is refused.
pub fn parse_seat_count(text: &str, max: u32) -> Option<u32> {
    let value = text.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
    let whole = value.trunc();
    if whole < 1.0 || whole > f64::from(max) {
        return None;
    }
    // in 1..=max, so the cast is exact
    Some(whole as u32)
}
