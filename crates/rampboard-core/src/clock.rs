//! Free-form `HHMM` clock strings as
//! they appear in ETD attributes.
//!
//! Input is never validated beyond
//! digit extraction: `"9:30"`, `"930"`
//! and `"0930"` all read as 09:30, and
//! out-of-range parts such as `"2575"`
//! are carried through the arithmetic
//! unchanged.

/// Suffix appended to every rendered
/// clock value.
pub const UNIT_SUFFIX: &str = "hrs";

/// Lead time between an RT and the
/// ETD it is derived from.
pub const RT_OFFSET_MINUTES: u64 = 75;

pub const MINUTES_PER_DAY: u64 =
  24 * 60;

fn digits(value: &str) -> String {
  value
    .chars()
    .filter(char::is_ascii_digit)
    .collect()
}

fn pad4(digits: &str) -> String {
  format!("{digits:0>4}")
}

/// Display form of a raw time value.
///
/// Values without any digit are
/// returned unchanged.
pub fn normalize(value: &str) -> String {
  let digits = digits(value);
  if digits.is_empty() {
    return value.to_string();
  }
  format!("{}{UNIT_SUFFIX}", pad4(&digits))
}

/// Minutes since midnight, or `None`
/// when the value holds no digit.
///
/// The first two padded digits are the
/// hours, everything after them the
/// minutes. The minute run is folded
/// modulo a day, so any digit string
/// yields a value.
pub fn to_minutes(
  value: &str
) -> Option<u64> {
  let digits = digits(value);
  if digits.is_empty() {
    return None;
  }
  let padded = pad4(&digits);
  let (hours, mins) =
    padded.as_bytes().split_at(2);
  let hours = u64::from(hours[0] - b'0')
    * 10
    + u64::from(hours[1] - b'0');
  let mins =
    mins.iter().fold(0_u64, |acc, b| {
      (acc * 10 + u64::from(b - b'0'))
        % MINUTES_PER_DAY
    });
  Some(hours * 60 + mins)
}

fn format_minutes(
  minutes: u64
) -> String {
  let minutes = minutes % MINUTES_PER_DAY;
  format!(
    "{:02}{:02}{UNIT_SUFFIX}",
    minutes / 60,
    minutes % 60
  )
}

/// RT for an ETD value: the ETD minus
/// [`RT_OFFSET_MINUTES`], wrapped onto
/// the 24 hour clock.
pub fn derive_rt(
  value: &str
) -> Option<String> {
  let minutes = to_minutes(value)?;
  let rt = (minutes % MINUTES_PER_DAY
    + MINUTES_PER_DAY
    - RT_OFFSET_MINUTES)
    % MINUTES_PER_DAY;
  Some(format_minutes(rt))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn normalize_pads_and_suffixes() {
    assert_eq!(normalize("930"), "0930hrs");
    assert_eq!(
      normalize("18:15"),
      "1815hrs"
    );
    assert_eq!(normalize("5"), "0005hrs");
  }

  #[test]
  fn normalize_passes_through_non_digits()
  {
    assert_eq!(normalize("TBD"), "TBD");
    assert_eq!(normalize(""), "");
  }

  #[test]
  fn derives_rt_seventy_five_minutes_earlier()
  {
    assert_eq!(
      derive_rt("930").as_deref(),
      Some("0815hrs")
    );
    assert_eq!(
      derive_rt("1815").as_deref(),
      Some("1700hrs")
    );
  }

  #[test]
  fn rt_wraps_past_midnight() {
    assert_eq!(
      derive_rt("0030").as_deref(),
      Some("2315hrs")
    );
    assert_eq!(
      derive_rt("0115").as_deref(),
      Some("0000hrs")
    );
    assert_eq!(
      derive_rt("0").as_deref(),
      Some("2245hrs")
    );
  }

  #[test]
  fn rt_not_computable_without_digits() {
    assert_eq!(derive_rt("--:--"), None);
    assert_eq!(derive_rt(""), None);
  }

  #[test]
  fn rt_matches_modular_formula_for_every_minute()
  {
    for hours in 0..24_u64 {
      for mins in 0..60_u64 {
        let input =
          format!("{hours:02}{mins:02}");
        let total = hours * 60 + mins;
        let expected = (total + 1440 - 75)
          % 1440;
        assert_eq!(
          derive_rt(&input),
          Some(format!(
            "{:02}{:02}hrs",
            expected / 60,
            expected % 60
          )),
          "input {input}"
        );
      }
    }
  }

  #[test]
  fn out_of_range_parts_are_not_validated()
  {
    // 25h75m = 1575 minutes, one day
    // later is 135, minus 75 is 60.
    assert_eq!(
      to_minutes("2575"),
      Some(1575)
    );
    assert_eq!(
      derive_rt("2575").as_deref(),
      Some("0100hrs")
    );
    // 12h345m
    assert_eq!(
      derive_rt("12345").as_deref(),
      Some("1630hrs")
    );
  }

  #[test]
  fn long_digit_runs_stay_computable() {
    // 12h plus 10^25 - 1 minutes; the
    // minutes fold to 639.
    let long =
      format!("12{}", "9".repeat(25));
    assert_eq!(
      to_minutes(&long),
      Some(12 * 60 + 639)
    );
    assert_eq!(
      derive_rt(&long).as_deref(),
      Some("2124hrs")
    );
  }
}
