pub mod n0076 {
    use tracing::debug;

    use crate::algo::counter::AsciiCounter;
    use crate::error::{Result, WindowError};

    /// Shortest substring of `s` containing every letter of `t` at least as
    /// many times as `t` does.
    ///
    /// `Ok(None)` means no window of `s` covers `t`. An empty `t` is covered
    /// by the empty window, which gives `Ok(Some(""))`.
    pub fn min_window<'a>(s: &'a str, t: &str) -> Result<Option<&'a str>> {
        if let Some(c) = t.chars().find(|c| !c.is_ascii_alphabetic()) {
            debug!(?c, "unexpected target character");
            return Err(WindowError::InvalidArgument(format!(
                "target may only contain ASCII letters, found {:?}",
                c
            )));
        }
        if t.is_empty() {
            return Ok(Some(""));
        }

        let need: AsciiCounter = t.bytes().collect();
        let bytes = s.as_bytes();
        let mut have = AsciiCounter::new();
        let mut best: Option<(usize, usize)> = None;
        let mut left = 0;
        for (right, &b) in bytes.iter().enumerate() {
            have.add(b);
            // a covering window always holds a letter of t, so left <= right
            while have.covers(&need) {
                if best.map_or(true, |(l, r)| right - left < r - l) {
                    debug!(left, right, "shorter covering window");
                    best = Some((left, right));
                }
                have.remove(bytes[left]);
                left += 1;
            }
        }
        // the shortest window starts and ends on letters of t, so both ends
        // fall on char boundaries
        Ok(best.and_then(|(l, r)| s.get(l..=r)))
    }
}
