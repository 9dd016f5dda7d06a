//! Render layer: chart SVG, HTML wrapper, console summary.

pub mod chart;
pub mod html;
pub mod summary;

/// "1 thread" / "2 threads" / "16 processes".
pub(crate) fn pluralize(noun: &str, n: u32) -> String {
    if n == 1 {
        noun.to_string()
    } else if noun.ends_with('s') {
        format!("{noun}es")
    } else {
        format!("{noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::pluralize;
    use pretty_assertions::assert_eq;

    #[test]
    fn pluralizes_worker_nouns() {
        assert_eq!(pluralize("thread", 1), "thread");
        assert_eq!(pluralize("thread", 16), "threads");
        assert_eq!(pluralize("process", 1), "process");
        assert_eq!(pluralize("process", 16), "processes");
    }
}
