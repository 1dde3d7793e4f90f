use std::fmt::Display;

pub fn log_format(title: &str, content: &str) -> String {
    format!(
        "\n*** *** *** [{}] *** *** ***\n{}\n*** *** *** [{}] *** *** ***\n\n",
        title, content, title
    )
}

/// Panics with a banner that stands out in logcat. Only for failures that leave nothing to run.
pub trait DisplayExpectation<T> {
    fn display_expect(self, msg: &str) -> T;
}

impl<T, E> DisplayExpectation<T> for Result<T, E>
where
    E: std::fmt::Debug,
{
    fn display_expect(self, msg: &str) -> T {
        self.expect(&log_format("DISPLAY EXPECTATION", msg))
    }
}

impl<T> DisplayExpectation<T> for Option<T> {
    fn display_expect(self, msg: &str) -> T {
        self.expect(&log_format("DISPLAY EXPECTATION", msg))
    }
}

/// Host window calls are fire-and-forget: a failure is logged and the caller carries on.
pub trait BestEffort<T> {
    fn best_effort(self, action: &str) -> Option<T>;
}

impl<T, E> BestEffort<T> for Result<T, E>
where
    E: Display,
{
    fn best_effort(self, action: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("Failed to {}: {}", action, err);
                None
            }
        }
    }
}
