use tracing::trace;

use crate::error::{ChartError, ChartResult};

use super::ChartConfig;

impl ChartConfig {
    /// Removes every series whose `name` is one of `names`.
    ///
    /// Relative order of the remaining series is preserved, duplicate names
    /// are all removed and unnamed series never match. Returns the number of
    /// removed entries; zero matches is not an error.
    pub fn remove_series<S: AsRef<str>>(&mut self, names: &[S]) -> ChartResult<usize> {
        if names.is_empty() {
            return Err(ChartError::InvalidArgument(
                "remove_series requires at least one series name".to_owned(),
            ));
        }

        let before = self.series_len();
        self.retain_series(|entry| {
            entry
                .name()
                .is_none_or(|name| !names.iter().any(|candidate| candidate.as_ref() == name))
        });
        let removed = before - self.series_len();
        trace!(removed, remaining = self.series_len(), "removed series");
        Ok(removed)
    }
}
