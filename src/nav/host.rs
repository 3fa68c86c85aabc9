// Host environment location - the externally visible "where are we" slot

/// Capability interface for the host environment's location.
///
/// The location store reads the starting path from here and pushes every
/// navigation back out, so the host stays bookmarkable and can traverse
/// its own history without reloading anything.
pub trait HostLocation {
    /// The path the host currently shows.
    fn location(&self) -> String;

    /// Record `path` as the new location without a reload.
    ///
    /// Any forward history is discarded, the way a browser history would.
    fn push(&mut self, path: &str);

    /// Step back in history. Returns the new location, or None at the start.
    fn back(&mut self) -> Option<String>;

    /// Step forward in history. Returns the new location, or None at the end.
    fn forward(&mut self) -> Option<String>;
}

/// In-process host location for the desktop build.
///
/// Keeps the whole history in memory; the process starts at whatever path
/// the config hands it and everything is gone on exit.
pub struct ProcessLocation {
    history: Vec<String>,
    history_index: usize,
}

impl ProcessLocation {
    pub fn new(start_path: impl Into<String>) -> Self {
        Self {
            history: vec![start_path.into()],
            history_index: 0,
        }
    }
}

impl HostLocation for ProcessLocation {
    fn location(&self) -> String {
        self.history[self.history_index].clone()
    }

    fn push(&mut self, path: &str) {
        // Remove any forward history when navigating to a new path
        self.history.truncate(self.history_index + 1);
        self.history.push(path.to_string());
        self.history_index += 1;
    }

    fn back(&mut self) -> Option<String> {
        if self.history_index > 0 {
            self.history_index -= 1;
            Some(self.history[self.history_index].clone())
        } else {
            None
        }
    }

    fn forward(&mut self) -> Option<String> {
        if self.history_index < self.history.len() - 1 {
            self.history_index += 1;
            Some(self.history[self.history_index].clone())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_given_path() {
        let host = ProcessLocation::new("/");
        assert_eq!(host.location(), "/");
    }

    #[test]
    fn push_updates_location() {
        let mut host = ProcessLocation::new("/");
        host.push("/jobs");
        assert_eq!(host.location(), "/jobs");
    }

    #[test]
    fn back_and_forward_walk_history() {
        let mut host = ProcessLocation::new("/");
        host.push("/jobs");
        host.push("/messaging");

        assert_eq!(host.back(), Some("/jobs".to_string()));
        assert_eq!(host.back(), Some("/".to_string()));
        assert_eq!(host.back(), None);
        assert_eq!(host.forward(), Some("/jobs".to_string()));
        assert_eq!(host.location(), "/jobs");
    }

    #[test]
    fn push_discards_forward_history() {
        let mut host = ProcessLocation::new("/");
        host.push("/jobs");
        host.back();
        host.push("/mynetwork");

        assert_eq!(host.forward(), None);
        assert_eq!(host.location(), "/mynetwork");
    }
}
